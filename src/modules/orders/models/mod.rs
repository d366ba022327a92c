pub mod order;
pub mod stock;

pub use order::{PaymentStatus, ProductRef, RawOrder, RawOrderItem};
pub use stock::StockSnapshot;
