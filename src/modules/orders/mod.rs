pub mod models;

pub use models::{PaymentStatus, ProductRef, RawOrder, RawOrderItem, StockSnapshot};
