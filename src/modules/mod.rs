pub mod filters;
pub mod orders;
pub mod renderers;
pub mod reports;
