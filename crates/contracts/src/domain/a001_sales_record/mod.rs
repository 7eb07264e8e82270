pub mod record;

pub use record::{Product, Region, SaleStatus, SalesRecord, MONTH_NAMES};
