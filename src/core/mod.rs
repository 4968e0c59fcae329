pub mod catalog;
pub mod shop;

pub use crate::domain::model::{GiftRecord, Order, OrderOutcome, Requirements, ShippingInfo};
pub use crate::domain::ports::{CatalogSource, Console, PaymentGateway, PaymentStatus};
pub use crate::utils::error::Result;
