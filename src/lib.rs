pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::{console::TerminalConsole, payment::DummyPaymentGateway};
pub use crate::config::{cli::FileCatalogSource, toml_config::AppConfig};
pub use crate::core::{
    catalog::CatalogMatcher,
    shop::{GiftShop, ShopSettings},
};
pub use crate::domain::model::{
    GiftRecord, Order, OrderOutcome, RecordError, Requirements, ShippingInfo,
};
pub use crate::utils::error::{GiftError, Result};
