use crate::utils::error::Result;

/// 提供原始目錄資料的來源（檔案、記憶體等）
pub trait CatalogSource {
    fn read_catalog(&self) -> Result<Vec<serde_json::Value>>;
}

pub trait Console {
    /// Shows `message` and returns the next line of input without its line ending.
    fn prompt(&mut self, message: &str) -> Result<String>;
    fn say(&mut self, message: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Approved,
    Declined,
}

pub trait PaymentGateway {
    fn charge(&mut self, amount: f64, card_number: &str) -> PaymentStatus;
}
