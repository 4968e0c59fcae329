use crate::core::CatalogSource;
use crate::utils::error::{GiftError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// 從本機 JSON 檔讀取禮品目錄
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalogSource {
    fn read_catalog(&self) -> Result<Vec<serde_json::Value>> {
        tracing::debug!("Reading catalog from {}", self.path.display());
        let content = fs::read_to_string(&self.path)?;

        match serde_json::from_str(&content)? {
            serde_json::Value::Array(items) => Ok(items),
            _ => Err(GiftError::CatalogFormatError {
                message: format!("{} must contain a JSON array of gifts", self.path.display()),
            }),
        }
    }
}
