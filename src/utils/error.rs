use crate::domain::model::RecordError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GiftError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid catalog record at position {index}: {source}")]
    ValidationError {
        index: usize,
        #[source]
        source: RecordError,
    },

    #[error("Catalog format error: {message}")]
    CatalogFormatError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input error: {message}")]
    InputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Catalog,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GiftError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GiftError::IoError(_) => ErrorCategory::Io,
            GiftError::SerializationError(_)
            | GiftError::ValidationError { .. }
            | GiftError::CatalogFormatError { .. } => ErrorCategory::Catalog,
            GiftError::ConfigValidationError { .. }
            | GiftError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            GiftError::InputError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Catalog => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GiftError::IoError(_) => {
                "Check that the catalog and config files exist and are readable".to_string()
            }
            GiftError::SerializationError(_) => {
                "Make sure the catalog file is valid JSON".to_string()
            }
            GiftError::ValidationError { index, .. } => format!(
                "Fix catalog entry #{} (zero-based) and restart; every entry needs id, name, occasions, age_min, age_max, genders, price and description",
                index
            ),
            GiftError::CatalogFormatError { .. } => {
                "The catalog must be a JSON array of gift objects".to_string()
            }
            GiftError::ConfigValidationError { field, .. }
            | GiftError::InvalidConfigValueError { field, .. } => {
                format!("Review the '{}' setting in your configuration", field)
            }
            GiftError::InputError { .. } => "Run the tool again from an interactive terminal".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GiftError::IoError(e) => format!("Could not read a required file: {}", e),
            GiftError::SerializationError(e) => format!("The gift catalog could not be parsed: {}", e),
            GiftError::ValidationError { index, source } => {
                format!("Gift catalog entry #{} is invalid: {}", index, source)
            }
            GiftError::CatalogFormatError { message } => format!("The gift catalog is malformed: {}", message),
            GiftError::ConfigValidationError { .. } | GiftError::InvalidConfigValueError { .. } => format!("Configuration problem: {}", self),
            GiftError::InputError { message } => format!("Could not read your answer: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, GiftError>;
