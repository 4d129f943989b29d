use thiserror::Error;

use crate::color::ColorParseError;

/// Errors surfaced by the sheet outside of normal interaction
#[derive(Debug, Error)]
pub enum SheetError {
    /// A resolution outside the configured slider bounds was requested
    #[error("resolution {value} outside {min}..={max}")]
    ResolutionOutOfRange { value: u32, min: u32, max: u32 },

    /// The configuration is internally inconsistent
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read config file: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error(transparent)]
    Color(#[from] ColorParseError),
}

/// Result type for sheet operations
pub type SheetResult<T> = Result<T, SheetError>;
