use thiserror::Error;

use crate::variant::Variant;

/// Common error type for Moodlet components.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Style table has no entry for variant '{variant}'")]
    IncompleteStyleTable { variant: Variant },
}

/// Result type alias using Moodlet's Error.
pub type Result<T> = std::result::Result<T, Error>;
