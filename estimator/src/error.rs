//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Malformed form input. Surfaced to the user as a validation message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidProfile {
    #[error("age must be a whole number of years between 0 and the accepted maximum, got {0:?}")]
    Age(String),
    #[error("unknown gender {0:?}, expected male or female")]
    Gender(String),
    #[error("unknown food {0:?}, expected salad, rice, sandwich, pizza or friedchicken")]
    Food(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
