use std::io;

use thiserror::Error;

/// Failures while reading, writing or editing the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),

    #[error("period must occur at least once per year, got {0}")]
    InvalidPeriod(u32),
}
