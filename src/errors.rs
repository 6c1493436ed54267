use income_config::ConfigError;
use income_domain::DomainError;
use thiserror::Error;

use crate::gather::GatherError;

/// Error type that captures failures across the statement workflow.
#[derive(Debug, Error)]
pub enum IncomeError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Gather(#[from] GatherError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, IncomeError>;
