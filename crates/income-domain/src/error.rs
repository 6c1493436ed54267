use rust_decimal::Decimal;
use thiserror::Error;

use crate::attribute::Attribute;

/// Failures raised while reading or filling entity data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The attribute was never supplied. Absent is not zero.
    #[error("{entity} is missing `{attribute}`")]
    MissingAttribute {
        entity: &'static str,
        attribute: Attribute,
    },
    #[error("{entity} has no `{attribute}` attribute")]
    UnsupportedAttribute {
        entity: &'static str,
        attribute: Attribute,
    },
    #[error("`{attribute}` cannot hold {value}")]
    InvalidAttribute { attribute: Attribute, value: Decimal },
    #[error("{operation} exceeds the supported decimal range")]
    Overflow { operation: &'static str },
    #[error("type filter has unexpected shape: {0}")]
    TypeMismatch(String),
}

impl DomainError {
    pub fn missing(entity: &'static str, attribute: Attribute) -> Self {
        DomainError::MissingAttribute { entity, attribute }
    }
}
