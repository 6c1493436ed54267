//! Names of the attributes an interview may still have to supply.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Value,
    Period,
    HourlyRate,
    HoursPerPeriod,
    Net,
    MarketValue,
    Balance,
}

impl Attribute {
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Value => "value",
            Attribute::Period => "period",
            Attribute::HourlyRate => "hourly_rate",
            Attribute::HoursPerPeriod => "hours_per_period",
            Attribute::Net => "net",
            Attribute::MarketValue => "market_value",
            Attribute::Balance => "balance",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Entities whose unset attributes can be supplied after construction.
pub trait Fillable {
    /// Attributes that must be supplied before the entity's amounts can be computed.
    fn missing_attributes(&self) -> Vec<Attribute>;

    /// Stores `value` into `attribute`.
    fn fill(&mut self, attribute: Attribute, value: Decimal) -> Result<(), DomainError>;
}

/// Converts a resolved decimal into a period count. Periods are positive whole numbers.
pub(crate) fn period_from_decimal(value: Decimal) -> Result<u32, DomainError> {
    let invalid = DomainError::InvalidAttribute {
        attribute: Attribute::Period,
        value,
    };
    if !value.fract().is_zero() {
        return Err(invalid);
    }
    match value.to_u32() {
        Some(period) if period > 0 => Ok(period),
        _ => Err(invalid),
    }
}
