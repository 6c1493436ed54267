//! Pay periods expressed as occurrences per year.

use rust_decimal::Decimal;
use serde::{de::Error as _, Deserialize, Deserializer};

use crate::DomainError;

pub const YEARLY: u32 = 1;
pub const QUARTERLY: u32 = 4;
pub const MONTHLY: u32 = 12;
pub const SEMI_MONTHLY: u32 = 24;
pub const BIWEEKLY: u32 = 26;
pub const WEEKLY: u32 = 52;

/// Converts `magnitude`, entered once every `1/period` of a year, into the amount
/// accrued over `1/period_to_use` of a year.
///
/// Asking for period 0 yields zero instead of dividing by zero. Results outside the
/// decimal range are [`DomainError::Overflow`].
pub fn convert(magnitude: Decimal, period: u32, period_to_use: u32) -> Result<Decimal, DomainError> {
    if period_to_use == 0 {
        return Ok(Decimal::ZERO);
    }
    let period = Decimal::from(period);
    let period_to_use = Decimal::from(period_to_use);
    magnitude
        .checked_mul(period)
        .and_then(|scaled| scaled.checked_div(period_to_use))
        .or_else(|| {
            magnitude
                .checked_div(period_to_use)
                .and_then(|share| share.checked_mul(period))
        })
        .ok_or(DomainError::Overflow {
            operation: "period conversion",
        })
}

/// Adds `amount` to `total`, reporting overflow instead of panicking.
pub fn checked_sum(total: Decimal, amount: Decimal) -> Result<Decimal, DomainError> {
    total
        .checked_add(amount)
        .ok_or(DomainError::Overflow { operation: "sum" })
}

/// Reads an optional period, rejecting zero the same way attribute filling does.
pub(crate) fn deserialize_period<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<u32>::deserialize(deserializer)? {
        Some(0) => Err(D::Error::custom("period must be at least 1")),
        other => Ok(other),
    }
}
