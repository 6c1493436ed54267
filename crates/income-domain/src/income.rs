//! Income received on a schedule, either as a stated amount or as hourly pay.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attribute::{period_from_decimal, Attribute, Fillable};
use crate::common::*;
use crate::error::DomainError;
use crate::period;

const ENTITY: &str = "income";

/// How the per-period magnitude of an income is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum Compensation {
    Periodic {
        #[serde(default)]
        value: Option<Decimal>,
    },
    /// `hours_per_period` is counted per `period`; to express hours per week use period 52.
    Hourly {
        #[serde(default)]
        hourly_rate: Option<Decimal>,
        #[serde(default)]
        hours_per_period: Option<Decimal>,
    },
}

impl Default for Compensation {
    fn default() -> Self {
        Compensation::Periodic { value: None }
    }
}

impl Compensation {
    pub fn is_hourly(&self) -> bool {
        matches!(self, Compensation::Hourly { .. })
    }

    /// Amount earned in one period.
    pub fn magnitude(&self, entity: &'static str) -> Result<Decimal, DomainError> {
        match self {
            Compensation::Periodic { value } => {
                value.ok_or(DomainError::missing(entity, Attribute::Value))
            }
            Compensation::Hourly {
                hourly_rate,
                hours_per_period,
            } => {
                let rate = hourly_rate.ok_or(DomainError::missing(entity, Attribute::HourlyRate))?;
                let hours =
                    hours_per_period.ok_or(DomainError::missing(entity, Attribute::HoursPerPeriod))?;
                rate.checked_mul(hours).ok_or(DomainError::Overflow {
                    operation: "hourly pay",
                })
            }
        }
    }

    pub(crate) fn missing_attributes(&self) -> Vec<Attribute> {
        match self {
            Compensation::Periodic { value } => {
                value.is_none().then_some(Attribute::Value).into_iter().collect()
            }
            Compensation::Hourly {
                hourly_rate,
                hours_per_period,
            } => [
                (hourly_rate.is_none(), Attribute::HourlyRate),
                (hours_per_period.is_none(), Attribute::HoursPerPeriod),
            ]
            .into_iter()
            .filter_map(|(missing, attribute)| missing.then_some(attribute))
            .collect(),
        }
    }

    pub(crate) fn fill(
        &mut self,
        entity: &'static str,
        attribute: Attribute,
        amount: Decimal,
    ) -> Result<(), DomainError> {
        match (self, attribute) {
            (Compensation::Periodic { value }, Attribute::Value) => *value = Some(amount),
            (Compensation::Hourly { hourly_rate, .. }, Attribute::HourlyRate) => {
                *hourly_rate = Some(amount)
            }
            (
                Compensation::Hourly {
                    hours_per_period, ..
                },
                Attribute::HoursPerPeriod,
            ) => *hours_per_period = Some(amount),
            _ => return Err(DomainError::UnsupportedAttribute { entity, attribute }),
        }
        Ok(())
    }
}

/// A source of income such as wages, benefits or support payments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(
        default,
        rename = "type",
        alias = "kind",
        alias = "source",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, deserialize_with = "period::deserialize_period")]
    pub period: Option<u32>,
    #[serde(default)]
    pub compensation: Compensation,
}

impl Income {
    /// Creates an income of `value` received `period` times per year.
    pub fn new(kind: impl Into<String>, value: Decimal, period: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: Some(kind.into()),
            owner: None,
            period: Some(period),
            compensation: Compensation::Periodic { value: Some(value) },
        }
    }

    /// Creates an hourly income; `hours_per_period` are worked each `period`.
    pub fn hourly(
        kind: impl Into<String>,
        hourly_rate: Decimal,
        hours_per_period: Decimal,
        period: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: Some(kind.into()),
            owner: None,
            period: Some(period),
            compensation: Compensation::Hourly {
                hourly_rate: Some(hourly_rate),
                hours_per_period: Some(hours_per_period),
            },
        }
    }

    /// An income whose attributes have not been supplied yet.
    pub fn pending(kind: Option<String>, compensation: Compensation) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            owner: None,
            period: None,
            compensation,
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn is_hourly(&self) -> bool {
        self.compensation.is_hourly()
    }

    /// Replaces the compensation with a stated per-period value.
    pub fn set_value(&mut self, value: Decimal) {
        self.compensation = Compensation::Periodic { value: Some(value) };
    }

    pub fn period(&self) -> Result<u32, DomainError> {
        self.period
            .ok_or(DomainError::missing(ENTITY, Attribute::Period))
    }
}

impl Identifiable for Income {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Tagged for Income {
    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }
}

impl Periodic for Income {
    fn amount(&self, period_to_use: u32) -> Result<Decimal, DomainError> {
        if period_to_use == 0 {
            return Ok(Decimal::ZERO);
        }
        let magnitude = self.compensation.magnitude(ENTITY)?;
        period::convert(magnitude, self.period()?, period_to_use)
    }
}

impl Fillable for Income {
    fn missing_attributes(&self) -> Vec<Attribute> {
        let mut missing = self.compensation.missing_attributes();
        if self.period.is_none() {
            missing.push(Attribute::Period);
        }
        missing
    }

    fn fill(&mut self, attribute: Attribute, value: Decimal) -> Result<(), DomainError> {
        match attribute {
            Attribute::Period => {
                self.period = Some(period_from_decimal(value)?);
                Ok(())
            }
            other => self.compensation.fill(ENTITY, other, value),
        }
    }
}

impl Displayable for Income {
    fn display_label(&self) -> String {
        tag_label(self.kind(), self.owner(), "Income")
    }
}
