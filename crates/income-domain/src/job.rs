//! Employment income with both gross and take-home amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attribute::{period_from_decimal, Attribute, Fillable};
use crate::common::*;
use crate::error::DomainError;
use crate::income::Compensation;
use crate::period;

const ENTITY: &str = "job";

/// A job. Gross pay comes from the compensation (stated or hourly); `net` is the
/// amount left per period after deductions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer: Option<String>,
    #[serde(default, deserialize_with = "period::deserialize_period")]
    pub period: Option<u32>,
    #[serde(default)]
    pub compensation: Compensation,
    #[serde(default)]
    pub net: Option<Decimal>,
}

impl Job {
    pub fn new(gross: Decimal, net: Decimal, period: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: Some("wages".into()),
            owner: None,
            employer: None,
            period: Some(period),
            compensation: Compensation::Periodic { value: Some(gross) },
            net: Some(net),
        }
    }

    pub fn hourly(hourly_rate: Decimal, hours_per_period: Decimal, net: Decimal, period: u32) -> Self {
        Self {
            compensation: Compensation::Hourly {
                hourly_rate: Some(hourly_rate),
                hours_per_period: Some(hours_per_period),
            },
            ..Self::new(Decimal::ZERO, net, period)
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_employer(mut self, employer: impl Into<String>) -> Self {
        self.employer = Some(employer.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn is_hourly(&self) -> bool {
        self.compensation.is_hourly()
    }

    /// Gross pay for one period.
    pub fn gross(&self) -> Result<Decimal, DomainError> {
        self.compensation.magnitude(ENTITY)
    }

    pub fn period(&self) -> Result<u32, DomainError> {
        self.period
            .ok_or(DomainError::missing(ENTITY, Attribute::Period))
    }

    pub fn gross_amount(&self, period_to_use: u32) -> Result<Decimal, DomainError> {
        if period_to_use == 0 {
            return Ok(Decimal::ZERO);
        }
        period::convert(self.gross()?, self.period()?, period_to_use)
    }

    pub fn net_amount(&self, period_to_use: u32) -> Result<Decimal, DomainError> {
        if period_to_use == 0 {
            return Ok(Decimal::ZERO);
        }
        let net = self
            .net
            .ok_or(DomainError::missing(ENTITY, Attribute::Net))?;
        period::convert(net, self.period()?, period_to_use)
    }
}

impl Identifiable for Job {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Tagged for Job {
    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }
}

impl Periodic for Job {
    fn amount(&self, period_to_use: u32) -> Result<Decimal, DomainError> {
        self.gross_amount(period_to_use)
    }
}

impl Fillable for Job {
    fn missing_attributes(&self) -> Vec<Attribute> {
        let mut missing = self.compensation.missing_attributes();
        if self.net.is_none() {
            missing.push(Attribute::Net);
        }
        if self.period.is_none() {
            missing.push(Attribute::Period);
        }
        missing
    }

    fn fill(&mut self, attribute: Attribute, value: Decimal) -> Result<(), DomainError> {
        match attribute {
            Attribute::Period => self.period = Some(period_from_decimal(value)?),
            Attribute::Net => self.net = Some(value),
            other => return self.compensation.fill(ENTITY, other, value),
        }
        Ok(())
    }
}

impl Displayable for Job {
    fn display_label(&self) -> String {
        tag_label(self.employer.as_deref().or(self.kind()), self.owner(), "Job")
    }
}
