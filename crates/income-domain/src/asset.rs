//! Assets: accounts, vehicles, property and the income they may produce.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attribute::{period_from_decimal, Attribute, Fillable};
use crate::common::*;
use crate::error::DomainError;
use crate::period;

const ENTITY: &str = "asset";

/// Something a household owns. `value` is the income the asset produces each
/// period (interest, rent) and is frequently absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
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
    pub value: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "period::deserialize_period",
        skip_serializing_if = "Option::is_none"
    )]
    pub period: Option<u32>,
    #[serde(default)]
    pub market_value: Option<Decimal>,
    #[serde(default)]
    pub balance: Option<Decimal>,
}

impl Asset {
    pub fn new(kind: impl Into<String>, market_value: Decimal, balance: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: Some(kind.into()),
            owner: None,
            value: None,
            period: None,
            market_value: Some(market_value),
            balance: Some(balance),
        }
    }

    /// Records income produced by the asset, `value` received `period` times per year.
    pub fn with_income(mut self, value: Decimal, period: u32) -> Self {
        self.value = Some(value);
        self.period = Some(period);
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn market_value(&self) -> Result<Decimal, DomainError> {
        self.market_value
            .ok_or(DomainError::missing(ENTITY, Attribute::MarketValue))
    }

    pub fn balance(&self) -> Result<Decimal, DomainError> {
        self.balance
            .ok_or(DomainError::missing(ENTITY, Attribute::Balance))
    }

    /// Market value less what is still owed on the asset.
    pub fn equity(&self) -> Result<Decimal, DomainError> {
        self.market_value()?
            .checked_sub(self.balance()?)
            .ok_or(DomainError::Overflow { operation: "equity" })
    }
}

impl Identifiable for Asset {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Tagged for Asset {
    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }
}

impl Periodic for Asset {
    fn amount(&self, period_to_use: u32) -> Result<Decimal, DomainError> {
        if period_to_use == 0 {
            return Ok(Decimal::ZERO);
        }
        let value = self
            .value
            .ok_or(DomainError::missing(ENTITY, Attribute::Value))?;
        let period = self
            .period
            .ok_or(DomainError::missing(ENTITY, Attribute::Period))?;
        period::convert(value, period, period_to_use)
    }

    fn has_amount(&self) -> bool {
        self.value.is_some()
    }
}

impl Fillable for Asset {
    fn missing_attributes(&self) -> Vec<Attribute> {
        let mut missing = Vec::new();
        if self.market_value.is_none() {
            missing.push(Attribute::MarketValue);
        }
        if self.balance.is_none() {
            missing.push(Attribute::Balance);
        }
        if self.value.is_some() && self.period.is_none() {
            missing.push(Attribute::Period);
        }
        missing
    }

    fn fill(&mut self, attribute: Attribute, value: Decimal) -> Result<(), DomainError> {
        match attribute {
            Attribute::Value => self.value = Some(value),
            Attribute::Period => self.period = Some(period_from_decimal(value)?),
            Attribute::MarketValue => self.market_value = Some(value),
            Attribute::Balance => self.balance = Some(value),
            attribute => {
                return Err(DomainError::UnsupportedAttribute {
                    entity: ENTITY,
                    attribute,
                })
            }
        }
        Ok(())
    }
}

impl Displayable for Asset {
    fn display_label(&self) -> String {
        tag_label(self.kind(), self.owner(), "Asset")
    }
}
