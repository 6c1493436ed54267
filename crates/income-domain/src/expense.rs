//! Recurring household expenses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attribute::{period_from_decimal, Attribute, Fillable};
use crate::common::*;
use crate::error::DomainError;
use crate::period;

const ENTITY: &str = "expense";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
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
    #[serde(default)]
    pub value: Option<Decimal>,
    #[serde(default, deserialize_with = "period::deserialize_period")]
    pub period: Option<u32>,
}

impl Expense {
    pub fn new(kind: impl Into<String>, value: Decimal, period: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: Some(kind.into()),
            owner: None,
            value: Some(value),
            period: Some(period),
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Tagged for Expense {
    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }
}

impl Periodic for Expense {
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
}

impl Fillable for Expense {
    fn missing_attributes(&self) -> Vec<Attribute> {
        [
            (self.value.is_none(), Attribute::Value),
            (self.period.is_none(), Attribute::Period),
        ]
        .into_iter()
        .filter_map(|(missing, attribute)| missing.then_some(attribute))
        .collect()
    }

    fn fill(&mut self, attribute: Attribute, value: Decimal) -> Result<(), DomainError> {
        match attribute {
            Attribute::Value => self.value = Some(value),
            Attribute::Period => self.period = Some(period_from_decimal(value)?),
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

impl Displayable for Expense {
    fn display_label(&self) -> String {
        tag_label(self.kind(), self.owner(), "Expense")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::{MONTHLY, QUARTERLY, YEARLY};
    use rust_decimal_macros::dec;

    #[test]
    fn quarterly_tax_as_monthly() {
        let expense = Expense::new("property_tax", dec!(900), QUARTERLY);
        assert_eq!(expense.amount(MONTHLY), Ok(dec!(300)));
        assert_eq!(expense.amount(YEARLY), Ok(dec!(3600)));
    }

    #[test]
    fn missing_period_is_reported() {
        let mut expense = Expense::new("rent", dec!(1100), MONTHLY);
        expense.period = None;
        assert_eq!(expense.missing_attributes(), vec![Attribute::Period]);
        assert!(expense.amount(MONTHLY).is_err());
    }
}
