use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attribute::{Attribute, Fillable};
use crate::common::*;
use crate::error::DomainError;

const ENTITY: &str = "value";

/// A one-off amount with no period, such as a lump-sum payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleValue {
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
}

impl SimpleValue {
    pub fn new(kind: impl Into<String>, value: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: Some(kind.into()),
            owner: None,
            value: Some(value),
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn amount(&self) -> Result<Decimal, DomainError> {
        self.value
            .ok_or(DomainError::missing(ENTITY, Attribute::Value))
    }
}

impl Identifiable for SimpleValue {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Tagged for SimpleValue {
    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }
}

impl Fillable for SimpleValue {
    fn missing_attributes(&self) -> Vec<Attribute> {
        self.value
            .is_none()
            .then_some(Attribute::Value)
            .into_iter()
            .collect()
    }

    fn fill(&mut self, attribute: Attribute, value: Decimal) -> Result<(), DomainError> {
        if attribute != Attribute::Value {
            return Err(DomainError::UnsupportedAttribute {
                entity: ENTITY,
                attribute,
            });
        }
        self.value = Some(value);
        Ok(())
    }
}

impl Displayable for SimpleValue {
    fn display_label(&self) -> String {
        tag_label(self.kind(), self.owner(), "Value")
    }
}
