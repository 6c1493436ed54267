//! Shared traits and the type filter used by every financial entity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::DomainError;

/// Exposes a stable identifier for entities gathered during an interview.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Category and ownership tags used purely for filtering totals.
pub trait Tagged {
    fn kind(&self) -> Option<&str>;
    fn owner(&self) -> Option<&str>;
}

/// An amount that recurs `period` times per year and converts to any other period.
pub trait Periodic: Tagged {
    /// Amount accrued over `1/period_to_use` of a year. Period 0 yields zero.
    fn amount(&self, period_to_use: u32) -> Result<Decimal, DomainError>;

    /// Whether the entity carries an amount at all. Totals skip entities that do not.
    fn has_amount(&self) -> bool {
        true
    }
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Selects entries by their type tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeFilter {
    #[default]
    All,
    One(String),
    AnyOf(Vec<String>),
}

impl TypeFilter {
    pub fn one(tag: impl Into<String>) -> Self {
        TypeFilter::One(tag.into())
    }

    pub fn any_of<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TypeFilter::AnyOf(tags.into_iter().map(Into::into).collect())
    }

    /// Untagged entries only match [`TypeFilter::All`].
    pub fn matches(&self, tag: Option<&str>) -> bool {
        match (self, tag) {
            (TypeFilter::All, _) => true,
            (_, None) => false,
            (TypeFilter::One(expected), Some(tag)) => expected == tag,
            (TypeFilter::AnyOf(tags), Some(tag)) => tags.iter().any(|t| t == tag),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, TypeFilter::All)
    }

    /// Reads a filter from loosely typed input. Anything other than null, a string,
    /// or an array of strings is rejected.
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        match value {
            Value::Null => Ok(TypeFilter::All),
            Value::String(tag) => Ok(TypeFilter::One(tag.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(tag) => Ok(tag.clone()),
                    other => Err(DomainError::TypeMismatch(format!(
                        "expected a string tag, found {other}"
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(TypeFilter::AnyOf),
            other => Err(DomainError::TypeMismatch(format!(
                "expected null, a tag, or a list of tags, found {other}"
            ))),
        }
    }
}

impl From<&str> for TypeFilter {
    fn from(tag: &str) -> Self {
        TypeFilter::One(tag.to_string())
    }
}

impl From<String> for TypeFilter {
    fn from(tag: String) -> Self {
        TypeFilter::One(tag)
    }
}

impl From<Vec<String>> for TypeFilter {
    fn from(tags: Vec<String>) -> Self {
        TypeFilter::AnyOf(tags)
    }
}

impl<T: Into<TypeFilter>> From<Option<T>> for TypeFilter {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

pub(crate) fn tag_label(kind: Option<&str>, owner: Option<&str>, fallback: &str) -> String {
    let name = kind.unwrap_or(fallback);
    match owner {
        Some(owner) => format!("{name} ({owner})"),
        None => name.to_string(),
    }
}
