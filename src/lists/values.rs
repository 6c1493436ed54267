use income_domain::{rust_decimal::Decimal, SimpleValue, TypeFilter};
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::gather::Gatherer;
use crate::lists::TypedList;

/// One-off amounts with no period.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueList {
    list: TypedList<SimpleValue>,
}

impl ValueList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<SimpleValue>) -> Self {
        Self {
            list: TypedList::from_items(items),
        }
    }

    pub fn with_gatherer(gatherer: impl Gatherer<SimpleValue> + 'static) -> Self {
        Self {
            list: TypedList::with_gatherer(gatherer),
        }
    }

    pub fn push(&mut self, value: SimpleValue) {
        self.list.push(value);
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SimpleValue> {
        self.list.iter()
    }

    pub fn types(&mut self) -> Result<Vec<String>> {
        self.list.types()
    }

    pub fn owners(&mut self) -> Result<Vec<String>> {
        self.list.owners()
    }

    /// Sum of matching values.
    pub fn total(&mut self, filter: impl Into<TypeFilter>) -> Result<Decimal> {
        self.list
            .sum_matching(&filter.into(), "value", |value: &SimpleValue| {
                value.amount().map(Some)
            })
    }

    pub fn as_list_mut(&mut self) -> &mut TypedList<SimpleValue> {
        &mut self.list
    }
}
