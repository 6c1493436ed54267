use std::fmt;

use income_domain::{
    period::checked_sum, rust_decimal::Decimal, DomainError, Periodic, Tagged, TypeFilter,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{IncomeError, Result};
use crate::gather::Gatherer;

/// Ordered entries of one element type, gathered from the host on first full read.
pub struct TypedList<T> {
    items: Vec<T>,
    pending: Option<Box<dyn Gatherer<T>>>,
}

impl<T> TypedList<T> {
    /// An empty list that is already complete.
    pub fn new() -> Self {
        Self::from_items(Vec::new())
    }

    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            items,
            pending: None,
        }
    }

    /// A list whose entries are supplied by `gatherer` the first time they are all needed.
    pub fn with_gatherer(gatherer: impl Gatherer<T> + 'static) -> Self {
        Self {
            items: Vec::new(),
            pending: Some(Box::new(gatherer)),
        }
    }

    /// Marks the list pending again; `gatherer` runs before the next full read and
    /// sees the entries already held.
    pub fn set_gatherer(&mut self, gatherer: impl Gatherer<T> + 'static) {
        self.pending = Some(Box::new(gatherer));
    }

    pub fn is_gathered(&self) -> bool {
        self.pending.is_none()
    }

    /// Runs the pending gatherer, if any. A failed gather leaves the list pending.
    pub fn gather(&mut self) -> Result<()> {
        let Some(mut gatherer) = self.pending.take() else {
            return Ok(());
        };
        tracing::info!(entries = self.items.len(), "gathering list entries");
        if let Err(err) = gatherer.gather(&mut self.items) {
            tracing::warn!(error = %err, "gather did not complete");
            self.pending = Some(gatherer);
            return Err(IncomeError::Gather(err));
        }
        Ok(())
    }

    /// All entries, gathering first when needed.
    pub fn gathered(&mut self) -> Result<&[T]> {
        self.gather()?;
        Ok(&self.items)
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Number of entries held so far; does not gather.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries held so far; does not gather.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Sums `accessor` over gathered entries matching `filter`. Entries for which the
    /// accessor yields `None` are skipped.
    pub(crate) fn sum_matching<F>(
        &mut self,
        filter: &TypeFilter,
        measure: &'static str,
        mut accessor: F,
    ) -> Result<Decimal>
    where
        T: Tagged,
        F: FnMut(&T) -> std::result::Result<Option<Decimal>, DomainError>,
    {
        self.gather()?;
        let mut total = Decimal::ZERO;
        for item in self.items.iter().filter(|item| filter.matches(item.kind())) {
            if let Some(amount) = accessor(item)? {
                total = checked_sum(total, amount)?;
            }
        }
        tracing::debug!(measure, filter = ?filter, total = %total, "computed list total");
        Ok(total)
    }
}

impl<T: Tagged> TypedList<T> {
    /// Distinct type tags present, in first-seen order.
    pub fn types(&mut self) -> Result<Vec<String>> {
        self.gather()?;
        Ok(distinct(self.items.iter().filter_map(Tagged::kind)))
    }

    /// Distinct owners present, in first-seen order.
    pub fn owners(&mut self) -> Result<Vec<String>> {
        self.owners_of(&TypeFilter::All)
    }

    /// Distinct owners of the entries matching `filter`.
    pub fn owners_of(&mut self, filter: &TypeFilter) -> Result<Vec<String>> {
        self.gather()?;
        Ok(distinct(
            self.items
                .iter()
                .filter(|item| filter.matches(item.kind()))
                .filter_map(Tagged::owner),
        ))
    }
}

impl<T: Tagged + Clone> TypedList<T> {
    /// A complete list holding copies of the entries matching `filter`.
    pub fn matches(&mut self, filter: impl Into<TypeFilter>) -> Result<TypedList<T>> {
        let filter = filter.into();
        self.gather()?;
        Ok(TypedList::from_items(
            self.items
                .iter()
                .filter(|item| filter.matches(item.kind()))
                .cloned()
                .collect(),
        ))
    }

    /// A complete list holding copies of the entries held by `owner`.
    pub fn owned_by(&mut self, owner: &str) -> Result<TypedList<T>> {
        self.gather()?;
        Ok(TypedList::from_items(
            self.items
                .iter()
                .filter(|item| item.owner() == Some(owner))
                .cloned()
                .collect(),
        ))
    }
}

impl<T: Periodic> TypedList<T> {
    /// Sum of `amount(period_to_use)` over entries whose type matches `filter`.
    ///
    /// Period 0 yields zero once the list is gathered. Entries without an amount
    /// (see [`Periodic::has_amount`]) are skipped.
    pub fn total(&mut self, period_to_use: u32, filter: impl Into<TypeFilter>) -> Result<Decimal> {
        let filter = filter.into();
        self.gather()?;
        if period_to_use == 0 {
            return Ok(Decimal::ZERO);
        }
        self.sum_matching(&filter, "amount", |item| {
            if !item.has_amount() {
                tracing::warn!(kind = ?item.kind(), "skipping entry without an amount");
                return Ok(None);
            }
            item.amount(period_to_use).map(Some)
        })
    }
}

impl<T> Default for TypedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for TypedList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_items(items)
    }
}

impl<T> FromIterator<T> for TypedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a TypedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for TypedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedList")
            .field("items", &self.items)
            .field("gathered", &self.is_gathered())
            .finish()
    }
}

impl<T: Serialize> Serialize for TypedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for TypedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from_items)
    }
}

fn distinct<'a>(tags: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for tag in tags {
        if !seen.iter().any(|existing| existing == tag) {
            seen.push(tag.to_string());
        }
    }
    seen
}
