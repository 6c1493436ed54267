//! Display names for pay periods, carried as configuration rather than a global table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const DEFAULT_LABELS: [(u32, &str); 6] = [
    (1, "Year"),
    (4, "Quarter"),
    (12, "Month"),
    (24, "Twice a month"),
    (26, "Every two weeks"),
    (52, "Week"),
];

/// Maps a period (occurrences per year) to the label shown next to amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodLabels(BTreeMap<u32, String>);

impl Default for PeriodLabels {
    fn default() -> Self {
        Self(
            DEFAULT_LABELS
                .iter()
                .map(|(period, label)| (*period, label.to_string()))
                .collect(),
        )
    }
}

impl PeriodLabels {
    /// A table with no entries; every period falls back to "N times per year".
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn label(&self, period: u32) -> String {
        self.0
            .get(&period)
            .cloned()
            .unwrap_or_else(|| format!("{period} times per year"))
    }

    pub fn set(&mut self, period: u32, label: impl Into<String>) -> Result<(), ConfigError> {
        if period == 0 {
            return Err(ConfigError::InvalidPeriod(period));
        }
        self.0.insert(period, label.into());
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.0.iter().map(|(period, label)| (*period, label.as_str()))
    }
}
