//! income-config
//!
//! Persistent user preferences for rendering financial statements.
//! Owns the Config data structure, the period label table, and disk persistence helpers.

pub mod error;
pub mod labels;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use labels::PeriodLabels;
pub use manager::ConfigManager;
pub use model::{AccessibilitySettings, Config, CurrencyDisplay, NegativeStyle};
