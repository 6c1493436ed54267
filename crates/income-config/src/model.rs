use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::PeriodLabels;

const DEFAULT_DIR_NAME: &str = ".income_core";
const HOME_ENV: &str = "INCOME_CORE_HOME";

/// Stores user-configurable rendering preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    /// Period amounts are reported in when none is requested. Defaults to monthly.
    #[serde(default = "Config::default_period_value")]
    pub default_period: u32,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_precision: Option<u8>,
    #[serde(default)]
    pub period_labels: PeriodLabels,
    #[serde(default)]
    pub currency_display: CurrencyDisplay,
    #[serde(default)]
    pub negative_style: NegativeStyle,
    #[serde(default)]
    pub accessibility: AccessibilitySettings,
}

/// How the currency is marked on a rendered amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyDisplay {
    #[default]
    Symbol,
    Code,
    SymbolAndCode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeStyle {
    #[default]
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilitySettings {
    /// Spell out currency codes and signs for screen readers.
    #[serde(default)]
    pub screen_reader_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            default_period: Self::default_period_value(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            currency_precision: None,
            period_labels: PeriodLabels::default(),
            currency_display: CurrencyDisplay::default(),
            negative_style: NegativeStyle::default(),
            accessibility: AccessibilitySettings::default(),
        }
    }
}

impl Config {
    pub fn default_period_value() -> u32 {
        12
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Application data directory: `$INCOME_CORE_HOME`, else `~/.income_core`.
    pub fn resolve_base_dir() -> PathBuf {
        if let Some(custom) = std::env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }
}
