use income_config::PeriodLabels;
pub use income_config::{CurrencyDisplay, NegativeStyle};
use income_domain::rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Locale-aware number formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl LocaleConfig {
    /// Picks separators for a BCP 47 tag. Unknown languages use the en-US defaults.
    pub fn from_language_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let (decimal_separator, grouping_separator) = match language.as_str() {
            "de" | "es" | "it" | "pt" | "nl" => (',', '.'),
            "fr" => (',', ' '),
            _ => ('.', ','),
        };
        Self {
            language_tag: tag.to_string(),
            decimal_separator,
            grouping_separator,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormatOptions {
    pub currency_display: CurrencyDisplay,
    pub negative_style: NegativeStyle,
    pub screen_reader_mode: bool,
    /// Overrides the currency's minor units.
    pub precision: Option<u8>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            currency_display: CurrencyDisplay::Symbol,
            negative_style: NegativeStyle::Sign,
            screen_reader_mode: false,
            precision: None,
        }
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "CAD" => "CA$".into(),
        "AUD" => "A$".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Rounds half away from zero, then renders with locale separators.
pub fn format_number(locale: &LocaleConfig, value: Decimal, precision: u8) -> String {
    let rounded =
        value.round_dp_with_strategy(precision as u32, RoundingStrategy::MidpointAwayFromZero);
    let body = format!("{:.*}", precision as usize, rounded);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };
    let mut out = format!("{}{}", sign, group_digits(digits, locale.grouping_separator));
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator);
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

pub fn format_currency_value(
    amount: Decimal,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    options: &FormatOptions,
) -> String {
    let precision = options
        .precision
        .unwrap_or_else(|| minor_units_for(code.as_str()));
    let negative = amount.is_sign_negative() && !amount.is_zero();
    let mut body = format_number(locale, amount.abs(), precision);
    if negative {
        body = match options.negative_style {
            NegativeStyle::Sign => format!("-{}", body),
            NegativeStyle::Parentheses => format!("({})", body),
        };
    }
    let symbol = symbol_for(code.as_str());
    let formatted = match options.currency_display {
        CurrencyDisplay::Symbol => format!("{}{}", symbol, body),
        CurrencyDisplay::Code => format!("{} {}", code.as_str(), body),
        CurrencyDisplay::SymbolAndCode => format!("{}{} ({})", symbol, body, code.as_str()),
    };
    if options.screen_reader_mode && negative {
        format!(
            "minus {} {}",
            code.as_str(),
            formatted.replace(['-', '(', ')'], "")
        )
    } else if options.screen_reader_mode {
        format!("{} {}", code.as_str(), formatted)
    } else {
        formatted
    }
}

/// Renders an amount together with its period, e.g. `$2,500.00 per Month`.
pub fn format_periodic(
    amount: Decimal,
    period: u32,
    labels: &PeriodLabels,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    options: &FormatOptions,
) -> String {
    format!(
        "{} per {}",
        format_currency_value(amount, code, locale, options),
        labels.label(period)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn groups_thousands_and_pads_minor_units() {
        let locale = LocaleConfig::default();
        assert_eq!(format_number(&locale, dec!(1234567.5), 2), "1,234,567.50");
        assert_eq!(format_number(&locale, dec!(999), 2), "999.00");
        assert_eq!(format_number(&locale, dec!(-1234), 0), "-1,234");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        let locale = LocaleConfig::default();
        assert_eq!(format_number(&locale, dec!(461.535), 2), "461.54");
        assert_eq!(format_number(&locale, dec!(0.125), 2), "0.13");
    }

    #[test]
    fn formats_currency_with_locale() {
        let locale = LocaleConfig::from_language_tag("fr-FR");
        let options = FormatOptions {
            negative_style: NegativeStyle::Parentheses,
            ..FormatOptions::default()
        };
        let code = CurrencyCode::new("eur");
        let formatted = format_currency_value(dec!(-1234.5), &code, &locale, &options);
        assert_eq!(formatted, "€(1 234,50)");
    }

    #[test]
    fn screen_reader_mode_spells_sign() {
        let options = FormatOptions {
            screen_reader_mode: true,
            ..FormatOptions::default()
        };
        let formatted = format_currency_value(
            dec!(-20),
            &CurrencyCode::default(),
            &LocaleConfig::default(),
            &options,
        );
        assert_eq!(formatted, "minus USD $20.00");
    }

    #[test]
    fn periodic_amount_uses_configured_label() {
        let mut labels = PeriodLabels::default();
        labels.set(12, "Mes").unwrap();
        let rendered = format_periodic(
            dec!(2500),
            12,
            &labels,
            &CurrencyCode::default(),
            &LocaleConfig::default(),
            &FormatOptions::default(),
        );
        assert_eq!(rendered, "$2,500.00 per Mes");
    }
}
