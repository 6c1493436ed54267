use std::fmt;
use std::io::{self, Write};

use colored::Colorize;
use income_config::{Config, PeriodLabels};
use income_domain::rust_decimal::Decimal;

use crate::currency::{
    format_currency_value, format_periodic, CurrencyCode, FormatOptions, LocaleConfig,
};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Section,
}

fn apply_style(kind: MessageKind, message: impl fmt::Display, color: bool) -> String {
    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Warning => format!("WARNING: {text}"),
        MessageKind::Info | MessageKind::Success => text,
    };

    if !color {
        return formatted;
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

/// Writes styled lines to any sink so commands stay testable.
pub struct Printer<'a> {
    out: &'a mut dyn Write,
    color: bool,
}

impl<'a> Printer<'a> {
    pub fn new(out: &'a mut dyn Write, color: bool) -> Self {
        Self { out, color }
    }

    pub fn print(&mut self, kind: MessageKind, message: impl fmt::Display) -> io::Result<()> {
        let formatted = apply_style(kind, message, self.color);
        writeln!(self.out, "{formatted}")
    }

    pub fn info(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Info, message)
    }

    pub fn success(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Success, message)
    }

    pub fn warning(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Warning, message)
    }

    pub fn section(&mut self, title: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Section, title)
    }

    /// A left-aligned label followed by its value.
    pub fn row(&mut self, label: &str, value: impl fmt::Display) -> io::Result<()> {
        self.info(format!("{label:<24}{value}"))
    }

    pub fn raw(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }
}

/// Renders amounts with the configured currency, locale and period labels.
#[derive(Debug, Clone)]
pub struct AmountRenderer {
    code: CurrencyCode,
    locale: LocaleConfig,
    options: FormatOptions,
    labels: PeriodLabels,
}

impl AmountRenderer {
    pub fn from_config(config: &Config) -> Self {
        Self {
            code: CurrencyCode::new(config.currency.as_str()),
            locale: LocaleConfig::from_language_tag(&config.locale),
            options: FormatOptions {
                currency_display: config.currency_display,
                negative_style: config.negative_style,
                screen_reader_mode: config.accessibility.screen_reader_mode,
                precision: config.currency_precision,
            },
            labels: config.period_labels.clone(),
        }
    }

    pub fn value(&self, amount: Decimal) -> String {
        format_currency_value(amount, &self.code, &self.locale, &self.options)
    }

    pub fn periodic(&self, amount: Decimal, period: u32) -> String {
        format_periodic(
            amount,
            period,
            &self.labels,
            &self.code,
            &self.locale,
            &self.options,
        )
    }

    pub fn period_label(&self, period: u32) -> String {
        self.labels.label(period)
    }
}
