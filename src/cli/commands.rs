use std::io::Write;
use std::path::PathBuf;

use income_config::{Config, ConfigManager};
use income_domain::rust_decimal::Decimal;

use crate::cli::args::{
    Cli, Command, ConfigArgs, ListKind, OptionListKind, OptionsArgs, SummaryArgs, TotalArgs,
    YearsArgs,
};
use crate::cli::output::{AmountRenderer, Printer};
use crate::errors::{IncomeError, Result};
use crate::options::{
    asset_type_list, expense_type_list, flatten, income_type_list, non_wage_income_list,
    period_list, OptionColumn,
};
use crate::report::StatementSummary;
use crate::statement::FinancialStatement;
use crate::time::recent_years;

/// Runs one parsed invocation, writing everything user-facing to `out`.
///
/// Only commands that render amounts or edit settings touch the config directory.
pub fn execute(cli: Cli, out: &mut dyn Write) -> Result<()> {
    match cli.command {
        Command::Options(args) => options(&mut Printer::new(out, false), args),
        Command::Years(args) => years(&mut Printer::new(out, false), args),
        Command::Summary(args) => {
            let (_, config) = load_config(cli.base_dir)?;
            let mut printer = Printer::new(out, color_enabled(&config, cli.no_color));
            summary(&mut printer, &config, args)
        }
        Command::Total(args) => {
            let (_, config) = load_config(cli.base_dir)?;
            let mut printer = Printer::new(out, color_enabled(&config, cli.no_color));
            total(&mut printer, &config, args)
        }
        Command::Config(args) => {
            let (manager, config) = load_config(cli.base_dir)?;
            let mut printer = Printer::new(out, color_enabled(&config, cli.no_color));
            show_config(&mut printer, &manager, config, args)
        }
    }
}

fn load_config(base_dir: Option<PathBuf>) -> Result<(ConfigManager, Config)> {
    let manager = match base_dir {
        Some(dir) => ConfigManager::with_base_dir(dir)?,
        None => ConfigManager::from_env()?,
    };
    let config = manager.load()?;
    Ok((manager, config))
}

fn color_enabled(config: &Config, no_color: bool) -> bool {
    config.ui_color_enabled && !no_color
}

fn summary(printer: &mut Printer<'_>, config: &Config, args: SummaryArgs) -> Result<()> {
    let mut statement = FinancialStatement::load(&args.file)?;
    let period = args.period.unwrap_or(config.default_period);
    let summary = StatementSummary::build(&mut statement, period)?;

    if args.json {
        printer.raw(&serde_json::to_string_pretty(&summary)?)?;
        return Ok(());
    }

    let renderer = AmountRenderer::from_config(config);
    printer.section(format!(
        "Statement summary (per {})",
        renderer.period_label(period)
    ))?;
    if statement.is_empty() {
        printer.warning("Statement has no entries")?;
    }
    printer.row("Income", renderer.periodic(summary.income_total, period))?;
    printer.row("Job gross pay", renderer.periodic(summary.job_gross_total, period))?;
    printer.row("Job take-home pay", renderer.periodic(summary.job_net_total, period))?;
    printer.row("Asset income", renderer.periodic(summary.asset_income_total, period))?;
    printer.row("Expenses", renderer.periodic(summary.expense_total, period))?;
    let surplus = format!(
        "{:<24}{}",
        "Surplus",
        renderer.periodic(summary.surplus, period)
    );
    if summary.surplus < Decimal::ZERO {
        printer.warning(surplus)?;
    } else {
        printer.success(surplus)?;
    }
    printer.row("Asset market value", renderer.value(summary.asset_market_value))?;
    printer.row("Asset balances", renderer.value(summary.asset_balance))?;
    printer.row("One-off values", renderer.value(summary.one_off_total))?;

    for owner in &summary.owners {
        printer.section(format!("Owner: {}", owner.owner))?;
        printer.row("Income", renderer.periodic(owner.income, period))?;
        printer.row("Job take-home pay", renderer.periodic(owner.job_net, period))?;
        printer.row("Expenses", renderer.periodic(owner.expenses, period))?;
        printer.row("Asset market value", renderer.value(owner.assets_market_value))?;
    }
    Ok(())
}

fn total(printer: &mut Printer<'_>, config: &Config, args: TotalArgs) -> Result<()> {
    let mut statement = FinancialStatement::load(&args.file)?;
    let period = args.period.unwrap_or(config.default_period);
    let filter = args.filter();
    tracing::debug!(list = ?args.list, period, filter = ?filter, "totaling list");

    let amount = match args.list {
        ListKind::Incomes => statement.incomes.total(period, filter)?,
        ListKind::JobsGross => statement.jobs.gross_total(period, filter)?,
        ListKind::JobsNet => statement.jobs.net_total(period, filter)?,
        ListKind::Expenses => statement.expenses.total(period, filter)?,
        ListKind::Assets => statement.assets.total(period, filter)?,
        ListKind::AssetsMarket => statement.assets.market_value_total(filter)?,
        ListKind::AssetsBalance => statement.assets.balance_total(filter)?,
        ListKind::AssetsEquity => statement.assets.equity_total(filter)?,
        ListKind::Values => statement.values.total(filter)?,
    };

    let renderer = AmountRenderer::from_config(config);
    let rendered = if args.list.is_periodic() {
        renderer.periodic(amount, period)
    } else {
        renderer.value(amount)
    };
    printer.info(rendered)?;
    Ok(())
}

fn options(printer: &mut Printer<'_>, args: OptionsArgs) -> Result<()> {
    let column = if args.codes {
        OptionColumn::Code
    } else {
        OptionColumn::Label
    };
    let entries = match args.list {
        OptionListKind::Asset => flatten(&asset_type_list(), column),
        OptionListKind::Income => flatten(&income_type_list(), column),
        OptionListKind::NonWage => flatten(&non_wage_income_list(), column),
        OptionListKind::Expense => flatten(&expense_type_list(), column),
        OptionListKind::Period => flatten(&period_list(), column),
    };
    for entry in entries {
        printer.raw(&entry)?;
    }
    Ok(())
}

fn years(printer: &mut Printer<'_>, args: YearsArgs) -> Result<()> {
    for year in recent_years(args.years, args.order.into(), args.future)? {
        printer.raw(&year.to_string())?;
    }
    Ok(())
}

fn show_config(
    printer: &mut Printer<'_>,
    manager: &ConfigManager,
    mut config: Config,
    args: ConfigArgs,
) -> Result<()> {
    if args.has_overrides() {
        if let Some(period) = args.default_period {
            if period == 0 {
                return Err(IncomeError::InvalidInput(
                    "default period must be at least 1".into(),
                ));
            }
            config.default_period = period;
        }
        if let Some(locale) = args.locale {
            config.locale = locale;
        }
        if let Some(currency) = args.currency {
            config.currency = currency.to_uppercase();
        }
        manager.save(&config)?;
        tracing::info!(path = %manager.config_path().display(), "configuration saved");
        printer.success(format!(
            "Saved configuration to {}",
            manager.config_path().display()
        ))?;
    }

    printer.section("Configuration")?;
    printer.row("Config file", manager.config_path().display())?;
    printer.row("Locale", &config.locale)?;
    printer.row("Currency", &config.currency)?;
    printer.row(
        "Default period",
        format!(
            "{} ({})",
            config.default_period,
            config.period_labels.label(config.default_period)
        ),
    )?;
    printer.row("Currency display", format!("{:?}", config.currency_display))?;
    printer.row("Negative amounts", format!("{:?}", config.negative_style))?;
    printer.row(
        "Screen reader mode",
        if config.accessibility.screen_reader_mode { "on" } else { "off" },
    )?;
    printer.row(
        "Colors",
        if config.ui_color_enabled { "on" } else { "off" },
    )?;
    printer.section("Period labels")?;
    for (period, label) in config.period_labels.iter() {
        printer.row(&period.to_string(), label)?;
    }
    Ok(())
}
