use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use income_domain::TypeFilter;

use crate::time::{YearOrder, MAX_YEAR_SPAN};

#[derive(Parser, Debug)]
#[command(
    name = "income_core_cli",
    about = "Total incomes, jobs, assets and expenses of a financial statement",
    version
)]
pub struct Cli {
    /// Directory holding config.json (defaults to $INCOME_CORE_HOME or ~/.income_core)
    #[arg(long, global = true, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,
    /// Disable colored output regardless of configuration
    #[arg(long, global = true)]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize every list of a statement file over one period
    Summary(SummaryArgs),
    /// Total a single list, optionally filtered by type tag
    Total(TotalArgs),
    /// Print one of the built-in choice lists
    Options(OptionsArgs),
    /// Print recent calendar years for year pickers
    Years(YearsArgs),
    /// Show the configuration, saving any overrides first
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Statement JSON file
    pub file: PathBuf,
    /// Occurrences per year to report in (defaults to the configured period)
    #[arg(long)]
    pub period: Option<u32>,
    /// Emit the summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TotalArgs {
    /// Statement JSON file
    pub file: PathBuf,
    #[arg(long, value_enum)]
    pub list: ListKind,
    #[arg(long)]
    pub period: Option<u32>,
    /// Only count entries of this type; repeat for several
    #[arg(long = "type", value_name = "TAG")]
    pub types: Vec<String>,
}

impl TotalArgs {
    pub fn filter(&self) -> TypeFilter {
        match self.types.as_slice() {
            [] => TypeFilter::All,
            [tag] => TypeFilter::one(tag.clone()),
            tags => TypeFilter::any_of(tags.iter().cloned()),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    Incomes,
    JobsGross,
    JobsNet,
    Expenses,
    Assets,
    AssetsMarket,
    AssetsBalance,
    AssetsEquity,
    Values,
}

impl ListKind {
    /// Whether the total is a per-period amount rather than a point-in-time value.
    pub fn is_periodic(self) -> bool {
        matches!(
            self,
            ListKind::Incomes
                | ListKind::JobsGross
                | ListKind::JobsNet
                | ListKind::Expenses
                | ListKind::Assets
        )
    }
}

#[derive(Args, Debug)]
pub struct OptionsArgs {
    #[arg(value_enum)]
    pub list: OptionListKind,
    /// Print codes instead of labels
    #[arg(long)]
    pub codes: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionListKind {
    Asset,
    Income,
    NonWage,
    Expense,
    Period,
}

#[derive(Args, Debug)]
pub struct YearsArgs {
    #[arg(
        long,
        default_value_t = 15,
        value_parser = clap::value_parser!(u32).range(0..=MAX_YEAR_SPAN as i64)
    )]
    pub years: u32,
    #[arg(long, value_enum, default_value_t = OrderArg::Descending)]
    pub order: OrderArg,
    /// Years past the current one to include
    #[arg(
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(0..=MAX_YEAR_SPAN as i64)
    )]
    pub future: u32,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderArg {
    Ascending,
    Descending,
}

impl From<OrderArg> for YearOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Ascending => YearOrder::Ascending,
            OrderArg::Descending => YearOrder::Descending,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    #[arg(long)]
    pub default_period: Option<u32>,
    #[arg(long, value_name = "TAG")]
    pub locale: Option<String>,
    #[arg(long, value_name = "CODE")]
    pub currency: Option<String>,
}

impl ConfigArgs {
    pub fn has_overrides(&self) -> bool {
        self.default_period.is_some() || self.locale.is_some() || self.currency.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_total_with_repeated_types() {
        let cli = Cli::parse_from([
            "income_core_cli",
            "total",
            "statement.json",
            "--list",
            "jobs-net",
            "--type",
            "wages",
            "--type",
            "self_employment",
        ]);
        let Command::Total(args) = cli.command else {
            panic!("expected total command");
        };
        assert_eq!(args.list, ListKind::JobsNet);
        assert_eq!(
            args.filter(),
            TypeFilter::any_of(["wages", "self_employment"])
        );
    }

    #[test]
    fn years_defaults_match_picker_window() {
        let cli = Cli::parse_from(["income_core_cli", "years"]);
        let Command::Years(args) = cli.command else {
            panic!("expected years command");
        };
        assert_eq!((args.years, args.order, args.future), (15, OrderArg::Descending, 1));
    }

    #[test]
    fn rejects_year_windows_past_the_limit() {
        assert!(Cli::try_parse_from(["income_core_cli", "years", "--years", "2147483648"]).is_err());
        assert!(Cli::try_parse_from(["income_core_cli", "years", "--future", "1001"]).is_err());
        assert!(Cli::try_parse_from(["income_core_cli", "years", "--years", "1000"]).is_ok());
    }

    #[test]
    fn rejects_unknown_option_list() {
        assert!(Cli::try_parse_from(["income_core_cli", "options", "pets"]).is_err());
    }
}
