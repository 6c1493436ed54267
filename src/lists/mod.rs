//! Collections of statement entries and their filtered totals.

pub mod assets;
pub mod jobs;
mod typed;
pub mod values;

use income_domain::{Asset, Expense, Income, Job};

pub use typed::TypedList;
pub use values::ValueList;

pub type IncomeList = TypedList<Income>;
pub type JobList = TypedList<Job>;
pub type AssetList = TypedList<Asset>;
pub type ExpenseList = TypedList<Expense>;
