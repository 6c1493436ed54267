#![doc(test(attr(deny(warnings))))]

//! Income Core computes periodic income, job, asset and expense totals for the
//! financial statements collected during legal-aid intake interviews.

pub mod cli;
pub mod currency;
pub mod errors;
pub mod gather;
pub mod lists;
pub mod options;
pub mod report;
pub mod statement;
pub mod time;
pub mod utils;

pub use errors::{IncomeError, Result};
pub use gather::{AttributeRequest, AttributeResolver, GatherError, Gatherer, ResolverGatherer};
pub use lists::{AssetList, ExpenseList, IncomeList, JobList, TypedList, ValueList};
pub use report::{OwnerSummary, StatementSummary};
pub use statement::FinancialStatement;

pub use income_config as config;
pub use income_domain as domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Income Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
