#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use income_core::{
    domain::{
        period::{BIWEEKLY, MONTHLY},
        Asset, Expense, Income, Job, SimpleValue,
    },
    FinancialStatement,
};
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated directory that outlives the calling test.
pub fn temp_base_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// A two-person household with one entry of every kind.
///
/// Monthly: incomes 2,500, job gross 3,250 and net 2,600, asset income 850,
/// expenses 1,100.
pub fn sample_statement() -> FinancialStatement {
    let mut statement = FinancialStatement::new();
    statement
        .incomes
        .push(Income::new("wages", dec!(2000), MONTHLY).with_owner("client"));
    statement
        .incomes
        .push(Income::new("ssi", dec!(500), MONTHLY).with_owner("spouse"));
    statement.jobs.push(
        Job::new(dec!(1500), dec!(1200), BIWEEKLY)
            .with_employer("Clinic")
            .with_owner("client"),
    );
    statement
        .assets
        .push(Asset::new("checking", dec!(1200), dec!(0)).with_owner("client"));
    statement.assets.push(
        Asset::new("real_estate", dec!(200000), dec!(150000))
            .with_income(dec!(850), MONTHLY)
            .with_owner("spouse"),
    );
    statement
        .expenses
        .push(Expense::new("rent", dec!(1100), MONTHLY).with_owner("client"));
    statement
        .values
        .push(SimpleValue::new("tax_refund", dec!(640)));
    statement
}

/// Saves [`sample_statement`] into a fresh directory and returns the file path.
pub fn write_sample_statement() -> PathBuf {
    let path = temp_base_dir().join("statement.json");
    sample_statement()
        .save(&path)
        .expect("save sample statement");
    path
}
