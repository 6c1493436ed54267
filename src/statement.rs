//! A household's complete financial statement.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::lists::{AssetList, ExpenseList, IncomeList, JobList, ValueList};
use crate::utils::persistence::{load_statement_from_file, save_statement_to_file};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FinancialStatement {
    #[serde(default)]
    pub incomes: IncomeList,
    #[serde(default)]
    pub jobs: JobList,
    #[serde(default)]
    pub assets: AssetList,
    #[serde(default)]
    pub expenses: ExpenseList,
    #[serde(default)]
    pub values: ValueList,
}

impl FinancialStatement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self> {
        load_statement_from_file(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        save_statement_to_file(self, path)
    }

    /// Entries held across every list; does not gather.
    pub fn len(&self) -> usize {
        self.incomes.len()
            + self.jobs.len()
            + self.assets.len()
            + self.expenses.len()
            + self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distinct owners across incomes, jobs, assets and expenses, in first-seen order.
    pub fn owners(&mut self) -> Result<Vec<String>> {
        let mut owners: Vec<String> = Vec::new();
        let found = [
            self.incomes.owners()?,
            self.jobs.owners()?,
            self.assets.owners()?,
            self.expenses.owners()?,
        ];
        for owner in found.into_iter().flatten() {
            if !owners.contains(&owner) {
                owners.push(owner);
            }
        }
        Ok(owners)
    }
}
