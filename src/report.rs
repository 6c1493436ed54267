//! Period totals for a whole statement, overall and per owner.

use income_domain::{period::checked_sum, rust_decimal::Decimal, DomainError, TypeFilter};
use serde::Serialize;

use crate::errors::Result;
use crate::statement::FinancialStatement;

/// Totals for one owner, all converted to the summary's period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnerSummary {
    pub owner: String,
    pub income: Decimal,
    pub job_net: Decimal,
    pub expenses: Decimal,
    pub assets_market_value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementSummary {
    pub period: u32,
    pub income_total: Decimal,
    pub job_gross_total: Decimal,
    pub job_net_total: Decimal,
    pub asset_income_total: Decimal,
    pub expense_total: Decimal,
    /// Income, take-home pay and asset income less expenses.
    pub surplus: Decimal,
    pub asset_market_value: Decimal,
    pub asset_balance: Decimal,
    pub one_off_total: Decimal,
    pub owners: Vec<OwnerSummary>,
}

impl StatementSummary {
    /// Gathers every list of `statement` and totals it over `period_to_use`.
    pub fn build(statement: &mut FinancialStatement, period_to_use: u32) -> Result<Self> {
        let all = TypeFilter::All;
        let income_total = statement.incomes.total(period_to_use, all.clone())?;
        let job_gross_total = statement.jobs.gross_total(period_to_use, all.clone())?;
        let job_net_total = statement.jobs.net_total(period_to_use, all.clone())?;
        let asset_income_total = statement.assets.total(period_to_use, all.clone())?;
        let expense_total = statement.expenses.total(period_to_use, all.clone())?;
        let asset_market_value = statement.assets.market_value_total(all.clone())?;
        let asset_balance = statement.assets.balance_total(all.clone())?;
        let one_off_total = statement.values.total(all)?;

        let mut owners = Vec::new();
        for owner in statement.owners()? {
            owners.push(owner_summary(statement, owner, period_to_use)?);
        }

        let income_sources = checked_sum(
            checked_sum(income_total, job_net_total)?,
            asset_income_total,
        )?;
        let surplus = income_sources
            .checked_sub(expense_total)
            .ok_or(DomainError::Overflow { operation: "surplus" })?;

        let summary = Self {
            period: period_to_use,
            income_total,
            job_gross_total,
            job_net_total,
            asset_income_total,
            expense_total,
            surplus,
            asset_market_value,
            asset_balance,
            one_off_total,
            owners,
        };
        tracing::debug!(period = period_to_use, surplus = %summary.surplus, "built statement summary");
        Ok(summary)
    }
}

fn owner_summary(
    statement: &mut FinancialStatement,
    owner: String,
    period_to_use: u32,
) -> Result<OwnerSummary> {
    let all = TypeFilter::All;
    let mut assets = statement.assets.owned_by(&owner)?;
    let income = checked_sum(
        statement
            .incomes
            .owned_by(&owner)?
            .total(period_to_use, all.clone())?,
        assets.total(period_to_use, all.clone())?,
    )?;
    Ok(OwnerSummary {
        income,
        job_net: statement
            .jobs
            .owned_by(&owner)?
            .net_total(period_to_use, all.clone())?,
        expenses: statement
            .expenses
            .owned_by(&owner)?
            .total(period_to_use, all.clone())?,
        assets_market_value: assets.market_value_total(all)?,
        owner,
    })
}
