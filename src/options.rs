//! Static choice lists for interview forms.

use std::fmt::Display;

use income_domain::period::{BIWEEKLY, MONTHLY, QUARTERLY, SEMI_MONTHLY, WEEKLY, YEARLY};
use serde::Serialize;

/// A `(code, label)` pair offered in a multiple-choice input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceOption<C = &'static str> {
    pub code: C,
    pub label: &'static str,
}

/// Which column of a choice list to project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OptionColumn {
    Code,
    #[default]
    Label,
}

const fn choice(code: &'static str, label: &'static str) -> ChoiceOption {
    ChoiceOption { code, label }
}

const ASSET_TYPES: [ChoiceOption; 10] = [
    choice("savings", "Savings"),
    choice("cd", "Certificate of Deposit"),
    choice("ira", "Individual Retirement Account"),
    choice("mutual_fund", "Money or Mutual Fund"),
    choice("stocks", "Stocks or Bonds"),
    choice("trust", "Trust Fund"),
    choice("checking", "Checking Account"),
    choice("vehicle", "Vehicle"),
    choice("real_estate", "Real Estate"),
    choice("other", "Other Asset"),
];

const INCOME_TYPES: [ChoiceOption; 12] = [
    choice("wages", "Wages"),
    choice("social_security", "Social Security Benefits"),
    choice("ssi", "Supplemental Security Income (SSI)"),
    choice("pension", "Pension"),
    choice("tafdc", "TAFDC"),
    choice("eaedc", "EAEDC"),
    choice("food_stamps", "Food Stamps (TANF)"),
    choice("rent", "Income from real estate (rent, etc)"),
    choice("room_and_board", "Room and/or Board Payments"),
    choice("child_support", "Child Support"),
    choice("alimony", "Alimony"),
    choice("other_support", "Other Support"),
];

const EXPENSE_TYPES: [ChoiceOption; 17] = [
    choice("rent", "Rent"),
    choice("mortgage", "Mortgage"),
    choice("food", "Food"),
    choice("utilities", "Utilities"),
    choice("fuel", "Other Heating/Cooking Fuel"),
    choice("clothing", "Clothing"),
    choice("credit_cards", "Credit Card Payments"),
    choice("property_tax", "Property Tax (State and Local)"),
    choice("other_taxes", "Other taxes and fees related to your home"),
    choice("insurance", "Insurance"),
    choice("medical", "Medical-Dental (after amount paid by insurance)"),
    choice("auto", "Car operation and maintenance"),
    choice("transportation", "Other transportation"),
    choice("charity", "Church or charitable donations"),
    choice("loan_payments", "Loan, credit, or lay-away payments"),
    choice("support", "Support to someone not in household"),
    choice("other", "Other"),
];

const WAGES: &str = "wages";

pub fn asset_type_list() -> Vec<ChoiceOption> {
    ASSET_TYPES.to_vec()
}

pub fn income_type_list() -> Vec<ChoiceOption> {
    INCOME_TYPES.to_vec()
}

/// Income types other than wages, for asking about benefits and support.
pub fn non_wage_income_list() -> Vec<ChoiceOption> {
    INCOME_TYPES
        .iter()
        .filter(|option| option.code != WAGES)
        .copied()
        .collect()
}

pub fn expense_type_list() -> Vec<ChoiceOption> {
    EXPENSE_TYPES.to_vec()
}

/// Pay periods, coded as occurrences per year.
pub fn period_list() -> Vec<ChoiceOption<u32>> {
    vec![
        ChoiceOption { code: YEARLY, label: "Year" },
        ChoiceOption { code: MONTHLY, label: "Month" },
        ChoiceOption { code: WEEKLY, label: "Week" },
        ChoiceOption { code: SEMI_MONTHLY, label: "Twice a month" },
        ChoiceOption { code: BIWEEKLY, label: "Every two weeks" },
        ChoiceOption { code: QUARTERLY, label: "Quarter" },
    ]
}

/// Projects one column out of a choice list, keeping source order.
pub fn flatten<C: Display>(options: &[ChoiceOption<C>], column: OptionColumn) -> Vec<String> {
    options
        .iter()
        .map(|option| match column {
            OptionColumn::Code => option.code.to_string(),
            OptionColumn::Label => option.label.to_string(),
        })
        .collect()
}
