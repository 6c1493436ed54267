use income_core::{
    domain::{
        period::{MONTHLY, WEEKLY, YEARLY},
        rust_decimal::Decimal,
        Attribute, Compensation, DomainError, Income, TypeFilter,
    },
    IncomeError, IncomeList,
};
use rust_decimal_macros::dec;

fn wages_and_ssi() -> IncomeList {
    IncomeList::from_items(vec![
        Income::new("wages", dec!(2000), MONTHLY),
        Income::new("ssi", dec!(500), MONTHLY),
    ])
}

#[test]
fn monthly_entries_total_per_period_and_tag() {
    let mut incomes = wages_and_ssi();
    assert_eq!(incomes.total(MONTHLY, TypeFilter::All).unwrap(), dec!(2500));
    assert_eq!(incomes.total(YEARLY, TypeFilter::All).unwrap(), dec!(30000));
    assert_eq!(incomes.total(MONTHLY, "wages").unwrap(), dec!(2000));
    assert_eq!(
        incomes
            .total(MONTHLY, TypeFilter::any_of(["wages", "ssi"]))
            .unwrap(),
        dec!(2500)
    );
}

#[test]
fn empty_list_and_zero_period_total_zero() {
    let mut empty = IncomeList::new();
    assert_eq!(empty.total(MONTHLY, TypeFilter::All).unwrap(), Decimal::ZERO);

    let mut incomes = wages_and_ssi();
    assert_eq!(incomes.total(0, TypeFilter::All).unwrap(), Decimal::ZERO);
}

#[test]
fn absent_tag_totals_zero() {
    let mut incomes = wages_and_ssi();
    assert_eq!(incomes.total(MONTHLY, "pension").unwrap(), Decimal::ZERO);
}

#[test]
fn unfiltered_total_equals_sum_over_each_tag() {
    let mut incomes = wages_and_ssi();
    incomes.push(Income::hourly("wages", dec!(12.5), dec!(30), WEEKLY));
    incomes.push(Income::new("pension", dec!(4800), YEARLY));

    let mut by_tag = Decimal::ZERO;
    for tag in incomes.types().unwrap() {
        by_tag += incomes.total(WEEKLY, tag).unwrap();
    }
    let whole = incomes.total(WEEKLY, TypeFilter::All).unwrap();
    assert_eq!(whole.round_dp(10), by_tag.round_dp(10));
}

#[test]
fn untagged_entries_only_count_toward_unfiltered_totals() {
    let mut incomes = wages_and_ssi();
    incomes.push(Income::pending(
        None,
        Compensation::Periodic {
            value: Some(dec!(100)),
        },
    ));
    incomes.get_mut(2).unwrap().period = Some(MONTHLY);

    assert_eq!(incomes.total(MONTHLY, TypeFilter::All).unwrap(), dec!(2600));
    assert_eq!(
        incomes
            .total(MONTHLY, TypeFilter::any_of(["wages", "ssi"]))
            .unwrap(),
        dec!(2500)
    );
}

#[test]
fn missing_attribute_is_reported_not_zeroed() {
    let mut incomes = wages_and_ssi();
    incomes.push(Income::pending(Some("pension".into()), Compensation::default()));

    let err = incomes.total(MONTHLY, TypeFilter::All).unwrap_err();
    assert!(matches!(
        err,
        IncomeError::Domain(DomainError::MissingAttribute {
            attribute: Attribute::Value,
            ..
        })
    ));
    // Entries outside the filter are never read.
    assert_eq!(incomes.total(MONTHLY, "wages").unwrap(), dec!(2000));
}

#[test]
fn filter_accepts_host_json_shapes() {
    let mut incomes = wages_and_ssi();
    let filter = TypeFilter::from_json(&serde_json::json!(["ssi"])).unwrap();
    assert_eq!(incomes.total(MONTHLY, filter).unwrap(), dec!(500));
}
