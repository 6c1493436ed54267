use income_domain::{
    period::{BIWEEKLY, MONTHLY, QUARTERLY, SEMI_MONTHLY, WEEKLY, YEARLY},
    Asset, Compensation, DomainError, Expense, Income, Job, Periodic,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const PERIODS: [u32; 6] = [YEARLY, QUARTERLY, MONTHLY, SEMI_MONTHLY, BIWEEKLY, WEEKLY];

fn assert_inverse_proportional(entity: &dyn Periodic) {
    let annual = entity.amount(YEARLY).expect("annual amount");
    for period in PERIODS {
        let scaled = entity.amount(period).expect("amount") * Decimal::from(period);
        assert_eq!(
            scaled.round_dp(10),
            annual.round_dp(10),
            "amount({period}) × {period} should equal the annual amount"
        );
    }
}

#[test]
fn amounts_scale_inversely_with_requested_period() {
    let entities: Vec<Box<dyn Periodic>> = vec![
        Box::new(Income::new("wages", dec!(2000), MONTHLY)),
        Box::new(Income::hourly("wages", dec!(15), dec!(20), WEEKLY)),
        Box::new(Job::new(dec!(1733.33), dec!(1400), SEMI_MONTHLY)),
        Box::new(Expense::new("utilities", dec!(310.27), QUARTERLY)),
        Box::new(Asset::new("savings", dec!(5000), dec!(0)).with_income(dec!(4.17), MONTHLY)),
    ];
    for entity in &entities {
        assert_inverse_proportional(entity.as_ref());
    }
}

#[test]
fn hourly_example_matches_documented_figures() {
    let income = Income::hourly("wages", dec!(15), dec!(20), WEEKLY);
    assert_eq!(income.amount(WEEKLY).unwrap(), dec!(300));
    assert_eq!(income.amount(YEARLY).unwrap(), dec!(15600));
}

#[test]
fn statement_entities_round_trip_through_json() {
    let job = Job::hourly(dec!(18.50), dec!(32), dec!(510), WEEKLY)
        .with_employer("Corner Market")
        .with_owner("client");
    let json = serde_json::to_string(&job).expect("serialize job");
    assert!(json.contains("\"type\":\"wages\""), "{json}");
    assert!(json.contains("\"basis\":\"hourly\""), "{json}");

    let restored: Job = serde_json::from_str(&json).expect("deserialize job");
    assert_eq!(restored, job);
    assert!(matches!(restored.compensation, Compensation::Hourly { .. }));
}

#[test]
fn out_of_range_amounts_are_errors() {
    let huge = Income::new("wages", Decimal::MAX, MONTHLY);
    assert!(matches!(
        huge.amount(YEARLY),
        Err(DomainError::Overflow { .. })
    ));

    let hourly = Income::hourly("wages", Decimal::MAX, dec!(40), WEEKLY);
    assert!(matches!(
        hourly.amount(WEEKLY),
        Err(DomainError::Overflow { .. })
    ));

    let underwater = Asset::new("vehicle", Decimal::MIN, Decimal::MAX);
    assert!(matches!(
        underwater.equity(),
        Err(DomainError::Overflow { .. })
    ));
}

#[test]
fn zero_period_is_rejected_when_reading_entries() {
    let income = r#"{"type": "wages", "period": 0, "compensation": {"basis": "periodic", "value": "10"}}"#;
    assert!(serde_json::from_str::<Income>(income).is_err());
    assert!(serde_json::from_str::<Job>(r#"{"period": 0, "net": "1"}"#).is_err());
    assert!(serde_json::from_str::<Expense>(r#"{"type": "rent", "period": 0}"#).is_err());
    assert!(serde_json::from_str::<Asset>(r#"{"type": "cd", "period": 0}"#).is_err());

    let expense: Expense = serde_json::from_str(r#"{"type": "rent", "value": "900", "period": 12}"#).unwrap();
    assert_eq!(expense.amount(YEARLY), Ok(dec!(10800)));
}
