use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::errors::{IncomeError, Result};

/// Clock abstracts access to the current timestamp so helpers remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum YearOrder {
    Ascending,
    #[default]
    Descending,
}

/// Largest `years` or `future` window accepted by [`recent_years`].
pub const MAX_YEAR_SPAN: u32 = 1_000;

/// Recent calendar years for year pickers (vehicle year, birth year).
///
/// Descending yields `Y+future` down to `Y-years+1`, so
/// `recent_years(15, YearOrder::Descending, 1)` in year Y is `Y+1, Y, …, Y-14`.
/// Ascending yields `Y-years` up to `Y+future-1`.
pub fn recent_years(years: u32, order: YearOrder, future: u32) -> Result<Vec<i32>> {
    recent_years_from(&SystemClock, years, order, future)
}

pub fn recent_years_from(
    clock: &dyn Clock,
    years: u32,
    order: YearOrder,
    future: u32,
) -> Result<Vec<i32>> {
    let span = |value: u32, name: &str| -> Result<i32> {
        if value > MAX_YEAR_SPAN {
            return Err(IncomeError::InvalidInput(format!(
                "{name} must be at most {MAX_YEAR_SPAN}, got {value}"
            )));
        }
        i32::try_from(value).map_err(|_| IncomeError::InvalidInput(format!("{name} is out of range")))
    };
    let years = span(years, "years")?;
    let future = span(future, "future")?;
    let current = clock.today().year();
    let out_of_range = || IncomeError::InvalidInput("year range exceeds the calendar".into());

    let newest = current.checked_add(future).ok_or_else(out_of_range)?;
    let oldest = current.checked_sub(years).ok_or_else(out_of_range)?;
    Ok(match order {
        YearOrder::Ascending => (oldest..newest).collect(),
        YearOrder::Descending => ((oldest + 1)..=newest).rev().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn clock_in(year: i32) -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(year, 6, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn default_window_is_sixteen_years_descending() {
        let years = recent_years_from(&clock_in(2024), 15, YearOrder::Descending, 1).unwrap();
        assert_eq!(years.len(), 16);
        assert_eq!(years.first(), Some(&2025));
        assert_eq!(years.last(), Some(&2010));
    }

    #[test]
    fn ascending_starts_years_back_and_stops_before_future_bound() {
        let years = recent_years_from(&clock_in(2026), 15, YearOrder::Ascending, 1).unwrap();
        assert_eq!(years, (2011..=2026).collect::<Vec<_>>());

        let short = recent_years_from(&clock_in(2030), 5, YearOrder::Ascending, 2).unwrap();
        assert_eq!(short, vec![2025, 2026, 2027, 2028, 2029, 2030, 2031]);
    }

    #[test]
    fn empty_when_no_years_requested() {
        let years = recent_years_from(&clock_in(2024), 0, YearOrder::Descending, 0).unwrap();
        assert!(years.is_empty());
    }

    #[test]
    fn oversized_windows_are_rejected() {
        let clock = clock_in(2026);
        for (years, future) in [(2_147_483_648, 1), (4_000_000_000, 1), (15, u32::MAX)] {
            let err = recent_years_from(&clock, years, YearOrder::Descending, future).unwrap_err();
            assert!(matches!(err, IncomeError::InvalidInput(_)), "{err}");
        }
        let widest = recent_years_from(&clock, MAX_YEAR_SPAN, YearOrder::Ascending, 0).unwrap();
        assert_eq!(widest.len(), MAX_YEAR_SPAN as usize);
    }

    #[test]
    fn system_clock_includes_current_year() {
        let current = Utc::now().year();
        assert!(recent_years(15, YearOrder::Descending, 1)
            .unwrap()
            .contains(&current));
    }
}
