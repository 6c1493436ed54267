use income_domain::{rust_decimal::Decimal, Asset, TypeFilter};

use crate::errors::Result;
use crate::lists::AssetList;

impl AssetList {
    /// Combined market value of matching assets.
    pub fn market_value_total(&mut self, filter: impl Into<TypeFilter>) -> Result<Decimal> {
        self.sum_matching(&filter.into(), "market_value", |asset: &Asset| {
            asset.market_value().map(Some)
        })
    }

    /// Combined outstanding balance of matching assets.
    pub fn balance_total(&mut self, filter: impl Into<TypeFilter>) -> Result<Decimal> {
        self.sum_matching(&filter.into(), "balance", |asset: &Asset| {
            asset.balance().map(Some)
        })
    }

    /// Market value less balance across matching assets.
    pub fn equity_total(&mut self, filter: impl Into<TypeFilter>) -> Result<Decimal> {
        self.sum_matching(&filter.into(), "equity", |asset: &Asset| asset.equity().map(Some))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::IncomeError;
    use income_domain::{period::MONTHLY, Attribute, DomainError, TypeFilter};
    use rust_decimal_macros::dec;

    fn assets() -> AssetList {
        AssetList::from_items(vec![
            Asset::new("checking", dec!(1200), dec!(1200)).with_owner("client"),
            Asset::new("vehicle", dec!(9000), dec!(4000)).with_owner("client"),
            Asset::new("real_estate", dec!(200000), dec!(150000))
                .with_income(dec!(850), MONTHLY)
                .with_owner("spouse"),
        ])
    }

    #[test]
    fn value_totals_sum_matching_assets() {
        let mut list = assets();
        assert_eq!(list.market_value_total(TypeFilter::All).unwrap(), dec!(210200));
        assert_eq!(list.balance_total("vehicle").unwrap(), dec!(4000));
        assert_eq!(
            list.equity_total(TypeFilter::any_of(["checking", "vehicle"])).unwrap(),
            dec!(5000)
        );
    }

    #[test]
    fn income_total_skips_assets_without_value() {
        let mut list = assets();
        assert_eq!(list.total(MONTHLY, TypeFilter::All).unwrap(), dec!(850));
        assert_eq!(list.total(1, TypeFilter::All).unwrap(), dec!(10200));
    }

    #[test]
    fn missing_balance_propagates() {
        let mut list = assets();
        let mut incomplete = Asset::new("savings", dec!(10), dec!(0));
        incomplete.balance = None;
        list.push(incomplete);
        let err = list.balance_total(TypeFilter::All).unwrap_err();
        assert!(matches!(
            err,
            IncomeError::Domain(DomainError::MissingAttribute {
                attribute: Attribute::Balance,
                ..
            })
        ));
    }
}
