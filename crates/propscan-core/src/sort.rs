//! Ordering of result sets for presentation.

use std::cmp::Reverse;
use std::str::FromStr;

use crate::property::PropertyRecord;
use crate::CoreError;

/// Sort keys offered to the user. Parses from and displays as the selector
/// labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOption {
    /// Priced records first, otherwise original order.
    #[default]
    Default,
    CurrentPriceAsc,
    CurrentPriceDesc,
    FuturePriceAsc,
    FuturePriceDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Default,
        SortOption::CurrentPriceAsc,
        SortOption::CurrentPriceDesc,
        SortOption::FuturePriceAsc,
        SortOption::FuturePriceDesc,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortOption::Default => "Default",
            SortOption::CurrentPriceAsc => "Current Price: Low to High",
            SortOption::CurrentPriceDesc => "Current Price: High to Low",
            SortOption::FuturePriceAsc => "Future Price: Low to High",
            SortOption::FuturePriceDesc => "Future Price: High to Low",
        }
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortOption {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SortOption::ALL
            .into_iter()
            .find(|opt| opt.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownSortOption(s.to_string()))
    }
}

/// Returns `records` ordered by `option`.
///
/// The sort is stable. Records missing the sort key always go to the bottom,
/// whichever direction is chosen.
#[must_use]
pub fn sort_properties(records: &[PropertyRecord], option: SortOption) -> Vec<PropertyRecord> {
    let mut sorted = records.to_vec();
    match option {
        SortOption::Default => sorted.sort_by_key(|r| r.current_price.is_none()),
        SortOption::CurrentPriceAsc => {
            sorted.sort_by_key(|r| (r.current_price.is_none(), r.current_price));
        }
        SortOption::CurrentPriceDesc => {
            sorted.sort_by_key(|r| (r.current_price.is_none(), Reverse(r.current_price)));
        }
        SortOption::FuturePriceAsc => {
            sorted.sort_by_key(|r| (r.future_price.is_none(), r.future_price));
        }
        SortOption::FuturePriceDesc => {
            sorted.sort_by_key(|r| (r.future_price.is_none(), Reverse(r.future_price)));
        }
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(address: &str, current: Option<i64>) -> PropertyRecord {
        let mut record = PropertyRecord::new(address, "AB1", "Test");
        record.current_price = current;
        record
    }

    fn prices(records: &[PropertyRecord]) -> Vec<Option<i64>> {
        records.iter().map(|r| r.current_price).collect()
    }

    fn sample() -> Vec<PropertyRecord> {
        vec![
            priced("a", None),
            priced("b", Some(500_000)),
            priced("c", Some(300_000)),
        ]
    }

    #[test]
    fn ascending_puts_missing_last() {
        let sorted = sort_properties(&sample(), SortOption::CurrentPriceAsc);
        assert_eq!(prices(&sorted), vec![Some(300_000), Some(500_000), None]);
    }

    #[test]
    fn descending_puts_missing_last() {
        let sorted = sort_properties(&sample(), SortOption::CurrentPriceDesc);
        assert_eq!(prices(&sorted), vec![Some(500_000), Some(300_000), None]);
    }

    #[test]
    fn default_keeps_priced_order_and_moves_unpriced_down() {
        let sorted = sort_properties(&sample(), SortOption::Default);
        let addresses: Vec<&str> = sorted.iter().map(|r| r.address.as_str()).collect();
        assert_eq!(addresses, vec!["b", "c", "a"]);
    }

    #[test]
    fn equal_keys_keep_original_order() {
        let records = vec![
            priced("first", Some(100)),
            priced("second", Some(100)),
            priced("third", Some(50)),
        ];
        let desc = sort_properties(&records, SortOption::CurrentPriceDesc);
        let addresses: Vec<&str> = desc.iter().map(|r| r.address.as_str()).collect();
        assert_eq!(addresses, vec!["first", "second", "third"]);
    }

    #[test]
    fn future_price_sort_with_no_forecasts_keeps_order() {
        let sorted = sort_properties(&sample(), SortOption::FuturePriceDesc);
        assert_eq!(sorted, sample());
    }

    #[test]
    fn future_price_ascending_orders_forecasts() {
        let mut records = sample();
        records[0].future_price = Some(900);
        records[2].future_price = Some(100);
        let sorted = sort_properties(&records, SortOption::FuturePriceAsc);
        let addresses: Vec<&str> = sorted.iter().map(|r| r.address.as_str()).collect();
        assert_eq!(addresses, vec!["c", "a", "b"]);
    }

    #[test]
    fn parses_selector_labels() {
        for option in SortOption::ALL {
            assert_eq!(option.label().parse::<SortOption>(), Ok(option));
        }
        assert_eq!(
            "current price: low to high".parse::<SortOption>(),
            Ok(SortOption::CurrentPriceAsc)
        );
    }

    #[test]
    fn unknown_label_is_an_error() {
        assert_eq!(
            "Cheapest".parse::<SortOption>(),
            Err(CoreError::UnknownSortOption("Cheapest".to_string()))
        );
    }
}
