//! Current-valuation payload handling and the point price derived from it.

use serde_json::Value;

use crate::types::CurrentValuation;

/// Derives a single current price from a bounded valuation.
///
/// - two or more bounds: floor of the midpoint of the first and last bound
///   (not an average over every element)
/// - exactly one bound: that bound
/// - no bounds: `last_sold_price`, which may itself be absent
#[must_use]
pub fn derive_current_price(bounded_valuation: &[i64], last_sold_price: Option<i64>) -> Option<i64> {
    match bounded_valuation {
        [] => last_sold_price,
        [only] => Some(*only),
        [first, .., last] => Some(floor_midpoint(*first, *last)),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn floor_midpoint(a: i64, b: i64) -> i64 {
    // Widened so the sum cannot overflow; the midpoint of two i64 fits in i64.
    (i128::from(a) + i128::from(b)).div_euclid(2) as i64
}

/// Reads the entries of a current-valuations payload (`{"data": [...]}`).
///
/// Entries keep their position: only members that are not JSON objects are
/// skipped, and fields of the wrong type read as absent. A payload without a
/// `data` list yields no entries.
#[must_use]
pub fn current_valuations_from_payload(payload: &Value) -> Vec<CurrentValuation> {
    let Some(entries) = payload.get("data").and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(idx, entry)| {
            if !entry.is_object() {
                tracing::debug!(index = idx, "skipping non-object valuation entry");
                return None;
            }
            serde_json::from_value::<CurrentValuation>(entry.clone())
                .map_err(|e| {
                    tracing::debug!(index = idx, error = %e, "skipping malformed valuation entry");
                })
                .ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn two_bounds_use_floor_midpoint() {
        assert_eq!(derive_current_price(&[300_000, 350_001], None), Some(325_000));
        assert_eq!(derive_current_price(&[400_000, 500_000], Some(1)), Some(450_000));
    }

    #[test]
    fn many_bounds_use_first_and_last_only() {
        assert_eq!(
            derive_current_price(&[100, 10_000, 10_000, 301], None),
            Some(200)
        );
    }

    #[test]
    fn midpoint_floors_towards_negative_infinity() {
        assert_eq!(derive_current_price(&[-3, 0], None), Some(-2));
    }

    #[test]
    fn midpoint_does_not_overflow() {
        assert_eq!(
            derive_current_price(&[i64::MAX, i64::MAX], None),
            Some(i64::MAX)
        );
    }

    #[test]
    fn single_bound_is_used_directly() {
        assert_eq!(derive_current_price(&[275_000], Some(100)), Some(275_000));
    }

    #[test]
    fn empty_bounds_fall_back_to_last_sold_price() {
        assert_eq!(derive_current_price(&[], Some(210_000)), Some(210_000));
        assert_eq!(derive_current_price(&[], None), None);
    }

    #[test]
    fn payload_entries_are_read_and_non_objects_skipped() {
        let payload = json!({
            "data": [
                { "property_address": "1 Acre Lane", "bounded_valuation": [1, 3] },
                "not an entry",
                { "property_address": 12 },
                { "last_sold_price": 99 }
            ]
        });
        let entries = current_valuations_from_payload(&payload);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].property_address.as_deref(), Some("1 Acre Lane"));
        assert_eq!(entries[1].property_address, None);
        assert_eq!(entries[2].last_sold_price, Some(99));
    }

    #[test]
    fn oddly_typed_fields_do_not_cost_an_entry_its_position() {
        let payload = json!({
            "data": [
                { "lower_outlier": "false", "bounded_valuation": [100, 200] },
                { "property_address": 7, "last_sold_price": 50 },
                { "last_sold_date": 20_190_101, "bounded_valuation": [10] },
                { "property_address": "4 D Road" }
            ]
        });
        let entries = current_valuations_from_payload(&payload);
        assert_eq!(entries.len(), 4);
        assert_eq!(
            derive_current_price(&entries[0].bounded_valuation, entries[0].last_sold_price),
            Some(150)
        );
        assert_eq!(entries[1].property_address, None);
        assert_eq!(entries[1].last_sold_price, Some(50));
        assert_eq!(entries[2].last_sold_date, None);
        assert_eq!(entries[3].property_address.as_deref(), Some("4 D Road"));
    }

    #[test]
    fn payload_without_data_list_has_no_entries() {
        assert!(current_valuations_from_payload(&json!({})).is_empty());
        assert!(current_valuations_from_payload(&json!({ "data": {} })).is_empty());
        assert!(current_valuations_from_payload(&json!(null)).is_empty());
    }
}
