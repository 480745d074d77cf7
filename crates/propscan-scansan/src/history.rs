//! Dated valuation series from the historical-valuations endpoint.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::types::price_from_value;

/// One dated valuation, ready for charting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValuationPoint {
    pub date: NaiveDate,
    pub price: i64,
}

/// Extracts the valuation history of one property from a historical
/// valuations payload.
///
/// The payload is either `{"data": [property, ...]}` or a single property
/// object. The property whose `property_address` (or `address`) equals
/// `property_address` is chosen, otherwise the first one. Points with an
/// unparsable date or non-numeric valuation are dropped; the rest are
/// returned oldest first.
#[must_use]
pub fn valuation_series(payload: &Value, property_address: Option<&str>) -> Vec<ValuationPoint> {
    let properties: Vec<&Map<String, Value>> = match payload.get("data") {
        Some(Value::Array(list)) if !list.is_empty() => {
            list.iter().filter_map(Value::as_object).collect()
        }
        _ => payload.as_object().into_iter().collect(),
    };

    let chosen = property_address
        .and_then(|wanted| {
            properties
                .iter()
                .find(|p| address_of(p) == Some(wanted))
                .copied()
        })
        .or_else(|| properties.first().copied());

    let Some(property) = chosen else {
        return Vec::new();
    };

    let mut points: Vec<ValuationPoint> = property
        .get("valuations")
        .and_then(Value::as_array)
        .map(|vals| vals.iter().filter_map(point_from_value).collect())
        .unwrap_or_default();
    points.sort_by_key(|p| p.date);
    points
}

fn address_of(property: &Map<String, Value>) -> Option<&str> {
    ["property_address", "address"]
        .iter()
        .find_map(|key| property.get(*key).and_then(Value::as_str))
}

fn point_from_value(value: &Value) -> Option<ValuationPoint> {
    let date = value.get("date").and_then(Value::as_str)?;
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let price = value.get("valuation").and_then(price_from_value)?;
    Some(ValuationPoint { date, price })
}
