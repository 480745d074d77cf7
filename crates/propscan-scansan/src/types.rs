//! `ScanSan` request keys and response entry types.
//!
//! Upstream prices arrive as integers most of the time, occasionally as
//! floats or numeric strings. The lenient deserializers below accept all
//! three rather than rejecting the whole entry.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Identifier for the postcode-scoped endpoints (sale history, valuations).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostcodeKey {
    /// A full postal code, e.g. `"NW1 0BH"`. Sent as `area_code_postal`.
    Postal(String),
    /// An upstream area code, e.g. `"SE255NF"`. Sent as `area_code`.
    AreaCode(String),
}

impl PostcodeKey {
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Postal(v) | Self::AreaCode(v) => v.trim(),
        }
    }

    #[must_use]
    pub fn param_name(&self) -> &'static str {
        match self {
            Self::Postal(_) => "area_code_postal",
            Self::AreaCode(_) => "area_code",
        }
    }
}

/// One property entry from the current-valuations endpoint.
///
/// Every field decodes leniently: a value of the wrong type reads as absent
/// instead of failing the entry, so only non-object entries are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CurrentValuation {
    #[serde(default, deserialize_with = "lenient_text")]
    pub property_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_price")]
    pub last_sold_price: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub last_sold_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub lower_outlier: Option<bool>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub upper_outlier: Option<bool>,
    /// Low/high estimate range. Non-numeric members are dropped.
    #[serde(default, deserialize_with = "lenient_prices")]
    pub bounded_valuation: Vec<i64>,
}

/// Reads a price from an integer, a float (floored) or a numeric string.
pub(crate) fn price_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(floor_price)),
        Value::String(s) => {
            let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
            match cleaned.parse::<i64>() {
                Ok(v) => Some(v),
                Err(_) => cleaned.parse::<f64>().ok().and_then(floor_price),
            }
        }
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn floor_price(value: f64) -> Option<i64> {
    (value.is_finite() && value.abs() < 9.0e18).then(|| value.floor() as i64)
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(price_from_value))
}

/// Non-blank strings only; numbers and other values read as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

/// Booleans, plus `"true"`/`"false"` strings in any case.
fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

fn lenient_prices<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Array(items)) => items.iter().filter_map(price_from_value).collect(),
        Some(other) => price_from_value(&other).into_iter().collect(),
        None => Vec::new(),
    })
}
