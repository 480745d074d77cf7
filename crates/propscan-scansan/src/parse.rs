//! Normalisation of the `area_codes/search` response.
//!
//! Expected shape:
//!
//! ```json
//! {
//!   "search_query": "Brixton",
//!   "search_found": "ward",
//!   "data": [[{
//!     "area_code": { "area_code_district": "SW2", "area_code_list": ["SW2 1"] },
//!     "borough": ["Lambeth"],
//!     "ward": ["Brixton Acre Lane"],
//!     "street": { "street_count": 1, "street_list": ["Acre Lane"] }
//!   }]]
//! }
//! ```
//!
//! The nesting differs by match type (ward, borough, street), so `data` may
//! also be a flat list of items, and individual fields may be missing, null,
//! bare strings instead of lists, or wrapped in one extra list. Anything
//! unrecognised is skipped; parsing never fails.

use propscan_core::ParsedSearchResult;
use serde_json::{Map, Value};

/// How a member of the `data` list is handled.
#[derive(Debug)]
enum Shape<'a> {
    /// A list whose object members are items.
    Items(&'a [Value]),
    /// A bare item, treated as a one-element list.
    Single(&'a Map<String, Value>),
    Other,
}

fn classify(value: &Value) -> Shape<'_> {
    match value {
        Value::Array(items) => Shape::Items(items),
        Value::Object(item) => Shape::Single(item),
        _ => Shape::Other,
    }
}

/// Extracts area codes, boroughs, wards, streets and postcode districts from
/// a raw search response, keeping discovery order and duplicates.
#[must_use]
pub fn parse_search_response(raw: &Value) -> ParsedSearchResult {
    let Some(envelope) = raw.as_object() else {
        return ParsedSearchResult::default();
    };

    let mut result = ParsedSearchResult {
        search_query: text(envelope.get("search_query")),
        search_found: text(envelope.get("search_found")),
        ..ParsedSearchResult::default()
    };

    let Some(data) = envelope.get("data") else {
        return result;
    };

    match classify(data) {
        Shape::Items(outer) => {
            for element in outer {
                match classify(element) {
                    Shape::Items(members) => {
                        for member in members {
                            extract_member(member, &mut result);
                        }
                    }
                    Shape::Single(item) => extract_item(item, &mut result),
                    Shape::Other => {}
                }
            }
        }
        Shape::Single(item) => extract_item(item, &mut result),
        Shape::Other => {}
    }

    result
}

/// A member of an inner list: an item, or one more level of list.
fn extract_member(member: &Value, result: &mut ParsedSearchResult) {
    match classify(member) {
        Shape::Single(item) => extract_item(item, result),
        Shape::Items(nested) => {
            for item in nested.iter().filter_map(Value::as_object) {
                extract_item(item, result);
            }
        }
        Shape::Other => {}
    }
}

fn extract_item(item: &Map<String, Value>, result: &mut ParsedSearchResult) {
    match item.get("area_code") {
        Some(Value::Object(area_code)) => {
            result
                .area_codes
                .extend(texts(area_code.get("area_code_list")));
            if let Some(district) = text(area_code.get("area_code_district")) {
                result.postcode_districts.push(district);
            }
        }
        // Some responses put the list directly under `area_code`.
        other => result.area_codes.extend(texts(other)),
    }

    result.boroughs.extend(texts(item.get("borough")));
    result.wards.extend(texts(item.get("ward")));

    match item.get("street") {
        Some(Value::Object(street)) => result.streets.extend(texts(street.get("street_list"))),
        other => result.streets.extend(texts(other)),
    }
}

/// A single non-empty string. Numbers are rendered as text.
fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Strings from a list field. A bare string counts as a one-element list and
/// lists nested one level deeper are flattened.
fn texts(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .flat_map(|item| match item {
                Value::Array(nested) => nested
                    .iter()
                    .filter_map(|v| text(Some(v)))
                    .collect::<Vec<_>>(),
                other => text(Some(other)).into_iter().collect::<Vec<_>>(),
            })
            .collect(),
        other => text(other).into_iter().collect(),
    }
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
