use serde::{Deserialize, Serialize};

/// A single property, as handed to presentation.
///
/// Built fresh for every search; the core keeps no copy between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub address: String,
    /// The area code the record was fetched under.
    pub postcode: String,
    pub area: String,
    pub current_price: Option<i64>,
    /// Reserved for a price forecast; never populated here.
    pub future_price: Option<i64>,
    pub last_sold_price: Option<i64>,
    pub last_sold_date: Option<String>,
    /// 0-100 when present.
    pub sustainability_score: Option<u8>,
}

impl PropertyRecord {
    /// A record with only the identifying fields set.
    #[must_use]
    pub fn new(address: &str, postcode: &str, area: &str) -> Self {
        Self {
            address: address.to_string(),
            postcode: postcode.to_string(),
            area: area.to_string(),
            current_price: None,
            future_price: None,
            last_sold_price: None,
            last_sold_date: None,
            sustainability_score: None,
        }
    }
}

/// Canonical lists pulled out of a raw search response, in discovery order.
///
/// Duplicates are kept. A payload with nothing usable yields all-empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSearchResult {
    pub search_query: Option<String>,
    /// Which kind of area the upstream matched (`ward`, `borough`, ...).
    pub search_found: Option<String>,
    pub area_codes: Vec<String>,
    pub boroughs: Vec<String>,
    pub wards: Vec<String>,
    pub streets: Vec<String>,
    pub postcode_districts: Vec<String>,
}

impl ParsedSearchResult {
    /// Label for records built from this result: first borough, else first
    /// ward, else `requested`.
    #[must_use]
    pub fn area_label<'a>(&'a self, requested: &'a str) -> &'a str {
        self.boroughs
            .first()
            .or_else(|| self.wards.first())
            .map_or(requested, String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.area_codes.is_empty()
            && self.boroughs.is_empty()
            && self.wards.is_empty()
            && self.streets.is_empty()
            && self.postcode_districts.is_empty()
    }
}
