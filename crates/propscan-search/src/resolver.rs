//! Live property resolution against the `ScanSan` API.
//!
//! One search costs at most `1 + MAX_AREA_CODES` upstream calls, issued one
//! after another.

use propscan_core::{PropertyRecord, SearchQuery, SearchRequest};
use propscan_scansan::{
    current_valuations_from_payload, derive_current_price, parse_search_response, CurrentValuation,
    PostcodeKey, ScansanClient,
};

use crate::mock::mock_resolve;

/// Area codes looked up per search.
pub const MAX_AREA_CODES: usize = 6;

/// Valuation entries turned into records per area code.
pub const MAX_VALUATIONS_PER_CODE: usize = 3;

/// Resolves searches into property records. Holds no state between calls.
pub struct PropertyResolver {
    client: ScansanClient,
}

impl PropertyResolver {
    #[must_use]
    pub fn new(client: ScansanClient) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn client(&self) -> &ScansanClient {
        &self.client
    }

    /// Runs a search from raw input, live first, then the sample table.
    ///
    /// The query mode comes from [`SearchRequest::mode`]. When no mode
    /// applies, or the live path produces no records, the result is
    /// [`mock_resolve`] over the selected area label and free-text query.
    /// Input is assumed to have passed
    /// [`propscan_core::validate_search_input`] already.
    pub async fn search(&self, request: &SearchRequest) -> Vec<PropertyRecord> {
        let live = match request.mode() {
            Some(query) => self.resolve(&query, &request.area).await,
            None => {
                tracing::debug!(area = %request.area, "no search mode applies; skipping upstream");
                Vec::new()
            }
        };

        if !live.is_empty() {
            return live;
        }

        let fallback = mock_resolve(&request.area, &request.query);
        tracing::info!(
            area = %request.area,
            records = fallback.len(),
            "live search returned nothing; serving sample data"
        );
        fallback
    }

    /// Resolves `query` against the live API only.
    ///
    /// Records are labelled with the first borough, else the first ward, else
    /// `area_label`. Returns an empty list when the search has no result or
    /// yields no area codes.
    pub async fn resolve(&self, query: &SearchQuery, area_label: &str) -> Vec<PropertyRecord> {
        let Some(raw) = self.client.search(query).await else {
            return Vec::new();
        };

        let parsed = parse_search_response(&raw);
        if parsed.area_codes.is_empty() {
            tracing::debug!(%query, "search matched no area codes");
            return Vec::new();
        }

        let area = parsed.area_label(area_label);
        let mut records = Vec::new();
        for area_code in parsed.area_codes.iter().take(MAX_AREA_CODES) {
            let key = PostcodeKey::AreaCode(area_code.clone());
            let Some(payload) = self.client.current_valuations(&key).await else {
                continue;
            };

            let entries = current_valuations_from_payload(&payload);
            tracing::debug!(%area_code, entries = entries.len(), "current valuations");
            records.extend(
                entries
                    .into_iter()
                    .take(MAX_VALUATIONS_PER_CODE)
                    .map(|entry| record_from_valuation(entry, area_code, area)),
            );
        }
        records
    }
}

/// Builds a record from one current-valuation entry fetched under `area_code`.
#[must_use]
pub fn record_from_valuation(entry: CurrentValuation, area_code: &str, area: &str) -> PropertyRecord {
    let current_price = derive_current_price(&entry.bounded_valuation, entry.last_sold_price);
    let address = entry
        .property_address
        .filter(|a| !a.trim().is_empty())
        .unwrap_or_else(|| format!("Property in {area_code}"));

    PropertyRecord {
        address,
        postcode: area_code.to_string(),
        area: area.to_string(),
        current_price,
        future_price: None,
        last_sold_price: entry.last_sold_price,
        last_sold_date: entry.last_sold_date.filter(|d| !d.trim().is_empty()),
        sustainability_score: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_uses_midpoint_and_keeps_sale_details() {
        let entry = CurrentValuation {
            property_address: Some("12 Acre Lane, SW2 5RZ".to_string()),
            last_sold_price: Some(410_000),
            last_sold_date: Some("2019-06-14".to_string()),
            bounded_valuation: vec![500_000, 551_001],
            ..CurrentValuation::default()
        };
        let record = record_from_valuation(entry, "SW2 5", "Lambeth");
        assert_eq!(record.address, "12 Acre Lane, SW2 5RZ");
        assert_eq!(record.postcode, "SW2 5");
        assert_eq!(record.area, "Lambeth");
        assert_eq!(record.current_price, Some(525_500));
        assert_eq!(record.last_sold_price, Some(410_000));
        assert_eq!(record.last_sold_date.as_deref(), Some("2019-06-14"));
        assert_eq!(record.future_price, None);
        assert_eq!(record.sustainability_score, None);
    }

    #[test]
    fn record_without_address_gets_placeholder() {
        let record = record_from_valuation(CurrentValuation::default(), "NG8 1", "Nottingham");
        assert_eq!(record.address, "Property in NG8 1");
        assert_eq!(record.current_price, None);
    }

    #[test]
    fn record_falls_back_to_last_sold_price() {
        let entry = CurrentValuation {
            property_address: Some("  ".to_string()),
            last_sold_price: Some(199_950),
            last_sold_date: Some(String::new()),
            ..CurrentValuation::default()
        };
        let record = record_from_valuation(entry, "LS1 6", "Leeds");
        assert_eq!(record.address, "Property in LS1 6");
        assert_eq!(record.current_price, Some(199_950));
        assert_eq!(record.last_sold_date, None);
    }
}
