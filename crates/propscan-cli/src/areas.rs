//! Area catalog listing and validation against the live search endpoint.

use std::path::Path;

use propscan_core::{is_placeholder_area, uk_areas, SearchQuery};
use propscan_scansan::{parse_search_response, ScansanClient};
use serde::Serialize;

pub(crate) fn run_areas() {
    for area in uk_areas() {
        println!("{area}");
    }
}

/// Outcome of one catalog search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct AreaCheck {
    pub(crate) area: String,
    pub(crate) search_found: Option<String>,
    pub(crate) area_codes: usize,
}

/// Catalog areas split by whether the API recognised them.
#[derive(Debug, Default, Serialize)]
pub(crate) struct AreaValidation {
    pub(crate) valid: Vec<AreaCheck>,
    pub(crate) invalid: Vec<String>,
}

impl AreaValidation {
    /// Files `area` as valid when the response names a non-empty
    /// `search_found`, otherwise as invalid.
    /// Returns whether it was valid.
    pub(crate) fn record(&mut self, area: &str, response: Option<&serde_json::Value>) -> bool {
        match response.map(parse_search_response) {
            Some(parsed) if parsed.search_found.is_some() => {
                self.valid.push(AreaCheck {
                    area: area.to_string(),
                    search_found: parsed.search_found,
                    area_codes: parsed.area_codes.len(),
                });
                true
            }
            _ => {
                self.invalid.push(area.to_string());
                false
            }
        }
    }
}

/// Searches every catalog area in turn and prints which ones resolve.
///
/// # Errors
///
/// Returns an error only if `output` cannot be written.
pub(crate) async fn run_validate_areas(
    client: &ScansanClient,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let mut validation = AreaValidation::default();
    for area in uk_areas().iter().filter(|a| !is_placeholder_area(a)) {
        let response = match SearchQuery::by_area_name(area) {
            Ok(query) => client.search(&query).await,
            Err(_) => None,
        };
        let valid = validation.record(area, response.as_ref());
        tracing::debug!(%area, valid, "area checked");
    }

    println!(
        "{} valid, {} invalid",
        validation.valid.len(),
        validation.invalid.len()
    );
    for area in &validation.invalid {
        println!("  invalid: {area}");
    }

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&validation)?;
        std::fs::write(path, json)
            .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
