//! Postcode-scoped endpoints: sale history and current/historical valuations.

use serde_json::Value;

use crate::client::ScansanClient;
use crate::error::ScansanError;
use crate::types::PostcodeKey;

impl ScansanClient {
    /// Fetches recorded sales for a postcode (`postcode/{code}/sale/history`).
    pub async fn sale_history(&self, key: &PostcodeKey) -> Option<Value> {
        self.postcode_get("sale_history", key, &["sale", "history"])
            .await
    }

    /// Fetches current valuations for the properties under a postcode
    /// (`postcode/{code}/valuations/current`).
    pub async fn current_valuations(&self, key: &PostcodeKey) -> Option<Value> {
        self.postcode_get("current_valuations", key, &["valuations", "current"])
            .await
    }

    /// Fetches dated valuation history for the properties under a postcode
    /// (`postcode/{code}/valuations/historical`).
    pub async fn historical_valuations(&self, key: &PostcodeKey) -> Option<Value> {
        self.postcode_get("historical_valuations", key, &["valuations", "historical"])
            .await
    }

    async fn postcode_get(
        &self,
        endpoint: &'static str,
        key: &PostcodeKey,
        suffix: &[&str],
    ) -> Option<Value> {
        let code = key.value();
        if code.is_empty() {
            Self::log_failure(
                endpoint,
                &ScansanError::MissingIdentifier {
                    endpoint,
                    field: key.param_name(),
                },
            );
            return None;
        }

        let mut segments = vec!["postcode", code];
        segments.extend_from_slice(suffix);
        let url = self.build_url(&segments, &[(key.param_name(), code)]);
        self.fetch(endpoint, &url).await
    }
}
