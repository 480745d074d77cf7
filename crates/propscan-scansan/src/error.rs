use thiserror::Error;

/// Errors raised on the gateway's internal request path.
///
/// The public endpoint methods of [`crate::ScansanClient`] log these and
/// return `None`; only client construction surfaces them to callers.
#[derive(Debug, Error)]
pub enum ScansanError {
    /// Network, TLS or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body was not valid JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// A required identifier was blank, so no request was sent.
    #[error("missing identifier for {endpoint}: {field}")]
    MissingIdentifier {
        endpoint: &'static str,
        field: &'static str,
    },
}
