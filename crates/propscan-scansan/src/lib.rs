//! Gateway to the `ScanSan` property-data API plus the normalisation of its
//! loosely-shaped JSON payloads.

pub mod client;
pub mod error;
pub mod history;
pub mod parse;
mod postcode;
pub mod types;
pub mod valuation;

pub use client::ScansanClient;
pub use error::ScansanError;
pub use history::{valuation_series, ValuationPoint};
pub use parse::parse_search_response;
pub use types::{CurrentValuation, PostcodeKey};
pub use valuation::{current_valuations_from_payload, derive_current_price};
