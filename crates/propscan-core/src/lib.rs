//! Domain types and pure helpers shared by the property-search crates.
//!
//! Nothing in this crate performs I/O except [`load_app_config`], which reads
//! the process environment.

pub mod app_config;
pub mod areas;
pub mod config;
pub mod property;
pub mod query;
pub mod sort;
pub mod sustainability;
pub mod validate;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use areas::{is_placeholder_area, uk_areas, DEFAULT_AREA};
pub use config::{
    load_app_config, load_app_config_from_env, DEFAULT_API_BASE_URL, DEFAULT_USER_AGENT,
};
pub use property::{ParsedSearchResult, PropertyRecord};
pub use query::{SearchQuery, SearchRequest};
pub use sort::{sort_properties, SortOption};
pub use sustainability::SustainabilityBand;
pub use validate::{is_full_postcode, validate_search_input, InputError};

/// Errors raised while building domain values from untrusted input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("a search needs either an area name or a district and street, not both")]
    AmbiguousQuery,

    #[error("a search needs an area name or a district and street")]
    EmptyQuery,

    #[error("district and street must be supplied together")]
    IncompleteStreetQuery,

    #[error("unknown sort option: {0}")]
    UnknownSortOption(String),
}

/// Errors raised while loading [`AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
