//! Property search: turns raw search input into [`PropertyRecord`]s using the
//! live `ScanSan` API, falling back to a small built-in sample table.
//!
//! [`PropertyRecord`]: propscan_core::PropertyRecord

pub mod mock;
pub mod resolver;

pub use mock::mock_resolve;
pub use resolver::{record_from_valuation, PropertyResolver, MAX_AREA_CODES, MAX_VALUATIONS_PER_CODE};
