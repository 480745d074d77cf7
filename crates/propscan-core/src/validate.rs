//! Synchronous checks on raw search input, run before any network call.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

// 1-2 letters, 1-2 digits, optional letter, whitespace, digit, 2 letters.
static FULL_POSTCODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{1,2}\d{1,2}[A-Za-z]?\s+\d[A-Za-z]{2}$").expect("valid postcode regex")
});

/// User-facing rejection of search input. The `Display` text is the message
/// shown to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error(
        "Full postcodes (e.g. 'SS0 0BW', 'NG8 1BB') are not supported. \
         Search by area name (e.g. 'Brixton'), or use the postcode district \
         (e.g. 'SS0') together with a street name."
    )]
    FullPostcode { query: String },

    #[error(
        "To search by street, you must provide BOTH the postcode district AND the street name."
    )]
    IncompleteStreetSearch,
}

/// Returns `true` if `text` looks like a complete UK postcode such as
/// `"SS0 0BW"`. Outward codes alone (`"SW1A"`) do not match.
#[must_use]
pub fn is_full_postcode(text: &str) -> bool {
    FULL_POSTCODE_RE.is_match(text.trim())
}

/// Checks the free-text query and the district/street pair.
///
/// Whitespace-only fields count as empty.
///
/// # Errors
///
/// - [`InputError::FullPostcode`] if `query` is a full postcode.
/// - [`InputError::IncompleteStreetSearch`] if exactly one of `district` and
///   `street` is filled in.
pub fn validate_search_input(query: &str, district: &str, street: &str) -> Result<(), InputError> {
    if !query.trim().is_empty() && is_full_postcode(query) {
        return Err(InputError::FullPostcode {
            query: query.trim().to_string(),
        });
    }

    let has_district = !district.trim().is_empty();
    let has_street = !street.trim().is_empty();
    if has_district != has_street {
        return Err(InputError::IncompleteStreetSearch);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_postcodes_are_detected() {
        for code in ["SS0 0BW", "NG8 1BB", "SW1A 1AA", "m1 1ae", " EC1A  1BB "] {
            assert!(is_full_postcode(code), "{code} should be a full postcode");
        }
    }

    #[test]
    fn partial_postcodes_and_names_are_not_full_postcodes() {
        for text in ["SW1A", "Brixton", "NG8", "SS00BW", "SW1A 1A", ""] {
            assert!(!is_full_postcode(text), "{text} should not match");
        }
    }

    #[test]
    fn full_postcode_query_is_rejected() {
        let err = validate_search_input("SS0 0BW", "", "").unwrap_err();
        assert!(matches!(err, InputError::FullPostcode { ref query } if query == "SS0 0BW"));
        assert!(!err.to_string().is_empty());

        assert!(validate_search_input("NG8 1BB", "", "").is_err());
    }

    #[test]
    fn area_names_and_districts_pass() {
        assert_eq!(validate_search_input("Brixton", "", ""), Ok(()));
        assert_eq!(validate_search_input("SW1A", "", ""), Ok(()));
        assert_eq!(validate_search_input("", "", ""), Ok(()));
    }

    #[test]
    fn district_without_street_is_rejected() {
        let err = validate_search_input("", "SW1A", "").unwrap_err();
        assert_eq!(err, InputError::IncompleteStreetSearch);
        assert!(err.to_string().contains("BOTH"));
    }

    #[test]
    fn street_without_district_is_rejected() {
        assert_eq!(
            validate_search_input("", "  ", "Downing Street"),
            Err(InputError::IncompleteStreetSearch)
        );
    }

    #[test]
    fn district_and_street_together_pass() {
        assert_eq!(validate_search_input("Brixton", "SW1A", "Downing Street"), Ok(()));
    }
}
