//! Search query modes accepted by the upstream search endpoint.
//!
//! The upstream API accepts exactly one of two parameter shapes: a free-form
//! area name, or a postcode district paired with a street name. [`SearchQuery`]
//! encodes that choice so an invalid combination cannot reach the gateway.

use serde::{Deserialize, Serialize};

use crate::areas::is_placeholder_area;
use crate::CoreError;

/// A resolved search mode. Exactly one shape is ever populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SearchQuery {
    ByAreaName { name: String },
    ByDistrictAndStreet { district: String, street: String },
}

impl SearchQuery {
    /// Builds an area-name query. The name is trimmed.
    ///
    /// # Errors
    ///
    /// [`CoreError::EmptyQuery`] if `name` is blank.
    pub fn by_area_name(name: &str) -> Result<Self, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::EmptyQuery);
        }
        Ok(Self::ByAreaName {
            name: name.to_string(),
        })
    }

    /// Builds a district + street query. The district is upper-cased.
    ///
    /// # Errors
    ///
    /// - [`CoreError::EmptyQuery`] if both parts are blank.
    /// - [`CoreError::IncompleteStreetQuery`] if exactly one part is blank.
    pub fn by_district_and_street(district: &str, street: &str) -> Result<Self, CoreError> {
        let (district, street) = (district.trim(), street.trim());
        match (district.is_empty(), street.is_empty()) {
            (true, true) => Err(CoreError::EmptyQuery),
            (true, false) | (false, true) => Err(CoreError::IncompleteStreetQuery),
            (false, false) => Ok(Self::ByDistrictAndStreet {
                district: district.to_uppercase(),
                street: street.to_string(),
            }),
        }
    }

    /// Builds a query from optional parts, rejecting ambiguous or empty input.
    ///
    /// Blank strings count as absent.
    ///
    /// # Errors
    ///
    /// - [`CoreError::AmbiguousQuery`] if an area name and a district/street
    ///   pair are both supplied.
    /// - [`CoreError::IncompleteStreetQuery`] if only one of district/street is
    ///   supplied.
    /// - [`CoreError::EmptyQuery`] if nothing is supplied.
    pub fn from_parts(
        area_name: Option<&str>,
        district: Option<&str>,
        street: Option<&str>,
    ) -> Result<Self, CoreError> {
        let area_name = non_blank(area_name);
        let district = non_blank(district);
        let street = non_blank(street);

        match (area_name, district, street) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(CoreError::AmbiguousQuery),
            (Some(name), None, None) => Self::by_area_name(name),
            (None, d, s) => Self::by_district_and_street(d.unwrap_or(""), s.unwrap_or("")),
        }
    }

    /// Query-string pairs for the upstream search endpoint.
    #[must_use]
    pub fn query_params(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::ByAreaName { name } => vec![("area_name", name.as_str())],
            Self::ByDistrictAndStreet { district, street } => vec![
                ("gbr_district", district.as_str()),
                ("gbr_street", street.as_str()),
            ],
        }
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ByAreaName { name } => write!(f, "area \"{name}\""),
            Self::ByDistrictAndStreet { district, street } => {
                write!(f, "street \"{street}\" in {district}")
            }
        }
    }
}

/// Raw search input as collected by a presentation layer.
///
/// `area` is the label picked from the area selector, `query` the free-text
/// box, `district`/`street` the advanced street search pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub area: String,
    pub query: String,
    pub district: String,
    pub street: String,
}

impl SearchRequest {
    #[must_use]
    pub fn new(area: &str, query: &str) -> Self {
        Self {
            area: area.to_string(),
            query: query.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_street(mut self, district: &str, street: &str) -> Self {
        self.district = district.to_string();
        self.street = street.to_string();
        self
    }

    /// Picks the query mode, in priority order:
    ///
    /// 1. district and street both present
    /// 2. free-text query present
    /// 3. a selected area that is not a placeholder
    ///
    /// Returns `None` when none apply; no upstream call should be made then.
    #[must_use]
    pub fn mode(&self) -> Option<SearchQuery> {
        let district = non_blank(Some(&self.district));
        let street = non_blank(Some(&self.street));
        if let (Some(d), Some(s)) = (district, street) {
            return SearchQuery::by_district_and_street(d, s).ok();
        }
        if let Some(q) = non_blank(Some(&self.query)) {
            return SearchQuery::by_area_name(q).ok();
        }
        if !is_placeholder_area(&self.area) {
            return SearchQuery::by_area_name(&self.area).ok();
        }
        None
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
