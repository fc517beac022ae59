//! Search criteria types for the property catalog
//!
//! A criteria record combines all active constraints with logical AND.
//! Present-but-empty strings and the `"any"` / `"any type"` sentinels
//! mean "no constraint", never "match nothing".

use serde::Deserialize;

use crate::config::InvalidThresholdPolicy;
use crate::error::ApiError;

/// Sort order for search results. `Newest` performs no reordering:
/// catalog source order is newest-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
}

/// Raw query parameters as they arrive on `GET /properties`.
///
/// Bedroom/bathroom thresholds stay as strings so the sentinel value
/// `"any"` and malformed input can be handled per the configured policy.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PropertyQuery {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub min_price: Option<i64>,
    #[serde(default)]
    pub max_price: Option<i64>,
    #[serde(default)]
    pub bedrooms: Option<String>,
    #[serde(default)]
    pub bathrooms: Option<String>,
    #[serde(default)]
    pub sort_by: Option<SortBy>,
}

/// Normalized search constraints. Every field is optional; `None` means
/// the constraint is not applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    /// Case-insensitive substring match against the address field.
    pub location: Option<String>,
    /// Case-insensitive exact match against the property type label.
    pub property_type: Option<String>,
    /// Inclusive on both bounds.
    pub price_range: Option<(i64, i64)>,
    pub min_bedrooms: Option<u32>,
    pub min_bathrooms: Option<f64>,
    pub sort_by: SortBy,
}

impl SearchCriteria {
    /// Normalize raw query params into criteria, applying sentinel rules
    /// and the configured policy for malformed numeric thresholds.
    pub fn from_query(
        query: PropertyQuery,
        policy: InvalidThresholdPolicy,
    ) -> Result<Self, ApiError> {
        let location = query
            .location
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim().to_string());

        let property_type = query
            .property_type
            .filter(|s| !s.trim().is_empty() && !s.trim().eq_ignore_ascii_case("any type"))
            .map(|s| s.trim().to_string());

        let price_range = match (query.min_price, query.max_price) {
            (None, None) => None,
            (min, max) => {
                let lo = min.unwrap_or(0);
                let hi = max.unwrap_or(i64::MAX);
                if lo > hi {
                    return Err(ApiError::bad_request(
                        "min_price must not exceed max_price",
                    ));
                }
                Some((lo, hi))
            }
        };

        let min_bedrooms = parse_threshold(query.bedrooms, "bedrooms", policy, |_: &u32| true)?;
        // "nan"/"inf" parse as f64 but are meaningless thresholds (a NaN
        // minimum would match everything), so they count as malformed.
        let min_bathrooms =
            parse_threshold(query.bathrooms, "bathrooms", policy, |v: &f64| v.is_finite())?;

        Ok(Self {
            location,
            property_type,
            price_range,
            min_bedrooms,
            min_bathrooms,
            sort_by: query.sort_by.unwrap_or_default(),
        })
    }
}

/// Parse a "minimum count" threshold. Empty strings and the `"any"`
/// sentinel unset the constraint. Anything else must parse as a number
/// and satisfy `valid`; failures are dropped or rejected per the policy.
fn parse_threshold<T: std::str::FromStr>(
    raw: Option<String>,
    field: &str,
    policy: InvalidThresholdPolicy,
    valid: fn(&T) -> bool,
) -> Result<Option<T>, ApiError> {
    let Some(raw) = raw else { return Ok(None) };
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("any") {
        return Ok(None);
    }
    match raw.parse::<T>() {
        Ok(value) if valid(&value) => Ok(Some(value)),
        _ => match policy {
            InvalidThresholdPolicy::Ignore => Ok(None),
            InvalidThresholdPolicy::Reject => Err(ApiError::bad_request(format!(
                "{field} must be a number or \"any\", got {raw:?}"
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_yields_unconstrained_criteria() {
        let criteria =
            SearchCriteria::from_query(PropertyQuery::default(), InvalidThresholdPolicy::Ignore)
                .unwrap();
        assert_eq!(criteria, SearchCriteria::default());
    }

    #[test]
    fn sentinels_unset_their_criterion() {
        let query = PropertyQuery {
            location: Some("   ".to_string()),
            property_type: Some("Any Type".to_string()),
            bedrooms: Some("any".to_string()),
            bathrooms: Some(String::new()),
            ..Default::default()
        };
        let criteria =
            SearchCriteria::from_query(query, InvalidThresholdPolicy::Reject).unwrap();
        assert_eq!(criteria, SearchCriteria::default());
    }

    #[test]
    fn partial_price_bounds_fill_in_the_missing_end() {
        let query = PropertyQuery {
            min_price: Some(700_000),
            ..Default::default()
        };
        let criteria =
            SearchCriteria::from_query(query, InvalidThresholdPolicy::Ignore).unwrap();
        assert_eq!(criteria.price_range, Some((700_000, i64::MAX)));
    }

    #[test]
    fn inverted_price_range_is_rejected() {
        let query = PropertyQuery {
            min_price: Some(900_000),
            max_price: Some(100_000),
            ..Default::default()
        };
        assert!(SearchCriteria::from_query(query, InvalidThresholdPolicy::Ignore).is_err());
    }

    #[test]
    fn malformed_threshold_follows_policy() {
        let query = || PropertyQuery {
            bedrooms: Some("four".to_string()),
            ..Default::default()
        };

        let lenient =
            SearchCriteria::from_query(query(), InvalidThresholdPolicy::Ignore).unwrap();
        assert_eq!(lenient.min_bedrooms, None);

        assert!(SearchCriteria::from_query(query(), InvalidThresholdPolicy::Reject).is_err());
    }

    #[test]
    fn non_finite_bathroom_threshold_counts_as_malformed() {
        for bad in ["nan", "inf", "-inf", "NaN"] {
            let query = || PropertyQuery {
                bathrooms: Some(bad.to_string()),
                ..Default::default()
            };

            let lenient =
                SearchCriteria::from_query(query(), InvalidThresholdPolicy::Ignore).unwrap();
            assert_eq!(lenient.min_bathrooms, None, "{bad} should be dropped");

            assert!(
                SearchCriteria::from_query(query(), InvalidThresholdPolicy::Reject).is_err(),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn fractional_bathroom_threshold_parses() {
        let query = PropertyQuery {
            bathrooms: Some("1.5".to_string()),
            ..Default::default()
        };
        let criteria =
            SearchCriteria::from_query(query, InvalidThresholdPolicy::Reject).unwrap();
        assert_eq!(criteria.min_bathrooms, Some(1.5));
    }
}
