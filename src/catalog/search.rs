//! Property filter/sort engine
//!
//! Given an immutable source list and a criteria record, produce the
//! subset matching every active constraint. Relative source order is
//! preserved unless a price sort is requested; source order is assumed
//! newest-first, so the default `newest` sort performs no reordering.

use std::cmp::Reverse;

use crate::domain::{Property, SearchCriteria, SortBy};

/// Run the criteria against a source list. The source is never mutated.
pub fn search(properties: &[Property], criteria: &SearchCriteria) -> Vec<Property> {
    let mut results: Vec<Property> = properties
        .iter()
        .filter(|p| matches(p, criteria))
        .cloned()
        .collect();

    match criteria.sort_by {
        SortBy::Newest => {}
        // Stable sorts keep source order within equal prices.
        SortBy::PriceAsc => results.sort_by_key(|p| p.price),
        SortBy::PriceDesc => results.sort_by_key(|p| Reverse(p.price)),
    }

    results
}

/// All active constraints combine with logical AND.
fn matches(property: &Property, criteria: &SearchCriteria) -> bool {
    if let Some(location) = &criteria.location {
        if !contains_ignore_case(&property.address, location) {
            return false;
        }
    }

    if let Some(property_type) = &criteria.property_type {
        if !property.property_type.eq_ignore_ascii_case(property_type) {
            return false;
        }
    }

    if let Some((lo, hi)) = criteria.price_range {
        // Inclusive on both ends
        if property.price < lo || property.price > hi {
            return false;
        }
    }

    if let Some(min) = criteria.min_bedrooms {
        if property.bedrooms < min {
            return false;
        }
    }

    if let Some(min) = criteria.min_bathrooms {
        if property.bathrooms < min {
            return false;
        }
    }

    true
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::seed_properties;

    fn ids(properties: &[Property]) -> Vec<&str> {
        properties.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn unconstrained_criteria_returns_source_unchanged() {
        let source = seed_properties();
        let results = search(&source, &SearchCriteria::default());
        assert_eq!(results, source);
    }

    #[test]
    fn price_range_is_inclusive_on_both_ends() {
        let source = seed_properties();
        let criteria = SearchCriteria {
            price_range: Some((750_000, 950_000)),
            ..Default::default()
        };
        let results = search(&source, &criteria);
        assert!(results.iter().any(|p| p.price == 750_000));
        assert!(results.iter().any(|p| p.price == 950_000));
    }

    #[test]
    fn price_range_scenario_preserves_source_order() {
        // Seed prices: 750000, 2500000, 950000, 650000, 875000, 1250000
        let source = seed_properties();
        let criteria = SearchCriteria {
            price_range: Some((700_000, 1_000_000)),
            ..Default::default()
        };
        let results = search(&source, &criteria);
        assert_eq!(
            results.iter().map(|p| p.price).collect::<Vec<_>>(),
            vec![750_000, 950_000, 875_000]
        );
        assert_eq!(ids(&results), vec!["prop1", "prop3", "prop5"]);
    }

    #[test]
    fn location_match_is_case_insensitive() {
        let source = seed_properties();
        let upper = SearchCriteria {
            location: Some("SAN FRANCISCO".to_string()),
            ..Default::default()
        };
        let lower = SearchCriteria {
            location: Some("san francisco".to_string()),
            ..Default::default()
        };
        assert_eq!(search(&source, &upper), search(&source, &lower));
        assert_eq!(ids(&search(&source, &upper)), vec!["prop1"]);
    }

    #[test]
    fn property_type_is_case_insensitive_exact_match() {
        let source = seed_properties();
        let criteria = SearchCriteria {
            property_type: Some("apartment".to_string()),
            ..Default::default()
        };
        let results = search(&source, &criteria);
        // "Apartment" matches; "Loft" does not, even though prop4 is
        // titled "Urban Loft Apartment".
        assert_eq!(ids(&results), vec!["prop1"]);
    }

    #[test]
    fn bedroom_threshold_is_a_minimum() {
        let source = seed_properties();
        let criteria = SearchCriteria {
            min_bedrooms: Some(4),
            ..Default::default()
        };
        let results = search(&source, &criteria);
        // The 5-bed villa and the 4-bed suburban home
        assert_eq!(ids(&results), vec!["prop2", "prop3"]);
    }

    #[test]
    fn fractional_bathroom_threshold_matches_inclusively() {
        let source = seed_properties();
        let criteria = SearchCriteria {
            min_bathrooms: Some(2.5),
            ..Default::default()
        };
        let results = search(&source, &criteria);
        assert!(results.iter().all(|p| p.bathrooms >= 2.5));
        assert!(results.iter().any(|p| p.bathrooms == 2.5));
    }

    #[test]
    fn constraints_combine_with_and() {
        let source = seed_properties();
        let criteria = SearchCriteria {
            location: Some("CA".to_string()),
            price_range: Some((600_000, 1_000_000)),
            min_bedrooms: Some(2),
            ..Default::default()
        };
        let results = search(&source, &criteria);
        assert_eq!(ids(&results), vec!["prop1", "prop3", "prop5"]);
    }

    #[test]
    fn price_sorts_are_exact_reverses_without_ties() {
        let source = seed_properties();
        let asc = search(
            &source,
            &SearchCriteria {
                sort_by: SortBy::PriceAsc,
                ..Default::default()
            },
        );
        let desc = search(
            &source,
            &SearchCriteria {
                sort_by: SortBy::PriceDesc,
                ..Default::default()
            },
        );
        let mut reversed = desc.clone();
        reversed.reverse();
        assert_eq!(asc, reversed);
        assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[test]
    fn source_list_is_never_mutated() {
        let source = seed_properties();
        let before = source.clone();
        let _ = search(
            &source,
            &SearchCriteria {
                sort_by: SortBy::PriceAsc,
                ..Default::default()
            },
        );
        assert_eq!(source, before);
    }
}
