//! Highlight color derivation from neighbor counts.

use crate::core::types::{CityRecord, Highlight};

/// Recolor every record from its neighbor count.
///
/// A city with no neighbors is red. Otherwise it is green when its neighbor
/// count is at or above the average across all records, orange when below.
/// An empty list is left untouched.
pub fn recompute_highlights(cities: &mut [CityRecord]) {
    if cities.is_empty() {
        return;
    }
    let total: usize = cities.iter().map(|city| city.neighbors.len()).sum();
    let average = total as f64 / cities.len() as f64;
    for city in cities.iter_mut() {
        city.highlight = if city.neighbors.is_empty() {
            Highlight::Red
        } else if city.neighbors.len() as f64 >= average {
            Highlight::Green
        } else {
            Highlight::Orange
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::city_with_neighbors;

    /// A city with no neighbors is red even if previously colored.
    #[test]
    fn no_neighbors_is_red() {
        let mut cities = vec![city_with_neighbors("a", &[])];
        cities[0].highlight = Highlight::Green;

        recompute_highlights(&mut cities);
        assert_eq!(cities[0].highlight, Highlight::Red);
    }

    /// Below-average neighbor counts turn orange.
    #[test]
    fn below_average_is_orange() {
        let mut cities = vec![
            city_with_neighbors("a", &["x"]),
            city_with_neighbors("b", &["x", "y", "z"]),
        ];

        recompute_highlights(&mut cities);
        assert_eq!(cities[0].highlight, Highlight::Orange);
        assert_eq!(cities[1].highlight, Highlight::Green);
    }

    /// A count exactly at the average counts as green.
    #[test]
    fn at_average_is_green() {
        let mut cities = vec![
            city_with_neighbors("a", &["x", "y"]),
            city_with_neighbors("b", &["x", "y"]),
        ];

        recompute_highlights(&mut cities);
        assert_eq!(cities[0].highlight, Highlight::Green);
        assert_eq!(cities[1].highlight, Highlight::Green);
    }

    #[test]
    fn empty_list_is_untouched() {
        let mut cities: Vec<CityRecord> = Vec::new();
        recompute_highlights(&mut cities);
        assert!(cities.is_empty());
    }
}
