//! Record mutations over the in-memory city list.
//!
//! Every operation mutates the list in place and leaves it in a consistent
//! state: highlight colors are recomputed whenever neighbor data changes.
//! Lookups are linear scans; the tool tracks a handful of cities.

use crate::core::error::TrackError;
use crate::core::highlight::recompute_highlights;
use crate::core::types::{BuildingKind, CityRecord};

/// Append a fresh record for `name`.
///
/// Scrubs `name` from every existing neighbor list first, so re-adding a
/// previously removed city never leaves a stale self-reference behind.
pub fn add_city(cities: &mut Vec<CityRecord>, name: &str) -> Result<(), TrackError> {
    if cities.iter().any(|city| city.name == name) {
        return Err(TrackError::CityExists(name.to_string()));
    }
    for city in cities.iter_mut() {
        city.neighbors.retain(|neighbor| neighbor != name);
    }
    cities.push(CityRecord::new(name));
    recompute_highlights(cities);
    Ok(())
}

/// Remove the record for `name`.
///
/// Surviving neighbor lists keep any reference to the removed city;
/// `add_city` scrubs it on re-add.
pub fn remove_city(cities: &mut Vec<CityRecord>, name: &str) -> Result<(), TrackError> {
    let index = cities
        .iter()
        .position(|city| city.name == name)
        .ok_or_else(|| TrackError::CityNotFound(name.to_string()))?;
    cities.remove(index);
    recompute_highlights(cities);
    Ok(())
}

/// Set the occupant count for one building of one city.
///
/// The capacity bound is checked before the city lookup. Counts below zero
/// are accepted (`UNBUILT` marks an absent building). Highlights are not
/// recomputed; occupancy never influences color.
pub fn set_building_count(
    cities: &mut [CityRecord],
    name: &str,
    kind: BuildingKind,
    count: i64,
) -> Result<(), TrackError> {
    if count > kind.max_occupants() {
        return Err(TrackError::CountTooHigh { kind, count });
    }
    let city = cities
        .iter_mut()
        .find(|city| city.name == name)
        .ok_or_else(|| TrackError::CityNotFound(name.to_string()))?;
    city.buildings.insert(kind, count);
    Ok(())
}

/// Replace the neighbor list for one city and recolor everything.
pub fn set_neighbors(
    cities: &mut [CityRecord],
    name: &str,
    neighbors: Vec<String>,
) -> Result<(), TrackError> {
    let city = cities
        .iter_mut()
        .find(|city| city.name == name)
        .ok_or_else(|| TrackError::CityNotFound(name.to_string()))?;
    city.neighbors = neighbors;
    recompute_highlights(cities);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Highlight, UNBUILT, default_building_counts};
    use crate::test_support::{city, city_with_neighbors};

    #[test]
    fn add_city_appends_record() {
        let mut cities = vec![city("a")];
        add_city(&mut cities, "b").expect("add");

        assert_eq!(cities.len(), 2);
        assert_eq!(cities[1].name, "b");
        assert_eq!(cities[1].buildings, default_building_counts());
    }

    /// Re-adding a removed city scrubs stale references to it.
    #[test]
    fn add_city_scrubs_name_from_neighbor_lists() {
        let mut cities = vec![city_with_neighbors("a", &["b"])];
        add_city(&mut cities, "b").expect("add");

        assert!(cities[0].neighbors.is_empty());
    }

    #[test]
    fn add_city_recomputes_highlights() {
        let mut cities = vec![city_with_neighbors("a", &["c"])];
        add_city(&mut cities, "b").expect("add");

        assert_eq!(cities[0].highlight, Highlight::Green);
        assert_eq!(cities[1].highlight, Highlight::Red);
    }

    #[test]
    fn add_city_rejects_duplicate_name() {
        let mut cities = vec![city("a")];
        let err = add_city(&mut cities, "a").expect_err("duplicate");

        assert_eq!(err, TrackError::CityExists("a".to_string()));
        assert_eq!(cities.len(), 1);
    }

    #[test]
    fn remove_city_drops_record_and_recolors() {
        let mut cities = vec![
            city_with_neighbors("a", &["b"]),
            city_with_neighbors("b", &["a", "c"]),
        ];
        remove_city(&mut cities, "b").expect("remove");

        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "a");
        assert_eq!(cities[0].highlight, Highlight::Green);
    }

    #[test]
    fn remove_city_errors_when_missing() {
        let mut cities = vec![city("a")];
        let err = remove_city(&mut cities, "b").expect_err("missing");

        assert_eq!(err, TrackError::CityNotFound("b".to_string()));
    }

    #[test]
    fn set_building_count_updates_counter() {
        let mut cities = vec![city("a")];
        set_building_count(&mut cities, "a", BuildingKind::ArtMuseum, 2).expect("set");

        assert_eq!(cities[0].buildings[&BuildingKind::ArtMuseum], 2);
        // Other counters untouched.
        assert_eq!(cities[0].buildings[&BuildingKind::Monument], UNBUILT);
    }

    #[test]
    fn set_building_count_rejects_count_above_capacity() {
        let mut cities = vec![city("a")];
        let err =
            set_building_count(&mut cities, "a", BuildingKind::ArtMuseum, 4).expect_err("too high");

        assert_eq!(
            err,
            TrackError::CountTooHigh {
                kind: BuildingKind::ArtMuseum,
                count: 4
            }
        );
        assert_eq!(cities[0].buildings[&BuildingKind::ArtMuseum], UNBUILT);
    }

    /// The capacity bound is checked before the existence check.
    #[test]
    fn set_building_count_checks_capacity_before_lookup() {
        let mut cities = vec![city("a")];
        let err =
            set_building_count(&mut cities, "ghost", BuildingKind::Palace, 9).expect_err("bound");

        assert_eq!(
            err,
            TrackError::CountTooHigh {
                kind: BuildingKind::Palace,
                count: 9
            }
        );
    }

    #[test]
    fn set_building_count_errors_when_city_missing() {
        let mut cities = vec![city("a")];
        let err =
            set_building_count(&mut cities, "b", BuildingKind::ArtMuseum, 2).expect_err("missing");

        assert_eq!(err, TrackError::CityNotFound("b".to_string()));
    }

    #[test]
    fn set_neighbors_replaces_list_and_recolors() {
        let mut cities = vec![city("a")];
        set_neighbors(&mut cities, "a", vec!["b".to_string()]).expect("set");

        assert_eq!(cities[0].neighbors, vec!["b".to_string()]);
        assert_eq!(cities[0].highlight, Highlight::Green);
    }

    #[test]
    fn set_neighbors_errors_when_city_missing() {
        let mut cities: Vec<CityRecord> = Vec::new();
        let err = set_neighbors(&mut cities, "a", vec!["b".to_string()]).expect_err("missing");

        assert_eq!(err, TrackError::CityNotFound("a".to_string()));
    }
}
