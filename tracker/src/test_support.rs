//! Test-only helpers for constructing city records.

use crate::core::types::CityRecord;

/// Create a fresh record with default fields and no neighbors.
pub fn city(name: &str) -> CityRecord {
    CityRecord::new(name)
}

/// Create a record with an explicit neighbor list.
///
/// The highlight is left at the default red; call `recompute_highlights`
/// when a test needs derived colors.
pub fn city_with_neighbors(name: &str, neighbors: &[&str]) -> CityRecord {
    let mut record = CityRecord::new(name);
    record.neighbors = neighbors.iter().map(|n| (*n).to_string()).collect();
    record
}
