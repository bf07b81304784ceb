//! City data storage: whole-file JSON read/write.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::types::CityRecord;

/// Load city records from disk.
///
/// A missing file is first-run, not an error: an empty list is written so the
/// file exists from then on, and an empty list is returned.
pub fn load_cities(path: &Path) -> Result<Vec<CityRecord>> {
    if !path.exists() {
        debug!(path = %path.display(), "data file missing, creating empty store");
        write_cities(path, &[])?;
        return Ok(Vec::new());
    }
    debug!(path = %path.display(), "loading city data");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read city data {}", path.display()))?;
    let cities: Vec<CityRecord> = serde_json::from_str(&contents)
        .with_context(|| format!("parse city data {}", path.display()))?;
    debug!(count = cities.len(), "city data loaded");
    Ok(cities)
}

/// Atomically write city records to disk (temp file + rename).
pub fn write_cities(path: &Path, cities: &[CityRecord]) -> Result<()> {
    debug!(path = %path.display(), count = cities.len(), "writing city data");
    let mut buf = serde_json::to_string_pretty(cities)?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("city data path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp city data {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace city data {}", path.display()))?;
    Ok(())
}
