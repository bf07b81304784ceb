//! Typed errors for record mutations.
//!
//! Callers (CLI, HTTP handlers) need to tell "bad request" apart from
//! "unknown city", so mutation failures carry a variant per cause rather
//! than an opaque message.

use thiserror::Error;

use crate::core::types::BuildingKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackError {
    #[error("city not found: {0}")]
    CityNotFound(String),

    #[error("city already exists: {0}")]
    CityExists(String),

    #[error("count too high for {kind}: {count}")]
    CountTooHigh { kind: BuildingKind, count: i64 },
}
