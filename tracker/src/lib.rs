//! Great Work building slot tracker for city planning.
//!
//! This crate tracks which cities hold which Great Work buildings and how
//! many occupant slots each has filled, persisting everything to a single
//! JSON file. The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (record mutations, highlight
//!   derivation). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config and city data files).
//!
//! The CLI binary and the `tracker-ui` HTTP server both drive the same core
//! operations through [`io::store`].

pub mod core;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
