//! Error types for store lookups.
//!
//! Responsibilities:
//! - Define the error surface of the public API.
//!
//! Does NOT handle:
//! - File-level load failures: those are absorbed into `load`'s boolean
//!   result after a diagnostic (see `store/mod.rs`).
//! - Per-line parse problems: those are diagnostics, not errors.
//!
//! Invariants:
//! - `MissingVar` always carries the requested key name.

use thiserror::Error;

/// Errors surfaced by [`EnvStore`](crate::EnvStore) accessors.
///
/// Only [`require`](crate::EnvStore::require) hard-fails; every other
/// accessor degrades to `None` on a miss.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Required environment variable missing: {0}")]
    MissingVar(String),
}
