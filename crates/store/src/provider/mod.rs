//! Environment provider abstraction.
//!
//! Responsibilities:
//! - Define the [`EnvProvider`] capability used by the store for reads from
//!   and writes to an environment variable table.
//! - Provide [`ProcessEnv`] (the real OS process environment) and
//!   [`MemoryEnv`] (an in-memory table for deterministic tests).
//!
//! Does NOT handle:
//! - Empty-value filtering or injection precedence (see `store/mod.rs`).
//!
//! Invariants:
//! - `var` returns whatever the table holds, including empty strings; the
//!   store decides whether an empty value counts as absent.

mod memory;
mod process;

pub use memory::MemoryEnv;
pub use process::ProcessEnv;

/// Read/write access to an environment variable table.
///
/// The store is generic over this trait so the process environment can be
/// swapped for an in-memory fake in tests, and so platform-specific access
/// lives behind a single seam.
pub trait EnvProvider {
    /// Return the value for `key`, or `None` if the variable is unset.
    fn var(&self, key: &str) -> Option<String>;

    /// Set `key` to `value`, overwriting any existing value.
    fn set_var(&mut self, key: &str, value: &str);
}
