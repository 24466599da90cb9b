//! In-memory environment provider for deterministic tests.

use std::collections::HashMap;

use super::EnvProvider;

/// An environment table held in a plain `HashMap`.
///
/// Behaves like [`ProcessEnv`](super::ProcessEnv) without touching the real
/// process environment, so tests can assert injection behavior without
/// cross-test contamination.
#[derive(Debug, Default, Clone)]
pub struct MemoryEnv {
    vars: HashMap<String, String>,
}

impl MemoryEnv {
    /// Create an empty environment table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a variable, as if it had been set before the store loaded.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Borrow the value for `key`, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

impl EnvProvider for MemoryEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set_var(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }
}
