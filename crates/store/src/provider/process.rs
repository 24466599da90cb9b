//! Process environment provider backed by `std::env`.

use super::EnvProvider;

/// The real OS process environment.
///
/// Writes mutate process-global state. `std::env::set_var` is unsound when
/// another thread concurrently reads or writes the environment, so loads
/// through this provider must happen on a single thread or be serialized by
/// the caller. The store documents the same requirement.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values are treated as unset, same as `var` itself.
        std::env::var(key).ok()
    }

    fn set_var(&mut self, key: &str, value: &str) {
        // SAFETY: callers must not read or write the environment from other
        // threads while a load is in progress; see the type-level docs.
        unsafe { std::env::set_var(key, value) }
    }
}
