//! Centralized constants for the env-store workspace.

/// Filename searched for in the current working directory by
/// [`EnvStore::load`](crate::EnvStore::load).
pub const DEFAULT_ENV_FILENAME: &str = ".env";
