//! Tests for injection precedence against the environment provider.
//!
//! Pairs are fed through `apply_line` directly, so no filesystem or cwd
//! changes are needed; a `MemoryEnv` stands in for the process environment.

use crate::provider::MemoryEnv;
use crate::store::EnvStore;

#[test]
fn test_absent_provider_value_is_injected() {
    let mut store = EnvStore::with_provider(MemoryEnv::new());
    store.apply_line("KEY=file_value");

    assert_eq!(store.provider().get("KEY"), Some("file_value"));
}

#[test]
fn test_empty_provider_value_is_injected_over() {
    let mut env = MemoryEnv::new();
    env.set("KEY", "");

    let mut store = EnvStore::with_provider(env);
    store.apply_line("KEY=file_value");

    // Present-but-empty counts as absent for injection.
    assert_eq!(store.provider().get("KEY"), Some("file_value"));
}

#[test]
fn test_nonempty_provider_value_is_preserved() {
    let mut env = MemoryEnv::new();
    env.set("FOO", "system_value");

    let mut store = EnvStore::with_provider(env);
    store.apply_line("FOO=file_value");

    // The provider keeps the pre-existing value, the store reflects the file.
    assert_eq!(store.provider().get("FOO"), Some("system_value"));
    assert_eq!(store.get("FOO").as_deref(), Some("file_value"));
}

#[test]
fn test_system_override_replaces_provider_value() {
    let mut env = MemoryEnv::new();
    env.set("FOO", "system_value");

    let mut store = EnvStore::with_provider(env).with_system_override(true);
    store.apply_line("FOO=file_value");

    assert_eq!(store.provider().get("FOO"), Some("file_value"));
    assert_eq!(store.get("FOO").as_deref(), Some("file_value"));
}

#[test]
fn test_duplicate_pair_does_not_reinject() {
    let mut store = EnvStore::with_provider(MemoryEnv::new());
    store.apply_line("KEY=first");
    store.apply_line("KEY=second");

    // First injection set the provider; the second pair finds a non-empty
    // provider value (its own earlier write) and leaves it alone.
    assert_eq!(store.provider().get("KEY"), Some("first"));
    assert_eq!(store.get("KEY").as_deref(), Some("second"));
}
