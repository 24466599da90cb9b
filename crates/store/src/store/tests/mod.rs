//! Tests for the env store.
//!
//! Responsibilities:
//! - Test line parsing rules (trimming, comments, quotes, malformed lines).
//! - Test file discovery and load semantics.
//! - Test injection precedence against pre-existing provider values.
//! - Test raw and typed accessors, including byte-order handling.
//!
//! Invariants:
//! - Tests that change the current working directory or touch the real
//!   process environment hold `env_lock()` and are marked `#[serial]`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::PathBuf;
use std::sync::Mutex;

use tempfile::TempDir;

pub mod inject_tests;

/// Returns the global test lock for cwd and environment isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// RAII guard for temporarily changing the current working directory.
pub struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    pub fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}
