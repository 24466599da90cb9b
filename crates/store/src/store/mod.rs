//! The env store: file discovery, loading, injection, and accessors.
//!
//! Responsibilities:
//! - Locate the requested file among the direct entries of the current
//!   working directory.
//! - Drive the line parser over the file and populate the in-memory map.
//! - Inject accepted pairs into the environment provider, honoring values
//!   already set there.
//! - Serve raw and typed lookups, store first, provider second.
//!
//! Does NOT handle:
//! - Line classification rules (see `parser.rs`).
//! - The byte-order swap itself (see `numeric.rs`).
//!
//! Invariants / Assumptions:
//! - The store is last-write-wins; the provider is first-writer-wins unless
//!   system override is enabled.
//! - An empty provider value counts as absent, both for injection and for
//!   lookup fallback.
//! - Line-level problems never fail a load; only locate/open failures do.

mod error;
mod numeric;
mod parser;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::constants::DEFAULT_ENV_FILENAME;
use crate::provider::{EnvProvider, ProcessEnv};
use parser::{MalformedReason, ParsedLine};

pub use error::StoreError;
pub use numeric::EnvNumeric;

/// In-process store of key-value pairs loaded from a `.env`-style file.
///
/// Generic over an [`EnvProvider`] so tests can substitute an in-memory
/// environment; defaults to the real process environment.
pub struct EnvStore<P: EnvProvider = ProcessEnv> {
    vars: HashMap<String, String>,
    provider: P,
    override_system: bool,
}

impl EnvStore<ProcessEnv> {
    /// Create an empty store over the process environment.
    pub fn new() -> Self {
        Self::with_provider(ProcessEnv)
    }
}

impl Default for EnvStore<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: EnvProvider> EnvStore<P> {
    /// Create an empty store over the given environment provider.
    pub fn with_provider(provider: P) -> Self {
        Self {
            vars: HashMap::new(),
            provider,
            override_system: false,
        }
    }

    /// Set whether injection overwrites provider values unconditionally.
    ///
    /// Disabled by default: variables already set in the environment win over
    /// the file at the provider level.
    pub fn with_system_override(mut self, override_system: bool) -> Self {
        self.override_system = override_system;
        self
    }

    /// Load `.env` from the current working directory.
    ///
    /// Returns true if the file was found and opened, regardless of how many
    /// individual lines were malformed. See [`load_from`](Self::load_from).
    pub fn load(&mut self) -> bool {
        self.load_from(DEFAULT_ENV_FILENAME)
    }

    /// Load the named file from the current working directory.
    ///
    /// The directory is scanned non-recursively for a regular file whose name
    /// matches exactly; directory iteration order is OS-dependent, so with
    /// several candidates of the same name (not possible on common
    /// filesystems) the first one wins. Malformed lines are skipped with a
    /// diagnostic and do not affect the result. May be called repeatedly; the
    /// store accumulates entries and the latest load wins on overlap.
    pub fn load_from(&mut self, filename: &str) -> bool {
        let Some(path) = locate_in_cwd(filename) else {
            debug!(filename, "env file not found in current directory");
            return false;
        };

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to open env file");
                return false;
            }
        };

        for line in BufReader::new(file).lines() {
            match line {
                Ok(line) => self.apply_line(&line),
                Err(err) => {
                    // Mid-file read failure: the file itself was found and
                    // opened, so the load still counts as successful.
                    warn!(path = %path.display(), %err, "failed to read env file");
                    break;
                }
            }
        }

        true
    }

    fn apply_line(&mut self, raw: &str) {
        match parser::parse_line(raw) {
            ParsedLine::Skip => {}
            ParsedLine::Malformed(MalformedReason::MissingSeparator) => {}
            ParsedLine::Malformed(reason) => {
                warn!(line = raw.trim(), ?reason, "invalid line in env file");
            }
            ParsedLine::Pair { key, value } => {
                // Fires for in-file duplicates and for overlaps with an
                // earlier load alike.
                if self.vars.contains_key(&key) {
                    warn!(%key, "key already present in store, overwriting");
                }
                self.inject(&key, &value);
                self.vars.insert(key, value);
            }
        }
    }

    /// Copy a pair into the provider unless a non-empty value already exists
    /// there. With system override enabled the provider is set regardless.
    fn inject(&mut self, key: &str, value: &str) {
        let existing = self.provider.var(key);
        if self.override_system || existing.as_deref().is_none_or(str::is_empty) {
            self.provider.set_var(key, value);
        }
    }

    /// Look up a variable: store first, then the provider.
    ///
    /// An empty provider value counts as absent.
    pub fn get(&self, key: &str) -> Option<String> {
        if let Some(value) = self.vars.get(key) {
            return Some(value.clone());
        }
        self.provider.var(key).filter(|value| !value.is_empty())
    }

    /// Look up a variable that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingVar`] when the key is absent from both
    /// the store and the provider. This is the only accessor that hard-fails.
    pub fn require(&self, key: &str) -> Result<String, StoreError> {
        self.get(key)
            .ok_or_else(|| StoreError::MissingVar(key.to_string()))
    }

    /// Look up a variable and parse it as `T` in native byte order.
    ///
    /// Parsing is strict: trailing garbage, empty strings, and out-of-range
    /// values all yield `None`, indistinguishable from a missing key.
    pub fn get_ne<T: EnvNumeric>(&self, key: &str) -> Option<T> {
        self.get(key)?.parse().ok()
    }

    /// Like [`get_ne`](Self::get_ne), with the result's in-memory
    /// representation adjusted to little-endian byte order.
    pub fn get_le<T: EnvNumeric>(&self, key: &str) -> Option<T> {
        self.get_ne(key).map(|value: T| {
            if cfg!(target_endian = "little") {
                value
            } else {
                value.swap_byte_order()
            }
        })
    }

    /// Like [`get_ne`](Self::get_ne), with the result's in-memory
    /// representation adjusted to big-endian byte order.
    pub fn get_be<T: EnvNumeric>(&self, key: &str) -> Option<T> {
        self.get_ne(key).map(|value: T| {
            if cfg!(target_endian = "big") {
                value
            } else {
                value.swap_byte_order()
            }
        })
    }

    /// Number of entries in the store (provider entries not counted).
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// True if no entries have been loaded.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Borrow the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

/// Scan the current working directory's direct entries for a regular file
/// with the exact name. Non-recursive.
fn locate_in_cwd(filename: &str) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let entries = std::fs::read_dir(cwd).ok()?;
    for entry in entries.flatten() {
        let is_file = entry.file_type().is_ok_and(|kind| kind.is_file());
        if is_file && entry.file_name() == filename {
            return Some(entry.path());
        }
    }
    None
}
