//! Key-value configuration loading from `.env`-style files.
//!
//! This crate provides [`EnvStore`], an in-process store populated from a
//! line-oriented `KEY=VALUE` file found in the current working directory.
//! Loaded pairs are also injected into the process environment unless a
//! non-empty value is already present there. Lookups consult the store first
//! and fall back to the environment, with typed accessors that parse numeric
//! values and adjust their in-memory byte order on request.
//!
//! The store is not thread-safe and writes process-global state when used with
//! [`ProcessEnv`]; callers running multiple threads must serialize loads.

pub mod constants;
mod provider;
mod store;

pub use provider::{EnvProvider, MemoryEnv, ProcessEnv};
pub use store::{EnvNumeric, EnvStore, StoreError};
