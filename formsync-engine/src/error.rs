//! Error types for the sync engine.
//!
//! Only configuration failures cross the engine boundary as errors; every
//! other failure (missing/malformed persisted data, backend faults,
//! unmatched restore records) is non-fatal and surfaces through the
//! `tracing` diagnostic channel instead.

use thiserror::Error;

/// Result type for engine configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Fatal configuration errors, raised synchronously at Start.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The resolved storage key was empty after trimming.
    #[error("storage key is empty after trimming")]
    EmptyKey,

    /// The resolved storage key is already registered by an active engine.
    #[error("storage key already in use: {0}")]
    DuplicateKey(String),
}
