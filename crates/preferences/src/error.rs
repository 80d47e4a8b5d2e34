//! Preference specific errors.

use thiserror::Error;

/// Errors raised while loading or persisting preferences.
#[derive(Error, Debug)]
pub enum PreferenceError {
    /// No per-user configuration directory on this platform
    #[error("Configuration directory not found")]
    ConfigDirNotFound,

    /// Reading or writing the storage medium failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored value has a different type than the reader expects
    #[error("Preference '{key}' is not a {expected}")]
    TypeMismatch { key: String, expected: &'static str },
}

impl PreferenceError {
    /// Returns true if the error came from the storage medium rather than from
    /// the stored data itself
    pub fn is_storage_related(&self) -> bool {
        matches!(self, PreferenceError::Io(_) | PreferenceError::ConfigDirNotFound)
    }
}

pub type PreferenceResult<T> = Result<T, PreferenceError>;
