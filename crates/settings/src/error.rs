//! Settings screen errors.
//!
//! User input never produces an error; only addressing an entry that does not
//! exist, or using it the wrong way, does.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Unknown setting entry: {0}")]
    UnknownEntry(String),

    #[error("Setting '{key}' is not a {expected} entry")]
    WrongEntryKind { key: String, expected: &'static str },
}

pub type SettingsResult<T> = Result<T, SettingsError>;
