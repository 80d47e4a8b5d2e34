//! Citadel Preferences Crate
//!
//! Typed, process-wide user preferences for Citadel Browser. Values live in a
//! shared [`PreferenceStore`] that persists every write through a pluggable
//! [`PreferenceBackend`], and [`UserPreferences`] exposes them as typed
//! settings (proxy, user agent, downloads, homepage, search, cookies, locale).

pub mod backend;
pub mod choices;
pub mod error;
pub mod keys;
pub mod search;
pub mod store;
pub mod user_agent;
pub mod validation;
pub mod value;

pub use backend::{JsonFileBackend, MemoryBackend, PreferenceBackend};
pub use choices::{
    Homepage, ProxyChoice, Suggestions, UserAgentChoice, ABOUT_BLANK, ABOUT_BOOKMARKS,
    ABOUT_HOME, TEXT_ENCODINGS,
};
pub use error::{PreferenceError, PreferenceResult};
pub use search::{BuiltinSearchEngines, SearchEngine, SearchEngineProvider};
pub use store::{PreferenceStore, UserPreferences};
pub use user_agent::{resolve_user_agent, UserAgentContext};
pub use validation::{
    add_necessary_slashes, is_about_url, is_write_access_available, parse_proxy_port,
    sanitize_proxy_choice, ProxyAvailability, MAX_PROXY_PORT,
};
pub use value::PreferenceValue;
