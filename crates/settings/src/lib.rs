//! Citadel Settings Crate
//!
//! Settings screens built from declarative entries. Each clickable entry opens
//! a picker dialog through a host supplied [`DialogHost`]; the picker
//! validates the input, writes the preference store and reports the new
//! display text back through the [`SummaryUpdater`] bound to its entry.

pub mod dialog;
pub mod error;
pub mod general;
pub mod locale;
pub mod pickers;
pub mod registry;
pub mod screen;
pub mod scripted;
pub mod scrollbars;
pub mod summary;

pub use dialog::{edit_text, DialogHost, DialogOutcome, InputHint, TextField};
pub use error::{SettingsError, SettingsResult};
pub use general::{Capabilities, GeneralSettings, GeneralSettingsContext};
pub use locale::{
    apply_locale_change, locale_options, parse_locale_code, LocaleManager, SystemLocaleManager,
};
pub use pickers::{InstalledProxyApps, Picker};
pub use registry::{EntryId, EntryKind, ListOption, ScreenEffect, SettingEntry, SettingsRegistry};
pub use screen::SettingsScreen;
pub use scripted::{ScriptedDialogHost, ScriptedResponse, ShownDialog};
pub use scrollbars::ScrollbarsSettings;
pub use summary::{EntryHandle, LatestSummary, SummaryUpdater};
