use crate::dialog::DialogHost;
use crate::error::SettingsResult;
use crate::registry::{ScreenEffect, SettingsRegistry};

/// A titled settings page backed by a registry of entries.
///
/// Input from the host is routed through the screen so that screens can
/// react to changes that affect more than one entry.
pub trait SettingsScreen {
    fn title(&self) -> &str;

    fn registry(&self) -> &SettingsRegistry;

    fn registry_mut(&mut self) -> &mut SettingsRegistry;

    fn activate(&mut self, key: &str, host: &mut dyn DialogHost) -> SettingsResult<()> {
        self.registry_mut().activate(key, host)
    }

    fn set_checked(&mut self, key: &str, value: bool) -> SettingsResult<()> {
        self.registry_mut().set_checked(key, value)
    }

    fn select(&mut self, key: &str, value: &str) -> SettingsResult<ScreenEffect> {
        self.registry_mut().select(key, value)
    }

    /// Displayed summary of `key`, if the entry exists and has one
    fn summary(&self, key: &str) -> Option<&str> {
        self.registry().find(key).and_then(|entry| entry.summary())
    }
}
