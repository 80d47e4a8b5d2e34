//! The "Scrollbars" settings screen.

use citadel_preferences::UserPreferences;

use crate::dialog::DialogHost;
use crate::pickers::{chosen_row, Picker};
use crate::registry::SettingsRegistry;
use crate::screen::SettingsScreen;
use crate::summary::SummaryUpdater;

pub const SETTINGS_SCROLLBARS_VISIBLE: &str = "scrollbars_visible";
pub const SETTINGS_SCROLLBARS_FADING: &str = "scrollbars_fading";
pub const SETTINGS_SCROLLBARS_FADE_DELAY: &str = "scrollbars_fade_delay";

/// Delays offered before scrollbars fade out, in milliseconds
pub const FADE_DELAYS_MS: [i64; 5] = [250, 500, 1000, 2000, 5000];

fn fade_delay_label(delay: i64) -> String {
    format!("{} ms", delay)
}

struct FadeDelayPicker {
    preferences: UserPreferences,
}

impl Picker for FadeDelayPicker {
    fn summary(&self) -> String {
        fade_delay_label(self.preferences.scrollbars_fade_delay_ms())
    }

    fn show(&self, host: &mut dyn DialogHost, updater: &mut dyn SummaryUpdater) {
        let items: Vec<String> = FADE_DELAYS_MS
            .iter()
            .map(|delay| fade_delay_label(*delay))
            .collect();
        let current = self.preferences.scrollbars_fade_delay_ms();
        let checked = FADE_DELAYS_MS.iter().position(|delay| *delay == current);

        let outcome = host.choose_one("Fade delay", &items, checked);
        if let Some(&delay) = chosen_row(outcome, &FADE_DELAYS_MS) {
            self.preferences.set_scrollbars_fade_delay_ms(delay);
            log::info!("Scrollbar fade delay set to {} ms", delay);
            updater.update_summary(&fade_delay_label(delay));
        }
    }
}

pub struct ScrollbarsSettings {
    registry: SettingsRegistry,
}

impl ScrollbarsSettings {
    pub fn new(preferences: UserPreferences) -> Self {
        let mut registry = SettingsRegistry::new();

        let prefs = preferences.clone();
        registry.register_switch(
            SETTINGS_SCROLLBARS_VISIBLE,
            preferences.scrollbars_visible(),
            None,
            move |visible| prefs.set_scrollbars_visible(visible),
        );
        let prefs = preferences.clone();
        registry.register_switch(
            SETTINGS_SCROLLBARS_FADING,
            preferences.scrollbars_fading(),
            None,
            move |fading| prefs.set_scrollbars_fading(fading),
        );
        registry.register_picker(SETTINGS_SCROLLBARS_FADE_DELAY, FadeDelayPicker { preferences });

        Self { registry }
    }
}

impl SettingsScreen for ScrollbarsSettings {
    fn title(&self) -> &str {
        "Scrollbars"
    }

    fn registry(&self) -> &SettingsRegistry {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut SettingsRegistry {
        &mut self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pickers::test_support::{preferences, PastTheEndHost};
    use crate::scripted::{ScriptedDialogHost, ScriptedResponse};

    #[test]
    fn test_defaults() {
        let screen = ScrollbarsSettings::new(preferences());

        assert_eq!(screen.title(), "Scrollbars");
        assert_eq!(screen.registry().len(), 3);
        let visible = screen.registry().find(SETTINGS_SCROLLBARS_VISIBLE).unwrap();
        assert_eq!(visible.is_checked(), Some(true));
        assert_eq!(screen.summary(SETTINGS_SCROLLBARS_FADE_DELAY), Some("500 ms"));
    }

    #[test]
    fn test_switches_write_preferences() {
        let prefs = preferences();
        let mut screen = ScrollbarsSettings::new(prefs.clone());

        screen.set_checked(SETTINGS_SCROLLBARS_VISIBLE, false).unwrap();
        screen.set_checked(SETTINGS_SCROLLBARS_FADING, false).unwrap();

        assert!(!prefs.scrollbars_visible());
        assert!(!prefs.scrollbars_fading());
    }

    #[test]
    fn test_fade_delay_picker() {
        let prefs = preferences();
        let mut screen = ScrollbarsSettings::new(prefs.clone());
        let mut host = ScriptedDialogHost::new([ScriptedResponse::Choose(3)]);

        screen.activate(SETTINGS_SCROLLBARS_FADE_DELAY, &mut host).unwrap();

        assert_eq!(host.shown()[0].checked, Some(1));
        assert_eq!(prefs.scrollbars_fade_delay_ms(), 2000);
        assert_eq!(screen.summary(SETTINGS_SCROLLBARS_FADE_DELAY), Some("2000 ms"));
    }

    #[test]
    fn test_fade_delay_ignores_unknown_row() {
        let prefs = preferences();
        let mut screen = ScrollbarsSettings::new(prefs.clone());

        screen
            .activate(SETTINGS_SCROLLBARS_FADE_DELAY, &mut PastTheEndHost::default())
            .unwrap();

        assert_eq!(prefs.scrollbars_fade_delay_ms(), 500);
        assert_eq!(screen.summary(SETTINGS_SCROLLBARS_FADE_DELAY), Some("500 ms"));
    }
}
