use citadel_preferences::{is_about_url, Homepage, UserPreferences};

use super::{labels, Picker};
use crate::dialog::{edit_text, DialogHost, DialogOutcome, TextField};
use crate::summary::SummaryUpdater;

/// Seed for the custom homepage editor when the current page is built in
const CUSTOM_HOMEPAGE_SEED: &str = "https://www.google.com";

const RESERVED_PAGES: [Homepage; 3] = [Homepage::Home, Homepage::Blank, Homepage::Bookmarks];
const CUSTOM_ROW: usize = 3;

pub struct HomepagePicker {
    preferences: UserPreferences,
}

impl HomepagePicker {
    pub fn new(preferences: UserPreferences) -> Self {
        Self { preferences }
    }

    fn store(&self, homepage: &Homepage, updater: &mut dyn SummaryUpdater) {
        self.preferences.set_homepage(homepage.as_url());
        log::info!("Homepage set to {}", homepage.as_url());
        updater.update_summary(homepage.display_title());
    }

    fn show_custom_homepage_picker(
        &self,
        host: &mut dyn DialogHost,
        updater: &mut dyn SummaryUpdater,
    ) {
        let current = self.preferences.homepage();
        let seed = if is_about_url(&current) {
            CUSTOM_HOMEPAGE_SEED.to_string()
        } else {
            current
        };

        let field = TextField::new("URL", seed);
        if let DialogOutcome::Confirmed(url) = edit_text(host, "Custom homepage", field) {
            self.store(&Homepage::from_url(&url), updater);
        }
    }
}

impl Picker for HomepagePicker {
    fn summary(&self) -> String {
        Homepage::from_url(&self.preferences.homepage())
            .display_title()
            .to_string()
    }

    fn show(&self, host: &mut dyn DialogHost, updater: &mut dyn SummaryUpdater) {
        let mut items = labels(RESERVED_PAGES.iter().map(Homepage::display_title));
        items.push("Custom URL".to_string());
        let checked = Homepage::from_url(&self.preferences.homepage()).picker_index();

        match host.choose_one("Homepage", &items, Some(checked)) {
            DialogOutcome::Confirmed(CUSTOM_ROW) => self.show_custom_homepage_picker(host, updater),
            DialogOutcome::Confirmed(index) => match RESERVED_PAGES.get(index) {
                Some(page) => self.store(page, updater),
                None => log::warn!("Dialog confirmed unknown row {}, ignoring", index),
            },
            DialogOutcome::Cancelled => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pickers::test_support::preferences;
    use crate::scripted::{ScriptedDialogHost, ScriptedResponse};
    use crate::summary::LatestSummary;
    use citadel_preferences::{ABOUT_BLANK, ABOUT_BOOKMARKS};

    #[test]
    fn test_reserved_pages() {
        let prefs = preferences();
        let picker = HomepagePicker::new(prefs.clone());
        let mut summary = LatestSummary::new();

        picker.show(&mut ScriptedDialogHost::new([ScriptedResponse::Choose(1)]), &mut summary);
        assert_eq!(prefs.homepage(), ABOUT_BLANK);
        assert_eq!(summary.latest(), Some("Blank page"));

        picker.show(&mut ScriptedDialogHost::new([ScriptedResponse::Choose(2)]), &mut summary);
        assert_eq!(prefs.homepage(), ABOUT_BOOKMARKS);
        assert_eq!(summary.latest(), Some("Bookmarks"));
        assert_eq!(picker.summary(), "Bookmarks");
    }

    #[test]
    fn test_custom_editor_seed() {
        let prefs = preferences();
        let picker = HomepagePicker::new(prefs.clone());

        let mut host =
            ScriptedDialogHost::new([ScriptedResponse::Choose(3), ScriptedResponse::Cancel]);
        picker.show(&mut host, &mut LatestSummary::new());
        assert_eq!(host.shown()[1].initial_values, vec![CUSTOM_HOMEPAGE_SEED.to_string()]);

        prefs.set_homepage("https://example.org/");
        let mut host =
            ScriptedDialogHost::new([ScriptedResponse::Choose(3), ScriptedResponse::Cancel]);
        picker.show(&mut host, &mut LatestSummary::new());
        assert_eq!(host.shown()[0].checked, Some(3));
        assert_eq!(host.shown()[1].initial_values, vec!["https://example.org/".to_string()]);
        assert_eq!(prefs.homepage(), "https://example.org/");
    }

    #[test]
    fn test_custom_url_is_its_own_summary() {
        let prefs = preferences();
        let mut host = ScriptedDialogHost::new([
            ScriptedResponse::Choose(3),
            ScriptedResponse::enter(["https://news.example/"]),
        ]);
        let mut summary = LatestSummary::new();

        HomepagePicker::new(prefs.clone()).show(&mut host, &mut summary);

        assert_eq!(prefs.homepage(), "https://news.example/");
        assert_eq!(summary.latest(), Some("https://news.example/"));
    }
}
