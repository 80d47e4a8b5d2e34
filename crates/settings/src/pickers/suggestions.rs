use citadel_preferences::{Suggestions, UserPreferences};

use super::{chosen_row, labels, Picker};
use crate::dialog::DialogHost;
use crate::summary::SummaryUpdater;

pub struct SuggestionsPicker {
    preferences: UserPreferences,
}

impl SuggestionsPicker {
    pub fn new(preferences: UserPreferences) -> Self {
        Self { preferences }
    }
}

impl Picker for SuggestionsPicker {
    /// Unrecognized stored values display as Google
    fn summary(&self) -> String {
        self.preferences.search_suggestions().display_name().to_string()
    }

    fn show(&self, host: &mut dyn DialogHost, updater: &mut dyn SummaryUpdater) {
        let items = labels(Suggestions::PICKER_ORDER.iter().map(|choice| choice.display_name()));
        let current = self.preferences.search_suggestions();
        let checked = Suggestions::PICKER_ORDER.iter().position(|choice| *choice == current);

        let outcome = host.choose_one("Search suggestions", &items, checked);
        if let Some(&provider) = chosen_row(outcome, &Suggestions::PICKER_ORDER) {
            self.preferences.set_search_suggestion_choice(provider.index());
            log::info!("Search suggestions set to {:?}", provider);
            updater.update_summary(provider.display_name());
        }
    }
}
