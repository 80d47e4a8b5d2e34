use std::sync::Arc;

use citadel_preferences::{SearchEngine, SearchEngineProvider, UserPreferences};

use super::{chosen_row, Picker};
use crate::dialog::{edit_text, DialogHost, DialogOutcome, TextField};
use crate::summary::SummaryUpdater;

pub struct SearchEnginePicker {
    preferences: UserPreferences,
    provider: Arc<dyn SearchEngineProvider>,
}

impl SearchEnginePicker {
    pub fn new(preferences: UserPreferences, provider: Arc<dyn SearchEngineProvider>) -> Self {
        Self { preferences, provider }
    }

    fn show_custom_search_picker(
        &self,
        host: &mut dyn DialogHost,
        updater: &mut dyn SummaryUpdater,
    ) {
        let field = TextField::new("Query URL", self.preferences.search_url());
        if let DialogOutcome::Confirmed(query_url) = edit_text(host, "Custom search engine", field)
        {
            self.preferences.set_search_url(&query_url);
            log::info!("Custom search URL set to {}", query_url);
            let engine = SearchEngine::Custom { query_url };
            updater.update_summary(engine.summary());
        }
    }
}

impl Picker for SearchEnginePicker {
    fn summary(&self) -> String {
        self.provider.provide_search_engine().summary().to_string()
    }

    fn show(&self, host: &mut dyn DialogHost, updater: &mut dyn SummaryUpdater) {
        let engines = self.provider.provide_all_search_engines();
        let items: Vec<String> = engines.iter().map(|engine| engine.title().to_string()).collect();
        let stored = self.preferences.search_choice();
        let checked = engines
            .iter()
            .position(|engine| {
                self.provider.map_search_engine_to_preference_index(engine) == stored
            });

        let outcome = host.choose_one("Search engine", &items, checked);
        let Some(engine) = chosen_row(outcome, &engines) else {
            return;
        };

        let preference_index = self.provider.map_search_engine_to_preference_index(engine);
        self.preferences.set_search_choice(preference_index);
        log::info!("Search engine set to {}", engine.title());

        match engine {
            SearchEngine::Custom { .. } => {
                updater.update_summary(&self.summary());
                self.show_custom_search_picker(host, updater);
            }
            SearchEngine::Builtin { .. } => updater.update_summary(engine.summary()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pickers::test_support::preferences;
    use crate::scripted::{ScriptedDialogHost, ScriptedResponse};
    use crate::summary::LatestSummary;
    use citadel_preferences::BuiltinSearchEngines;

    fn picker(prefs: &UserPreferences) -> SearchEnginePicker {
        SearchEnginePicker::new(prefs.clone(), Arc::new(BuiltinSearchEngines::new(prefs.clone())))
    }

    #[test]
    fn test_builtin_engine() {
        let prefs = preferences();
        let mut host = ScriptedDialogHost::new([ScriptedResponse::Choose(7)]);
        let mut summary = LatestSummary::new();

        picker(&prefs).show(&mut host, &mut summary);

        assert_eq!(host.shown()[0].checked, Some(1));
        assert_eq!(host.shown()[0].items[7], "DuckDuckGo");
        assert_eq!(prefs.search_choice(), 7);
        assert_eq!(summary.latest(), Some("DuckDuckGo"));
    }

    #[test]
    fn test_custom_engine_summary_is_query_url() {
        let prefs = preferences();
        let mut host = ScriptedDialogHost::new([
            ScriptedResponse::Choose(0),
            ScriptedResponse::enter(["https://search.example/?q="]),
        ]);
        let mut summary = LatestSummary::new();

        picker(&prefs).show(&mut host, &mut summary);

        assert_eq!(prefs.search_choice(), 0);
        assert_eq!(prefs.search_url(), "https://search.example/?q=");
        assert_eq!(summary.latest(), Some("https://search.example/?q="));
        assert_eq!(picker(&prefs).summary(), "https://search.example/?q=");
    }

    #[test]
    fn test_cancel_keeps_engine() {
        let prefs = preferences();
        prefs.set_search_choice(3);
        let mut summary = LatestSummary::new();

        picker(&prefs).show(&mut ScriptedDialogHost::new([ScriptedResponse::Cancel]), &mut summary);

        assert_eq!(prefs.search_choice(), 3);
        assert_eq!(summary.updates(), 0);
    }
}
