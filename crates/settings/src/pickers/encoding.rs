use citadel_preferences::{UserPreferences, TEXT_ENCODINGS};

use super::{chosen_row, labels, Picker};
use crate::dialog::DialogHost;
use crate::summary::SummaryUpdater;

pub struct TextEncodingPicker {
    preferences: UserPreferences,
}

impl TextEncodingPicker {
    pub fn new(preferences: UserPreferences) -> Self {
        Self { preferences }
    }
}

impl Picker for TextEncodingPicker {
    fn summary(&self) -> String {
        self.preferences.text_encoding()
    }

    fn show(&self, host: &mut dyn DialogHost, updater: &mut dyn SummaryUpdater) {
        let items = labels(TEXT_ENCODINGS);
        let current = self.preferences.text_encoding();
        let checked = TEXT_ENCODINGS.iter().position(|encoding| *encoding == current);

        let outcome = host.choose_one("Text encoding", &items, checked);
        if let Some(&encoding) = chosen_row(outcome, &TEXT_ENCODINGS) {
            self.preferences.set_text_encoding(encoding);
            log::info!("Text encoding set to {}", encoding);
            updater.update_summary(encoding);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pickers::test_support::preferences;
    use crate::scripted::{ScriptedDialogHost, ScriptedResponse};
    use crate::summary::LatestSummary;

    #[test]
    fn test_select_encoding() {
        let prefs = preferences();
        let mut host = ScriptedDialogHost::new([ScriptedResponse::Choose(2)]);
        let mut summary = LatestSummary::new();

        TextEncodingPicker::new(prefs.clone()).show(&mut host, &mut summary);

        assert_eq!(host.shown()[0].checked, Some(1));
        assert_eq!(prefs.text_encoding(), "GBK");
        assert_eq!(summary.latest(), Some("GBK"));
    }

    #[test]
    fn test_unlisted_encoding_has_no_checked_row() {
        let prefs = preferences();
        prefs.set_text_encoding("KOI8-R");
        let mut host = ScriptedDialogHost::new([ScriptedResponse::Cancel]);

        TextEncodingPicker::new(prefs.clone()).show(&mut host, &mut LatestSummary::new());

        assert_eq!(host.shown()[0].checked, None);
        assert_eq!(prefs.text_encoding(), "KOI8-R");
    }
}
