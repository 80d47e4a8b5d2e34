//! Picker dialogs, one per clickable general setting.
//!
//! Every picker follows the same contract: show a dialog seeded from the
//! preference store, write nothing if the dialog is dismissed, otherwise
//! validate, store and push the new summary. Nested sub-pickers reuse the
//! parent's updater, so the deepest confirmed value is what ends up shown.

mod download;
mod encoding;
mod homepage;
mod proxy;
mod search;
mod suggestions;
mod user_agent;

pub use download::DownloadLocationPicker;
pub use encoding::TextEncodingPicker;
pub use homepage::HomepagePicker;
pub use proxy::{proxy_summary, InstalledProxyApps, ManualProxyPicker, ProxyPicker};
pub use search::SearchEnginePicker;
pub use suggestions::SuggestionsPicker;
pub use user_agent::{user_agent_summary, UserAgentPicker};

use crate::dialog::{DialogHost, DialogOutcome};
use crate::summary::SummaryUpdater;

/// A dialog that edits one setting
pub trait Picker {
    /// Display text for the current stored value
    fn summary(&self) -> String;

    /// Run the dialog to completion
    fn show(&self, host: &mut dyn DialogHost, updater: &mut dyn SummaryUpdater);
}

/// Row picked in a confirmed single-choice dialog. A row index past the end
/// of `rows` counts as a dismissal.
pub(crate) fn chosen_row<T>(outcome: DialogOutcome<usize>, rows: &[T]) -> Option<&T> {
    let index = outcome.confirmed()?;
    let row = rows.get(index);
    if row.is_none() {
        log::warn!("Dialog confirmed row {} of {}, ignoring", index, rows.len());
    }
    row
}

fn labels<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use citadel_preferences::{BuiltinSearchEngines, UserAgentContext};
    use pretty_assertions::assert_eq;

    use super::test_support::{preferences, PastTheEndHost};
    use super::*;
    use crate::summary::LatestSummary;

    #[test]
    fn test_rows_past_the_end_change_nothing() {
        let prefs = preferences();
        let keys = [
            "proxy_choice",
            "user_agent_choice",
            "download_directory",
            "home_page",
            "search_choice",
            "search_suggestions_choice",
            "text_encoding",
        ];
        let snapshot = || keys.iter().map(|key| prefs.store().get(key)).collect::<Vec<_>>();
        let initial = snapshot();

        let pickers: Vec<Box<dyn Picker>> = vec![
            Box::new(ProxyPicker::new(prefs.clone(), Arc::new(InstalledProxyApps::default()))),
            Box::new(UserAgentPicker::new(prefs.clone(), UserAgentContext::new("Engine/1.0"))),
            Box::new(DownloadLocationPicker::new(prefs.clone())),
            Box::new(HomepagePicker::new(prefs.clone())),
            Box::new(SearchEnginePicker::new(
                prefs.clone(),
                Arc::new(BuiltinSearchEngines::new(prefs.clone())),
            )),
            Box::new(SuggestionsPicker::new(prefs.clone())),
            Box::new(TextEncodingPicker::new(prefs.clone())),
        ];

        for picker in &pickers {
            let mut host = PastTheEndHost::default();
            let mut summary = LatestSummary::new();
            picker.show(&mut host, &mut summary);

            assert_eq!(host.dialogs, 1);
            assert_eq!(summary.updates(), 0);
        }
        assert_eq!(snapshot(), initial);
    }
}
