use citadel_preferences::{add_necessary_slashes, is_write_access_available, UserPreferences};

use super::{labels, Picker};
use crate::dialog::{edit_text, DialogHost, DialogOutcome, InputHint, TextField};
use crate::summary::SummaryUpdater;

const DEFAULT_ROW: usize = 0;
const CUSTOM_ROW: usize = 1;

fn write_access_hint(path: &str) -> InputHint {
    if is_write_access_available(path) {
        InputHint::Valid
    } else {
        InputHint::Invalid
    }
}

/// Download directory: the platform default or a custom path.
///
/// The write-access check on a custom path only colors the input; the path
/// is stored regardless, with its separators normalized.
pub struct DownloadLocationPicker {
    preferences: UserPreferences,
}

impl DownloadLocationPicker {
    pub fn new(preferences: UserPreferences) -> Self {
        Self { preferences }
    }

    fn show_custom_location_picker(
        &self,
        host: &mut dyn DialogHost,
        updater: &mut dyn SummaryUpdater,
    ) {
        let validator = write_access_hint;
        let field = TextField::new("Download location", self.preferences.download_directory())
            .validator(&validator);

        if let DialogOutcome::Confirmed(text) = edit_text(host, "Download location", field) {
            let directory = add_necessary_slashes(&text);
            if write_access_hint(&directory) == InputHint::Invalid {
                log::warn!("Download location {} does not look writable", directory);
            }
            self.preferences.set_download_directory(&directory);
            updater.update_summary(&directory);
        }
    }
}

impl Picker for DownloadLocationPicker {
    fn summary(&self) -> String {
        self.preferences.download_directory()
    }

    fn show(&self, host: &mut dyn DialogHost, updater: &mut dyn SummaryUpdater) {
        let items = labels(["Default", "Custom"]);
        let default_directory = self.preferences.default_download_directory().to_string();
        let checked = if self.preferences.download_directory() == default_directory {
            DEFAULT_ROW
        } else {
            CUSTOM_ROW
        };

        match host.choose_one("Download location", &items, Some(checked)) {
            DialogOutcome::Confirmed(DEFAULT_ROW) => {
                self.preferences.set_download_directory(&default_directory);
                log::info!("Download location reset to {}", default_directory);
                updater.update_summary(&default_directory);
            }
            DialogOutcome::Confirmed(CUSTOM_ROW) => self.show_custom_location_picker(host, updater),
            DialogOutcome::Confirmed(index) => {
                log::warn!("Dialog confirmed unknown row {}, ignoring", index)
            }
            DialogOutcome::Cancelled => {}
        }
    }
}
