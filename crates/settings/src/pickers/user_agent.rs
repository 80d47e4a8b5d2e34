use citadel_preferences::{resolve_user_agent, UserAgentChoice, UserAgentContext, UserPreferences};

use super::{chosen_row, labels, Picker};
use crate::dialog::{edit_text, DialogHost, DialogOutcome, TextField};
use crate::summary::SummaryUpdater;

/// `"<choice label>:\n<effective user agent>"`
pub fn user_agent_summary(preferences: &UserPreferences, context: &UserAgentContext) -> String {
    format!(
        "{}:\n{}",
        preferences.user_agent_choice().display_name(),
        resolve_user_agent(preferences, context)
    )
}

pub struct UserAgentPicker {
    preferences: UserPreferences,
    context: UserAgentContext,
}

impl UserAgentPicker {
    pub fn new(preferences: UserPreferences, context: UserAgentContext) -> Self {
        Self { preferences, context }
    }

    fn show_custom_user_agent_picker(
        &self,
        host: &mut dyn DialogHost,
        updater: &mut dyn SummaryUpdater,
    ) {
        let field = TextField::new("User agent", self.preferences.user_agent_string());
        if let DialogOutcome::Confirmed(user_agent) = edit_text(host, "User agent", field) {
            self.preferences.set_user_agent_string(&user_agent);
            log::info!("Custom user agent set");
            updater.update_summary(&self.summary());
        }
    }
}

impl Picker for UserAgentPicker {
    fn summary(&self) -> String {
        user_agent_summary(&self.preferences, &self.context)
    }

    fn show(&self, host: &mut dyn DialogHost, updater: &mut dyn SummaryUpdater) {
        let items = labels(UserAgentChoice::ALL.iter().map(|choice| choice.display_name()));
        let current = self.preferences.user_agent_choice();
        let checked = UserAgentChoice::ALL.iter().position(|choice| *choice == current);

        let outcome = host.choose_one("User agent", &items, checked);
        let Some(&choice) = chosen_row(outcome, &UserAgentChoice::ALL) else {
            return;
        };

        self.preferences.set_user_agent_choice(choice);
        log::info!("User agent set to {}", choice.display_name());
        updater.update_summary(&self.summary());

        if choice == UserAgentChoice::Custom {
            self.show_custom_user_agent_picker(host, updater);
        }
    }
}
