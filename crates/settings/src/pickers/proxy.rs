use std::sync::Arc;

use citadel_preferences::{
    parse_proxy_port, sanitize_proxy_choice, ProxyAvailability, ProxyChoice, UserPreferences,
};

use super::{chosen_row, labels, Picker};
use crate::dialog::{DialogHost, DialogOutcome, TextField};
use crate::summary::SummaryUpdater;

/// Widest port the input accepts, the digit count of `i32::MAX`
const PORT_MAX_LENGTH: usize = 10;

/// Proxy apps known to be installed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstalledProxyApps {
    pub orbot: bool,
    pub i2p: bool,
}

impl ProxyAvailability for InstalledProxyApps {
    fn is_orbot_installed(&self) -> bool {
        self.orbot
    }

    fn is_i2p_installed(&self) -> bool {
        self.i2p
    }
}

/// Choice label, or `host:port` for a manual proxy
pub fn proxy_summary(preferences: &UserPreferences) -> String {
    match preferences.proxy_choice() {
        ProxyChoice::Manual => format!("{}:{}", preferences.proxy_host(), preferences.proxy_port()),
        other => other.display_name().to_string(),
    }
}

pub struct ProxyPicker {
    preferences: UserPreferences,
    availability: Arc<dyn ProxyAvailability>,
}

impl ProxyPicker {
    pub fn new(preferences: UserPreferences, availability: Arc<dyn ProxyAvailability>) -> Self {
        Self {
            preferences,
            availability,
        }
    }

    fn update_proxy_choice(
        &self,
        choice: ProxyChoice,
        host: &mut dyn DialogHost,
        updater: &mut dyn SummaryUpdater,
    ) {
        let sanitized = sanitize_proxy_choice(choice, self.availability.as_ref());
        self.preferences.set_proxy_choice(sanitized);
        log::info!("Proxy set to {}", sanitized.display_name());
        updater.update_summary(&proxy_summary(&self.preferences));

        if sanitized == ProxyChoice::Manual {
            ManualProxyPicker::new(self.preferences.clone()).show(host, updater);
        }
    }
}

impl Picker for ProxyPicker {
    fn summary(&self) -> String {
        proxy_summary(&self.preferences)
    }

    fn show(&self, host: &mut dyn DialogHost, updater: &mut dyn SummaryUpdater) {
        let items = labels(ProxyChoice::ALL.iter().map(|choice| choice.display_name()));
        let current = self.preferences.proxy_choice();
        let checked = ProxyChoice::ALL.iter().position(|choice| *choice == current);

        let outcome = host.choose_one("HTTP proxy", &items, checked);
        if let Some(&choice) = chosen_row(outcome, &ProxyChoice::ALL) {
            self.update_proxy_choice(choice, host, updater);
        }
    }
}

/// Host and port of a manual proxy.
///
/// An unparsable or out of range port keeps the previously stored port
/// without telling the user.
pub struct ManualProxyPicker {
    preferences: UserPreferences,
}

impl ManualProxyPicker {
    pub fn new(preferences: UserPreferences) -> Self {
        Self { preferences }
    }
}

impl Picker for ManualProxyPicker {
    fn summary(&self) -> String {
        format!("{}:{}", self.preferences.proxy_host(), self.preferences.proxy_port())
    }

    fn show(&self, host: &mut dyn DialogHost, updater: &mut dyn SummaryUpdater) {
        let previous_port = self.preferences.proxy_port();
        let fields = [
            TextField::new("Host", self.preferences.proxy_host()),
            TextField::new("Port", previous_port.to_string()).max_length(PORT_MAX_LENGTH),
        ];

        let values = match host.enter_text("Manual proxy", &fields) {
            DialogOutcome::Confirmed(values) => values,
            DialogOutcome::Cancelled => return,
        };

        let proxy_host = values.first().cloned().unwrap_or_default();
        let proxy_port = values
            .get(1)
            .map(|port| parse_proxy_port(port, previous_port))
            .unwrap_or(previous_port);

        self.preferences.set_proxy_host(&proxy_host);
        self.preferences.set_proxy_port(proxy_port);
        log::info!("Manual proxy set to {}:{}", proxy_host, proxy_port);
        updater.update_summary(&format!("{}:{}", proxy_host, proxy_port));
    }
}
