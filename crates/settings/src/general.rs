//! The "General" settings screen.

use std::sync::Arc;

use citadel_preferences::{
    user_agent::DESKTOP_USER_AGENT, BuiltinSearchEngines, ProxyAvailability, SearchEngineProvider,
    UserAgentContext, UserPreferences,
};
use parking_lot::Mutex;

use crate::error::SettingsResult;
use crate::locale::{apply_locale_change, locale_options, LocaleManager, SystemLocaleManager};
use crate::pickers::{
    DownloadLocationPicker, HomepagePicker, InstalledProxyApps, ProxyPicker, SearchEnginePicker,
    SuggestionsPicker, TextEncodingPicker, UserAgentPicker,
};
use crate::registry::SettingsRegistry;
use crate::screen::SettingsScreen;

pub const SETTINGS_PROXY: &str = "proxy";
pub const SETTINGS_USER_AGENT: &str = "agent";
pub const SETTINGS_DOWNLOAD: &str = "download";
pub const SETTINGS_HOME: &str = "home";
pub const SETTINGS_SEARCH_ENGINE: &str = "search";
pub const SETTINGS_SUGGESTIONS: &str = "suggestions_choice";
pub const SETTINGS_TEXT_ENCODING: &str = "text_encoding";
pub const SETTINGS_COOKIES: &str = "cookies_enabled";
pub const SETTINGS_INCOGNITO_COOKIES: &str = "incognito_cookies";
pub const SETTINGS_LOCALE: &str = "locale";

pub const INCOGNITO_COOKIES_FOLLOW_SUMMARY: &str =
    "Incognito cookies follow the regular cookie setting";

/// Platform features that change how the screen is laid out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Incognito tabs share the regular cookie jar setting
    pub full_incognito: bool,
}

/// Collaborators the general screen needs
pub struct GeneralSettingsContext {
    pub preferences: UserPreferences,
    pub search_engines: Arc<dyn SearchEngineProvider>,
    pub proxy_availability: Arc<dyn ProxyAvailability>,
    pub user_agent_context: UserAgentContext,
    pub locale_manager: Arc<Mutex<dyn LocaleManager + Send>>,
    pub capabilities: Capabilities,
}

impl GeneralSettingsContext {
    /// Built-in search engines, no proxy apps installed, the environment's
    /// locale and the desktop user agent as the engine default
    pub fn new(preferences: UserPreferences) -> Self {
        let locale_manager = SystemLocaleManager::with_selected(preferences.locale());
        Self {
            search_engines: Arc::new(BuiltinSearchEngines::new(preferences.clone())),
            proxy_availability: Arc::new(InstalledProxyApps::default()),
            user_agent_context: UserAgentContext::new(DESKTOP_USER_AGENT),
            locale_manager: Arc::new(Mutex::new(locale_manager)),
            capabilities: Capabilities::default(),
            preferences,
        }
    }

    pub fn with_search_engines(mut self, search_engines: Arc<dyn SearchEngineProvider>) -> Self {
        self.search_engines = search_engines;
        self
    }

    pub fn with_proxy_availability(mut self, availability: Arc<dyn ProxyAvailability>) -> Self {
        self.proxy_availability = availability;
        self
    }

    pub fn with_user_agent_context(mut self, context: UserAgentContext) -> Self {
        self.user_agent_context = context;
        self
    }

    pub fn with_locale_manager(mut self, manager: Arc<Mutex<dyn LocaleManager + Send>>) -> Self {
        self.locale_manager = manager;
        self
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }
}

pub struct GeneralSettings {
    registry: SettingsRegistry,
    capabilities: Capabilities,
}

impl GeneralSettings {
    pub fn new(context: GeneralSettingsContext) -> Self {
        let GeneralSettingsContext {
            preferences,
            search_engines,
            proxy_availability,
            user_agent_context,
            locale_manager,
            capabilities,
        } = context;
        let mut registry = SettingsRegistry::new();

        registry.register_picker(
            SETTINGS_PROXY,
            ProxyPicker::new(preferences.clone(), proxy_availability),
        );
        registry.register_picker(
            SETTINGS_USER_AGENT,
            UserAgentPicker::new(preferences.clone(), user_agent_context),
        );
        registry.register_picker(
            SETTINGS_DOWNLOAD,
            DownloadLocationPicker::new(preferences.clone()),
        );
        registry.register_picker(SETTINGS_HOME, HomepagePicker::new(preferences.clone()));
        registry.register_picker(
            SETTINGS_SEARCH_ENGINE,
            SearchEnginePicker::new(preferences.clone(), search_engines),
        );
        registry.register_picker(SETTINGS_SUGGESTIONS, SuggestionsPicker::new(preferences.clone()));
        registry.register_picker(
            SETTINGS_TEXT_ENCODING,
            TextEncodingPicker::new(preferences.clone()),
        );

        let (incognito_checked, incognito_summary) = if capabilities.full_incognito {
            (preferences.cookies_enabled(), Some(INCOGNITO_COOKIES_FOLLOW_SUMMARY.to_string()))
        } else {
            (preferences.incognito_cookies_enabled(), None)
        };
        let prefs = preferences.clone();
        let incognito = registry.register_switch(
            SETTINGS_INCOGNITO_COOKIES,
            incognito_checked,
            incognito_summary,
            move |enabled| prefs.set_incognito_cookies_enabled(enabled),
        );
        if let Some(entry) = registry.entry_mut(incognito) {
            entry.set_enabled(!capabilities.full_incognito);
            entry.set_visible(!capabilities.full_incognito);
        }

        let prefs = preferences.clone();
        registry.register_switch(
            SETTINGS_COOKIES,
            preferences.cookies_enabled(),
            None,
            move |enabled| prefs.set_cookies_enabled(enabled),
        );

        let prefs = preferences.clone();
        registry.register_list(
            SETTINGS_LOCALE,
            locale_options(),
            &preferences.locale().unwrap_or_default(),
            move |locale_id| apply_locale_change(&mut *locale_manager.lock(), &prefs, locale_id),
        );

        Self { registry, capabilities }
    }
}

impl SettingsScreen for GeneralSettings {
    fn title(&self) -> &str {
        "General"
    }

    fn registry(&self) -> &SettingsRegistry {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut SettingsRegistry {
        &mut self.registry
    }

    /// The regular cookie switch drags the hidden incognito switch along when
    /// incognito shares the cookie setting
    fn set_checked(&mut self, key: &str, value: bool) -> SettingsResult<()> {
        self.registry.set_checked(key, value)?;
        if key == SETTINGS_COOKIES && self.capabilities.full_incognito {
            if let Some(incognito) = self.registry.find_mut(SETTINGS_INCOGNITO_COOKIES) {
                incognito.set_checked_silently(value);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pickers::test_support::preferences;
    use crate::registry::ScreenEffect;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_entries_and_initial_summaries() {
        let screen = GeneralSettings::new(GeneralSettingsContext::new(preferences()));

        let keys: Vec<&str> = screen.registry().entries().map(|entry| entry.key()).collect();
        assert_eq!(
            keys,
            vec![
                SETTINGS_PROXY,
                SETTINGS_USER_AGENT,
                SETTINGS_DOWNLOAD,
                SETTINGS_HOME,
                SETTINGS_SEARCH_ENGINE,
                SETTINGS_SUGGESTIONS,
                SETTINGS_TEXT_ENCODING,
                SETTINGS_INCOGNITO_COOKIES,
                SETTINGS_COOKIES,
                SETTINGS_LOCALE,
            ]
        );
        assert_eq!(screen.title(), "General");
        assert_eq!(screen.summary(SETTINGS_PROXY), Some("None"));
        assert_eq!(screen.summary(SETTINGS_HOME), Some("Homepage"));
        assert_eq!(screen.summary(SETTINGS_SEARCH_ENGINE), Some("Google"));
        assert_eq!(screen.summary(SETTINGS_SUGGESTIONS), Some("Powered by Google"));
        assert_eq!(screen.summary(SETTINGS_TEXT_ENCODING), Some("UTF-8"));
        assert_eq!(screen.summary(SETTINGS_LOCALE), Some("System default"));
    }

    #[test]
    fn test_incognito_switch_without_full_incognito() {
        let prefs = preferences();
        let mut screen = GeneralSettings::new(GeneralSettingsContext::new(prefs.clone()));

        let incognito = screen.registry().find(SETTINGS_INCOGNITO_COOKIES).unwrap();
        assert!(incognito.is_visible());
        assert_eq!(incognito.is_checked(), Some(false));
        assert_eq!(incognito.summary(), None);

        screen.set_checked(SETTINGS_INCOGNITO_COOKIES, true).unwrap();
        assert!(prefs.incognito_cookies_enabled());

        screen.set_checked(SETTINGS_COOKIES, false).unwrap();
        assert!(!prefs.cookies_enabled());
        let incognito = screen.registry().find(SETTINGS_INCOGNITO_COOKIES).unwrap();
        assert_eq!(incognito.is_checked(), Some(true));
    }

    #[test]
    fn test_locale_selection_reloads() {
        let prefs = preferences();
        let manager = Arc::new(Mutex::new(SystemLocaleManager::new()));
        let context =
            GeneralSettingsContext::new(prefs.clone()).with_locale_manager(manager.clone());
        let mut screen = GeneralSettings::new(context);

        assert_eq!(screen.select(SETTINGS_LOCALE, "fr").unwrap(), ScreenEffect::Reload);
        assert_eq!(prefs.locale(), Some("fr".to_string()));
        assert_eq!(manager.lock().configured_locale(), Some("fr"));
        assert_eq!(screen.summary(SETTINGS_LOCALE), Some("Français"));
    }
}
