//! Locale override for the browser UI.

use citadel_preferences::UserPreferences;

use crate::registry::{ListOption, ScreenEffect};

/// Locale used when the environment does not name one
const FALLBACK_LOCALE: &str = "en";

/// Value and label of every entry in the language list. The empty value
/// means "follow the system".
pub const SUPPORTED_LOCALES: [(&str, &str); 16] = [
    ("", "System default"),
    ("ar", "العربية"),
    ("cs", "Čeština"),
    ("de", "Deutsch"),
    ("en", "English"),
    ("es", "Español"),
    ("fr", "Français"),
    ("it", "Italiano"),
    ("ja", "日本語"),
    ("nl", "Nederlands"),
    ("pl", "Polski"),
    ("pt-BR", "Português (Brasil)"),
    ("ru", "Русский"),
    ("tr", "Türkçe"),
    ("zh-CN", "简体中文"),
    ("zh-TW", "繁體中文"),
];

pub fn locale_options() -> Vec<ListOption> {
    SUPPORTED_LOCALES
        .iter()
        .map(|&(value, label)| ListOption::new(label, value))
        .collect()
}

/// Applies a locale to the running application
pub trait LocaleManager {
    fn reset_to_system_locale(&mut self);

    fn set_selected_locale(&mut self, locale_id: &str);

    /// Locale currently in effect
    fn current_locale(&self) -> String;

    /// Push `locale` into the application configuration
    fn update_configuration(&mut self, locale: &str);
}

/// Normalize a locale code: `pt_br` and `PT-br` both become `pt-BR`.
pub fn parse_locale_code(code: &str) -> String {
    let code = code.trim();
    let mut parts = code.split(['_', '-']);
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();

    match parts.next() {
        Some(region) if !region.is_empty() => {
            format!("{}-{}", language, region.to_ascii_uppercase())
        }
        _ => language,
    }
}

/// Forward a selection from the language list. An empty id resets to the
/// system locale. The screen must be rebuilt afterwards.
pub fn apply_locale_change(
    manager: &mut dyn LocaleManager,
    preferences: &UserPreferences,
    locale_id: &str,
) -> ScreenEffect {
    let locale = if locale_id.is_empty() {
        manager.reset_to_system_locale();
        preferences.set_locale(None);
        manager.current_locale()
    } else {
        let locale = parse_locale_code(locale_id);
        manager.set_selected_locale(&locale);
        preferences.set_locale(Some(&locale));
        locale
    };

    log::info!("Locale changed to {}", locale);
    manager.update_configuration(&locale);
    ScreenEffect::Reload
}

/// Locale manager backed by the process environment (`LC_ALL`, `LANG`)
#[derive(Debug, Clone, Default)]
pub struct SystemLocaleManager {
    selected: Option<String>,
    configured: Option<String>,
}

impl SystemLocaleManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a previously stored override
    pub fn with_selected(locale: Option<String>) -> Self {
        Self {
            selected: locale.filter(|locale| !locale.is_empty()),
            configured: None,
        }
    }

    /// Locale last pushed through [`LocaleManager::update_configuration`]
    pub fn configured_locale(&self) -> Option<&str> {
        self.configured.as_deref()
    }

    fn system_locale() -> String {
        ["LC_ALL", "LANG"]
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find_map(|value| locale_from_env(&value))
            .unwrap_or_else(|| FALLBACK_LOCALE.to_string())
    }
}

/// `fr_FR.UTF-8` is `fr-FR`; `C` and `POSIX` name no locale
fn locale_from_env(value: &str) -> Option<String> {
    let code = value.split(['.', '@']).next().unwrap_or_default();
    match code {
        "" | "C" | "POSIX" => None,
        code => Some(parse_locale_code(code)),
    }
}

impl LocaleManager for SystemLocaleManager {
    fn reset_to_system_locale(&mut self) {
        self.selected = None;
    }

    fn set_selected_locale(&mut self, locale_id: &str) {
        self.selected = Some(locale_id.to_string());
    }

    fn current_locale(&self) -> String {
        self.selected.clone().unwrap_or_else(Self::system_locale)
    }

    fn update_configuration(&mut self, locale: &str) {
        log::debug!("Configuration locale set to {}", locale);
        self.configured = Some(locale.to_string());
    }
}
