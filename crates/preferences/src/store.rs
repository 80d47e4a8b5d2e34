//! The shared preference store and its typed view.
//!
//! Writes are synchronous and immediately durable: every `set` updates the
//! in-memory map and persists the whole document through the backend while
//! holding the write lock, so concurrent writers are serialized per write and
//! the last one wins. There are no multi-key transactions; proxy host and port
//! are two independent writes.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::backend::{PreferenceBackend, PreferenceMap};
use crate::choices::{ProxyChoice, Suggestions, UserAgentChoice, ABOUT_HOME};
use crate::error::{PreferenceError, PreferenceResult};
use crate::keys;
use crate::search::GOOGLE_SEARCH_URL;
use crate::validation::{add_necessary_slashes, MAX_PROXY_PORT};
use crate::value::PreferenceValue;

pub const DEFAULT_PROXY_HOST: &str = "localhost";
pub const DEFAULT_PROXY_PORT: i32 = 8118;
pub const DEFAULT_SEARCH_CHOICE: i64 = 1;
pub const DEFAULT_TEXT_ENCODING: &str = "UTF-8";
pub const DEFAULT_SCROLLBAR_FADE_DELAY_MS: i64 = 500;

/// Untyped key/value store shared by every settings component.
///
/// Cloning is cheap and every clone observes the same values.
#[derive(Clone)]
pub struct PreferenceStore {
    values: Arc<RwLock<PreferenceMap>>,
    backend: Arc<dyn PreferenceBackend>,
}

impl PreferenceStore {
    /// Open a store over `backend`, loading whatever it already holds
    pub fn open(backend: impl PreferenceBackend + 'static) -> PreferenceResult<Self> {
        let values = backend.load()?;
        log::info!("Opened preference store with {} stored values", values.len());
        Ok(Self {
            values: Arc::new(RwLock::new(values)),
            backend: Arc::new(backend),
        })
    }

    pub fn get(&self, key: &str) -> Option<PreferenceValue> {
        self.values.read().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.read().contains_key(key)
    }

    /// Store `value` under `key` and persist it.
    ///
    /// A failing backend is logged and the in-memory value still changes;
    /// [`PreferenceStore::flush`] reports the error to callers that need it.
    pub fn set(&self, key: &str, value: impl Into<PreferenceValue>) {
        let value = value.into();
        let mut values = self.values.write();
        log::debug!("Setting preference {} = {}", key, value);
        values.insert(key.to_string(), value);
        if let Err(err) = self.backend.persist(&values) {
            log::warn!("Failed to persist preference {}: {}", key, err);
        }
    }

    pub fn remove(&self, key: &str) {
        let mut values = self.values.write();
        if values.remove(key).is_some() {
            if let Err(err) = self.backend.persist(&values) {
                log::warn!("Failed to persist removal of {}: {}", key, err);
            }
        }
    }

    /// Persist the current document, returning any backend error
    pub fn flush(&self) -> PreferenceResult<()> {
        let values = self.values.read();
        self.backend.persist(&values)
    }

    pub fn try_get_bool(&self, key: &str) -> PreferenceResult<Option<bool>> {
        self.typed(key, "bool", PreferenceValue::as_bool)
    }

    pub fn try_get_int(&self, key: &str) -> PreferenceResult<Option<i64>> {
        self.typed(key, "integer", PreferenceValue::as_int)
    }

    pub fn try_get_string(&self, key: &str) -> PreferenceResult<Option<String>> {
        self.typed(key, "string", |value| value.as_text().map(str::to_string))
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        or_default(key, self.try_get_bool(key), default)
    }

    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        or_default(key, self.try_get_int(key), default)
    }

    pub fn get_string(&self, key: &str, default: &str) -> String {
        or_default(key, self.try_get_string(key), default.to_string())
    }

    fn typed<T>(
        &self,
        key: &str,
        expected: &'static str,
        extract: impl FnOnce(&PreferenceValue) -> Option<T>,
    ) -> PreferenceResult<Option<T>> {
        let values = self.values.read();
        match values.get(key) {
            None => Ok(None),
            Some(value) => extract(value)
                .map(Some)
                .ok_or_else(|| PreferenceError::TypeMismatch {
                    key: key.to_string(),
                    expected,
                }),
        }
    }
}

fn or_default<T>(key: &str, result: PreferenceResult<Option<T>>, default: T) -> T {
    match result {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(err) => {
            log::warn!("Ignoring stored value for {}: {}", key, err);
            default
        }
    }
}

/// Platform downloads folder with a trailing separator
pub fn default_download_directory() -> String {
    let dir = dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| std::path::PathBuf::from("Downloads"));
    add_necessary_slashes(&dir.to_string_lossy())
}

/// Typed accessors for the browser's general settings.
#[derive(Clone)]
pub struct UserPreferences {
    store: PreferenceStore,
    default_download_directory: String,
}

impl UserPreferences {
    pub fn new(store: PreferenceStore) -> Self {
        Self::with_default_download_directory(store, default_download_directory())
    }

    /// Use `directory` instead of the platform downloads folder as the
    /// download default
    pub fn with_default_download_directory(
        store: PreferenceStore,
        directory: impl AsRef<str>,
    ) -> Self {
        Self {
            store,
            default_download_directory: add_necessary_slashes(directory.as_ref()),
        }
    }

    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }

    pub fn flush(&self) -> PreferenceResult<()> {
        self.store.flush()
    }

    pub fn proxy_choice(&self) -> ProxyChoice {
        ProxyChoice::from_index(self.store.get_int(keys::PROXY_CHOICE, ProxyChoice::None.index()))
    }

    pub fn set_proxy_choice(&self, choice: ProxyChoice) {
        self.store.set(keys::PROXY_CHOICE, choice.index());
    }

    pub fn proxy_host(&self) -> String {
        self.store.get_string(keys::PROXY_HOST, DEFAULT_PROXY_HOST)
    }

    pub fn set_proxy_host(&self, host: &str) {
        self.store.set(keys::PROXY_HOST, host);
    }

    pub fn proxy_port(&self) -> i32 {
        let stored = self.store.get_int(keys::PROXY_PORT, i64::from(DEFAULT_PROXY_PORT));
        i32::try_from(stored)
            .ok()
            .filter(|port| (0..=MAX_PROXY_PORT).contains(port))
            .unwrap_or_else(|| {
                log::warn!("Stored proxy port {} out of range, using default", stored);
                DEFAULT_PROXY_PORT
            })
    }

    pub fn set_proxy_port(&self, port: i32) {
        self.store.set(keys::PROXY_PORT, port);
    }

    pub fn user_agent_choice(&self) -> UserAgentChoice {
        UserAgentChoice::from_index(
            self.store
                .get_int(keys::USER_AGENT_CHOICE, UserAgentChoice::Default.index()),
        )
    }

    pub fn set_user_agent_choice(&self, choice: UserAgentChoice) {
        self.store.set(keys::USER_AGENT_CHOICE, choice.index());
    }

    /// Only meaningful while the choice is [`UserAgentChoice::Custom`]
    pub fn user_agent_string(&self) -> String {
        self.store.get_string(keys::USER_AGENT_STRING, "")
    }

    pub fn set_user_agent_string(&self, user_agent: &str) {
        self.store.set(keys::USER_AGENT_STRING, user_agent);
    }

    pub fn default_download_directory(&self) -> &str {
        &self.default_download_directory
    }

    pub fn download_directory(&self) -> String {
        let stored = self
            .store
            .get_string(keys::DOWNLOAD_DIRECTORY, &self.default_download_directory);
        add_necessary_slashes(&stored)
    }

    /// Stored with exactly one trailing separator whatever the input
    pub fn set_download_directory(&self, directory: &str) {
        self.store
            .set(keys::DOWNLOAD_DIRECTORY, add_necessary_slashes(directory));
    }

    pub fn homepage(&self) -> String {
        self.store.get_string(keys::HOMEPAGE, ABOUT_HOME)
    }

    pub fn set_homepage(&self, url: &str) {
        self.store.set(keys::HOMEPAGE, url);
    }

    /// Raw engine index; resolve it through a search engine provider
    pub fn search_choice(&self) -> i64 {
        self.store.get_int(keys::SEARCH_CHOICE, DEFAULT_SEARCH_CHOICE)
    }

    pub fn set_search_choice(&self, index: i64) {
        self.store.set(keys::SEARCH_CHOICE, index);
    }

    /// Query URL template of the custom search engine
    pub fn search_url(&self) -> String {
        self.store.get_string(keys::SEARCH_URL, GOOGLE_SEARCH_URL)
    }

    pub fn set_search_url(&self, url: &str) {
        self.store.set(keys::SEARCH_URL, url);
    }

    /// Raw suggestion provider index, possibly out of range
    pub fn search_suggestion_choice(&self) -> i64 {
        self.store
            .get_int(keys::SEARCH_SUGGESTIONS_CHOICE, Suggestions::Google.index())
    }

    pub fn set_search_suggestion_choice(&self, index: i64) {
        self.store.set(keys::SEARCH_SUGGESTIONS_CHOICE, index);
    }

    pub fn search_suggestions(&self) -> Suggestions {
        Suggestions::from_index(self.search_suggestion_choice())
    }

    pub fn text_encoding(&self) -> String {
        self.store.get_string(keys::TEXT_ENCODING, DEFAULT_TEXT_ENCODING)
    }

    pub fn set_text_encoding(&self, encoding: &str) {
        self.store.set(keys::TEXT_ENCODING, encoding);
    }

    pub fn cookies_enabled(&self) -> bool {
        self.store.get_bool(keys::COOKIES_ENABLED, true)
    }

    pub fn set_cookies_enabled(&self, enabled: bool) {
        self.store.set(keys::COOKIES_ENABLED, enabled);
    }

    pub fn incognito_cookies_enabled(&self) -> bool {
        self.store.get_bool(keys::INCOGNITO_COOKIES_ENABLED, false)
    }

    pub fn set_incognito_cookies_enabled(&self, enabled: bool) {
        self.store.set(keys::INCOGNITO_COOKIES_ENABLED, enabled);
    }

    /// Locale override; `None` follows the system locale
    pub fn locale(&self) -> Option<String> {
        Some(self.store.get_string(keys::LOCALE, "")).filter(|code| !code.is_empty())
    }

    pub fn set_locale(&self, locale: Option<&str>) {
        match locale.filter(|code| !code.is_empty()) {
            Some(code) => self.store.set(keys::LOCALE, code),
            None => self.store.remove(keys::LOCALE),
        }
    }

    pub fn scrollbars_visible(&self) -> bool {
        self.store.get_bool(keys::SCROLLBARS_VISIBLE, true)
    }

    pub fn set_scrollbars_visible(&self, visible: bool) {
        self.store.set(keys::SCROLLBARS_VISIBLE, visible);
    }

    pub fn scrollbars_fading(&self) -> bool {
        self.store.get_bool(keys::SCROLLBARS_FADING, true)
    }

    pub fn set_scrollbars_fading(&self, fading: bool) {
        self.store.set(keys::SCROLLBARS_FADING, fading);
    }

    pub fn scrollbars_fade_delay_ms(&self) -> i64 {
        self.store
            .get_int(keys::SCROLLBARS_FADE_DELAY, DEFAULT_SCROLLBAR_FADE_DELAY_MS)
    }

    pub fn set_scrollbars_fade_delay_ms(&self, delay: i64) {
        self.store.set(keys::SCROLLBARS_FADE_DELAY, delay);
    }
}
