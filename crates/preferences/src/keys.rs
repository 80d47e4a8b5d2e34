//! Stable storage keys. Renaming any of these orphans persisted values.

pub const PROXY_CHOICE: &str = "proxy_choice";
pub const PROXY_HOST: &str = "proxy_host";
pub const PROXY_PORT: &str = "proxy_port";
pub const USER_AGENT_CHOICE: &str = "user_agent_choice";
pub const USER_AGENT_STRING: &str = "user_agent_string";
pub const DOWNLOAD_DIRECTORY: &str = "download_directory";
pub const HOMEPAGE: &str = "home_page";
pub const SEARCH_CHOICE: &str = "search_choice";
pub const SEARCH_URL: &str = "search_url";
pub const SEARCH_SUGGESTIONS_CHOICE: &str = "search_suggestions_choice";
pub const TEXT_ENCODING: &str = "text_encoding";
pub const COOKIES_ENABLED: &str = "cookies_enabled";
pub const INCOGNITO_COOKIES_ENABLED: &str = "incognito_cookies_enabled";
pub const LOCALE: &str = "locale";
pub const SCROLLBARS_VISIBLE: &str = "scrollbars_visible";
pub const SCROLLBARS_FADING: &str = "scrollbars_fading";
pub const SCROLLBARS_FADE_DELAY: &str = "scrollbars_fade_delay";
