//! Choice enums stored as integer indexes, and the reserved homepage URLs.
//!
//! Every `from_index` is total: values written by older builds or edited by
//! hand fall back to a documented default instead of failing.

use std::fmt;

pub const ABOUT_HOME: &str = "about:home";
pub const ABOUT_BLANK: &str = "about:blank";
pub const ABOUT_BOOKMARKS: &str = "about:bookmarks";

/// Encodings offered by the text encoding picker
pub const TEXT_ENCODINGS: [&str; 8] = [
    "ISO-8859-1",
    "UTF-8",
    "GBK",
    "Big5",
    "ISO-2022-JP",
    "SHIFT_JS",
    "EUC-JP",
    "EUC-KR",
];

/// Which proxy the network layer routes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxyChoice {
    None,
    Orbot,
    I2p,
    Manual,
}

impl ProxyChoice {
    pub const ALL: [Self; 4] = [Self::None, Self::Orbot, Self::I2p, Self::Manual];

    pub fn index(self) -> i64 {
        match self {
            Self::None => 0,
            Self::Orbot => 1,
            Self::I2p => 2,
            Self::Manual => 3,
        }
    }

    /// Unknown indexes mean no proxy
    pub fn from_index(index: i64) -> Self {
        match index {
            1 => Self::Orbot,
            2 => Self::I2p,
            3 => Self::Manual,
            _ => Self::None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Orbot => "Orbot",
            Self::I2p => "I2P",
            Self::Manual => "Manual",
        }
    }
}

/// User agent presets. Indexes start at 1 for compatibility with stored
/// profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserAgentChoice {
    Default,
    Desktop,
    Mobile,
    Custom,
    WebView,
    System,
}

impl UserAgentChoice {
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Desktop,
        Self::Mobile,
        Self::Custom,
        Self::WebView,
        Self::System,
    ];

    pub fn index(self) -> i64 {
        match self {
            Self::Default => 1,
            Self::Desktop => 2,
            Self::Mobile => 3,
            Self::Custom => 4,
            Self::WebView => 5,
            Self::System => 6,
        }
    }

    pub fn from_index(index: i64) -> Self {
        match index {
            2 => Self::Desktop,
            3 => Self::Mobile,
            4 => Self::Custom,
            5 => Self::WebView,
            6 => Self::System,
            _ => Self::Default,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Desktop => "Desktop",
            Self::Mobile => "Mobile",
            Self::Custom => "Custom",
            Self::WebView => "WebView",
            Self::System => "System",
        }
    }
}

/// Search suggestion providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suggestions {
    None,
    Google,
    Duck,
    Baidu,
    Naver,
}

impl Suggestions {
    /// Order used by the suggestions picker, which differs from the storage order
    pub const PICKER_ORDER: [Self; 5] = [
        Self::Google,
        Self::Duck,
        Self::Baidu,
        Self::Naver,
        Self::None,
    ];

    pub fn index(self) -> i64 {
        match self {
            Self::None => 0,
            Self::Google => 1,
            Self::Duck => 2,
            Self::Baidu => 3,
            Self::Naver => 4,
        }
    }

    /// Unknown indexes fall back to Google
    pub fn from_index(index: i64) -> Self {
        match index {
            0 => Self::None,
            2 => Self::Duck,
            3 => Self::Baidu,
            4 => Self::Naver,
            _ => Self::Google,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Google => "Powered by Google",
            Self::Duck => "Powered by DuckDuckGo",
            Self::Baidu => "Powered by Baidu",
            Self::Naver => "Powered by Naver",
        }
    }
}

/// Stored homepage, split into the reserved pseudo-URLs and everything else
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Homepage {
    Home,
    Blank,
    Bookmarks,
    Custom(String),
}

impl Homepage {
    pub fn from_url(url: &str) -> Self {
        match url {
            ABOUT_HOME => Self::Home,
            ABOUT_BLANK => Self::Blank,
            ABOUT_BOOKMARKS => Self::Bookmarks,
            other => Self::Custom(other.to_string()),
        }
    }

    pub fn as_url(&self) -> &str {
        match self {
            Self::Home => ABOUT_HOME,
            Self::Blank => ABOUT_BLANK,
            Self::Bookmarks => ABOUT_BOOKMARKS,
            Self::Custom(url) => url,
        }
    }

    /// Fixed label for pseudo-URLs, the URL itself otherwise
    pub fn display_title(&self) -> &str {
        match self {
            Self::Home => "Homepage",
            Self::Blank => "Blank page",
            Self::Bookmarks => "Bookmarks",
            Self::Custom(url) => url,
        }
    }

    /// Row in the homepage picker
    pub fn picker_index(&self) -> usize {
        match self {
            Self::Home => 0,
            Self::Blank => 1,
            Self::Bookmarks => 2,
            Self::Custom(_) => 3,
        }
    }
}

impl fmt::Display for Homepage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexes_are_stable() {
        for choice in ProxyChoice::ALL {
            assert_eq!(ProxyChoice::from_index(choice.index()), choice);
        }
        for choice in UserAgentChoice::ALL {
            assert_eq!(UserAgentChoice::from_index(choice.index()), choice);
        }
        for choice in Suggestions::PICKER_ORDER {
            assert_eq!(Suggestions::from_index(choice.index()), choice);
        }
    }

    #[test]
    fn test_unknown_indexes_fall_back() {
        assert_eq!(ProxyChoice::from_index(42), ProxyChoice::None);
        assert_eq!(UserAgentChoice::from_index(0), UserAgentChoice::Default);
        assert_eq!(UserAgentChoice::from_index(-3), UserAgentChoice::Default);
        assert_eq!(Suggestions::from_index(99), Suggestions::Google);
        assert_eq!(Suggestions::from_index(-1), Suggestions::Google);
    }

    #[test]
    fn test_homepage_titles() {
        assert_eq!(Homepage::from_url(ABOUT_HOME).display_title(), "Homepage");
        assert_eq!(Homepage::from_url(ABOUT_BLANK).display_title(), "Blank page");
        assert_eq!(Homepage::from_url(ABOUT_BOOKMARKS).display_title(), "Bookmarks");

        let custom = Homepage::from_url("https://example.org/start");
        assert_eq!(custom.display_title(), "https://example.org/start");
        assert_eq!(custom.picker_index(), 3);
        assert_eq!(custom.as_url(), "https://example.org/start");
    }
}
