//! Search engine registry.

use crate::store::UserPreferences;

pub const GOOGLE_SEARCH_URL: &str =
    "https://www.google.com/search?client=lightning&ie=UTF-8&oe=UTF-8&q=";

/// Preference index of the custom engine
pub const CUSTOM_SEARCH_INDEX: i64 = 0;

/// Engine used when the stored index does not resolve
const FALLBACK_INDEX: i64 = 1;

/// Preference index, title and query URL of every built-in engine
const BUILTIN_ENGINES: [(i64, &str, &str); 13] = [
    (1, "Google", GOOGLE_SEARCH_URL),
    (2, "Ask", "https://www.ask.com/web?qsrc=0&o=0&l=dir&qo=CitadelBrowser&q="),
    (3, "Bing", "https://www.bing.com/search?q="),
    (4, "Yahoo", "https://search.yahoo.com/search?p="),
    (5, "StartPage", "https://startpage.com/do/search?language=english&query="),
    (6, "StartPage Mobile", "https://startpage.com/do/m/mobilesearch?language=english&query="),
    (7, "DuckDuckGo", "https://duckduckgo.com/?t=citadel&q="),
    (8, "DuckDuckGo Lite", "https://duckduckgo.com/lite/?t=citadel&q="),
    (9, "Baidu", "https://www.baidu.com/s?wd="),
    (10, "Yandex", "https://yandex.ru/yandsearch?lr=21411&text="),
    (11, "Naver", "https://search.naver.com/search.naver?ie=utf8&query="),
    (12, "Ecosia", "https://www.ecosia.org/search?q="),
    (13, "Qwant", "https://www.qwant.com/?q="),
];

/// A search engine, either one of the built-in set or the user's own query
/// URL template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEngine {
    Builtin {
        title: &'static str,
        query_url: &'static str,
    },
    Custom {
        query_url: String,
    },
}

impl SearchEngine {
    pub fn title(&self) -> &str {
        match self {
            SearchEngine::Builtin { title, .. } => title,
            SearchEngine::Custom { .. } => "Custom URL",
        }
    }

    pub fn query_url(&self) -> &str {
        match self {
            SearchEngine::Builtin { query_url, .. } => query_url,
            SearchEngine::Custom { query_url } => query_url,
        }
    }

    /// Text shown next to the search engine setting: the query URL for a
    /// custom engine, the title otherwise
    pub fn summary(&self) -> &str {
        match self {
            SearchEngine::Builtin { title, .. } => title,
            SearchEngine::Custom { query_url } => query_url,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, SearchEngine::Custom { .. })
    }

    /// Full search URL for `query`
    pub fn search_url(&self, query: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        format!("{}{}", self.query_url(), encoded)
    }
}

/// Read-only registry of available engines.
pub trait SearchEngineProvider {
    /// Engines in the order they are offered to the user
    fn provide_all_search_engines(&self) -> Vec<SearchEngine>;

    /// The engine selected in preferences
    fn provide_search_engine(&self) -> SearchEngine;

    fn map_search_engine_to_preference_index(&self, engine: &SearchEngine) -> i64;
}

/// Built-in engines plus the custom engine backed by preferences.
#[derive(Clone)]
pub struct BuiltinSearchEngines {
    preferences: UserPreferences,
}

impl BuiltinSearchEngines {
    pub fn new(preferences: UserPreferences) -> Self {
        Self { preferences }
    }

    fn engine_for_index(&self, index: i64) -> Option<SearchEngine> {
        if index == CUSTOM_SEARCH_INDEX {
            return Some(SearchEngine::Custom {
                query_url: self.preferences.search_url(),
            });
        }
        BUILTIN_ENGINES
            .iter()
            .find(|(engine_index, _, _)| *engine_index == index)
            .map(|&(_, title, query_url)| SearchEngine::Builtin { title, query_url })
    }
}

impl SearchEngineProvider for BuiltinSearchEngines {
    fn provide_all_search_engines(&self) -> Vec<SearchEngine> {
        let mut engines = Vec::with_capacity(BUILTIN_ENGINES.len() + 1);
        engines.push(SearchEngine::Custom {
            query_url: self.preferences.search_url(),
        });
        engines.extend(
            BUILTIN_ENGINES
                .iter()
                .map(|&(_, title, query_url)| SearchEngine::Builtin { title, query_url }),
        );
        engines
    }

    fn provide_search_engine(&self) -> SearchEngine {
        let index = self.preferences.search_choice();
        self.engine_for_index(index).unwrap_or_else(|| {
            log::warn!("Unknown search engine index {}, using default", index);
            self.engine_for_index(FALLBACK_INDEX)
                .unwrap_or(SearchEngine::Builtin {
                    title: "Google",
                    query_url: GOOGLE_SEARCH_URL,
                })
        })
    }

    fn map_search_engine_to_preference_index(&self, engine: &SearchEngine) -> i64 {
        match engine {
            SearchEngine::Custom { .. } => CUSTOM_SEARCH_INDEX,
            SearchEngine::Builtin { title, .. } => BUILTIN_ENGINES
                .iter()
                .find(|(_, engine_title, _)| engine_title == title)
                .map(|(index, _, _)| *index)
                .unwrap_or(FALLBACK_INDEX),
        }
    }
}
