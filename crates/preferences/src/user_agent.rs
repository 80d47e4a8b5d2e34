//! Resolution of the effective user agent string.

use crate::choices::UserAgentChoice;
use crate::store::UserPreferences;

pub const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const MOBILE_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36";

/// User agents supplied by the host environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgentContext {
    /// What the rendering engine sends when left alone
    pub webview_default: String,
    /// The platform HTTP agent, if the platform defines one
    pub system_agent: Option<String>,
}

impl UserAgentContext {
    pub fn new(webview_default: impl Into<String>) -> Self {
        Self {
            webview_default: webview_default.into(),
            system_agent: None,
        }
    }

    pub fn with_system_agent(mut self, agent: impl Into<String>) -> Self {
        self.system_agent = Some(agent.into());
        self
    }
}

/// The user agent the browser sends for the stored choice.
///
/// A blank custom string and a missing system agent both resolve to the
/// engine default.
pub fn resolve_user_agent(preferences: &UserPreferences, context: &UserAgentContext) -> String {
    match preferences.user_agent_choice() {
        UserAgentChoice::Default | UserAgentChoice::WebView => context.webview_default.clone(),
        UserAgentChoice::Desktop => DESKTOP_USER_AGENT.to_string(),
        UserAgentChoice::Mobile => MOBILE_USER_AGENT.to_string(),
        UserAgentChoice::Custom => {
            let custom = preferences.user_agent_string();
            if custom.trim().is_empty() {
                context.webview_default.clone()
            } else {
                custom
            }
        }
        UserAgentChoice::System => context
            .system_agent
            .clone()
            .unwrap_or_else(|| context.webview_default.clone()),
    }
}
