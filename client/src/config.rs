use std::time::Duration;

use pokegui_protocol::{LEVEL_UP, PLATINUM};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Settings for [`crate::Client`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root of the API; endpoint paths are appended to it
    pub base_url: String,

    /// Version group the move list is read from
    pub version_group: String,

    /// Learn method a move must have to be listed
    pub learn_method: String,

    pub user_agent: String,

    /// Per-request timeout; `None` keeps the HTTP client default
    pub timeout: Option<Duration>,

    /// Honour `HTTP_PROXY`-style environment variables
    pub use_system_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            version_group: PLATINUM.to_string(),
            learn_method: LEVEL_UP.to_string(),
            user_agent: concat!("pokegui/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
            use_system_proxy: true,
        }
    }
}

impl ClientConfig {
    /// Default settings against another API root
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
