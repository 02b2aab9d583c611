use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String, // GitHub rejects requests without one
    pub timeout: Duration,  // Upper bound for one request, connect to last byte
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: concat!("github_search/", env!("CARGO_PKG_VERSION")).to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    // Overrides come from GITHUB_API_URL, GITHUB_SEARCH_USER_AGENT and
    // GITHUB_SEARCH_TIMEOUT_SECS; run dotenv() first to honor a .env file
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout = non_empty("GITHUB_SEARCH_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        Self {
            base_url: non_empty("GITHUB_API_URL").unwrap_or(defaults.base_url),
            user_agent: non_empty("GITHUB_SEARCH_USER_AGENT").unwrap_or(defaults.user_agent),
            timeout,
        }
    }
}
