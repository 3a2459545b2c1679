//! Front-end configuration.
//!
//! The defaults are embedded as TOML; `LOYALTY_API_BASE` set at build time
//! overrides the API base URL. The loaded value is provided to the
//! component tree through context.

use leptos::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub list: ListConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Absolute API origin; empty means "same host as the page"
    #[serde(default)]
    pub base_url: String,
    /// Backend port used when the origin is derived from the page location
    #[serde(default = "default_api_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RefreshConfig {
    /// Auto-refresh period of the purchase request page; 0 disables it
    #[serde(default = "default_auto_refresh_secs")]
    pub auto_refresh_secs: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AuthConfig {
    /// Consecutive 401/403 responses before the re-login prompt is shown
    #[serde(default = "default_relogin_after_failures")]
    pub relogin_after_failures: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    /// Search text shorter than this does not filter
    #[serde(default = "default_min_search_len")]
    pub min_search_len: usize,
}

fn default_api_port() -> u16 {
    3000
}

fn default_auto_refresh_secs() -> u32 {
    30
}

fn default_relogin_after_failures() -> u32 {
    3
}

fn default_min_search_len() -> usize {
    1
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            port: default_api_port(),
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            auto_refresh_secs: default_auto_refresh_secs(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            relogin_after_failures: default_relogin_after_failures(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            min_search_len: default_min_search_len(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000

[refresh]
auto_refresh_secs = 30

[auth]
relogin_after_failures = 3

[list]
min_search_len = 1
"#;

/// Parse a configuration document; missing sections take their defaults
pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    Ok(toml::from_str(contents)?)
}

/// Load the embedded configuration and apply the build-time override
pub fn load_config() -> anyhow::Result<AppConfig> {
    let mut config = parse_config(DEFAULT_CONFIG)?;
    if let Some(base) = option_env!("LOYALTY_API_BASE") {
        log::info!("API base overridden at build time: {}", base);
        config.api.base_url = base.to_string();
    }
    Ok(config)
}

impl AppConfig {
    /// API origin without a trailing slash
    pub fn api_base(&self) -> String {
        let location = web_sys::window().map(|w| {
            let location = w.location();
            (
                location.protocol().unwrap_or_else(|_| "http:".to_string()),
                location
                    .hostname()
                    .unwrap_or_else(|_| "127.0.0.1".to_string()),
            )
        });
        resolve_api_base(&self.api.base_url, location, self.api.port)
    }

    /// Auto-refresh period in milliseconds, `None` when disabled
    pub fn auto_refresh_millis(&self) -> Option<u32> {
        (self.refresh.auto_refresh_secs > 0)
            .then(|| self.refresh.auto_refresh_secs.saturating_mul(1000))
    }
}

/// Configured base wins; otherwise `{protocol}//{hostname}:{port}` from the
/// page location; empty when neither is available.
pub fn resolve_api_base(
    configured: &str,
    location: Option<(String, String)>,
    port: u16,
) -> String {
    let configured = configured.trim().trim_end_matches('/');
    if !configured.is_empty() {
        return configured.to_string();
    }
    match location {
        Some((protocol, hostname)) => format!("{}//{}:{}", protocol, hostname, port),
        None => String::new(),
    }
}

/// Configuration from context; falls back to the defaults outside a provider
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(|| {
        parse_config(DEFAULT_CONFIG).unwrap_or_else(|_| AppConfig {
            api: ApiConfig::default(),
            refresh: RefreshConfig::default(),
            auth: AuthConfig::default(),
            list: ListConfig::default(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.refresh.auto_refresh_secs, 30);
        assert_eq!(config.auth.relogin_after_failures, 3);
        assert_eq!(config.list.min_search_len, 1);
        assert_eq!(config.auto_refresh_millis(), Some(30_000));
    }

    #[test]
    fn test_partial_config_takes_defaults() {
        let config = parse_config("[refresh]\nauto_refresh_secs = 0\n").unwrap();
        assert_eq!(config.auto_refresh_millis(), None);
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.auth.relogin_after_failures, 3);
    }

    #[test]
    fn test_resolve_api_base() {
        assert_eq!(
            resolve_api_base("https://api.example.com/", None, 3000),
            "https://api.example.com"
        );
        assert_eq!(
            resolve_api_base("", Some(("https:".into(), "portal.example.com".into())), 5000),
            "https://portal.example.com:5000"
        );
        assert_eq!(resolve_api_base("  ", None, 3000), "");
    }
}
