//! SDK configuration.
//!
//! Sources, lowest precedence first: built-in defaults, a YAML document, and
//! `SNAPADS_*` environment variables. Configuration is read once when a
//! client is built.
//!
//! ```yaml
//! base_url: https://adsapi.snapchat.com/v1
//! timeout_secs: 30
//! oauth:
//!   client_id: my-app
//!   client_secret: s3cr3t
//!   redirect_uri: https://example.com/callback
//! ```

use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://adsapi.snapchat.com/v1";
pub const DEFAULT_AUTHORIZE_URL: &str = "https://accounts.snapchat.com/login/oauth2/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.snapchat.com/login/oauth2/access_token";

/// OAuth application credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    #[serde(default = "default_authorize_url")]
    pub authorize_url: String,
    #[serde(default = "default_token_url")]
    pub token_url: String,
    #[serde(default = "default_scope")]
    pub scope: String,
}

fn default_authorize_url() -> String {
    DEFAULT_AUTHORIZE_URL.to_string()
}

fn default_token_url() -> String {
    DEFAULT_TOKEN_URL.to_string()
}

fn default_scope() -> String {
    "snapchat-marketing-api".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub pool_max_idle_per_host: usize,
    pub pool_idle_timeout_secs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    pub user_agent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth: Option<OAuthConfig>,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            pool_max_idle_per_host: 32,
            pool_idle_timeout_secs: 90,
            proxy_url: None,
            user_agent: format!("snapads-rust/{}", env!("CARGO_PKG_VERSION")),
            oauth: None,
        }
    }
}

impl SdkConfig {
    /// Defaults overlaid with environment variables.
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: SdkConfig = serde_yaml::from_str(text).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid YAML configuration: {}", e),
                ErrorContext::new().with_source("config_loader"),
            )
        })?;
        config.validated()
    }

    /// Load a YAML file, then apply environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration_with_context(
                format!("cannot read configuration file: {}", e),
                ErrorContext::new()
                    .with_field_path(path.display().to_string())
                    .with_source("config_loader"),
            )
        })?;
        Self::from_yaml_str(&text)?.with_env_overrides()
    }

    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(url) = env::var("SNAPADS_BASE_URL") {
            self.base_url = url;
        }
        if let Some(secs) = env_parse::<u64>("SNAPADS_HTTP_TIMEOUT_SECS") {
            self.timeout_secs = secs;
        }
        if let Some(n) = env_parse::<usize>("SNAPADS_HTTP_POOL_MAX_IDLE_PER_HOST") {
            self.pool_max_idle_per_host = n;
        }
        if let Some(secs) = env_parse::<u64>("SNAPADS_HTTP_POOL_IDLE_TIMEOUT_SECS") {
            self.pool_idle_timeout_secs = secs;
        }
        if let Ok(proxy) = env::var("SNAPADS_PROXY_URL") {
            self.proxy_url = Some(proxy);
        }

        let client_id = env::var("SNAPADS_CLIENT_ID").ok();
        let client_secret = env::var("SNAPADS_CLIENT_SECRET").ok();
        let redirect_uri = env::var("SNAPADS_REDIRECT_URI").ok();
        match self.oauth.as_mut() {
            Some(oauth) => {
                if let Some(id) = client_id {
                    oauth.client_id = id;
                }
                if let Some(secret) = client_secret {
                    oauth.client_secret = secret;
                }
                if let Some(redirect) = redirect_uri {
                    oauth.redirect_uri = redirect;
                }
            }
            None => {
                // Only a complete credential set creates an OAuth section.
                if let (Some(client_id), Some(client_secret), Some(redirect_uri)) =
                    (client_id, client_secret, redirect_uri)
                {
                    self.oauth = Some(OAuthConfig {
                        client_id,
                        client_secret,
                        redirect_uri,
                        authorize_url: default_authorize_url(),
                        token_url: default_token_url(),
                        scope: default_scope(),
                    });
                }
            }
        }

        self.validated()
    }

    /// Check the base URL parses and strip any trailing slash.
    pub fn validated(mut self) -> Result<Self> {
        let trimmed = self.base_url.trim().trim_end_matches('/').to_string();
        url::Url::parse(&trimmed).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base URL '{}': {}", self.base_url, e),
                ErrorContext::new()
                    .with_field_path("config.base_url")
                    .with_source("config_loader"),
            )
        })?;
        self.base_url = trimmed;
        if self.timeout_secs == 0 {
            return Err(Error::configuration_with_context(
                "timeout_secs must be greater than zero",
                ErrorContext::new()
                    .with_field_path("config.timeout_secs")
                    .with_source("config_loader"),
            ));
        }
        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn pool_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.pool_idle_timeout_secs)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse::<T>().ok())
}
