use url::Url;

use crate::error::{PinterestError, Result};

/// The production API host. Every endpoint family lives under it.
pub const PINTEREST_API_BASE_URL: &str = "https://api.pinterest.com";

/// Scopes requested during authorization.
pub const OAUTH_SCOPES: [&str; 2] = ["read_public", "write_public"];

const ENV_BASE_URL: &str = "PINTEREST_API_BASE_URL";
const ENV_USER_AGENT: &str = "PINTEREST_USER_AGENT";
const ENV_LOCALE: &str = "PINTEREST_LOCALE";
const ENV_CLIENT_ID: &str = "PINTEREST_CLIENT_ID";
const ENV_CLIENT_SECRET: &str = "PINTEREST_CLIENT_SECRET";

fn default_base_url() -> Url {
    Url::parse(PINTEREST_API_BASE_URL).expect("production base URL should be valid")
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|err| PinterestError::Config(format!("{raw}: {err}")))?;
    if url.cannot_be_a_base() {
        return Err(PinterestError::Config(format!("{raw} cannot be a base URL")));
    }
    Ok(url)
}

/// Settings shared by every request the API client makes.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    /// Sent as `User-Agent` when set.
    pub user_agent: Option<String>,
    /// Sent as `Accept-Language` when set.
    pub locale: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: None,
            locale: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `PINTEREST_API_BASE_URL` (default: the production host)
    /// - `PINTEREST_USER_AGENT`
    /// - `PINTEREST_LOCALE`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config = config.with_base_url(&base_url)?;
        }
        config.user_agent = lookup(ENV_USER_AGENT);
        config.locale = lookup(ENV_LOCALE);
        Ok(config)
    }
}

/// The application credentials used during the OAuth exchange.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub base_url: Url,
}

impl OAuthConfig {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            base_url: default_base_url(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Create configuration from environment variables.
    ///
    /// Expects `PINTEREST_CLIENT_ID` and `PINTEREST_CLIENT_SECRET`;
    /// `PINTEREST_API_BASE_URL` is optional.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| PinterestError::Config(format!("{key} not set")))
        };
        let config = Self::new(required(ENV_CLIENT_ID)?, required(ENV_CLIENT_SECRET)?);
        match lookup(ENV_BASE_URL) {
            Some(base_url) => config.with_base_url(&base_url),
            None => Ok(config),
        }
    }
}
