use crate::constants::{
    API_DOMAIN_ENV_VAR, API_KEY_ENV_VAR, DEFAULT_API_DOMAIN, DEFAULT_HTTP_TIMEOUT_SECONDS,
    HTTP_TIMEOUT_ENV_VAR,
};
use crate::error::ApiError;

/// Client configuration: credential, API domain and HTTP timeout.
#[derive(Debug, Clone)]
pub struct Config {
    /// The football-data.org API key sent in the auth header.
    pub api_key: String,
    /// API domain including scheme and version path, without a trailing
    /// slash.
    pub api_domain: String,
    /// HTTP timeout in seconds for API requests.
    pub http_timeout_seconds: u64,
}

impl Config {
    /// Creates a configuration with an explicit API key and defaults for
    /// everything else. Environment overrides for domain and timeout are
    /// still applied.
    pub fn new(api_key: impl Into<String>) -> Self {
        let mut config = Config {
            api_key: api_key.into(),
            api_domain: DEFAULT_API_DOMAIN.to_string(),
            http_timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECONDS,
        };
        config.apply_env_overrides();
        config
    }

    /// Creates a configuration with the API key read from the
    /// `FOOTDATA_API_KEY` environment variable.
    ///
    /// # Returns
    /// * `Ok(Config)` - The variable was set and non-empty
    /// * `Err(ApiError::MissingApiKey)` - The variable is unset or empty
    pub fn from_env() -> Result<Self, ApiError> {
        Self::resolve(None)
    }

    /// Resolves the API key: an explicit argument takes precedence over the
    /// `FOOTDATA_API_KEY` environment variable.
    ///
    /// # Returns
    /// * `Ok(Config)` - A key was found in the argument or the environment
    /// * `Err(ApiError::MissingApiKey)` - Neither source provided a key
    pub fn resolve(api_key: Option<&str>) -> Result<Self, ApiError> {
        let key = match api_key {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => match std::env::var(API_KEY_ENV_VAR) {
                Ok(key) if !key.is_empty() => key,
                _ => return Err(ApiError::MissingApiKey),
            },
        };
        Ok(Config::new(key))
    }

    // Environment variables take precedence over defaults, matching the
    // config loading order used for the key itself.
    fn apply_env_overrides(&mut self) {
        if let Ok(api_domain) = std::env::var(API_DOMAIN_ENV_VAR)
            && !api_domain.is_empty()
        {
            self.api_domain = api_domain;
        }

        if let Some(timeout) = std::env::var(HTTP_TIMEOUT_ENV_VAR)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }
}
