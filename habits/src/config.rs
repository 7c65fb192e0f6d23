use std::{env, time::Duration};

use url::Url;

use crate::{error::ConfigError, validate::PresenceRule};

pub const API_URL_VAR: &str = "HABITS_API_URL";
pub const TIMEOUT_VAR: &str = "HABITS_TIMEOUT_SECS";
pub const PRESENCE_RULE_VAR: &str = "HABITS_PRESENCE_RULE";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how the prediction service is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Creates a config for the given service origin.
    ///
    /// # Args
    /// * `base_url` - The service origin, e.g. `http://127.0.0.1:8000`.
    ///
    /// # Errors
    /// Returns a `ConfigError` if the url does not parse or is not http(s).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');

        let parsed = Url::parse(trimmed).map_err(|source| ConfigError::InvalidUrl {
            value: base_url.to_string(),
            source,
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                value: base_url.to_string(),
                scheme: parsed.scheme().to_string(),
            });
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The service origin without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Target of the prediction call, without the query string.
    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }

    /// Target of the self-description call.
    pub fn info_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    /// Read and write timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn connect_timeout(&self) -> Duration {
        self.timeout.min(MAX_CONNECT_TIMEOUT)
    }
}

/// Everything read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub client: ClientConfig,
    pub presence_rule: PresenceRule,
}

impl Settings {
    /// Reads the settings from the process environment.
    ///
    /// # Errors
    /// Returns a `ConfigError` if the api url is missing or any value is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Reads the settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let base_url = non_empty(API_URL_VAR).ok_or(ConfigError::MissingVar(API_URL_VAR))?;
        let mut client = ClientConfig::new(&base_url)?;

        if let Some(raw) = non_empty(TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    var: TIMEOUT_VAR,
                    value: raw.clone(),
                    reason: "expected a positive number of seconds".into(),
                })?;
            client = client.with_timeout(Duration::from_secs(secs));
        }

        let presence_rule = match non_empty(PRESENCE_RULE_VAR) {
            Some(raw) => raw.parse().map_err(|reason| ConfigError::InvalidValue {
                var: PRESENCE_RULE_VAR,
                value: raw.clone(),
                reason,
            })?,
            None => PresenceRule::default(),
        };

        Ok(Self {
            client,
            presence_rule,
        })
    }
}
