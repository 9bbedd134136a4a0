use std::fmt;
use std::time::Duration;

use crate::{RelayError, Result};

pub const DEFAULT_ENDPOINT: &str = "https://api.mackerelio.com/api/v0/monitoring/checks/report";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Mackerel host the check reports are filed against.
    pub host_id: String,
    pub mackerel: MackerelConfig,
}

#[derive(Clone, PartialEq, Eq)]
pub struct MackerelConfig {
    pub api_key: String,
    pub endpoint: String,
    /// `None` leaves the POST bounded only by the Lambda timeout.
    pub timeout: Option<Duration>,
}

impl fmt::Debug for MackerelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("MackerelConfig")
            .field("api_key", &api_key)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for MackerelConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

impl Config {
    /// Loads configuration for the Lambda function. `HOST_ID` and
    /// `MACKEREL_APIKEY` must both be set.
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::load`] but tolerates a missing API key, for runs that
    /// never talk to Mackerel.
    pub fn load_dry_run() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::build(|key| std::env::var(key).ok(), false)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::build(lookup, true)
    }

    fn build<F>(lookup: F, require_api_key: bool) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset.
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let host_id = var("HOST_ID")
            .ok_or_else(|| RelayError::Config("HOST_ID is required".to_string()))?;

        let api_key = match var("MACKEREL_APIKEY") {
            Some(key) => key,
            None if require_api_key => {
                return Err(RelayError::Config("MACKEREL_APIKEY is required".to_string()))
            }
            None => String::new(),
        };

        let endpoint = var("MACKEREL_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout = match var("MACKEREL_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    RelayError::Config(format!("MACKEREL_TIMEOUT_SECS must be an integer, got {raw:?}"))
                })?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            None => Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        };

        Ok(Config {
            host_id,
            mackerel: MackerelConfig {
                api_key,
                endpoint,
                timeout,
            },
        })
    }
}
