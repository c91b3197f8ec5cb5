use std::env;
use std::time::Duration;

/// Environment variable names - single source of truth
pub mod env_vars {
    /// Parent of the `/notes` resource, e.g. "http://127.0.0.1:5001/api"
    pub const API_URL: &str = "NOTES_API_URL";
    /// Optional per-request timeout in seconds. Unset means no timeout.
    pub const REQUEST_TIMEOUT_SECS: &str = "NOTES_REQUEST_TIMEOUT_SECS";
}

/// Default values
pub mod defaults {
    pub const API_URL: &str = "http://127.0.0.1:5001/api";
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub request_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup(env_vars::API_URL)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| defaults::API_URL.to_string());

        let request_timeout = lookup(env_vars::REQUEST_TIMEOUT_SECS).and_then(|raw| {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    log::warn!(
                        "Invalid {} value {:?}, requests will not time out",
                        env_vars::REQUEST_TIMEOUT_SECS,
                        raw
                    );
                    None
                }
            }
        });

        Self {
            api_url,
            request_timeout,
        }
    }
}
