use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const HOST: &str = "HOST";
    pub const PORT: &str = "PORT";
    /// JSON file holding all notes
    pub const DB_PATH: &str = "NOTES_DB_PATH";
    /// Summarization is disabled when unset
    pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
    pub const GEMINI_API_URL: &str = "GEMINI_API_URL";
}

/// Default values
pub mod defaults {
    pub const HOST: &str = "127.0.0.1";
    pub const PORT: u16 = 5001;
    pub const DB_PATH: &str = "db.json";
    pub const GEMINI_MODEL: &str = "gemini-pro";
    pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub google_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_url: String,
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match non_empty(env_vars::PORT) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                log::warn!("Invalid {} value {:?} ({}), using {}", env_vars::PORT, raw, e, defaults::PORT);
                defaults::PORT
            }),
            None => defaults::PORT,
        };

        Self {
            host: non_empty(env_vars::HOST).unwrap_or_else(|| defaults::HOST.to_string()),
            port,
            db_path: non_empty(env_vars::DB_PATH)
                .unwrap_or_else(|| defaults::DB_PATH.to_string())
                .into(),
            google_api_key: non_empty(env_vars::GOOGLE_API_KEY),
            gemini_model: non_empty(env_vars::GEMINI_MODEL)
                .unwrap_or_else(|| defaults::GEMINI_MODEL.to_string()),
            gemini_api_url: non_empty(env_vars::GEMINI_API_URL)
                .unwrap_or_else(|| defaults::GEMINI_API_URL.to_string()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
