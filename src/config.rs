// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

const MAX_PROVIDER_TIMEOUT_SECS: u64 = 300;

#[derive(Clone)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    openai_api_key: Option<String>,
    openai_base_url: String,
    openai_model: String,
    provider_timeout: Duration,
    allowed_origins: Vec<String>,
    rate_limit_enabled: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://fude.db".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".into()
}

fn default_openai_model() -> String {
    "gpt-4".into()
}

fn default_provider_timeout_secs() -> u64 {
    30
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl AppConfig {
    /// Build configuration from environment variables, loading a `.env` file
    /// first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same parsing as [`from_env`](Self::from_env) over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset.
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = get("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let openai_api_key = get("OPENAI_API_KEY").map(|v| v.trim().to_string());
        let openai_base_url = get("OPENAI_BASE_URL").unwrap_or_else(default_openai_base_url);
        let openai_model = get("OPENAI_MODEL").unwrap_or_else(default_openai_model);

        let provider_timeout_secs = match get("PROVIDER_TIMEOUT_SECS") {
            None => default_provider_timeout_secs(),
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| (1..=MAX_PROVIDER_TIMEOUT_SECS).contains(secs))
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "PROVIDER_TIMEOUT_SECS must be between 1 and {MAX_PROVIDER_TIMEOUT_SECS}, got '{raw}'"
                    ))
                })?,
        };

        let allowed_origins = get("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let rate_limit_enabled = match get("RATE_LIMIT_ENABLED") {
            None => true,
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                ConfigError::Invalid(format!("RATE_LIMIT_ENABLED must be a boolean, got '{raw}'"))
            })?,
        };

        Ok(Self {
            database_url,
            listen_addr,
            openai_api_key,
            openai_base_url,
            openai_model,
            provider_timeout: Duration::from_secs(provider_timeout_secs),
            allowed_origins,
            rate_limit_enabled,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Provider credential. `None` selects offline generation.
    pub fn openai_api_key(&self) -> Option<&str> {
        self.openai_api_key.as_deref()
    }

    pub fn openai_base_url(&self) -> &str {
        &self.openai_base_url
    }

    pub fn openai_model(&self) -> &str {
        &self.openai_model
    }

    pub fn provider_timeout(&self) -> Duration {
        self.provider_timeout
    }

    /// Allowed CORS origins. Empty means any origin.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &self.database_url)
            .field("listen_addr", &self.listen_addr)
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("openai_base_url", &self.openai_base_url)
            .field("openai_model", &self.openai_model)
            .field("provider_timeout", &self.provider_timeout)
            .field("allowed_origins", &self.allowed_origins)
            .field("rate_limit_enabled", &self.rate_limit_enabled)
            .finish()
    }
}
