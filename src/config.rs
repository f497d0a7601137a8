use crate::constants::{
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_MAX_ATTEMPTS, DEFAULT_RATE_LIMIT_BURST_SIZE,
    DEFAULT_RATE_LIMIT_MAX_REQUESTS, DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
    DEFAULT_RETRY_BASE_DELAY_MS, DEFAULT_RETRY_MAX_DELAY_MS,
};
use crate::error::AppError;
use crate::model::retry::RetryConfig;
use crate::utils::config::get_env_or_default;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

/// Authentication credentials for the Trading212 API
///
/// The API authenticates every request with HTTP Basic auth built from the
/// key id and secret. The secret is intentionally excluded from `Debug`
/// output so credentials cannot leak through logs or error messages.
#[derive(Clone)]
pub struct Credentials {
    /// API key identifier
    pub api_key_id: String,
    /// API key secret
    pub api_key_secret: String,
}

impl Credentials {
    /// Creates a new credential pair
    pub fn new(api_key_id: impl Into<String>, api_key_secret: impl Into<String>) -> Self {
        Self {
            api_key_id: api_key_id.into(),
            api_key_secret: api_key_secret.into(),
        }
    }

    /// Returns the value for the `Authorization` header: `Basic base64(id:secret)`
    #[must_use]
    pub fn basic_token(&self) -> String {
        let pair = format!("{}:{}", self.api_key_id, self.api_key_secret);
        format!("Basic {}", STANDARD.encode(pair))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key_id", &self.api_key_id)
            .field("api_key_secret", &"***")
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Trading212 REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

/// Main configuration for the Trading212 API client
#[derive(Debug, Clone)]
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
    /// Retry policy for transient failures
    pub retry: RetryConfig,
}

impl Config {
    /// Loads the configuration from the environment.
    ///
    /// `T212_API_KEY_ID`, `T212_API_KEY_SECRET` and `T212_BASE_URL` are
    /// required; a missing one is a fatal configuration error, never a
    /// per-call error. The remaining settings have defaults and can be tuned
    /// through `T212_HTTP_TIMEOUT`, `T212_RATE_LIMIT_MAX_REQUESTS`,
    /// `T212_RATE_LIMIT_PERIOD_SECONDS`, `T212_RATE_LIMIT_BURST_SIZE`,
    /// `T212_MAX_ATTEMPTS`, `T212_RETRY_BASE_DELAY_MS` and
    /// `T212_RETRY_MAX_DELAY_MS`.
    pub fn from_env() -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key_id = require_env("T212_API_KEY_ID")?;
        let api_key_secret = require_env("T212_API_KEY_SECRET")?;
        let base_url = require_env("T212_BASE_URL")?;

        Ok(Self::with_credentials(
            Credentials::new(api_key_id, api_key_secret),
            base_url,
        ))
    }

    /// Builds a configuration from explicit credentials and base URL,
    /// taking every tunable from the environment or its default.
    pub fn with_credentials(credentials: Credentials, base_url: impl Into<String>) -> Self {
        Config {
            credentials,
            rest_api: RestApiConfig {
                base_url: base_url.into().trim_end_matches('/').to_string(),
                timeout: get_env_or_default("T212_HTTP_TIMEOUT", DEFAULT_HTTP_TIMEOUT_SECS),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "T212_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_RATE_LIMIT_MAX_REQUESTS,
                ),
                period_seconds: get_env_or_default(
                    "T212_RATE_LIMIT_PERIOD_SECONDS",
                    DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
                ),
                burst_size: get_env_or_default(
                    "T212_RATE_LIMIT_BURST_SIZE",
                    DEFAULT_RATE_LIMIT_BURST_SIZE,
                ),
            },
            retry: RetryConfig {
                max_attempts: get_env_or_default("T212_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS),
                base_delay_ms: get_env_or_default(
                    "T212_RETRY_BASE_DELAY_MS",
                    DEFAULT_RETRY_BASE_DELAY_MS,
                ),
                max_delay_ms: get_env_or_default(
                    "T212_RETRY_MAX_DELAY_MS",
                    DEFAULT_RETRY_MAX_DELAY_MS,
                ),
            },
        }
    }
}

fn require_env(name: &'static str) -> Result<String, AppError> {
    match env::var(name) {
        Ok(val) if !val.trim().is_empty() => Ok(val),
        _ => Err(AppError::Config(format!(
            "{name} not found in environment variables or .env file"
        ))),
    }
}
