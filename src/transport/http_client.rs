/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/11/25
******************************************************************************/

//! HTTP transport for the Trading212 API
//!
//! [`T212HttpClientImpl`] executes pre-validated [`RequestDescriptor`]s:
//! it attaches the Basic-auth credentials, draws a token from the matching
//! rate limit bucket, dispatches with a bounded timeout, retries transient
//! failures with exponential backoff, and maps everything else to a typed
//! [`AppError`].

use crate::application::rate_limiter::RateLimiter;
use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::requests::RequestDescriptor;
use crate::model::retry::RetrySchedule;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

/// Gateway transport for the Trading212 API.
///
/// One `execute` call is one logical request: internally it may dispatch up
/// to the configured attempt budget before surfacing a terminal outcome.
///
/// Retries apply to mutations exactly as to reads. The remote API offers no
/// client-supplied deduplication key, so a write whose response was lost in
/// transit may have executed on the venue and be submitted again on the next
/// attempt. Callers placing orders or mutating pies must treat
/// [`AppError::TransientExhausted`] as an unknown outcome, not as "nothing
/// happened".
#[async_trait]
pub trait T212HttpClient: Send + Sync {
    /// Executes a descriptor and deserializes the success body into `T`.
    async fn execute<T: DeserializeOwned + Send>(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<T, AppError>;

    /// Executes a descriptor whose success response carries no body
    async fn execute_empty(&self, descriptor: &RequestDescriptor) -> Result<(), AppError>;
}

/// Default implementation of [`T212HttpClient`] over `reqwest`
pub struct T212HttpClientImpl {
    config: Arc<Config>,
    http_client: Client,
    rate_limiter: Arc<RwLock<RateLimiter>>,
    auth_header: String,
}

impl T212HttpClientImpl {
    /// Creates a new transport from the configuration.
    ///
    /// The Basic-auth header value is derived once here; credentials are
    /// never logged and never appear in error values.
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let timeout = Duration::from_secs(config.rest_api.timeout);
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        let rate_limiter = Arc::new(RwLock::new(RateLimiter::new(&config.rate_limiter)));
        let auth_header = config.credentials.basic_token();
        Ok(Self {
            config,
            http_client,
            rate_limiter,
            auth_header,
        })
    }

    /// Shared rate limiter state, exposed for inspection
    #[must_use]
    pub fn rate_limiter(&self) -> Arc<RwLock<RateLimiter>> {
        self.rate_limiter.clone()
    }

    fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.config.rest_api.base_url, path)
    }

    async fn dispatch(&self, descriptor: &RequestDescriptor) -> Result<Response, reqwest::Error> {
        let mut request = self
            .http_client
            .request(descriptor.method.clone(), self.url_for(&descriptor.path))
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json");
        if let Some(body) = &descriptor.body {
            request = request.json(body);
        }
        request.send().await
    }

    /// Runs the rate-limit/dispatch/retry loop and returns the success body
    /// as text.
    async fn execute_raw(&self, descriptor: &RequestDescriptor) -> Result<String, AppError> {
        let mut schedule = RetrySchedule::new(&self.config.retry);
        let mut last_status: Option<StatusCode> = None;

        loop {
            {
                let limiter = self.rate_limiter.read().await;
                limiter.wait(descriptor.category).await;
            }

            debug!("{} {}", descriptor.method, descriptor.path);

            match self.dispatch(descriptor).await {
                Ok(response) => {
                    let status = response.status();
                    debug!("Response status: {}", status);

                    if status.is_success() {
                        return Ok(response.text().await?);
                    }

                    if status == StatusCode::TOO_MANY_REQUESTS {
                        // The venue is pushing back; shrink our own bucket so
                        // the rest of the run stays under its allowance.
                        let mut limiter = self.rate_limiter.write().await;
                        limiter.throttle(descriptor.category);
                        last_status = Some(status);
                    } else if status.is_server_error() {
                        last_status = Some(status);
                    } else {
                        let message = remote_error_message(response).await;
                        error!(
                            "{} {} rejected with status {}: {}",
                            descriptor.method, descriptor.path, status, message
                        );
                        return Err(AppError::Rejected { status, message });
                    }
                }
                Err(e) if e.is_timeout() || e.is_connect() => {
                    warn!("{} {} failed to reach the API: {e}", descriptor.method, descriptor.path);
                }
                Err(e) => return Err(AppError::Http(e)),
            }

            match schedule.record_failure() {
                Some(delay) => {
                    warn!(
                        "transient failure on {} {} (attempt {}), retrying in {:?}",
                        descriptor.method,
                        descriptor.path,
                        schedule.attempts(),
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                None => {
                    error!(
                        "{} {} still failing after {} attempts",
                        descriptor.method,
                        descriptor.path,
                        schedule.attempts()
                    );
                    return Err(AppError::TransientExhausted {
                        last_status,
                        attempts: schedule.attempts(),
                    });
                }
            }
        }
    }
}

#[async_trait]
impl T212HttpClient for T212HttpClientImpl {
    async fn execute<T: DeserializeOwned + Send>(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<T, AppError> {
        let text = self.execute_raw(descriptor).await?;
        serde_json::from_str::<T>(&text).map_err(|e| {
            AppError::Deserialization(format!(
                "{} {} returned an unexpected body: {e}",
                descriptor.method, descriptor.path
            ))
        })
    }

    async fn execute_empty(&self, descriptor: &RequestDescriptor) -> Result<(), AppError> {
        self.execute_raw(descriptor).await.map(|_| ())
    }
}

/// Extracts a human-readable message from a remote error body.
///
/// The API reports errors as `{"errorMessage": ...}` or
/// `{"clarification": ...}` depending on the endpoint; anything else falls
/// back to the raw body.
async fn remote_error_message(response: Response) -> String {
    let text = response.text().await.unwrap_or_default();
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
        for key in ["errorMessage", "clarification", "message"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }
    if text.is_empty() {
        "<empty body>".to_string()
    } else {
        text
    }
}
