/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/11/25
******************************************************************************/

//! # Trading212 Client
//!
//! Async client for the Trading212 equity API: account metadata, cash,
//! portfolio positions, orders, pies, instrument/exchange metadata and
//! dividend history.
//!
//! The crate is built around two pieces:
//!
//! - **Request builders** ([`model::requests`]) that validate domain input
//!   (order kinds, pie allocations) and produce canonical request
//!   descriptors. All validation happens before any network I/O.
//! - **A gateway transport** ([`transport::http_client`]) that executes
//!   descriptors with Basic-auth credentials, per-endpoint-category token
//!   bucket rate limiting, bounded timeouts and bounded retry with
//!   exponential backoff, mapping every failure to a typed
//!   [`error::AppError`].
//!
//! Services ([`application::services`]) wrap the transport with one method
//! per API operation, behind the traits in [`application::interfaces`].
//!
//! ## Usage
//!
//! ```no_run
//! use t212_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     // Requires T212_API_KEY_ID, T212_API_KEY_SECRET and T212_BASE_URL
//!     let client = T212Client::from_env()?;
//!
//!     let cash = client.account().get_cash().await?;
//!     println!("free cash: {}", cash.free);
//!
//!     let order = client
//!         .orders()
//!         .place_limit_order("AAPL_US_EQ", 0.5, 180.0, TimeValidity::GoodTillCancel)
//!         .await?;
//!     println!("order {} is {}", order.id, order.status);
//!     Ok(())
//! }
//! ```
//!
//! ## Retries and duplicate writes
//!
//! Transient failures (timeouts, 5xx, 429) are retried up to three attempts
//! with exponential backoff. The API has no client-supplied deduplication
//! key, so a retried write whose earlier attempt actually reached the venue
//! may execute twice; treat [`error::AppError::TransientExhausted`] from a
//! mutation as an unknown outcome and reconcile through the read endpoints.

/// Client facade, rate limiter, service traits and implementations
pub mod application;
/// Environment-driven configuration
pub mod config;
/// Crate-wide constants and defaults
pub mod constants;
/// Error types
pub mod error;
/// Request builders and retry policy
pub mod model;
/// Commonly used types, re-exported
pub mod prelude;
/// Wire models for API responses
pub mod presentation;
/// Authenticated, rate-limited HTTP transport
pub mod transport;
/// Environment and logging utilities
pub mod utils;

/// Library version, taken from the crate manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
