/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/11/25
******************************************************************************/

//! # Trading212 Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the crate. By importing this prelude, you get access
//! to all the essential components needed for most API interactions.
//!
//! ## Usage
//!
//! ```rust
//! use t212_client::prelude::*;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Trading212 API client
pub use crate::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND TRANSPORT
// ============================================================================

/// Facade bundling every service over one shared transport
pub use crate::application::client::T212Client;

/// Gateway transport trait and implementation
pub use crate::transport::http_client::{T212HttpClient, T212HttpClientImpl};

/// Rate limiter shared by all services of a client
pub use crate::application::rate_limiter::RateLimiter;

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

/// Account service trait for account metadata, cash and dividends
pub use crate::application::services::AccountService;

/// Portfolio service trait for open positions
pub use crate::application::services::PortfolioService;

/// Market service trait for instrument and exchange metadata
pub use crate::application::services::MarketService;

/// Order service trait for trading operations
pub use crate::application::services::OrderService;

/// Pie service trait for pie management
pub use crate::application::services::PieService;

// ============================================================================
// SERVICE IMPLEMENTATIONS
// ============================================================================

/// Account service implementation
pub use crate::application::services::account_service::AccountServiceImpl;

/// Portfolio service implementation
pub use crate::application::services::portfolio_service::PortfolioServiceImpl;

/// Market service implementation
pub use crate::application::services::market_service::MarketServiceImpl;

/// Order service implementation
pub use crate::application::services::order_service::OrderServiceImpl;

/// Pie service implementation
pub use crate::application::services::pie_service::PieServiceImpl;

// ============================================================================
// REQUEST BUILDING
// ============================================================================

/// Order request variants and pie requests
pub use crate::model::requests::{
    CreateOrderRequest, EndpointCategory, PieRequest, RequestDescriptor,
};

/// Retry policy
pub use crate::model::retry::{RetryConfig, RetrySchedule};

// ============================================================================
// WIRE MODELS
// ============================================================================

/// Account and cash models
pub use crate::presentation::account::{
    AccountInfo, Cash, Dividend, Paginated, Portfolio, Position,
};

/// Instrument and exchange models
pub use crate::presentation::instrument::{
    Exchange, Instrument, InstrumentType, TimeEvent, WorkingSchedule,
};

/// Order models
pub use crate::presentation::order::{Order, OrderStatus, OrderType, TimeValidity};

/// Pie models
pub use crate::presentation::pie::{
    DividendCashAction, DividendDetails, Pie, PieInstrument, PieResult, PieSettings, PieSummary,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;

/// Serialization support commonly needed alongside the models
pub use serde::{Deserialize, Serialize};
