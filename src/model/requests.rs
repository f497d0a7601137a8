/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/11/25
******************************************************************************/
use crate::error::AppError;
use crate::presentation::order::TimeValidity;
use crate::presentation::pie::DividendCashAction;
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::Method;
use serde_json::{Value, json};
use std::collections::HashMap;

/// Rate limit category of an endpoint.
///
/// The remote API enforces separate quotas per endpoint group; every
/// descriptor names its group so the gateway can draw a token from the
/// matching bucket before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointCategory {
    /// Account metadata and cash endpoints
    Account,
    /// Portfolio read endpoints
    Portfolio,
    /// Order read endpoints
    Orders,
    /// Order placement and cancellation
    Trading,
    /// Pie read and mutation endpoints
    Pies,
    /// Instrument and exchange metadata
    Metadata,
    /// Historical data (dividends)
    History,
}

impl EndpointCategory {
    /// All categories, in declaration order
    pub const ALL: [EndpointCategory; 7] = [
        EndpointCategory::Account,
        EndpointCategory::Portfolio,
        EndpointCategory::Orders,
        EndpointCategory::Trading,
        EndpointCategory::Pies,
        EndpointCategory::Metadata,
        EndpointCategory::History,
    ];
}

impl std::fmt::Display for EndpointCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EndpointCategory::Account => "account",
            EndpointCategory::Portfolio => "portfolio",
            EndpointCategory::Orders => "orders",
            EndpointCategory::Trading => "trading",
            EndpointCategory::Pies => "pies",
            EndpointCategory::Metadata => "metadata",
            EndpointCategory::History => "history",
        };
        write!(f, "{name}")
    }
}

/// Canonical, pre-validated representation of one outgoing HTTP request.
///
/// Descriptors are produced by the request builders (or directly for read
/// operations) and executed by the gateway transport. Building a descriptor
/// performs no I/O.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// HTTP method
    pub method: Method,
    /// Path relative to the configured base URL
    pub path: String,
    /// JSON body, present only for mutations
    pub body: Option<Value>,
    /// Rate limit bucket this request draws from
    pub category: EndpointCategory,
}

impl RequestDescriptor {
    /// Descriptor for a GET request without a body
    pub fn get(category: EndpointCategory, path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: None,
            category,
        }
    }

    /// Descriptor for a POST request carrying a JSON body
    pub fn post(category: EndpointCategory, path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: Some(body),
            category,
        }
    }

    /// Descriptor for a DELETE request
    pub fn delete(category: EndpointCategory, path: impl Into<String>) -> Self {
        Self {
            method: Method::DELETE,
            path: path.into(),
            body: None,
            category,
        }
    }

    /// Read descriptor for a collection or one of its entries.
    ///
    /// With an identifier the path addresses the single resource, without one
    /// it addresses the whole collection.
    pub fn list_or_entry(category: EndpointCategory, base: &str, id: Option<&str>) -> Self {
        match id {
            Some(id) => Self::get(category, format!("{base}/{id}")),
            None => Self::get(category, base),
        }
    }
}

/// Model for creating a new order.
///
/// Each order kind is a separate variant so that a kind can only carry the
/// fields the remote API accepts for it; the serialized body contains exactly
/// those fields. The API treats the presence of a field that does not belong
/// to the kind as a request-shape error, so irrelevant fields are omitted
/// rather than sent as null.
///
/// Quantity is a signed fractional share count: positive buys, negative
/// sells.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOrderRequest {
    /// Market order, executed immediately at the current market price
    Market {
        /// Instrument ticker (e.g. `AAPL_US_EQ`)
        ticker: String,
        /// Signed fractional share count
        quantity: f64,
        /// Whether the order may execute outside regular market hours
        extended_hours: bool,
    },
    /// Limit order, executed only at the limit price or better
    Limit {
        /// Instrument ticker
        ticker: String,
        /// Signed fractional share count
        quantity: f64,
        /// Maximum price for buys, minimum for sells
        limit_price: f64,
        /// How long the order remains valid
        time_validity: TimeValidity,
    },
    /// Stop order, becomes a market order once the stop price trades
    Stop {
        /// Instrument ticker
        ticker: String,
        /// Signed fractional share count
        quantity: f64,
        /// Trigger price
        stop_price: f64,
        /// How long the order remains valid
        time_validity: TimeValidity,
    },
    /// Stop-limit order, becomes a limit order once the stop price trades
    StopLimit {
        /// Instrument ticker
        ticker: String,
        /// Signed fractional share count
        quantity: f64,
        /// Trigger price
        stop_price: f64,
        /// Limit price applied after the trigger
        limit_price: f64,
        /// How long the order remains valid
        time_validity: TimeValidity,
    },
}

impl CreateOrderRequest {
    /// Creates a new market order
    pub fn market(ticker: impl Into<String>, quantity: f64, extended_hours: bool) -> Self {
        Self::Market {
            ticker: ticker.into(),
            quantity,
            extended_hours,
        }
    }

    /// Creates a new limit order
    pub fn limit(
        ticker: impl Into<String>,
        quantity: f64,
        limit_price: f64,
        time_validity: TimeValidity,
    ) -> Self {
        Self::Limit {
            ticker: ticker.into(),
            quantity,
            limit_price,
            time_validity,
        }
    }

    /// Creates a new stop order
    pub fn stop(
        ticker: impl Into<String>,
        quantity: f64,
        stop_price: f64,
        time_validity: TimeValidity,
    ) -> Self {
        Self::Stop {
            ticker: ticker.into(),
            quantity,
            stop_price,
            time_validity,
        }
    }

    /// Creates a new stop-limit order
    pub fn stop_limit(
        ticker: impl Into<String>,
        quantity: f64,
        stop_price: f64,
        limit_price: f64,
        time_validity: TimeValidity,
    ) -> Self {
        Self::StopLimit {
            ticker: ticker.into(),
            quantity,
            stop_price,
            limit_price,
            time_validity,
        }
    }

    /// The instrument ticker of the order
    #[must_use]
    pub fn ticker(&self) -> &str {
        match self {
            Self::Market { ticker, .. }
            | Self::Limit { ticker, .. }
            | Self::Stop { ticker, .. }
            | Self::StopLimit { ticker, .. } => ticker,
        }
    }

    /// The signed quantity of the order
    #[must_use]
    pub fn quantity(&self) -> f64 {
        match self {
            Self::Market { quantity, .. }
            | Self::Limit { quantity, .. }
            | Self::Stop { quantity, .. }
            | Self::StopLimit { quantity, .. } => *quantity,
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        validate_ticker(self.ticker())?;
        validate_quantity(self.quantity())?;
        match self {
            Self::Market { .. } => Ok(()),
            Self::Limit { limit_price, .. } => validate_price("limitPrice", *limit_price),
            Self::Stop { stop_price, .. } => validate_price("stopPrice", *stop_price),
            Self::StopLimit {
                stop_price,
                limit_price,
                ..
            } => {
                validate_price("stopPrice", *stop_price)?;
                validate_price("limitPrice", *limit_price)
            }
        }
    }

    /// Validates the order and produces the descriptor for placing it.
    ///
    /// The body carries exactly the fields of the order kind; the path
    /// selects the kind-specific placement endpoint.
    pub fn descriptor(&self) -> Result<RequestDescriptor, AppError> {
        self.validate()?;
        let (path, body) = match self {
            Self::Market {
                ticker,
                quantity,
                extended_hours,
            } => (
                "equity/orders/market",
                json!({
                    "quantity": quantity,
                    "ticker": ticker,
                    "extendedHours": extended_hours,
                }),
            ),
            Self::Limit {
                ticker,
                quantity,
                limit_price,
                time_validity,
            } => (
                "equity/orders/limit",
                json!({
                    "limitPrice": limit_price,
                    "quantity": quantity,
                    "ticker": ticker,
                    "timeValidity": time_validity,
                }),
            ),
            Self::Stop {
                ticker,
                quantity,
                stop_price,
                time_validity,
            } => (
                "equity/orders/stop",
                json!({
                    "stopPrice": stop_price,
                    "quantity": quantity,
                    "ticker": ticker,
                    "timeValidity": time_validity,
                }),
            ),
            Self::StopLimit {
                ticker,
                quantity,
                stop_price,
                limit_price,
                time_validity,
            } => (
                "equity/orders/stop-limit",
                json!({
                    "stopPrice": stop_price,
                    "limitPrice": limit_price,
                    "quantity": quantity,
                    "ticker": ticker,
                    "timeValidity": time_validity,
                }),
            ),
        };
        Ok(RequestDescriptor::post(
            EndpointCategory::Trading,
            path,
            body,
        ))
    }
}

/// Model for creating or updating a pie.
///
/// Share weights are forwarded as given; normalization to a total of 1 is the
/// remote service's responsibility.
#[derive(Debug, Clone, PartialEq)]
pub struct PieRequest {
    /// Pie name
    pub name: String,
    /// Where dividends paid into the pie go
    pub dividend_destination: DividendCashAction,
    /// Target share weight per instrument ticker
    pub instrument_shares: HashMap<String, f64>,
    /// Optional target completion date, RFC 3339 or naive `YYYY-MM-DDTHH:MM:SS`
    pub end_date: Option<String>,
    /// Optional monetary goal for the pie
    pub goal: Option<f64>,
}

impl PieRequest {
    /// Creates a new pie request with the required fields
    pub fn new(
        name: impl Into<String>,
        dividend_destination: DividendCashAction,
        instrument_shares: HashMap<String, f64>,
    ) -> Self {
        Self {
            name: name.into(),
            dividend_destination,
            instrument_shares,
            end_date: None,
            goal: None,
        }
    }

    /// Sets the target completion date
    pub fn with_end_date(mut self, end_date: impl Into<String>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }

    /// Sets the monetary goal
    pub fn with_goal(mut self, goal: f64) -> Self {
        self.goal = Some(goal);
        self
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("name", "must not be empty"));
        }
        if self.instrument_shares.is_empty() {
            return Err(AppError::validation(
                "instrumentShares",
                "must contain at least one instrument",
            ));
        }
        for (ticker, weight) in &self.instrument_shares {
            if ticker.trim().is_empty() {
                return Err(AppError::validation(
                    "instrumentShares",
                    "ticker must not be empty",
                ));
            }
            if !weight.is_finite() || *weight <= 0.0 {
                return Err(AppError::validation(
                    "instrumentShares",
                    format!("share weight for {ticker} must be a positive number, got {weight}"),
                ));
            }
        }
        if let Some(goal) = self.goal {
            if !goal.is_finite() || goal <= 0.0 {
                return Err(AppError::validation(
                    "goal",
                    format!("must be a positive number, got {goal}"),
                ));
            }
        }
        if let Some(raw) = &self.end_date {
            parse_end_date(raw)?;
        }
        Ok(())
    }

    fn body(&self) -> Result<Value, AppError> {
        let end_date = match &self.end_date {
            Some(raw) => Some(parse_end_date(raw)?),
            None => None,
        };
        Ok(json!({
            "name": self.name,
            "goal": self.goal,
            "endDate": end_date.map(|d| d.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)),
            "dividendCashAction": self.dividend_destination,
            "instrumentShares": self.instrument_shares,
        }))
    }

    /// Validates the pie and produces the descriptor for creating it
    pub fn create_descriptor(&self) -> Result<RequestDescriptor, AppError> {
        self.validate()?;
        Ok(RequestDescriptor::post(
            EndpointCategory::Pies,
            "equity/pies",
            self.body()?,
        ))
    }

    /// Validates the pie and produces the descriptor for updating an existing pie
    pub fn update_descriptor(&self, pie_id: i64) -> Result<RequestDescriptor, AppError> {
        self.validate()?;
        Ok(RequestDescriptor::post(
            EndpointCategory::Pies,
            format!("equity/pies/{pie_id}"),
            self.body()?,
        ))
    }
}

fn validate_ticker(ticker: &str) -> Result<(), AppError> {
    if ticker.trim().is_empty() {
        return Err(AppError::validation("ticker", "must not be empty"));
    }
    Ok(())
}

fn validate_quantity(quantity: f64) -> Result<(), AppError> {
    if !quantity.is_finite() {
        return Err(AppError::validation(
            "quantity",
            format!("must be a finite number, got {quantity}"),
        ));
    }
    // Sign encodes direction (positive buys, negative sells); only a
    // zero-magnitude order is meaningless.
    if quantity == 0.0 {
        return Err(AppError::validation("quantity", "must not be zero"));
    }
    Ok(())
}

fn validate_price(field: &'static str, price: f64) -> Result<(), AppError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::Validation {
            field,
            reason: format!("must be a positive price, got {price}"),
        });
    }
    Ok(())
}

fn parse_end_date(raw: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date.with_timezone(&Utc));
    }
    // The API also accepts naive datetimes, which are taken as UTC
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }
    Err(AppError::validation(
        "endDate",
        format!("not a valid RFC 3339 or YYYY-MM-DDTHH:MM:SS datetime: {raw}"),
    ))
}
