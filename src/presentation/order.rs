/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/11/25
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Order type
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Market order - executed immediately at current market price
    #[default]
    Market,
    /// Limit order - executed when price reaches specified level
    Limit,
    /// Stop order - becomes market order when price reaches specified level
    Stop,
    /// Stop limit order - becomes limit order when price reaches specified level
    #[serde(rename = "STOP_LIMIT")]
    StopLimit,
}

/// Order duration (time validity)
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub enum TimeValidity {
    /// Order expires at the end of the trading day
    #[serde(rename = "DAY")]
    #[default]
    Day,
    /// Order remains valid until cancelled by the client
    #[serde(rename = "GOOD_TILL_CANCEL")]
    GoodTillCancel,
}

/// Lifecycle status of an order as reported by the remote API
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order exists locally but has not been submitted yet
    Local,
    /// Order submitted, not yet acknowledged by the venue
    Unconfirmed,
    /// Order acknowledged by the venue
    Confirmed,
    /// Order accepted and resting on the book
    #[default]
    New,
    /// Cancellation requested, not yet final
    Cancelling,
    /// Order cancelled
    Cancelled,
    /// Order partially filled
    PartiallyFilled,
    /// Order completely filled
    Filled,
    /// Order rejected by the venue
    Rejected,
    /// Replacement requested, not yet final
    Replacing,
    /// Order replaced by a newer one
    Replaced,
}

/// An order as returned by the order endpoints
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier
    pub id: i64,
    /// Instrument ticker
    pub ticker: String,
    /// Signed quantity the order was placed for
    pub quantity: Option<f64>,
    /// Order kind
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Current lifecycle status
    pub status: OrderStatus,
    /// Limit price, present for limit and stop-limit orders
    #[serde(rename = "limitPrice", skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<f64>,
    /// Stop price, present for stop and stop-limit orders
    #[serde(rename = "stopPrice", skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<f64>,
    /// How long the order remains valid
    #[serde(rename = "timeValidity", skip_serializing_if = "Option::is_none")]
    pub time_validity: Option<TimeValidity>,
    /// When the order was created
    #[serde(rename = "creationTime")]
    pub creation_time: Option<String>,
    /// Quantity filled so far
    #[serde(rename = "filledQuantity")]
    pub filled_quantity: Option<f64>,
    /// Value filled so far, in account currency
    #[serde(rename = "filledValue")]
    pub filled_value: Option<f64>,
    /// Monetary value of the order, for value-based orders
    pub value: Option<f64>,
    /// Execution strategy reported by the venue
    pub strategy: Option<String>,
}
