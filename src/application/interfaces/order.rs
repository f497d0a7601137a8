use crate::error::AppError;
use crate::model::requests::CreateOrderRequest;
use crate::presentation::order::{Order, TimeValidity};

use async_trait::async_trait;

#[async_trait]
/// Service for placing, inspecting and cancelling equity orders with the
/// Trading212 API
///
/// Placement goes through the retrying gateway transport: a placement whose
/// response was lost may have reached the venue and be submitted again on the
/// next attempt, since the API has no client-supplied deduplication key.
/// Treat a `TransientExhausted` outcome from any placement method as an
/// unknown outcome and reconcile against [`get_orders`](Self::get_orders).
pub trait OrderService: Send + Sync {
    /// Gets all orders, open and historical
    async fn get_orders(&self) -> Result<Vec<Order>, AppError>;

    /// Gets one order by its id
    async fn get_order(&self, order_id: i64) -> Result<Order, AppError>;

    /// Validates and places an order of any kind
    async fn place_order(&self, order: &CreateOrderRequest) -> Result<Order, AppError>;

    /// Cancels a pending order by its id
    async fn cancel_order(&self, order_id: i64) -> Result<(), AppError>;

    /// Places an order at the current market price
    async fn place_market_order(
        &self,
        ticker: &str,
        quantity: f64,
        extended_hours: bool,
    ) -> Result<Order, AppError> {
        self.place_order(&CreateOrderRequest::market(ticker, quantity, extended_hours))
            .await
    }

    /// Places an order that executes only at the limit price or better
    async fn place_limit_order(
        &self,
        ticker: &str,
        quantity: f64,
        limit_price: f64,
        time_validity: TimeValidity,
    ) -> Result<Order, AppError> {
        self.place_order(&CreateOrderRequest::limit(
            ticker,
            quantity,
            limit_price,
            time_validity,
        ))
        .await
    }

    /// Places a stop order that becomes a market order at the stop price
    async fn place_stop_order(
        &self,
        ticker: &str,
        quantity: f64,
        stop_price: f64,
        time_validity: TimeValidity,
    ) -> Result<Order, AppError> {
        self.place_order(&CreateOrderRequest::stop(
            ticker,
            quantity,
            stop_price,
            time_validity,
        ))
        .await
    }

    /// Places a stop-limit order that becomes a limit order at the stop price
    async fn place_stop_limit_order(
        &self,
        ticker: &str,
        quantity: f64,
        stop_price: f64,
        limit_price: f64,
        time_validity: TimeValidity,
    ) -> Result<Order, AppError> {
        self.place_order(&CreateOrderRequest::stop_limit(
            ticker,
            quantity,
            stop_price,
            limit_price,
            time_validity,
        ))
        .await
    }
}
