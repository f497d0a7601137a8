use crate::application::services::OrderService;
use crate::{
    config::Config,
    error::AppError,
    model::requests::{CreateOrderRequest, EndpointCategory, RequestDescriptor},
    presentation::order::Order,
    transport::http_client::T212HttpClient,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the order service
pub struct OrderServiceImpl<T: T212HttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: T212HttpClient> OrderServiceImpl<T> {
    /// Creates a new instance of the order service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<T: T212HttpClient + 'static> OrderService for OrderServiceImpl<T> {
    async fn get_orders(&self) -> Result<Vec<Order>, AppError> {
        info!("Getting orders");

        let descriptor =
            RequestDescriptor::list_or_entry(EndpointCategory::Orders, "equity/orders", None);
        let result: Vec<Order> = self.client.execute(&descriptor).await?;

        debug!("{} orders found", result.len());
        Ok(result)
    }

    async fn get_order(&self, order_id: i64) -> Result<Order, AppError> {
        info!("Getting order: {}", order_id);

        let descriptor = RequestDescriptor::list_or_entry(
            EndpointCategory::Orders,
            "equity/orders",
            Some(&order_id.to_string()),
        );
        let result: Order = self.client.execute(&descriptor).await?;

        debug!("Order {} is {}", order_id, result.status);
        Ok(result)
    }

    async fn place_order(&self, order: &CreateOrderRequest) -> Result<Order, AppError> {
        // Validation happens here, before any token is drawn
        let descriptor = order.descriptor()?;
        info!(
            "Placing order: {} {} via {}",
            order.ticker(),
            order.quantity(),
            descriptor.path
        );

        let result: Order = self.client.execute(&descriptor).await?;

        info!("Order placed: id {} status {}", result.id, result.status);
        Ok(result)
    }

    async fn cancel_order(&self, order_id: i64) -> Result<(), AppError> {
        info!("Cancelling order: {}", order_id);

        let descriptor = RequestDescriptor::delete(
            EndpointCategory::Trading,
            format!("equity/orders/{order_id}"),
        );
        self.client.execute_empty(&descriptor).await?;

        debug!("Order {} cancelled", order_id);
        Ok(())
    }
}
