use crate::application::services::PortfolioService;
use crate::{
    config::Config,
    error::AppError,
    model::requests::{EndpointCategory, RequestDescriptor},
    presentation::account::{Portfolio, Position},
    transport::http_client::T212HttpClient,
};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the portfolio service
pub struct PortfolioServiceImpl<T: T212HttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: T212HttpClient> PortfolioServiceImpl<T> {
    /// Creates a new instance of the portfolio service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<T: T212HttpClient + 'static> PortfolioService for PortfolioServiceImpl<T> {
    async fn get_portfolio(&self) -> Result<Portfolio, AppError> {
        info!("Getting open positions");

        let descriptor =
            RequestDescriptor::list_or_entry(EndpointCategory::Portfolio, "equity/portfolio", None);
        let positions: Vec<Position> = self.client.execute(&descriptor).await?;

        debug!("Portfolio obtained: {} positions", positions.len());
        Ok(Portfolio::from(positions))
    }

    async fn get_position(&self, ticker: &str) -> Result<Position, AppError> {
        info!("Getting position: {}", ticker);

        let descriptor = RequestDescriptor::list_or_entry(
            EndpointCategory::Portfolio,
            "equity/portfolio",
            Some(ticker),
        );
        let result: Position = self.client.execute(&descriptor).await?;

        debug!("Position obtained for: {}", ticker);
        Ok(result)
    }

    async fn search_position(&self, ticker: &str) -> Result<Position, AppError> {
        info!("Searching position: {}", ticker);

        let descriptor = RequestDescriptor::post(
            EndpointCategory::Portfolio,
            "equity/portfolio/ticker",
            json!({ "ticker": ticker }),
        );
        let result: Position = self.client.execute(&descriptor).await?;

        debug!("Position found for: {}", ticker);
        Ok(result)
    }
}
