use crate::application::services::MarketService;
use crate::{
    config::Config,
    error::AppError,
    model::requests::{EndpointCategory, RequestDescriptor},
    presentation::instrument::{Exchange, Instrument},
    transport::http_client::T212HttpClient,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the market metadata service
pub struct MarketServiceImpl<T: T212HttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: T212HttpClient> MarketServiceImpl<T> {
    /// Creates a new instance of the market metadata service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    ///
    /// # Returns
    /// * Reference to the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }

    /// Sets a new configuration
    ///
    /// # Arguments
    /// * `config` - The new configuration to use
    pub fn set_config(&mut self, config: Arc<Config>) {
        self.config = config;
    }
}

#[async_trait]
impl<T: T212HttpClient + 'static> MarketService for MarketServiceImpl<T> {
    async fn get_instruments(&self) -> Result<Vec<Instrument>, AppError> {
        info!("Getting instrument metadata");

        let descriptor =
            RequestDescriptor::get(EndpointCategory::Metadata, "equity/metadata/instruments");
        let result: Vec<Instrument> = self.client.execute(&descriptor).await?;

        debug!("{} instruments found", result.len());
        Ok(result)
    }

    async fn get_exchanges(&self) -> Result<Vec<Exchange>, AppError> {
        info!("Getting exchanges");

        let descriptor =
            RequestDescriptor::get(EndpointCategory::Metadata, "equity/metadata/exchanges");
        let result: Vec<Exchange> = self.client.execute(&descriptor).await?;

        debug!("{} exchanges found", result.len());
        Ok(result)
    }
}
