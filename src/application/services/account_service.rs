use crate::application::services::AccountService;
use crate::{
    config::Config,
    error::AppError,
    model::requests::{EndpointCategory, RequestDescriptor},
    presentation::account::{AccountInfo, Cash, Dividend, Paginated},
    transport::http_client::T212HttpClient,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the account service
pub struct AccountServiceImpl<T: T212HttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: T212HttpClient> AccountServiceImpl<T> {
    /// Creates a new instance of the account service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    ///
    /// # Returns
    /// * The current configuration as an `Arc<Config>`
    pub fn get_config(&self) -> Arc<Config> {
        self.config.clone()
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
impl<T: T212HttpClient + 'static> AccountService for AccountServiceImpl<T> {
    async fn get_account_info(&self) -> Result<AccountInfo, AppError> {
        info!("Getting account information");

        let descriptor = RequestDescriptor::get(EndpointCategory::Account, "equity/account/info");
        let result: AccountInfo = self.client.execute(&descriptor).await?;

        debug!("Account {} denominated in {}", result.id, result.currency_code);
        Ok(result)
    }

    async fn get_cash(&self) -> Result<Cash, AppError> {
        debug!("Getting account cash");

        let descriptor = RequestDescriptor::get(EndpointCategory::Account, "equity/account/cash");
        let result: Cash = self.client.execute(&descriptor).await?;

        debug!("Cash obtained: {} free of {} total", result.free, result.total);
        Ok(result)
    }

    async fn get_paid_dividends(&self) -> Result<Paginated<Dividend>, AppError> {
        info!("Getting paid dividends");

        let descriptor = RequestDescriptor::get(EndpointCategory::History, "history/dividends");
        let result: Paginated<Dividend> = self.client.execute(&descriptor).await?;

        debug!("Dividends obtained: {} payouts", result.items.len());
        Ok(result)
    }
}
