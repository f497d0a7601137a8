/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/11/25
******************************************************************************/
use crate::application::services::{
    AccountServiceImpl, MarketServiceImpl, OrderServiceImpl, PieServiceImpl, PortfolioServiceImpl,
};
use crate::config::Config;
use crate::error::AppError;
use crate::transport::http_client::T212HttpClientImpl;
use std::sync::Arc;

/// Facade bundling every service over one shared transport.
///
/// All services share the same HTTP client, credentials and rate limit
/// state, so concurrent calls through different services still draw from the
/// same per-category token buckets.
pub struct T212Client {
    config: Arc<Config>,
    transport: Arc<T212HttpClientImpl>,
    account: AccountServiceImpl<T212HttpClientImpl>,
    portfolio: PortfolioServiceImpl<T212HttpClientImpl>,
    markets: MarketServiceImpl<T212HttpClientImpl>,
    orders: OrderServiceImpl<T212HttpClientImpl>,
    pies: PieServiceImpl<T212HttpClientImpl>,
}

impl T212Client {
    /// Creates a client from an explicit configuration
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let transport = Arc::new(T212HttpClientImpl::new(config.clone())?);
        Ok(Self {
            account: AccountServiceImpl::new(config.clone(), transport.clone()),
            portfolio: PortfolioServiceImpl::new(config.clone(), transport.clone()),
            markets: MarketServiceImpl::new(config.clone(), transport.clone()),
            orders: OrderServiceImpl::new(config.clone(), transport.clone()),
            pies: PieServiceImpl::new(config.clone(), transport.clone()),
            config,
            transport,
        })
    }

    /// Creates a client from the environment.
    ///
    /// Fails fast with [`AppError::Config`] when the credentials or base URL
    /// are missing; no call can be made without them.
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::from_env()?)
    }

    /// The configuration this client was built with
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The shared transport
    #[must_use]
    pub fn transport(&self) -> Arc<T212HttpClientImpl> {
        self.transport.clone()
    }

    /// Account metadata, cash and dividends
    #[must_use]
    pub fn account(&self) -> &AccountServiceImpl<T212HttpClientImpl> {
        &self.account
    }

    /// Open positions
    #[must_use]
    pub fn portfolio(&self) -> &PortfolioServiceImpl<T212HttpClientImpl> {
        &self.portfolio
    }

    /// Instrument and exchange metadata
    #[must_use]
    pub fn markets(&self) -> &MarketServiceImpl<T212HttpClientImpl> {
        &self.markets
    }

    /// Order placement and management
    #[must_use]
    pub fn orders(&self) -> &OrderServiceImpl<T212HttpClientImpl> {
        &self.orders
    }

    /// Pie management
    #[must_use]
    pub fn pies(&self) -> &PieServiceImpl<T212HttpClientImpl> {
        &self.pies
    }
}
