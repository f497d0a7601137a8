use crate::error::AppError;
use crate::presentation::account::{Portfolio, Position};

use async_trait::async_trait;

#[async_trait]
/// Service for reading the open positions held in the account
pub trait PortfolioService: Send + Sync {
    /// Gets all open positions
    async fn get_portfolio(&self) -> Result<Portfolio, AppError>;

    /// Gets the position held for one ticker.
    ///
    /// Only works for currently held positions; the venue answers 404 for
    /// anything else, which surfaces as [`AppError::Rejected`].
    async fn get_position(&self, ticker: &str) -> Result<Position, AppError>;

    /// Searches the portfolio for a position by ticker.
    ///
    /// Same lookup as [`get_position`](Self::get_position) through the
    /// search-style endpoint, which the venue currently answers with 404.
    async fn search_position(&self, ticker: &str) -> Result<Position, AppError>;
}
