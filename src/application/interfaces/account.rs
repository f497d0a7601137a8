use crate::error::AppError;
use crate::presentation::account::{AccountInfo, Cash, Dividend, Paginated};

use async_trait::async_trait;

#[async_trait]
/// Service for retrieving account metadata, cash balances and dividend
/// history from the Trading212 API
pub trait AccountService: Send + Sync {
    /// Gets the account id and primary currency code
    async fn get_account_info(&self) -> Result<AccountInfo, AppError>;

    /// Gets the account cash breakdown (free, invested, total, ...)
    async fn get_cash(&self) -> Result<Cash, AppError>;

    /// Gets the dividends paid out to the account
    async fn get_paid_dividends(&self) -> Result<Paginated<Dividend>, AppError>;
}
