use crate::error::AppError;
use crate::presentation::instrument::{Exchange, Instrument};

use async_trait::async_trait;

#[async_trait]
/// Service for instrument and exchange metadata
pub trait MarketService: Send + Sync {
    /// Gets the full metadata of every tradable instrument.
    ///
    /// This is a very large response; prefer
    /// [`get_instrument_tickers`](Self::get_instrument_tickers) when only the
    /// symbols are needed.
    async fn get_instruments(&self) -> Result<Vec<Instrument>, AppError>;

    /// Gets every exchange with its working schedules
    async fn get_exchanges(&self) -> Result<Vec<Exchange>, AppError>;

    /// Gets only the ticker symbols of every tradable instrument
    async fn get_instrument_tickers(&self) -> Result<Vec<String>, AppError> {
        Ok(self
            .get_instruments()
            .await?
            .into_iter()
            .map(|instrument| instrument.ticker)
            .collect())
    }
}
