/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/11/25
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Account metadata
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AccountInfo {
    /// Unique identifier for the account
    pub id: i64,
    /// Primary currency every monetary value is denominated in
    #[serde(rename = "currencyCode")]
    pub currency_code: String,
}

/// Account cash breakdown, all values in the account's primary currency
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Cash {
    /// Available cash for trading
    pub free: f64,
    /// Total portfolio value (cash + invested positions)
    pub total: f64,
    /// Total value currently invested in positions
    pub invested: f64,
    /// Total profit or loss
    pub result: f64,
    /// Unrealized profit or loss on open positions
    pub ppl: f64,
    /// Cash allocated to pies
    #[serde(rename = "pieCash")]
    pub pie_cash: f64,
    /// Cash blocked by pending operations
    pub blocked: Option<f64>,
}

/// One open portfolio position.
///
/// Prices are quoted in the instrument's native currency unit, which may be a
/// subunit (GBX for UK stocks); `ppl` is already converted to the account
/// currency.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Position {
    /// Instrument ticker (e.g. `AAPL_US_EQ`)
    pub ticker: String,
    /// Fractional number of shares held
    pub quantity: f64,
    /// Average purchase price in the instrument's native currency unit
    #[serde(rename = "averagePrice")]
    pub average_price: f64,
    /// Current market price in the instrument's native currency unit
    #[serde(rename = "currentPrice")]
    pub current_price: f64,
    /// Profit or loss in account currency
    pub ppl: f64,
    /// Foreign exchange profit or loss, if applicable
    #[serde(rename = "fxPpl")]
    pub fx_ppl: Option<f64>,
    /// Quantity held within pies
    #[serde(rename = "pieQuantity")]
    pub pie_quantity: Option<f64>,
    /// When the position was first opened
    #[serde(rename = "initialFillDate")]
    pub initial_fill_date: Option<String>,
    /// Where the position was opened (WEB, API, AUTOINVEST, ...)
    pub frontend: Option<String>,
    /// Maximum quantity that can currently be bought
    #[serde(rename = "maxBuy")]
    pub max_buy: Option<f64>,
    /// Maximum quantity that can currently be sold
    #[serde(rename = "maxSell")]
    pub max_sell: Option<f64>,
}

/// The full list of open positions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Portfolio {
    /// Open positions
    pub positions: Vec<Position>,
}

impl From<Vec<Position>> for Portfolio {
    fn from(positions: Vec<Position>) -> Self {
        Self { positions }
    }
}

impl std::fmt::Display for Portfolio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use prettytable::format;
        use prettytable::{Cell, Row, Table};

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.add_row(Row::new(vec![
            Cell::new("TICKER"),
            Cell::new("QUANTITY"),
            Cell::new("AVG PRICE"),
            Cell::new("PRICE"),
            Cell::new("P/L"),
        ]));

        let mut sorted = self.positions.clone();
        sorted.sort_by(|a, b| a.ticker.cmp(&b.ticker));

        for position in &sorted {
            table.add_row(Row::new(vec![
                Cell::new(&position.ticker),
                Cell::new(&format!("{:.4}", position.quantity)),
                Cell::new(&format!("{:.2}", position.average_price)),
                Cell::new(&format!("{:.2}", position.current_price)),
                Cell::new(&format!("{:.2}", position.ppl)),
            ]));
        }

        write!(f, "{table}")
    }
}

/// One dividend payout credited to the account
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Dividend {
    /// Instrument that paid the dividend
    pub ticker: String,
    /// Payout reference
    pub reference: Option<String>,
    /// Fractional number of shares that received the dividend
    pub quantity: f64,
    /// Dividend amount in account currency
    pub amount: f64,
    /// Pre-tax dividend per share
    #[serde(rename = "grossAmountPerShare")]
    pub gross_amount_per_share: Option<f64>,
    /// Payment date
    #[serde(rename = "paidOn")]
    pub paid_on: Option<String>,
    /// Payout type as reported by the venue
    #[serde(rename = "type")]
    pub dividend_type: Option<String>,
}

/// Paginated envelope used by the history endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Path of the next page, absent on the last one
    #[serde(rename = "nextPagePath", skip_serializing_if = "Option::is_none")]
    pub next_page_path: Option<String>,
}
