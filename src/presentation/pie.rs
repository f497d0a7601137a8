/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/11/25
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Where dividends paid into a pie go
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DividendCashAction {
    /// Dividends accumulate as cash in the pie
    #[serde(rename = "CASH")]
    Cash,
    /// Dividends are reinvested according to the target weights
    #[serde(rename = "REINVEST")]
    #[default]
    Reinvest,
}

/// Dividend bookkeeping of a pie
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct DividendDetails {
    /// Total dividends received
    pub gained: Option<f64>,
    /// Dividends reinvested into the pie
    pub reinvested: Option<f64>,
    /// Dividends kept as cash
    #[serde(rename = "inCash")]
    pub in_cash: Option<f64>,
}

/// Valuation summary of a pie or pie instrument
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct PieResult {
    /// Invested value at average price
    #[serde(rename = "priceAvgInvestedValue")]
    pub price_avg_invested_value: Option<f64>,
    /// Profit or loss at average price
    #[serde(rename = "priceAvgResult")]
    pub price_avg_result: Option<f64>,
    /// Profit or loss coefficient at average price
    #[serde(rename = "priceAvgResultCoef")]
    pub price_avg_result_coef: Option<f64>,
    /// Current value at average price
    #[serde(rename = "priceAvgValue")]
    pub price_avg_value: Option<f64>,
}

/// One pie as returned by the pies list endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct PieSummary {
    /// Pie identifier
    pub id: i64,
    /// Cash currently held by the pie
    pub cash: Option<f64>,
    /// Dividend bookkeeping
    #[serde(rename = "dividendDetails")]
    pub dividend_details: Option<DividendDetails>,
    /// Progress towards the goal, 0..1
    pub progress: Option<f64>,
    /// Valuation summary
    pub result: Option<PieResult>,
    /// Pie status reported by the venue
    pub status: Option<String>,
}

/// Settings of a pie
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct PieSettings {
    /// Pie identifier
    pub id: i64,
    /// Pie name
    pub name: String,
    /// Where dividends go
    #[serde(rename = "dividendCashAction")]
    pub dividend_cash_action: DividendCashAction,
    /// Target completion date
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    /// Monetary goal
    pub goal: Option<f64>,
    /// Icon chosen for the pie
    pub icon: Option<String>,
    /// When the pie was created
    #[serde(rename = "creationDate")]
    pub creation_date: Option<f64>,
    /// Initial investment at creation
    #[serde(rename = "initialInvestment")]
    pub initial_investment: Option<f64>,
}

/// One instrument inside a pie
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct PieInstrument {
    /// Instrument ticker
    pub ticker: String,
    /// Target share of the pie
    #[serde(rename = "expectedShare")]
    pub expected_share: Option<f64>,
    /// Actual share of the pie at current prices
    #[serde(rename = "currentShare")]
    pub current_share: Option<f64>,
    /// Quantity of the instrument owned through the pie
    #[serde(rename = "ownedQuantity")]
    pub owned_quantity: Option<f64>,
    /// Valuation summary for this slice
    pub result: Option<PieResult>,
    /// Issues reported for this slice, if any
    #[serde(default)]
    pub issues: Vec<serde_json::Value>,
}

/// Detailed view of one pie
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Pie {
    /// Instruments and their allocations
    #[serde(default)]
    pub instruments: Vec<PieInstrument>,
    /// Pie settings
    pub settings: PieSettings,
}

/// Convenience alias for the share-weight mapping sent when creating a pie
pub type InstrumentShares = HashMap<String, f64>;
