/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/11/25
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Classification of a tradable instrument
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstrumentType {
    /// Common stock
    #[default]
    Stock,
    /// Exchange traded fund
    Etf,
}

/// Metadata for one tradable instrument
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Instrument {
    /// Unique ticker (e.g. `AAPL_US_EQ`)
    pub ticker: String,
    /// Full instrument name
    pub name: String,
    /// Abbreviated name
    #[serde(rename = "shortName")]
    pub short_name: Option<String>,
    /// Currency prices are quoted in; `GBX` means pence
    #[serde(rename = "currencyCode")]
    pub currency_code: String,
    /// International securities identification number
    pub isin: Option<String>,
    /// Instrument classification
    #[serde(rename = "type")]
    pub instrument_type: InstrumentType,
    /// Maximum open position size allowed
    #[serde(rename = "maxOpenQuantity")]
    pub max_open_quantity: Option<f64>,
    /// Minimum tradable quantity
    #[serde(rename = "minTradeQuantity")]
    pub min_trade_quantity: Option<f64>,
    /// When the instrument was listed on the platform
    #[serde(rename = "addedOn")]
    pub added_on: Option<String>,
    /// Identifier of the working schedule governing its trading hours
    #[serde(rename = "workingScheduleId")]
    pub working_schedule_id: Option<i64>,
}

/// A scheduled open/close event in an exchange working schedule
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TimeEvent {
    /// When the event happens
    pub date: String,
    /// Event kind (OPEN, CLOSE, PRE_MARKET_OPEN, ...)
    #[serde(rename = "type")]
    pub event_type: String,
}

/// Trading-hours schedule of an exchange
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct WorkingSchedule {
    /// Schedule identifier
    pub id: i64,
    /// Open/close events in chronological order
    #[serde(rename = "timeEvents", default)]
    pub time_events: Vec<TimeEvent>,
}

/// A trading exchange and its schedules
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Exchange {
    /// Exchange identifier
    pub id: i64,
    /// Exchange name
    pub name: String,
    /// Working schedules attached to the exchange
    #[serde(rename = "workingSchedules", default)]
    pub working_schedules: Vec<WorkingSchedule>,
}
