/// Module containing account service for account metadata, cash and dividends
pub mod account_service;
/// Module containing service interfaces and traits
pub use crate::application::interfaces;
/// Module containing market service for instrument and exchange metadata
pub mod market_service;
/// Module containing order service for creating and managing orders
pub mod order_service;
/// Module containing pie service for managing investment pies
pub mod pie_service;
/// Module containing portfolio service for reading open positions
pub mod portfolio_service;

pub use crate::application::interfaces::account::*;
pub use crate::application::interfaces::market::*;
pub use crate::application::interfaces::order::*;
pub use crate::application::interfaces::pie::*;
pub use crate::application::interfaces::portfolio::*;
pub use account_service::*;
pub use market_service::*;
pub use order_service::*;
pub use pie_service::*;
pub use portfolio_service::*;
