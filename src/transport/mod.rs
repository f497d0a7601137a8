/// HTTP client module with authentication, rate limiting and retry
pub mod http_client;

pub use http_client::*;
