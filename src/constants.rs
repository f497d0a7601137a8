/// User agent string used in HTTP requests to identify this client to the Trading212 API
pub const USER_AGENT: &str = "Rust-T212-Client/0.3.1";
/// Default timeout in seconds for REST API requests (connect + read)
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
/// Maximum number of dispatch attempts for a single logical call
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
/// Base backoff delay in milliseconds before the first retry
pub const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 500;
/// Upper bound in milliseconds for a single backoff delay
pub const DEFAULT_RETRY_MAX_DELAY_MS: u64 = 5_000;
/// Default number of requests allowed per period for endpoint categories
/// without a more specific quota
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 30;
/// Default rate limit period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 60;
/// Default burst size for the rate limiter buckets
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 5;
/// Poll interval in milliseconds while waiting for a rate limit token
pub const RATE_LIMIT_POLL_MS: u64 = 10;
