/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/11/25
******************************************************************************/

//! Rate limiter module for controlling API request rates
//!
//! This module provides rate limiting functionality using the `governor`
//! crate. The remote API enforces separate quotas per endpoint group, so the
//! limiter keeps one token bucket per [`EndpointCategory`] and supports
//! shrinking a bucket's rate when the remote side still answers 429.

use crate::config::RateLimiterConfig;
use crate::constants::RATE_LIMIT_POLL_MS;
use crate::model::requests::EndpointCategory;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

type DirectLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>;

struct Bucket {
    limiter: Arc<DirectLimiter>,
    /// Effective requests-per-period, reduced on remote 429s
    max_requests: u32,
}

/// Token buckets for controlling API request rates, one per endpoint category.
///
/// Token accounting happens inside `governor`; callers own the surrounding
/// mutual exclusion (the gateway keeps the limiter behind an `RwLock` and
/// takes the write side only to shrink a bucket).
pub struct RateLimiter {
    buckets: HashMap<EndpointCategory, Bucket>,
    period_seconds: u64,
    burst_size: u32,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration.
    ///
    /// Every category starts with the same quota; quotas then evolve
    /// independently as remote 429s shrink individual buckets.
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let mut buckets = HashMap::new();
        for category in EndpointCategory::ALL {
            buckets.insert(
                category,
                Bucket {
                    limiter: build_limiter(
                        config.period_seconds,
                        config.max_requests,
                        config.burst_size,
                    ),
                    max_requests: config.max_requests.max(1),
                },
            );
        }
        Self {
            buckets,
            period_seconds: config.period_seconds,
            burst_size: config.burst_size,
        }
    }

    /// Waits until a request may be made against the category's bucket.
    ///
    /// Suspends cooperatively until the bucket's steady refill yields a
    /// token; it never fails fast and never drops the request. A token, once
    /// consumed, is not refunded if the caller abandons the call.
    pub async fn wait(&self, category: EndpointCategory) {
        let bucket = self.bucket(category);
        while bucket.limiter.check().is_err() {
            tokio::time::sleep(Duration::from_millis(RATE_LIMIT_POLL_MS)).await;
        }
    }

    /// Checks if a request can be made immediately, consuming a token if so
    #[must_use]
    pub fn check(&self, category: EndpointCategory) -> bool {
        self.bucket(category).limiter.check().is_ok()
    }

    /// Halves the effective rate of a category's bucket, to a floor of one
    /// request per period.
    ///
    /// Called by the gateway when the remote API answers 429 despite local
    /// accounting, so subsequent calls in this run put less pressure on the
    /// shared allowance.
    pub fn throttle(&mut self, category: EndpointCategory) {
        let period_seconds = self.period_seconds;
        let burst_size = self.burst_size;
        let bucket = self
            .buckets
            .get_mut(&category)
            .expect("all categories have buckets");
        let reduced = (bucket.max_requests / 2).max(1);
        if reduced == bucket.max_requests {
            return;
        }
        warn!(
            "remote rate limit hit on {category}: reducing local rate {} -> {} per {}s",
            bucket.max_requests, reduced, period_seconds
        );
        bucket.max_requests = reduced;
        bucket.limiter = build_limiter(period_seconds, reduced, burst_size);
    }

    /// Current effective requests-per-period for a category
    #[must_use]
    pub fn effective_rate(&self, category: EndpointCategory) -> u32 {
        self.bucket(category).max_requests
    }

    fn bucket(&self, category: EndpointCategory) -> &Bucket {
        self.buckets
            .get(&category)
            .expect("all categories have buckets")
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rates: HashMap<String, u32> = self
            .buckets
            .iter()
            .map(|(category, bucket)| (category.to_string(), bucket.max_requests))
            .collect();
        f.debug_struct("RateLimiter")
            .field("period_seconds", &self.period_seconds)
            .field("rates", &rates)
            .finish()
    }
}

/// Builds a bucket that spreads `max_requests` tokens evenly over the period,
/// allowing a burst of up to `burst_size` immediate requests.
fn build_limiter(period_seconds: u64, max_requests: u32, burst_size: u32) -> Arc<DirectLimiter> {
    let max_requests = max_requests.max(1);
    let per_token =
        Duration::from_millis(((period_seconds.max(1)) * 1_000 / u64::from(max_requests)).max(1));
    let burst = NonZeroU32::new(burst_size.clamp(1, max_requests))
        .unwrap_or_else(|| NonZeroU32::new(1).expect("1 is non-zero"));
    let quota = Quota::with_period(per_token)
        .expect("Valid period")
        .allow_burst(burst);
    Arc::new(GovernorRateLimiter::direct(quota))
}
