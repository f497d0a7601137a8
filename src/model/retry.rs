/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/11/25
******************************************************************************/
use crate::constants::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_BASE_DELAY_MS, DEFAULT_RETRY_MAX_DELAY_MS,
};
use rand::Rng;
use std::time::Duration;

/// Configuration for HTTP request retry behavior
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of dispatch attempts for one logical call
    pub max_attempts: u32,
    /// Delay in milliseconds before the first retry
    pub base_delay_ms: u64,
    /// Cap in milliseconds for a single backoff delay (before jitter)
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay_ms: DEFAULT_RETRY_BASE_DELAY_MS,
            max_delay_ms: DEFAULT_RETRY_MAX_DELAY_MS,
        }
    }
}

impl RetryConfig {
    /// Creates a retry configuration with an explicit attempt budget
    #[must_use]
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Default::default()
        }
    }

    /// A configuration that never retries: one attempt, no backoff
    #[must_use]
    pub fn none() -> Self {
        Self::with_max_attempts(1)
    }
}

/// Bounded backoff schedule for one logical call.
///
/// The transport records every failed dispatch attempt here; the schedule
/// answers with the delay to sleep before the next attempt, or `None` once
/// the attempt budget is spent. Delays double per attempt starting from the
/// base delay, are capped at the maximum, and carry up to 25% random jitter.
#[derive(Debug)]
pub struct RetrySchedule {
    max_attempts: u32,
    base_delay_ms: u64,
    max_delay_ms: u64,
    attempts: u32,
}

impl RetrySchedule {
    /// Creates a fresh schedule from a retry configuration
    #[must_use]
    pub fn new(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay_ms: config.base_delay_ms,
            max_delay_ms: config.max_delay_ms,
            attempts: 0,
        }
    }

    /// Number of dispatch attempts recorded so far
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Records a failed dispatch attempt.
    ///
    /// Returns the backoff to sleep before the next attempt, or `None` when
    /// the budget is exhausted and the failure must surface to the caller.
    pub fn record_failure(&mut self) -> Option<Duration> {
        self.attempts += 1;
        if self.attempts >= self.max_attempts {
            return None;
        }
        let shift = (self.attempts - 1).min(16);
        let exp_ms = self
            .base_delay_ms
            .saturating_mul(1u64 << shift)
            .min(self.max_delay_ms);
        let jitter_ms = if exp_ms == 0 {
            0
        } else {
            rand::rng().random_range(0..=exp_ms / 4)
        };
        Some(Duration::from_millis(exp_ms + jitter_ms))
    }
}
