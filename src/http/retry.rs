//! Retry policies for node requests.
//!
//! Reads (views, account and transaction lookups) are retried while the node
//! reports itself busy. Transaction submission and faucet minting never are.

use std::time::Duration;

/// Statuses a node or its gateway answers while rate limiting, restarting
/// or catching up to the ledger head.
pub const NODE_BUSY_STATUSES: [u16; 4] = [429, 502, 503, 504];

/// Which requests are retried, and how.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// Single attempt. Used for submissions.
    #[default]
    None,
    /// [`RetryConfig::default`]: backoff on [`NODE_BUSY_STATUSES`] and
    /// transport failures.
    Reads,
    Custom(RetryConfig),
}

impl RetryPolicy {
    /// `None` when requests under this policy get a single attempt.
    pub fn config(&self) -> Option<RetryConfig> {
        match self {
            RetryPolicy::None => None,
            RetryPolicy::Reads => Some(RetryConfig::default()),
            RetryPolicy::Custom(c) => Some(c.clone()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Attempts after the first request.
    pub retries: u32,
    /// Wait before the first retry. Doubles with every retry after it.
    pub base_delay: Duration,
    pub max_delay: Duration,
    /// Share of the delay randomized either way, clamped to `0.0..=1.0`.
    pub jitter: f64,
    pub statuses: Vec<u16>,
    /// Never wait less than a 429's `Retry-After`, even past `max_delay`.
    pub honor_retry_after: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            retries: 3,
            base_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(8),
            jitter: 0.2,
            statuses: NODE_BUSY_STATUSES.to_vec(),
            honor_retry_after: true,
        }
    }
}

impl RetryConfig {
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn retries_status(&self, status: u16) -> bool {
        self.statuses.contains(&status)
    }

    /// Wait before retry number `attempt` (0-based). `retry_after` is the
    /// server's own hint, if it sent one.
    pub fn backoff(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        let capped = self.base_delay.saturating_mul(factor).min(self.max_delay);

        let spread = capped.mul_f64(self.jitter.clamp(0.0, 1.0));
        let jittered = if spread.is_zero() {
            capped
        } else {
            (capped + spread.mul_f64(rand::random::<f64>() * 2.0)).saturating_sub(spread)
        };

        match retry_after {
            Some(hint) if self.honor_retry_after => jittered.max(hint),
            _ => jittered,
        }
    }
}
