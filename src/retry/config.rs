//! Backoff configuration and its defaults.

use std::time::Duration;

use super::error::ConfigError;

/// Default maximum retry count: effectively unbounded.
pub const DEFAULT_MAX_RETRY_COUNT: u32 = u32::MAX;
/// Default floor on the wait time.
pub const DEFAULT_MIN_BACKOFF: Duration = Duration::from_millis(100);
/// Default ceiling on the wait time.
pub const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(10);
/// Default scale of the exponential term.
pub const DEFAULT_DELTA_BACKOFF: Duration = Duration::from_millis(100);
/// Default for retrying the first failure immediately.
pub const DEFAULT_FIRST_FAST_RETRY: bool = true;

/// Configuration for [`ExponentialBackoffWithJitter`](crate::ExponentialBackoffWithJitter).
///
/// A config is pure data. It is checked once, when a policy is built from it,
/// and the policy keeps its own copy, so later edits to the config never reach
/// an existing policy.
///
/// # Examples
///
/// ```rust
/// use retrywise::BackoffConfig;
/// use std::time::Duration;
///
/// let config = BackoffConfig::default()
///     .with_max_retry_count(5)
///     .with_max_backoff(Duration::from_secs(2));
///
/// assert_eq!(config.max_retry_count, 5);
/// assert_eq!(config.min_backoff, Duration::from_millis(100));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BackoffConfig {
    /// Upper bound on the attempt count the policy will sanction. Must be > 0.
    pub max_retry_count: u32,
    /// Floor on the returned wait time.
    pub min_backoff: Duration,
    /// Ceiling on the returned wait time. Must be >= `min_backoff`.
    pub max_backoff: Duration,
    /// Scale factor for the exponential and jitter term.
    pub delta_backoff: Duration,
    /// Retry attempt 0 immediately with no wait.
    pub first_fast_retry: bool,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            max_retry_count: DEFAULT_MAX_RETRY_COUNT,
            min_backoff: DEFAULT_MIN_BACKOFF,
            max_backoff: DEFAULT_MAX_BACKOFF,
            delta_backoff: DEFAULT_DELTA_BACKOFF,
            first_fast_retry: DEFAULT_FIRST_FAST_RETRY,
        }
    }
}

impl BackoffConfig {
    /// Create a config from all five settings.
    pub fn new(
        max_retry_count: u32,
        min_backoff: Duration,
        max_backoff: Duration,
        delta_backoff: Duration,
        first_fast_retry: bool,
    ) -> Self {
        Self {
            max_retry_count,
            min_backoff,
            max_backoff,
            delta_backoff,
            first_fast_retry,
        }
    }

    /// Set the maximum retry count.
    pub fn with_max_retry_count(mut self, n: u32) -> Self {
        self.max_retry_count = n;
        self
    }

    /// Set the minimum backoff.
    pub fn with_min_backoff(mut self, d: Duration) -> Self {
        self.min_backoff = d;
        self
    }

    /// Set the maximum backoff.
    pub fn with_max_backoff(mut self, d: Duration) -> Self {
        self.max_backoff = d;
        self
    }

    /// Set the delta backoff.
    pub fn with_delta_backoff(mut self, d: Duration) -> Self {
        self.delta_backoff = d;
        self
    }

    /// Enable or disable the immediate first retry.
    pub fn with_first_fast_retry(mut self, enabled: bool) -> Self {
        self.first_fast_retry = enabled;
        self
    }

    /// Check the config's invariants.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroMaxRetryCount`] if `max_retry_count` is zero
    /// - [`ConfigError::InvertedBackoffRange`] if `min_backoff > max_backoff`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use retrywise::{BackoffConfig, ConfigError};
    ///
    /// let config = BackoffConfig::default().with_max_retry_count(0);
    /// assert_eq!(config.validate(), Err(ConfigError::ZeroMaxRetryCount));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_retry_count == 0 {
            return Err(ConfigError::ZeroMaxRetryCount);
        }
        if self.min_backoff > self.max_backoff {
            return Err(ConfigError::InvertedBackoffRange {
                min: self.min_backoff,
                max: self.max_backoff,
            });
        }
        Ok(())
    }
}
