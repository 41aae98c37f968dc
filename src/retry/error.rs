//! Error types for policy construction.

use std::time::Duration;

/// Error returned when a retry policy is built from an invalid configuration.
///
/// Decision computation itself never fails; running out of retries is reported
/// through [`RetryDecision::should_retry`](crate::RetryDecision::should_retry).
///
/// # Examples
///
/// ```rust
/// use retrywise::{ConfigError, ExponentialBackoffWithJitter};
/// use std::time::Duration;
///
/// let result = ExponentialBackoffWithJitter::new(
///     0,
///     Duration::from_millis(100),
///     Duration::from_secs(10),
///     Duration::from_millis(100),
///     true,
/// );
///
/// assert_eq!(result.unwrap_err(), ConfigError::ZeroMaxRetryCount);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The maximum retry count was zero.
    ZeroMaxRetryCount,
    /// The minimum backoff was larger than the maximum backoff.
    InvertedBackoffRange {
        /// The configured floor.
        min: Duration,
        /// The configured ceiling.
        max: Duration,
    },
}

impl ConfigError {
    /// Returns true if the error concerns the retry count.
    pub fn is_retry_count(&self) -> bool {
        matches!(self, Self::ZeroMaxRetryCount)
    }

    /// Returns true if the error concerns the backoff bounds.
    pub fn is_backoff_range(&self) -> bool {
        matches!(self, Self::InvertedBackoffRange { .. })
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroMaxRetryCount => write!(f, "max retry count must be greater than zero"),
            Self::InvertedBackoffRange { min, max } => write!(
                f,
                "min backoff ({:?}) must not exceed max backoff ({:?})",
                min, max
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
