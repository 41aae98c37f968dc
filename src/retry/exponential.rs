//! Exponential backoff with proportional jitter.

use std::time::Duration;

use super::config::BackoffConfig;
use super::decision::RetryDecision;
use super::error::ConfigError;
use super::jitter::{band_multiplier, JitterSource, ThreadRngJitter};
use super::policy::RetryPolicy;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Retry with exponentially growing, jittered waits.
///
/// For attempt `n` the wait is
/// `min(min_backoff + (2^n - 1) * delta_backoff * u, max_backoff)` with `u`
/// drawn from `[0.8, 1.2]` on every call. Attempt 0 retries immediately when
/// `first_fast_retry` is set, and any attempt past `max_retry_count` gives up.
///
/// The policy holds no mutable state of its own. Share it behind an `Arc` and
/// call it from as many tasks as needed.
///
/// # Examples
///
/// ```rust
/// use retrywise::{BackoffConfig, ExponentialBackoffWithJitter, FixedJitter};
/// use std::time::Duration;
///
/// let config = BackoffConfig::default()
///     .with_max_retry_count(3)
///     .with_min_backoff(Duration::from_millis(10))
///     .with_max_backoff(Duration::from_millis(100))
///     .with_delta_backoff(Duration::from_millis(10))
///     .with_first_fast_retry(false);
/// let policy = ExponentialBackoffWithJitter::with_jitter_source(config, FixedJitter::LOWER)?;
///
/// assert_eq!(policy.decision_for(0).wait_time(), Duration::from_millis(10));
/// assert_eq!(policy.decision_for(1).wait_time(), Duration::from_millis(18));
/// assert_eq!(policy.decision_for(2).wait_time(), Duration::from_millis(34));
/// assert_eq!(policy.decision_for(3).wait_time(), Duration::from_millis(66));
/// assert!(!policy.decision_for(4).should_retry());
/// # Ok::<(), retrywise::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExponentialBackoffWithJitter<J = ThreadRngJitter> {
    config: BackoffConfig,
    jitter: J,
}

impl ExponentialBackoffWithJitter<ThreadRngJitter> {
    /// Create a policy drawing jitter from the thread-local generator.
    ///
    /// # Errors
    ///
    /// Fails with [`ConfigError::ZeroMaxRetryCount`] when `max_retry_count` is
    /// zero, and with [`ConfigError::InvertedBackoffRange`] when
    /// `min_backoff > max_backoff`.
    pub fn new(
        max_retry_count: u32,
        min_backoff: Duration,
        max_backoff: Duration,
        delta_backoff: Duration,
        first_fast_retry: bool,
    ) -> Result<Self, ConfigError> {
        Self::from_config(BackoffConfig::new(
            max_retry_count,
            min_backoff,
            max_backoff,
            delta_backoff,
            first_fast_retry,
        ))
    }

    /// Create a policy from a config, drawing jitter from the thread-local generator.
    pub fn from_config(config: BackoffConfig) -> Result<Self, ConfigError> {
        Self::with_jitter_source(config, ThreadRngJitter)
    }
}

impl Default for ExponentialBackoffWithJitter<ThreadRngJitter> {
    /// 100ms floor, 10s ceiling, 100ms delta, fast first retry, no retry limit.
    fn default() -> Self {
        Self {
            config: BackoffConfig::default(),
            jitter: ThreadRngJitter,
        }
    }
}

impl<J: JitterSource> ExponentialBackoffWithJitter<J> {
    /// Create a policy drawing jitter from `jitter`.
    ///
    /// # Errors
    ///
    /// Returns whatever [`BackoffConfig::validate`] reports.
    pub fn with_jitter_source(config: BackoffConfig, jitter: J) -> Result<Self, ConfigError> {
        config.validate()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            max_retry_count = config.max_retry_count,
            min_backoff = ?config.min_backoff,
            max_backoff = ?config.max_backoff,
            delta_backoff = ?config.delta_backoff,
            first_fast_retry = config.first_fast_retry,
            "created exponential backoff policy"
        );

        Ok(Self { config, jitter })
    }

    /// Decide what to do after `current_retry_count` failures.
    ///
    /// Never panics: every `u32` yields a decision.
    pub fn decision_for(&self, current_retry_count: u32) -> RetryDecision {
        if self.is_exhausted(current_retry_count) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                attempt = current_retry_count,
                max_retry_count = self.config.max_retry_count,
                "retries exhausted"
            );
            return RetryDecision::give_up();
        }

        if self.config.first_fast_retry && current_retry_count == 0 {
            #[cfg(feature = "tracing")]
            tracing::trace!(attempt = 0, "fast first retry");
            return RetryDecision::retry_now();
        }

        let wait = self.backoff_for(current_retry_count);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            attempt = current_retry_count,
            wait = ?wait,
            "computed backoff"
        );

        RetryDecision::retry_after(wait)
    }

    /// Returns true once `current_retry_count` exceeds the configured maximum.
    pub fn is_exhausted(&self, current_retry_count: u32) -> bool {
        current_retry_count > self.config.max_retry_count
    }

    /// The jittered, clamped wait for attempt `current_retry_count`.
    ///
    /// Draws exactly one sample from the jitter source.
    fn backoff_for(&self, current_retry_count: u32) -> Duration {
        let multiplier = band_multiplier(self.jitter.sample_unit());
        // Rounded to the nearest nanosecond; f64 -> u128 casts saturate.
        let jittered_delta =
            (self.config.delta_backoff.as_nanos() as f64 * multiplier).round() as u128;

        let wait = self
            .config
            .min_backoff
            .as_nanos()
            .saturating_add(growth(current_retry_count).saturating_mul(jittered_delta));

        if wait >= self.config.max_backoff.as_nanos() {
            self.config.max_backoff
        } else {
            duration_from_nanos(wait)
        }
    }

    /// The jitter source.
    pub fn jitter_source(&self) -> &J {
        &self.jitter
    }
}

impl<J> ExponentialBackoffWithJitter<J> {
    /// The validated configuration.
    pub fn config(&self) -> &BackoffConfig {
        &self.config
    }

    /// Get the maximum retry count.
    pub fn max_retry_count(&self) -> u32 {
        self.config.max_retry_count
    }

    /// Get the minimum backoff.
    pub fn min_backoff(&self) -> Duration {
        self.config.min_backoff
    }

    /// Get the maximum backoff.
    pub fn max_backoff(&self) -> Duration {
        self.config.max_backoff
    }

    /// Get the delta backoff.
    pub fn delta_backoff(&self) -> Duration {
        self.config.delta_backoff
    }

    /// Whether attempt 0 is retried immediately.
    pub fn first_fast_retry(&self) -> bool {
        self.config.first_fast_retry
    }
}

impl<J: JitterSource, E: ?Sized> RetryPolicy<E> for ExponentialBackoffWithJitter<J> {
    fn retry_decision(&self, current_retry_count: u32, _last_error: &E) -> RetryDecision {
        self.decision_for(current_retry_count)
    }
}

/// `2^exponent - 1`, saturating at `u128::MAX`.
fn growth(exponent: u32) -> u128 {
    if exponent >= u128::BITS {
        u128::MAX
    } else {
        (1u128 << exponent) - 1
    }
}

/// Caller guarantees `nanos` is below some `Duration::as_nanos()`.
fn duration_from_nanos(nanos: u128) -> Duration {
    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    // Always < 1e9.
    let subsec = (nanos % NANOS_PER_SEC) as u32;
    Duration::new(secs, subsec)
}
