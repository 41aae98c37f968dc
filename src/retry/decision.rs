//! The value a retry policy hands back to its caller.

use std::time::Duration;

/// The outcome of asking a policy whether to retry.
///
/// Decisions are plain values: two decisions are equal when both fields are
/// equal, and nothing about them changes after creation.
///
/// # Examples
///
/// ```rust
/// use retrywise::RetryDecision;
/// use std::time::Duration;
///
/// let decision = RetryDecision::retry_after(Duration::from_millis(250));
/// assert!(decision.should_retry());
/// assert_eq!(decision.wait_time(), Duration::from_millis(250));
///
/// assert_eq!(RetryDecision::give_up(), RetryDecision::new(false, Duration::ZERO));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RetryDecision {
    should_retry: bool,
    wait_time: Duration,
}

/// What the caller should do with a [`RetryDecision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RetryAction {
    /// Retry immediately.
    RetryNow,
    /// Retry once the duration has elapsed.
    RetryAfter(Duration),
    /// Stop retrying and surface the last error.
    GiveUp,
}

impl RetryDecision {
    /// Create a decision from its parts.
    pub const fn new(should_retry: bool, wait_time: Duration) -> Self {
        Self {
            should_retry,
            wait_time,
        }
    }

    /// Retry with no delay.
    pub const fn retry_now() -> Self {
        Self::new(true, Duration::ZERO)
    }

    /// Retry after `wait_time`.
    pub const fn retry_after(wait_time: Duration) -> Self {
        Self::new(true, wait_time)
    }

    /// Do not retry. The wait time is always zero.
    pub const fn give_up() -> Self {
        Self::new(false, Duration::ZERO)
    }

    /// Whether another attempt should be made.
    pub const fn should_retry(&self) -> bool {
        self.should_retry
    }

    /// How long to wait before the next attempt.
    pub const fn wait_time(&self) -> Duration {
        self.wait_time
    }

    /// Returns true if the caller should retry without waiting.
    pub fn is_immediate(&self) -> bool {
        self.should_retry && self.wait_time.is_zero()
    }

    /// Interpret the decision for the caller.
    ///
    /// A decision to give up maps to [`RetryAction::GiveUp`] even if it carries
    /// a wait time.
    pub fn action(&self) -> RetryAction {
        match (self.should_retry, self.wait_time.is_zero()) {
            (false, _) => RetryAction::GiveUp,
            (true, true) => RetryAction::RetryNow,
            (true, false) => RetryAction::RetryAfter(self.wait_time),
        }
    }
}

impl From<RetryDecision> for RetryAction {
    fn from(decision: RetryDecision) -> Self {
        decision.action()
    }
}
