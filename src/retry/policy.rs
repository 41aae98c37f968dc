//! The retry policy capability and its simplest implementation.

use std::sync::Arc;

use super::decision::RetryDecision;

/// Decides whether a failed operation should be retried.
///
/// Policies are pure: they read their configuration, maybe draw a random
/// number, and return a [`RetryDecision`]. Sleeping for the wait time and
/// re-issuing the operation is the caller's job.
///
/// `E` is the caller's error type. Policies that do not branch on the error
/// implement the trait for every `E`, so one policy serves any transport.
///
/// # Examples
///
/// ```rust
/// use retrywise::{NoRetry, RetryDecision, RetryPolicy};
/// use std::sync::Arc;
///
/// let shared: Arc<dyn RetryPolicy<str>> = Arc::new(NoRetry);
/// assert_eq!(shared.retry_decision(0, "refused"), RetryDecision::give_up());
/// ```
pub trait RetryPolicy<E: ?Sized = dyn std::error::Error + Send + Sync>: Send + Sync {
    /// Decide what to do after `current_retry_count` failures.
    ///
    /// `current_retry_count` is 0 after the first failure. `last_error` is the
    /// most recent failure and is passed through for policies that inspect it.
    fn retry_decision(&self, current_retry_count: u32, last_error: &E) -> RetryDecision;
}

impl<E: ?Sized, P: RetryPolicy<E> + ?Sized> RetryPolicy<E> for &P {
    fn retry_decision(&self, current_retry_count: u32, last_error: &E) -> RetryDecision {
        (**self).retry_decision(current_retry_count, last_error)
    }
}

impl<E: ?Sized, P: RetryPolicy<E> + ?Sized> RetryPolicy<E> for Box<P> {
    fn retry_decision(&self, current_retry_count: u32, last_error: &E) -> RetryDecision {
        (**self).retry_decision(current_retry_count, last_error)
    }
}

impl<E: ?Sized, P: RetryPolicy<E> + ?Sized> RetryPolicy<E> for Arc<P> {
    fn retry_decision(&self, current_retry_count: u32, last_error: &E) -> RetryDecision {
        (**self).retry_decision(current_retry_count, last_error)
    }
}

/// A policy that never retries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoRetry;

impl<E: ?Sized> RetryPolicy<E> for NoRetry {
    fn retry_decision(&self, _current_retry_count: u32, _last_error: &E) -> RetryDecision {
        RetryDecision::give_up()
    }
}
