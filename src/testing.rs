//! Testing utilities for code that consumes retry decisions
//!
//! This module provides assertion macros for [`RetryDecision`](crate::RetryDecision)
//! values and, with the `proptest` feature, an `Arbitrary` implementation for
//! [`BackoffConfig`](crate::BackoffConfig) that only generates valid configs.
//!
//! For deterministic jitter, pair these with [`FixedJitter`](crate::FixedJitter)
//! or [`SeededJitter`](crate::SeededJitter).
//!
//! # Examples
//!
//! ```rust
//! use retrywise::{RetryDecision, assert_give_up, assert_retry, assert_retry_after};
//! use std::time::Duration;
//!
//! assert_retry!(RetryDecision::retry_now());
//! assert_retry_after!(RetryDecision::retry_after(Duration::from_millis(5)), Duration::from_millis(5));
//! assert_give_up!(RetryDecision::give_up());
//! ```

/// Assert that a decision says to retry.
///
/// This macro will panic if the decision gives up.
///
/// # Example
///
/// ```rust
/// use retrywise::{RetryDecision, assert_retry};
///
/// assert_retry!(RetryDecision::retry_now());
/// ```
#[macro_export]
macro_rules! assert_retry {
    ($decision:expr) => {{
        let decision: $crate::RetryDecision = $decision;
        if !decision.should_retry() {
            panic!("Expected retry, got give up: {:?}", decision);
        }
    }};
}

/// Assert that a decision gives up.
///
/// This macro will panic if the decision says to retry.
///
/// # Example
///
/// ```rust
/// use retrywise::{RetryDecision, assert_give_up};
///
/// assert_give_up!(RetryDecision::give_up());
/// ```
#[macro_export]
macro_rules! assert_give_up {
    ($decision:expr) => {{
        let decision: $crate::RetryDecision = $decision;
        if decision.should_retry() {
            panic!("Expected give up, got retry: {:?}", decision);
        }
    }};
}

/// Assert that a decision retries after exactly the given wait.
///
/// This macro will panic if the decision gives up or if the wait differs.
///
/// # Example
///
/// ```rust
/// use retrywise::{RetryDecision, assert_retry_after};
/// use std::time::Duration;
///
/// let decision = RetryDecision::retry_after(Duration::from_secs(1));
/// assert_retry_after!(decision, Duration::from_secs(1));
/// ```
#[macro_export]
macro_rules! assert_retry_after {
    ($decision:expr, $expected:expr) => {{
        let decision: $crate::RetryDecision = $decision;
        if !decision.should_retry() {
            panic!(
                "Expected retry after {:?}, got give up: {:?}",
                $expected, decision
            );
        }
        assert_eq!(decision.wait_time(), $expected);
    }};
}

#[cfg(feature = "proptest")]
use crate::BackoffConfig;
#[cfg(feature = "proptest")]
use proptest::prelude::*;
#[cfg(feature = "proptest")]
use std::time::Duration;

/// Longest duration generated for any backoff field.
#[cfg(feature = "proptest")]
const ARBITRARY_BACKOFF_LIMIT_MS: u64 = 3_600_000;

#[cfg(feature = "proptest")]
impl Arbitrary for BackoffConfig {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            1u32..=u32::MAX,
            0..ARBITRARY_BACKOFF_LIMIT_MS,
            0..ARBITRARY_BACKOFF_LIMIT_MS,
            0..ARBITRARY_BACKOFF_LIMIT_MS,
            any::<bool>(),
        )
            .prop_map(|(max_retry_count, a, b, delta, first_fast_retry)| {
                BackoffConfig::new(
                    max_retry_count,
                    Duration::from_millis(a.min(b)),
                    Duration::from_millis(a.max(b)),
                    Duration::from_millis(delta),
                    first_fast_retry,
                )
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::RetryDecision;
    use std::time::Duration;

    #[test]
    fn assert_retry_macro() {
        assert_retry!(RetryDecision::retry_after(Duration::from_millis(1)));
    }

    #[test]
    fn assert_give_up_macro() {
        assert_give_up!(RetryDecision::give_up());
    }

    #[test]
    fn assert_retry_after_macro() {
        assert_retry_after!(RetryDecision::retry_now(), Duration::ZERO);
    }

    #[test]
    #[should_panic(expected = "Expected retry, got give up")]
    fn assert_retry_panics_on_give_up() {
        assert_retry!(RetryDecision::give_up());
    }

    #[test]
    #[should_panic(expected = "Expected give up, got retry")]
    fn assert_give_up_panics_on_retry() {
        assert_give_up!(RetryDecision::retry_now());
    }

    #[test]
    #[should_panic(expected = "Expected retry after")]
    fn assert_retry_after_panics_on_give_up() {
        assert_retry_after!(RetryDecision::give_up(), Duration::ZERO);
    }

    #[test]
    #[should_panic]
    fn assert_retry_after_panics_on_wrong_wait() {
        assert_retry_after!(
            RetryDecision::retry_after(Duration::from_millis(3)),
            Duration::from_millis(4)
        );
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::BackoffConfig;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn backoff_config_arbitrary_generates_valid_instances(
                config in any::<BackoffConfig>()
            ) {
                prop_assert!(config.validate().is_ok());
                prop_assert!(config.min_backoff <= config.max_backoff);
            }
        }
    }
}
