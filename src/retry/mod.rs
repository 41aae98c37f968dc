//! Retry decisions for failed network operations.
//!
//! This module follows the "pure core, imperative shell" philosophy:
//!
//! - **Pure Core**: a [`RetryPolicy`] only answers "retry, and after how long?"
//! - **Injectable randomness**: jitter comes from a [`JitterSource`], so tests can pin it
//! - **Declarative**: configuration is a plain [`BackoffConfig`] value
//!
//! # Quick Start
//!
//! ```rust
//! use retrywise::{ExponentialBackoffWithJitter, RetryPolicy};
//!
//! let policy = ExponentialBackoffWithJitter::default();
//!
//! let decision = policy.retry_decision(3, &"timed out");
//! assert!(decision.should_retry());
//! assert!(decision.wait_time() <= policy.max_backoff());
//! ```
//!
//! # Backoff Formula
//!
//! For attempt `n` (0-indexed, counting failures already seen):
//!
//! ```text
//! wait(n) = min(min_backoff + (2^n - 1) * delta_backoff * u, max_backoff)
//! ```
//!
//! where `u` is drawn uniformly from `[0.8, 1.2]` on every call. When
//! `first_fast_retry` is set, attempt 0 skips the formula and retries at once.
//!
//! # Policies
//!
//! - [`ExponentialBackoffWithJitter`]: the formula above, bounded by a retry count
//! - [`NoRetry`]: gives up on the first failure
//!
//! # Error Types
//!
//! - [`ConfigError`]: returned when a policy is built from an invalid configuration

mod config;
mod decision;
mod error;
mod exponential;
mod jitter;
mod policy;

pub use config::{
    BackoffConfig, DEFAULT_DELTA_BACKOFF, DEFAULT_FIRST_FAST_RETRY, DEFAULT_MAX_BACKOFF,
    DEFAULT_MAX_RETRY_COUNT, DEFAULT_MIN_BACKOFF,
};
pub use decision::{RetryAction, RetryDecision};
pub use error::ConfigError;
pub use exponential::ExponentialBackoffWithJitter;
pub use jitter::{
    FixedJitter, JitterSource, SeededJitter, ThreadRngJitter, JITTER_LOWER_BOUND,
    JITTER_UPPER_BOUND,
};
pub use policy::{NoRetry, RetryPolicy};

#[cfg(test)]
mod tests;
