//! # Retrywise
//!
//! > *"Decide first, wait later"*
//!
//! A Rust library for deciding when a failed network operation should be retried.
//!
//! ## Philosophy
//!
//! **Retrywise** follows the principle of **pure core, imperative shell**:
//! - **Core** = Policies compute a [`RetryDecision`] and nothing else
//! - **Shell** = The transport layer sleeps, reconnects and surfaces errors
//!
//! A policy never performs I/O, never sleeps and never inspects the error it is
//! handed. That keeps the backoff arithmetic deterministic under test: inject a
//! [`FixedJitter`] and every wait time is exact.
//!
//! ## Quick Example
//!
//! ```rust
//! use retrywise::{ExponentialBackoffWithJitter, FixedJitter, RetryAction, RetryPolicy};
//! use retrywise::BackoffConfig;
//! use std::time::Duration;
//!
//! let config = BackoffConfig::default()
//!     .with_min_backoff(Duration::from_millis(10))
//!     .with_max_backoff(Duration::from_millis(100))
//!     .with_delta_backoff(Duration::from_millis(10));
//!
//! let policy = ExponentialBackoffWithJitter::with_jitter_source(config, FixedJitter::LOWER)
//!     .expect("valid configuration");
//!
//! // The first failure is retried immediately.
//! assert_eq!(policy.retry_decision(0, &"connection reset").action(), RetryAction::RetryNow);
//!
//! // Later failures back off exponentially: 10ms + (2^2 - 1) * 8ms.
//! let decision = policy.retry_decision(2, &"connection reset");
//! assert_eq!(decision.action(), RetryAction::RetryAfter(Duration::from_millis(34)));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod retry;
pub mod testing;

// Re-exports
pub use retry::{
    BackoffConfig, ConfigError, ExponentialBackoffWithJitter, FixedJitter, JitterSource, NoRetry,
    RetryAction, RetryDecision, RetryPolicy, SeededJitter, ThreadRngJitter,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::retry::{
        BackoffConfig, ConfigError, ExponentialBackoffWithJitter, FixedJitter, JitterSource,
        NoRetry, RetryAction, RetryDecision, RetryPolicy, SeededJitter, ThreadRngJitter,
    };
}
