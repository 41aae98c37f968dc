//! Integration tests for retry decisions.

use super::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

/// Drives a policy the way a transport layer would, without sleeping.
///
/// Returns the waits the caller would have observed and whether it gave up.
fn drive<P: RetryPolicy<str>>(policy: &P, failures: u32) -> (Vec<Duration>, bool) {
    let mut waits = Vec::new();
    for attempt in 0..failures {
        match policy.retry_decision(attempt, "connection refused").action() {
            RetryAction::RetryNow => waits.push(Duration::ZERO),
            RetryAction::RetryAfter(wait) => waits.push(wait),
            RetryAction::GiveUp => return (waits, true),
        }
    }
    (waits, false)
}

#[test]
fn test_caller_loop_gives_up_after_max_retries() {
    let config = BackoffConfig::default()
        .with_max_retry_count(4)
        .with_min_backoff(Duration::from_millis(10))
        .with_max_backoff(Duration::from_millis(100))
        .with_delta_backoff(Duration::from_millis(10));
    let policy = ExponentialBackoffWithJitter::with_jitter_source(config, FixedJitter::LOWER)
        .unwrap();

    let (waits, gave_up) = drive(&policy, 10);

    assert!(gave_up);
    assert_eq!(
        waits,
        vec![
            Duration::ZERO,
            Duration::from_millis(18),
            Duration::from_millis(34),
            Duration::from_millis(66),
            Duration::from_millis(100),
        ]
    );
}

#[test]
fn test_caller_loop_with_no_retry() {
    let (waits, gave_up) = drive(&NoRetry, 10);
    assert!(gave_up);
    assert!(waits.is_empty());
}

#[test]
fn test_repeated_calls_vary_wait_but_not_verdict() {
    let policy = ExponentialBackoffWithJitter::with_jitter_source(
        BackoffConfig::default().with_max_backoff(Duration::from_secs(60)),
        SeededJitter::new(99),
    )
    .unwrap();

    let decisions: Vec<RetryDecision> = (0..50).map(|_| policy.decision_for(3)).collect();

    assert!(decisions.iter().all(RetryDecision::should_retry));

    // 100ms + 7 * [80ms, 120ms]
    let low = Duration::from_millis(660);
    let high = Duration::from_millis(940);
    for d in &decisions {
        assert!(d.wait_time() >= low && d.wait_time() <= high, "{:?}", d);
    }

    let distinct: HashSet<Duration> = decisions.iter().map(|d| d.wait_time()).collect();
    assert!(distinct.len() > 1);
}

#[test]
fn test_fast_retry_consumes_no_randomness() {
    let seeded = Arc::new(SeededJitter::new(5));
    let reference = SeededJitter::new(5);
    let policy = ExponentialBackoffWithJitter::with_jitter_source(
        BackoffConfig::default(),
        Arc::clone(&seeded),
    )
    .unwrap();

    assert!(policy.decision_for(0).is_immediate());
    assert_eq!(seeded.sample_unit(), reference.sample_unit());
}

#[test]
fn test_boxed_dyn_policies() {
    let policies: Vec<Box<dyn RetryPolicy<str>>> = vec![
        Box::new(NoRetry),
        Box::new(ExponentialBackoffWithJitter::default()),
    ];

    let verdicts: Vec<bool> = policies
        .iter()
        .map(|p| p.retry_decision(1, "reset").should_retry())
        .collect();

    assert_eq!(verdicts, vec![false, true]);
}

#[test]
fn test_shared_across_threads() {
    let policy = Arc::new(ExponentialBackoffWithJitter::default());

    std::thread::scope(|s| {
        for _ in 0..8 {
            let policy = Arc::clone(&policy);
            s.spawn(move || {
                for attempt in 1..200 {
                    let decision = policy.decision_for(attempt);
                    assert!(decision.should_retry());
                    assert!(decision.wait_time() >= policy.min_backoff());
                    assert!(decision.wait_time() <= policy.max_backoff());
                }
            });
        }
    });
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_seeded_source_shared_by_tasks() {
    let config = BackoffConfig::default()
        .with_max_retry_count(6)
        .with_max_backoff(Duration::from_secs(30));
    let policy = Arc::new(
        ExponentialBackoffWithJitter::with_jitter_source(config, SeededJitter::new(11)).unwrap(),
    );

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let policy = Arc::clone(&policy);
            tokio::spawn(async move {
                (0..=7u32)
                    .map(|attempt| policy.decision_for(attempt))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        let decisions = handle.await.unwrap();
        assert!(decisions[0].is_immediate());
        assert!(decisions[1..=6].iter().all(|d| d.should_retry()));
        assert_eq!(decisions[7], RetryDecision::give_up());
    }
}
