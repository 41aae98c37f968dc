//! Sources of randomness for backoff jitter.
//!
//! A [`JitterSource`] produces a unit sample in `[0, 1]`. The policy maps that
//! sample onto the fixed `[0.8, 1.2]` band, so a source never needs to know
//! about the band itself.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lower edge of the jitter multiplier applied to `delta_backoff`.
pub const JITTER_LOWER_BOUND: f64 = 0.8;
/// Upper edge of the jitter multiplier applied to `delta_backoff`.
pub const JITTER_UPPER_BOUND: f64 = 1.2;

/// A source of uniform randomness, shared by every caller of a policy.
///
/// Implementations must be safe to call from many threads at once.
///
/// # Examples
///
/// ```rust
/// use retrywise::{JitterSource, SeededJitter};
///
/// let a = SeededJitter::new(7);
/// let b = SeededJitter::new(7);
/// assert_eq!(a.sample_unit(), b.sample_unit());
/// ```
pub trait JitterSource: Send + Sync {
    /// Draw a value in `[0, 1]`.
    fn sample_unit(&self) -> f64;
}

impl<S: JitterSource + ?Sized> JitterSource for &S {
    fn sample_unit(&self) -> f64 {
        (**self).sample_unit()
    }
}

impl<S: JitterSource + ?Sized> JitterSource for Box<S> {
    fn sample_unit(&self) -> f64 {
        (**self).sample_unit()
    }
}

impl<S: JitterSource + ?Sized> JitterSource for Arc<S> {
    fn sample_unit(&self) -> f64 {
        (**self).sample_unit()
    }
}

/// Draws from the calling thread's generator.
///
/// Each thread owns its generator, so concurrent callers never contend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThreadRngJitter;

impl JitterSource for ThreadRngJitter {
    fn sample_unit(&self) -> f64 {
        rand::rng().random_range(0.0..=1.0)
    }
}

/// A reproducible source seeded with a fixed value.
///
/// Draws are serialized through a mutex; the lock is held for a single draw.
#[derive(Debug)]
pub struct SeededJitter {
    rng: Mutex<StdRng>,
}

impl SeededJitter {
    /// Create a source whose sequence is fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl JitterSource for SeededJitter {
    fn sample_unit(&self) -> f64 {
        // A panic mid-draw cannot leave StdRng in a broken state.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.random_range(0.0..=1.0)
    }
}

/// A source that always returns the same sample.
///
/// # Examples
///
/// ```rust
/// use retrywise::{FixedJitter, JitterSource};
///
/// assert_eq!(FixedJitter::LOWER.sample_unit(), 0.0);
/// assert_eq!(FixedJitter::new(4.0).sample_unit(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter(f64);

impl FixedJitter {
    /// Pins the multiplier to [`JITTER_LOWER_BOUND`].
    pub const LOWER: Self = Self(0.0);
    /// Pins the multiplier to the middle of the band.
    pub const MIDPOINT: Self = Self(0.5);
    /// Pins the multiplier to [`JITTER_UPPER_BOUND`].
    pub const UPPER: Self = Self(1.0);

    /// Create a source returning `unit`, clamped to `[0, 1]`. NaN becomes `0`.
    pub fn new(unit: f64) -> Self {
        if unit.is_nan() {
            Self::LOWER
        } else {
            Self(unit.clamp(0.0, 1.0))
        }
    }

    /// The sample this source returns.
    pub fn unit(&self) -> f64 {
        self.0
    }
}

impl JitterSource for FixedJitter {
    fn sample_unit(&self) -> f64 {
        self.0
    }
}

/// Map a unit sample onto the jitter band.
///
/// Out-of-range samples from custom sources are clamped first.
pub(crate) fn band_multiplier(unit: f64) -> f64 {
    let unit = if unit.is_nan() { 0.0 } else { unit.clamp(0.0, 1.0) };
    JITTER_LOWER_BOUND + (JITTER_UPPER_BOUND - JITTER_LOWER_BOUND) * unit
}
