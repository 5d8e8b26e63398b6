//! Retry delay computation: capped exponential backoff plus jitter.
//!
//! Attempt semantics follow the dispatcher loop: the first try is attempt `1`,
//! and the delay before the next try is derived from the number of attempts
//! already made. Jitter spreads simultaneous retries from independent callers.

use std::time::Duration;

use rand::Rng;

use crate::ClientOptions;

/// Jitter may add up to this fraction of the capped delay.
const JITTER_FACTOR: f64 = 0.1;

/// Delay to sleep before the next attempt, after `attempts_made` failed tries.
pub(crate) fn retry_delay(options: &ClientOptions, attempts_made: usize) -> Duration {
    let fraction = rand::rng().random_range(0.0..=1.0);
    retry_delay_with_jitter(options, attempts_made, fraction)
}

/// Deterministic core of [`retry_delay`].
///
/// Computes `min(max_delay, base_delay * 2^(attempts_made - 1))` and adds
/// `jitter_fraction * 0.1` of that on top. `jitter_fraction` must be in
/// `[0, 1]`; the exponent is clamped so large attempt counts cannot overflow.
pub(crate) fn retry_delay_with_jitter(
    options: &ClientOptions,
    attempts_made: usize,
    jitter_fraction: f64,
) -> Duration {
    let exponent = attempts_made.saturating_sub(1).min(63) as u32;
    let multiplier = 1u128 << exponent;
    let uncapped = u128::from(options.base_delay_ms).saturating_mul(multiplier);
    let delay_ms = uncapped.min(u128::from(options.max_delay_ms)) as u64;
    let jitter_ms = (delay_ms as f64 * JITTER_FACTOR * jitter_fraction.clamp(0.0, 1.0)) as u64;
    Duration::from_millis(delay_ms.saturating_add(jitter_ms))
}
