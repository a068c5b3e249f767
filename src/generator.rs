//! Synthetic dataset generation.

use rand::Rng;

use crate::error::{Error, Result};

/// Draws `size` integers uniformly from the closed interval `[min, max]`.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] when `min > max`; the underlying
/// sampler would panic on the empty range otherwise.
pub fn generate_random_data(size: usize, min: i64, max: i64) -> Result<Vec<i64>> {
    if min > max {
        return Err(Error::InvalidRange { min, max });
    }

    let mut rng = rand::thread_rng();
    Ok((0..size).map(|_| rng.gen_range(min..=max)).collect())
}

/// Returns the first `length` terms of the Fibonacci sequence,
/// starting 0, 1, 1, 2, 3.
pub fn generate_fibonacci(length: usize) -> Vec<i64> {
    let mut sequence = Vec::with_capacity(length);
    let (mut current, mut next) = (0i64, 1i64);

    for _ in 0..length {
        sequence.push(current);
        (current, next) = (next, current + next);
    }

    sequence
}
