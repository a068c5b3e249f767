//! Fixed per-element transform applied to raw dataset values.

/// Squares an even value.
pub fn transform_even(n: i64) -> f64 {
    let x = n as f64;
    x * x
}

/// Square root of the absolute value, for odd inputs.
pub fn transform_odd(n: i64) -> f64 {
    (n.abs() as f64).sqrt()
}

/// Picks the transform by parity: even values are squared, odd values
/// map to sqrt(|n|).
pub fn select_transform(n: i64) -> f64 {
    if n % 2 == 0 {
        transform_even(n)
    } else {
        transform_odd(n)
    }
}

/// Rescales a value toward the working range with a single step.
///
/// Values above 100 are divided by 10 exactly once, values below 1 are
/// multiplied by 10 exactly once. The adjustment is never iterated:
/// 5000 becomes 500, not 50.
pub fn adjust_range(v: f64) -> f64 {
    if v > 100.0 {
        v / 10.0
    } else if v < 1.0 {
        v * 10.0
    } else {
        v
    }
}
