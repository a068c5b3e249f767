//! Standalone compound math operation, unrelated to the dataset
//! pipeline.

use std::f64::consts::PI;

use crate::error::{Error, Result};

/// Multiplies `x` by `y`, divides by `z` when present, then maps the
/// result through a log scale: the log base is the result itself when
/// positive, otherwise its absolute value plus one. The final value is
/// scaled by pi.
///
/// # Errors
///
/// Returns [`Error::ZeroDivisor`] when `z` is `Some(0)`.
pub fn compute(x: i64, y: i64, z: Option<i64>) -> Result<f64> {
    let mut result = (x * y) as f64;

    if let Some(z) = z {
        if z == 0 {
            return Err(Error::ZeroDivisor);
        }
        result /= z as f64;
    }

    let base = if result > 0.0 {
        result
    } else {
        result.abs() + 1.0
    };

    Ok(base.ln() * PI)
}
