use serde::Serialize;

use crate::error::{Error, Result};

/// Summary statistics over a processed dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub std_dev: f64,
}

/// Computes the arithmetic mean.
///
/// # Errors
///
/// Returns [`Error::EmptyDataset`] for empty input.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::EmptyDataset);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Computes the population standard deviation (divisor N, not N-1).
pub fn std_dev(values: &[f64]) -> Result<f64> {
    let mean = mean(values)?;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

    Ok(variance.sqrt())
}

/// Computes mean, max, min, and standard deviation for a dataset.
pub fn basic_stats(values: &[f64]) -> Result<Statistics> {
    if values.is_empty() {
        return Err(Error::EmptyDataset);
    }

    Ok(Statistics {
        mean: mean(values)?,
        max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        min: values.iter().copied().fold(f64::INFINITY, f64::min),
        std_dev: std_dev(values)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty_fails() {
        assert!(matches!(mean(&[]), Err(Error::EmptyDataset)));
    }

    #[test]
    fn test_mean_known_values() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
    }

    #[test]
    fn test_std_dev_population_divisor() {
        // Population std dev of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((std_dev(&values).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_zero_for_constant() {
        assert_eq!(std_dev(&[3.5, 3.5, 3.5]).unwrap(), 0.0);
    }

    #[test]
    fn test_std_dev_non_negative() {
        let values = [-10.0, 0.0, 12.5, 99.0];
        assert!(std_dev(&values).unwrap() >= 0.0);
    }

    #[test]
    fn test_basic_stats_single_value() {
        let stats = basic_stats(&[16.0]).unwrap();

        assert_eq!(stats.mean, 16.0);
        assert_eq!(stats.max, 16.0);
        assert_eq!(stats.min, 16.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_basic_stats_empty_fails() {
        assert!(matches!(basic_stats(&[]), Err(Error::EmptyDataset)));
    }
}
