//! Dataset processing with a lazily-populated result cache.

use std::cell::OnceCell;

use crate::error::{Error, Result};
use crate::stats::{Statistics, basic_stats};
use crate::transform::{adjust_range, select_transform};

/// Applies the per-element transform to a raw dataset.
///
/// The raw data is immutable after construction, so the processed
/// values are computed once on first access and cached; every later
/// read returns the same slice.
pub struct DataProcessor {
    raw: Vec<i64>,
    processed: OnceCell<Vec<f64>>,
}

impl DataProcessor {
    pub fn new(raw: Vec<i64>) -> Self {
        Self {
            raw,
            processed: OnceCell::new(),
        }
    }

    /// The raw dataset as generated, before transformation.
    pub fn raw_data(&self) -> &[i64] {
        &self.raw
    }

    /// Forces processing of the raw dataset. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDataset`] when the raw dataset has no
    /// elements.
    pub fn process(&self) -> Result<()> {
        self.results().map(|_| ())
    }

    /// The processed values, computed on first access.
    ///
    /// Each element is `adjust_range(select_transform(n))` for the raw
    /// element at the same index.
    pub fn results(&self) -> Result<&[f64]> {
        if let Some(values) = self.processed.get() {
            return Ok(values);
        }

        if self.raw.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let values: Vec<f64> = self
            .raw
            .iter()
            .map(|&n| adjust_range(select_transform(n)))
            .collect();

        Ok(self.processed.get_or_init(|| values))
    }

    /// Summary statistics over the processed values.
    pub fn stats(&self) -> Result<Statistics> {
        basic_stats(self.results()?)
    }
}
