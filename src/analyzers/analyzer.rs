use crate::analyzers::types::{Outlier, ValueGroups};
use crate::error::Result;
use crate::processor::DataProcessor;

/// Deviation multiplier above which a value counts as an outlier.
pub const DEFAULT_OUTLIER_THRESHOLD: f64 = 2.0;

/// Derives outliers and range buckets from a processor's results.
///
/// Borrows the processor rather than copying its data; statistics are
/// recomputed on each call.
pub struct DataAnalyzer<'a> {
    processor: &'a DataProcessor,
}

impl<'a> DataAnalyzer<'a> {
    pub fn new(processor: &'a DataProcessor) -> Self {
        Self { processor }
    }

    pub fn processor(&self) -> &DataProcessor {
        self.processor
    }

    /// Finds values whose deviation from the mean exceeds
    /// `threshold * std_dev`, in dataset order.
    pub fn find_outliers(&self, threshold: f64) -> Result<Vec<Outlier>> {
        let results = self.processor.results()?;
        let stats = self.processor.stats()?;

        Ok(results
            .iter()
            .enumerate()
            .filter(|&(_, &value)| (value - stats.mean).abs() > threshold * stats.std_dev)
            .map(|(index, &value)| Outlier { index, value })
            .collect())
    }

    /// Partitions the processed values into low, medium, and high
    /// buckets. The partition is exhaustive and disjoint.
    pub fn group_by_range(&self) -> Result<ValueGroups> {
        let results = self.processor.results()?;

        let mut groups = ValueGroups::default();
        for &value in results {
            if value < 10.0 {
                groups.low.push(value);
            } else if value <= 50.0 {
                groups.medium.push(value);
            } else {
                groups.high.push(value);
            }
        }

        Ok(groups)
    }
}
