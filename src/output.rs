//! Persistence for profiling runs: the text report sink and a CSV
//! run history, plus JSON rendering of a single run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analyzers::types::ValueGroups;
use crate::error::Result;
use crate::stats::Statistics;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// One profiling run flattened into a single row: when it ran, what
/// produced the dataset, and the headline analysis numbers.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunRecord {
    pub timestamp: DateTime<Utc>,
    pub generator: String,
    pub dataset_len: usize,

    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub std_dev: f64,

    pub outlier_count: usize,
    pub low_count: usize,
    pub medium_count: usize,
    pub high_count: usize,
}

impl RunRecord {
    pub fn new(
        generator: &str,
        dataset_len: usize,
        stats: &Statistics,
        outlier_count: usize,
        groups: &ValueGroups,
    ) -> Self {
        RunRecord {
            timestamp: Utc::now(),
            generator: generator.to_string(),
            dataset_len,
            mean: stats.mean,
            max: stats.max,
            min: stats.min,
            std_dev: stats.std_dev,
            outlier_count,
            low_count: groups.low.len(),
            medium_count: groups.medium.len(),
            high_count: groups.high.len(),
        }
    }
}

/// Writes the report text verbatim, replacing any prior contents.
pub fn write_report(path: &str, report: &str) -> Result<()> {
    debug!(path, bytes = report.len(), "Writing report");
    std::fs::write(path, report)?;
    Ok(())
}

/// Logs the headline numbers of a run: which generator produced the
/// dataset, how the values spread across buckets, and how many
/// outliers fell out.
pub fn log_summary(record: &RunRecord) {
    info!(
        generator = %record.generator,
        dataset_len = record.dataset_len,
        mean = record.mean,
        std_dev = record.std_dev,
        outliers = record.outlier_count,
        low = record.low_count,
        medium = record.medium_count,
        high = record.high_count,
        "Run summary"
    );
}

/// Renders a run record as pretty-printed JSON, a machine-readable
/// companion to the text report.
pub fn render_json(record: &RunRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Appends one run to a CSV history file, creating it on first use.
///
/// Every profiling invocation contributes a single row, so the file
/// accumulates a run-over-run history of dataset shapes.
pub fn append_record(path: &str, record: &RunRecord) -> Result<()> {
    let is_new = !Path::new(path).exists();
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    // Header row only when the file is created, or appended rows
    // would stop lining up with the columns
    let mut writer = WriterBuilder::new().has_headers(is_new).from_writer(file);
    writer.serialize(record)?;
    writer.flush()?;

    debug!(path, is_new, "Run appended to history");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(name)
    }

    fn record_with(outlier_count: usize, medium: &[f64]) -> RunRecord {
        let stats = Statistics {
            mean: 16.0,
            max: 100.0,
            min: 1.6,
            std_dev: 2.5,
        };
        let groups = ValueGroups {
            low: vec![1.6],
            medium: medium.to_vec(),
            high: vec![100.0],
        };
        RunRecord::new("fibonacci", 2 + medium.len(), &stats, outlier_count, &groups)
    }

    fn read_history(path: &Path) -> Vec<RunRecord> {
        let mut reader = csv::Reader::from_path(path).unwrap();
        reader.deserialize().map(|row| row.unwrap()).collect()
    }

    #[test]
    fn test_render_json_carries_run_fields() {
        let json = render_json(&record_with(3, &[16.0])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["generator"], "fibonacci");
        assert_eq!(value["dataset_len"], 3);
        assert_eq!(value["mean"], 16.0);
        assert_eq!(value["outlier_count"], 3);
        assert_eq!(value["medium_count"], 1);
    }

    #[test]
    fn test_write_report_overwrites() {
        let path = temp_file("dataset_profiler_test_report.txt");
        let _ = fs::remove_file(&path); // clean up any prior run

        write_report(path.to_str().unwrap(), "first version, longer text").unwrap();
        write_report(path.to_str().unwrap(), "second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "second");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_append_record_round_trips_fields() {
        let path = temp_file("dataset_profiler_test_roundtrip.csv");
        let _ = fs::remove_file(&path);

        append_record(path.to_str().unwrap(), &record_with(2, &[16.0, 14.4])).unwrap();

        let rows = read_history(&path);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].generator, "fibonacci");
        assert_eq!(rows[0].dataset_len, 4);
        assert_eq!(rows[0].mean, 16.0);
        assert_eq!(rows[0].std_dev, 2.5);
        assert_eq!(rows[0].outlier_count, 2);
        assert_eq!(rows[0].low_count, 1);
        assert_eq!(rows[0].medium_count, 2);
        assert_eq!(rows[0].high_count, 1);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_append_record_accumulates_history() {
        let path = temp_file("dataset_profiler_test_history.csv");
        let _ = fs::remove_file(&path);

        append_record(path.to_str().unwrap(), &record_with(0, &[16.0])).unwrap();
        append_record(path.to_str().unwrap(), &record_with(5, &[])).unwrap();

        // Both rows survive with their own values, under one header
        let rows = read_history(&path);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].outlier_count, 0);
        assert_eq!(rows[1].outlier_count, 5);
        assert_eq!(rows[1].medium_count, 0);

        let header_count = fs::read_to_string(&path)
            .unwrap()
            .lines()
            .filter(|l| l.starts_with("timestamp"))
            .count();
        assert_eq!(header_count, 1);

        fs::remove_file(&path).unwrap();
    }
}
