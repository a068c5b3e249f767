//! Fixed-format text report over analysis results.

use crate::analyzers::analyzer::{DEFAULT_OUTLIER_THRESHOLD, DataAnalyzer};
use crate::error::Result;

/// Renders statistics, outliers (at the default threshold), and bucket
/// counts into a multi-section text report.
///
/// Section order is fixed: statistics, outliers, grouping. Values are
/// formatted to two decimal places.
pub fn render_report(analyzer: &DataAnalyzer) -> Result<String> {
    let stats = analyzer.processor().stats()?;
    let outliers = analyzer.find_outliers(DEFAULT_OUTLIER_THRESHOLD)?;
    let groups = analyzer.group_by_range()?;

    let mut lines = Vec::new();
    lines.push("=== Statistical Report ===".to_string());
    lines.push(format!("Mean: {:.2}", stats.mean));
    lines.push(format!("Max: {:.2}", stats.max));
    lines.push(format!("Min: {:.2}", stats.min));
    lines.push(format!("Std Dev: {:.2}", stats.std_dev));
    lines.push("\n=== Outliers ===".to_string());
    for outlier in &outliers {
        lines.push(format!("Index {}: {:.2}", outlier.index, outlier.value));
    }
    lines.push("\n=== Grouping ===".to_string());
    lines.push(format!("Low values (count): {}", groups.low.len()));
    lines.push(format!("Medium values (count): {}", groups.medium.len()));
    lines.push(format!("High values (count): {}", groups.high.len()));

    Ok(lines.join("\n"))
}
