//! CLI entry point for the dataset profiler.
//!
//! Provides subcommands for profiling a synthetic dataset (generate,
//! transform, analyze, report) and for running the standalone compound
//! operation on user input.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use dataset_profiler::{
    analyzers::analyzer::{DEFAULT_OUTLIER_THRESHOLD, DataAnalyzer},
    analyzers::report::render_report,
    generator::{generate_fibonacci, generate_random_data},
    input::parse_candidate,
    mathop,
    output::{RunRecord, append_record, log_summary, render_json, write_report},
    processor::DataProcessor,
};
use std::ffi::OsStr;
use std::io::BufRead;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "dataset_profiler")]
#[command(about = "A tool to profile synthetic integer datasets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GeneratorKind {
    /// Uniform random integers in [min, max]
    Random,
    /// The first `size` Fibonacci terms
    Fibonacci,
}

impl GeneratorKind {
    fn label(self) -> &'static str {
        match self {
            GeneratorKind::Random => "random",
            GeneratorKind::Fibonacci => "fibonacci",
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a dataset, analyze it, and write a text report
    Profile {
        /// Dataset generator to use
        #[arg(short, long, value_enum, default_value = "random")]
        generator: GeneratorKind,

        /// Number of elements to generate
        #[arg(short, long, default_value_t = 150)]
        size: usize,

        /// Lower bound for random generation (inclusive)
        #[arg(long, default_value_t = -50, allow_negative_numbers = true)]
        min: i64,

        /// Upper bound for random generation (inclusive)
        #[arg(long, default_value_t = 50, allow_negative_numbers = true)]
        max: i64,

        /// File to write the report to
        #[arg(short, long, default_value = "data_report.txt")]
        output: String,

        /// Optional: CSV file to append run statistics to
        #[arg(long)]
        history: Option<String>,

        /// Log run statistics as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Read a number from stdin and run the compound operation on it
    Compute,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/dataset_profiler.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("dataset_profiler.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Profile {
            generator,
            size,
            min,
            max,
            output,
            history,
            json,
        } => {
            profile(generator, size, min, max, &output, history.as_deref(), json)?;
        }
        Commands::Compute => {
            compute_from_stdin()?;
        }
    }

    Ok(())
}

/// Runs the full pipeline: generate, process, analyze, render, write.
#[tracing::instrument(skip(history, json), fields(generator = generator.label()))]
fn profile(
    generator: GeneratorKind,
    size: usize,
    min: i64,
    max: i64,
    output: &str,
    history: Option<&str>,
    json: bool,
) -> Result<()> {
    let data = match generator {
        GeneratorKind::Random => generate_random_data(size, min, max)?,
        GeneratorKind::Fibonacci => generate_fibonacci(size),
    };
    info!(len = data.len(), "Dataset generated");

    let processor = DataProcessor::new(data);
    processor.process()?;

    let analyzer = DataAnalyzer::new(&processor);
    let report = render_report(&analyzer)?;
    println!("{report}");

    write_report(output, &report)?;
    info!(path = output, "Report written");

    let stats = processor.stats()?;
    let outliers = analyzer.find_outliers(DEFAULT_OUTLIER_THRESHOLD)?;
    let groups = analyzer.group_by_range()?;
    let record = RunRecord::new(
        generator.label(),
        processor.raw_data().len(),
        &stats,
        outliers.len(),
        &groups,
    );
    log_summary(&record);

    if let Some(path) = history {
        append_record(path, &record)?;
        info!(path, "History record appended");
    }

    if json {
        println!("{}", render_json(&record)?);
    }

    Ok(())
}

/// Reads one candidate integer from stdin and logs the compound
/// operation result. Invalid input is reported, not fatal.
fn compute_from_stdin() -> Result<()> {
    println!("Enter a non-negative integer:");

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;

    match parse_candidate(&line) {
        Ok(n) => {
            info!(value = n, "Input accepted");
            let result = mathop::compute(n, n + 5, Some(n - 3))?;
            println!("Compound operation result: {result:.2}");
        }
        Err(e) => {
            error!(error = %e, "Rejected input");
        }
    }

    Ok(())
}
