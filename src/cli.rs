//! CLI argument parsing for the cronista demo workload

use clap::{Parser, ValueEnum};

/// Output format for region reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Column-aligned text reports (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

/// Which report(s) the demo emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportMode {
    /// Frequency-combined view followed by the chronological view
    Both,
    /// Frequency-combined view only (merged siblings, duration-descending)
    Sorted,
    /// Chronological view only (original call order with annotations)
    All,
}

#[derive(Parser, Debug)]
#[command(name = "cronista")]
#[command(version)]
#[command(about = "Explicit-instrumentation wall-clock profiler demo", long_about = None)]
pub struct Cli {
    /// Base sleep per demo region in milliseconds
    #[arg(long = "sleep-ms", value_name = "MS", default_value = "20")]
    pub sleep_ms: u64,

    /// Which report(s) to emit
    #[arg(long = "report", value_enum, default_value = "both")]
    pub report: ReportMode,

    /// Output format (text or json; json always carries the raw tree and
    /// adds the combined view unless --report all)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,
}
