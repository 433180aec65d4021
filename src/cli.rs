//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::analysis::{SelectionMode, StatusFilter};
use crate::config::ReportFormat;
use clap::Parser;
use std::path::PathBuf;

/// QADash - Executive QA report generator
///
/// Aggregates API test campaign results (test cases, endpoint checks,
/// recommendations) into a dashboard with per-API detail sections.
///
/// Examples:
///   qadash
///   qadash --data fixtures/qa_report.json --format json --stdout
///   qadash --api payments --filter not-tested
///   qadash --recommendations ranked --top 3
///   qadash --min-success 80
///   qadash --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Dataset file (.json/.toml) or directory of per-API files
    ///
    /// Uses the embedded dataset when neither this nor the config file
    /// sets a path.
    #[arg(short, long, value_name = "PATH", env = "QADASH_DATA")]
    pub data: Option<PathBuf>,

    /// Output file path for the report
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write the report to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Output format (markdown, json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .qadash.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Render only the detail section of this API id
    #[arg(long, value_name = "ID")]
    pub api: Option<String>,

    /// Restrict the test case matrices to one status
    #[arg(long, default_value = "all", value_name = "STATUS")]
    pub filter: FilterArg,

    /// How prioritized recommendations are chosen (curated, ranked)
    #[arg(long, value_name = "MODE")]
    pub recommendations: Option<SelectionArg>,

    /// Number of prioritized recommendations to show
    #[arg(long, value_name = "COUNT")]
    pub top: Option<usize>,

    /// Leave the test case matrices out of the report
    #[arg(long)]
    pub no_test_cases: bool,

    /// Fail if the global success rate is below this percentage
    ///
    /// Useful for CI pipelines. Exit code 2 when the rate is lower.
    #[arg(long, value_name = "PERCENT")]
    pub min_success: Option<u32>,

    /// Load and validate the dataset, then exit
    #[arg(long)]
    pub validate_only: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .qadash.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatArg {
    /// Markdown format
    Markdown,
    /// JSON format
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Markdown => ReportFormat::Markdown,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

/// Recommendation selection flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SelectionArg {
    /// Featured list of the dataset
    Curated,
    /// Highest priority first
    Ranked,
}

impl From<SelectionArg> for SelectionMode {
    fn from(arg: SelectionArg) -> Self {
        match arg {
            SelectionArg::Curated => SelectionMode::Curated,
            SelectionArg::Ranked => SelectionMode::Ranked,
        }
    }
}

/// Test case status filter flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FilterArg {
    #[default]
    All,
    /// Pass and false positive
    Pass,
    Warning,
    Fail,
    NotTested,
}

impl From<FilterArg> for StatusFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => StatusFilter::All,
            FilterArg::Pass => StatusFilter::Pass,
            FilterArg::Warning => StatusFilter::Warning,
            FilterArg::Fail => StatusFilter::Fail,
            FilterArg::NotTested => StatusFilter::NotTested,
        }
    }
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if self.top == Some(0) {
            return Err("--top must be at least 1".to_string());
        }

        if let Some(min) = self.min_success {
            if min > 100 {
                return Err("--min-success must be between 0 and 100".to_string());
            }
        }

        if let Some(ref data) = self.data {
            if !data.exists() {
                return Err(format!("Dataset path does not exist: {}", data.display()));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
impl Args {
    /// Arguments equivalent to a bare `qadash` invocation.
    pub fn for_tests() -> Self {
        Args {
            data: None,
            output: None,
            stdout: false,
            format: None,
            config: None,
            api: None,
            filter: FilterArg::All,
            recommendations: None,
            top: None,
            no_test_cases: false,
            min_success: None,
            validate_only: false,
            verbose: false,
            quiet: false,
            init_config: false,
        }
    }
}
