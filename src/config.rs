//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.qadash.toml` files.

use crate::analysis::SelectionMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".qadash.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Dataset settings.
    #[serde(default)]
    pub data: DataConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default output file path.
    #[serde(default = "default_output")]
    pub output: String,

    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            verbose: false,
        }
    }
}

fn default_output() -> String {
    "qa_report.md".to_string()
}

/// Dataset settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Fixture file or directory. The embedded fixture is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Report title, used when loading a directory of API files.
    #[serde(default = "default_title")]
    pub title: String,

    /// Report date, used when loading a directory of API files.
    #[serde(default)]
    pub report_date: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: None,
            title: default_title(),
            report_date: String::new(),
        }
    }
}

fn default_title() -> String {
    "Executive QA Report".to_string()
}

/// Output format of the generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

/// Report generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format.
    #[serde(default)]
    pub format: ReportFormat,

    /// Curated (featured list) or ranked recommendations.
    #[serde(default)]
    pub recommendations: SelectionMode,

    /// Number of prioritized recommendations on the dashboard.
    #[serde(default = "default_top_recommendations")]
    pub top_recommendations: usize,

    /// Include the test case matrix in each API section.
    #[serde(default = "default_true")]
    pub include_test_cases: bool,

    /// Include the endpoint table in each API section.
    #[serde(default = "default_true")]
    pub include_endpoints: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            recommendations: SelectionMode::default(),
            top_recommendations: default_top_recommendations(),
            include_test_cases: true,
            include_endpoints: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_top_recommendations() -> usize {
    5
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(DEFAULT_CONFIG_FILE);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings, but only
    /// where the CLI provides an explicit value.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref output) = args.output {
            self.general.output = output.display().to_string();
        }
        if let Some(ref data) = args.data {
            self.data.path = Some(data.clone());
        }
        if let Some(format) = args.format {
            self.report.format = format.into();
        }
        if let Some(mode) = args.recommendations {
            self.report.recommendations = mode.into();
        }
        if let Some(top) = args.top {
            self.report.top_recommendations = top;
        }
        if args.no_test_cases {
            self.report.include_test_cases = false;
        }

        // Flags always override
        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
