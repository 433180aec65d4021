//! Dataset loading and validation.
//!
//! The dataset is either the fixture compiled into the binary or a
//! JSON/TOML file (or a directory of per-API files) supplied at start-up.
//! Every dataset goes through [`validate`] once before it is aggregated.

use crate::models::{ApiReport, Dataset};
use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Fixture compiled into the binary.
const EMBEDDED_FIXTURE: &str = include_str!("../fixtures/qa_report.json");

/// Data-entry inconsistencies that make a dataset unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error("dataset contains no API reports")]
    Empty,

    #[error("duplicate API id: {0}")]
    DuplicateApiId(String),

    #[error("duplicate test case id {test_case} in API {api}")]
    DuplicateTestCaseId { api: String, test_case: String },

    #[error("duplicate recommendation id {recommendation} in API {api}")]
    DuplicateRecommendationId { api: String, recommendation: u32 },

    #[error("featured recommendation {api}#{id} does not exist")]
    UnknownFeaturedRecommendation { api: String, id: u32 },

    #[error("{field} of API {api} must be between 0 and 100, got {value}")]
    PercentageOutOfRange {
        api: String,
        field: &'static str,
        value: f64,
    },
}

/// Parse the fixture compiled into the binary.
pub fn embedded_dataset() -> Result<Dataset> {
    serde_json::from_str(EMBEDDED_FIXTURE).context("Failed to parse embedded fixture")
}

/// Load a dataset from a file or a directory of per-API files.
///
/// `title` and `report_date` are only used for directories, which carry no
/// dataset-level metadata of their own.
pub fn load_dataset(path: &Path, title: &str, report_date: &str) -> Result<Dataset> {
    if path.is_dir() {
        let apis = load_api_directory(path)?;
        info!("Loaded {} API reports from {}", apis.len(), path.display());
        return Ok(Dataset {
            title: title.to_string(),
            report_date: report_date.to_string(),
            apis,
            featured_recommendations: Vec::new(),
        });
    }

    let dataset: Dataset = parse_file(path)?;
    info!("Loaded dataset from {}", path.display());
    Ok(dataset)
}

/// Parse every `*.json` / `*.toml` file below `dir` as one API report,
/// in file name order.
fn load_api_directory(dir: &Path) -> Result<Vec<ApiReport>> {
    let mut apis = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to read fixture directory: {}", dir.display()))?;
        let path = entry.path();

        if !entry.file_type().is_file() || !is_fixture_file(path) {
            debug!("Skipping {}", path.display());
            continue;
        }

        apis.push(parse_file(path)?);
    }

    Ok(apis)
}

fn is_fixture_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("json") | Some("toml")
    )
}

/// Parse a JSON or TOML file, chosen by extension.
fn parse_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture: {}", path.display()))?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse fixture: {}", path.display())),
        Some("toml") => toml::from_str(&content)
            .with_context(|| format!("Failed to parse fixture: {}", path.display())),
        _ => bail!(
            "Unsupported fixture format (expected .json or .toml): {}",
            path.display()
        ),
    }
}

/// Check a dataset for data-entry inconsistencies.
///
/// Stops at the first problem found.
pub fn validate(dataset: &Dataset) -> Result<(), DatasetError> {
    if dataset.apis.is_empty() {
        return Err(DatasetError::Empty);
    }

    let mut api_ids = HashSet::new();
    for api in &dataset.apis {
        if !api_ids.insert(api.id.as_str()) {
            return Err(DatasetError::DuplicateApiId(api.id.clone()));
        }
        validate_api(api)?;
    }

    for reference in &dataset.featured_recommendations {
        let exists = dataset
            .api(&reference.api)
            .is_some_and(|api| api.recommendation(reference.id).is_some());
        if !exists {
            return Err(DatasetError::UnknownFeaturedRecommendation {
                api: reference.api.clone(),
                id: reference.id,
            });
        }
    }

    Ok(())
}

fn validate_api(api: &ApiReport) -> Result<(), DatasetError> {
    let mut test_case_ids = HashSet::new();
    for tc in &api.test_cases {
        if !test_case_ids.insert(tc.id.as_str()) {
            return Err(DatasetError::DuplicateTestCaseId {
                api: api.id.clone(),
                test_case: tc.id.clone(),
            });
        }
    }

    let mut recommendation_ids = HashSet::new();
    for rec in &api.recommendations {
        if !recommendation_ids.insert(rec.id) {
            return Err(DatasetError::DuplicateRecommendationId {
                api: api.id.clone(),
                recommendation: rec.id,
            });
        }
    }

    for (field, value) in [
        ("success_rate", api.metrics.success_rate),
        ("coverage_rate", api.metrics.coverage_rate),
    ] {
        if !(0.0..=100.0).contains(&value) {
            return Err(DatasetError::PercentageOutOfRange {
                api: api.id.clone(),
                field,
                value,
            });
        }
    }

    Ok(())
}
