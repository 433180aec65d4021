//! Data models for the QA report.
//!
//! This module contains the closed status/priority enumerations and the
//! immutable records (test cases, endpoint results, recommendations, API
//! reports) that the aggregator and the report generator consume.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single test case or endpoint check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestStatus {
    Pass,
    Warning,
    Fail,
    NotTested,
    /// Reported as a failure by tooling but confirmed correct on review.
    FalsePositive,
}

impl TestStatus {
    /// Maps the status onto the four reporting buckets.
    ///
    /// `FalsePositive` lands in [`ResultBucket::Pass`]; every count in the
    /// report goes through this mapping.
    pub fn bucket(self) -> ResultBucket {
        match self {
            TestStatus::Pass | TestStatus::FalsePositive => ResultBucket::Pass,
            TestStatus::Warning => ResultBucket::Warning,
            TestStatus::Fail => ResultBucket::Fail,
            TestStatus::NotTested => ResultBucket::NotTested,
        }
    }

    /// Returns the badge label used in tables.
    pub fn label(&self) -> &'static str {
        match self {
            TestStatus::Pass => "PASS",
            TestStatus::Warning => "WARNING",
            TestStatus::Fail => "FAIL",
            TestStatus::NotTested => "N/T",
            TestStatus::FalsePositive => "FALSE POSITIVE",
        }
    }

    /// Returns an emoji representation of the status.
    pub fn emoji(&self) -> &'static str {
        match self {
            TestStatus::Pass => "✅",
            TestStatus::Warning => "⚠️",
            TestStatus::Fail => "❌",
            TestStatus::NotTested => "➖",
            TestStatus::FalsePositive => "☑️",
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One of the four buckets every status is counted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultBucket {
    Pass,
    Warning,
    Fail,
    NotTested,
}

impl fmt::Display for ResultBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultBucket::Pass => write!(f, "Pass"),
            ResultBucket::Warning => write!(f, "Warning"),
            ResultBucket::Fail => write!(f, "Fail"),
            ResultBucket::NotTested => write!(f, "N/T"),
        }
    }
}

/// Priority of a test case or recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
            Priority::Critical => write!(f, "Critical"),
        }
    }
}

impl Priority {
    /// Returns an emoji representation of the priority.
    pub fn emoji(&self) -> &'static str {
        match self {
            Priority::Low => "🟢",
            Priority::Medium => "🟡",
            Priority::High => "🟠",
            Priority::Critical => "🔴",
        }
    }
}

/// Release decision for an evaluated API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiStatus {
    #[serde(rename = "go")]
    Go,
    #[serde(rename = "go-observaciones")]
    GoWithObservations,
    #[serde(rename = "condicionada")]
    Conditional,
    #[serde(rename = "pendiente")]
    Pending,
}

impl ApiStatus {
    /// Returns the badge label for the release decision.
    pub fn label(&self) -> &'static str {
        match self {
            ApiStatus::Go => "GO",
            ApiStatus::GoWithObservations => "GO WITH OBSERVATIONS",
            ApiStatus::Conditional => "CONDITIONAL APPROVAL",
            ApiStatus::Pending => "PENDING",
        }
    }

    /// Collapses the decision into the three groups of the status chart.
    pub fn group(self) -> StatusGroup {
        match self {
            ApiStatus::Go | ApiStatus::GoWithObservations => StatusGroup::Go,
            ApiStatus::Conditional => StatusGroup::Conditional,
            ApiStatus::Pending => StatusGroup::Pending,
        }
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Grouping of [`ApiStatus`] used by the status distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusGroup {
    Go,
    Conditional,
    Pending,
}

impl fmt::Display for StatusGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusGroup::Go => write!(f, "GO/Observations"),
            StatusGroup::Conditional => write!(f, "Conditional"),
            StatusGroup::Pending => write!(f, "Pending"),
        }
    }
}

/// Display accent for an API card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorOverride {
    Blue,
    Red,
    Green,
    Yellow,
    Orange,
    Gray,
}

/// A single documented test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// Identifier, unique within the owning API report.
    pub id: String,
    pub name: String,
    pub category: String,
    pub priority: Priority,
    pub description: String,
    pub expected_result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_result: Option<String>,
    pub status: TestStatus,
    /// HTTP code observed, kept as text ("200", "400/500", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
}

/// Result of exercising one endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointResult {
    /// Endpoint path, usually prefixed with the method ("GET /v1/...").
    pub endpoint: String,
    pub method: String,
    pub result: TestStatus,
    /// Free-text HTTP status summary.
    pub status: String,
    #[serde(default)]
    pub observations: String,
}

/// An improvement recommendation attached to an API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: u32,
    pub priority: Priority,
    pub category: String,
    pub title: String,
    pub description: String,
}

/// A (category, status) pair from the executive findings list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub category: String,
    pub status: String,
}

/// Declared metrics of an API, taken as given input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiMetrics {
    pub total_tests: usize,
    /// Declared success rate, in percent.
    pub success_rate: f64,
    /// Declared coverage rate, in percent.
    pub coverage_rate: f64,
    pub negative_tests: usize,
}

/// One evaluated API's complete QA result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiReport {
    pub id: String,
    pub name: String,
    pub short_name: String,
    #[serde(default)]
    pub swagger_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swagger_url_v2: Option<String>,
    pub status: ApiStatus,
    /// Overrides the default badge label of `status` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_label: Option<String>,
    pub environment: String,
    pub date: String,
    pub version: String,
    #[serde(default)]
    pub summary: Vec<String>,
    #[serde(default)]
    pub findings: Vec<Finding>,
    pub metrics: ApiMetrics,
    #[serde(default)]
    pub endpoint_results: Vec<EndpointResult>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_override: Option<ColorOverride>,
}

impl ApiReport {
    /// Returns the label to show for the release decision.
    pub fn status_label(&self) -> &str {
        self.status_label
            .as_deref()
            .unwrap_or_else(|| self.status.label())
    }

    /// Looks up a recommendation by its id.
    pub fn recommendation(&self, id: u32) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| r.id == id)
    }
}

/// Reference to a recommendation of a specific API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecommendationRef {
    /// Id of the owning API report.
    pub api: String,
    /// Id of the recommendation within that report.
    pub id: u32,
}

/// The complete, read-only input of a report run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub title: String,
    pub report_date: String,
    pub apis: Vec<ApiReport>,
    /// Editorially selected recommendations, in display order.
    #[serde(default)]
    pub featured_recommendations: Vec<RecommendationRef>,
}

impl Dataset {
    /// Looks up an API report by id.
    pub fn api(&self, id: &str) -> Option<&ApiReport> {
        self.apis.iter().find(|api| api.id == id)
    }
}
