//! The assembled dashboard: every aggregate the renderers need.

use crate::analysis::{
    aggregate_dashboard_metrics, api_comparison, api_status_distribution, endpoint_summary,
    global_result_distribution, per_api_test_case_summary, select_recommendations,
    test_case_summaries, ApiComparison, DashboardMetrics, PrioritizedRecommendation,
    SelectionMode, StatusCounts, TestCaseSummary,
};
use crate::models::{ApiReport, Dataset, ResultBucket, StatusGroup};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata about the generated report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub title: String,
    /// Reporting period declared by the dataset.
    pub report_date: String,
    /// When this rendering was produced.
    pub generated_at: DateTime<Utc>,
    /// How the prioritized recommendations were selected.
    pub recommendation_mode: SelectionMode,
}

/// One API's report together with its own summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSection {
    pub report: ApiReport,
    pub test_case_summary: TestCaseSummary,
    pub endpoint_summary: StatusCounts,
}

impl ApiSection {
    fn new(report: &ApiReport) -> Self {
        Self {
            report: report.clone(),
            test_case_summary: per_api_test_case_summary(report),
            endpoint_summary: endpoint_summary(report),
        }
    }
}

/// The complete dashboard report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    pub metadata: ReportMetadata,
    pub metrics: DashboardMetrics,
    pub test_case_summaries: Vec<TestCaseSummary>,
    pub test_case_totals: StatusCounts,
    /// Endpoint results of all APIs, by bucket. Empty buckets are absent.
    pub result_distribution: BTreeMap<ResultBucket, usize>,
    /// APIs by release-decision group. Empty groups are absent.
    pub status_distribution: BTreeMap<StatusGroup, usize>,
    pub api_comparison: Vec<ApiComparison>,
    pub recommendations: Vec<PrioritizedRecommendation>,
    pub apis: Vec<ApiSection>,
}

impl DashboardReport {
    /// Aggregate a validated dataset into a report.
    pub fn build(dataset: &Dataset, mode: SelectionMode, top: usize) -> Self {
        let summaries = test_case_summaries(&dataset.apis);
        let totals = TestCaseSummary::totals(&summaries);

        Self {
            metadata: ReportMetadata {
                title: dataset.title.clone(),
                report_date: dataset.report_date.clone(),
                generated_at: Utc::now(),
                recommendation_mode: mode,
            },
            metrics: aggregate_dashboard_metrics(&dataset.apis),
            test_case_summaries: summaries,
            test_case_totals: totals,
            result_distribution: global_result_distribution(&dataset.apis),
            status_distribution: api_status_distribution(&dataset.apis),
            api_comparison: api_comparison(&dataset.apis),
            recommendations: select_recommendations(dataset, mode, top),
            apis: dataset.apis.iter().map(ApiSection::new).collect(),
        }
    }

    /// Looks up the section of one API.
    pub fn api(&self, id: &str) -> Option<&ApiSection> {
        self.apis.iter().find(|section| section.report.id == id)
    }
}
