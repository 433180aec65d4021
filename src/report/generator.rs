//! Markdown and JSON report generation.
//!
//! This module renders the assembled [`DashboardReport`] as an executive
//! Markdown document (dashboard first, then one detail section per API)
//! or as pretty-printed JSON.

use crate::analysis::{
    filter_test_cases_by_status, percentage, PrioritizedRecommendation, SelectionMode,
    StatusCounts, StatusFilter, TestCaseSummary,
};
use crate::models::{EndpointResult, ResultBucket, StatusGroup, TestCase};
use crate::report::{ApiSection, DashboardReport, ReportMetadata};
use anyhow::Result;
use std::collections::BTreeMap;

/// What to include when rendering Markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render only this API's detail section.
    pub api: Option<String>,
    /// Status filter applied to the test case matrices.
    pub filter: StatusFilter,
    pub include_test_cases: bool,
    pub include_endpoints: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            api: None,
            filter: StatusFilter::All,
            include_test_cases: true,
            include_endpoints: true,
        }
    }
}

/// Generate a complete Markdown report.
pub fn generate_markdown_report(report: &DashboardReport, options: &RenderOptions) -> String {
    let mut output = String::new();

    // Title
    output.push_str(&format!("# {}\n\n", report.metadata.title));

    output.push_str(&generate_metadata_section(&report.metadata));

    if let Some(ref id) = options.api {
        if let Some(section) = report.api(id) {
            output.push_str(&generate_api_section(section, options));
        }
        output.push_str(&generate_footer());
        return output;
    }

    output.push_str(&generate_table_of_contents(report));
    output.push_str(&generate_kpi_section(report));
    output.push_str(&generate_health_section(&report.apis));
    output.push_str(&generate_test_case_summary_section(
        &report.test_case_summaries,
        &report.test_case_totals,
    ));
    output.push_str(&generate_distribution_section(
        &report.result_distribution,
        &report.status_distribution,
    ));
    output.push_str(&generate_recommendations_section(&report.recommendations));

    output.push_str("## API Details\n\n");
    for section in &report.apis {
        output.push_str(&generate_api_section(section, options));
    }

    output.push_str(&generate_footer());

    output
}

/// Generate the metadata section.
fn generate_metadata_section(metadata: &ReportMetadata) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    if !metadata.report_date.is_empty() {
        section.push_str(&format!("- **Report Period:** {}\n", metadata.report_date));
    }
    section.push_str(&format!(
        "- **Generated:** {}\n",
        metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!(
        "- **Recommendations:** {}\n",
        match metadata.recommendation_mode {
            SelectionMode::Curated => "curated",
            SelectionMode::Ranked => "ranked by priority",
        }
    ));
    section.push('\n');

    section
}

/// Anchor used for an API's detail heading.
fn anchor(id: &str) -> String {
    format!("api-{}", id.replace(['/', '.', ' ', '_'], "-").to_lowercase())
}

/// Escape text placed inside a Markdown table cell.
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

/// Generate the table of contents.
fn generate_table_of_contents(report: &DashboardReport) -> String {
    let mut toc = String::new();

    toc.push_str("## Table of Contents\n\n");
    toc.push_str("- [Key Indicators](#key-indicators)\n");
    toc.push_str("- [API Health](#api-health)\n");
    toc.push_str("- [Test Cases by API](#test-cases-by-api)\n");
    toc.push_str("- [Result Distribution](#result-distribution)\n");
    if !report.recommendations.is_empty() {
        toc.push_str("- [Priority Recommendations](#priority-recommendations)\n");
    }
    toc.push_str("- [API Details](#api-details)\n");

    for section in &report.apis {
        toc.push_str(&format!(
            "  - [{}](#{})\n",
            section.report.name,
            anchor(&section.report.id)
        ));
    }

    toc.push('\n');

    toc
}

/// Generate the headline KPI block.
fn generate_kpi_section(report: &DashboardReport) -> String {
    let metrics = &report.metrics;
    let mut section = String::new();

    section.push_str("## Key Indicators\n\n");
    section.push_str("| Tests Executed | Global Success Rate | APIs Evaluated | Average Coverage |\n");
    section.push_str("|:---:|:---:|:---:|:---:|\n");
    section.push_str(&format!(
        "| **{}** | **{}%** | **{}** | **{}%** |\n\n",
        metrics.total_tests,
        metrics.average_success_rate,
        metrics.total_apis,
        metrics.average_coverage
    ));

    if !report.apis.is_empty() {
        let names: Vec<_> = report
            .apis
            .iter()
            .map(|s| s.report.short_name.as_str())
            .collect();
        section.push_str(&format!("*APIs: {}*\n\n", names.join(", ")));
    }

    section
}

/// Generate the per-API health table.
fn generate_health_section(apis: &[ApiSection]) -> String {
    let mut section = String::new();

    section.push_str("## API Health\n\n");
    section.push_str("| API | Decision | Version | Success | Coverage | ✅ | ⚠️ | ❌ |\n");
    section.push_str("|:---|:---|:---:|:---:|:---:|:---:|:---:|:---:|\n");

    for api in apis {
        let report = &api.report;
        let summary = &api.test_case_summary;
        section.push_str(&format!(
            "| [{}](#{}) | {} | {} | {}% | {}% | {} | {} | {} |\n",
            report.short_name,
            anchor(&report.id),
            report.status_label(),
            cell(&report.version),
            report.metrics.success_rate,
            report.metrics.coverage_rate,
            summary.pass,
            summary.warning,
            summary.fail
        ));
    }
    section.push('\n');

    section
}

/// Generate the test case summary table with its totals row.
fn generate_test_case_summary_section(
    summaries: &[TestCaseSummary],
    totals: &StatusCounts,
) -> String {
    let mut section = String::new();

    section.push_str("## Test Cases by API\n\n");
    section.push_str("| API | All | Pass | Warning | Fail | Not Tested |\n");
    section.push_str("|:---|:---:|:---:|:---:|:---:|:---:|\n");

    for s in summaries {
        section.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            s.short_name, s.total, s.pass, s.warning, s.fail, s.not_tested
        ));
    }
    section.push_str(&format!(
        "| **Total** | **{}** | **{}** | **{}** | **{}** | **{}** |\n\n",
        totals.total, totals.pass, totals.warning, totals.fail, totals.not_tested
    ));

    section
}

/// Generate the endpoint result and release-decision distributions.
fn generate_distribution_section(
    results: &BTreeMap<ResultBucket, usize>,
    statuses: &BTreeMap<StatusGroup, usize>,
) -> String {
    let mut section = String::new();

    section.push_str("## Result Distribution\n\n");

    section.push_str("### Endpoint Results\n\n");
    if results.is_empty() {
        section.push_str("No endpoint results were recorded.\n\n");
    } else {
        let total: usize = results.values().sum();
        section.push_str("| Result | Endpoints | Share |\n");
        section.push_str("|:---|:---:|:---:|\n");
        for (bucket, count) in results {
            section.push_str(&format!(
                "| {} | {} | {}% |\n",
                bucket,
                count,
                percentage(*count, total)
            ));
        }
        section.push('\n');
    }

    if !statuses.is_empty() {
        section.push_str("### Release Decisions\n\n");
        section.push_str("| Decision | APIs |\n");
        section.push_str("|:---|:---:|\n");
        for (group, count) in statuses {
            section.push_str(&format!("| {} | {} |\n", group, count));
        }
        section.push('\n');
    }

    section
}

/// Generate the prioritized recommendations section.
fn generate_recommendations_section(recommendations: &[PrioritizedRecommendation]) -> String {
    if recommendations.is_empty() {
        return String::new();
    }

    let mut section = String::new();

    section.push_str("## Priority Recommendations\n\n");
    section.push_str(&format!(
        "The {} most important recommendations identified during the evaluation:\n\n",
        recommendations.len()
    ));

    for (i, p) in recommendations.iter().enumerate() {
        let rec = &p.recommendation;
        section.push_str(&format!(
            "{}. {} **{}** ({}, {}): {}\n",
            i + 1,
            rec.priority.emoji(),
            rec.title,
            p.api_short_name,
            rec.priority,
            rec.description
        ));
    }
    section.push('\n');

    section
}

/// Generate the detail section of one API.
fn generate_api_section(section: &ApiSection, options: &RenderOptions) -> String {
    let report = &section.report;
    let mut out = String::new();

    out.push_str(&format!("### {} {{#{}}}\n\n", report.name, anchor(&report.id)));
    out.push_str(&format!(
        "*Decision: **{}** | Environment: {} | Version: {} | Date: {}*\n\n",
        report.status_label(),
        report.environment,
        report.version,
        report.date
    ));

    if !report.swagger_url.is_empty() {
        out.push_str(&format!("- Swagger: <{}>\n", report.swagger_url));
        if let Some(ref v2) = report.swagger_url_v2 {
            out.push_str(&format!("- Swagger v2: <{}>\n", v2));
        }
        out.push('\n');
    }

    let endpoints = &section.endpoint_summary;
    out.push_str(&format!(
        "**Declared:** {} tests, {}% success, {}% coverage, {} negative | **Endpoints:** {} ✅ {} ⚠️ {} ❌\n\n",
        report.metrics.total_tests,
        report.metrics.success_rate,
        report.metrics.coverage_rate,
        report.metrics.negative_tests,
        endpoints.pass,
        endpoints.warning,
        endpoints.fail
    ));

    if !report.summary.is_empty() {
        out.push_str("#### Executive Summary\n\n");
        for line in &report.summary {
            out.push_str(&format!("- {}\n", line));
        }
        out.push('\n');
    }

    if !report.findings.is_empty() {
        out.push_str("#### Findings\n\n");
        out.push_str("| Area | Status |\n");
        out.push_str("|:---|:---|\n");
        for finding in &report.findings {
            out.push_str(&format!(
                "| {} | {} |\n",
                cell(&finding.category),
                cell(&finding.status)
            ));
        }
        out.push('\n');
    }

    if options.include_endpoints && !report.endpoint_results.is_empty() {
        out.push_str(&generate_endpoint_table(&report.endpoint_results));
    }

    if !report.recommendations.is_empty() {
        out.push_str("#### Recommendations\n\n");
        let mut recs: Vec<_> = report.recommendations.iter().collect();
        recs.sort_by(|a, b| b.priority.cmp(&a.priority));
        for rec in recs {
            out.push_str(&format!(
                "- {} **{}** [{}]: {}\n",
                rec.priority.emoji(),
                rec.title,
                rec.category,
                rec.description
            ));
        }
        out.push('\n');
    }

    if options.include_test_cases {
        out.push_str(&generate_test_case_matrix(
            &report.test_cases,
            &section.test_case_summary,
            options.filter,
        ));
    }

    out.push_str("---\n\n");

    out
}

/// Generate the endpoint results table.
fn generate_endpoint_table(endpoints: &[EndpointResult]) -> String {
    let mut table = String::new();

    table.push_str("#### Results by Endpoint\n\n");
    table.push_str("| Endpoint | Result | Status | Observations |\n");
    table.push_str("|:---|:---:|:---|:---|\n");
    for e in endpoints {
        table.push_str(&format!(
            "| `{}` | {} {} | {} | {} |\n",
            cell(&e.endpoint),
            e.result.emoji(),
            e.result,
            cell(&e.status),
            cell(&e.observations)
        ));
    }
    table.push('\n');

    table
}

/// Generate the test case matrix, restricted to `filter`.
fn generate_test_case_matrix(
    test_cases: &[TestCase],
    summary: &TestCaseSummary,
    filter: StatusFilter,
) -> String {
    let mut matrix = String::new();

    matrix.push_str(&format!("#### Test Cases ({} cases)\n\n", summary.total));
    matrix.push_str(&format!(
        "All ({}) · Pass ({}) · Warning ({}) · Fail ({}) · Not Tested ({})\n\n",
        summary.total, summary.pass, summary.warning, summary.fail, summary.not_tested
    ));

    let cases = filter_test_cases_by_status(test_cases, filter);
    if cases.clone().next().is_none() {
        matrix.push_str("No test cases match the selected filter.\n\n");
        return matrix;
    }

    matrix.push_str("| ID | Name | Category | Priority | Status | HTTP | Observations |\n");
    matrix.push_str("|:---|:---|:---|:---:|:---:|:---:|:---|\n");
    for tc in cases {
        matrix.push_str(&format!(
            "| {} | {} | {} | {} | {} {} | {} | {} |\n",
            tc.id,
            cell(&tc.name),
            cell(&tc.category),
            tc.priority,
            tc.status.emoji(),
            tc.status,
            tc.http_code.as_deref().map(cell).unwrap_or_else(|| "-".to_string()),
            tc.observations.as_deref().map(cell).unwrap_or_default()
        ));
    }
    matrix.push('\n');

    matrix
}

/// Generate the report footer.
fn generate_footer() -> String {
    "*Report generated by QADash*\n".to_string()
}

/// Generate a JSON report.
pub fn generate_json_report(report: &DashboardReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}

/// Generate a JSON document for a single API section.
pub fn generate_json_api_section(section: &ApiSection) -> Result<String> {
    serde_json::to_string_pretty(section).map_err(Into::into)
}
