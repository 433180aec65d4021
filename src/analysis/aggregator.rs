//! Test result aggregation and statistics.
//!
//! Pure functions that turn the immutable API reports into the counts,
//! rates and rankings shown on the dashboard. Nothing here reads the
//! embedded fixture; every function works on whatever reports it is given.

use crate::models::{
    ApiReport, Dataset, Recommendation, ResultBucket, StatusGroup, TestCase, TestStatus,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Returns true when a status counts as a successful outcome.
///
/// `FalsePositive` is reported as a pass everywhere.
pub fn is_success_status(status: TestStatus) -> bool {
    status.bucket() == ResultBucket::Pass
}

/// Rounded percentage of `part` over `whole`, 0 when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

/// Counts of a status sequence split into the four reporting buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pass: usize,
    pub warning: usize,
    pub fail: usize,
    pub not_tested: usize,
}

impl StatusCounts {
    /// Tallies a sequence of statuses.
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = TestStatus>,
    {
        let mut counts = Self::default();
        for status in statuses {
            counts.add(status);
        }
        counts
    }

    fn add(&mut self, status: TestStatus) {
        self.total += 1;
        match status.bucket() {
            ResultBucket::Pass => self.pass += 1,
            ResultBucket::Warning => self.warning += 1,
            ResultBucket::Fail => self.fail += 1,
            ResultBucket::NotTested => self.not_tested += 1,
        }
    }

    /// Returns the count of one bucket.
    pub fn get(&self, bucket: ResultBucket) -> usize {
        match bucket {
            ResultBucket::Pass => self.pass,
            ResultBucket::Warning => self.warning,
            ResultBucket::Fail => self.fail,
            ResultBucket::NotTested => self.not_tested,
        }
    }

    /// Rounded share of successful outcomes, in percent.
    pub fn success_rate(&self) -> u32 {
        percentage(self.pass, self.total)
    }

    fn merge(&mut self, other: &StatusCounts) {
        self.total += other.total;
        self.pass += other.pass;
        self.warning += other.warning;
        self.fail += other.fail;
        self.not_tested += other.not_tested;
    }
}

/// Test case counts of one API, as shown in the per-API summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseSummary {
    pub api_id: String,
    pub short_name: String,
    pub total: usize,
    pub pass: usize,
    pub warning: usize,
    pub fail: usize,
    pub not_tested: usize,
}

impl TestCaseSummary {
    /// Sums a set of per-API summaries into the footer row.
    pub fn totals(summaries: &[TestCaseSummary]) -> StatusCounts {
        let mut totals = StatusCounts::default();
        for summary in summaries {
            totals.merge(&summary.counts());
        }
        totals
    }

    /// Returns the bucket counts of this summary.
    pub fn counts(&self) -> StatusCounts {
        StatusCounts {
            total: self.total,
            pass: self.pass,
            warning: self.warning,
            fail: self.fail,
            not_tested: self.not_tested,
        }
    }
}

/// Summarize the test cases of a single API.
pub fn per_api_test_case_summary(report: &ApiReport) -> TestCaseSummary {
    let counts = StatusCounts::from_statuses(report.test_cases.iter().map(|tc| tc.status));

    TestCaseSummary {
        api_id: report.id.clone(),
        short_name: report.short_name.clone(),
        total: counts.total,
        pass: counts.pass,
        warning: counts.warning,
        fail: counts.fail,
        not_tested: counts.not_tested,
    }
}

/// Summarize the test cases of every API, in input order.
pub fn test_case_summaries(reports: &[ApiReport]) -> Vec<TestCaseSummary> {
    reports.iter().map(per_api_test_case_summary).collect()
}

/// Summarize the endpoint results of a single API.
pub fn endpoint_summary(report: &ApiReport) -> StatusCounts {
    StatusCounts::from_statuses(report.endpoint_results.iter().map(|e| e.result))
}

/// Consolidate endpoint results of all APIs into bucket counts.
///
/// Buckets with no entries are left out of the map.
pub fn global_result_distribution(reports: &[ApiReport]) -> BTreeMap<ResultBucket, usize> {
    let mut dist: BTreeMap<ResultBucket, usize> = BTreeMap::new();

    for result in reports.iter().flat_map(|r| &r.endpoint_results) {
        *dist.entry(result.result.bucket()).or_default() += 1;
    }

    dist
}

/// Count APIs per release-decision group, omitting empty groups.
pub fn api_status_distribution(reports: &[ApiReport]) -> BTreeMap<StatusGroup, usize> {
    let mut dist: BTreeMap<StatusGroup, usize> = BTreeMap::new();

    for report in reports {
        *dist.entry(report.status.group()).or_default() += 1;
    }

    dist
}

/// Headline figures of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_apis: usize,
    pub total_tests: usize,
    /// Merged-pass share over every test case, in percent.
    pub average_success_rate: u32,
    /// Mean of the declared per-API coverage rates, in percent.
    pub average_coverage: u32,
}

/// Compute the dashboard headline figures.
pub fn aggregate_dashboard_metrics(reports: &[ApiReport]) -> DashboardMetrics {
    let totals = TestCaseSummary::totals(&test_case_summaries(reports));

    let average_coverage = if reports.is_empty() {
        0
    } else {
        let sum: f64 = reports.iter().map(|r| r.metrics.coverage_rate).sum();
        (sum / reports.len() as f64).round() as u32
    };

    DashboardMetrics {
        total_apis: reports.len(),
        total_tests: totals.total,
        average_success_rate: totals.success_rate(),
        average_coverage,
    }
}

/// Declared success/coverage figures of one API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiComparison {
    pub short_name: String,
    pub success_rate: f64,
    pub coverage_rate: f64,
}

/// Side-by-side declared metrics of every API, in input order.
pub fn api_comparison(reports: &[ApiReport]) -> Vec<ApiComparison> {
    reports
        .iter()
        .map(|r| ApiComparison {
            short_name: r.short_name.clone(),
            success_rate: r.metrics.success_rate,
            coverage_rate: r.metrics.coverage_rate,
        })
        .collect()
}

/// Rank recommendations of all APIs by priority, keeping their owners.
///
/// The sort is stable: entries of equal priority keep report order, then
/// recommendation order.
pub fn rank_recommendations_with_owner(
    reports: &[ApiReport],
    n: usize,
) -> Vec<(&ApiReport, &Recommendation)> {
    let mut ranked: Vec<_> = reports
        .iter()
        .flat_map(|r| r.recommendations.iter().map(move |rec| (r, rec)))
        .collect();

    ranked.sort_by(|a, b| b.1.priority.cmp(&a.1.priority));
    ranked.truncate(n);
    ranked
}

/// Get the top N recommendations by priority (critical first).
pub fn rank_recommendations(reports: &[ApiReport], n: usize) -> Vec<&Recommendation> {
    rank_recommendations_with_owner(reports, n)
        .into_iter()
        .map(|(_, rec)| rec)
        .collect()
}

/// How the prioritized recommendations are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Use the dataset's featured list, in its declared order.
    #[default]
    Curated,
    /// Compute the list from priorities.
    Ranked,
}

/// A recommendation together with the API it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrioritizedRecommendation {
    pub api_id: String,
    pub api_short_name: String,
    pub recommendation: Recommendation,
}

impl PrioritizedRecommendation {
    fn new(report: &ApiReport, recommendation: &Recommendation) -> Self {
        Self {
            api_id: report.id.clone(),
            api_short_name: report.short_name.clone(),
            recommendation: recommendation.clone(),
        }
    }
}

/// Select at most `top` recommendations for the dashboard.
///
/// A curated selection on a dataset without a featured list falls back to
/// the ranked one.
pub fn select_recommendations(
    dataset: &Dataset,
    mode: SelectionMode,
    top: usize,
) -> Vec<PrioritizedRecommendation> {
    if mode == SelectionMode::Ranked || dataset.featured_recommendations.is_empty() {
        return rank_recommendations_with_owner(&dataset.apis, top)
            .into_iter()
            .map(|(report, rec)| PrioritizedRecommendation::new(report, rec))
            .collect();
    }

    dataset
        .featured_recommendations
        .iter()
        .filter_map(|reference| {
            let found = dataset
                .api(&reference.api)
                .and_then(|report| report.recommendation(reference.id).map(|rec| (report, rec)));
            if found.is_none() {
                warn!(
                    "Featured recommendation {}#{} not found, skipping",
                    reference.api, reference.id
                );
            }
            found
        })
        .take(top)
        .map(|(report, rec)| PrioritizedRecommendation::new(report, rec))
        .collect()
}

/// Status filter of the test case matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    #[default]
    All,
    Pass,
    Warning,
    Fail,
    NotTested,
}

impl StatusFilter {
    /// Returns true when a case with `status` passes this filter.
    pub fn matches(self, status: TestStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pass => is_success_status(status),
            StatusFilter::Warning => status.bucket() == ResultBucket::Warning,
            StatusFilter::Fail => status.bucket() == ResultBucket::Fail,
            StatusFilter::NotTested => status.bucket() == ResultBucket::NotTested,
        }
    }
}

/// Lazily filter test cases by status, preserving their order.
///
/// The returned iterator is `Clone`, so it can be walked more than once.
pub fn filter_test_cases_by_status(
    test_cases: &[TestCase],
    filter: StatusFilter,
) -> impl Iterator<Item = &TestCase> + Clone {
    test_cases
        .iter()
        .filter(move |tc| filter.matches(tc.status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ApiMetrics, ApiStatus, EndpointResult, Priority, RecommendationRef,
    };

    fn create_test_case(id: &str, status: TestStatus) -> TestCase {
        TestCase {
            id: id.to_string(),
            name: format!("Case {}", id),
            category: "Functional".to_string(),
            priority: Priority::Medium,
            description: "Test description".to_string(),
            expected_result: "HTTP 200".to_string(),
            actual_result: None,
            status,
            http_code: None,
            observations: None,
        }
    }

    fn create_endpoint(result: TestStatus) -> EndpointResult {
        EndpointResult {
            endpoint: "GET /v1/items".to_string(),
            method: "GET".to_string(),
            result,
            status: "HTTP 200".to_string(),
            observations: String::new(),
        }
    }

    fn create_recommendation(id: u32, priority: Priority) -> Recommendation {
        Recommendation {
            id,
            priority,
            category: "Security".to_string(),
            title: format!("Recommendation {}", id),
            description: "Fix it".to_string(),
        }
    }

    fn create_report(id: &str, statuses: &[TestStatus]) -> ApiReport {
        ApiReport {
            id: id.to_string(),
            name: format!("API {}", id),
            short_name: id.to_string(),
            swagger_url: String::new(),
            swagger_url_v2: None,
            status: ApiStatus::Go,
            status_label: None,
            environment: "QA".to_string(),
            date: "2026-02-01".to_string(),
            version: "1.0".to_string(),
            summary: Vec::new(),
            findings: Vec::new(),
            metrics: ApiMetrics::default(),
            endpoint_results: Vec::new(),
            recommendations: Vec::new(),
            test_cases: statuses
                .iter()
                .enumerate()
                .map(|(i, s)| create_test_case(&format!("TC-{:03}", i + 1), *s))
                .collect(),
            color_override: None,
        }
    }

    fn statuses(pass: usize, false_positive: usize, warning: usize, fail: usize, not_tested: usize) -> Vec<TestStatus> {
        let mut out = Vec::new();
        out.extend(std::iter::repeat(TestStatus::Pass).take(pass));
        out.extend(std::iter::repeat(TestStatus::FalsePositive).take(false_positive));
        out.extend(std::iter::repeat(TestStatus::Warning).take(warning));
        out.extend(std::iter::repeat(TestStatus::Fail).take(fail));
        out.extend(std::iter::repeat(TestStatus::NotTested).take(not_tested));
        out
    }

    #[test]
    fn test_is_success_status() {
        assert!(is_success_status(TestStatus::Pass));
        assert!(is_success_status(TestStatus::FalsePositive));
        assert!(!is_success_status(TestStatus::Warning));
        assert!(!is_success_status(TestStatus::Fail));
        assert!(!is_success_status(TestStatus::NotTested));
    }

    #[test]
    fn test_per_api_summary_merges_false_positive() {
        let report = create_report("clientes", &statuses(5, 1, 0, 0, 2));

        let summary = per_api_test_case_summary(&report);

        assert_eq!(summary.api_id, "clientes");
        assert_eq!(summary.total, 8);
        assert_eq!(summary.pass, 6);
        assert_eq!(summary.warning, 0);
        assert_eq!(summary.fail, 0);
        assert_eq!(summary.not_tested, 2);
    }

    #[test]
    fn test_per_api_summary_partitions_every_case() {
        let reports = vec![
            create_report("a", &statuses(3, 2, 4, 1, 0)),
            create_report("b", &statuses(0, 0, 0, 7, 3)),
            create_report("c", &[]),
        ];

        for report in &reports {
            let s = per_api_test_case_summary(report);
            assert_eq!(s.pass + s.warning + s.fail + s.not_tested, report.test_cases.len());
            assert_eq!(s.total, report.test_cases.len());
        }
    }

    #[test]
    fn test_per_api_summary_empty() {
        let summary = per_api_test_case_summary(&create_report("empty", &[]));
        assert_eq!(summary.counts(), StatusCounts::default());
    }

    #[test]
    fn test_summary_totals() {
        let summaries = test_case_summaries(&[
            create_report("a", &statuses(1, 1, 1, 1, 1)),
            create_report("b", &statuses(2, 0, 0, 1, 0)),
        ]);

        let totals = TestCaseSummary::totals(&summaries);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].api_id, "b");
        assert_eq!(totals.total, 8);
        assert_eq!(totals.pass, 4);
        assert_eq!(totals.fail, 2);
    }

    #[test]
    fn test_dashboard_metrics_empty() {
        let metrics = aggregate_dashboard_metrics(&[]);
        assert_eq!(metrics.total_apis, 0);
        assert_eq!(metrics.total_tests, 0);
        assert_eq!(metrics.average_success_rate, 0);
        assert_eq!(metrics.average_coverage, 0);
    }

    #[test]
    fn test_dashboard_metrics_reports_without_cases() {
        let mut report = create_report("a", &[]);
        report.metrics.coverage_rate = 40.0;

        let metrics = aggregate_dashboard_metrics(&[report]);

        assert_eq!(metrics.total_tests, 0);
        assert_eq!(metrics.average_success_rate, 0);
        assert_eq!(metrics.average_coverage, 40);
    }

    #[test]
    fn test_dashboard_metrics_two_reports() {
        let mut first = create_report("a", &statuses(5, 1, 0, 0, 2));
        first.metrics.coverage_rate = 85.0;
        let mut second = create_report("b", &statuses(28, 2, 3, 2, 1));
        second.metrics.coverage_rate = 90.0;

        let metrics = aggregate_dashboard_metrics(&[first, second]);

        assert_eq!(metrics.total_apis, 2);
        assert_eq!(metrics.total_tests, 44);
        // round(100 * 36 / 44) = round(81.8)
        assert_eq!(metrics.average_success_rate, 82);
        // round(87.5)
        assert_eq!(metrics.average_coverage, 88);
    }

    #[test]
    fn test_false_positive_counts_like_pass() {
        let with_pass = create_report("a", &[TestStatus::Pass, TestStatus::Fail]);
        let with_fp = create_report("a", &[TestStatus::FalsePositive, TestStatus::Fail]);

        assert_eq!(
            per_api_test_case_summary(&with_pass),
            per_api_test_case_summary(&with_fp)
        );
        assert_eq!(
            aggregate_dashboard_metrics(&[with_pass]),
            aggregate_dashboard_metrics(&[with_fp])
        );
    }

    #[test]
    fn test_global_distribution_omits_zero_buckets() {
        let mut a = create_report("a", &[]);
        a.endpoint_results = vec![
            create_endpoint(TestStatus::Pass),
            create_endpoint(TestStatus::FalsePositive),
            create_endpoint(TestStatus::Warning),
        ];
        let mut b = create_report("b", &[]);
        b.endpoint_results = vec![create_endpoint(TestStatus::Pass)];
        // Test cases never contribute to the endpoint distribution.
        b.test_cases = vec![create_test_case("TC-1", TestStatus::Fail)];

        let dist = global_result_distribution(&[a, b]);

        assert_eq!(dist.get(&ResultBucket::Pass), Some(&3));
        assert_eq!(dist.get(&ResultBucket::Warning), Some(&1));
        assert!(!dist.contains_key(&ResultBucket::Fail));
        assert!(!dist.contains_key(&ResultBucket::NotTested));
        assert!(dist.values().all(|count| *count > 0));
    }

    #[test]
    fn test_global_distribution_empty() {
        assert!(global_result_distribution(&[]).is_empty());
    }

    #[test]
    fn test_endpoint_summary() {
        let mut report = create_report("a", &[]);
        report.endpoint_results = vec![
            create_endpoint(TestStatus::FalsePositive),
            create_endpoint(TestStatus::Fail),
            create_endpoint(TestStatus::NotTested),
        ];

        let counts = endpoint_summary(&report);

        assert_eq!(counts.total, 3);
        assert_eq!(counts.pass, 1);
        assert_eq!(counts.get(ResultBucket::Fail), 1);
        assert_eq!(counts.get(ResultBucket::NotTested), 1);
        assert_eq!(counts.success_rate(), 33);
    }

    #[test]
    fn test_api_status_distribution() {
        let mut a = create_report("a", &[]);
        a.status = ApiStatus::Go;
        let mut b = create_report("b", &[]);
        b.status = ApiStatus::GoWithObservations;
        let mut c = create_report("c", &[]);
        c.status = ApiStatus::Conditional;

        let dist = api_status_distribution(&[a, b, c]);

        assert_eq!(dist.get(&StatusGroup::Go), Some(&2));
        assert_eq!(dist.get(&StatusGroup::Conditional), Some(&1));
        assert!(!dist.contains_key(&StatusGroup::Pending));
    }

    #[test]
    fn test_rank_recommendations_critical_first() {
        let mut report = create_report("a", &[]);
        report.recommendations = vec![
            create_recommendation(1, Priority::Low),
            create_recommendation(2, Priority::Critical),
            create_recommendation(3, Priority::Medium),
        ];

        let top = rank_recommendations(std::slice::from_ref(&report), 1);

        assert_eq!(top.len(), 1);
        assert_eq!(top[0].id, 2);
        assert_eq!(top[0].priority, Priority::Critical);
    }

    #[test]
    fn test_rank_recommendations_is_stable() {
        let mut a = create_report("a", &[]);
        a.recommendations = vec![
            create_recommendation(1, Priority::High),
            create_recommendation(2, Priority::Low),
            create_recommendation(3, Priority::High),
        ];
        let mut b = create_report("b", &[]);
        b.recommendations = vec![create_recommendation(1, Priority::High)];

        let reports = [a, b];
        let ranked = rank_recommendations_with_owner(&reports, 10);

        let order: Vec<_> = ranked.iter().map(|(r, rec)| (r.id.as_str(), rec.id)).collect();
        assert_eq!(order, vec![("a", 1), ("a", 3), ("b", 1), ("a", 2)]);
    }

    #[test]
    fn test_rank_recommendations_n_larger_than_input() {
        let mut report = create_report("a", &[]);
        report.recommendations = vec![create_recommendation(1, Priority::Low)];

        assert_eq!(rank_recommendations(std::slice::from_ref(&report), 5).len(), 1);
        assert!(rank_recommendations(&[], 5).is_empty());
    }

    fn create_dataset() -> Dataset {
        let mut a = create_report("a", &[]);
        a.recommendations = vec![
            create_recommendation(1, Priority::Low),
            create_recommendation(2, Priority::Critical),
        ];
        let mut b = create_report("b", &[]);
        b.recommendations = vec![create_recommendation(1, Priority::High)];

        Dataset {
            title: "QA".to_string(),
            report_date: "February 2026".to_string(),
            apis: vec![a, b],
            featured_recommendations: vec![
                RecommendationRef { api: "a".to_string(), id: 1 },
                RecommendationRef { api: "missing".to_string(), id: 9 },
                RecommendationRef { api: "b".to_string(), id: 1 },
            ],
        }
    }

    #[test]
    fn test_select_curated_keeps_declared_order() {
        let dataset = create_dataset();

        let selected = select_recommendations(&dataset, SelectionMode::Curated, 5);

        let order: Vec<_> = selected
            .iter()
            .map(|p| (p.api_id.as_str(), p.recommendation.id))
            .collect();
        assert_eq!(order, vec![("a", 1), ("b", 1)]);
        assert_eq!(selected[1].api_short_name, "b");
    }

    #[test]
    fn test_select_ranked_and_fallback() {
        let mut dataset = create_dataset();

        let ranked = select_recommendations(&dataset, SelectionMode::Ranked, 2);
        assert_eq!(ranked[0].recommendation.priority, Priority::Critical);
        assert_eq!(ranked[1].recommendation.priority, Priority::High);

        dataset.featured_recommendations.clear();
        let fallback = select_recommendations(&dataset, SelectionMode::Curated, 1);
        assert_eq!(fallback.len(), 1);
        assert_eq!(fallback[0].recommendation.id, 2);
    }

    #[test]
    fn test_filter_all_preserves_sequence() {
        let report = create_report("a", &statuses(2, 1, 1, 1, 1));

        let filtered: Vec<_> =
            filter_test_cases_by_status(&report.test_cases, StatusFilter::All).collect();

        assert_eq!(filtered.len(), report.test_cases.len());
        for (got, expected) in filtered.iter().zip(&report.test_cases) {
            assert_eq!(*got, expected);
        }
    }

    #[test]
    fn test_filter_pass_includes_false_positive() {
        let cases = vec![
            create_test_case("1", TestStatus::Fail),
            create_test_case("2", TestStatus::FalsePositive),
            create_test_case("3", TestStatus::Pass),
        ];

        let ids: Vec<_> = filter_test_cases_by_status(&cases, StatusFilter::Pass)
            .map(|tc| tc.id.as_str())
            .collect();

        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_filter_is_restartable() {
        let cases = vec![
            create_test_case("1", TestStatus::NotTested),
            create_test_case("2", TestStatus::Pass),
            create_test_case("3", TestStatus::NotTested),
        ];

        let iter = filter_test_cases_by_status(&cases, StatusFilter::NotTested);
        let first: Vec<_> = iter.clone().map(|tc| tc.id.clone()).collect();
        let second: Vec<_> = iter.map(|tc| tc.id.clone()).collect();

        assert_eq!(first, vec!["1", "3"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_api_comparison_uses_declared_metrics() {
        let mut a = create_report("a", &statuses(1, 0, 0, 1, 0));
        a.metrics.success_rate = 92.5;
        a.metrics.coverage_rate = 80.0;
        let b = create_report("b", &[]);

        let rows = api_comparison(&[a, b]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].short_name, "a");
        assert_eq!(rows[0].success_rate, 92.5);
        assert_eq!(rows[0].coverage_rate, 80.0);
        assert_eq!(rows[1].success_rate, 0.0);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(5, 5), 100);
    }
}
