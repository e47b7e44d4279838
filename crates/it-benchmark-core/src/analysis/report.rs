//! Benchmark report assembly.
//!
//! Covers:
//! 1. **Overall positioning** -- rating bands on the average score.
//! 2. **Key findings** -- strengths, concerns and improvement opportunities.
//! 3. **Category breakdown** -- per-category summaries in display order.
//! 4. **Display text** -- unit-aware value and delta rendering.
//! 5. **Entry point** -- selector validation, input warnings, output envelope.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::pipeline::{run_catalog_analysis, MetricResult};
use super::summary::{get_summary_stats, AnalysisSummary};
use crate::catalog::{BenchmarkCatalog, CATEGORIES};
use crate::derivation::{validate_inputs, ClientInputs};
use crate::types::*;
use crate::BenchmarkResult;

/// Industry used when neither the request nor the inputs name one.
pub const DEFAULT_INDUSTRY: &str = "financial_services";

const NO_METRICS_WARNING: &str = "No metrics could be computed. Please check the input data.";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A benchmarking request: raw inputs plus the industry selector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchmarkRequest {
    #[serde(default)]
    pub industry: Option<String>,
    pub inputs: ClientInputs,
}

impl BenchmarkRequest {
    /// Explicit selector, then the one carried in the inputs, then the default.
    pub fn resolved_industry(&self) -> &str {
        self.industry
            .as_deref()
            .or(self.inputs.industry.as_deref())
            .unwrap_or(DEFAULT_INDUSTRY)
    }
}

/// Overall rating derived from the average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallRating {
    Strong,
    Solid,
    RoomForImprovement,
    SignificantGaps,
}

impl OverallRating {
    pub fn from_score(average_score: Score) -> Self {
        if average_score >= dec!(75) {
            OverallRating::Strong
        } else if average_score >= dec!(50) {
            OverallRating::Solid
        } else if average_score >= dec!(25) {
            OverallRating::RoomForImprovement
        } else {
            OverallRating::SignificantGaps
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            OverallRating::Strong => "Strong overall positioning: you outperform most peers.",
            OverallRating::Solid => {
                "Solid positioning: performing at or above the industry median."
            }
            OverallRating::RoomForImprovement => {
                "Room for improvement: several metrics trail the median."
            }
            OverallRating::SignificantGaps => {
                "Significant gaps: most metrics are below industry benchmarks."
            }
        }
    }
}

/// Rating with its explanatory sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallPositioning {
    pub rating: OverallRating,
    pub message: String,
}

/// One metric called out in the key findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub metric_id: MetricId,
    pub name: String,
    pub display_value: String,
    pub insight: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyFindings {
    /// Top-quartile metrics.
    pub strengths: Vec<Finding>,
    /// Bottom-quartile metrics.
    pub concerns: Vec<Finding>,
    /// Below-median metrics.
    pub opportunities: Vec<Finding>,
}

impl KeyFindings {
    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty() && self.concerns.is_empty() && self.opportunities.is_empty()
    }
}

/// Results of one category, summarized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub metric_ids: Vec<MetricId>,
    pub summary: AnalysisSummary,
}

/// Full benchmarking report for one organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub company_name: Option<String>,
    pub industry: String,
    pub industry_name: Option<String>,
    pub sub_vertical: Option<String>,
    pub results: Vec<MetricResult>,
    pub summary: AnalysisSummary,
    pub positioning: OverallPositioning,
    pub findings: KeyFindings,
    pub categories: Vec<CategoryBreakdown>,
}

// ---------------------------------------------------------------------------
// Display text
// ---------------------------------------------------------------------------

/// Render a value with its unit: `$35,000`, `7.0%`, `1:70`.
pub fn format_value(value: Decimal, unit: Unit, format: ValueFormat) -> String {
    match unit {
        Unit::Currency => format!("${}", format.apply(value)),
        Unit::Percentage => format!("{}%", format.apply(value)),
        Unit::Ratio => format!("1:{}", ValueFormat::fixed(0).apply(value)),
        Unit::Unitless => format.apply(value),
    }
}

/// Describe a delta percentage relative to the median in words.
pub fn describe_delta(delta_pct: Percent) -> String {
    if delta_pct == Decimal::ZERO {
        return "at the industry median".to_string();
    }
    let side = if delta_pct > Decimal::ZERO {
        "above"
    } else {
        "below"
    };
    format!(
        "{}% {} the industry median",
        ValueFormat::fixed(1).apply(delta_pct.abs()),
        side
    )
}

impl MetricResult {
    pub fn display_value(&self) -> String {
        format_value(self.value, self.unit, self.format)
    }
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

fn findings_for(results: &[MetricResult], quartile: Quartile) -> Vec<Finding> {
    results
        .iter()
        .filter(|r| r.quartile == quartile)
        .map(|r| Finding {
            metric_id: r.metric_id,
            name: r.name.clone(),
            display_value: r.display_value(),
            insight: r.insight.clone(),
        })
        .collect()
}

fn category_breakdown(results: &[MetricResult]) -> Vec<CategoryBreakdown> {
    CATEGORIES
        .iter()
        .filter_map(|&category| {
            let members: Vec<&MetricResult> =
                results.iter().filter(|r| r.category == category).collect();
            if members.is_empty() {
                return None;
            }
            Some(CategoryBreakdown {
                category,
                metric_ids: members.iter().map(|r| r.metric_id).collect(),
                summary: get_summary_stats(members.iter().copied()),
            })
        })
        .collect()
}

/// Assemble the report for `industry` against `catalog`.
pub fn build_report(
    catalog: &BenchmarkCatalog,
    inputs: &ClientInputs,
    industry: &str,
) -> BenchmarkReport {
    let results = run_catalog_analysis(catalog, inputs, industry);
    let summary = get_summary_stats(&results);
    let rating = OverallRating::from_score(summary.average_score);

    BenchmarkReport {
        company_name: inputs.company_name.clone(),
        industry: industry.to_string(),
        industry_name: catalog.industry(industry).map(|p| p.name.clone()),
        sub_vertical: inputs.sub_vertical.clone(),
        findings: KeyFindings {
            strengths: findings_for(&results, Quartile::TopQuartile),
            concerns: findings_for(&results, Quartile::BottomQuartile),
            opportunities: findings_for(&results, Quartile::BelowMedian),
        },
        categories: category_breakdown(&results),
        positioning: OverallPositioning {
            rating,
            message: rating.message().to_string(),
        },
        summary,
        results,
    }
}

/// Run a request against the built-in catalog.
pub fn analyze(request: &BenchmarkRequest) -> BenchmarkResult<ComputationOutput<BenchmarkReport>> {
    analyze_with_catalog(BenchmarkCatalog::builtin(), request)
}

/// Run a request against `catalog`. The industry selector must be known to
/// the catalog; everything else degrades to warnings and a shorter report.
pub fn analyze_with_catalog(
    catalog: &BenchmarkCatalog,
    request: &BenchmarkRequest,
) -> BenchmarkResult<ComputationOutput<BenchmarkReport>> {
    let start = Instant::now();
    let industry = request.resolved_industry();
    catalog.require_industry(industry)?;

    let mut warnings = validate_inputs(&request.inputs);
    let report = build_report(catalog, &request.inputs, industry);
    if report.results.is_empty() {
        warnings.push(NO_METRICS_WARNING.to_string());
    }

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "industry": industry,
        "baseline_year": catalog.version.baseline_year,
        "score_anchors": "100 at top quartile, 50 at median, 0 at bottom quartile",
        "ties": "boundary values resolve to the better bucket",
        "missing_denominators": "metric omitted",
    });

    Ok(with_metadata(
        "Quartile positioning against industry IT benchmarks",
        &assumptions,
        warnings,
        &catalog.version.version,
        elapsed,
        report,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BenchmarkError;

    fn mid_size_bank() -> ClientInputs {
        ClientInputs {
            company_name: Some("First Prairie Bank".into()),
            industry: Some("financial_services".into()),
            sub_vertical: Some("Banking".into()),
            revenue: Some(dec!(1_000_000_000)),
            total_employees: Some(dec!(2_000)),
            it_budget: Some(dec!(70_000_000)),
            it_ftes: Some(dec!(200)),
            cloud_spend: Some(dec!(14_000_000)),
            system_availability: Some(dec!(99.99)),
            it_attrition_rate: Some(dec!(25)),
            ..Default::default()
        }
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(OverallRating::from_score(dec!(75)), OverallRating::Strong);
        assert_eq!(OverallRating::from_score(dec!(74.9)), OverallRating::Solid);
        assert_eq!(OverallRating::from_score(dec!(50)), OverallRating::Solid);
        assert_eq!(
            OverallRating::from_score(dec!(25)),
            OverallRating::RoomForImprovement
        );
        assert_eq!(
            OverallRating::from_score(dec!(0)),
            OverallRating::SignificantGaps
        );
    }

    #[test]
    fn test_format_value_by_unit() {
        assert_eq!(
            format_value(dec!(35000), Unit::Currency, ValueFormat::grouped(0)),
            "$35,000"
        );
        assert_eq!(
            format_value(dec!(7), Unit::Percentage, ValueFormat::fixed(1)),
            "7.0%"
        );
        assert_eq!(
            format_value(dec!(70.4), Unit::Ratio, ValueFormat::fixed(0)),
            "1:70"
        );
        assert_eq!(
            format_value(dec!(1.25), Unit::Unitless, ValueFormat::fixed(2)),
            "1.25"
        );
    }

    #[test]
    fn test_describe_delta() {
        assert_eq!(describe_delta(dec!(12.34)), "12.3% above the industry median");
        assert_eq!(describe_delta(dec!(-11.39)), "11.4% below the industry median");
        assert_eq!(describe_delta(Decimal::ZERO), "at the industry median");
    }

    #[test]
    fn test_report_findings() {
        let report = build_report(
            BenchmarkCatalog::builtin(),
            &mid_size_bank(),
            "financial_services",
        );
        // 99.99% availability is top quartile
        assert!(report
            .findings
            .strengths
            .iter()
            .any(|f| f.metric_id == MetricId::SystemAvailability));
        // 25% attrition is bottom quartile
        let attrition = report
            .findings
            .concerns
            .iter()
            .find(|f| f.metric_id == MetricId::ItAttritionRate)
            .unwrap();
        assert_eq!(attrition.display_value, "25%");
        // 20% cloud share is at the bottom threshold, so below median
        assert!(report
            .findings
            .opportunities
            .iter()
            .any(|f| f.metric_id == MetricId::CloudPctBudget));
    }

    #[test]
    fn test_report_metadata() {
        let report = build_report(
            BenchmarkCatalog::builtin(),
            &mid_size_bank(),
            "financial_services",
        );
        assert_eq!(report.company_name.as_deref(), Some("First Prairie Bank"));
        assert_eq!(report.industry_name.as_deref(), Some("Financial Services"));
        assert_eq!(report.sub_vertical.as_deref(), Some("Banking"));
        assert_eq!(report.summary.total, report.results.len());
        assert_eq!(
            report.positioning.rating,
            OverallRating::from_score(report.summary.average_score)
        );
    }

    #[test]
    fn test_category_breakdown_order_and_counts() {
        let report = build_report(
            BenchmarkCatalog::builtin(),
            &mid_size_bank(),
            "financial_services",
        );
        let categories: Vec<Category> = report.categories.iter().map(|c| c.category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
        let total: usize = report.categories.iter().map(|c| c.summary.total).sum();
        assert_eq!(total, report.results.len());
        // No allocation inputs were provided
        assert!(!categories.contains(&Category::BudgetAllocation));
    }

    #[test]
    fn test_resolved_industry_precedence() {
        let mut request = BenchmarkRequest {
            industry: None,
            inputs: ClientInputs::default(),
        };
        assert_eq!(request.resolved_industry(), "financial_services");
        request.inputs.industry = Some("healthcare".into());
        assert_eq!(request.resolved_industry(), "healthcare");
        request.industry = Some("financial_services".into());
        assert_eq!(request.resolved_industry(), "financial_services");
    }

    #[test]
    fn test_analyze_envelope() {
        let request = BenchmarkRequest {
            industry: None,
            inputs: mid_size_bank(),
        };
        let out = analyze(&request).unwrap();
        assert_eq!(out.result.industry, "financial_services");
        assert_eq!(out.metadata.catalog_version, "2024.1");
        assert_eq!(out.assumptions["baseline_year"], 2024);
        assert!(!out.warnings.iter().any(|w| w == NO_METRICS_WARNING));
    }

    #[test]
    fn test_analyze_unknown_industry_is_error() {
        let request = BenchmarkRequest {
            industry: Some("aerospace".into()),
            inputs: mid_size_bank(),
        };
        let err = analyze(&request).unwrap_err();
        assert!(matches!(err, BenchmarkError::UnknownIndustry(ref k) if k == "aerospace"));
    }

    #[test]
    fn test_analyze_empty_inputs_warns() {
        let request = BenchmarkRequest {
            industry: Some("healthcare".into()),
            inputs: ClientInputs::default(),
        };
        let out = analyze(&request).unwrap();
        assert!(out.result.results.is_empty());
        assert_eq!(out.result.summary, AnalysisSummary::default());
        assert!(out.result.findings.is_empty());
        assert!(out.result.categories.is_empty());
        assert_eq!(out.warnings.last().map(String::as_str), Some(NO_METRICS_WARNING));
    }
}
