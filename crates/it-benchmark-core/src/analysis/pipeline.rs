use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{BenchmarkCatalog, MetricBenchmark, METRIC_ORDER};
use crate::derivation::{compute_derived_metrics, ClientInputs};
use crate::positioning::{classify, get_delta_vs_median, normalize_score, select_insight};
use crate::types::*;

/// One metric positioned against its industry band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    pub metric_id: MetricId,
    pub name: String,
    pub category: Category,
    pub unit: Unit,
    pub format: ValueFormat,
    pub value: Decimal,
    pub top_quartile: Decimal,
    pub median: Decimal,
    pub bottom_quartile: Decimal,
    pub direction: Direction,
    pub quartile: Quartile,
    pub score: Score,
    pub delta: Decimal,
    pub delta_pct: Percent,
    pub insight: String,
    pub source: String,
}

/// Compose classification, score, delta and narrative for one value.
pub fn position_metric(benchmark: &MetricBenchmark, value: Decimal) -> MetricResult {
    let band = benchmark.band();
    let quartile = classify(&band, value);
    let score = normalize_score(&band, value);
    let delta = get_delta_vs_median(&band, value);
    let insight = select_insight(&benchmark.narrative, benchmark.direction, quartile);

    MetricResult {
        metric_id: benchmark.metric_id,
        name: benchmark.name.clone(),
        category: benchmark.category,
        unit: benchmark.unit,
        format: benchmark.format,
        value,
        top_quartile: benchmark.top_quartile,
        median: benchmark.median,
        bottom_quartile: benchmark.bottom_quartile,
        direction: benchmark.direction,
        quartile,
        score,
        delta: delta.delta,
        delta_pct: delta.delta_pct,
        insight: insight.to_string(),
        source: benchmark.source.clone(),
    }
}

/// Positioned results against the given catalog, in `METRIC_ORDER`.
///
/// Metrics without a derived value or without a band for the industry are
/// skipped; an unknown industry yields an empty list.
pub fn run_catalog_analysis(
    catalog: &BenchmarkCatalog,
    inputs: &ClientInputs,
    industry: &str,
) -> Vec<MetricResult> {
    let benchmarks = catalog.get_benchmarks(industry);
    let derived = compute_derived_metrics(inputs);

    let mut results = Vec::with_capacity(derived.len());
    for metric_id in METRIC_ORDER {
        let (Some(value), Some(benchmark)) = (derived.get(&metric_id), benchmarks.get(&metric_id))
        else {
            debug!(
                metric = %metric_id,
                derived = derived.contains_key(&metric_id),
                benchmarked = benchmarks.contains_key(&metric_id),
                "metric skipped"
            );
            continue;
        };
        results.push(position_metric(benchmark, *value));
    }

    debug!(industry, analyzed = results.len(), "analysis complete");
    results
}

/// Positioned results against the built-in catalog, in `METRIC_ORDER`.
pub fn run_full_analysis(inputs: &ClientInputs, industry: &str) -> Vec<MetricResult> {
    run_catalog_analysis(BenchmarkCatalog::builtin(), inputs, industry)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
