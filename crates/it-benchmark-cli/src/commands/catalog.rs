use clap::Args;
use serde_json::{json, Value};

use it_benchmark_core::catalog::MetricBenchmark;

use crate::input;

/// Arguments for listing industries
#[derive(Args)]
pub struct IndustriesArgs {
    /// Path to a JSON benchmark catalog (defaults to the built-in one)
    #[arg(long)]
    pub catalog: Option<String>,
}

/// Arguments for showing an industry's benchmark rows
#[derive(Args)]
pub struct BenchmarksArgs {
    /// Industry key
    #[arg(long, default_value = "financial_services")]
    pub industry: String,

    /// Path to a JSON benchmark catalog (defaults to the built-in one)
    #[arg(long)]
    pub catalog: Option<String>,
}

/// Arguments for SIC code lookup
#[derive(Args)]
pub struct SicArgs {
    /// Four-digit SIC code
    pub code: String,

    /// Path to a JSON benchmark catalog (defaults to the built-in one)
    #[arg(long)]
    pub catalog: Option<String>,
}

pub fn run_industries(args: IndustriesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let catalog = input::file::read_catalog(args.catalog.as_deref())?;
    Ok(serde_json::to_value(&catalog.industries)?)
}

pub fn run_benchmarks(args: BenchmarksArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let catalog = input::file::read_catalog(args.catalog.as_deref())?;
    catalog.require_industry(&args.industry)?;

    let rows: Vec<MetricBenchmark> = catalog
        .get_benchmarks(&args.industry)
        .into_values()
        .collect();
    Ok(serde_json::to_value(rows)?)
}

pub fn run_sic(args: SicArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let catalog = input::file::read_catalog(args.catalog.as_deref())?;
    let industry = catalog.industry_for_sic(&args.code);
    if industry.is_none() {
        tracing::warn!(sic_code = %args.code, "SIC code maps to no catalog industry");
    }
    Ok(json!({
        "sic_code": args.code,
        "industry": industry,
    }))
}
