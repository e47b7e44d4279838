use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use it_benchmark_core::analysis::pipeline::position_metric;
use it_benchmark_core::analysis::report::analyze_with_catalog;
use it_benchmark_core::derivation::validate_inputs;
use it_benchmark_core::{
    compute_derived_metrics, BenchmarkError, BenchmarkRequest, ClientInputs, MetricId,
};

use crate::input;

/// Arguments for the full benchmark analysis
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Industry key (overrides the industry carried in the inputs)
    #[arg(long)]
    pub industry: Option<String>,

    /// Path to a JSON benchmark catalog (defaults to the built-in one)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Company name
    #[arg(long)]
    pub company_name: Option<String>,

    /// Annual revenue
    #[arg(long)]
    pub revenue: Option<Decimal>,

    /// Total employees
    #[arg(long, alias = "employees")]
    pub total_employees: Option<Decimal>,

    /// Current-year IT budget
    #[arg(long)]
    pub it_budget: Option<Decimal>,

    /// Prior-year IT budget
    #[arg(long)]
    pub it_budget_prior_year: Option<Decimal>,

    /// IT full-time equivalents
    #[arg(long)]
    pub it_ftes: Option<Decimal>,
}

/// Arguments for metric derivation
#[derive(Args)]
pub struct DeriveArgs {
    /// Path to JSON or YAML input file
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for positioning one metric value
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct PositionArgs {
    /// Industry key
    #[arg(long, default_value = "financial_services")]
    pub industry: String,

    /// Metric id, e.g. it_spend_pct_revenue
    #[arg(long)]
    pub metric: MetricId,

    /// Observed value in the metric's unit
    #[arg(long)]
    pub value: Decimal,

    /// Path to a JSON benchmark catalog (defaults to the built-in one)
    #[arg(long)]
    pub catalog: Option<String>,
}

fn read_inputs(path: Option<&str>) -> Result<Option<ClientInputs>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return Ok(Some(input::file::read_document(path)?));
    }
    Ok(input::stdin::read_client_inputs()?)
}

fn required_flag(value: Option<Decimal>, flag: &str) -> Result<Option<Decimal>, BenchmarkError> {
    match value {
        Some(v) => Ok(Some(v)),
        None => Err(BenchmarkError::InvalidInput {
            field: flag.to_string(),
            reason: "required (or provide --input / stdin)".into(),
        }),
    }
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = match read_inputs(args.input.as_deref())? {
        Some(inputs) => inputs,
        None => ClientInputs {
            company_name: args.company_name,
            revenue: required_flag(args.revenue, "--revenue")?,
            total_employees: required_flag(args.total_employees, "--total-employees")?,
            it_budget: required_flag(args.it_budget, "--it-budget")?,
            it_budget_prior_year: args.it_budget_prior_year,
            it_ftes: args.it_ftes,
            ..Default::default()
        },
    };

    let catalog = input::file::read_catalog(args.catalog.as_deref())?;
    let request = BenchmarkRequest {
        industry: args.industry,
        inputs,
    };
    let result = analyze_with_catalog(&catalog, &request)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_derive(args: DeriveArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = read_inputs(args.input.as_deref())?
        .ok_or_else(|| BenchmarkError::InvalidInput {
            field: "--input".into(),
            reason: "a JSON/YAML file or stdin record is required for derivation".into(),
        })?;

    let derived = compute_derived_metrics(&inputs);
    Ok(serde_json::json!({
        "result": derived,
        "warnings": validate_inputs(&inputs),
    }))
}

pub fn run_position(args: PositionArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let catalog = input::file::read_catalog(args.catalog.as_deref())?;
    catalog.require_industry(&args.industry)?;

    let benchmarks = catalog.get_benchmarks(&args.industry);
    let benchmark = benchmarks.get(&args.metric).ok_or_else(|| {
        format!(
            "{} has no benchmark band for industry '{}'",
            args.metric, args.industry
        )
    })?;

    let result = position_metric(benchmark, args.value);
    Ok(serde_json::to_value(result)?)
}
