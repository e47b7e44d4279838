pub mod error;
pub mod types;

pub mod analysis;
pub mod catalog;
pub mod derivation;
pub mod positioning;

pub use error::BenchmarkError;
pub use types::*;

pub use analysis::pipeline::{run_full_analysis, MetricResult};
pub use analysis::summary::{get_summary_stats, AnalysisSummary};
pub use catalog::{get_benchmarks, BenchmarkCatalog, CATEGORIES, METRIC_ORDER};
pub use derivation::{compute_derived_metrics, ClientInputs, DerivedMetrics};

#[cfg(feature = "report")]
pub use analysis::report::{analyze, build_report, BenchmarkReport, BenchmarkRequest};

/// Standard result type for all benchmarking operations
pub type BenchmarkResult<T> = Result<T, BenchmarkError>;
