//! Benchmark reference data.
//!
//! Metric definitions are shared across industries; quartile bands and their
//! narratives are per industry. A metric is analyzable for an industry only
//! when both exist, and `get_benchmarks` merges the two into one row per
//! metric in display order.
//!
//! The built-in catalog is constructed once per process and shared read-only.
//! A replacement catalog with the same shape can be loaded from JSON.

pub mod definitions;
pub mod financial_services;
pub mod healthcare;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::types::*;
use crate::{BenchmarkError, BenchmarkResult};

/// Fixed display ordering of metric ids.
pub const METRIC_ORDER: [MetricId; 17] = MetricId::ALL;

/// Fixed display ordering of categories.
pub const CATEGORIES: [Category; 6] = [
    Category::Spend,
    Category::Staffing,
    Category::BudgetAllocation,
    Category::TechnologyMix,
    Category::CostStructure,
    Category::Operations,
];

// ---------------------------------------------------------------------------
// Data model
// ---------------------------------------------------------------------------

/// Industry-independent description of a metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDefinition {
    pub name: String,
    pub category: Category,
    pub unit: Unit,
    pub format: ValueFormat,
    pub direction: Direction,
    pub description: String,
}

/// Quartile thresholds and narrative for one metric in one industry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkBand {
    pub top_quartile: Decimal,
    pub median: Decimal,
    pub bottom_quartile: Decimal,
    #[serde(flatten)]
    pub narrative: Narrative,
    pub source: String,
}

impl BenchmarkBand {
    pub fn new(
        thresholds: [Decimal; 3],
        insight_high: &str,
        insight_low: &str,
        insight_aligned: &str,
        source: &str,
    ) -> Self {
        let [top_quartile, median, bottom_quartile] = thresholds;
        BenchmarkBand {
            top_quartile,
            median,
            bottom_quartile,
            narrative: Narrative {
                insight_high: insight_high.to_string(),
                insight_low: insight_low.to_string(),
                insight_aligned: insight_aligned.to_string(),
            },
            source: source.to_string(),
        }
    }
}

/// Inclusive range of SIC codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SicRange {
    pub first: u32,
    pub last: u32,
}

impl SicRange {
    pub fn contains(&self, code: u32) -> bool {
        (self.first..=self.last).contains(&code)
    }
}

/// An industry the catalog can benchmark against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryProfile {
    pub key: String,
    pub name: String,
    pub sub_verticals: Vec<String>,
    #[serde(default)]
    pub sic_ranges: Vec<SicRange>,
}

/// Provenance of the reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogVersion {
    pub version: String,
    pub baseline_year: i32,
    pub published: NaiveDate,
    pub sources: Vec<String>,
}

/// Definition merged with an industry band: one analyzable metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricBenchmark {
    pub metric_id: MetricId,
    pub name: String,
    pub category: Category,
    pub unit: Unit,
    pub format: ValueFormat,
    pub direction: Direction,
    pub description: String,
    pub top_quartile: Decimal,
    pub median: Decimal,
    pub bottom_quartile: Decimal,
    #[serde(flatten)]
    pub narrative: Narrative,
    pub source: String,
}

impl MetricBenchmark {
    /// Layer an industry band over the shared definition.
    pub fn merge(metric_id: MetricId, definition: &MetricDefinition, band: &BenchmarkBand) -> Self {
        MetricBenchmark {
            metric_id,
            name: definition.name.clone(),
            category: definition.category,
            unit: definition.unit,
            format: definition.format,
            direction: definition.direction,
            description: definition.description.clone(),
            top_quartile: band.top_quartile,
            median: band.median,
            bottom_quartile: band.bottom_quartile,
            narrative: band.narrative.clone(),
            source: band.source.clone(),
        }
    }

    pub fn band(&self) -> QuartileBand {
        QuartileBand {
            top_quartile: self.top_quartile,
            median: self.median,
            bottom_quartile: self.bottom_quartile,
            direction: self.direction,
        }
    }
}

/// Immutable two-level reference table: metric definitions plus
/// industry -> metric -> band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkCatalog {
    pub version: CatalogVersion,
    pub industries: Vec<IndustryProfile>,
    pub definitions: BTreeMap<MetricId, MetricDefinition>,
    pub benchmarks: BTreeMap<String, BTreeMap<MetricId, BenchmarkBand>>,
}

static BUILTIN: OnceLock<BenchmarkCatalog> = OnceLock::new();

impl BenchmarkCatalog {
    /// The built-in 2024 baseline catalog, constructed on first use.
    pub fn builtin() -> &'static BenchmarkCatalog {
        BUILTIN.get_or_init(|| {
            let catalog = build_builtin();
            debug!(
                version = %catalog.version.version,
                industries = catalog.industries.len(),
                metrics = catalog.definitions.len(),
                "built-in benchmark catalog constructed"
            );
            catalog
        })
    }

    /// Load a catalog from JSON and validate it.
    pub fn from_json(text: &str) -> BenchmarkResult<Self> {
        let catalog: BenchmarkCatalog = serde_json::from_str(text)?;
        catalog.validate()?;
        debug!(
            version = %catalog.version.version,
            industries = catalog.industries.len(),
            "benchmark catalog loaded from JSON"
        );
        Ok(catalog)
    }

    /// Merged definition + band rows for an industry, in display order.
    ///
    /// Unknown industries yield an empty map. Metrics that are defined but
    /// have no band for the industry are omitted.
    pub fn get_benchmarks(&self, industry: &str) -> BTreeMap<MetricId, MetricBenchmark> {
        let Some(bands) = self.benchmarks.get(industry) else {
            warn!(industry, "no benchmarks for industry");
            return BTreeMap::new();
        };

        self.definitions
            .iter()
            .filter_map(|(id, definition)| {
                bands
                    .get(id)
                    .map(|band| (*id, MetricBenchmark::merge(*id, definition, band)))
            })
            .collect()
    }

    pub fn industry(&self, key: &str) -> Option<&IndustryProfile> {
        self.industries.iter().find(|p| p.key == key)
    }

    /// Check an industry selector against the catalog.
    pub fn require_industry(&self, key: &str) -> BenchmarkResult<&IndustryProfile> {
        self.industry(key)
            .ok_or_else(|| BenchmarkError::UnknownIndustry(key.to_string()))
    }

    pub fn industry_keys(&self) -> Vec<&str> {
        self.industries.iter().map(|p| p.key.as_str()).collect()
    }

    /// Map a SIC code to an industry key. Non-numeric or unmapped codes
    /// return `None`.
    pub fn industry_for_sic(&self, sic_code: &str) -> Option<&str> {
        let code: u32 = sic_code.trim().parse().ok()?;
        self.industries
            .iter()
            .find(|p| p.sic_ranges.iter().any(|r| r.contains(code)))
            .map(|p| p.key.as_str())
    }

    /// Structural checks: every band refers to a defined metric and a declared
    /// industry, thresholds are ordered per the metric's direction, and the
    /// narrative and citation are present.
    pub fn validate(&self) -> BenchmarkResult<()> {
        for (industry, bands) in &self.benchmarks {
            if self.industry(industry).is_none() {
                return Err(BenchmarkError::UnknownIndustry(industry.clone()));
            }

            for (id, band) in bands {
                let definition = self
                    .definitions
                    .get(id)
                    .ok_or_else(|| BenchmarkError::UnknownMetric(id.to_string()))?;
                validate_band(industry, *id, definition.direction, band)?;
            }
        }
        Ok(())
    }
}

fn validate_band(
    industry: &str,
    id: MetricId,
    direction: Direction,
    band: &BenchmarkBand,
) -> BenchmarkResult<()> {
    let invalid = |reason: &str| BenchmarkError::InvalidBand {
        industry: industry.to_string(),
        metric: id.to_string(),
        reason: reason.to_string(),
    };

    let ordered = match direction {
        Direction::LowerIsBetter => {
            band.top_quartile <= band.median && band.median <= band.bottom_quartile
        }
        Direction::HigherIsBetter => {
            band.top_quartile >= band.median && band.median >= band.bottom_quartile
        }
    };
    if !ordered {
        return Err(invalid(&format!(
            "thresholds {} / {} / {} are not ordered for {}",
            band.top_quartile, band.median, band.bottom_quartile, direction
        )));
    }

    let narrative = &band.narrative;
    if narrative.insight_high.trim().is_empty()
        || narrative.insight_low.trim().is_empty()
        || narrative.insight_aligned.trim().is_empty()
    {
        return Err(invalid("narrative text must not be empty"));
    }
    if band.source.trim().is_empty() {
        return Err(invalid("source citation must not be empty"));
    }
    Ok(())
}

/// Merged rows for an industry from the built-in catalog.
pub fn get_benchmarks(industry: &str) -> BTreeMap<MetricId, MetricBenchmark> {
    BenchmarkCatalog::builtin().get_benchmarks(industry)
}

fn build_builtin() -> BenchmarkCatalog {
    let mut benchmarks = BTreeMap::new();
    benchmarks.insert(
        financial_services::INDUSTRY_KEY.to_string(),
        financial_services::bands(),
    );
    benchmarks.insert(healthcare::INDUSTRY_KEY.to_string(), healthcare::bands());

    BenchmarkCatalog {
        version: CatalogVersion {
            version: "2024.1".to_string(),
            baseline_year: 2024,
            published: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or(NaiveDate::MIN),
            sources: [
                "Gartner",
                "Avasant / Computer Economics",
                "APQC",
                "McKinsey",
                "IANS Research",
                "MetricNet",
                "HIMSS",
                "CHIME",
                "KLAS",
                "Definitive Healthcare",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        },
        industries: vec![financial_services::profile(), healthcare::profile()],
        definitions: definitions::metric_definitions(),
        benchmarks,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builtin_catalog_validates() {
        BenchmarkCatalog::builtin().validate().unwrap();
    }

    #[test]
    fn test_builtin_is_shared_instance() {
        let a = BenchmarkCatalog::builtin() as *const BenchmarkCatalog;
        let b = BenchmarkCatalog::builtin() as *const BenchmarkCatalog;
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_metric_defined_once() {
        let catalog = BenchmarkCatalog::builtin();
        assert_eq!(catalog.definitions.len(), METRIC_ORDER.len());
        for id in METRIC_ORDER {
            assert!(catalog.definitions.contains_key(&id), "missing {id}");
        }
    }

    #[test]
    fn test_both_industries_fully_benchmarked() {
        for industry in ["financial_services", "healthcare"] {
            let rows = get_benchmarks(industry);
            assert_eq!(rows.len(), 17, "{industry}");
        }
    }

    #[test]
    fn test_unknown_industry_is_empty() {
        assert!(get_benchmarks("retail").is_empty());
        assert!(get_benchmarks("").is_empty());
    }

    #[test]
    fn test_merge_carries_definition_and_band() {
        let rows = get_benchmarks("financial_services");
        let row = &rows[&MetricId::ItSpendPctRevenue];
        assert_eq!(row.name, "IT Spend as % of Revenue");
        assert_eq!(row.category, Category::Spend);
        assert_eq!(row.unit, Unit::Percentage);
        assert_eq!(row.format, ValueFormat::fixed(1));
        assert_eq!(row.direction, Direction::LowerIsBetter);
        assert_eq!(row.top_quartile, dec!(5.7));
        assert_eq!(row.median, dec!(7.9));
        assert_eq!(row.bottom_quartile, dec!(11.4));
        assert_eq!(row.source, "Gartner / Avasant Computer Economics");
    }

    #[test]
    fn test_industry_specific_values_differ() {
        let fs = get_benchmarks("financial_services");
        let hc = get_benchmarks("healthcare");
        assert_eq!(fs[&MetricId::ItSpendPctRevenue].median, dec!(7.9));
        assert_eq!(hc[&MetricId::ItSpendPctRevenue].median, dec!(3.8));
        // Shared definition is identical
        assert_eq!(
            fs[&MetricId::ItSpendPctRevenue].name,
            hc[&MetricId::ItSpendPctRevenue].name
        );
    }

    #[test]
    fn test_metric_without_band_is_omitted() {
        let mut catalog = BenchmarkCatalog::builtin().clone();
        catalog
            .benchmarks
            .get_mut("healthcare")
            .unwrap()
            .remove(&MetricId::AppPctBudget);
        let rows = catalog.get_benchmarks("healthcare");
        assert_eq!(rows.len(), 16);
        assert!(!rows.contains_key(&MetricId::AppPctBudget));
    }

    #[test]
    fn test_band_without_definition_is_omitted() {
        let mut catalog = BenchmarkCatalog::builtin().clone();
        catalog.definitions.remove(&MetricId::SystemAvailability);
        let rows = catalog.get_benchmarks("financial_services");
        assert!(!rows.contains_key(&MetricId::SystemAvailability));
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_rows_follow_metric_order() {
        let ids: Vec<MetricId> = get_benchmarks("healthcare").keys().copied().collect();
        assert_eq!(ids, METRIC_ORDER.to_vec());
    }

    #[test]
    fn test_validate_rejects_misordered_band() {
        let mut catalog = BenchmarkCatalog::builtin().clone();
        let band = catalog
            .benchmarks
            .get_mut("financial_services")
            .unwrap()
            .get_mut(&MetricId::ItSpendPctRevenue)
            .unwrap();
        band.top_quartile = dec!(12);
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, BenchmarkError::InvalidBand { .. }), "{err}");
    }

    #[test]
    fn test_validate_accepts_degenerate_band() {
        let mut catalog = BenchmarkCatalog::builtin().clone();
        let band = catalog
            .benchmarks
            .get_mut("financial_services")
            .unwrap()
            .get_mut(&MetricId::ItSpendPctRevenue)
            .unwrap();
        band.top_quartile = band.median;
        catalog.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_empty_source() {
        let mut catalog = BenchmarkCatalog::builtin().clone();
        catalog
            .benchmarks
            .get_mut("healthcare")
            .unwrap()
            .get_mut(&MetricId::ItAttritionRate)
            .unwrap()
            .source = String::new();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_undeclared_industry() {
        let mut catalog = BenchmarkCatalog::builtin().clone();
        let bands = catalog.benchmarks["healthcare"].clone();
        catalog.benchmarks.insert("retail".to_string(), bands);
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, BenchmarkError::UnknownIndustry(ref k) if k == "retail"));
    }

    #[test]
    fn test_require_industry() {
        let catalog = BenchmarkCatalog::builtin();
        assert_eq!(
            catalog.require_industry("healthcare").unwrap().name,
            "Healthcare"
        );
        assert!(catalog.require_industry("energy").is_err());
        assert_eq!(catalog.industry_keys(), vec!["financial_services", "healthcare"]);
    }

    #[test]
    fn test_industry_for_sic() {
        let catalog = BenchmarkCatalog::builtin();
        assert_eq!(catalog.industry_for_sic("6022"), Some("financial_services"));
        assert_eq!(catalog.industry_for_sic(" 6000 "), Some("financial_services"));
        assert_eq!(catalog.industry_for_sic("6999"), Some("financial_services"));
        assert_eq!(catalog.industry_for_sic("8062"), Some("healthcare"));
        assert_eq!(catalog.industry_for_sic("8099"), Some("healthcare"));
        assert_eq!(catalog.industry_for_sic("8100"), None);
        assert_eq!(catalog.industry_for_sic("7372"), None);
        assert_eq!(catalog.industry_for_sic("n/a"), None);
        assert_eq!(catalog.industry_for_sic(""), None);
    }

    #[test]
    fn test_json_round_trip_preserves_catalog() {
        let catalog = BenchmarkCatalog::builtin();
        let json = serde_json::to_string(catalog).unwrap();
        let loaded = BenchmarkCatalog::from_json(&json).unwrap();
        assert_eq!(&loaded, catalog);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = BenchmarkCatalog::from_json("{\"version\": 1}").unwrap_err();
        assert!(matches!(err, BenchmarkError::SerializationError(_)));
    }
}
