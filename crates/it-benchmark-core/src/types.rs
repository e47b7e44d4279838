use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::BenchmarkError;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Percentages expressed in points (7.5 = 7.5%). Never as fractions.
pub type Percent = Decimal;

/// Normalized position on the 0-100 scale.
pub type Score = Decimal;

// ---------------------------------------------------------------------------
// Metric identity
// ---------------------------------------------------------------------------

/// Identifier of a comparable metric.
///
/// Declaration order is the display order used for every report, so the
/// derived `Ord` doubles as `METRIC_ORDER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricId {
    ItSpendPctRevenue,
    ItSpendPerEmployee,
    ItSpendPctOpex,
    ItBudgetYoyGrowth,
    ItStaffPctEmployees,
    ItStaffingRatio,
    RunBudgetPct,
    GrowBudgetPct,
    TransformBudgetPct,
    CloudPctBudget,
    CybersecurityPctBudget,
    ItLaborPctBudget,
    OutsourcingPctBudget,
    AppPctBudget,
    SystemAvailability,
    ItAttritionRate,
    HelpdeskCostPerTicket,
}

impl MetricId {
    pub const ALL: [MetricId; 17] = [
        MetricId::ItSpendPctRevenue,
        MetricId::ItSpendPerEmployee,
        MetricId::ItSpendPctOpex,
        MetricId::ItBudgetYoyGrowth,
        MetricId::ItStaffPctEmployees,
        MetricId::ItStaffingRatio,
        MetricId::RunBudgetPct,
        MetricId::GrowBudgetPct,
        MetricId::TransformBudgetPct,
        MetricId::CloudPctBudget,
        MetricId::CybersecurityPctBudget,
        MetricId::ItLaborPctBudget,
        MetricId::OutsourcingPctBudget,
        MetricId::AppPctBudget,
        MetricId::SystemAvailability,
        MetricId::ItAttritionRate,
        MetricId::HelpdeskCostPerTicket,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricId::ItSpendPctRevenue => "it_spend_pct_revenue",
            MetricId::ItSpendPerEmployee => "it_spend_per_employee",
            MetricId::ItSpendPctOpex => "it_spend_pct_opex",
            MetricId::ItBudgetYoyGrowth => "it_budget_yoy_growth",
            MetricId::ItStaffPctEmployees => "it_staff_pct_employees",
            MetricId::ItStaffingRatio => "it_staffing_ratio",
            MetricId::RunBudgetPct => "run_budget_pct",
            MetricId::GrowBudgetPct => "grow_budget_pct",
            MetricId::TransformBudgetPct => "transform_budget_pct",
            MetricId::CloudPctBudget => "cloud_pct_budget",
            MetricId::CybersecurityPctBudget => "cybersecurity_pct_budget",
            MetricId::ItLaborPctBudget => "it_labor_pct_budget",
            MetricId::OutsourcingPctBudget => "outsourcing_pct_budget",
            MetricId::AppPctBudget => "app_pct_budget",
            MetricId::SystemAvailability => "system_availability",
            MetricId::ItAttritionRate => "it_attrition_rate",
            MetricId::HelpdeskCostPerTicket => "helpdesk_cost_per_ticket",
        }
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricId {
    type Err = BenchmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| BenchmarkError::UnknownMetric(s.to_string()))
    }
}

/// Reporting category of a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Spend,
    Staffing,
    #[serde(rename = "Budget Allocation")]
    BudgetAllocation,
    #[serde(rename = "Technology Mix")]
    TechnologyMix,
    #[serde(rename = "Cost Structure")]
    CostStructure,
    Operations,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Spend => "Spend",
            Category::Staffing => "Staffing",
            Category::BudgetAllocation => "Budget Allocation",
            Category::TechnologyMix => "Technology Mix",
            Category::CostStructure => "Cost Structure",
            Category::Operations => "Operations",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Native unit of a metric value. Serialized as its symbol (`$`, `%`,
/// `ratio`); the spelled-out names are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    #[serde(rename = "$", alias = "currency")]
    Currency,
    #[serde(rename = "%", alias = "percentage")]
    Percentage,
    Ratio,
    Unitless,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Currency => "$",
            Unit::Percentage => "%",
            Unit::Ratio => "ratio",
            Unit::Unitless => "",
        }
    }
}

/// Which raw-value regime represents better performance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    LowerIsBetter,
    HigherIsBetter,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::LowerIsBetter => f.write_str("lower_is_better"),
            Direction::HigherIsBetter => f.write_str("higher_is_better"),
        }
    }
}

// ---------------------------------------------------------------------------
// Display format
// ---------------------------------------------------------------------------

/// Fixed-point display format, written as `.1f` or `,.0f` (grouped thousands).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ValueFormat {
    pub precision: u32,
    pub grouped: bool,
}

impl ValueFormat {
    pub const fn fixed(precision: u32) -> Self {
        ValueFormat {
            precision,
            grouped: false,
        }
    }

    pub const fn grouped(precision: u32) -> Self {
        ValueFormat {
            precision,
            grouped: true,
        }
    }

    /// Render a value with this format (no unit decoration).
    pub fn apply(&self, value: Decimal) -> String {
        let rounded = value.round_dp(self.precision);
        let text = format!("{:.*}", self.precision as usize, rounded);
        if !self.grouped {
            return text;
        }

        let (sign, body) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text.as_str()),
        };
        let (int_part, frac_part) = match body.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (body, None),
        };

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        match frac_part {
            Some(f) => format!("{sign}{grouped}.{f}"),
            None => format!("{sign}{grouped}"),
        }
    }
}

impl FromStr for ValueFormat {
    type Err = BenchmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| BenchmarkError::InvalidFormat {
            spec: s.to_string(),
            reason: reason.to_string(),
        };

        let (grouped, rest) = match s.strip_prefix(',') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let digits = rest
            .strip_prefix('.')
            .and_then(|r| r.strip_suffix('f'))
            .ok_or_else(|| invalid("expected the form '.Nf' or ',.Nf'"))?;
        let precision: u32 = digits
            .parse()
            .map_err(|_| invalid("precision must be a non-negative integer"))?;
        if precision > 10 {
            return Err(invalid("precision above 10 digits is not supported"));
        }

        Ok(ValueFormat { precision, grouped })
    }
}

impl TryFrom<String> for ValueFormat {
    type Error = BenchmarkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ValueFormat> for String {
    fn from(value: ValueFormat) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ValueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.grouped {
            write!(f, ",.{}f", self.precision)
        } else {
            write!(f, ".{}f", self.precision)
        }
    }
}

// ---------------------------------------------------------------------------
// Positioning vocabulary
// ---------------------------------------------------------------------------

/// Quartile bucket a value falls into, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quartile {
    TopQuartile,
    AboveMedian,
    BelowMedian,
    BottomQuartile,
}

impl Quartile {
    pub const ALL: [Quartile; 4] = [
        Quartile::TopQuartile,
        Quartile::AboveMedian,
        Quartile::BelowMedian,
        Quartile::BottomQuartile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Quartile::TopQuartile => "Top Quartile",
            Quartile::AboveMedian => "Above Median",
            Quartile::BelowMedian => "Below Median",
            Quartile::BottomQuartile => "Bottom Quartile",
        }
    }

    /// True for the better half of the distribution.
    pub fn is_favorable(&self) -> bool {
        matches!(self, Quartile::TopQuartile | Quartile::AboveMedian)
    }
}

impl fmt::Display for Quartile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Thresholds of one metric for one industry, with the metric's direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuartileBand {
    pub top_quartile: Decimal,
    pub median: Decimal,
    pub bottom_quartile: Decimal,
    pub direction: Direction,
}

/// Narrative text attached to a benchmark band.
///
/// `insight_high` describes a high raw value and `insight_low` a low raw
/// value; whether that is good news depends on the metric's direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub insight_high: String,
    pub insight_low: String,
    pub insight_aligned: String,
}

// ---------------------------------------------------------------------------
// Output envelope
// ---------------------------------------------------------------------------

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub catalog_version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    catalog_version: &str,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            catalog_version: catalog_version.to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
