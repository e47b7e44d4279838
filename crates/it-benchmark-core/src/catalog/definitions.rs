//! Metric definitions shared by every industry.

use std::collections::BTreeMap;

use super::MetricDefinition;
use crate::types::*;

fn define(
    name: &str,
    category: Category,
    unit: Unit,
    format: ValueFormat,
    direction: Direction,
    description: &str,
) -> MetricDefinition {
    MetricDefinition {
        name: name.to_string(),
        category,
        unit,
        format,
        direction,
        description: description.to_string(),
    }
}

pub fn metric_definitions() -> BTreeMap<MetricId, MetricDefinition> {
    use Category::*;
    use Direction::*;

    let pct = Unit::Percentage;
    let one_dp = ValueFormat::fixed(1);
    let whole = ValueFormat::fixed(0);

    BTreeMap::from([
        // -- Spend -----------------------------------------------------------
        (
            MetricId::ItSpendPctRevenue,
            define(
                "IT Spend as % of Revenue",
                Spend,
                pct,
                one_dp,
                LowerIsBetter,
                "Total IT budget divided by annual revenue.",
            ),
        ),
        (
            MetricId::ItSpendPerEmployee,
            define(
                "IT Spend per Employee",
                Spend,
                Unit::Currency,
                ValueFormat::grouped(0),
                LowerIsBetter,
                "Total IT budget divided by total firm headcount.",
            ),
        ),
        (
            MetricId::ItSpendPctOpex,
            define(
                "IT Spend as % of OpEx",
                Spend,
                pct,
                one_dp,
                LowerIsBetter,
                "Total IT budget as a share of total operating expenses.",
            ),
        ),
        (
            MetricId::ItBudgetYoyGrowth,
            define(
                "IT Budget Year-over-Year Growth",
                Spend,
                pct,
                one_dp,
                HigherIsBetter,
                "Percentage increase in IT budget from prior year.",
            ),
        ),
        // -- Staffing --------------------------------------------------------
        (
            MetricId::ItStaffPctEmployees,
            define(
                "IT Staff as % of Total Employees",
                Staffing,
                pct,
                one_dp,
                LowerIsBetter,
                "IT FTEs as a share of total firm headcount.",
            ),
        ),
        (
            MetricId::ItStaffingRatio,
            define(
                "IT Staffing Ratio (Users per IT FTE)",
                Staffing,
                Unit::Ratio,
                whole,
                LowerIsBetter,
                "Number of total employees supported per IT FTE. Lower means more IT support per person.",
            ),
        ),
        // -- Budget allocation -----------------------------------------------
        (
            MetricId::RunBudgetPct,
            define(
                "Run (Keep-the-Lights-On) Budget %",
                BudgetAllocation,
                pct,
                whole,
                LowerIsBetter,
                "Percentage of IT budget spent on maintaining existing operations.",
            ),
        ),
        (
            MetricId::GrowBudgetPct,
            define(
                "Grow (Enhance) Budget %",
                BudgetAllocation,
                pct,
                whole,
                HigherIsBetter,
                "Percentage of IT budget spent on enhancing existing capabilities.",
            ),
        ),
        (
            MetricId::TransformBudgetPct,
            define(
                "Transform (Innovation) Budget %",
                BudgetAllocation,
                pct,
                whole,
                HigherIsBetter,
                "Percentage of IT budget spent on transformative, new capability initiatives.",
            ),
        ),
        // -- Technology mix --------------------------------------------------
        (
            MetricId::CloudPctBudget,
            define(
                "Cloud Spend as % of IT Budget",
                TechnologyMix,
                pct,
                whole,
                HigherIsBetter,
                "Cloud expenditure (IaaS, PaaS, SaaS) as a share of total IT budget.",
            ),
        ),
        (
            MetricId::CybersecurityPctBudget,
            define(
                "Cybersecurity Spend as % of IT Budget",
                TechnologyMix,
                pct,
                one_dp,
                HigherIsBetter,
                "Cybersecurity and information security spend as a share of IT budget.",
            ),
        ),
        // -- Cost structure --------------------------------------------------
        (
            MetricId::ItLaborPctBudget,
            define(
                "IT Labor Cost as % of IT Budget",
                CostStructure,
                pct,
                whole,
                LowerIsBetter,
                "Internal IT labor costs (salaries, benefits) as a share of IT budget.",
            ),
        ),
        (
            MetricId::OutsourcingPctBudget,
            define(
                "Outsourcing Spend as % of IT Budget",
                CostStructure,
                pct,
                whole,
                HigherIsBetter,
                "Outsourced IT services spend as a share of total IT budget.",
            ),
        ),
        (
            MetricId::AppPctBudget,
            define(
                "Application Spend % (vs Infrastructure)",
                CostStructure,
                pct,
                whole,
                HigherIsBetter,
                "Application spend as a share of combined application + infrastructure spend.",
            ),
        ),
        // -- Operations ------------------------------------------------------
        (
            MetricId::SystemAvailability,
            define(
                "Core System Availability",
                Operations,
                pct,
                ValueFormat::fixed(2),
                HigherIsBetter,
                "Average uptime of mission-critical systems.",
            ),
        ),
        (
            MetricId::ItAttritionRate,
            define(
                "IT Employee Attrition Rate",
                Operations,
                pct,
                whole,
                LowerIsBetter,
                "Annual voluntary turnover rate for IT staff.",
            ),
        ),
        (
            MetricId::HelpdeskCostPerTicket,
            define(
                "Help Desk Cost per Ticket",
                Operations,
                Unit::Currency,
                ValueFormat::grouped(0),
                LowerIsBetter,
                "Average fully-loaded cost to resolve a Tier 1 help desk ticket.",
            ),
        ),
    ])
}
