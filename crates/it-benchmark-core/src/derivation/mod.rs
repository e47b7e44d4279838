//! Derivation of comparable metrics from raw organizational inputs.
//!
//! Ratio metrics are guarded on their denominator: when it is absent, zero,
//! or negative the metric is simply left out. Numerators default to zero.
//! Pass-through metrics (allocation percentages, availability, attrition,
//! help-desk cost) appear only when the field was provided.

pub mod validation;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::*;

pub use validation::validate_inputs;

/// Derived metric values keyed by id, iterated in display order.
pub type DerivedMetrics = BTreeMap<MetricId, Decimal>;

/// Raw client inputs as collected from the organization.
///
/// Every field is optional; see the module docs for how absence is treated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientInputs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_vertical: Option<String>,

    // Firm financials
    pub revenue: Option<Money>,
    pub total_employees: Option<Decimal>,
    pub total_opex: Option<Money>,

    // IT budget
    pub it_budget: Option<Money>,
    pub it_budget_prior_year: Option<Money>,
    pub it_ftes: Option<Decimal>,

    // Spend breakdown
    pub cloud_spend: Option<Money>,
    pub cybersecurity_spend: Option<Money>,
    pub it_labor_cost: Option<Money>,
    pub outsourcing_spend: Option<Money>,
    pub application_spend: Option<Money>,
    pub infrastructure_spend: Option<Money>,

    // Run / Grow / Transform allocation
    pub run_pct: Option<Percent>,
    pub grow_pct: Option<Percent>,
    pub transform_pct: Option<Percent>,

    // Operations
    pub system_availability: Option<Percent>,
    pub it_attrition_rate: Option<Percent>,
    pub helpdesk_cost_per_ticket: Option<Money>,
}

/// Value of a field, with absence read as zero.
fn or_zero(field: Option<Decimal>) -> Decimal {
    field.unwrap_or(Decimal::ZERO)
}

/// `numerator / denominator`, or `None` when the denominator is not positive
/// or the quotient does not fit a `Decimal`.
fn ratio(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator > Decimal::ZERO {
        numerator.checked_div(denominator)
    } else {
        None
    }
}

fn pct(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    ratio(numerator, denominator).and_then(|r| r.checked_mul(dec!(100)))
}

/// Map raw client inputs to every metric value that can be computed.
pub fn compute_derived_metrics(inputs: &ClientInputs) -> DerivedMetrics {
    let revenue = or_zero(inputs.revenue);
    let total_employees = or_zero(inputs.total_employees);
    let it_budget = or_zero(inputs.it_budget);
    let it_budget_prior = or_zero(inputs.it_budget_prior_year);
    let it_ftes = or_zero(inputs.it_ftes);
    let total_opex = or_zero(inputs.total_opex);

    let mut derived: Vec<(MetricId, Option<Decimal>)> = Vec::with_capacity(MetricId::ALL.len());

    // -- Spend ---------------------------------------------------------------
    derived.push((MetricId::ItSpendPctRevenue, pct(it_budget, revenue)));
    derived.push((MetricId::ItSpendPerEmployee, ratio(it_budget, total_employees)));
    derived.push((MetricId::ItSpendPctOpex, pct(it_budget, total_opex)));
    derived.push((
        MetricId::ItBudgetYoyGrowth,
        it_budget
            .checked_sub(it_budget_prior)
            .and_then(|growth| pct(growth, it_budget_prior)),
    ));

    // -- Staffing ------------------------------------------------------------
    derived.push((MetricId::ItStaffPctEmployees, pct(it_ftes, total_employees)));
    derived.push((MetricId::ItStaffingRatio, ratio(total_employees, it_ftes)));

    // -- Budget allocation ---------------------------------------------------
    derived.push((MetricId::RunBudgetPct, inputs.run_pct));
    derived.push((MetricId::GrowBudgetPct, inputs.grow_pct));
    derived.push((MetricId::TransformBudgetPct, inputs.transform_pct));

    // -- Technology mix and cost structure (shares of the IT budget) ---------
    let share_of_budget = |spend: Option<Decimal>| pct(or_zero(spend), it_budget);
    derived.push((MetricId::CloudPctBudget, share_of_budget(inputs.cloud_spend)));
    derived.push((
        MetricId::CybersecurityPctBudget,
        share_of_budget(inputs.cybersecurity_spend),
    ));
    derived.push((MetricId::ItLaborPctBudget, share_of_budget(inputs.it_labor_cost)));
    derived.push((
        MetricId::OutsourcingPctBudget,
        share_of_budget(inputs.outsourcing_spend),
    ));

    // Application share is measured against app + infra spend, but is only
    // reported when an IT budget is present.
    let app_share = if it_budget > Decimal::ZERO {
        let app = or_zero(inputs.application_spend);
        app.checked_add(or_zero(inputs.infrastructure_spend))
            .and_then(|total| pct(app, total))
    } else {
        None
    };
    derived.push((MetricId::AppPctBudget, app_share));

    // -- Operations ----------------------------------------------------------
    derived.push((MetricId::SystemAvailability, inputs.system_availability));
    derived.push((MetricId::ItAttritionRate, inputs.it_attrition_rate));
    derived.push((
        MetricId::HelpdeskCostPerTicket,
        inputs.helpdesk_cost_per_ticket,
    ));

    derived
        .into_iter()
        .filter_map(|(id, value)| value.map(|v| (id, v)))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: Decimal, b: Decimal, eps: Decimal) -> bool {
        (a - b).abs() < eps
    }

    fn full_inputs() -> ClientInputs {
        ClientInputs {
            company_name: Some("Harbor Mutual".into()),
            industry: Some("financial_services".into()),
            sub_vertical: Some("Insurance".into()),
            revenue: Some(dec!(1_000_000_000)),
            total_employees: Some(dec!(2_000)),
            total_opex: Some(dec!(800_000_000)),
            it_budget: Some(dec!(70_000_000)),
            it_budget_prior_year: Some(dec!(65_000_000)),
            it_ftes: Some(dec!(200)),
            cloud_spend: Some(dec!(21_000_000)),
            cybersecurity_spend: Some(dec!(7_000_000)),
            it_labor_cost: Some(dec!(28_000_000)),
            outsourcing_spend: Some(dec!(14_000_000)),
            application_spend: Some(dec!(30_000_000)),
            infrastructure_spend: Some(dec!(20_000_000)),
            run_pct: Some(dec!(65)),
            grow_pct: Some(dec!(22)),
            transform_pct: Some(dec!(13)),
            system_availability: Some(dec!(99.95)),
            it_attrition_rate: Some(dec!(12)),
            helpdesk_cost_per_ticket: Some(dec!(18)),
        }
    }

    #[test]
    fn test_full_inputs_derive_every_metric() {
        let derived = compute_derived_metrics(&full_inputs());
        let ids: Vec<MetricId> = derived.keys().copied().collect();
        assert_eq!(ids, MetricId::ALL.to_vec());
    }

    #[test]
    fn test_spend_ratios() {
        let derived = compute_derived_metrics(&full_inputs());
        assert_eq!(derived[&MetricId::ItSpendPctRevenue], dec!(7));
        assert_eq!(derived[&MetricId::ItSpendPerEmployee], dec!(35_000));
        assert_eq!(derived[&MetricId::ItSpendPctOpex], dec!(8.75));
        // (70 - 65) / 65 = 7.6923%
        assert!(approx_eq(
            derived[&MetricId::ItBudgetYoyGrowth],
            dec!(7.6923),
            dec!(0.0001)
        ));
    }

    #[test]
    fn test_staffing_ratios() {
        let derived = compute_derived_metrics(&full_inputs());
        assert_eq!(derived[&MetricId::ItStaffPctEmployees], dec!(10));
        assert_eq!(derived[&MetricId::ItStaffingRatio], dec!(10));
    }

    #[test]
    fn test_budget_shares() {
        let derived = compute_derived_metrics(&full_inputs());
        assert_eq!(derived[&MetricId::CloudPctBudget], dec!(30));
        assert_eq!(derived[&MetricId::CybersecurityPctBudget], dec!(10));
        assert_eq!(derived[&MetricId::ItLaborPctBudget], dec!(40));
        assert_eq!(derived[&MetricId::OutsourcingPctBudget], dec!(20));
        assert_eq!(derived[&MetricId::AppPctBudget], dec!(60));
    }

    #[test]
    fn test_pass_through_fields() {
        let derived = compute_derived_metrics(&full_inputs());
        assert_eq!(derived[&MetricId::RunBudgetPct], dec!(65));
        assert_eq!(derived[&MetricId::GrowBudgetPct], dec!(22));
        assert_eq!(derived[&MetricId::TransformBudgetPct], dec!(13));
        assert_eq!(derived[&MetricId::SystemAvailability], dec!(99.95));
        assert_eq!(derived[&MetricId::ItAttritionRate], dec!(12));
        assert_eq!(derived[&MetricId::HelpdeskCostPerTicket], dec!(18));
    }

    #[test]
    fn test_empty_inputs_derive_nothing() {
        assert!(compute_derived_metrics(&ClientInputs::default()).is_empty());
    }

    #[test]
    fn test_revenue_and_budget_only() {
        let inputs = ClientInputs {
            revenue: Some(dec!(1_000_000_000)),
            it_budget: Some(dec!(70_000_000)),
            ..Default::default()
        };
        let derived = compute_derived_metrics(&inputs);
        assert_eq!(derived[&MetricId::ItSpendPctRevenue], dec!(7.0));
        assert!(!derived.contains_key(&MetricId::ItSpendPerEmployee));
        assert!(!derived.contains_key(&MetricId::ItStaffingRatio));
        // Shares of a known budget with no spend reported are zero
        assert_eq!(derived[&MetricId::CloudPctBudget], Decimal::ZERO);
        // No app or infra spend: zero denominator
        assert!(!derived.contains_key(&MetricId::AppPctBudget));
    }

    #[test]
    fn test_zero_it_ftes_omits_staffing_ratio() {
        let mut inputs = full_inputs();
        inputs.it_ftes = Some(Decimal::ZERO);
        let derived = compute_derived_metrics(&inputs);
        assert!(!derived.contains_key(&MetricId::ItStaffingRatio));
        assert_eq!(derived[&MetricId::ItStaffPctEmployees], Decimal::ZERO);
    }

    #[test]
    fn test_zero_prior_budget_omits_growth() {
        let mut inputs = full_inputs();
        inputs.it_budget_prior_year = Some(Decimal::ZERO);
        assert!(!compute_derived_metrics(&inputs).contains_key(&MetricId::ItBudgetYoyGrowth));
        inputs.it_budget_prior_year = None;
        assert!(!compute_derived_metrics(&inputs).contains_key(&MetricId::ItBudgetYoyGrowth));
    }

    #[test]
    fn test_negative_denominator_omits_metric() {
        let mut inputs = full_inputs();
        inputs.revenue = Some(dec!(-5));
        assert!(!compute_derived_metrics(&inputs).contains_key(&MetricId::ItSpendPctRevenue));
    }

    #[test]
    fn test_overflowing_ratio_omits_metric() {
        let inputs: ClientInputs = serde_json::from_str(
            r#"{"revenue": "0.0001", "it_budget": "70000000000000000000000000"}"#,
        )
        .unwrap();
        let derived = compute_derived_metrics(&inputs);
        assert!(!derived.contains_key(&MetricId::ItSpendPctRevenue));
        // Shares of the same budget still fit and are reported
        assert_eq!(derived[&MetricId::CloudPctBudget], Decimal::ZERO);
    }

    #[test]
    fn test_overflowing_sums_omit_metric() {
        let mut inputs = full_inputs();
        inputs.it_budget_prior_year = Some(dec!(-1));
        inputs.it_budget = Some(Decimal::MAX);
        inputs.application_spend = Some(Decimal::MAX);
        inputs.infrastructure_spend = Some(Decimal::MAX);
        let derived = compute_derived_metrics(&inputs);
        assert!(!derived.contains_key(&MetricId::ItBudgetYoyGrowth));
        assert!(!derived.contains_key(&MetricId::AppPctBudget));
    }

    #[test]
    fn test_zero_budget_omits_all_budget_shares() {
        let mut inputs = full_inputs();
        inputs.it_budget = Some(Decimal::ZERO);
        let derived = compute_derived_metrics(&inputs);
        for id in [
            MetricId::CloudPctBudget,
            MetricId::CybersecurityPctBudget,
            MetricId::ItLaborPctBudget,
            MetricId::OutsourcingPctBudget,
        ] {
            assert!(!derived.contains_key(&id), "{id}");
        }
    }

    #[test]
    fn test_app_share_requires_it_budget_even_with_app_infra_spend() {
        // The app share denominator is app + infra, yet the metric is gated on
        // a positive IT budget. Pin the current behaviour.
        let inputs = ClientInputs {
            it_budget: Some(Decimal::ZERO),
            application_spend: Some(dec!(6_000_000)),
            infrastructure_spend: Some(dec!(4_000_000)),
            ..Default::default()
        };
        assert!(!compute_derived_metrics(&inputs).contains_key(&MetricId::AppPctBudget));

        let with_budget = ClientInputs {
            it_budget: Some(dec!(1)),
            ..inputs
        };
        assert_eq!(
            compute_derived_metrics(&with_budget)[&MetricId::AppPctBudget],
            dec!(60)
        );
    }

    #[test]
    fn test_provided_zero_allocation_passes_through() {
        let inputs = ClientInputs {
            transform_pct: Some(Decimal::ZERO),
            ..Default::default()
        };
        let derived = compute_derived_metrics(&inputs);
        assert_eq!(derived.len(), 1);
        assert_eq!(derived[&MetricId::TransformBudgetPct], Decimal::ZERO);
    }

    #[test]
    fn test_inputs_deserialize_from_sparse_json() {
        let inputs: ClientInputs = serde_json::from_str(
            r#"{"company_name": "Acme", "revenue": 1000000000, "it_budget": "70000000"}"#,
        )
        .unwrap();
        assert_eq!(inputs.company_name.as_deref(), Some("Acme"));
        assert_eq!(inputs.revenue, Some(dec!(1_000_000_000)));
        assert_eq!(inputs.it_budget, Some(dec!(70_000_000)));
        assert_eq!(inputs.it_ftes, None);
    }

    #[test]
    fn test_inputs_accept_null_fields() {
        let inputs: ClientInputs =
            serde_json::from_str(r#"{"run_pct": null, "helpdesk_cost_per_ticket": 22}"#).unwrap();
        let derived = compute_derived_metrics(&inputs);
        assert!(!derived.contains_key(&MetricId::RunBudgetPct));
        assert_eq!(derived[&MetricId::HelpdeskCostPerTicket], dec!(22));
    }
}
