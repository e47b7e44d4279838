//! Non-fatal input checks. Analysis always proceeds; these only produce
//! warnings for the output envelope.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::ClientInputs;

/// Allowed gap between Run + Grow + Transform and 100 percentage points.
const ALLOCATION_TOLERANCE: Decimal = dec!(1);

pub fn validate_inputs(inputs: &ClientInputs) -> Vec<String> {
    let mut warnings = Vec::new();

    if inputs
        .company_name
        .as_deref()
        .map_or(true, |n| n.trim().is_empty())
    {
        warnings.push("Company name is not provided.".into());
    }

    let required = [
        ("revenue", inputs.revenue),
        ("total_employees", inputs.total_employees),
        ("it_budget", inputs.it_budget),
    ];
    for (field, value) in required {
        match value {
            None => warnings.push(format!("{field} is not provided; dependent metrics are skipped.")),
            Some(v) if v <= Decimal::ZERO => {
                warnings.push(format!("{field} must be greater than 0; dependent metrics are skipped."))
            }
            Some(_) => {}
        }
    }

    let amounts = [
        ("it_budget_prior_year", inputs.it_budget_prior_year),
        ("it_ftes", inputs.it_ftes),
        ("total_opex", inputs.total_opex),
        ("cloud_spend", inputs.cloud_spend),
        ("cybersecurity_spend", inputs.cybersecurity_spend),
        ("it_labor_cost", inputs.it_labor_cost),
        ("outsourcing_spend", inputs.outsourcing_spend),
        ("application_spend", inputs.application_spend),
        ("infrastructure_spend", inputs.infrastructure_spend),
        ("helpdesk_cost_per_ticket", inputs.helpdesk_cost_per_ticket),
    ];
    for (field, value) in amounts {
        if value.is_some_and(|v| v < Decimal::ZERO) {
            warnings.push(format!("{field} is negative."));
        }
    }

    let allocation = [inputs.run_pct, inputs.grow_pct, inputs.transform_pct];
    match allocation
        .iter()
        .flatten()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))
    {
        Some(total)
            if total > Decimal::ZERO && (total - dec!(100)).abs() > ALLOCATION_TOLERANCE =>
        {
            warnings.push(format!(
                "Run + Grow + Transform = {}% (should be 100%).",
                total.round_dp(0)
            ));
        }
        Some(_) => {}
        None => warnings.push("Run + Grow + Transform is out of range (should be 100%).".into()),
    }

    warnings
}
