use serde::{Deserialize, Serialize};

use crate::types::{Direction, Narrative, Quartile};

/// Which narrative to show. `High` and `Low` name the raw-value regime the
/// text describes, not the quartile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightSlot {
    High,
    Low,
}

impl InsightSlot {
    /// Narrative slot for a bucket. In the better half the organization's
    /// value sits on the favorable side of the median: low for
    /// lower-is-better metrics, high for higher-is-better ones. The worse
    /// half takes the opposite slot.
    pub fn for_position(direction: Direction, quartile: Quartile) -> Self {
        match (quartile.is_favorable(), direction) {
            (true, Direction::LowerIsBetter) => InsightSlot::Low,
            (true, Direction::HigherIsBetter) => InsightSlot::High,
            (false, Direction::LowerIsBetter) => InsightSlot::High,
            (false, Direction::HigherIsBetter) => InsightSlot::Low,
        }
    }
}

/// Narrative text for a positioned value.
pub fn select_insight(narrative: &Narrative, direction: Direction, quartile: Quartile) -> &str {
    match InsightSlot::for_position(direction, quartile) {
        InsightSlot::High => &narrative.insight_high,
        InsightSlot::Low => &narrative.insight_low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn narrative() -> Narrative {
        Narrative {
            insight_high: "HIGH".into(),
            insight_low: "LOW".into(),
            insight_aligned: "ALIGNED".into(),
        }
    }

    // Pins every (direction, half) combination to its narrative field.
    #[test]
    fn test_selection_matrix() {
        let n = narrative();
        let cases = [
            (Direction::LowerIsBetter, Quartile::TopQuartile, "LOW"),
            (Direction::LowerIsBetter, Quartile::AboveMedian, "LOW"),
            (Direction::LowerIsBetter, Quartile::BelowMedian, "HIGH"),
            (Direction::LowerIsBetter, Quartile::BottomQuartile, "HIGH"),
            (Direction::HigherIsBetter, Quartile::TopQuartile, "HIGH"),
            (Direction::HigherIsBetter, Quartile::AboveMedian, "HIGH"),
            (Direction::HigherIsBetter, Quartile::BelowMedian, "LOW"),
            (Direction::HigherIsBetter, Quartile::BottomQuartile, "LOW"),
        ];
        for (direction, quartile, expected) in cases {
            assert_eq!(
                select_insight(&n, direction, quartile),
                expected,
                "{direction} / {quartile}"
            );
        }
    }

    #[test]
    fn test_lean_spender_gets_lean_narrative() {
        let rows = crate::catalog::get_benchmarks("financial_services");
        let row = &rows[&crate::types::MetricId::ItSpendPctRevenue];
        let text = select_insight(&row.narrative, row.direction, Quartile::TopQuartile);
        assert!(text.starts_with("Your IT spend is lean"), "{text}");
    }

    #[test]
    fn test_low_cloud_adoption_gets_low_narrative() {
        let rows = crate::catalog::get_benchmarks("healthcare");
        let row = &rows[&crate::types::MetricId::CloudPctBudget];
        let text = select_insight(&row.narrative, row.direction, Quartile::BottomQuartile);
        assert!(text.starts_with("Your cloud adoption is below"), "{text}");
    }
}
