use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::pipeline::MetricResult;
use crate::types::{Quartile, Score};

/// Distribution of a result set across quartile buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total: usize,
    pub top_quartile: usize,
    pub above_median: usize,
    pub below_median: usize,
    pub bottom_quartile: usize,
    pub average_score: Score,
}

impl AnalysisSummary {
    pub fn count(&self, quartile: Quartile) -> usize {
        match quartile {
            Quartile::TopQuartile => self.top_quartile,
            Quartile::AboveMedian => self.above_median,
            Quartile::BelowMedian => self.below_median,
            Quartile::BottomQuartile => self.bottom_quartile,
        }
    }
}

/// Bucket counts and unweighted mean score. Empty input gives all zeros.
pub fn get_summary_stats<'a, I>(results: I) -> AnalysisSummary
where
    I: IntoIterator<Item = &'a MetricResult>,
{
    let mut summary = AnalysisSummary::default();
    let mut score_sum = Decimal::ZERO;

    for r in results {
        summary.total += 1;
        score_sum += r.score;
        match r.quartile {
            Quartile::TopQuartile => summary.top_quartile += 1,
            Quartile::AboveMedian => summary.above_median += 1,
            Quartile::BelowMedian => summary.below_median += 1,
            Quartile::BottomQuartile => summary.bottom_quartile += 1,
        }
    }

    if summary.total > 0 {
        summary.average_score = score_sum / Decimal::from(summary.total as u64);
    }
    summary
}
