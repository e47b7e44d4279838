use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Direction, QuartileBand, Score};

const TOP_SCORE: Score = dec!(100);
const MEDIAN_SCORE: Score = dec!(50);
const BOTTOM_SCORE: Score = dec!(0);

/// Midpoint scores returned for zero-width segments.
const UPPER_MIDPOINT: Score = dec!(75);
const LOWER_MIDPOINT: Score = dec!(25);

/// Map `value` onto 0-100 by piecewise-linear interpolation between the band
/// anchors: 100 at or beyond the top quartile, 50 at the median, 0 at or
/// beyond the bottom quartile.
pub fn normalize_score(band: &QuartileBand, value: Decimal) -> Score {
    let QuartileBand {
        top_quartile: tq,
        median: med,
        bottom_quartile: bq,
        direction,
    } = *band;

    match direction {
        Direction::LowerIsBetter => {
            if value <= tq {
                TOP_SCORE
            } else if value >= bq {
                BOTTOM_SCORE
            } else if value <= med {
                segment(MEDIAN_SCORE, med, tq, value, UPPER_MIDPOINT)
            } else {
                segment(BOTTOM_SCORE, bq, med, value, LOWER_MIDPOINT)
            }
        }
        Direction::HigherIsBetter => {
            if value >= tq {
                TOP_SCORE
            } else if value <= bq {
                BOTTOM_SCORE
            } else if value >= med {
                segment(MEDIAN_SCORE, med, tq, value, UPPER_MIDPOINT)
            } else {
                segment(BOTTOM_SCORE, bq, med, value, LOWER_MIDPOINT)
            }
        }
    }
}

/// Score within one 50-point segment: `floor` plus the distance travelled
/// from the `worse` anchor toward the `better` one, as a share of the
/// segment. Zero-width segments, and anchors too far apart to measure, give
/// `midpoint`.
fn segment(
    floor: Score,
    worse: Decimal,
    better: Decimal,
    value: Decimal,
    midpoint: Score,
) -> Score {
    let (Some(travelled), Some(width)) = (value.checked_sub(worse), better.checked_sub(worse))
    else {
        return midpoint;
    };
    if width == Decimal::ZERO {
        return midpoint;
    }
    match travelled.checked_div(width) {
        Some(share) => floor + dec!(50) * share,
        None => midpoint,
    }
}
