use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Percent, QuartileBand};

/// Signed distance of a value from the band median.
///
/// The sign follows the raw value, not the metric's direction: a positive
/// delta on a lower-is-better metric is unfavorable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaVsMedian {
    pub delta: Decimal,
    pub delta_pct: Percent,
}

/// Results that do not fit a `Decimal` saturate at `MAX`/`MIN` with the
/// sign they would have had. A zero median gives a zero percentage.
pub fn get_delta_vs_median(band: &QuartileBand, value: Decimal) -> DeltaVsMedian {
    let median = band.median;
    let delta = value
        .checked_sub(median)
        .unwrap_or_else(|| saturated(value > median));
    let delta_pct = if median != Decimal::ZERO {
        delta
            .checked_div(median)
            .and_then(|r| r.checked_mul(dec!(100)))
            .unwrap_or_else(|| saturated((delta > Decimal::ZERO) == (median > Decimal::ZERO)))
    } else {
        Decimal::ZERO
    };
    DeltaVsMedian { delta, delta_pct }
}

fn saturated(positive: bool) -> Decimal {
    if positive {
        Decimal::MAX
    } else {
        Decimal::MIN
    }
}
