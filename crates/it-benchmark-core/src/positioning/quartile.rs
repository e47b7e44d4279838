use rust_decimal::Decimal;

use crate::types::{Direction, Quartile, QuartileBand};

/// Which quartile bucket `value` falls into. Boundary values belong to the
/// better bucket.
pub fn classify(band: &QuartileBand, value: Decimal) -> Quartile {
    // True when `value` is at or beyond `threshold` on the favorable side.
    let at_or_better = |threshold: Decimal| match band.direction {
        Direction::LowerIsBetter => value <= threshold,
        Direction::HigherIsBetter => value >= threshold,
    };

    if at_or_better(band.top_quartile) {
        Quartile::TopQuartile
    } else if at_or_better(band.median) {
        Quartile::AboveMedian
    } else if at_or_better(band.bottom_quartile) {
        Quartile::BelowMedian
    } else {
        Quartile::BottomQuartile
    }
}
