//! Positioning of one value against one quartile band.
//!
//! Four independent pure functions: quartile bucket, normalized 0-100
//! score, delta versus the median, and narrative selection. Bucket
//! boundaries and score anchors coincide: top quartile = 100, median = 50,
//! bottom quartile = 0, with ties resolved toward the better bucket.

pub mod delta;
pub mod insight;
pub mod quartile;
pub mod score;

pub use delta::{get_delta_vs_median, DeltaVsMedian};
pub use insight::{select_insight, InsightSlot};
pub use quartile::classify;
pub use score::normalize_score;
