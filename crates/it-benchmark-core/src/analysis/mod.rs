//! Orchestration: derive, position each metric in display order, reduce to
//! summary statistics, and (with the `report` feature) assemble the full
//! report envelope.

pub mod pipeline;
pub mod summary;

#[cfg(feature = "report")]
pub mod report;
