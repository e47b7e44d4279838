pub mod analysis;
pub mod catalog;
