//! Domain services

pub mod cargo_fit;
pub mod evaluator;
pub mod geo;
pub mod report;
pub mod scoring;

pub use cargo_fit::assess_cargo_fit;
pub use evaluator::evaluate;
pub use geo::{haversine_km, GeoPoint};
pub use report::generate_comparison_report;
