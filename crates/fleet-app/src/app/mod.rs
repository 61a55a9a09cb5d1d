//! Use cases

pub mod comparison_service;

pub use comparison_service::{compare_vehicles, ComparisonOutcome, ComparisonServiceError};
