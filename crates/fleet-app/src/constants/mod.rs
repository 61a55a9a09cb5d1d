//! Constants for vehicle comparison

pub mod vehicles;

pub use vehicles::{builtin_catalog, builtin_profiles};
