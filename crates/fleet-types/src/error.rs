//! Error types for fleet-advisor

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Vehicle catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to parse catalog: {0}")]
    ParseError(String),

    #[error("Catalog entry {row}: {reason}")]
    InvalidRecord { row: usize, reason: String },

    #[error("No vehicle named \"{0}\" in the catalog")]
    UnknownVehicle(String),
}

/// Invalid input rejected before any vehicle is evaluated
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Distance must be positive (got {0} km)")]
    NonPositiveDistance(f64),

    #[error("Deadline must be positive (got {0} h)")]
    NonPositiveDeadline(f64),

    #[error("Cargo weight must be positive (got {0} kg)")]
    NonPositiveCargoWeight(f64),

    #[error("Cargo volume must not be negative (got {0} m³)")]
    NegativeCargoVolume(f64),

    #[error("Weight for {criterion} must be a non-negative number (got {value})")]
    InvalidWeight { criterion: &'static str, value: f64 },

    #[error("{0} must be a finite number")]
    NonFinite(&'static str),

    #[error("Stop duration must not be negative (got {0} min)")]
    NegativeStopDuration(f64),

    #[error("Traffic factor must be positive (got {0})")]
    NonPositiveTrafficFactor(f64),

    #[error("Maintenance surcharge must not be negative (got {0} per km)")]
    NegativeSurcharge(f64),

    #[error("Invalid margin window: {min_minutes}-{max_minutes} min")]
    InvalidMarginWindow { min_minutes: f64, max_minutes: f64 },

    #[error("Tariff {field} must be a non-negative number (got {value})")]
    InvalidTariff { field: &'static str, value: f64 },

    #[error("Vehicle catalog is empty")]
    EmptyCatalog,

    #[error("Duplicate vehicle in catalog: {0}")]
    DuplicateVehicle(String),

    #[error("Invalid vehicle profile {name}: {reason}")]
    InvalidProfile { name: String, reason: String },

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts() {
        let err: Error = ValidationError::NonPositiveDistance(0.0).into();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.to_string(), "Invalid input: Distance must be positive (got 0 km)");
    }

    #[test]
    fn test_catalog_record_message() {
        let err = CatalogError::InvalidRecord {
            row: 3,
            reason: "missing name".to_string(),
        };
        assert_eq!(err.to_string(), "Catalog entry 3: missing name");
    }
}
