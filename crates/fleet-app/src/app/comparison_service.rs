//! Comparison Service - core use case
//!
//! 1. Resolve the catalog (explicit path, configured path, or built-in)
//! 2. Evaluate the trip against it with the configured tariffs
//! 3. Return the result together with the catalog origin

use std::path::Path;

use fleet_domain::model::{EvaluationResult, TripRequest};
use fleet_domain::service::evaluate;
use fleet_types::{Error, ValidationError};
use thiserror::Error;

use crate::config::Config;
use crate::repository::{open_catalog, CatalogOrigin};

/// Errors specific to the comparison service
#[derive(Debug, Error)]
pub enum ComparisonServiceError {
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(#[source] Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] ValidationError),
}

impl From<ComparisonServiceError> for Error {
    fn from(err: ComparisonServiceError) -> Self {
        match err {
            ComparisonServiceError::CatalogUnavailable(inner) => inner,
            ComparisonServiceError::InvalidRequest(e) => Error::Validation(e),
        }
    }
}

/// Result of a comparison and where its catalog came from
#[derive(Debug, Clone)]
pub struct ComparisonOutcome {
    pub origin: CatalogOrigin,
    pub result: EvaluationResult,
}

/// Main entry point: compare the catalog for one trip
pub fn compare_vehicles(
    config: &Config,
    catalog_path: Option<&Path>,
    request: &TripRequest,
) -> std::result::Result<ComparisonOutcome, ComparisonServiceError> {
    let (catalog, origin) =
        open_catalog(config, catalog_path).map_err(ComparisonServiceError::CatalogUnavailable)?;
    log::info!("comparing {} vehicles from {} catalog", catalog.len(), origin);

    let result = evaluate(&catalog, request, &config.tariffs)?;
    Ok(ComparisonOutcome {
        origin,
        result,
    })
}
