//! Repository trait definitions for catalog access

use crate::model::{Catalog, VehicleProfile};
use fleet_types::Error;

/// Source of the vehicle catalog
pub trait CatalogRepository {
    /// Load the full catalog, in its declared order
    fn find_all(&self) -> Result<Catalog, Error>;

    /// Find a single profile by vehicle name
    fn find_by_name(&self, name: &str) -> Result<Option<VehicleProfile>, Error> {
        Ok(self.find_all()?.get(name).cloned())
    }
}
