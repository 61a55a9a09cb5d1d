//! File-based implementation of CatalogRepository

use std::path::{Path, PathBuf};

use fleet_domain::model::Catalog;
use fleet_domain::repository::CatalogRepository;
use fleet_types::{CatalogError, Error};

use crate::catalog_csv::load_catalog_csv;
use crate::catalog_loader::load_catalog_toml;

/// File-based catalog repository (TOML or CSV, chosen by extension)
pub struct FileCatalogRepository {
    path: PathBuf,
    catalog: Catalog,
}

impl FileCatalogRepository {
    /// Create a new repository and load the catalog file
    pub fn new(path: PathBuf) -> Result<Self, Error> {
        let catalog = load_by_extension(&path)?;
        log::info!("loaded {} vehicles from {}", catalog.len(), path.display());
        Ok(Self { path, catalog })
    }

    /// Get the catalog file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogRepository for FileCatalogRepository {
    fn find_all(&self) -> Result<Catalog, Error> {
        Ok(self.catalog.clone())
    }
}

fn load_by_extension(path: &Path) -> Result<Catalog, Error> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("toml") => load_catalog_toml(path),
        Some("csv") => load_catalog_csv(path),
        _ => Err(CatalogError::UnsupportedFormat(path.display().to_string()).into()),
    }
}
