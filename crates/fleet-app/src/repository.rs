//! Repository adapters for the persistence layer

use std::fmt;
use std::path::{Path, PathBuf};

use fleet_domain::model::{Catalog, VehicleProfile};
use fleet_domain::repository::CatalogRepository;
use fleet_infra::persistence::FileCatalogRepository;
use fleet_types::{CatalogError, Result};

use crate::config::Config;
use crate::constants::builtin_catalog;

/// Where the active catalog came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    File(PathBuf),
    BuiltIn,
}

impl fmt::Display for CatalogOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogOrigin::File(path) => write!(f, "{}", path.display()),
            CatalogOrigin::BuiltIn => write!(f, "built-in"),
        }
    }
}

/// Open file-based catalog repository (TOML or CSV)
pub fn open_catalog_repo(path: PathBuf) -> Result<FileCatalogRepository> {
    FileCatalogRepository::new(path)
}

/// The built-in catalog behind the repository trait
pub struct BuiltInCatalogRepository;

impl CatalogRepository for BuiltInCatalogRepository {
    fn find_all(&self) -> Result<Catalog> {
        builtin_catalog()
    }
}

/// Resolve the active catalog repository
///
/// An explicit path must load. A path from the config falls back to the
/// built-in catalog with a warning when it cannot be read.
pub fn resolve_catalog_repo(
    config: &Config,
    explicit: Option<&Path>,
) -> Result<(Box<dyn CatalogRepository>, CatalogOrigin)> {
    if let Some(path) = explicit {
        let repo = open_catalog_repo(path.to_path_buf())?;
        let origin = CatalogOrigin::File(repo.path().to_path_buf());
        return Ok((Box::new(repo), origin));
    }

    if let Some(path) = &config.catalog_path {
        match open_catalog_repo(path.clone()) {
            Ok(repo) => {
                let origin = CatalogOrigin::File(repo.path().to_path_buf());
                return Ok((Box::new(repo), origin));
            }
            Err(e) => log::warn!(
                "cannot load catalog {} ({}), using built-in catalog",
                path.display(),
                e
            ),
        }
    }

    Ok((Box::new(BuiltInCatalogRepository), CatalogOrigin::BuiltIn))
}

/// Resolve and load the active catalog
pub fn open_catalog(config: &Config, explicit: Option<&Path>) -> Result<(Catalog, CatalogOrigin)> {
    let (repo, origin) = resolve_catalog_repo(config, explicit)?;
    Ok((repo.find_all()?, origin))
}

/// Look up one vehicle of the active catalog by name
pub fn find_vehicle(
    config: &Config,
    explicit: Option<&Path>,
    name: &str,
) -> Result<(VehicleProfile, CatalogOrigin)> {
    let (repo, origin) = resolve_catalog_repo(config, explicit)?;
    match repo.find_by_name(name)? {
        Some(profile) => Ok((profile, origin)),
        None => Err(CatalogError::UnknownVehicle(name.to_string()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_types::Error;

    const TOML: &str = r#"
[[vehicles]]
name = "Van"
kind = "car"
energy = "gasoline"
fuel_l_per_100km = 8.0
urban_kmh = 30
highway_kmh = 90
capacity_kg = 900
capacity_m3 = 4.0
"#;

    #[test]
    fn test_builtin_by_default() {
        let (catalog, origin) = open_catalog(&Config::default(), None).unwrap();
        assert_eq!(origin, CatalogOrigin::BuiltIn);
        assert_eq!(catalog.len(), 7);
    }

    #[test]
    fn test_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fleet.toml");
        std::fs::write(&path, TOML).unwrap();

        let config = Config {
            catalog_path: Some(path.clone()),
            ..Config::default()
        };
        let (catalog, origin) = open_catalog(&config, None).unwrap();
        assert_eq!(origin, CatalogOrigin::File(path));
        assert_eq!(catalog.profiles()[0].name, "Van");
    }

    #[test]
    fn test_broken_configured_path_falls_back() {
        let config = Config {
            catalog_path: Some(PathBuf::from("/nonexistent/fleet.toml")),
            ..Config::default()
        };
        let (_, origin) = open_catalog(&config, None).unwrap();
        assert_eq!(origin, CatalogOrigin::BuiltIn);
    }

    #[test]
    fn test_broken_explicit_path_fails() {
        let err = open_catalog(&Config::default(), Some(Path::new("/nonexistent/fleet.csv"))).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }

    #[test]
    fn test_find_vehicle_in_builtin_catalog() {
        let first = builtin_catalog().unwrap().profiles()[0].clone();
        let (profile, origin) = find_vehicle(&Config::default(), None, &first.name).unwrap();
        assert_eq!(profile, first);
        assert_eq!(origin, CatalogOrigin::BuiltIn);
    }

    #[test]
    fn test_find_vehicle_in_file_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fleet.toml");
        std::fs::write(&path, TOML).unwrap();

        let (profile, origin) = find_vehicle(&Config::default(), Some(&path), "Van").unwrap();
        assert_eq!(profile.capacity_kg, 900.0);
        assert_eq!(origin, CatalogOrigin::File(path));
    }

    #[test]
    fn test_find_unknown_vehicle() {
        let err = find_vehicle(&Config::default(), None, "Hovercraft").unwrap_err();
        assert!(matches!(err, Error::Catalog(CatalogError::UnknownVehicle(_))));
    }

    #[test]
    fn test_origin_display() {
        assert_eq!(CatalogOrigin::BuiltIn.to_string(), "built-in");
        assert_eq!(CatalogOrigin::File(PathBuf::from("a.csv")).to_string(), "a.csv");
    }
}
