//! Vehicle catalog loader from TOML

use std::fs;
use std::path::Path;

use fleet_domain::model::{Catalog, VehicleProfile};
use fleet_types::{CatalogError, Error, Result};
use serde::{Deserialize, Serialize};

/// Container for parsing catalog.toml
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    vehicles: Vec<VehicleProfile>,
}

/// Load a catalog from a TOML file of `[[vehicles]]` tables
pub fn load_catalog_toml(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    parse_catalog_toml(&content)
}

/// Parse a catalog from TOML text
pub fn parse_catalog_toml(toml_content: &str) -> Result<Catalog> {
    let file: CatalogFile = toml::from_str(toml_content).map_err(|e| {
        CatalogError::ParseError(format!("Failed to parse catalog TOML: {}", e))
    })?;
    log::debug!("parsed {} vehicles from TOML", file.vehicles.len());
    Ok(Catalog::new(file.vehicles)?)
}

/// Render a catalog as TOML, readable by [`parse_catalog_toml`]
pub fn catalog_to_toml(catalog: &Catalog) -> Result<String> {
    let file = CatalogFile {
        vehicles: catalog.profiles().to_vec(),
    };
    toml::to_string_pretty(&file)
        .map_err(|e| CatalogError::ParseError(format!("Failed to write catalog TOML: {}", e)).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_types::{CargoType, EnergyKind, ValidationError};

    const TEST_TOML: &str = r#"
[[vehicles]]
name = "Diesel"
kind = "car"
energy = "diesel"
fuel_l_per_100km = 6.5
urban_kmh = 35
highway_kmh = 100
capacity_kg = 800
capacity_m3 = 3.0
range_km = 800
maintenance_per_km = 45
prefers = ["fragile", "bulky"]

[[vehicles]]
name = "Moto électrique"
kind = "moto"
energy = "electric"
electric_kwh_per_km = 0.04
urban_kmh = 45
highway_kmh = 70
capacity_kg = 80
capacity_m3 = 0.2
range_km = 120
maintenance_per_km = 10
avoids = ["fragile", "dangerous", "bulky"]
prefers = ["light-urgent"]
"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = parse_catalog_toml(TEST_TOML).unwrap();
        assert_eq!(catalog.len(), 2);
        let diesel = catalog.get("Diesel").unwrap();
        assert_eq!(diesel.energy, EnergyKind::Diesel);
        assert_eq!(diesel.range_km, Some(800.0));
        assert_eq!(diesel.prefers, vec![CargoType::Fragile, CargoType::Bulky]);
    }

    #[test]
    fn test_order_is_preserved() {
        let catalog = parse_catalog_toml(TEST_TOML).unwrap();
        assert_eq!(catalog.profiles()[1].name, "Moto électrique");
        assert_eq!(catalog.profiles()[1].prefers, vec![CargoType::LightUrgent]);
    }

    #[test]
    fn test_invalid_profile_rejected() {
        let toml = TEST_TOML.replace("capacity_kg = 80", "capacity_kg = 0");
        let err = parse_catalog_toml(&toml).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidProfile { .. })
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let err = parse_catalog_toml("[[vehicles]]\nname = ").unwrap_err();
        assert!(matches!(err, Error::Catalog(CatalogError::ParseError(_))));
    }

    #[test]
    fn test_empty_catalog() {
        let err = parse_catalog_toml("vehicles = []").unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::EmptyCatalog)));
    }

    #[test]
    fn test_toml_round_trip_keeps_catalog() {
        let catalog = parse_catalog_toml(TEST_TOML).unwrap();
        let rendered = catalog_to_toml(&catalog).unwrap();
        assert_eq!(parse_catalog_toml(&rendered).unwrap(), catalog);
    }

    #[test]
    fn test_missing_file() {
        let err = load_catalog_toml(Path::new("/nonexistent/catalog.toml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
