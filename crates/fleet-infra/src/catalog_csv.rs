//! Vehicle catalog loader from CSV (one vehicle per row)
//!
//! Expected header:
//! name, kind, energy, fuel_l_per_100km, electric_kwh_per_km, urban_kmh,
//! highway_kmh, capacity_kg, capacity_m3, range_km, maintenance_per_km,
//! reliability, prefers, avoids
//!
//! Optional numeric columns may be left empty. `prefers` / `avoids` hold
//! `;`-separated cargo types.

use std::io::Read;
use std::path::Path;

use fleet_domain::model::{Catalog, VehicleProfile};
use fleet_types::{CargoType, CatalogError, EnergyKind, Error, Result, VehicleKind};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CatalogRecord {
    name: String,
    kind: String,
    energy: String,
    #[serde(default)]
    fuel_l_per_100km: Option<f64>,
    #[serde(default)]
    electric_kwh_per_km: Option<f64>,
    urban_kmh: f64,
    highway_kmh: f64,
    capacity_kg: f64,
    capacity_m3: f64,
    #[serde(default)]
    range_km: Option<f64>,
    #[serde(default)]
    maintenance_per_km: Option<f64>,
    #[serde(default)]
    reliability: Option<f64>,
    #[serde(default)]
    prefers: Option<String>,
    #[serde(default)]
    avoids: Option<String>,
}

/// Load a catalog from a CSV file
pub fn load_catalog_csv(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let file = std::fs::File::open(path)?;
    read_catalog_csv(file)
}

/// Read a catalog from any CSV source
pub fn read_catalog_csv<R: Read>(source: R) -> Result<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);

    let mut profiles = Vec::new();
    for (index, record) in reader.deserialize::<CatalogRecord>().enumerate() {
        // Header is line 1
        let row = index + 2;
        let record = record.map_err(|e| CatalogError::InvalidRecord {
            row,
            reason: e.to_string(),
        })?;
        profiles.push(into_profile(record, row)?);
    }
    log::debug!("parsed {} vehicles from CSV", profiles.len());
    Ok(Catalog::new(profiles)?)
}

fn into_profile(record: CatalogRecord, row: usize) -> std::result::Result<VehicleProfile, CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidRecord { row, reason };

    let kind: VehicleKind = record.kind.parse().map_err(invalid)?;
    let energy: EnergyKind = record.energy.parse().map_err(invalid)?;
    let prefers = parse_cargo_list(record.prefers.as_deref()).map_err(invalid)?;
    let avoids = parse_cargo_list(record.avoids.as_deref()).map_err(invalid)?;

    let mut profile = VehicleProfile::new(record.name, kind, energy)
        .with_fuel_consumption(record.fuel_l_per_100km.unwrap_or(0.0))
        .with_electric_consumption(record.electric_kwh_per_km.unwrap_or(0.0))
        .with_speeds(record.urban_kmh, record.highway_kmh)
        .with_capacity(record.capacity_kg, record.capacity_m3)
        .with_maintenance(record.maintenance_per_km.unwrap_or(0.0))
        .preferring(&prefers)
        .avoiding(&avoids);
    profile.range_km = record.range_km;
    profile.reliability = record.reliability;
    Ok(profile)
}

fn parse_cargo_list(field: Option<&str>) -> std::result::Result<Vec<CargoType>, String> {
    field
        .unwrap_or("")
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}
