//! Shared enumerations for vehicles, cargo, roads and CLI output

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Energy carrier of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyKind {
    Gasoline,
    Diesel,
    Electric,
    /// Gasoline engine plus a battery
    Hybrid,
}

impl EnergyKind {
    pub fn label(&self) -> &'static str {
        match self {
            EnergyKind::Gasoline => "gasoline",
            EnergyKind::Diesel => "diesel",
            EnergyKind::Electric => "electric",
            EnergyKind::Hybrid => "hybrid",
        }
    }

    /// Whether the vehicle burns liquid fuel
    pub fn uses_fuel(&self) -> bool {
        !matches!(self, EnergyKind::Electric)
    }

    /// Whether the vehicle draws grid electricity
    pub fn uses_electricity(&self) -> bool {
        matches!(self, EnergyKind::Electric | EnergyKind::Hybrid)
    }
}

impl std::fmt::Display for EnergyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EnergyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gasoline" | "petrol" | "essence" => Ok(EnergyKind::Gasoline),
            "diesel" => Ok(EnergyKind::Diesel),
            "electric" | "électrique" | "electrique" => Ok(EnergyKind::Electric),
            "hybrid" | "hybride" => Ok(EnergyKind::Hybrid),
            other => Err(format!("unknown energy kind: {}", other)),
        }
    }
}

/// Body type of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Moto,
    Car,
    Tricycle,
    Truck,
}

impl VehicleKind {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Moto => "moto",
            VehicleKind::Car => "car",
            VehicleKind::Tricycle => "tricycle",
            VehicleKind::Truck => "truck",
        }
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VehicleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "moto" | "motorbike" => Ok(VehicleKind::Moto),
            "car" | "voiture" => Ok(VehicleKind::Car),
            "tricycle" => Ok(VehicleKind::Tricycle),
            "truck" | "camion" => Ok(VehicleKind::Truck),
            other => Err(format!("unknown vehicle kind: {}", other)),
        }
    }
}

/// Nature of the goods being delivered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CargoType {
    Fragile,
    Perishable,
    Dangerous,
    #[default]
    Standard,
    Bulky,
    LightUrgent,
}

impl CargoType {
    pub const ALL: [CargoType; 6] = [
        CargoType::Fragile,
        CargoType::Perishable,
        CargoType::Dangerous,
        CargoType::Standard,
        CargoType::Bulky,
        CargoType::LightUrgent,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CargoType::Fragile => "fragile",
            CargoType::Perishable => "perishable",
            CargoType::Dangerous => "dangerous",
            CargoType::Standard => "standard",
            CargoType::Bulky => "bulky",
            CargoType::LightUrgent => "light-urgent",
        }
    }
}

impl std::fmt::Display for CargoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CargoType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(&['_', ' ', '/'][..], "-");
        CargoType::ALL
            .into_iter()
            .find(|c| c.label() == normalized)
            .ok_or_else(|| format!("unknown cargo type: {}", s.trim()))
    }
}

/// Road profile of the trip, selects which speed a vehicle runs at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadType {
    Urban,
    #[default]
    Mixed,
    Highway,
}

impl RoadType {
    pub fn label(&self) -> &'static str {
        match self {
            RoadType::Urban => "urban",
            RoadType::Mixed => "mixed",
            RoadType::Highway => "highway",
        }
    }
}

impl std::fmt::Display for RoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How comparisons, catalogs and distances are printed
///
/// Table is for reading in a terminal. Json prints the full result,
/// including every rejection reason, for scripts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_matches_config_spelling() {
        assert_eq!(serde_json::to_string(&OutputFormat::Json).unwrap(), "\"json\"");
        assert_eq!(OutputFormat::default().to_string(), "table");
    }

    #[test]
    fn test_cargo_type_from_str() {
        assert_eq!("Fragile".parse::<CargoType>(), Ok(CargoType::Fragile));
        assert_eq!("light_urgent".parse::<CargoType>(), Ok(CargoType::LightUrgent));
        assert_eq!("light urgent".parse::<CargoType>(), Ok(CargoType::LightUrgent));
        assert!("liquid".parse::<CargoType>().is_err());
    }

    #[test]
    fn test_energy_kind_carriers() {
        assert!(EnergyKind::Hybrid.uses_fuel());
        assert!(EnergyKind::Hybrid.uses_electricity());
        assert!(!EnergyKind::Electric.uses_fuel());
        assert!(!EnergyKind::Diesel.uses_electricity());
        assert_eq!("Essence".parse::<EnergyKind>(), Ok(EnergyKind::Gasoline));
    }

    #[test]
    fn test_vehicle_kind_aliases() {
        assert_eq!("camion".parse::<VehicleKind>(), Ok(VehicleKind::Truck));
        assert_eq!("voiture".parse::<VehicleKind>(), Ok(VehicleKind::Car));
    }
}
