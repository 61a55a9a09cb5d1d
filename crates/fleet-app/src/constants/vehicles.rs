//! Built-in delivery fleet
//!
//! Used when no catalog file is configured. Coefficients are typical values
//! for a West African urban fleet; costs are in FCFA.

use fleet_domain::model::{Catalog, VehicleProfile};
use fleet_types::{CargoType, EnergyKind, Result, VehicleKind};

use CargoType::*;

/// The seven built-in profiles, in catalog order
pub fn builtin_profiles() -> Vec<VehicleProfile> {
    vec![
        VehicleProfile::new("Diesel", VehicleKind::Car, EnergyKind::Diesel)
            .with_fuel_consumption(6.5)
            .with_speeds(35.0, 100.0)
            .with_capacity(800.0, 3.0)
            .with_range(800.0)
            .with_maintenance(45.0)
            .preferring(&[Fragile, Perishable, Dangerous, Bulky]),
        VehicleProfile::new("Hybride", VehicleKind::Car, EnergyKind::Hybrid)
            .with_fuel_consumption(4.0)
            .with_speeds(40.0, 105.0)
            .with_capacity(700.0, 3.0)
            .with_range(900.0)
            .with_maintenance(40.0)
            .preferring(&[Fragile, Perishable, LightUrgent]),
        VehicleProfile::new("Électrique", VehicleKind::Car, EnergyKind::Electric)
            .with_electric_consumption(0.18)
            .with_speeds(38.0, 110.0)
            .with_capacity(600.0, 2.5)
            .with_range(350.0)
            .with_maintenance(25.0)
            .preferring(&[Fragile, Perishable, LightUrgent])
            .avoiding(&[Bulky]),
        VehicleProfile::new("Diesel camion", VehicleKind::Truck, EnergyKind::Diesel)
            .with_fuel_consumption(28.0)
            .with_speeds(30.0, 85.0)
            .with_capacity(8000.0, 35.0)
            .with_range(1000.0)
            .with_maintenance(120.0),
        VehicleProfile::new("Camion électrique", VehicleKind::Truck, EnergyKind::Electric)
            .with_electric_consumption(1.2)
            .with_speeds(28.0, 80.0)
            .with_capacity(6000.0, 30.0)
            .with_range(300.0)
            .with_maintenance(80.0)
            .preferring(&[Fragile, Dangerous, Bulky])
            .avoiding(&[LightUrgent]),
        VehicleProfile::new("Moto électrique", VehicleKind::Moto, EnergyKind::Electric)
            .with_electric_consumption(0.04)
            .with_speeds(45.0, 70.0)
            .with_capacity(80.0, 0.2)
            .with_range(120.0)
            .with_maintenance(10.0)
            .preferring(&[LightUrgent])
            .avoiding(&[Fragile, Dangerous, Bulky]),
        VehicleProfile::new("Tricycle électrique", VehicleKind::Tricycle, EnergyKind::Electric)
            .with_electric_consumption(0.08)
            .with_speeds(35.0, 60.0)
            .with_capacity(300.0, 2.0)
            .with_range(140.0)
            .with_maintenance(18.0)
            .preferring(&[LightUrgent])
            .avoiding(&[Fragile, Dangerous, Bulky]),
    ]
}

/// Built-in catalog
pub fn builtin_catalog() -> Result<Catalog> {
    Ok(Catalog::new(builtin_profiles())?)
}
