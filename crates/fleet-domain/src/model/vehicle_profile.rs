//! Vehicle profile and catalog type definitions

use std::collections::HashSet;

use fleet_types::{CargoType, EnergyKind, RoadType, ValidationError, VehicleKind};
use serde::{Deserialize, Serialize};

/// Static coefficients describing one delivery vehicle option
///
/// Liquid fuel consumption is always expressed in L/100km and electric
/// consumption in kWh/km. A hybrid carries both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    /// Display name, unique within a catalog (e.g. "Diesel camion")
    pub name: String,
    pub kind: VehicleKind,
    pub energy: EnergyKind,
    /// Liquid fuel consumption (L/100km)
    #[serde(default)]
    pub fuel_l_per_100km: f64,
    /// Electric consumption (kWh/km)
    #[serde(default)]
    pub electric_kwh_per_km: f64,
    /// Average speed in town (km/h)
    pub urban_kmh: f64,
    /// Average speed on highways (km/h)
    pub highway_kmh: f64,
    /// Maximum payload (kg)
    pub capacity_kg: f64,
    /// Maximum cargo volume (m³)
    pub capacity_m3: f64,
    /// Distance covered before a refuel/recharge stop, None = unlimited
    #[serde(default)]
    pub range_km: Option<f64>,
    /// Maintenance cost per km, in tariff currency
    #[serde(default)]
    pub maintenance_per_km: f64,
    /// Share of trips completed without incident (0.0-1.0)
    #[serde(default)]
    pub reliability: Option<f64>,
    /// Cargo types this vehicle is well suited to
    #[serde(default)]
    pub prefers: Vec<CargoType>,
    /// Cargo types this vehicle should not carry
    #[serde(default)]
    pub avoids: Vec<CargoType>,
}

impl VehicleProfile {
    pub fn new(name: impl Into<String>, kind: VehicleKind, energy: EnergyKind) -> Self {
        Self {
            name: name.into(),
            kind,
            energy,
            fuel_l_per_100km: 0.0,
            electric_kwh_per_km: 0.0,
            urban_kmh: 0.0,
            highway_kmh: 0.0,
            capacity_kg: 0.0,
            capacity_m3: 0.0,
            range_km: None,
            maintenance_per_km: 0.0,
            reliability: None,
            prefers: Vec::new(),
            avoids: Vec::new(),
        }
    }

    pub fn with_fuel_consumption(mut self, l_per_100km: f64) -> Self {
        self.fuel_l_per_100km = l_per_100km;
        self
    }

    pub fn with_electric_consumption(mut self, kwh_per_km: f64) -> Self {
        self.electric_kwh_per_km = kwh_per_km;
        self
    }

    pub fn with_speeds(mut self, urban_kmh: f64, highway_kmh: f64) -> Self {
        self.urban_kmh = urban_kmh;
        self.highway_kmh = highway_kmh;
        self
    }

    /// Same speed whatever the road type
    pub fn with_uniform_speed(self, kmh: f64) -> Self {
        self.with_speeds(kmh, kmh)
    }

    pub fn with_capacity(mut self, kg: f64, m3: f64) -> Self {
        self.capacity_kg = kg;
        self.capacity_m3 = m3;
        self
    }

    pub fn with_range(mut self, km: f64) -> Self {
        self.range_km = Some(km);
        self
    }

    pub fn with_maintenance(mut self, per_km: f64) -> Self {
        self.maintenance_per_km = per_km;
        self
    }

    pub fn with_reliability(mut self, reliability: f64) -> Self {
        self.reliability = Some(reliability);
        self
    }

    pub fn preferring(mut self, cargo: &[CargoType]) -> Self {
        self.prefers.extend_from_slice(cargo);
        self
    }

    pub fn avoiding(mut self, cargo: &[CargoType]) -> Self {
        self.avoids.extend_from_slice(cargo);
        self
    }

    /// Average speed for the given road type; mixed roads use the mean
    pub fn speed_for(&self, road: RoadType) -> f64 {
        match road {
            RoadType::Urban => self.urban_kmh,
            RoadType::Highway => self.highway_kmh,
            RoadType::Mixed => 0.5 * (self.urban_kmh + self.highway_kmh),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let invalid = |reason: String| ValidationError::InvalidProfile {
            name: self.name.clone(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name is empty".to_string()));
        }
        let non_negative = [
            ("fuel consumption", self.fuel_l_per_100km),
            ("electric consumption", self.electric_kwh_per_km),
            ("maintenance cost", self.maintenance_per_km),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{} must be >= 0 (got {})", field, value)));
            }
        }
        let positive = [
            ("urban speed", self.urban_kmh),
            ("highway speed", self.highway_kmh),
            ("weight capacity", self.capacity_kg),
            ("volume capacity", self.capacity_m3),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(format!("{} must be > 0 (got {})", field, value)));
            }
        }
        if let Some(range) = self.range_km {
            if range.is_nan() || range <= 0.0 {
                return Err(invalid(format!("range must be > 0 (got {})", range)));
            }
        }
        if let Some(reliability) = self.reliability {
            if !(0.0..=1.0).contains(&reliability) {
                return Err(invalid(format!(
                    "reliability must be within 0-1 (got {})",
                    reliability
                )));
            }
        }
        Ok(())
    }
}

/// Ordered, validated, read-only set of vehicle profiles
///
/// Catalog order is significant: it decides ties between equally ranked
/// vehicles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    profiles: Vec<VehicleProfile>,
}

impl Catalog {
    pub fn new(profiles: Vec<VehicleProfile>) -> Result<Self, ValidationError> {
        if profiles.is_empty() {
            return Err(ValidationError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for profile in &profiles {
            profile.validate()?;
            if !seen.insert(profile.name.as_str()) {
                return Err(ValidationError::DuplicateVehicle(profile.name.clone()));
            }
        }
        Ok(Self { profiles })
    }

    pub fn profiles(&self) -> &[VehicleProfile] {
        &self.profiles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VehicleProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Always false: an empty catalog cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&VehicleProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a VehicleProfile;
    type IntoIter = std::slice::Iter<'a, VehicleProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.profiles.iter()
    }
}
