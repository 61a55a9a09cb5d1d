//! Energy prices and emission factors

use fleet_types::{EnergyKind, ValidationError};
use serde::{Deserialize, Serialize};

/// Unit prices and CO2 factors used to turn consumption into cost and emissions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyTariffs {
    /// Currency label used in reports (prices are expressed in it)
    pub currency: String,
    pub gasoline_price_per_l: f64,
    pub diesel_price_per_l: f64,
    pub electricity_price_per_kwh: f64,
    /// kg CO2 per litre of gasoline burnt
    pub gasoline_co2_per_l: f64,
    /// kg CO2 per litre of diesel burnt
    pub diesel_co2_per_l: f64,
    /// kg CO2 per kWh drawn from the grid
    pub grid_co2_per_kwh: f64,
}

impl Default for EnergyTariffs {
    fn default() -> Self {
        Self {
            currency: "FCFA".to_string(),
            gasoline_price_per_l: 695.0,
            diesel_price_per_l: 720.0,
            electricity_price_per_kwh: 109.0,
            gasoline_co2_per_l: 2.31,
            diesel_co2_per_l: 2.68,
            grid_co2_per_kwh: 0.12,
        }
    }
}

impl EnergyTariffs {
    /// Price per litre of the fuel a vehicle burns. Hybrids burn gasoline.
    pub fn fuel_price_per_l(&self, energy: EnergyKind) -> f64 {
        match energy {
            EnergyKind::Diesel => self.diesel_price_per_l,
            _ => self.gasoline_price_per_l,
        }
    }

    pub fn fuel_co2_per_l(&self, energy: EnergyKind) -> f64 {
        match energy {
            EnergyKind::Diesel => self.diesel_co2_per_l,
            _ => self.gasoline_co2_per_l,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("gasoline_price_per_l", self.gasoline_price_per_l),
            ("diesel_price_per_l", self.diesel_price_per_l),
            ("electricity_price_per_kwh", self.electricity_price_per_kwh),
            ("gasoline_co2_per_l", self.gasoline_co2_per_l),
            ("diesel_co2_per_l", self.diesel_co2_per_l),
            ("grid_co2_per_kwh", self.grid_co2_per_kwh),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidTariff { field, value });
            }
        }
        Ok(())
    }
}
