//! Cargo suitability classification

use fleet_types::CargoType;

use crate::model::{CargoFit, VehicleProfile};

/// Classify a vehicle against the cargo type. Avoid tags win over prefer tags.
pub fn assess_cargo_fit(profile: &VehicleProfile, cargo: CargoType) -> CargoFit {
    if profile.avoids.contains(&cargo) {
        CargoFit::Discouraged
    } else if profile.prefers.contains(&cargo) {
        CargoFit::Preferred
    } else {
        CargoFit::Neutral
    }
}
