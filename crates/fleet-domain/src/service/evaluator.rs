//! Feasibility filter and weighted ranking of a vehicle catalog
//!
//! Every vehicle goes through the same checks, in order:
//! capacity, range (with optional stops), travel time against the arrival
//! window. Survivors get cost and emission figures and are ranked by a
//! min-max normalised weighted score.

use fleet_types::ValidationError;
use log::{debug, info, warn};

use super::cargo_fit::assess_cargo_fit;
use super::scoring::{select_best, weighted_scores, CriterionValues};
use crate::model::{
    CargoFit, Catalog, EnergyTariffs, EvaluationResult, Rejection, TripMetrics, TripRequest,
    VehicleProfile, VehicleRow,
};

/// Energy drawn over a trip and what it costs
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnergyUse {
    pub fuel_litres: f64,
    pub electricity_kwh: f64,
    pub cost: f64,
    pub emissions_kg: f64,
}

/// Evaluate every catalog vehicle against the trip and rank the feasible ones
///
/// Only malformed input fails. Vehicles that break a constraint stay in the
/// result with their rejection reason, and a result with no feasible vehicle
/// is returned as such.
pub fn evaluate(
    catalog: &Catalog,
    request: &TripRequest,
    tariffs: &EnergyTariffs,
) -> Result<EvaluationResult, ValidationError> {
    request.validate()?;
    tariffs.validate()?;

    let mut rows = Vec::with_capacity(catalog.len());
    let mut feasible: Vec<(usize, CriterionValues)> = Vec::new();

    for profile in catalog {
        let cargo_fit = assess_cargo_fit(profile, request.cargo_type);
        let (metrics, rejection) = match assess_vehicle(profile, request, tariffs) {
            Ok(metrics) => {
                debug!(
                    "{}: feasible, {:.2} h, cost {:.0}, {:.2} kg CO2",
                    profile.name, metrics.trip_time_h, metrics.total_cost, metrics.emissions_kg
                );
                feasible.push((rows.len(), criterion_values(profile, &metrics, cargo_fit)));
                (Some(metrics), None)
            }
            Err(rejection) => {
                debug!("{}: rejected, {}", profile.name, rejection);
                (None, Some(rejection))
            }
        };
        rows.push(VehicleRow {
            name: profile.name.clone(),
            kind: profile.kind,
            energy: profile.energy,
            cargo_fit,
            metrics,
            score: None,
            rejection,
        });
    }

    let values: Vec<CriterionValues> = feasible.iter().map(|(_, v)| *v).collect();
    let scores = weighted_scores(&values, &request.weights);
    for ((index, _), score) in feasible.iter().zip(scores) {
        rows[*index].score = Some(score);
    }

    let best = select_best(&rows);
    if feasible.is_empty() {
        warn!(
            "no feasible vehicle among {} for {:.1} km / {:.2} h",
            rows.len(),
            request.distance_km,
            request.deadline_h
        );
    } else {
        info!(
            "{} of {} vehicles feasible, best overall: {}",
            feasible.len(),
            rows.len(),
            best.best_overall
                .map(|i| rows[i].name.as_str())
                .unwrap_or("-")
        );
    }

    Ok(EvaluationResult { rows, best })
}

/// Run the constraint checks for one vehicle and compute its metrics
pub fn assess_vehicle(
    profile: &VehicleProfile,
    request: &TripRequest,
    tariffs: &EnergyTariffs,
) -> Result<TripMetrics, Rejection> {
    check_capacity(profile, request)?;
    let stops = plan_stops(profile, request)?;

    let effective_speed_kmh = profile.speed_for(request.road_type) * request.traffic_factor;
    let base_time_h = request.distance_km / effective_speed_kmh;
    let stop_time_h = f64::from(stops) * request.stop_duration_h();
    let trip_time_h = base_time_h + stop_time_h;
    check_deadline(trip_time_h, request)?;

    let energy = energy_use(profile, request.distance_km, tariffs);
    let maintenance_cost =
        (profile.maintenance_per_km + request.maintenance_surcharge_per_km) * request.distance_km;

    Ok(TripMetrics {
        effective_speed_kmh,
        base_time_h,
        stops,
        stop_time_h,
        trip_time_h,
        fuel_litres: energy.fuel_litres,
        electricity_kwh: energy.electricity_kwh,
        energy_cost: energy.cost,
        maintenance_cost,
        total_cost: energy.cost + maintenance_cost,
        emissions_kg: energy.emissions_kg,
    })
}

fn check_capacity(profile: &VehicleProfile, request: &TripRequest) -> Result<(), Rejection> {
    if request.cargo_weight_kg > profile.capacity_kg || request.cargo_volume_m3 > profile.capacity_m3 {
        return Err(Rejection::CapacityExceeded {
            cargo_kg: request.cargo_weight_kg,
            capacity_kg: profile.capacity_kg,
            cargo_m3: request.cargo_volume_m3,
            capacity_m3: profile.capacity_m3,
        });
    }
    Ok(())
}

/// Number of refuel/recharge stops the trip forces on the vehicle
///
/// A trip of 1.5x the range needs one stop: `ceil(distance / range) - 1`.
pub fn plan_stops(profile: &VehicleProfile, request: &TripRequest) -> Result<u32, Rejection> {
    let range_km = match profile.range_km {
        Some(range) if request.distance_km > range => range,
        _ => return Ok(0),
    };
    if !request.allow_stops {
        return Err(Rejection::RangeExceeded {
            distance_km: request.distance_km,
            range_km,
        });
    }
    let legs = (request.distance_km / range_km).ceil();
    Ok((legs - 1.0).max(0.0) as u32)
}

fn check_deadline(trip_time_h: f64, request: &TripRequest) -> Result<(), Rejection> {
    if request.margin.contains(trip_time_h, request.deadline_h) {
        return Ok(());
    }
    Err(Rejection::DeadlineWindowViolation {
        trip_time_h,
        earliest_h: request.margin.earliest_h(request.deadline_h),
        latest_h: request.margin.latest_h(request.deadline_h),
    })
}

/// Fuel and electricity drawn over `distance_km`, priced and converted to CO2
///
/// Hybrids add up both parts.
pub fn energy_use(profile: &VehicleProfile, distance_km: f64, tariffs: &EnergyTariffs) -> EnergyUse {
    let mut usage = EnergyUse::default();

    if profile.energy.uses_fuel() {
        let litres = profile.fuel_l_per_100km / 100.0 * distance_km;
        usage.fuel_litres = litres;
        usage.cost += litres * tariffs.fuel_price_per_l(profile.energy);
        usage.emissions_kg += litres * tariffs.fuel_co2_per_l(profile.energy);
    }
    if profile.energy.uses_electricity() {
        let kwh = profile.electric_kwh_per_km * distance_km;
        usage.electricity_kwh = kwh;
        usage.cost += kwh * tariffs.electricity_price_per_kwh;
        usage.emissions_kg += kwh * tariffs.grid_co2_per_kwh;
    }

    usage
}

fn criterion_values(profile: &VehicleProfile, metrics: &TripMetrics, cargo_fit: CargoFit) -> CriterionValues {
    CriterionValues {
        cost: metrics.total_cost,
        time: metrics.trip_time_h,
        emissions: metrics.emissions_kg,
        maintenance: metrics.maintenance_cost,
        unreliability: 1.0 - profile.reliability.unwrap_or(1.0),
        cargo_fit_rank: f64::from(cargo_fit.rank()),
    }
}
