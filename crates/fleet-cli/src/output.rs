//! Output formatting module

use fleet_app::app::ComparisonOutcome;
use fleet_app::repository::CatalogOrigin;
use fleet_domain::model::{Catalog, EnergyTariffs, EvaluationResult, TripRequest, VehicleProfile};
use fleet_domain::service::{generate_comparison_report, GeoPoint};
use fleet_types::{CargoType, OutputFormat, Result};
use serde::Serialize;

#[derive(Serialize)]
struct ComparisonJson<'a> {
    catalog: String,
    currency: &'a str,
    request: &'a TripRequest,
    result: &'a EvaluationResult,
}

pub fn output_comparison(
    output_format: OutputFormat,
    request: &TripRequest,
    outcome: &ComparisonOutcome,
    tariffs: &EnergyTariffs,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let json = ComparisonJson {
            catalog: outcome.origin.to_string(),
            currency: &tariffs.currency,
            request,
            result: &outcome.result,
        };
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("Catalog: {}", outcome.origin);
        print!("{}", generate_comparison_report(request, &outcome.result, tariffs));
    }

    Ok(())
}

pub fn output_catalog(output_format: OutputFormat, catalog: &Catalog, origin: &CatalogOrigin) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(catalog)?);
        return Ok(());
    }

    println!("\nVehicle Catalog ({})", origin);
    println!("{}", "=".repeat(104));
    println!(
        "{:<22} {:<9} {:<9} {:>10} {:>9} {:>7} {:>7} {:>8} {:>9}  {}",
        "Vehicle", "Kind", "Energy", "Cap(kg)", "Cap(m³)", "Urban", "Hwy", "Range", "Maint/km", "Prefers / avoids"
    );
    println!("{}", "-".repeat(104));
    for profile in catalog {
        let range = profile
            .range_km
            .map(|r| format!("{:.0}", r))
            .unwrap_or_else(|| "-".to_string());
        let prefers: Vec<&str> = profile.prefers.iter().map(|c| c.label()).collect();
        let avoids: Vec<&str> = profile.avoids.iter().map(|c| c.label()).collect();
        println!(
            "{:<22} {:<9} {:<9} {:>10.0} {:>9.1} {:>7.0} {:>7.0} {:>8} {:>9.0}  +{} / -{}",
            profile.name,
            profile.kind.label(),
            profile.energy.label(),
            profile.capacity_kg,
            profile.capacity_m3,
            profile.urban_kmh,
            profile.highway_kmh,
            range,
            profile.maintenance_per_km,
            if prefers.is_empty() { "-".to_string() } else { prefers.join(",") },
            if avoids.is_empty() { "-".to_string() } else { avoids.join(",") },
        );
    }
    println!("\n{} vehicles", catalog.len());

    Ok(())
}

fn cargo_list(cargo: &[CargoType]) -> String {
    if cargo.is_empty() {
        return "-".to_string();
    }
    cargo.iter().map(|c| c.label()).collect::<Vec<_>>().join(", ")
}

pub fn output_vehicle(output_format: OutputFormat, profile: &VehicleProfile, origin: &CatalogOrigin) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(profile)?);
        return Ok(());
    }

    println!("\n{} (catalog: {})", profile.name, origin);
    println!("{}", "=".repeat(50));
    println!("Kind:           {}", profile.kind.label());
    println!("Energy:         {}", profile.energy.label());
    if profile.fuel_l_per_100km > 0.0 {
        println!("Fuel:           {:.1} L/100km", profile.fuel_l_per_100km);
    }
    if profile.electric_kwh_per_km > 0.0 {
        println!("Electricity:    {:.3} kWh/km", profile.electric_kwh_per_km);
    }
    println!("Speed:          {:.0} km/h urban, {:.0} km/h highway", profile.urban_kmh, profile.highway_kmh);
    println!("Capacity:       {:.0} kg, {:.1} m³", profile.capacity_kg, profile.capacity_m3);
    match profile.range_km {
        Some(range) => println!("Range:          {:.0} km", range),
        None => println!("Range:          unlimited"),
    }
    println!("Maintenance:    {:.0} per km", profile.maintenance_per_km);
    if let Some(reliability) = profile.reliability {
        println!("Reliability:    {:.0}%", reliability * 100.0);
    }
    println!("Prefers:        {}", cargo_list(&profile.prefers));
    println!("Avoids:         {}", cargo_list(&profile.avoids));

    Ok(())
}

#[derive(Serialize)]
struct DistanceJson {
    from: GeoPoint,
    to: GeoPoint,
    distance_km: f64,
}

pub fn output_distance(output_format: OutputFormat, from: GeoPoint, to: GeoPoint, distance_km: f64) -> Result<()> {
    if output_format == OutputFormat::Json {
        let json = DistanceJson { from, to, distance_km };
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!(
            "({:.5}, {:.5}) -> ({:.5}, {:.5}): {:.1} km as the crow flies",
            from.lat, from.lon, to.lat, to.lon, distance_km
        );
    }

    Ok(())
}
