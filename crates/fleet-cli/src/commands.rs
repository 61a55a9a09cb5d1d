//! Command handlers

use crate::cli::{Cli, Commands, TripArgs};
use crate::output::{output_catalog, output_comparison, output_distance, output_vehicle};
use fleet_app::app::compare_vehicles;
use fleet_app::config::Config;
use fleet_app::export::export_to_excel;
use fleet_app::repository::{find_vehicle, open_catalog};
use fleet_domain::model::{CriterionWeights, MarginWindow, TripRequest};
use fleet_domain::service::{haversine_km, GeoPoint};
use fleet_infra::catalog_loader::catalog_to_toml;
use fleet_types::{ConfigError, Error, OutputFormat, Result, ValidationError};
use std::path::{Path, PathBuf};

fn config_path(cli: &Cli) -> Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => Config::config_path(),
    }
}

pub fn execute(cli: Cli) -> Result<()> {
    let config_path = config_path(&cli)?;

    // Reset must work even when the stored file no longer parses
    if let Commands::Config { reset: true, .. } = &cli.command {
        return cmd_config_reset(&config_path);
    }

    let config = Config::load_from(&config_path)?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Compare { trip } => cmd_compare(&config, trip, output_format),

        Commands::Export { trip, output } => cmd_export(&config, trip, output.clone()),

        Commands::Catalog {
            catalog,
            vehicle: Some(name),
            ..
        } => cmd_vehicle(&config, catalog.as_deref(), name, output_format),

        Commands::Catalog { catalog, toml, vehicle: None } => {
            cmd_catalog(&config, catalog.as_deref(), *toml, output_format)
        }

        Commands::Distance { from, to } => cmd_distance(*from, *to, output_format),

        Commands::Config {
            show,
            set_catalog,
            clear_catalog,
            set_output,
            set_currency,
            set_gasoline_price,
            set_diesel_price,
            set_electricity_price,
            set_gasoline_co2,
            set_diesel_co2,
            set_grid_co2,
            set_min_margin,
            set_max_margin,
            set_single_sided,
            set_stop_minutes,
            set_allow_stops,
            set_weights,
            ..
        } => {
            let updates = ConfigUpdates {
                catalog: set_catalog.clone(),
                clear_catalog: *clear_catalog,
                output: *set_output,
                currency: set_currency.clone(),
                gasoline_price: *set_gasoline_price,
                diesel_price: *set_diesel_price,
                electricity_price: *set_electricity_price,
                gasoline_co2: *set_gasoline_co2,
                diesel_co2: *set_diesel_co2,
                grid_co2: *set_grid_co2,
                min_margin: *set_min_margin,
                max_margin: *set_max_margin,
                single_sided: *set_single_sided,
                stop_minutes: *set_stop_minutes,
                allow_stops: *set_allow_stops,
                weights: set_weights.clone(),
            };
            cmd_config(config, &config_path, updates, *show)
        }
    }
}

/// Build the trip request: config defaults first, then per-call flags
pub fn build_request(config: &Config, trip: &TripArgs) -> Result<TripRequest> {
    let distance_km = match (trip.distance, trip.from, trip.to) {
        (Some(distance), _, _) => distance,
        (None, Some(from), Some(to)) => {
            let km = haversine_km(from, to);
            log::info!("great-circle distance {:.1} km", km);
            km
        }
        _ => return Err(ValidationError::NonPositiveDistance(0.0).into()),
    };

    let mut margin = config.margin;
    if let Some(min) = trip.min_margin {
        margin.min_minutes = min;
    }
    if let Some(max) = trip.max_margin {
        margin.max_minutes = Some(max);
    }
    if trip.single_sided {
        margin = MarginWindow::single_sided(margin.min_minutes);
    }

    let mut weights = config.weights;
    let overrides = [
        (&mut weights.cost, trip.w_cost),
        (&mut weights.time, trip.w_time),
        (&mut weights.emissions, trip.w_emissions),
        (&mut weights.maintenance, trip.w_maintenance),
        (&mut weights.reliability, trip.w_reliability),
        (&mut weights.cargo_fit, trip.w_cargo_fit),
    ];
    for (slot, value) in overrides {
        if let Some(value) = value {
            *slot = value;
        }
    }

    let request = config
        .trip_request(distance_km, trip.deadline, trip.weight, trip.volume)
        .with_cargo_type(trip.cargo)
        .with_road_type(trip.road)
        .with_traffic_factor(trip.traffic)
        .with_stops(
            config.allow_stops && !trip.no_stops,
            trip.stop_minutes.unwrap_or(config.stop_duration_minutes),
        )
        .with_margin(margin)
        .with_maintenance_surcharge(trip.surcharge)
        .with_weights(weights);
    Ok(request)
}

fn cmd_compare(config: &Config, trip: &TripArgs, output_format: OutputFormat) -> Result<()> {
    let request = build_request(config, trip)?;
    let outcome = compare_vehicles(config, trip.catalog.as_deref(), &request)?;
    output_comparison(output_format, &request, &outcome, &config.tariffs)
}

fn cmd_export(config: &Config, trip: &TripArgs, output: Option<PathBuf>) -> Result<()> {
    let request = build_request(config, trip)?;
    let outcome = compare_vehicles(config, trip.catalog.as_deref(), &request)?;

    let output_path = output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "fleet-comparison-{}.xlsx",
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        ))
    });
    export_to_excel(&request, &outcome.result, &config.tariffs, &output_path)?;

    println!(
        "Exported {} vehicles ({} feasible) to {}",
        outcome.result.rows.len(),
        outcome.result.feasible_count(),
        output_path.display()
    );
    Ok(())
}

fn cmd_catalog(config: &Config, catalog_path: Option<&Path>, as_toml: bool, output_format: OutputFormat) -> Result<()> {
    let (catalog, origin) = open_catalog(config, catalog_path)?;
    if as_toml {
        print!("{}", catalog_to_toml(&catalog)?);
        return Ok(());
    }
    output_catalog(output_format, &catalog, &origin)
}

fn cmd_vehicle(config: &Config, catalog_path: Option<&Path>, name: &str, output_format: OutputFormat) -> Result<()> {
    let (profile, origin) = find_vehicle(config, catalog_path, name)?;
    output_vehicle(output_format, &profile, &origin)
}

fn cmd_distance(from: GeoPoint, to: GeoPoint, output_format: OutputFormat) -> Result<()> {
    output_distance(output_format, from, to, haversine_km(from, to))
}

/// Values to change in the stored config
#[derive(Debug, Default)]
pub struct ConfigUpdates {
    pub catalog: Option<PathBuf>,
    pub clear_catalog: bool,
    pub output: Option<OutputFormat>,
    pub currency: Option<String>,
    pub gasoline_price: Option<f64>,
    pub diesel_price: Option<f64>,
    pub electricity_price: Option<f64>,
    pub gasoline_co2: Option<f64>,
    pub diesel_co2: Option<f64>,
    pub grid_co2: Option<f64>,
    pub min_margin: Option<f64>,
    pub max_margin: Option<f64>,
    pub single_sided: bool,
    pub stop_minutes: Option<f64>,
    pub allow_stops: Option<bool>,
    pub weights: Option<String>,
}

impl ConfigUpdates {
    /// Apply to `config`, returning whether anything changed
    pub fn apply(self, config: &mut Config) -> Result<bool> {
        let mut modified = false;

        if let Some(path) = self.catalog {
            config.catalog_path = Some(path);
            modified = true;
        }
        if self.clear_catalog {
            config.catalog_path = None;
            modified = true;
        }
        if let Some(format) = self.output {
            config.output_format = format;
            modified = true;
        }
        if let Some(currency) = self.currency {
            config.tariffs.currency = currency;
            modified = true;
        }

        let tariffs = &mut config.tariffs;
        let numbers = [
            (&mut tariffs.gasoline_price_per_l, self.gasoline_price),
            (&mut tariffs.diesel_price_per_l, self.diesel_price),
            (&mut tariffs.electricity_price_per_kwh, self.electricity_price),
            (&mut tariffs.gasoline_co2_per_l, self.gasoline_co2),
            (&mut tariffs.diesel_co2_per_l, self.diesel_co2),
            (&mut tariffs.grid_co2_per_kwh, self.grid_co2),
            (&mut config.margin.min_minutes, self.min_margin),
            (&mut config.stop_duration_minutes, self.stop_minutes),
        ];
        for (slot, value) in numbers {
            if let Some(value) = value {
                *slot = value;
                modified = true;
            }
        }

        if let Some(max) = self.max_margin {
            config.margin.max_minutes = Some(max);
            modified = true;
        }
        if self.single_sided {
            config.margin.max_minutes = None;
            modified = true;
        }
        if let Some(allow) = self.allow_stops {
            config.allow_stops = allow;
            modified = true;
        }
        if let Some(weights) = self.weights {
            config.weights = parse_weights(&weights)?;
            modified = true;
        }

        Ok(modified)
    }
}

/// Parse "cost,time,emissions[,maintenance,reliability,cargo_fit]"
pub fn parse_weights(s: &str) -> Result<CriterionWeights> {
    let values = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| ValidationError::NonFinite("weight"))
        })
        .collect::<std::result::Result<Vec<f64>, _>>()?;

    let weights = match values.as_slice() {
        [cost, time, emissions] => CriterionWeights::new(*cost, *time, *emissions),
        [cost, time, emissions, maintenance, reliability, cargo_fit] => {
            CriterionWeights::new(*cost, *time, *emissions)
                .with_maintenance(*maintenance)
                .with_reliability(*reliability)
                .with_cargo_fit(*cargo_fit)
        }
        _ => {
            return Err(Error::Config(ConfigError::ParseError(format!(
                "expected 3 or 6 comma-separated weights, got \"{}\"",
                s
            ))));
        }
    };
    weights.validate()?;
    Ok(weights)
}

fn cmd_config_reset(path: &Path) -> Result<()> {
    let config = Config::default();
    config.save_to(path)?;
    println!("Configuration reset to defaults");
    println!("\n{}", config);
    println!("Config file:      {}", path.display());
    Ok(())
}

fn cmd_config(mut config: Config, path: &Path, updates: ConfigUpdates, show: bool) -> Result<()> {
    let modified = updates.apply(&mut config)?;
    if modified {
        config.save_to(path)?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
        println!("Config file:      {}", path.display());
    }

    Ok(())
}
