//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use fleet_domain::service::GeoPoint;
use fleet_types::{CargoType, OutputFormat, RoadType};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fleet-advisor")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Compare delivery vehicles for a trip: feasibility, cost, travel time and CO2")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Trip parameters shared by `compare` and `export`
#[derive(Args, Debug, Clone)]
pub struct TripArgs {
    /// Trip distance in km
    #[arg(long, short = 'd', required_unless_present_all = ["from", "to"], conflicts_with_all = ["from", "to"])]
    pub distance: Option<f64>,

    /// Origin as "lat,lon" (distance computed as the crow flies)
    #[arg(long, requires = "to", allow_hyphen_values = true)]
    pub from: Option<GeoPoint>,

    /// Destination as "lat,lon"
    #[arg(long, requires = "from", allow_hyphen_values = true)]
    pub to: Option<GeoPoint>,

    /// Time available until the deadline, in hours
    #[arg(long)]
    pub deadline: f64,

    /// Cargo weight in kg
    #[arg(long, short = 'w')]
    pub weight: f64,

    /// Cargo volume in m³
    #[arg(long, default_value_t = 0.0)]
    pub volume: f64,

    /// Cargo type
    #[arg(long, value_enum, default_value_t)]
    pub cargo: CargoType,

    /// Road type
    #[arg(long, value_enum, default_value_t)]
    pub road: RoadType,

    /// Speed multiplier for traffic (0.8 = congested)
    #[arg(long, default_value_t = 1.0)]
    pub traffic: f64,

    /// Forbid refuel/recharge stops (overrides config)
    #[arg(long)]
    pub no_stops: bool,

    /// Minutes lost per stop. Uses config value if not specified.
    #[arg(long)]
    pub stop_minutes: Option<f64>,

    /// Arrive at least this many minutes early
    #[arg(long)]
    pub min_margin: Option<f64>,

    /// Arrive at most this many minutes early
    #[arg(long, conflicts_with = "single_sided")]
    pub max_margin: Option<f64>,

    /// Only reject late arrivals (no upper bound on earliness)
    #[arg(long)]
    pub single_sided: bool,

    /// Extra maintenance cost per km for every vehicle
    #[arg(long, default_value_t = 0.0)]
    pub surcharge: f64,

    /// Weight of cost in the score
    #[arg(long)]
    pub w_cost: Option<f64>,

    /// Weight of travel time in the score
    #[arg(long)]
    pub w_time: Option<f64>,

    /// Weight of CO2 in the score
    #[arg(long)]
    pub w_emissions: Option<f64>,

    /// Weight of maintenance cost in the score
    #[arg(long)]
    pub w_maintenance: Option<f64>,

    /// Weight of unreliability in the score
    #[arg(long)]
    pub w_reliability: Option<f64>,

    /// Weight of cargo suitability in the score
    #[arg(long)]
    pub w_cargo_fit: Option<f64>,

    /// Catalog file (TOML or CSV). Uses config value if not specified.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare the catalog for one trip
    Compare {
        #[command(flatten)]
        trip: TripArgs,
    },

    /// Compare and export the result to Excel
    Export {
        #[command(flatten)]
        trip: TripArgs,

        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// List the active vehicle catalog
    Catalog {
        /// Catalog file (TOML or CSV). Uses config value if not specified.
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print the catalog as TOML, ready to edit and load back
        #[arg(long)]
        toml: bool,

        /// Show a single vehicle by name
        #[arg(long, conflicts_with = "toml")]
        vehicle: Option<String>,
    },

    /// Great-circle distance between two points
    Distance {
        /// Origin as "lat,lon"
        #[arg(allow_hyphen_values = true)]
        from: GeoPoint,

        /// Destination as "lat,lon"
        #[arg(allow_hyphen_values = true)]
        to: GeoPoint,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the catalog file (TOML or CSV)
        #[arg(long, conflicts_with = "clear_catalog")]
        set_catalog: Option<PathBuf>,

        /// Go back to the built-in catalog
        #[arg(long)]
        clear_catalog: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set the currency label
        #[arg(long)]
        set_currency: Option<String>,

        /// Set gasoline price per litre
        #[arg(long)]
        set_gasoline_price: Option<f64>,

        /// Set diesel price per litre
        #[arg(long)]
        set_diesel_price: Option<f64>,

        /// Set electricity price per kWh
        #[arg(long)]
        set_electricity_price: Option<f64>,

        /// Set gasoline emissions (kg CO2 per litre)
        #[arg(long)]
        set_gasoline_co2: Option<f64>,

        /// Set diesel emissions (kg CO2 per litre)
        #[arg(long)]
        set_diesel_co2: Option<f64>,

        /// Set grid emissions (kg CO2 per kWh)
        #[arg(long)]
        set_grid_co2: Option<f64>,

        /// Set default minimum early arrival (minutes)
        #[arg(long)]
        set_min_margin: Option<f64>,

        /// Set default maximum early arrival (minutes)
        #[arg(long, conflicts_with = "set_single_sided")]
        set_max_margin: Option<f64>,

        /// Make the default window single-sided
        #[arg(long)]
        set_single_sided: bool,

        /// Set default stop duration (minutes)
        #[arg(long)]
        set_stop_minutes: Option<f64>,

        /// Allow or forbid stops by default
        #[arg(long)]
        set_allow_stops: Option<bool>,

        /// Set default weights as "cost,time,emissions[,maintenance,reliability,cargo_fit]"
        #[arg(long)]
        set_weights: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
