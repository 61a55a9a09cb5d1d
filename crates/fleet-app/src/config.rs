//! Configuration management for fleet-advisor
//!
//! Config stored at: ~/.config/fleet-advisor/config.json

use fleet_domain::model::{CriterionWeights, EnergyTariffs, MarginWindow, TripRequest};
use fleet_domain::model::trip_request::DEFAULT_STOP_DURATION_MINUTES;
use fleet_types::{ConfigError, OutputFormat, Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog file (TOML or CSV). Built-in catalog when unset.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Energy prices and emission factors
    #[serde(default)]
    pub tariffs: EnergyTariffs,

    /// Default arrival window
    #[serde(default)]
    pub margin: MarginWindow,

    /// Default refuel/recharge stop duration (minutes)
    #[serde(default = "default_stop_duration")]
    pub stop_duration_minutes: f64,

    #[serde(default = "default_true")]
    pub allow_stops: bool,

    /// Default criterion weights
    #[serde(default)]
    pub weights: CriterionWeights,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_stop_duration() -> f64 {
    DEFAULT_STOP_DURATION_MINUTES
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            tariffs: EnergyTariffs::default(),
            margin: MarginWindow::default(),
            stop_duration_minutes: default_stop_duration(),
            allow_stops: true,
            weights: CriterionWeights::default(),
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("fleet-advisor");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or create default when the file is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Reject values the engine would refuse anyway
    pub fn validate(&self) -> Result<()> {
        self.tariffs.validate()?;
        self.margin.validate()?;
        self.weights.validate()?;
        if !self.stop_duration_minutes.is_finite() {
            return Err(ValidationError::NonFinite("stop duration").into());
        }
        if self.stop_duration_minutes < 0.0 {
            return Err(ValidationError::NegativeStopDuration(self.stop_duration_minutes).into());
        }
        Ok(())
    }

    /// Trip request seeded with the configured defaults
    pub fn trip_request(
        &self,
        distance_km: f64,
        deadline_h: f64,
        cargo_weight_kg: f64,
        cargo_volume_m3: f64,
    ) -> TripRequest {
        TripRequest::new(distance_km, deadline_h, cargo_weight_kg, cargo_volume_m3)
            .with_stops(self.allow_stops, self.stop_duration_minutes)
            .with_margin(self.margin)
            .with_weights(self.weights)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fleet Advisor Configuration")?;
        writeln!(f, "===========================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Catalog:          {}",
            self.catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(f, "Output format:    {}", self.output_format)?;
        writeln!(f, "Arrival window:   {}", self.margin)?;
        writeln!(
            f,
            "Stops:            {} ({:.0} min each)",
            if self.allow_stops { "allowed" } else { "not allowed" },
            self.stop_duration_minutes
        )?;
        writeln!(f)?;

        let t = &self.tariffs;
        writeln!(f, "Tariffs ({})", t.currency)?;
        writeln!(f, "  Gasoline:       {:.0} /L, {:.2} kg CO2/L", t.gasoline_price_per_l, t.gasoline_co2_per_l)?;
        writeln!(f, "  Diesel:         {:.0} /L, {:.2} kg CO2/L", t.diesel_price_per_l, t.diesel_co2_per_l)?;
        writeln!(
            f,
            "  Electricity:    {:.0} /kWh, {:.2} kg CO2/kWh",
            t.electricity_price_per_kwh, t.grid_co2_per_kwh
        )?;
        writeln!(f)?;

        let w = &self.weights;
        writeln!(f, "Weights")?;
        writeln!(
            f,
            "  cost {:.2}, time {:.2}, emissions {:.2}, maintenance {:.2}, reliability {:.2}, cargo fit {:.2}",
            w.cost, w.time, w.emissions, w.maintenance, w.reliability, w.cargo_fit
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_types::Error;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.margin, MarginWindow::two_sided(10.0, 15.0));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.catalog_path = Some(PathBuf::from("/srv/fleet.toml"));
        config.margin = MarginWindow::single_sided(5.0);
        config.tariffs.diesel_price_per_l = 750.0;
        config.output_format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "allow_stops": false }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.allow_stops);
        assert_eq!(config.stop_duration_minutes, 30.0);
        assert_eq!(config.weights, CriterionWeights::default());
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_invalid_config_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = Config::default();
        config.margin = MarginWindow::two_sided(20.0, 10.0);

        assert!(matches!(
            config.save_to(&path),
            Err(Error::Validation(ValidationError::InvalidMarginWindow { .. }))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_trip_request_uses_defaults() {
        let mut config = Config::default();
        config.allow_stops = false;
        config.stop_duration_minutes = 45.0;
        let request = config.trip_request(100.0, 3.0, 200.0, 1.0);
        assert!(!request.allow_stops);
        assert_eq!(request.stop_duration_minutes, 45.0);
        assert_eq!(request.margin, config.margin);
    }

    #[test]
    fn test_display() {
        let text = Config::default().to_string();
        assert!(text.contains("(built-in)"));
        assert!(text.contains("10-15 min early"));
        // The file location depends on --config, so the caller prints it
        assert!(!text.contains("Config file"));
    }
}
