//! Trip request type definitions

use fleet_types::{CargoType, RoadType, ValidationError};
use serde::{Deserialize, Serialize};

use super::weights::CriterionWeights;

/// Vehicles must arrive at least this many minutes before the deadline
pub const DEFAULT_MIN_MARGIN_MINUTES: f64 = 10.0;
/// ...and at most this many minutes before it
pub const DEFAULT_MAX_MARGIN_MINUTES: f64 = 15.0;
/// Time lost per refuel/recharge stop
pub const DEFAULT_STOP_DURATION_MINUTES: f64 = 30.0;

/// Permitted early-arrival band, in minutes before the deadline
///
/// `max_minutes = None` leaves the band open on the early side, so only
/// late arrivals are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginWindow {
    pub min_minutes: f64,
    #[serde(default)]
    pub max_minutes: Option<f64>,
}

impl Default for MarginWindow {
    fn default() -> Self {
        Self::two_sided(DEFAULT_MIN_MARGIN_MINUTES, DEFAULT_MAX_MARGIN_MINUTES)
    }
}

impl MarginWindow {
    pub fn two_sided(min_minutes: f64, max_minutes: f64) -> Self {
        Self {
            min_minutes,
            max_minutes: Some(max_minutes),
        }
    }

    pub fn single_sided(min_minutes: f64) -> Self {
        Self {
            min_minutes,
            max_minutes: None,
        }
    }

    /// Latest acceptable trip time (h)
    pub fn latest_h(&self, deadline_h: f64) -> f64 {
        deadline_h - self.min_minutes / 60.0
    }

    /// Earliest acceptable trip time (h), None when open-ended
    pub fn earliest_h(&self, deadline_h: f64) -> Option<f64> {
        self.max_minutes.map(|max| deadline_h - max / 60.0)
    }

    /// Whether a trip of `trip_time_h` lands inside the window (bounds inclusive)
    pub fn contains(&self, trip_time_h: f64, deadline_h: f64) -> bool {
        if trip_time_h > self.latest_h(deadline_h) {
            return false;
        }
        match self.earliest_h(deadline_h) {
            Some(earliest) => trip_time_h >= earliest,
            None => true,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let max = self.max_minutes.unwrap_or(f64::INFINITY);
        if !self.min_minutes.is_finite() || self.min_minutes < 0.0 || max.is_nan() || max < self.min_minutes {
            return Err(ValidationError::InvalidMarginWindow {
                min_minutes: self.min_minutes,
                max_minutes: max,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for MarginWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max_minutes {
            Some(max) => write!(f, "{}-{} min early", self.min_minutes, max),
            None => write!(f, ">= {} min early", self.min_minutes),
        }
    }
}

/// One delivery to evaluate against the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub distance_km: f64,
    pub deadline_h: f64,
    pub cargo_weight_kg: f64,
    pub cargo_volume_m3: f64,
    #[serde(default)]
    pub cargo_type: CargoType,
    #[serde(default)]
    pub road_type: RoadType,
    /// Multiplier applied to every vehicle speed (0.8 = congested)
    #[serde(default = "default_traffic_factor")]
    pub traffic_factor: f64,
    /// Whether refuel/recharge stops are allowed when range falls short
    #[serde(default = "default_true")]
    pub allow_stops: bool,
    #[serde(default = "default_stop_duration")]
    pub stop_duration_minutes: f64,
    #[serde(default)]
    pub margin: MarginWindow,
    /// Extra maintenance cost per km added to every vehicle
    #[serde(default)]
    pub maintenance_surcharge_per_km: f64,
    #[serde(default)]
    pub weights: CriterionWeights,
}

fn default_traffic_factor() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

fn default_stop_duration() -> f64 {
    DEFAULT_STOP_DURATION_MINUTES
}

impl TripRequest {
    /// New request on mixed roads, standard cargo, default window and weights
    pub fn new(distance_km: f64, deadline_h: f64, cargo_weight_kg: f64, cargo_volume_m3: f64) -> Self {
        Self {
            distance_km,
            deadline_h,
            cargo_weight_kg,
            cargo_volume_m3,
            cargo_type: CargoType::default(),
            road_type: RoadType::default(),
            traffic_factor: default_traffic_factor(),
            allow_stops: true,
            stop_duration_minutes: DEFAULT_STOP_DURATION_MINUTES,
            margin: MarginWindow::default(),
            maintenance_surcharge_per_km: 0.0,
            weights: CriterionWeights::default(),
        }
    }

    pub fn with_cargo_type(mut self, cargo_type: CargoType) -> Self {
        self.cargo_type = cargo_type;
        self
    }

    pub fn with_road_type(mut self, road_type: RoadType) -> Self {
        self.road_type = road_type;
        self
    }

    pub fn with_traffic_factor(mut self, factor: f64) -> Self {
        self.traffic_factor = factor;
        self
    }

    pub fn with_stops(mut self, allow: bool, duration_minutes: f64) -> Self {
        self.allow_stops = allow;
        self.stop_duration_minutes = duration_minutes;
        self
    }

    pub fn with_margin(mut self, margin: MarginWindow) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_maintenance_surcharge(mut self, per_km: f64) -> Self {
        self.maintenance_surcharge_per_km = per_km;
        self
    }

    pub fn with_weights(mut self, weights: CriterionWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn stop_duration_h(&self) -> f64 {
        self.stop_duration_minutes / 60.0
    }

    /// Reject malformed input before any vehicle is looked at
    pub fn validate(&self) -> Result<(), ValidationError> {
        let finite = [
            ("distance", self.distance_km),
            ("deadline", self.deadline_h),
            ("cargo weight", self.cargo_weight_kg),
            ("cargo volume", self.cargo_volume_m3),
            ("traffic factor", self.traffic_factor),
            ("stop duration", self.stop_duration_minutes),
            ("maintenance surcharge", self.maintenance_surcharge_per_km),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite(field));
            }
        }

        if self.distance_km <= 0.0 {
            return Err(ValidationError::NonPositiveDistance(self.distance_km));
        }
        if self.deadline_h <= 0.0 {
            return Err(ValidationError::NonPositiveDeadline(self.deadline_h));
        }
        if self.cargo_weight_kg <= 0.0 {
            return Err(ValidationError::NonPositiveCargoWeight(self.cargo_weight_kg));
        }
        if self.cargo_volume_m3 < 0.0 {
            return Err(ValidationError::NegativeCargoVolume(self.cargo_volume_m3));
        }
        if self.traffic_factor <= 0.0 {
            return Err(ValidationError::NonPositiveTrafficFactor(self.traffic_factor));
        }
        if self.stop_duration_minutes < 0.0 {
            return Err(ValidationError::NegativeStopDuration(self.stop_duration_minutes));
        }
        if self.maintenance_surcharge_per_km < 0.0 {
            return Err(ValidationError::NegativeSurcharge(self.maintenance_surcharge_per_km));
        }
        self.margin.validate()?;
        self.weights.validate()
    }
}
