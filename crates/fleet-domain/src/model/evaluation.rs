//! Evaluation result type definitions

use fleet_types::{EnergyKind, VehicleKind};
use serde::{Deserialize, Serialize};

use crate::service::scoring::argmin_first;

/// Figures computed for a vehicle that passed every constraint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripMetrics {
    /// Road speed after the traffic factor (km/h)
    pub effective_speed_kmh: f64,
    /// Driving time without stops (h)
    pub base_time_h: f64,
    /// Refuel/recharge stops needed on the way
    pub stops: u32,
    /// Time spent at those stops (h)
    pub stop_time_h: f64,
    /// Door-to-door time (h)
    pub trip_time_h: f64,
    pub fuel_litres: f64,
    pub electricity_kwh: f64,
    pub energy_cost: f64,
    pub maintenance_cost: f64,
    /// Energy plus maintenance
    pub total_cost: f64,
    /// kg CO2
    pub emissions_kg: f64,
}

/// Why a vehicle was left out of the ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    CapacityExceeded {
        cargo_kg: f64,
        capacity_kg: f64,
        cargo_m3: f64,
        capacity_m3: f64,
    },
    RangeExceeded {
        distance_km: f64,
        range_km: f64,
    },
    DeadlineWindowViolation {
        trip_time_h: f64,
        /// None when the window is open on the early side
        earliest_h: Option<f64>,
        latest_h: f64,
    },
}

impl Rejection {
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::CapacityExceeded { .. } => "CapacityExceeded",
            Rejection::RangeExceeded { .. } => "RangeExceeded",
            Rejection::DeadlineWindowViolation { .. } => "DeadlineWindowViolation",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::CapacityExceeded {
                cargo_kg,
                capacity_kg,
                cargo_m3,
                capacity_m3,
            } => write!(
                f,
                "insufficient capacity ({:.0}/{:.0} kg, {:.2}/{:.2} m³)",
                cargo_kg, capacity_kg, cargo_m3, capacity_m3
            ),
            Rejection::RangeExceeded { distance_km, range_km } => write!(
                f,
                "insufficient range ({:.0} km > {:.0} km, stops not allowed)",
                distance_km, range_km
            ),
            Rejection::DeadlineWindowViolation {
                trip_time_h,
                earliest_h,
                latest_h,
            } => match earliest_h {
                Some(earliest) => write!(
                    f,
                    "outside arrival window ({:.2} h not within {:.2}-{:.2} h)",
                    trip_time_h, earliest, latest_h
                ),
                None => write!(
                    f,
                    "misses deadline ({:.2} h > {:.2} h)",
                    trip_time_h, latest_h
                ),
            },
        }
    }
}

/// How well a vehicle suits the cargo type. Informational, never a hard filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CargoFit {
    Preferred,
    #[default]
    Neutral,
    Discouraged,
}

impl CargoFit {
    /// 0 = preferred, 2 = discouraged
    pub fn rank(&self) -> u8 {
        match self {
            CargoFit::Preferred => 0,
            CargoFit::Neutral => 1,
            CargoFit::Discouraged => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CargoFit::Preferred => "preferred",
            CargoFit::Neutral => "neutral",
            CargoFit::Discouraged => "discouraged",
        }
    }
}

impl std::fmt::Display for CargoFit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome for one catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRow {
    pub name: String,
    pub kind: VehicleKind,
    pub energy: EnergyKind,
    pub cargo_fit: CargoFit,
    /// Present when the vehicle is feasible
    pub metrics: Option<TripMetrics>,
    /// Weighted score (lower is better), present when feasible
    pub score: Option<f64>,
    /// Present when the vehicle was rejected
    pub rejection: Option<Rejection>,
}

impl VehicleRow {
    pub fn is_feasible(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Indices into [`EvaluationResult::rows`] of the standout feasible vehicles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestPicks {
    pub cheapest: Option<usize>,
    pub fastest: Option<usize>,
    pub lowest_emissions: Option<usize>,
    pub best_overall: Option<usize>,
    pub best_cargo_fit: Option<usize>,
}

/// Result of evaluating one trip against a catalog
///
/// Rows follow catalog order. An empty feasible set is a normal outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub rows: Vec<VehicleRow>,
    pub best: BestPicks,
}

impl EvaluationResult {
    pub fn feasible(&self) -> impl Iterator<Item = &VehicleRow> {
        self.rows.iter().filter(|r| r.is_feasible())
    }

    pub fn feasible_count(&self) -> usize {
        self.feasible().count()
    }

    pub fn has_feasible(&self) -> bool {
        self.rows.iter().any(|r| r.is_feasible())
    }

    /// Vehicle name and rejection reason for every rejected row, catalog order
    pub fn rejections(&self) -> Vec<(&str, &Rejection)> {
        self.rows
            .iter()
            .filter_map(|r| r.rejection.as_ref().map(|reason| (r.name.as_str(), reason)))
            .collect()
    }

    /// Feasible rows by ascending score
    ///
    /// Scores within the tie tolerance keep catalog order, so the first
    /// entry is always the best overall pick.
    pub fn ranked(&self) -> Vec<&VehicleRow> {
        let mut remaining: Vec<(&VehicleRow, f64)> = self
            .feasible()
            .filter_map(|r| r.score.map(|s| (r, s)))
            .collect();
        let mut ranked = Vec::with_capacity(remaining.len());
        while let Some(pos) = argmin_first(remaining.iter().map(|(_, s)| *s).enumerate()) {
            ranked.push(remaining.remove(pos).0);
        }
        ranked
    }

    fn pick(&self, index: Option<usize>) -> Option<&VehicleRow> {
        index.and_then(|i| self.rows.get(i))
    }

    pub fn cheapest(&self) -> Option<&VehicleRow> {
        self.pick(self.best.cheapest)
    }

    pub fn fastest(&self) -> Option<&VehicleRow> {
        self.pick(self.best.fastest)
    }

    pub fn lowest_emissions(&self) -> Option<&VehicleRow> {
        self.pick(self.best.lowest_emissions)
    }

    pub fn best_overall(&self) -> Option<&VehicleRow> {
        self.pick(self.best.best_overall)
    }

    pub fn best_cargo_fit(&self) -> Option<&VehicleRow> {
        self.pick(self.best.best_cargo_fit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::scoring::select_best;

    fn row(name: &str, score: Option<f64>) -> VehicleRow {
        VehicleRow {
            name: name.to_string(),
            kind: VehicleKind::Car,
            energy: EnergyKind::Electric,
            cargo_fit: CargoFit::Neutral,
            metrics: None,
            score,
            rejection: match score {
                Some(_) => None,
                None => Some(Rejection::RangeExceeded {
                    distance_km: 500.0,
                    range_km: 350.0,
                }),
            },
        }
    }

    #[test]
    fn test_ranked_is_stable() {
        let result = EvaluationResult {
            rows: vec![row("A", Some(0.5)), row("B", None), row("C", Some(0.1)), row("D", Some(0.5))],
            best: BestPicks::default(),
        };
        let names: Vec<&str> = result.ranked().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "D"]);
        assert_eq!(result.feasible_count(), 3);
    }

    #[test]
    fn test_ranked_agrees_with_best_overall_on_near_ties() {
        let rows = vec![row("First", Some(0.1 + 0.2)), row("Second", Some(0.3))];
        let best = select_best(&rows);
        let result = EvaluationResult { rows, best };

        assert_eq!(result.best_overall().map(|r| r.name.as_str()), Some("First"));
        let names: Vec<&str> = result.ranked().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_rejections_listed_by_name() {
        let result = EvaluationResult {
            rows: vec![row("A", Some(0.5)), row("B", None)],
            best: BestPicks::default(),
        };
        let rejections = result.rejections();
        assert_eq!(rejections.len(), 1);
        assert_eq!(rejections[0].0, "B");
        assert_eq!(rejections[0].1.code(), "RangeExceeded");
    }

    #[test]
    fn test_rejection_messages() {
        let late = Rejection::DeadlineWindowViolation {
            trip_time_h: 3.0,
            earliest_h: Some(3.75),
            latest_h: 3.8333,
        };
        assert_eq!(
            late.to_string(),
            "outside arrival window (3.00 h not within 3.75-3.83 h)"
        );
        let open = Rejection::DeadlineWindowViolation {
            trip_time_h: 4.5,
            earliest_h: None,
            latest_h: 3.8333,
        };
        assert!(open.to_string().starts_with("misses deadline"));
    }

    #[test]
    fn test_cargo_fit_order() {
        assert!(CargoFit::Preferred < CargoFit::Neutral);
        assert!(CargoFit::Neutral < CargoFit::Discouraged);
        assert_eq!(CargoFit::Discouraged.rank(), 2);
    }

    #[test]
    fn test_rejection_serializes_with_tag() {
        let json = serde_json::to_value(Rejection::RangeExceeded {
            distance_km: 500.0,
            range_km: 350.0,
        })
        .unwrap();
        assert_eq!(json["reason"], "range_exceeded");
        assert_eq!(json["range_km"], 350.0);
    }
}
