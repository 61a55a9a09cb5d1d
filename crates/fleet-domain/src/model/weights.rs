//! Criterion weights for the weighted score

use fleet_types::ValidationError;
use serde::{Deserialize, Serialize};

/// A criterion the weighted score can take into account. Lower is better for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Cost,
    Time,
    Emissions,
    Maintenance,
    Reliability,
    CargoFit,
}

impl Criterion {
    pub const ALL: [Criterion; 6] = [
        Criterion::Cost,
        Criterion::Time,
        Criterion::Emissions,
        Criterion::Maintenance,
        Criterion::Reliability,
        Criterion::CargoFit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Cost => "cost",
            Criterion::Time => "time",
            Criterion::Emissions => "emissions",
            Criterion::Maintenance => "maintenance",
            Criterion::Reliability => "reliability",
            Criterion::CargoFit => "cargo_fit",
        }
    }
}

/// Relative importance of each criterion
///
/// Weights need not sum to one; [`CriterionWeights::normalized`] rescales
/// them before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriterionWeights {
    pub cost: f64,
    pub time: f64,
    pub emissions: f64,
    pub maintenance: f64,
    pub reliability: f64,
    pub cargo_fit: f64,
}

impl Default for CriterionWeights {
    fn default() -> Self {
        Self {
            cost: 0.40,
            time: 0.35,
            emissions: 0.25,
            maintenance: 0.0,
            reliability: 0.0,
            cargo_fit: 0.0,
        }
    }
}

impl CriterionWeights {
    /// Weights on cost, time and emissions only
    pub fn new(cost: f64, time: f64, emissions: f64) -> Self {
        Self {
            cost,
            time,
            emissions,
            maintenance: 0.0,
            reliability: 0.0,
            cargo_fit: 0.0,
        }
    }

    pub fn with_maintenance(mut self, weight: f64) -> Self {
        self.maintenance = weight;
        self
    }

    pub fn with_reliability(mut self, weight: f64) -> Self {
        self.reliability = weight;
        self
    }

    pub fn with_cargo_fit(mut self, weight: f64) -> Self {
        self.cargo_fit = weight;
        self
    }

    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Cost => self.cost,
            Criterion::Time => self.time,
            Criterion::Emissions => self.emissions,
            Criterion::Maintenance => self.maintenance,
            Criterion::Reliability => self.reliability,
            Criterion::CargoFit => self.cargo_fit,
        }
    }

    pub fn total(&self) -> f64 {
        Criterion::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// Multiply every weight by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            cost: self.cost * factor,
            time: self.time * factor,
            emissions: self.emissions * factor,
            maintenance: self.maintenance * factor,
            reliability: self.reliability * factor,
            cargo_fit: self.cargo_fit * factor,
        }
    }

    /// Rescale to sum to one. An all-zero vector becomes an equal split
    /// over cost, time and emissions.
    pub fn normalized(&self) -> Self {
        let total = self.total();
        if total <= 0.0 {
            let third = 1.0 / 3.0;
            return Self::new(third, third, third);
        }
        self.scaled(1.0 / total)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for criterion in Criterion::ALL {
            let value = self.get(criterion);
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidWeight {
                    criterion: criterion.label(),
                    value,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!((CriterionWeights::default().total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_rescales() {
        let w = CriterionWeights::new(2.0, 1.0, 1.0).normalized();
        assert!((w.cost - 0.5).abs() < 1e-12);
        assert!((w.time - 0.25).abs() < 1e-12);
        assert!((w.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_zero_becomes_uniform() {
        let w = CriterionWeights::new(0.0, 0.0, 0.0).normalized();
        assert!((w.cost - 1.0 / 3.0).abs() < 1e-12);
        assert!((w.time - 1.0 / 3.0).abs() < 1e-12);
        assert!((w.emissions - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(w.maintenance, 0.0);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let w = CriterionWeights::new(0.5, -0.1, 0.5);
        assert_eq!(
            w.validate(),
            Err(ValidationError::InvalidWeight {
                criterion: "time",
                value: -0.1
            })
        );
    }

    #[test]
    fn test_nan_weight_rejected() {
        let w = CriterionWeights::default().with_cargo_fit(f64::NAN);
        assert!(w.validate().is_err());
    }
}
