//! Min-max normalisation, weighted scores and best-by-criterion selection

use crate::model::{BestPicks, CargoFit, Criterion, CriterionWeights, TripMetrics, VehicleRow};

/// Relative tolerance under which two values count as tied
pub const TIE_EPSILON: f64 = 1e-12;

/// Raw criterion values of one feasible vehicle, all lower-is-better
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CriterionValues {
    pub cost: f64,
    pub time: f64,
    pub emissions: f64,
    pub maintenance: f64,
    /// 1 - reliability
    pub unreliability: f64,
    pub cargo_fit_rank: f64,
}

impl CriterionValues {
    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Cost => self.cost,
            Criterion::Time => self.time,
            Criterion::Emissions => self.emissions,
            Criterion::Maintenance => self.maintenance,
            Criterion::Reliability => self.unreliability,
            Criterion::CargoFit => self.cargo_fit_rank,
        }
    }
}

/// Scale values into [0, 1]. A column where every value is equal maps to all zeros.
pub fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    if span.is_nan() || span <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v - min) / span).collect()
}

/// Weighted sum of normalised criteria for each vehicle, lower is better
pub fn weighted_scores(values: &[CriterionValues], weights: &CriterionWeights) -> Vec<f64> {
    let weights = weights.normalized();
    let mut scores = vec![0.0; values.len()];
    for criterion in Criterion::ALL {
        let weight = weights.get(criterion);
        if weight == 0.0 {
            continue;
        }
        let column: Vec<f64> = values.iter().map(|v| v.get(criterion)).collect();
        for (score, norm) in scores.iter_mut().zip(min_max_normalize(&column)) {
            *score += weight * norm;
        }
    }
    scores
}

fn strictly_less(candidate: f64, best: f64) -> bool {
    candidate < best - TIE_EPSILON * best.abs().max(1.0)
}

/// Index paired with the smallest value; ties keep the earliest index
pub fn argmin_first<I>(items: I) -> Option<usize>
where
    I: IntoIterator<Item = (usize, f64)>,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, value) in items {
        match best {
            Some((_, current)) if !strictly_less(value, current) => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}

/// Best cargo fit first, then lowest score, then earliest index
fn best_by_cargo_fit<I>(items: I) -> Option<usize>
where
    I: IntoIterator<Item = (usize, CargoFit, f64)>,
{
    let mut best: Option<(usize, CargoFit, f64)> = None;
    for (index, fit, score) in items {
        let better = match best {
            None => true,
            Some((_, best_fit, best_score)) => {
                fit < best_fit || (fit == best_fit && strictly_less(score, best_score))
            }
        };
        if better {
            best = Some((index, fit, score));
        }
    }
    best.map(|(index, _, _)| index)
}

/// Pick the standout feasible rows. All picks are None when nothing is feasible.
pub fn select_best(rows: &[VehicleRow]) -> BestPicks {
    let metric = |f: fn(&TripMetrics) -> f64| {
        argmin_first(
            rows.iter()
                .enumerate()
                .filter_map(|(i, r)| r.metrics.as_ref().map(|m| (i, f(m)))),
        )
    };

    BestPicks {
        cheapest: metric(|m| m.total_cost),
        fastest: metric(|m| m.trip_time_h),
        lowest_emissions: metric(|m| m.emissions_kg),
        best_overall: argmin_first(
            rows.iter()
                .enumerate()
                .filter_map(|(i, r)| r.score.map(|s| (i, s))),
        ),
        best_cargo_fit: best_by_cargo_fit(
            rows.iter()
                .enumerate()
                .filter_map(|(i, r)| r.score.map(|s| (i, r.cargo_fit, s))),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(cost: f64, time: f64, emissions: f64) -> CriterionValues {
        CriterionValues {
            cost,
            time,
            emissions,
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_range() {
        let norm = min_max_normalize(&[10.0, 20.0, 15.0]);
        assert_eq!(norm, vec![0.0, 1.0, 0.5]);
    }

    #[test]
    fn test_normalize_uniform_column_is_zero() {
        assert_eq!(min_max_normalize(&[7.0, 7.0, 7.0]), vec![0.0, 0.0, 0.0]);
        assert_eq!(min_max_normalize(&[3.0]), vec![0.0]);
    }

    #[test]
    fn test_normalize_empty() {
        assert!(min_max_normalize(&[]).is_empty());
    }

    #[test]
    fn test_weighted_scores() {
        let scores = weighted_scores(
            &[values(100.0, 2.0, 10.0), values(200.0, 1.0, 10.0)],
            &CriterionWeights::new(0.5, 0.5, 0.0),
        );
        assert!((scores[0] - 0.5).abs() < 1e-12);
        assert!((scores[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_uniform_metric_contributes_nothing() {
        let scores = weighted_scores(
            &[values(100.0, 2.0, 10.0), values(200.0, 1.0, 10.0)],
            &CriterionWeights::new(0.0, 0.0, 1.0),
        );
        assert_eq!(scores, vec![0.0, 0.0]);
    }

    #[test]
    fn test_zero_weights_fall_back_to_equal_split() {
        let scores = weighted_scores(
            &[values(100.0, 1.0, 10.0), values(200.0, 2.0, 20.0)],
            &CriterionWeights::new(0.0, 0.0, 0.0),
        );
        assert_eq!(scores[0], 0.0);
        assert!((scores[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_argmin_first_keeps_earliest_tie() {
        assert_eq!(argmin_first(vec![(0, 0.42), (1, 0.42), (2, 0.9)]), Some(0));
        assert_eq!(argmin_first(vec![(0, 0.5), (3, 0.1), (4, 0.1)]), Some(3));
        assert_eq!(argmin_first(Vec::new()), None);
    }

    #[test]
    fn test_argmin_first_ignores_float_noise() {
        assert_eq!(argmin_first(vec![(0, 0.1 + 0.2), (1, 0.3)]), Some(0));
    }

    #[test]
    fn test_best_by_cargo_fit() {
        let picked = best_by_cargo_fit(vec![
            (0, CargoFit::Neutral, 0.0),
            (1, CargoFit::Preferred, 0.8),
            (2, CargoFit::Preferred, 0.3),
            (3, CargoFit::Preferred, 0.3),
        ]);
        assert_eq!(picked, Some(2));
    }
}
