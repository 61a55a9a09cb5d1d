//! Plain-text comparison report

use crate::model::{EnergyTariffs, EvaluationResult, TripRequest, VehicleRow};

pub fn generate_comparison_report(
    request: &TripRequest,
    result: &EvaluationResult,
    tariffs: &EnergyTariffs,
) -> String {
    let currency = &tariffs.currency;
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("           Delivery Vehicle Comparison            \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Trip]\n");
    report.push_str(&format!(
        "  Distance:        {:.1} km ({} roads, traffic x{:.2})\n",
        request.distance_km, request.road_type, request.traffic_factor
    ));
    report.push_str(&format!(
        "  Deadline:        {:.2} h (arrive {})\n",
        request.deadline_h, request.margin
    ));
    report.push_str(&format!(
        "  Cargo:           {} - {:.0} kg, {:.2} m³\n",
        request.cargo_type, request.cargo_weight_kg, request.cargo_volume_m3
    ));
    if request.allow_stops {
        report.push_str(&format!(
            "  Stops:           allowed, {:.0} min each\n",
            request.stop_duration_minutes
        ));
    } else {
        report.push_str("  Stops:           not allowed\n");
    }
    report.push_str(&format!(
        "  Feasible:        {} of {}\n\n",
        result.feasible_count(),
        result.rows.len()
    ));

    report.push_str("[Comparison]\n");
    report.push_str("-".repeat(92).as_str());
    report.push('\n');
    report.push_str(&format!(
        "{:<22} {:<9} {:>8} {:>12} {:>10} {:>7} {:<12} {}\n",
        "Vehicle", "Energy", "Time(h)", format!("Cost({})", currency), "CO2(kg)", "Score", "Cargo fit", "Stops"
    ));
    report.push_str("-".repeat(92).as_str());
    report.push('\n');
    for row in result.ranked() {
        if let (Some(metrics), Some(score)) = (&row.metrics, row.score) {
            let stops = if metrics.stops == 0 {
                "-".to_string()
            } else {
                format!("+{:.0} min x {}", request.stop_duration_minutes, metrics.stops)
            };
            report.push_str(&format!(
                "{:<22} {:<9} {:>8.2} {:>12.0} {:>10.2} {:>7.3} {:<12} {}\n",
                truncate_str(&row.name, 21),
                row.energy.label(),
                metrics.trip_time_h,
                metrics.total_cost,
                metrics.emissions_kg,
                score,
                row.cargo_fit.label(),
                stops
            ));
        }
    }
    report.push('\n');

    let rejections = result.rejections();
    if !rejections.is_empty() {
        report.push_str("[Rejected]\n");
        for (name, reason) in &rejections {
            report.push_str(&format!("  {:<22} {}\n", truncate_str(name, 21), reason));
        }
        report.push('\n');
    }

    if result.has_feasible() {
        report.push_str("[Recommendations]\n");
        let line = |label: &str, row: Option<&VehicleRow>| -> String {
            match row.and_then(|r| r.metrics.as_ref().map(|m| (r, m))) {
                Some((r, m)) => format!(
                    "  {:<17}{} - {:.0} {}, {:.2} h, {:.2} kg CO2\n",
                    label, r.name, m.total_cost, currency, m.trip_time_h, m.emissions_kg
                ),
                None => String::new(),
            }
        };
        report.push_str(&line("Cheapest:", result.cheapest()));
        report.push_str(&line("Fastest:", result.fastest()));
        report.push_str(&line("Lowest CO2:", result.lowest_emissions()));
        if let Some(best) = result.best_overall() {
            report.push_str(&format!(
                "  {:<17}{} - score {:.3}\n",
                "Best overall:",
                best.name,
                best.score.unwrap_or_default()
            ));
        }
        if let Some(fit) = result.best_cargo_fit() {
            report.push_str(&format!(
                "  {:<17}{} ({})\n",
                "Best for cargo:", fit.name, fit.cargo_fit
            ));
        }
        report.push('\n');
    } else {
        report.push_str("[No feasible option]\n");
        report.push_str("  No vehicle meets capacity, range and arrival window together.\n\n");
    }

    report.push_str("==================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Catalog, MarginWindow, VehicleProfile};
    use crate::service::evaluate;
    use fleet_types::{EnergyKind, VehicleKind};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            VehicleProfile::new("Électrique", VehicleKind::Car, EnergyKind::Electric)
                .with_electric_consumption(0.18)
                .with_uniform_speed(40.0)
                .with_capacity(600.0, 2.5)
                .with_range(100.0),
            VehicleProfile::new("Moto électrique", VehicleKind::Moto, EnergyKind::Electric)
                .with_electric_consumption(0.04)
                .with_uniform_speed(45.0)
                .with_capacity(80.0, 0.2),
        ])
        .unwrap()
    }

    #[test]
    fn test_report_lists_feasible_and_rejected() {
        let request = TripRequest::new(120.0, 4.0, 250.0, 2.0).with_margin(MarginWindow::single_sided(10.0));
        let result = evaluate(&catalog(), &request, &EnergyTariffs::default()).unwrap();
        let report = generate_comparison_report(&request, &result, &EnergyTariffs::default());

        assert!(report.contains("Delivery Vehicle Comparison"));
        assert!(report.contains("Feasible:        1 of 2"));
        assert!(report.contains("+30 min x 1"));
        assert!(report.contains("Moto électrique"));
        assert!(report.contains("insufficient capacity"));
        assert!(report.contains("Best overall:    Électrique"));
    }

    #[test]
    fn test_report_without_feasible_option() {
        let request = TripRequest::new(120.0, 10.0, 700.0, 2.0);
        let result = evaluate(&catalog(), &request, &EnergyTariffs::default()).unwrap();
        let report = generate_comparison_report(&request, &result, &EnergyTariffs::default());

        assert!(report.contains("[No feasible option]"));
        assert!(!report.contains("[Recommendations]"));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Tricycle électrique", 10), "Tricycle..");
        assert_eq!(truncate_str("Diesel", 10), "Diesel");
    }
}
