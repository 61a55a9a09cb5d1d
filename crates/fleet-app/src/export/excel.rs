//! Excel export functionality

use chrono::Local;
use fleet_domain::model::{EnergyTariffs, EvaluationResult, TripRequest, VehicleRow};
use fleet_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;

fn excel_error(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export a comparison to an Excel file
///
/// Writes a "Summary" sheet (trip and recommendations) and a "Comparison"
/// sheet with one row per catalog vehicle.
pub fn export_to_excel(
    request: &TripRequest,
    result: &EvaluationResult,
    tariffs: &EnergyTariffs,
    output_path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, request, result, tariffs)?;

    let comparison_sheet = workbook.add_worksheet();
    write_comparison_sheet(comparison_sheet, request, result, tariffs)?;

    workbook.save(output_path).map_err(excel_error)?;
    log::info!("exported comparison to {}", output_path.display());

    Ok(())
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    request: &TripRequest,
    result: &EvaluationResult,
    tariffs: &EnergyTariffs,
) -> Result<()> {
    sheet.set_name("Summary").map_err(excel_error)?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Delivery Vehicle Comparison", &header_format)
        .map_err(excel_error)?;
    sheet.write_string(1, 0, "Generated:").map_err(excel_error)?;
    sheet
        .write_string(1, 1, Local::now().format("%Y-%m-%d %H:%M").to_string())
        .map_err(excel_error)?;

    // Trip parameters
    sheet
        .write_string_with_format(3, 0, "Trip", &header_format)
        .map_err(excel_error)?;
    let numbers = [
        ("Distance (km)", request.distance_km),
        ("Deadline (h)", request.deadline_h),
        ("Cargo weight (kg)", request.cargo_weight_kg),
        ("Cargo volume (m³)", request.cargo_volume_m3),
        ("Traffic factor", request.traffic_factor),
        ("Stop duration (min)", request.stop_duration_minutes),
        ("Maintenance surcharge (/km)", request.maintenance_surcharge_per_km),
    ];
    let mut row = 4;
    for (label, value) in numbers {
        sheet.write_string(row, 0, label).map_err(excel_error)?;
        sheet.write_number(row, 1, value).map_err(excel_error)?;
        row += 1;
    }
    let texts = [
        ("Cargo type", request.cargo_type.to_string()),
        ("Road type", request.road_type.to_string()),
        ("Arrival window", request.margin.to_string()),
        ("Stops allowed", if request.allow_stops { "yes" } else { "no" }.to_string()),
    ];
    for (label, value) in texts {
        sheet.write_string(row, 0, label).map_err(excel_error)?;
        sheet.write_string(row, 1, value).map_err(excel_error)?;
        row += 1;
    }

    // Recommendations
    row += 1;
    sheet
        .write_string_with_format(row, 0, "Recommendations", &header_format)
        .map_err(excel_error)?;
    row += 1;
    sheet.write_string(row, 0, "Feasible vehicles").map_err(excel_error)?;
    sheet
        .write_number(row, 1, result.feasible_count() as f64)
        .map_err(excel_error)?;
    row += 1;

    if !result.has_feasible() {
        sheet
            .write_string(row, 0, "No vehicle meets capacity, range and arrival window together")
            .map_err(excel_error)?;
    } else {
        let picks: [(&str, Option<&VehicleRow>); 5] = [
            ("Cheapest", result.cheapest()),
            ("Fastest", result.fastest()),
            ("Lowest CO2", result.lowest_emissions()),
            ("Best overall", result.best_overall()),
            ("Best for cargo", result.best_cargo_fit()),
        ];
        for (label, pick) in picks {
            if let Some(vehicle) = pick {
                sheet.write_string(row, 0, label).map_err(excel_error)?;
                sheet.write_string(row, 1, &vehicle.name).map_err(excel_error)?;
                if let Some(m) = &vehicle.metrics {
                    sheet
                        .write_string(
                            row,
                            2,
                            format!(
                                "{:.0} {}, {:.2} h, {:.2} kg CO2",
                                m.total_cost, tariffs.currency, m.trip_time_h, m.emissions_kg
                            ),
                        )
                        .map_err(excel_error)?;
                }
                row += 1;
            }
        }
    }

    sheet.set_column_width(0, 28).map_err(excel_error)?;
    sheet.set_column_width(1, 22).map_err(excel_error)?;
    sheet.set_column_width(2, 36).map_err(excel_error)?;

    Ok(())
}

fn write_comparison_sheet(
    sheet: &mut Worksheet,
    request: &TripRequest,
    result: &EvaluationResult,
    tariffs: &EnergyTariffs,
) -> Result<()> {
    sheet.set_name("Comparison").map_err(excel_error)?;

    let header_format = Format::new().set_bold();
    let currency = &tariffs.currency;

    let headers = [
        "Vehicle".to_string(),
        "Kind".to_string(),
        "Energy".to_string(),
        "Status".to_string(),
        "Trip time (h)".to_string(),
        "Stops".to_string(),
        "Stop time (h)".to_string(),
        "Fuel (L)".to_string(),
        "Electricity (kWh)".to_string(),
        format!("Energy cost ({})", currency),
        format!("Maintenance ({})", currency),
        format!("Total cost ({})", currency),
        "CO2 (kg)".to_string(),
        "Score".to_string(),
        "Cargo fit".to_string(),
        "Rejection".to_string(),
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, header, &header_format)
            .map_err(excel_error)?;
    }

    // Feasible vehicles first in rank order, then rejected ones in catalog order
    let ranked = result.ranked();
    let rejected = result.rows.iter().filter(|r| !r.is_feasible());
    for (row_idx, vehicle) in ranked.into_iter().chain(rejected).enumerate() {
        let row = (row_idx + 1) as u32;

        sheet.write_string(row, 0, &vehicle.name).map_err(excel_error)?;
        sheet.write_string(row, 1, vehicle.kind.label()).map_err(excel_error)?;
        sheet.write_string(row, 2, vehicle.energy.label()).map_err(excel_error)?;
        sheet.write_string(row, 14, vehicle.cargo_fit.label()).map_err(excel_error)?;

        match (&vehicle.metrics, &vehicle.rejection) {
            (Some(m), _) => {
                sheet.write_string(row, 3, "feasible").map_err(excel_error)?;
                let values = [
                    m.trip_time_h,
                    m.stops as f64,
                    m.stop_time_h,
                    m.fuel_litres,
                    m.electricity_kwh,
                    m.energy_cost,
                    m.maintenance_cost,
                    m.total_cost,
                    m.emissions_kg,
                ];
                for (offset, value) in values.into_iter().enumerate() {
                    sheet
                        .write_number(row, 4 + offset as u16, value)
                        .map_err(excel_error)?;
                }
                if let Some(score) = vehicle.score {
                    sheet.write_number(row, 13, score).map_err(excel_error)?;
                }
            }
            (None, Some(rejection)) => {
                sheet.write_string(row, 3, rejection.code()).map_err(excel_error)?;
                sheet
                    .write_string(row, 15, rejection.to_string())
                    .map_err(excel_error)?;
            }
            (None, None) => {}
        }
    }

    sheet.set_column_width(0, 24).map_err(excel_error)?;
    sheet.set_column_width(3, 24).map_err(excel_error)?;
    sheet.set_column_width(15, 50).map_err(excel_error)?;

    log::debug!(
        "comparison sheet: {} rows for a {:.1} km trip",
        result.rows.len(),
        request.distance_km
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::builtin_catalog;
    use fleet_domain::model::MarginWindow;
    use fleet_domain::service::evaluate;

    fn comparison(request: &TripRequest) -> EvaluationResult {
        evaluate(&builtin_catalog().unwrap(), request, &EnergyTariffs::default()).unwrap()
    }

    #[test]
    fn test_export_writes_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("comparison.xlsx");
        let request = TripRequest::new(80.0, 3.0, 300.0, 1.5).with_margin(MarginWindow::single_sided(10.0));
        let result = comparison(&request);

        export_to_excel(&request, &result, &EnergyTariffs::default(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // xlsx is a zip archive
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_export_without_feasible_option() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("none.xlsx");
        let request = TripRequest::new(80.0, 3.0, 50_000.0, 1.5);
        let result = comparison(&request);
        assert!(!result.has_feasible());

        export_to_excel(&request, &result, &EnergyTariffs::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.xlsx");
        let request = TripRequest::new(80.0, 3.0, 300.0, 1.5);
        let result = comparison(&request);

        let err = export_to_excel(&request, &result, &EnergyTariffs::default(), &path).unwrap_err();
        assert!(matches!(err, Error::Excel(_)));
    }
}
