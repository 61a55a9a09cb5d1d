//! End-to-end runs of the fleet-advisor binary
//!
//! Every run points `--config` at a temporary file so the user's own
//! configuration is never read or written.

use std::path::Path;
use std::process::{Command, Output};

fn run(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fleet-advisor"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run fleet-advisor")
}

fn json(output: &Output) -> serde_json::Value {
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn compare_prints_json_result() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    let output = run(
        &config,
        &[
            "compare", "-d", "20", "--deadline", "1", "-w", "10", "--volume", "0.05",
            "--cargo", "light-urgent", "--single-sided", "--format", "json",
        ],
    );
    let value = json(&output);

    assert_eq!(value["catalog"], "built-in");
    assert_eq!(value["result"]["rows"].as_array().unwrap().len(), 7);
    assert!(value["result"]["best"]["best_overall"].is_u64());
    // Reading a missing config does not create it
    assert!(!config.exists());
}

#[test]
fn nothing_feasible_still_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        &dir.path().join("config.json"),
        &["compare", "-d", "50", "--deadline", "3", "-w", "20000"],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[No feasible option]"));
    assert!(stdout.contains("insufficient capacity"));
}

#[test]
fn invalid_request_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        &dir.path().join("config.json"),
        &["compare", "-d", "0", "--deadline", "3", "-w", "100"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: "));
}

#[test]
fn csv_catalog_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    let catalog = dir.path().join("fleet.csv");
    std::fs::write(
        &catalog,
        "name,kind,energy,fuel_l_per_100km,electric_kwh_per_km,urban_kmh,highway_kmh,capacity_kg,capacity_m3,range_km,maintenance_per_km,reliability,prefers,avoids\n\
         Van,car,diesel,7,,40,90,800,3,,30,,,\n",
    )
    .unwrap();

    let set = run(&config, &["config", "--set-catalog", catalog.to_str().unwrap()]);
    assert!(set.status.success());

    let listed = json(&run(&config, &["catalog", "--format", "json"]));
    assert_eq!(listed[0]["name"], "Van");
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[test]
fn distance_between_points() {
    let dir = tempfile::tempdir().unwrap();
    let value = json(&run(
        &dir.path().join("config.json"),
        &["distance", "0,0", "0,1", "--format", "json"],
    ));
    let km = value["distance_km"].as_f64().unwrap();
    assert!((km - 111.2).abs() < 0.1);
}

#[test]
fn export_writes_xlsx() {
    let dir = tempfile::tempdir().unwrap();
    let xlsx = dir.path().join("out.xlsx");
    let output = run(
        &dir.path().join("config.json"),
        &["export", "-d", "60", "--deadline", "3", "-w", "300", "-o", xlsx.to_str().unwrap()],
    );

    assert!(output.status.success());
    assert!(xlsx.exists());
}

#[test]
fn catalog_vehicle_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    let value = json(&run(&config, &["catalog", "--vehicle", "Hybride", "--format", "json"]));
    assert_eq!(value["name"], "Hybride");
    assert_eq!(value["range_km"], 900.0);

    let missing = run(&config, &["catalog", "--vehicle", "Hovercraft"]);
    assert_eq!(missing.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&missing.stderr).contains("Hovercraft"));
}

#[test]
fn config_show_names_the_active_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom.json");
    let output = run(&config, &["config", "--show"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("Config file:      {}", config.display())));
}
