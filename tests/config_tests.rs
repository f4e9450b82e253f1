use std::fs;
use std::path::PathBuf;

use battleships::{AppSettings, GridSize, ShipTypeSettings, DEFAULT_PLACEMENT_ATTEMPTS};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("battleships-{}-{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_from_json_full() {
    let settings = AppSettings::from_json(
        r#"{
            "Grid": { "ColumnCount": 10, "RowCount": 8 },
            "ShipTypes": [
                { "Name": "Battleship", "Size": 5, "Count": 1 },
                { "Name": "Destroyer", "Size": 4, "Count": 2 }
            ],
            "PlacementAttempts": 50
        }"#,
    )
    .unwrap();

    assert_eq!(settings.grid_size(), Some(GridSize::new(10, 8)));
    assert_eq!(settings.placement_attempts(), 50);
    assert_eq!(
        settings.ship_type("Destroyer"),
        Some(&ShipTypeSettings::new("Destroyer", 4, 2))
    );
    assert_eq!(settings.ship_type("Submarine"), None);
}

#[test]
fn test_from_json_partial() {
    let settings = AppSettings::from_json(r#"{ "Grid": { "RowCount": 8 } }"#).unwrap();
    let grid = settings.grid.as_ref().unwrap();
    assert_eq!(grid.row_count, Some(8));
    assert_eq!(grid.column_count, None);
    assert_eq!(settings.ship_types, None);
    assert_eq!(settings.grid_size(), None);
    assert_eq!(settings.placement_attempts(), DEFAULT_PLACEMENT_ATTEMPTS);
}

#[test]
fn test_grid_size_requires_positive_dimensions() {
    let settings = AppSettings::new(0, 10, Vec::new());
    assert_eq!(settings.grid_size(), None);
    let settings = AppSettings::new(-3, 10, Vec::new());
    assert_eq!(settings.grid_size(), None);
}

#[test]
fn test_load_file() {
    let path = temp_file(
        "valid.json",
        r#"{ "Grid": { "ColumnCount": 12, "RowCount": 9 }, "ShipTypes": [] }"#,
    );
    let settings = AppSettings::load(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(settings.grid_size(), Some(GridSize::new(12, 9)));
    assert_eq!(settings.ship_types, Some(Vec::new()));
}

#[test]
fn test_load_missing_file_gives_empty_settings() {
    let path = std::env::temp_dir().join("battleships-no-such-settings.json");
    let settings = AppSettings::load(&path).unwrap();
    assert_eq!(settings, AppSettings::default());
}

#[test]
fn test_load_malformed_file_fails() {
    let path = temp_file("broken.json", "{ \"Grid\": ");
    let err = AppSettings::load(&path).unwrap_err();
    fs::remove_file(&path).unwrap();
    assert!(err.to_string().contains("failed to parse settings"));
}

#[test]
fn test_bundled_settings_file_is_valid() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("appsettings.json");
    let settings = AppSettings::load(path).unwrap();
    assert!(battleships::SettingsChecker::default().check(&settings).is_ok());
    assert_eq!(settings.grid_size(), Some(GridSize::new(10, 10)));
}
