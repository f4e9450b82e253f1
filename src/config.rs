//! Game settings as loaded from `appsettings.json`, and the bounds they are
//! checked against.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::common::GridSize;

/// Name of the settings file looked up by the console game.
pub const SETTINGS_FILE_NAME: &str = "appsettings.json";

/// Default bound on placement attempts per ship.
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 1000;

/// Root of the settings file. Every field is optional so that a missing
/// setting can be reported instead of defaulting to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppSettings {
    #[serde(default)]
    pub grid: Option<GridSettings>,
    #[serde(default)]
    pub ship_types: Option<Vec<ShipTypeSettings>>,
    #[serde(default)]
    pub placement_attempts: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GridSettings {
    #[serde(default)]
    pub column_count: Option<i64>,
    #[serde(default)]
    pub row_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipTypeSettings {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: Option<i64>,
    #[serde(default)]
    pub count: Option<i64>,
}

impl ShipTypeSettings {
    pub fn new(name: impl Into<String>, size: i64, count: i64) -> Self {
        Self {
            name: name.into(),
            size: Some(size),
            count: Some(count),
        }
    }
}

impl AppSettings {
    /// Settings with a grid of the given size and the given ship types.
    pub fn new(column_count: i64, row_count: i64, ship_types: Vec<ShipTypeSettings>) -> Self {
        Self {
            grid: Some(GridSettings {
                column_count: Some(column_count),
                row_count: Some(row_count),
            }),
            ship_types: Some(ship_types),
            placement_attempts: None,
        }
    }

    /// Read settings from a JSON file. A missing file yields empty settings,
    /// which the settings checker then reports.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("settings file {} not found", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings = Self::from_json(&text)
            .with_context(|| format!("failed to parse settings in {}", path.display()))?;
        log::debug!("loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    /// Parse settings from JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Retry bound for placing a single ship.
    pub fn placement_attempts(&self) -> usize {
        self.placement_attempts.unwrap_or(DEFAULT_PLACEMENT_ATTEMPTS)
    }

    /// Grid dimensions, if both are present and positive.
    pub fn grid_size(&self) -> Option<GridSize> {
        let grid = self.grid.as_ref()?;
        let columns = usize::try_from(grid.column_count?).ok()?;
        let rows = usize::try_from(grid.row_count?).ok()?;
        (columns > 0 && rows > 0).then_some(GridSize::new(columns, rows))
    }

    /// Look up a ship type by name.
    pub fn ship_type(&self, name: &str) -> Option<&ShipTypeSettings> {
        self.ship_types.as_ref()?.iter().find(|t| t.name == name)
    }
}

/// Inclusive bounds enforced by the settings checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsRules {
    pub file_name: String,
    pub min_row_count: i64,
    pub max_row_count: i64,
    pub min_column_count: i64,
    pub max_column_count: i64,
    pub min_ship_size: i64,
    pub max_ship_size: i64,
    pub min_ship_count: i64,
    pub max_ship_count: i64,
}

impl Default for SettingsRules {
    fn default() -> Self {
        Self {
            file_name: SETTINGS_FILE_NAME.to_string(),
            min_row_count: 5,
            max_row_count: 20,
            min_column_count: 5,
            max_column_count: 20,
            min_ship_size: 1,
            max_ship_size: 6,
            min_ship_count: 0,
            max_ship_count: 10,
        }
    }
}
