//! Validation of loaded settings before a game may start.

use std::collections::HashSet;

use crate::common::{SettingsError, ValidationResult};
use crate::config::{AppSettings, SettingsRules};

/// A single rule; returns the detail message on failure.
type Rule = fn(&AppSettings, &SettingsRules) -> ValidationResult<String>;

/// Runs the settings rules in order and stops at the first failure.
#[derive(Debug, Clone, Default)]
pub struct SettingsChecker {
    rules: SettingsRules,
}

impl SettingsChecker {
    pub fn new(rules: SettingsRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &SettingsRules {
        &self.rules
    }

    pub fn check(&self, settings: &AppSettings) -> ValidationResult<SettingsError> {
        const RULES: [Rule; 3] = [check_not_empty, check_grid, check_ship_types];

        for rule in RULES {
            if let Err(detail) = rule(settings, &self.rules) {
                log::warn!("settings rejected: {}", detail);
                return Err(SettingsError(format!(
                    "An issue with settings in {} file has been found. {}",
                    self.rules.file_name, detail
                )));
            }
        }
        Ok(())
    }
}

fn check_not_empty(settings: &AppSettings, rules: &SettingsRules) -> ValidationResult<String> {
    if settings.grid.is_none() && settings.ship_types.is_none() {
        return Err(format!(
            "All elements of setting file are missing or no {} file has been found.",
            rules.file_name
        ));
    }
    Ok(())
}

fn check_grid(settings: &AppSettings, rules: &SettingsRules) -> ValidationResult<String> {
    let grid = settings
        .grid
        .as_ref()
        .ok_or_else(|| "Lack of Grid setting.".to_string())?;
    let rows = grid
        .row_count
        .ok_or_else(|| "Lack of Grid -> RowCount setting.".to_string())?;
    let columns = grid
        .column_count
        .ok_or_else(|| "Lack of Grid -> ColumnCount setting.".to_string())?;

    if !(rules.min_row_count..=rules.max_row_count).contains(&rows) {
        return Err(format!(
            "Grid -> RowCount should be between {} and {}.",
            rules.min_row_count, rules.max_row_count
        ));
    }
    if !(rules.min_column_count..=rules.max_column_count).contains(&columns) {
        return Err(format!(
            "Grid -> ColumnCount should be between {} and {}.",
            rules.min_column_count, rules.max_column_count
        ));
    }
    Ok(())
}

fn check_ship_types(settings: &AppSettings, rules: &SettingsRules) -> ValidationResult<String> {
    let ship_types = settings
        .ship_types
        .as_ref()
        .ok_or_else(|| "Lack of ShipTypes setting.".to_string())?;
    if ship_types.is_empty() {
        return Err("Lack of any ship type in ShipTypes setting.".to_string());
    }

    let mut names = HashSet::new();
    for ship_type in ship_types {
        let name = &ship_type.name;
        if !names.insert(name.as_str()) {
            return Err(format!(
                "ShipTypes -> Name '{}' is defined more than once.",
                name
            ));
        }
        let size = ship_type
            .size
            .ok_or_else(|| format!("Lack of ShipTypes -> Size of '{}' setting.", name))?;
        if !(rules.min_ship_size..=rules.max_ship_size).contains(&size) {
            return Err(format!(
                "ShipTypes -> Size of '{}' should be between {} and {}.",
                name, rules.min_ship_size, rules.max_ship_size
            ));
        }
        let count = ship_type
            .count
            .ok_or_else(|| format!("Lack of ShipTypes -> Count of '{}' setting.", name))?;
        if !(rules.min_ship_count..=rules.max_ship_count).contains(&count) {
            return Err(format!(
                "ShipTypes -> Count of '{}' should be between {} and {}.",
                name, rules.min_ship_count, rules.max_ship_count
            ));
        }
    }
    Ok(())
}
