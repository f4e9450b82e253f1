//! Populates a fresh grid with the ships listed in the settings.

use std::sync::Arc;

use crate::common::BuildError;
use crate::config::{AppSettings, ShipTypeSettings};
use crate::grid::Grid;
use crate::ship_factory::ShipBuilder;

/// Greedy, forward-only ship placement with a bounded number of attempts per
/// ship. Larger ships are placed first; ships already on the grid are never
/// moved, so a tight configuration can fail even though a packing exists.
pub struct GridBuilder<B: ShipBuilder> {
    settings: Arc<AppSettings>,
    ship_builder: B,
}

impl<B: ShipBuilder> GridBuilder<B> {
    pub fn new(settings: Arc<AppSettings>, ship_builder: B) -> Self {
        Self {
            settings,
            ship_builder,
        }
    }

    /// Settings the grid is built from.
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Build a new grid and place every configured ship on it.
    pub fn build(&mut self) -> Result<Grid, BuildError> {
        let settings = Arc::clone(&self.settings);
        let size = settings
            .grid_size()
            .ok_or(BuildError::MissingSetting("Grid"))?;
        let mut ship_types: Vec<&ShipTypeSettings> = settings
            .ship_types
            .as_deref()
            .ok_or(BuildError::MissingSetting("ShipTypes"))?
            .iter()
            .collect();
        ship_types.sort_by(|a, b| b.size.cmp(&a.size));

        let mut grid = Grid::new(size.column_count, size.row_count);
        let attempts = settings.placement_attempts();
        for ship_type in ship_types {
            let count = ship_type.count.unwrap_or(0).max(0);
            for _ in 0..count {
                self.place(&mut grid, &ship_type.name, attempts)?;
            }
        }

        log::info!(
            "built {} grid with {} ships",
            grid.size(),
            grid.ships().len()
        );
        Ok(grid)
    }

    fn place(&mut self, grid: &mut Grid, name: &str, attempts: usize) -> Result<(), BuildError> {
        for attempt in 1..=attempts {
            let ship = self.ship_builder.build_ship(name)?;
            if grid.try_place_ship(ship) {
                log::debug!("placed {} after {} attempt(s)", name, attempt);
                return Ok(());
            }
        }
        log::warn!("no room for {} after {} attempts", name, attempts);
        Err(BuildError::PlacementExhausted {
            name: name.to_string(),
            attempts,
        })
    }
}
