//! Random ship candidates for grid population.

use std::sync::Arc;

use rand::Rng;

use crate::common::ShipFactoryError;
use crate::config::AppSettings;
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship};

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns a value in `[0, max)`; `0` when `max` is `0`.
    fn next(&mut self, max: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next(&mut self, max: usize) -> usize {
        (**self).next(max)
    }
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next(&mut self, max: usize) -> usize {
        if max == 0 {
            0
        } else {
            self.0.random_range(0..max)
        }
    }
}

/// Produces candidate ships for the grid builder.
pub trait ShipBuilder {
    /// Build a new, randomly placed ship of the named type.
    fn build_ship(&mut self, name: &str) -> Result<Ship, ShipFactoryError>;
}

impl<T: ShipBuilder + ?Sized> ShipBuilder for &mut T {
    fn build_ship(&mut self, name: &str) -> Result<Ship, ShipFactoryError> {
        (**self).build_ship(name)
    }
}

/// Builds ships of configured types at random positions that fit the grid.
pub struct ShipFactory<R: RandomSource> {
    settings: Arc<AppSettings>,
    random: R,
}

impl<R: RandomSource> ShipFactory<R> {
    pub fn new(settings: Arc<AppSettings>, random: R) -> Self {
        Self { settings, random }
    }
}

impl<R: RandomSource> ShipBuilder for ShipFactory<R> {
    fn build_ship(&mut self, name: &str) -> Result<Ship, ShipFactoryError> {
        let ship_type = self
            .settings
            .ship_type(name)
            .ok_or_else(|| ShipFactoryError::UnknownShipType(name.to_string()))?;
        let size = ship_type
            .size
            .ok_or(ShipFactoryError::MissingSetting("ShipTypes -> Size"))?;
        let size = usize::try_from(size).map_err(|_| ShipFactoryError::DoesNotFit {
            name: name.to_string(),
            size: 0,
        })?;
        let grid = self
            .settings
            .grid_size()
            .ok_or(ShipFactoryError::MissingSetting("Grid"))?;

        let fits_horizontally = size <= grid.column_count;
        let fits_vertically = size <= grid.row_count;
        let drawn = if self.random.next(2) == 1 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let orientation = match (drawn, fits_horizontally, fits_vertically) {
            (_, false, false) => {
                return Err(ShipFactoryError::DoesNotFit {
                    name: name.to_string(),
                    size,
                })
            }
            (Orientation::Horizontal, false, true) => Orientation::Vertical,
            (Orientation::Vertical, true, false) => Orientation::Horizontal,
            (orientation, _, _) => orientation,
        };

        // Start positions for which the whole ship stays on the grid.
        let (row_starts, column_starts) = match orientation {
            Orientation::Horizontal => (grid.row_count, grid.column_count - size + 1),
            Orientation::Vertical => (grid.row_count - size + 1, grid.column_count),
        };
        let row = self.random.next(row_starts);
        let column = self.random.next(column_starts);

        let top_left = Coordinate::new(column as i32, row as i32);
        Ok(Ship::new(name, top_left, orientation, size))
    }
}
