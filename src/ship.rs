//! Ship geometry and per-cell hit tracking.

use core::fmt;

use crate::common::{ShipError, ShotResult};
use crate::coordinate::Coordinate;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A placed ship: the cells it occupies, the halo around it where no other
/// ship may be placed, and which of its cells have been hit.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    name: String,
    orientation: Orientation,
    coordinates: Vec<Coordinate>,
    margin: Vec<Coordinate>,
    hits: Vec<bool>,
}

impl Ship {
    /// Lay out a ship of `size` cells starting at `top_left` and extending
    /// right (horizontal) or down (vertical).
    pub fn new(
        name: impl Into<String>,
        top_left: Coordinate,
        orientation: Orientation,
        size: usize,
    ) -> Self {
        let (width, height) = match orientation {
            Orientation::Horizontal => (size as i32, 1),
            Orientation::Vertical => (1, size as i32),
        };

        let mut coordinates: Vec<Coordinate> = (0..size as i32)
            .map(|i| match orientation {
                Orientation::Horizontal => top_left.offset(i, 0),
                Orientation::Vertical => top_left.offset(0, i),
            })
            .collect();
        coordinates.sort_by_key(|c| c.column());

        // Bounding rectangle grown by one cell on every side, minus the ship.
        let mut margin: Vec<Coordinate> = (-1..=height)
            .flat_map(|row| (-1..=width).map(move |column| top_left.offset(column, row)))
            .filter(|c| !coordinates.contains(c))
            .collect();
        margin.sort_by_key(|c| (c.row(), c.column()));

        let hits = vec![false; coordinates.len()];
        Ship {
            name: name.into(),
            orientation,
            coordinates,
            margin,
            hits,
        }
    }

    /// Ship type name, e.g. "Destroyer".
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.coordinates.len()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells occupied by the ship, ordered by column.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Cells surrounding the ship, ordered by row then column. May contain
    /// coordinates outside of any grid.
    pub fn margin_coordinates(&self) -> &[Coordinate] {
        &self.margin
    }

    /// Returns `true` if the ship occupies `coordinate`.
    pub fn occupies(&self, coordinate: &Coordinate) -> bool {
        self.coordinates.contains(coordinate)
    }

    /// Returns `true` if `coordinate` lies in the ship's exclusion zone.
    pub fn borders(&self, coordinate: &Coordinate) -> bool {
        self.margin.contains(coordinate)
    }

    /// Returns `true` if `coordinate` has been hit.
    pub fn is_hit(&self, coordinate: &Coordinate) -> bool {
        self.position(coordinate)
            .map(|i| self.hits[i])
            .unwrap_or(false)
    }

    /// Check if the ship is sunk (all cells hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.iter().all(|hit| *hit)
    }

    /// Register a shot at one of the ship's cells. Shooting the same cell
    /// twice is allowed and reports the current state again.
    pub fn shot(&mut self, coordinate: Coordinate) -> Result<ShotResult, ShipError> {
        let index = self
            .position(&coordinate)
            .ok_or(ShipError::CoordinateNotOnShip(coordinate))?;
        self.hits[index] = true;

        if self.is_sunk() {
            Ok(ShotResult::sink(
                coordinate,
                &self.name,
                self.coordinates.clone(),
            ))
        } else {
            Ok(ShotResult::hit(coordinate, &self.name))
        }
    }

    fn position(&self, coordinate: &Coordinate) -> Option<usize> {
        self.coordinates.iter().position(|c| c == coordinate)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hits = self.hits.iter().filter(|hit| **hit).count();
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {}, orientation: {:?}, size: {}, hits: {} }}",
            self.name,
            self.coordinates
                .first()
                .map(ToString::to_string)
                .unwrap_or_default(),
            self.orientation,
            self.size(),
            hits,
        )
    }
}
