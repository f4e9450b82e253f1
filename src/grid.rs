//! The game grid: placed ships, per-cell state and shot resolution.

use core::fmt;

use crate::common::{GridError, GridSize, ShotKind, ShotResult};
use crate::coordinate::Coordinate;
use crate::ship::Ship;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Never owned by a ship and never shot.
    Empty,
    /// Occupied by the ship at this index in [`Grid::ships`], not yet shot.
    Owned(usize),
    /// Already targeted; keeps the owning ship, if any.
    Shot(Option<usize>),
}

/// Mutable game board. Rebuilt from scratch for every game.
#[derive(Clone, Default)]
pub struct Grid {
    size: GridSize,
    ships: Vec<Ship>,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create an empty grid of the given size.
    pub fn new(column_count: usize, row_count: usize) -> Self {
        let mut grid = Grid::default();
        grid.build(column_count, row_count);
        grid
    }

    /// Reset to an empty grid of the given size, dropping all ships and shots.
    pub fn build(&mut self, column_count: usize, row_count: usize) {
        self.size = GridSize::new(column_count, row_count);
        self.ships = Vec::new();
        self.cells = vec![vec![Cell::Empty; column_count]; row_count];
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Placed ships, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// State of the cell at `coordinate`, or `None` if it is off the grid.
    pub fn cell(&self, coordinate: &Coordinate) -> Option<Cell> {
        let (row, column) = self.size.index(coordinate)?;
        Some(self.cells[row][column])
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Place `ship` unless it leaves the grid, overlaps another ship or
    /// touches one (diagonals included). Returns `false` without changing
    /// the grid when the ship is rejected.
    pub fn try_place_ship(&mut self, ship: Ship) -> bool {
        if !ship.coordinates().iter().all(|c| self.size.contains(c)) {
            return false;
        }
        let blocked = self.ships.iter().any(|placed| {
            ship.coordinates()
                .iter()
                .any(|c| placed.occupies(c) || placed.borders(c))
        });
        if blocked {
            return false;
        }

        let index = self.ships.len();
        for coordinate in ship.coordinates() {
            if let Some((row, column)) = self.size.index(coordinate) {
                self.cells[row][column] = Cell::Owned(index);
            }
        }
        self.ships.push(ship);
        true
    }

    /// Fire at `coordinate` and classify the outcome.
    pub fn shot(&mut self, coordinate: Coordinate) -> Result<ShotResult, GridError> {
        let (row, column) =
            self.size
                .index(&coordinate)
                .ok_or(GridError::CoordinateOutOfBounds {
                    coordinate,
                    size: self.size,
                })?;

        let result = match self.cells[row][column] {
            Cell::Shot(_) => ShotResult::same_coordinates_again(coordinate),
            Cell::Empty => {
                self.cells[row][column] = Cell::Shot(None);
                ShotResult::water(coordinate)
            }
            Cell::Owned(index) => {
                let result = self.ships[index].shot(coordinate)?;
                self.cells[row][column] = Cell::Shot(Some(index));
                if result.kind == ShotKind::Sink && self.all_sunk() {
                    log::info!("last ship sunk at {}", coordinate);
                    result.into_game_end()
                } else {
                    result
                }
            }
        };
        log::debug!("shot at {}: {:?}", coordinate, result.kind);
        Ok(result)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{ size: {}, ships: {:?} }}", self.size, self.ships)?;
        for row in &self.cells {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Owned(_) => 'S',
                    Cell::Shot(None) => 'o',
                    Cell::Shot(Some(_)) => 'X',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
