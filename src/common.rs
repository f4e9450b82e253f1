//! Common types for Battleships: shot outcomes, grid dimensions and the errors
//! raised by the game components.

use core::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::coordinate::Coordinate;

/// Outcome of a validation rule: `Ok(())` is success.
pub type ValidationResult<E> = Result<(), E>;

/// Dimensions of a grid. Always positive once settings have been checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct GridSize {
    pub column_count: usize,
    pub row_count: usize,
}

impl GridSize {
    pub const fn new(column_count: usize, row_count: usize) -> Self {
        Self {
            column_count,
            row_count,
        }
    }

    /// Returns `true` if the coordinate lies on a grid of this size.
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.index(coordinate).is_some()
    }

    /// Zero-based (row, column) of the coordinate, if it lies on the grid.
    pub(crate) fn index(&self, coordinate: &Coordinate) -> Option<(usize, usize)> {
        let column = usize::try_from(coordinate.column()).ok()?;
        let row = usize::try_from(coordinate.row()).ok()?;
        (column < self.column_count && row < self.row_count).then_some((row, column))
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.column_count, self.row_count)
    }
}

/// Classification of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShotKind {
    /// Shot landed on an empty cell.
    Water,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot sank a ship.
    Sink,
    /// Shot sank the last ship on the grid.
    GameEnd,
    /// Input could not be turned into a coordinate on the grid.
    WrongCoordinates,
    /// The cell had already been shot.
    TheSameCoordinatesAgain,
    /// The game reported a failure while resolving the move.
    Exception,
}

/// Result of a move, as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShotResult {
    pub coordinate: Option<Coordinate>,
    pub description: String,
    pub kind: ShotKind,
    /// Cells of the sunk ship; only set for `Sink` and `GameEnd`.
    pub sink_ship: Option<Vec<Coordinate>>,
}

impl ShotResult {
    pub fn water(coordinate: Coordinate) -> Self {
        Self {
            coordinate: Some(coordinate),
            description: "Water".to_string(),
            kind: ShotKind::Water,
            sink_ship: None,
        }
    }

    pub fn same_coordinates_again(coordinate: Coordinate) -> Self {
        Self {
            coordinate: Some(coordinate),
            description: "You have entered the same coordinates again".to_string(),
            kind: ShotKind::TheSameCoordinatesAgain,
            sink_ship: None,
        }
    }

    pub fn hit(coordinate: Coordinate, ship_name: &str) -> Self {
        Self {
            coordinate: Some(coordinate),
            description: format!("{} has been hit.", ship_name),
            kind: ShotKind::Hit,
            sink_ship: None,
        }
    }

    pub fn sink(coordinate: Coordinate, ship_name: &str, ship: Vec<Coordinate>) -> Self {
        Self {
            coordinate: Some(coordinate),
            description: format!("{} has been sunk.", ship_name),
            kind: ShotKind::Sink,
            sink_ship: Some(ship),
        }
    }

    pub fn wrong_coordinates(description: impl Into<String>) -> Self {
        Self {
            coordinate: None,
            description: description.into(),
            kind: ShotKind::WrongCoordinates,
            sink_ship: None,
        }
    }

    pub fn exception(description: impl Into<String>) -> Self {
        Self {
            coordinate: None,
            description: description.into(),
            kind: ShotKind::Exception,
            sink_ship: None,
        }
    }

    /// Turn a `Sink` into the final `GameEnd` result.
    pub(crate) fn into_game_end(mut self) -> Self {
        self.description.push_str(" You have won.");
        self.kind = ShotKind::GameEnd;
        self
    }
}

/// Errors raised while validating raw coordinate text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("Coordinate can't be empty.")]
    Empty,
    #[error("Wrong coordinate. Expected coordinate are one letter and number (from 1 to 999).")]
    Format,
    #[error("Wrong coordinate. Expected coordinate should end with number (from 1 to 999).")]
    NumericOverflow,
}

/// Errors returned by [`Ship`](crate::Ship) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShipError {
    #[error("coordinate {0} is not part of this ship")]
    CoordinateNotOnShip(Coordinate),
}

/// Errors returned by [`Grid`](crate::Grid) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Coordinate {coordinate} is outside of the {size} grid.")]
    CoordinateOutOfBounds {
        coordinate: Coordinate,
        size: GridSize,
    },
    #[error(transparent)]
    Ship(#[from] ShipError),
}

/// Errors returned by [`ShipFactory`](crate::ShipFactory).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShipFactoryError {
    #[error("Ship type '{0}' is not defined in settings.")]
    UnknownShipType(String),
    #[error("Ship '{name}' of size {size} does not fit on the grid.")]
    DoesNotFit { name: String, size: usize },
    #[error("Lack of {0} setting.")]
    MissingSetting(&'static str),
}

/// Errors returned by [`GridBuilder`](crate::GridBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Lack of {0} setting.")]
    MissingSetting(&'static str),
    #[error("Can't find any place for new ship.")]
    PlacementExhausted { name: String, attempts: usize },
    #[error(transparent)]
    Factory(#[from] ShipFactoryError),
}

/// Settings rejected by [`SettingsChecker`](crate::SettingsChecker). The
/// message carries the settings file prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct SettingsError(pub String);

/// Failures crossing the [`GameLogic`](crate::GameLogic) boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("No game is in progress. Start a new game first.")]
    NoActiveGame,
}
