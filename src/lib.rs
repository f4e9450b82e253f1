//! Single-player Battleships: randomly populated grid, coordinate parsing and
//! shot resolution behind the [`GameLogic`] façade.

mod common;
mod config;
mod coordinate;
mod game;
mod grid;
mod grid_builder;
mod logging;
mod parser;
mod settings_checker;
mod ship;
mod ship_factory;
pub mod prelude;

pub use common::*;
pub use config::*;
pub use coordinate::Coordinate;
pub use game::GameLogic;
pub use grid::{Cell, Grid};
pub use grid_builder::GridBuilder;
pub use logging::{init_logging, init_logging_at, level_from_env, LOG_ENV};
pub use parser::CoordinateParser;
pub use settings_checker::SettingsChecker;
pub use ship::{Orientation, Ship};
pub use ship_factory::{RandomSource, RngSource, ShipBuilder, ShipFactory};
