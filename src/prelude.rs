//! Commonly used types and utilities for ease of import.

pub use crate::{
    init_logging, AppSettings, Coordinate, GameError, GameLogic, GridSize, RngSource, ShotKind,
    ShotResult,
};
