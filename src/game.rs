//! Entry point for the presentation layer: starts games and resolves moves.

use std::sync::Arc;

use crate::common::{GameError, GridError, GridSize, ShotResult};
use crate::config::AppSettings;
use crate::grid::Grid;
use crate::grid_builder::GridBuilder;
use crate::parser::CoordinateParser;
use crate::settings_checker::SettingsChecker;
use crate::ship_factory::{RandomSource, ShipBuilder, ShipFactory};

/// Game façade holding the current session's grid.
///
/// Failures are returned as `Err`; a malformed or off-grid coordinate is a
/// normal move and comes back as `Ok` with a
/// [`ShotKind::WrongCoordinates`](crate::ShotKind::WrongCoordinates) result.
pub struct GameLogic<B: ShipBuilder> {
    checker: SettingsChecker,
    builder: GridBuilder<B>,
    grid: Option<Grid>,
}

impl<R: RandomSource> GameLogic<ShipFactory<R>> {
    /// Wire a game from settings and a random source with the default rules.
    pub fn from_settings(settings: AppSettings, random: R) -> Self {
        let settings = Arc::new(settings);
        let factory = ShipFactory::new(Arc::clone(&settings), random);
        let builder = GridBuilder::new(settings, factory);
        GameLogic::new(SettingsChecker::default(), builder)
    }
}

impl<B: ShipBuilder> GameLogic<B> {
    /// The settings checked before each game are the ones `builder` builds
    /// from.
    pub fn new(checker: SettingsChecker, builder: GridBuilder<B>) -> Self {
        Self {
            checker,
            builder,
            grid: None,
        }
    }

    /// Check the settings and build a fresh grid, replacing any game in
    /// progress.
    pub fn start_new_game(&mut self) -> Result<GridSize, GameError> {
        self.grid = None;
        self.checker.check(self.builder.settings())?;
        let grid = self.builder.build()?;
        let size = grid.size();
        self.grid = Some(grid);
        log::info!("new game started on a {} grid", size);
        Ok(size)
    }

    /// Resolve one move typed by the player.
    pub fn make_new_move(&mut self, raw: &str) -> Result<ShotResult, GameError> {
        let coordinate = match CoordinateParser::try_parse(raw) {
            Ok(coordinate) => coordinate,
            Err(e) => {
                log::debug!("rejected move {:?}: {}", raw, e);
                return Ok(ShotResult::wrong_coordinates(e.to_string()));
            }
        };
        let grid = self.grid.as_mut().ok_or(GameError::NoActiveGame)?;
        match grid.shot(coordinate) {
            Ok(result) => Ok(result),
            Err(e @ GridError::CoordinateOutOfBounds { .. }) => {
                Ok(ShotResult::wrong_coordinates(e.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Grid of the game in progress, if any.
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }
}
