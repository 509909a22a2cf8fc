//! Fixed parameters of a round, exposed as named values instead of
//! scattered literals.

use std::time::Duration;

use super::grid::{Cell, Grid};

/// Rejection cap for the enemy spawn placement search. See
/// [`crate::models::enemy::EnemySnake::spawn`].
pub const MAX_SPAWN_ATTEMPTS: u32 = 1_000;

#[derive(Debug, Clone)]
pub enum ConfigError {
    GridTooSmall,
    InvalidLength,
    InvalidProbability,
    ZeroTickInterval,
}

/// Everything the original game hardcoded, in one place. `cell_size` is
/// rendering-only; the simulation never reads it.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub cell_size: u16,
    pub tick_interval: Duration,
    pub enemy_move_probability: f64,
    pub spawn_distance_fraction: f64,
    pub enemy_spawn_margin: i32,
    pub player_initial_length: i32,
    pub enemy_initial_length: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 27,
            grid_height: 20,
            cell_size: 30,
            tick_interval: Duration::from_millis(150),
            enemy_move_probability: 0.51,
            spawn_distance_fraction: 1.0 / 3.0,
            enemy_spawn_margin: 3,
            player_initial_length: 3,
            enemy_initial_length: 6,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    /// Where the player starts a round, body trailing leftward.
    #[must_use]
    pub fn player_start(&self) -> Cell {
        Cell::new(self.grid_width / 5, self.grid_height / 2)
    }

    /// Smallest x the enemy may spawn at: inside the margin, and far
    /// enough right that its whole initial tail lands on the grid.
    #[must_use]
    pub fn enemy_spawn_min_x(&self) -> i32 {
        self.enemy_spawn_margin.max(self.enemy_initial_length - 1)
    }

    /// Checks that a round can actually be constructed from these
    /// parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the grid cannot host the margins
    /// and initial bodies, a length is below 1, the enemy move
    /// probability falls outside `[0, 1]`, or the tick interval is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_initial_length < 1 || self.enemy_initial_length < 1 {
            return Err(ConfigError::InvalidLength);
        }
        if !(0.0..=1.0).contains(&self.enemy_move_probability) {
            return Err(ConfigError::InvalidProbability);
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        let spawn_max_x = self.grid_width - 2 * self.enemy_spawn_margin;
        let spawn_max_y = self.grid_height - 2 * self.enemy_spawn_margin;
        if self.enemy_spawn_margin < 0
            || self.enemy_spawn_min_x() > spawn_max_x
            || self.enemy_spawn_margin > spawn_max_y
        {
            return Err(ConfigError::GridTooSmall);
        }
        let start = self.player_start();
        if !self.grid().contains(start) || start.x - (self.player_initial_length - 1) < 0 {
            return Err(ConfigError::GridTooSmall);
        }
        Ok(())
    }
}
