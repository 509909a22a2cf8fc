//! One round of the game: both snakes, the fruit, the score, and the
//! tick step that advances them all.

use log::{debug, info};
use rand::Rng;

use super::{
    config::{ConfigError, GameConfig},
    enemy::EnemySnake,
    fruit::Fruit,
    grid::Direction,
    player::PlayerSnake,
};

/// Everything one round owns. Constructed fresh on every (re)start and
/// discarded on the next; nothing survives across rounds.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    player: PlayerSnake,
    enemy: EnemySnake,
    fruit: Fruit,
    score: u32,
    alive: bool,
}

impl GameSession {
    /// Builds a fresh round from `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the configuration fails
    /// [`GameConfig::validate`].
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        let player = PlayerSnake::new(config.player_start(), config.player_initial_length);
        let enemy = EnemySnake::spawn(&config, player.head(), rng);
        let fruit = Fruit::spawn(config.grid(), rng);
        Ok(Self {
            config,
            player,
            enemy,
            fruit,
            score: 0,
            alive: true,
        })
    }

    /// Forwards a direction input to the player's pending buffer. Inputs
    /// after the round has ended are dropped.
    pub fn set_player_direction(&mut self, direction: Direction) {
        if self.alive {
            self.player.set_direction(direction);
        }
    }

    /// One simulation step. The order is fixed and matters: the player
    /// moves, the enemy chases the player's new head, fruit consumption
    /// resolves, then the termination predicates run (enemy contact,
    /// self-collision, wall). A dead session does not advance.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        if !self.alive {
            return;
        }
        self.player.advance();
        self.enemy.advance(
            self.player.head(),
            self.config.grid(),
            self.config.enemy_move_probability,
            rng,
        );
        if self.player.head() == self.fruit.cell() {
            self.fruit.respawn(self.config.grid(), rng);
            self.player.mark_growth();
            self.score += 1;
            debug!("Fruit eaten; score is now {}", self.score);
        }
        if self.player.collides_with(self.enemy.body())
            || self.player.collides_with_self()
            || self.player.is_out_of_bounds(self.config.grid())
        {
            info!("Game over. Final score: {}", self.score);
            self.alive = false;
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub fn player(&self) -> &PlayerSnake {
        &self.player
    }

    #[must_use]
    pub fn enemy(&self) -> &EnemySnake {
        &self.enemy
    }

    #[must_use]
    pub fn fruit(&self) -> &Fruit {
        &self.fruit
    }
}
