//! The pursuing enemy snake.

use log::warn;
use rand::Rng;

use super::{
    body::Body,
    config::{GameConfig, MAX_SPAWN_ATTEMPTS},
    grid::{Cell, Direction, Grid},
};

/// Enemy snake: a [`Body`] plus the committed heading. It never grows and
/// takes no input; its heading is re-derived from the chase heuristic
/// every tick.
#[derive(Clone, Debug)]
pub struct EnemySnake {
    body: Body,
    direction: Direction,
}

impl EnemySnake {
    fn at(start: Cell, length: i32) -> Self {
        Self {
            body: Body::new(start, length, Direction::Right),
            direction: Direction::Right,
        }
    }

    /// Places the enemy for a new round: candidate cells are sampled
    /// uniformly inside the spawn margin until one is farther than a
    /// third of the grid from `player_head` on both axes independently.
    /// The search is capped at [`MAX_SPAWN_ATTEMPTS`]; past that the
    /// distance constraint is dropped so a degenerate grid cannot stall
    /// round construction.
    #[must_use]
    pub fn spawn<R: Rng>(config: &GameConfig, player_head: Cell, rng: &mut R) -> Self {
        let min_x = config.enemy_spawn_min_x();
        let max_x = config.grid_width - 2 * config.enemy_spawn_margin;
        let min_y = config.enemy_spawn_margin;
        let max_y = config.grid_height - 2 * config.enemy_spawn_margin;
        for _ in 0..MAX_SPAWN_ATTEMPTS {
            let candidate = Cell::new(rng.gen_range(min_x..=max_x), rng.gen_range(min_y..=max_y));
            if Self::far_enough(config, candidate, player_head) {
                return Self::at(candidate, config.enemy_initial_length);
            }
        }
        warn!(
            "No spawn cell cleared the distance constraint after {MAX_SPAWN_ATTEMPTS} attempts; \
             accepting a close one"
        );
        let candidate = Cell::new(rng.gen_range(min_x..=max_x), rng.gen_range(min_y..=max_y));
        Self::at(candidate, config.enemy_initial_length)
    }

    fn far_enough(config: &GameConfig, candidate: Cell, player_head: Cell) -> bool {
        let fraction = config.spawn_distance_fraction;
        f64::from((candidate.x - player_head.x).abs())
            > f64::from(config.grid_width) * fraction
            && f64::from((candidate.y - player_head.y).abs())
                > f64::from(config.grid_height) * fraction
    }

    /// Greedy per-tick step proposal: close the larger axis-aligned gap
    /// to `target`, ties and zero deltas falling to the vertical branch.
    #[must_use]
    pub fn chase_direction(from: Cell, target: Cell) -> Direction {
        let dx = target.x - from.x;
        let dy = target.y - from.y;
        if dx.abs() > dy.abs() {
            if dx > 0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if dy > 0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    /// One tick of pursuit. The proposed heading is committed only when
    /// a step in it stays on the grid; otherwise the previous heading is
    /// kept, even if that runs the enemy off the field. The body then
    /// moves with `move_probability`, which throttles the chase to
    /// roughly half the player's pace.
    pub fn advance<R: Rng>(
        &mut self,
        target: Cell,
        grid: Grid,
        move_probability: f64,
        rng: &mut R,
    ) {
        let proposed = Self::chase_direction(self.head(), target);
        if grid.contains(self.head().step(proposed)) {
            self.direction = proposed;
        }
        if rng.gen_bool(move_probability) {
            self.body.advance(self.direction, false);
        }
    }

    #[must_use]
    pub fn head(&self) -> Cell {
        self.body.head()
    }

    #[must_use]
    pub fn body(&self) -> &Body {
        &self.body
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub(crate) fn pinned(start: Cell, length: i32) -> Self {
        Self::at(start, length)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_spawn_respects_distance_and_margin() {
        let config = GameConfig::default();
        let player_head = config.player_start();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let enemy = EnemySnake::spawn(&config, player_head, &mut rng);
            let head = enemy.head();
            assert!(f64::from((head.x - player_head.x).abs()) > 27.0 / 3.0);
            assert!(f64::from((head.y - player_head.y).abs()) > 20.0 / 3.0);
            assert!(head.x >= config.enemy_spawn_min_x());
            assert!(head.x <= config.grid_width - 2 * config.enemy_spawn_margin);
            assert!(head.y >= config.enemy_spawn_margin);
            assert!(head.y <= config.grid_height - 2 * config.enemy_spawn_margin);
            assert_eq!(enemy.body().len(), 6);
            // whole initial tail must be committed on the grid
            assert!(enemy.body().cells().all(|c| config.grid().contains(c)));
        }
    }

    #[test]
    fn test_chase_prefers_larger_axis() {
        let from = Cell::new(10, 10);
        assert_eq!(
            EnemySnake::chase_direction(from, Cell::new(15, 10)),
            Direction::Right
        );
        assert_eq!(
            EnemySnake::chase_direction(from, Cell::new(4, 12)),
            Direction::Left
        );
        assert_eq!(
            EnemySnake::chase_direction(from, Cell::new(11, 14)),
            Direction::Down
        );
        assert_eq!(
            EnemySnake::chase_direction(from, Cell::new(10, 2)),
            Direction::Up
        );
    }

    #[test]
    fn test_chase_tie_takes_vertical_branch() {
        let from = Cell::new(10, 10);
        assert_eq!(
            EnemySnake::chase_direction(from, Cell::new(10, 10)),
            Direction::Up
        );
        assert_eq!(
            EnemySnake::chase_direction(from, Cell::new(13, 13)),
            Direction::Down
        );
    }

    #[test]
    fn test_advance_commits_heading_and_moves() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut enemy = EnemySnake::pinned(Cell::new(10, 10), 6);
        enemy.advance(Cell::new(20, 10), Grid::new(27, 20), 1.0, &mut rng);
        assert_eq!(enemy.direction(), Direction::Right);
        assert_eq!(enemy.head(), Cell::new(11, 10));
        assert_eq!(enemy.body().len(), 6);
    }

    #[test]
    fn test_advance_keeps_stale_heading_at_wall() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut enemy = EnemySnake::pinned(Cell::new(26, 10), 6);
        // target straight right of the head: the proposed step leaves the
        // grid, so the previous heading stays and the enemy walks off
        enemy.advance(Cell::new(30, 10), Grid::new(27, 20), 1.0, &mut rng);
        assert_eq!(enemy.direction(), Direction::Right);
        assert_eq!(enemy.head(), Cell::new(27, 10));
    }

    #[test]
    fn test_advance_with_zero_probability_stays_put() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut enemy = EnemySnake::pinned(Cell::new(10, 10), 6);
        enemy.advance(Cell::new(20, 10), Grid::new(27, 20), 0.0, &mut rng);
        assert_eq!(enemy.head(), Cell::new(10, 10));
        assert_eq!(enemy.direction(), Direction::Right);
    }
}
