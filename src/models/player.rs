//! The player-controlled snake.

use super::{
    body::Body,
    grid::{Cell, Direction, Grid},
};

/// Player snake: a [`Body`] plus the committed heading, a pending
/// direction buffer fed by input events, and the growth flag.
#[derive(Clone, Debug)]
pub struct PlayerSnake {
    body: Body,
    direction: Direction,
    pending: Option<Direction>,
    grow: bool,
}

impl PlayerSnake {
    /// Creates the player at `start`, heading right with its body trailing
    /// leftward, as at round start.
    #[must_use]
    pub fn new(start: Cell, length: i32) -> Self {
        Self {
            body: Body::new(start, length, Direction::Right),
            direction: Direction::Right,
            pending: None,
            grow: false,
        }
    }

    /// Buffers `direction` to take effect on the next advance. A request
    /// for the exact reverse of the committed heading is ignored, and
    /// repeated calls between ticks overwrite each other (last valid
    /// write wins).
    pub fn set_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.pending = Some(direction);
    }

    /// Commits the buffered direction, if any, then moves one cell,
    /// consuming the growth flag.
    pub fn advance(&mut self) {
        if let Some(direction) = self.pending.take() {
            self.direction = direction;
        }
        let grow = std::mem::take(&mut self.grow);
        self.body.advance(self.direction, grow);
    }

    /// Lengthens the body on the next advance.
    pub fn mark_growth(&mut self) {
        self.grow = true;
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

    #[must_use]
    pub fn collides_with_self(&self) -> bool {
        self.body.trunk_contains(self.head())
    }

    #[must_use]
    pub fn collides_with(&self, other: &Body) -> bool {
        other.contains(self.head())
    }

    #[must_use]
    pub fn is_out_of_bounds(&self, grid: Grid) -> bool {
        !grid.contains(self.head())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversal_is_rejected() {
        let mut player = PlayerSnake::new(Cell::new(5, 10), 3);
        player.set_direction(Direction::Left);
        player.advance();
        assert_eq!(player.direction(), Direction::Right);
        assert_eq!(player.head(), Cell::new(6, 10));
    }

    #[test]
    fn test_last_valid_input_wins() {
        let mut player = PlayerSnake::new(Cell::new(5, 10), 3);
        player.set_direction(Direction::Up);
        player.set_direction(Direction::Down);
        // reversal of the committed heading, not of the buffer
        player.set_direction(Direction::Left);
        player.advance();
        assert_eq!(player.direction(), Direction::Down);
        assert_eq!(player.head(), Cell::new(5, 11));
    }

    #[test]
    fn test_advance_applies_growth_once() {
        let mut player = PlayerSnake::new(Cell::new(5, 10), 3);
        player.mark_growth();
        player.advance();
        assert_eq!(player.body().len(), 4);
        player.advance();
        assert_eq!(player.body().len(), 4);
    }

    #[test]
    fn test_self_collision_on_reentered_cell() {
        let mut player = PlayerSnake::new(Cell::new(5, 10), 5);
        // curl back into the trunk: right -> down -> left -> up
        player.advance();
        player.set_direction(Direction::Down);
        player.advance();
        player.set_direction(Direction::Left);
        player.advance();
        player.set_direction(Direction::Up);
        player.advance();
        assert!(player.collides_with_self());
    }

    #[test]
    fn test_no_self_collision_on_short_body() {
        let player = PlayerSnake::new(Cell::new(5, 10), 3);
        assert!(!player.collides_with_self());
    }

    #[test]
    fn test_collides_with_other_body() {
        let player = PlayerSnake::new(Cell::new(5, 10), 3);
        let crossing = Body::new(Cell::new(5, 10), 6, Direction::Up);
        let clear = Body::new(Cell::new(20, 2), 6, Direction::Up);
        assert!(player.collides_with(&crossing));
        assert!(!player.collides_with(&clear));
    }

    #[test]
    fn test_out_of_bounds_detection() {
        let grid = Grid::new(27, 20);
        for head in [
            Cell::new(-1, 5),
            Cell::new(27, 5),
            Cell::new(5, -1),
            Cell::new(5, 20),
        ] {
            let player = PlayerSnake::new(head, 1);
            assert!(player.is_out_of_bounds(grid), "expected {head:?} out");
        }
        for head in [Cell::new(0, 0), Cell::new(26, 19)] {
            let player = PlayerSnake::new(head, 1);
            assert!(!player.is_out_of_bounds(grid), "expected {head:?} in");
        }
    }

    #[test]
    fn test_length_never_decreases_over_input_sequences() {
        let mut player = PlayerSnake::new(Cell::new(5, 10), 3);
        let inputs = [
            Some(Direction::Up),
            None,
            Some(Direction::Right),
            Some(Direction::Down),
            None,
            Some(Direction::Left),
        ];
        let mut last_len = player.body().len();
        for input in inputs {
            if let Some(direction) = input {
                player.set_direction(direction);
            }
            player.advance();
            assert!(player.body().len() >= last_len);
            last_len = player.body().len();
        }
    }
}
