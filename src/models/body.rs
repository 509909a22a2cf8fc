//! The ordered run of cells a snake occupies, shared by the player and the
//! enemy.

use std::collections::VecDeque;

use super::grid::{Cell, Direction};

/// Cells a snake occupies, head first, tail last. Never empty.
#[derive(Clone, Debug)]
pub struct Body {
    cells: VecDeque<Cell>,
}

impl Body {
    /// Creates a body of `length` consecutive cells with `head` in front,
    /// trailing away opposite `direction`. A `length` below 1 is clamped
    /// to 1.
    #[must_use]
    pub fn new(head: Cell, length: i32, direction: Direction) -> Self {
        let mut cells = VecDeque::new();
        let mut cell = head;
        cells.push_back(cell);
        for _ in 1..length {
            cell = cell.step(direction.opposite());
            cells.push_back(cell);
        }
        Self { cells }
    }

    /// # Panics
    ///
    /// Panics if the body is empty, which no constructor or movement
    /// permits.
    #[must_use]
    pub fn head(&self) -> Cell {
        self.cells
            .front()
            .copied()
            .expect("a body always has at least one cell")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Moves the body one cell in `direction`. The tail is kept when
    /// `grow` is set, lengthening the body by one; otherwise it is
    /// dropped and the length is unchanged.
    pub fn advance(&mut self, direction: Direction, grow: bool) {
        let new_head = self.head().step(direction);
        self.cells.push_front(new_head);
        if !grow {
            self.cells.pop_back();
        }
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// True when `cell` matches any segment behind the head.
    #[must_use]
    pub fn trunk_contains(&self, cell: Cell) -> bool {
        self.cells.iter().skip(1).any(|c| *c == cell)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trails_away_from_direction() {
        let body = Body::new(Cell::new(5, 10), 3, Direction::Right);
        let cells: Vec<Cell> = body.cells().collect();
        assert_eq!(
            cells,
            vec![Cell::new(5, 10), Cell::new(4, 10), Cell::new(3, 10)]
        );
    }

    #[test]
    fn test_new_clamps_length_to_one() {
        let body = Body::new(Cell::new(0, 0), 0, Direction::Up);
        assert_eq!(body.len(), 1);
        assert!(!body.is_empty());
    }

    #[test]
    fn test_advance_without_growth_keeps_length() {
        let mut body = Body::new(Cell::new(5, 10), 3, Direction::Right);
        body.advance(Direction::Right, false);
        assert_eq!(body.head(), Cell::new(6, 10));
        assert_eq!(body.len(), 3);
        assert!(!body.contains(Cell::new(3, 10)));
    }

    #[test]
    fn test_advance_with_growth_keeps_tail() {
        let mut body = Body::new(Cell::new(5, 10), 3, Direction::Right);
        body.advance(Direction::Right, true);
        assert_eq!(body.head(), Cell::new(6, 10));
        assert_eq!(body.len(), 4);
        assert!(body.contains(Cell::new(3, 10)));
    }

    #[test]
    fn test_trunk_contains_skips_head() {
        let body = Body::new(Cell::new(5, 10), 3, Direction::Right);
        assert!(!body.trunk_contains(Cell::new(5, 10)));
        assert!(body.trunk_contains(Cell::new(4, 10)));
    }
}
