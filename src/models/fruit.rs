//! The score pickup.

use rand::Rng;

use super::grid::{Cell, Grid};

/// A single fruit cell. Overlap with a snake body is allowed; the
/// original never excluded occupied cells and the quirk is kept.
#[derive(Clone, Debug)]
pub struct Fruit {
    cell: Cell,
}

impl Fruit {
    #[must_use]
    pub fn spawn<R: Rng>(grid: Grid, rng: &mut R) -> Self {
        let mut fruit = Self {
            cell: Cell::new(0, 0),
        };
        fruit.respawn(grid, rng);
        fruit
    }

    /// Regenerates the fruit at a uniformly random cell of the grid.
    pub fn respawn<R: Rng>(&mut self, grid: Grid, rng: &mut R) {
        self.cell = Cell::new(
            rng.gen_range(0..grid.width()),
            rng.gen_range(0..grid.height()),
        );
    }

    #[must_use]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    #[cfg(test)]
    pub(crate) fn pinned(cell: Cell) -> Self {
        Self { cell }
    }
}
