//! The capability set shared by every grid representation.

use crate::CellSource;

/// Value of a cell that is not set.
pub const DEAD: u8 = 0;

/// Value of a cell that is set.
pub const ALIVE: u8 = 1;

/// A `width` × `height` field of 0/1 cells.
///
/// Cell `(x, y)` is column `x` of row `y` in every implementation, so two grids holding
/// the same field answer [`get()`](Self::get) identically regardless of memory layout.
///
/// Implementations are expected to panic on out-of-bounds coordinates, the same way
/// slice indexing does.
pub trait Grid {
    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of rows.
    fn height(&self) -> usize;

    /// Reads cell `(x, y)`.
    fn get(&self, x: usize, y: usize) -> u8;

    /// Overwrites cell `(x, y)`.
    fn set(&mut self, x: usize, y: usize, value: u8);

    /// Overwrites every cell, visiting them in the order they are laid out in memory.
    ///
    /// This is the "iterate all" capability: implementations walk their storage directly
    /// instead of going through coordinates.
    fn fill_in_storage_order<S: CellSource + ?Sized>(&mut self, source: &mut S);

    /// Sum of the eight Moore neighbors of `(x, y)`.
    ///
    /// The neighborhood is spelled out instead of looped over so there is no center-cell
    /// check. `(x, y)` must be an interior cell.
    #[inline]
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "interior coordinates keep every neighbor in bounds and the sum at most 8"
    )]
    fn neighbor_sum(&self, x: usize, y: usize) -> u8 {
        self.get(x - 1, y - 1)
            + self.get(x, y - 1)
            + self.get(x + 1, y - 1)
            + self.get(x - 1, y)
            + self.get(x + 1, y)
            + self.get(x - 1, y + 1)
            + self.get(x, y + 1)
            + self.get(x + 1, y + 1)
    }

    /// Number of cells set to [`ALIVE`].
    fn live_cells(&self) -> usize {
        let mut live = 0_usize;

        for y in 0..self.height() {
            for x in 0..self.width() {
                if self.get(x, y) == ALIVE {
                    live = live.checked_add(1).expect("bounded by the cell count");
                }
            }
        }

        live
    }

    /// Total number of cells, border included.
    fn cell_count(&self) -> usize {
        self.width()
            .checked_mul(self.height())
            .expect("grid dimensions were validated at allocation")
    }
}
