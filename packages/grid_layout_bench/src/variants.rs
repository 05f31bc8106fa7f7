//! The grid representations under comparison.

use std::fmt;
use std::str::FromStr;

use derive_more::Display;
use ndarray::Array2;

use crate::layout::{GridView, GridViewMut, RowMajor};
use crate::{CellSource, DEAD, Error, Grid};

/// Identifies one grid representation.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum GridKind {
    /// [`NestedGrid`]: one heap allocation per row.
    #[display("nested Vec")]
    Nested,

    /// [`FlatViewGrid`]: one buffer indexed through a [`RowMajor`] view.
    #[display("GridView")]
    FlatView,

    /// [`FlatManualGrid`]: one buffer indexed with hand-computed offsets.
    #[display("flat Vec")]
    FlatManual,

    /// [`DenseGrid`]: an `ndarray` matrix.
    #[display("ndarray::Array2")]
    Dense,
}

impl GridKind {
    /// Every representation, in the order the benchmark runs them by default.
    pub const ALL: [Self; 4] = [Self::Nested, Self::FlatView, Self::FlatManual, Self::Dense];

    /// Short name accepted on the command line and in configuration files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Nested => "nested",
            Self::FlatView => "view",
            Self::FlatManual => "manual",
            Self::Dense => "dense",
        }
    }

    /// One-line description printed before the variant is benchmarked.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Nested => "Vec<Vec<u8>>",
            Self::FlatView => "Vec<u8> through GridView",
            Self::FlatManual => "Vec<u8> with manual offsets",
            Self::Dense => "ndarray::Array2<u8>",
        }
    }
}

impl FromStr for GridKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownVariant(s.to_string()))
    }
}

/// A vector of row vectors. Every access goes through two indirections.
#[derive(Clone, Debug)]
pub struct NestedGrid {
    width: usize,
    rows: Vec<Vec<u8>>,
}

impl NestedGrid {
    /// Allocates a `width` × `height` grid of dead cells.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            rows: vec![vec![DEAD; width]; height],
        }
    }
}

#[expect(
    clippy::indexing_slicing,
    reason = "out-of-bounds coordinates panic by contract"
)]
impl Grid for NestedGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> u8 {
        self.rows[y][x]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, value: u8) {
        self.rows[y][x] = value;
    }

    fn fill_in_storage_order<S: CellSource + ?Sized>(&mut self, source: &mut S) {
        for row in &mut self.rows {
            for cell in row {
                *cell = source.next_cell();
            }
        }
    }
}

/// A flat buffer accessed through a [`GridView`] with a [`RowMajor`] mapping.
#[derive(Clone, Debug)]
pub struct FlatViewGrid {
    cells: Vec<u8>,
    mapping: RowMajor,
}

impl FlatViewGrid {
    /// Allocates a `width` × `height` grid of dead cells.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let mapping = RowMajor::new(height, width);

        Self {
            cells: vec![DEAD; mapping.required_span_size()],
            mapping,
        }
    }

    /// Shared view indexed by `[row, col]`.
    #[must_use]
    pub fn view(&self) -> GridView<'_, u8> {
        GridView::from_sized(&self.cells, self.mapping)
    }

    /// Mutable view indexed by `[row, col]`.
    #[must_use]
    pub fn view_mut(&mut self) -> GridViewMut<'_, u8> {
        GridViewMut::from_sized(&mut self.cells, self.mapping)
    }
}

impl Grid for FlatViewGrid {
    fn width(&self) -> usize {
        self.mapping.extents()[1]
    }

    fn height(&self) -> usize {
        self.mapping.extents()[0]
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> u8 {
        self.view()[[y, x]]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, value: u8) {
        self.view_mut()[[y, x]] = value;
    }

    fn fill_in_storage_order<S: CellSource + ?Sized>(&mut self, source: &mut S) {
        for cell in &mut self.cells {
            *cell = source.next_cell();
        }
    }
}

/// A flat buffer where the caller computes `y * width + x` itself.
#[derive(Clone, Debug)]
pub struct FlatManualGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl FlatManualGrid {
    /// Allocates a `width` × `height` grid of dead cells.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let len = width
            .checked_mul(height)
            .expect("grid extents that overflow usize cannot be backed by memory");

        Self {
            width,
            height,
            cells: vec![DEAD; len],
        }
    }

    /// The backing buffer, row by row.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

#[expect(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    reason = "out-of-bounds coordinates panic by contract"
)]
impl Grid for FlatManualGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[y * self.width + x]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, value: u8) {
        self.cells[y * self.width + x] = value;
    }

    fn fill_in_storage_order<S: CellSource + ?Sized>(&mut self, source: &mut S) {
        for cell in &mut self.cells {
            *cell = source.next_cell();
        }
    }

    #[inline]
    fn neighbor_sum(&self, x: usize, y: usize) -> u8 {
        let w = self.width;

        self.cells[(y - 1) * w + (x - 1)]
            + self.cells[(y - 1) * w + x]
            + self.cells[(y - 1) * w + (x + 1)]
            + self.cells[y * w + (x - 1)]
            + self.cells[y * w + (x + 1)]
            + self.cells[(y + 1) * w + (x - 1)]
            + self.cells[(y + 1) * w + x]
            + self.cells[(y + 1) * w + (x + 1)]
    }
}

/// An `ndarray` matrix, treated as an opaque two-index accessor.
#[derive(Clone)]
pub struct DenseGrid {
    cells: Array2<u8>,
}

impl DenseGrid {
    /// Allocates a `width` × `height` grid of dead cells.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::zeros((height, width)),
        }
    }
}

impl fmt::Debug for DenseGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseGrid")
            .field("shape", &self.cells.shape())
            .finish_non_exhaustive()
    }
}

#[expect(
    clippy::indexing_slicing,
    reason = "out-of-bounds coordinates panic by contract"
)]
impl Grid for DenseGrid {
    fn width(&self) -> usize {
        self.cells.ncols()
    }

    fn height(&self) -> usize {
        self.cells.nrows()
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[[y, x]]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, value: u8) {
        self.cells[[y, x]] = value;
    }

    fn fill_in_storage_order<S: CellSource + ?Sized>(&mut self, source: &mut S) {
        for cell in &mut self.cells {
            *cell = source.next_cell();
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::{ALIVE, FixedCells};

    fn exercise_get_set(grid: &mut impl Grid) {
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.live_cells(), 0);

        grid.set(3, 0, ALIVE);
        grid.set(0, 2, ALIVE);

        assert_eq!(grid.get(3, 0), ALIVE);
        assert_eq!(grid.get(0, 2), ALIVE);
        assert_eq!(grid.get(0, 0), DEAD);
        assert_eq!(grid.live_cells(), 2);
    }

    fn storage_order_is_row_major(grid: &mut impl Grid) {
        // Pattern marks only the second cell of the second row: offset width + 1.
        let mut pattern = vec![DEAD; 12];
        pattern[5] = ALIVE;
        grid.fill_in_storage_order(&mut FixedCells::new(pattern));

        assert_eq!(grid.get(1, 1), ALIVE);
        assert_eq!(grid.live_cells(), 1);
    }

    #[test]
    fn nested_get_set() {
        exercise_get_set(&mut NestedGrid::new(4, 3));
        storage_order_is_row_major(&mut NestedGrid::new(4, 3));
    }

    #[test]
    fn flat_view_get_set() {
        exercise_get_set(&mut FlatViewGrid::new(4, 3));
        storage_order_is_row_major(&mut FlatViewGrid::new(4, 3));
    }

    #[test]
    fn flat_manual_get_set() {
        exercise_get_set(&mut FlatManualGrid::new(4, 3));
        storage_order_is_row_major(&mut FlatManualGrid::new(4, 3));
    }

    #[test]
    fn dense_get_set() {
        exercise_get_set(&mut DenseGrid::new(4, 3));
        storage_order_is_row_major(&mut DenseGrid::new(4, 3));
    }

    #[test]
    fn flat_view_uses_row_then_column() {
        let mut grid = FlatViewGrid::new(4, 3);
        grid.set(2, 1, ALIVE);

        assert_eq!(grid.view()[[1, 2]], ALIVE);
        assert_eq!(grid.view()[[2, 1]], DEAD);
    }

    #[test]
    fn flat_manual_buffer_is_row_major() {
        let mut grid = FlatManualGrid::new(4, 3);
        grid.set(1, 2, ALIVE);

        assert_eq!(grid.as_slice()[9], ALIVE);
    }

    #[test]
    fn flat_manual_specialized_sum_matches_generic() {
        let mut grid = FlatManualGrid::new(3, 3);
        grid.set(0, 0, ALIVE);
        grid.set(2, 1, ALIVE);
        grid.set(1, 2, ALIVE);

        assert_eq!(grid.neighbor_sum(1, 1), 3);
    }

    #[test]
    #[should_panic]
    fn nested_out_of_bounds_panics() {
        let grid = NestedGrid::new(2, 2);
        let _cell = grid.get(2, 0);
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in GridKind::ALL {
            assert_eq!(kind.name().parse::<GridKind>().unwrap(), kind);
        }

        assert_eq!("DENSE".parse::<GridKind>().unwrap(), GridKind::Dense);
        assert!(matches!(
            "sparse".parse::<GridKind>(),
            Err(Error::UnknownVariant(name)) if name == "sparse"
        ));
    }

    #[test]
    fn kind_display_is_human_readable() {
        assert_eq!(GridKind::Nested.to_string(), "nested Vec");
        assert_eq!(GridKind::Dense.to_string(), "ndarray::Array2");
    }
}
