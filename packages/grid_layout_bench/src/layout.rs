//! Multidimensional views over flat buffers.
//!
//! [`RowMajor`] maps a two-dimensional index `[row, col]` to a linear offset, and
//! [`GridView`] / [`GridViewMut`] pair that mapping with a borrowed slice so callers can
//! index with `view[[row, col]]` without computing offsets themselves.

use std::ops::{Index, IndexMut};

/// Row-major (last index fastest) mapping from `[row, col]` to a linear offset.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RowMajor {
    rows: usize,
    cols: usize,
}

impl RowMajor {
    /// Creates a mapping for a `rows` × `cols` extent.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(
            rows.checked_mul(cols).is_some(),
            "grid extents that overflow usize cannot be backed by memory"
        );

        Self { rows, cols }
    }

    /// The extents of the mapped index space, as `[rows, cols]`.
    #[must_use]
    pub fn extents(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// Number of elements a backing buffer must hold.
    #[must_use]
    pub fn required_span_size(&self) -> usize {
        self.rows
            .checked_mul(self.cols)
            .expect("guarded by the constructor")
    }

    /// Linear offset of `[row, col]`.
    ///
    /// Bounds are only checked in debug builds; an out-of-bounds index either maps to
    /// some other element or past the end of the buffer, where slice indexing will catch it.
    #[inline]
    #[must_use]
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "row < rows and col < cols keep this below required_span_size()"
    )]
    pub fn offset(&self, [row, col]: [usize; 2]) -> usize {
        debug_assert!(
            row < self.rows && col < self.cols,
            "index [{row}, {col}] out of bounds for extents [{}, {}]",
            self.rows,
            self.cols
        );

        row * self.cols + col
    }
}

/// Shared two-dimensional view over a flat slice.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a, T> {
    data: &'a [T],
    mapping: RowMajor,
}

impl<'a, T> GridView<'a, T> {
    /// Creates a view of `data` shaped by `mapping`.
    ///
    /// # Panics
    ///
    /// Panics if `data` is shorter than the mapping requires.
    #[must_use]
    pub fn new(data: &'a [T], mapping: RowMajor) -> Self {
        assert!(
            data.len() >= mapping.required_span_size(),
            "buffer of {} elements is too small for extents {:?}",
            data.len(),
            mapping.extents()
        );

        Self { data, mapping }
    }

    /// Skips the length check for buffers already sized by the caller. Indexing past the
    /// end of `data` still panics.
    #[inline]
    pub(crate) fn from_sized(data: &'a [T], mapping: RowMajor) -> Self {
        debug_assert!(data.len() >= mapping.required_span_size());

        Self { data, mapping }
    }

    /// The mapping used to translate indexes.
    #[must_use]
    pub fn mapping(&self) -> RowMajor {
        self.mapping
    }
}

impl<T> Index<[usize; 2]> for GridView<'_, T> {
    type Output = T;

    #[inline]
    #[expect(
        clippy::indexing_slicing,
        reason = "out-of-range offsets panic, matching slice semantics"
    )]
    fn index(&self, index: [usize; 2]) -> &T {
        &self.data[self.mapping.offset(index)]
    }
}

/// Exclusive two-dimensional view over a flat slice.
#[derive(Debug)]
pub struct GridViewMut<'a, T> {
    data: &'a mut [T],
    mapping: RowMajor,
}

impl<'a, T> GridViewMut<'a, T> {
    /// Creates a mutable view of `data` shaped by `mapping`.
    ///
    /// # Panics
    ///
    /// Panics if `data` is shorter than the mapping requires.
    #[must_use]
    pub fn new(data: &'a mut [T], mapping: RowMajor) -> Self {
        assert!(
            data.len() >= mapping.required_span_size(),
            "buffer of {} elements is too small for extents {:?}",
            data.len(),
            mapping.extents()
        );

        Self { data, mapping }
    }

    #[inline]
    pub(crate) fn from_sized(data: &'a mut [T], mapping: RowMajor) -> Self {
        debug_assert!(data.len() >= mapping.required_span_size());

        Self { data, mapping }
    }

    /// The mapping used to translate indexes.
    #[must_use]
    pub fn mapping(&self) -> RowMajor {
        self.mapping
    }
}

impl<T> Index<[usize; 2]> for GridViewMut<'_, T> {
    type Output = T;

    #[inline]
    #[expect(
        clippy::indexing_slicing,
        reason = "out-of-range offsets panic, matching slice semantics"
    )]
    fn index(&self, index: [usize; 2]) -> &T {
        &self.data[self.mapping.offset(index)]
    }
}

impl<T> IndexMut<[usize; 2]> for GridViewMut<'_, T> {
    #[inline]
    #[expect(
        clippy::indexing_slicing,
        reason = "out-of-range offsets panic, matching slice semantics"
    )]
    fn index_mut(&mut self, index: [usize; 2]) -> &mut T {
        &mut self.data[self.mapping.offset(index)]
    }
}
