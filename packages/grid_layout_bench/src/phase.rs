//! The two benchmark phases and the order they must run in.
//!
//! A grid starts out [`Pending`]. Writing it produces a [`Written`] grid, and only a
//! written grid can be read, producing a [`Finished`] grid. The transitions consume their
//! input, so a phase cannot be skipped or repeated out of order.

use std::num::NonZero;
use std::str::FromStr;
use std::time::Duration;

use derive_more::Display;

use crate::{CellSource, Error, Grid, ScopedTimer};

/// Neighbor sum that counts toward the checksum.
pub const MATCHING_NEIGHBOR_SUM: u8 = 3;

/// Order in which the write phase visits cells.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum WriteOrder {
    /// Row by row (`y` outer, `x` inner) through [`Grid::set`].
    #[default]
    #[display("row-major")]
    RowMajor,

    /// Column by column (`x` outer, `y` inner) through [`Grid::set`].
    #[display("column-major")]
    ColumnMajor,

    /// Whatever order the representation stores cells in, walking storage directly.
    #[display("storage")]
    Storage,
}

impl WriteOrder {
    /// Every order, for listing in help and error messages.
    pub const ALL: [Self; 3] = [Self::RowMajor, Self::ColumnMajor, Self::Storage];
}

impl FromStr for WriteOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                Error::invalid_config(
                    "write_order",
                    format!("'{s}' is not one of: row-major, column-major, storage"),
                )
            })
    }
}

/// Result of scanning the interior of a grid one or more times.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub struct PassCount {
    /// Interior cells whose neighbor sum was exactly [`MATCHING_NEIGHBOR_SUM`].
    pub matches: u64,

    /// Interior cells examined.
    pub cells_visited: u64,
}

/// Overwrites every cell of `grid` once, in the given order.
pub fn write_pass<G, S>(grid: &mut G, order: WriteOrder, source: &mut S)
where
    G: Grid + ?Sized,
    S: CellSource + ?Sized,
{
    let (width, height) = (grid.width(), grid.height());

    match order {
        WriteOrder::RowMajor => {
            for y in 0..height {
                for x in 0..width {
                    grid.set(x, y, source.next_cell());
                }
            }
        }
        WriteOrder::ColumnMajor => {
            for x in 0..width {
                for y in 0..height {
                    grid.set(x, y, source.next_cell());
                }
            }
        }
        WriteOrder::Storage => grid.fill_in_storage_order(source),
    }
}

/// Scans every interior cell once and counts those with exactly three live neighbors.
///
/// Border cells are never examined and never counted. A grid narrower or shorter than
/// three cells has no interior.
pub fn read_pass<G: Grid + ?Sized>(grid: &G) -> PassCount {
    let (width, height) = (grid.width(), grid.height());

    let (Some(x_end), Some(y_end)) = (width.checked_sub(1), height.checked_sub(1)) else {
        return PassCount::default();
    };

    let mut matches = 0_u64;

    for x in 1..x_end {
        for y in 1..y_end {
            if grid.neighbor_sum(x, y) == MATCHING_NEIGHBOR_SUM {
                matches = matches
                    .checked_add(1)
                    .expect("bounded by the interior cell count");
            }
        }
    }

    PassCount {
        matches,
        cells_visited: interior_cells(width, height),
    }
}

/// Number of interior cells in a `width` × `height` grid.
#[must_use]
pub fn interior_cells(width: usize, height: usize) -> u64 {
    let inner = width
        .saturating_sub(2)
        .checked_mul(height.saturating_sub(2))
        .expect("grid dimensions were validated at allocation");

    u64::try_from(inner).expect("usize always fits in u64 on supported targets")
}

/// Elapsed time of one phase and how many passes it covered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PhaseTiming {
    elapsed: Duration,
    repetitions: NonZero<u64>,
}

impl PhaseTiming {
    pub(crate) fn new(elapsed: Duration, repetitions: NonZero<u64>) -> Self {
        Self {
            elapsed,
            repetitions,
        }
    }

    /// Total wall-clock time of the phase.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of full passes the phase made over the grid.
    #[must_use]
    pub fn repetitions(&self) -> NonZero<u64> {
        self.repetitions
    }

    /// Mean wall-clock time of a single pass.
    #[must_use]
    pub fn mean_per_repetition(&self) -> Duration {
        Duration::from_nanos(
            self.elapsed
                .as_nanos()
                .checked_div(u128::from(self.repetitions.get()))
                .expect("divisor is non-zero by type")
                .try_into()
                .expect("all realistic values fit in u64"),
        )
    }
}

/// Outcome of the read phase.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ReadOutcome {
    /// How long the phase took.
    pub timing: PhaseTiming,

    /// Matches and visited cells summed over every repetition.
    pub count: PassCount,
}

/// A freshly allocated grid that has not been written yet.
#[derive(Debug)]
pub struct Pending<G> {
    grid: G,
}

impl<G: Grid> Pending<G> {
    /// Wraps a newly allocated grid.
    pub fn new(grid: G) -> Self {
        Self { grid }
    }

    /// Runs the write phase: `repetitions` full write passes, timed by `timer`.
    ///
    /// The timer reports when the phase ends.
    pub fn write<S: CellSource + ?Sized>(
        mut self,
        timer: ScopedTimer,
        repetitions: NonZero<u64>,
        order: WriteOrder,
        source: &mut S,
    ) -> Written<G> {
        for _ in 0..repetitions.get() {
            write_pass(&mut self.grid, order, source);
        }

        let elapsed = timer.finish();

        Written {
            grid: self.grid,
            write: PhaseTiming::new(elapsed, repetitions),
        }
    }
}

/// A grid whose write phase has completed.
#[derive(Debug)]
pub struct Written<G> {
    grid: G,
    write: PhaseTiming,
}

impl<G: Grid> Written<G> {
    /// The written grid.
    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Timing of the write phase.
    pub fn write_timing(&self) -> PhaseTiming {
        self.write
    }

    /// Runs the read phase: `repetitions` full read passes, timed by `timer`.
    ///
    /// Match counts accumulate across repetitions.
    pub fn read(self, timer: ScopedTimer, repetitions: NonZero<u64>) -> Finished<G> {
        let mut total = PassCount::default();

        for _ in 0..repetitions.get() {
            let pass = read_pass(&self.grid);

            total.matches = total
                .matches
                .checked_add(pass.matches)
                .expect("checksum overflowing u64 indicates an unrealistic scenario");
            total.cells_visited = total
                .cells_visited
                .checked_add(pass.cells_visited)
                .expect("visit count overflowing u64 indicates an unrealistic scenario");
        }

        let elapsed = timer.finish();

        Finished {
            grid: self.grid,
            write: self.write,
            read: ReadOutcome {
                timing: PhaseTiming::new(elapsed, repetitions),
                count: total,
            },
        }
    }
}

/// A grid that has been through both phases.
#[derive(Debug)]
pub struct Finished<G> {
    grid: G,
    write: PhaseTiming,
    read: ReadOutcome,
}

impl<G: Grid> Finished<G> {
    /// The grid as the last write pass left it.
    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Timing of the write phase.
    pub fn write_timing(&self) -> PhaseTiming {
        self.write
    }

    /// Timing and checksum of the read phase.
    pub fn read_outcome(&self) -> ReadOutcome {
        self.read
    }

    /// Releases the grid.
    pub fn into_grid(self) -> G {
        self.grid
    }
}
