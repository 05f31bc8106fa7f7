#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Compares how the memory layout of a 2D grid affects a neighbor-counting workload.
//!
//! The same `width` × `height` field of 0/1 cells is stored four ways:
//!
//! - [`NestedGrid`] - a vector of row vectors
//! - [`FlatViewGrid`] - one flat buffer indexed through a [`GridView`]
//! - [`FlatManualGrid`] - one flat buffer with hand-computed offsets
//! - [`DenseGrid`] - an `ndarray` matrix
//!
//! Each is put through two timed phases. The write phase fills every cell with random
//! values a number of times. The read phase scans every interior cell a number of times
//! and counts those with exactly three live neighbors. The count is printed as a
//! checksum so the work cannot be optimized away, and so the variants can be checked
//! against each other.
//!
//! Timing uses [`ScopedTimer`], which prints `Elapsed time for <label>:<ms>` when it goes
//! out of scope.
//!
//! # Running a benchmark
//!
//! ```
//! use std::num::NonZero;
//!
//! use grid_layout_bench::{BenchConfig, GridBenchmarkRunner};
//!
//! let config = BenchConfig::default()
//!     .with_dimensions(32, 32)
//!     .with_repetitions(NonZero::new(5).unwrap());
//!
//! let report = GridBenchmarkRunner::new(config)?.run();
//!
//! for variant in report.variants() {
//!     println!("{}: {}", variant.kind(), variant.checksum());
//! }
//! # Ok::<(), grid_layout_bench::Error>(())
//! ```
//!
//! # Driving the phases directly
//!
//! The phases are typestates: a grid must be written before it can be read.
//!
//! ```
//! use std::num::NonZero;
//!
//! use grid_layout_bench::{FlatManualGrid, Pending, RandomCells, ScopedTimer, WriteOrder};
//!
//! let repetitions = NonZero::new(10).unwrap();
//! let mut source = RandomCells::seeded(7, 0.5);
//!
//! let finished = Pending::new(FlatManualGrid::new(64, 64))
//!     .write(
//!         ScopedTimer::new("write"),
//!         repetitions,
//!         WriteOrder::RowMajor,
//!         &mut source,
//!     )
//!     .read(ScopedTimer::new("read"), repetitions);
//!
//! println!("Count:{}", finished.read_outcome().count.matches);
//! ```
//!
//! # Threading
//!
//! Everything runs on the calling thread. [`ScopedTimer`] is neither [`Send`] nor
//! [`Sync`], so a measurement cannot migrate to another thread while in progress.

mod config;
mod error;
mod grid;
mod layout;
mod pal;
mod phase;
mod report;
mod runner;
mod source;
mod timer;
mod variants;

pub use config::BenchConfig;
pub use error::Error;
pub use grid::{ALIVE, DEAD, Grid};
pub use layout::{GridView, GridViewMut, RowMajor};
pub use phase::{
    Finished, MATCHING_NEIGHBOR_SUM, PassCount, Pending, PhaseTiming, ReadOutcome, WriteOrder,
    Written, interior_cells, read_pass, write_pass,
};
pub use report::{RunReport, VariantReport};
pub use runner::GridBenchmarkRunner;
pub use source::{CellSource, FixedCells, RandomCells};
pub use timer::{DEFAULT_TIMER_LABEL, ScopedTimer, format_elapsed_line};
pub use variants::{DenseGrid, FlatManualGrid, FlatViewGrid, GridKind, NestedGrid};
