//! Results of a benchmark run.

use std::fmt;

use crate::{GridKind, PhaseTiming, ReadOutcome};

/// Measurements for one grid variant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VariantReport {
    kind: GridKind,
    write: PhaseTiming,
    read: ReadOutcome,
    live_cells: usize,
}

impl VariantReport {
    pub(crate) fn new(
        kind: GridKind,
        write: PhaseTiming,
        read: ReadOutcome,
        live_cells: usize,
    ) -> Self {
        Self {
            kind,
            write,
            read,
            live_cells,
        }
    }

    /// The variant that was measured.
    #[must_use]
    pub fn kind(&self) -> GridKind {
        self.kind
    }

    /// Timing of the write phase.
    #[must_use]
    pub fn write(&self) -> PhaseTiming {
        self.write
    }

    /// Timing and counts of the read phase.
    #[must_use]
    pub fn read(&self) -> ReadOutcome {
        self.read
    }

    /// Matches summed over every read pass.
    #[must_use]
    pub fn checksum(&self) -> u64 {
        self.read.count.matches
    }

    /// Live cells the grid held after its last write pass.
    #[must_use]
    pub fn live_cells(&self) -> usize {
        self.live_cells
    }
}

impl fmt::Display for VariantReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: write {} ms ({:?} mean), read {} ms ({:?} mean), count {}",
            self.kind,
            self.write.elapsed().as_millis(),
            self.write.mean_per_repetition(),
            self.read.timing.elapsed().as_millis(),
            self.read.timing.mean_per_repetition(),
            self.checksum()
        )
    }
}

/// Measurements for every variant of a run, in the order they ran.
///
/// The [`Display`](fmt::Display) implementation renders the summary block printed at
/// the end of a run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RunReport {
    variants: Vec<VariantReport>,
    seeded: bool,
}

impl RunReport {
    pub(crate) fn new(variants: Vec<VariantReport>, seeded: bool) -> Self {
        Self { variants, seeded }
    }

    /// Per-variant results, in run order.
    #[must_use]
    pub fn variants(&self) -> &[VariantReport] {
        &self.variants
    }

    /// The result for `kind`, if it ran.
    #[must_use]
    pub fn get(&self, kind: GridKind) -> Option<&VariantReport> {
        self.variants.iter().find(|report| report.kind == kind)
    }

    /// Whether every variant was written from the same seeded sequence.
    #[must_use]
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Whether every variant produced the same checksum.
    ///
    /// Only meaningful when the run was seeded and more than one variant ran; returns
    /// `None` otherwise.
    #[must_use]
    pub fn checksums_agree(&self) -> Option<bool> {
        if !self.seeded || self.variants.len() < 2 {
            return None;
        }

        let mut checksums = self.variants.iter().map(VariantReport::checksum);
        let first = checksums.next()?;

        Some(checksums.all(|checksum| checksum == first))
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.variants.is_empty() {
            return write!(f, "No grid variants were benchmarked.");
        }

        writeln!(f, "Benchmark summary:")?;
        for variant in &self.variants {
            writeln!(f, "  {variant}")?;
        }

        match self.checksums_agree() {
            Some(true) => write!(f, "  checksums agree"),
            Some(false) => write!(f, "  checksums differ"),
            None => Ok(()),
        }
    }
}
