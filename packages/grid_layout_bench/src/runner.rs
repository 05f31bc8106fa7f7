use crate::error::Result;
use crate::pal::{Platform, PlatformFacade};
use crate::{
    BenchConfig, DenseGrid, FlatManualGrid, FlatViewGrid, Grid, GridKind, NestedGrid, Pending,
    RandomCells, RunReport, ScopedTimer, VariantReport,
};

/// Runs the write and read phases over each configured grid variant and prints the
/// results as it goes.
///
/// For every variant the runner prints a `Testing <description>` header, one
/// `Elapsed time for <label>:<ms>` line per phase and the read-phase checksum as
/// `Count:<n>`. A blank line separates variants and a summary follows the last one.
///
/// # Examples
///
/// ```
/// use std::num::NonZero;
///
/// use grid_layout_bench::{BenchConfig, GridBenchmarkRunner, GridKind};
///
/// let config = BenchConfig::default()
///     .with_dimensions(16, 16)
///     .with_repetitions(NonZero::new(2).unwrap())
///     .with_seed(Some(1));
///
/// let report = GridBenchmarkRunner::new(config)?.run();
///
/// assert_eq!(report.variants().len(), GridKind::ALL.len());
/// assert_eq!(report.checksums_agree(), Some(true));
/// # Ok::<(), grid_layout_bench::Error>(())
/// ```
#[derive(Debug)]
pub struct GridBenchmarkRunner {
    config: BenchConfig,
    platform: PlatformFacade,
}

impl GridBenchmarkRunner {
    /// Prepares a run with the given settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not pass
    /// [`BenchConfig::validate()`].
    pub fn new(config: BenchConfig) -> Result<Self> {
        Self::with_platform(config, PlatformFacade::real())
    }

    pub(crate) fn with_platform(config: BenchConfig, platform: PlatformFacade) -> Result<Self> {
        config.validate()?;

        Ok(Self { config, platform })
    }

    /// The settings this runner was created with.
    #[must_use]
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Benchmarks every configured variant in order.
    ///
    /// Each variant gets a freshly allocated grid. Allocation happens before the timers
    /// start.
    pub fn run(&self) -> RunReport {
        let mut variants = Vec::with_capacity(self.config.variants().len());

        for &kind in self.config.variants() {
            variants.push(self.run_kind(kind));
            self.platform.emit_line("");
        }

        let report = RunReport::new(variants, self.config.seed().is_some());

        for line in report.to_string().lines() {
            self.platform.emit_line(line);
        }

        report
    }

    fn run_kind(&self, kind: GridKind) -> VariantReport {
        let (width, height) = (self.config.width(), self.config.height());

        match kind {
            GridKind::Nested => self.run_variant(kind, NestedGrid::new(width, height)),
            GridKind::FlatView => self.run_variant(kind, FlatViewGrid::new(width, height)),
            GridKind::FlatManual => self.run_variant(kind, FlatManualGrid::new(width, height)),
            GridKind::Dense => self.run_variant(kind, DenseGrid::new(width, height)),
        }
    }

    fn run_variant<G: Grid>(&self, kind: GridKind, grid: G) -> VariantReport {
        self.platform
            .emit_line(&format!("Testing {}", kind.description()));

        let repetitions = self.config.repetitions();
        let mut source = self.cell_source();

        let written = Pending::new(grid).write(
            self.timer(format!("Write {kind}")),
            repetitions,
            self.config.write_order(),
            &mut source,
        );
        let finished = written.read(self.timer(format!("Read {kind}")), repetitions);

        let read = finished.read_outcome();
        self.platform
            .emit_line(&format!("Count:{}", read.count.matches));

        VariantReport::new(
            kind,
            finished.write_timing(),
            read,
            finished.grid().live_cells(),
        )
    }

    /// Every variant starts from the same sequence when seeded.
    fn cell_source(&self) -> RandomCells {
        let fill_probability = self.config.fill_probability();

        match self.config.seed() {
            Some(seed) => RandomCells::seeded(seed, fill_probability),
            None => RandomCells::from_thread_rng(fill_probability),
        }
    }

    fn timer(&self, label: String) -> ScopedTimer {
        ScopedTimer::with_platform(label, self.platform.clone())
    }
}
