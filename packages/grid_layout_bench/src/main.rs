#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

//! Binary entry point for the grid layout benchmark.
//!
//! This module is excluded from mutation testing because testing process entry/exit behavior
//! is impractical - it requires spawning subprocesses and checking exit codes.

use std::num::NonZero;
use std::path::PathBuf;
use std::process::ExitCode;

use argh::FromArgs;
use grid_layout_bench::{BenchConfig, Error, GridBenchmarkRunner, GridKind, WriteOrder};

/// Compares memory layouts of 2D grids under a neighbor-counting workload.
#[derive(FromArgs)]
struct Args {
    /// path to a TOML file with benchmark settings, overridden by any flags given
    #[argh(option)]
    config: Option<PathBuf>,

    /// grid width in cells
    #[argh(option)]
    width: Option<usize>,

    /// grid height in cells
    #[argh(option)]
    height: Option<usize>,

    /// full passes per phase
    #[argh(option)]
    repetitions: Option<NonZero<u64>>,

    /// probability in [0, 1] that a written cell is alive
    #[argh(option)]
    fill_probability: Option<f64>,

    /// order of the write phase (row-major, column-major, storage)
    #[argh(option)]
    write_order: Option<WriteOrder>,

    /// seed for the random field; makes checksums comparable across variants
    #[argh(option)]
    seed: Option<u64>,

    /// grid variant to run (nested, view, manual, dense); repeat to run several
    #[argh(option)]
    variant: Vec<GridKind>,

    /// print the resolved configuration to stderr before running
    #[argh(switch)]
    verbose: bool,
}

// Binary entry point - mutations would require subprocess testing which is impractical.
#[cfg_attr(test, mutants::skip)]
fn main() -> ExitCode {
    let args: Args = argh::from_env();

    let runner = match resolve_config(args).and_then(GridBenchmarkRunner::new) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    runner.run();

    ExitCode::SUCCESS
}

/// Layers the command line over the configuration file over the defaults.
fn resolve_config(args: Args) -> Result<BenchConfig, Error> {
    let mut config = match &args.config {
        Some(path) => BenchConfig::from_toml_file(path)?,
        None => BenchConfig::default(),
    };

    let width = args.width.unwrap_or(config.width());
    let height = args.height.unwrap_or(config.height());
    config = config.with_dimensions(width, height);

    if let Some(repetitions) = args.repetitions {
        config = config.with_repetitions(repetitions);
    }

    if let Some(fill_probability) = args.fill_probability {
        config = config.with_fill_probability(fill_probability);
    }

    if let Some(write_order) = args.write_order {
        config = config.with_write_order(write_order);
    }

    if args.seed.is_some() {
        config = config.with_seed(args.seed);
    }

    if !args.variant.is_empty() {
        config = config.with_variants(args.variant);
    }

    if args.verbose {
        eprintln!("{config}");
    }

    Ok(config)
}
