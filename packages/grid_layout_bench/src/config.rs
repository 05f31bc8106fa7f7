//! What a benchmark run measures and how.

use std::fmt;
use std::fs;
use std::num::NonZero;
use std::path::Path;

use itertools::Itertools;
use toml::Value;

use crate::error::{Error, Result};
use crate::{GridKind, WriteOrder};

const DEFAULT_WIDTH: usize = 500;
const DEFAULT_HEIGHT: usize = 500;
const DEFAULT_REPETITIONS: NonZero<u64> = NonZero::new(2000).expect("2000 is non-zero");
const DEFAULT_FILL_PROBABILITY: f64 = 0.5;

/// Settings for one benchmark run.
///
/// Start from [`Default`], which benchmarks every grid variant on a 500 × 500 grid with
/// 2000 repetitions per phase, and adjust with the `with_*` methods or by layering a
/// TOML document on top with [`apply_toml_str()`](Self::apply_toml_str).
///
/// The builder methods accept any value. Call [`validate()`](Self::validate) (the
/// runner does this for you) to reject settings the benchmark cannot work with.
///
/// # Examples
///
/// ```
/// use std::num::NonZero;
///
/// use grid_layout_bench::{BenchConfig, GridKind};
///
/// let config = BenchConfig::default()
///     .with_dimensions(64, 48)
///     .with_repetitions(NonZero::new(10).unwrap())
///     .with_variants(vec![GridKind::Nested, GridKind::Dense])
///     .with_seed(Some(42));
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.width(), 64);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BenchConfig {
    width: usize,
    height: usize,
    repetitions: NonZero<u64>,
    fill_probability: f64,
    write_order: WriteOrder,
    seed: Option<u64>,
    variants: Vec<GridKind>,
}

impl BenchConfig {
    /// Sets the grid width (columns) and height (rows).
    #[must_use]
    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets how many full passes each phase makes over the grid.
    #[must_use]
    pub fn with_repetitions(mut self, repetitions: NonZero<u64>) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Sets the probability that the write phase stores a live cell.
    #[must_use]
    pub fn with_fill_probability(mut self, fill_probability: f64) -> Self {
        self.fill_probability = fill_probability;
        self
    }

    /// Sets the order in which the write phase visits cells.
    #[must_use]
    pub fn with_write_order(mut self, write_order: WriteOrder) -> Self {
        self.write_order = write_order;
        self
    }

    /// Seeds the random field.
    ///
    /// With a seed, every variant is written from the same random sequence and their
    /// checksums can be compared. Without one, each variant draws from fresh entropy.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets which grid variants run, and in which order.
    #[must_use]
    pub fn with_variants(mut self, variants: Vec<GridKind>) -> Self {
        self.variants = variants;
        self
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Full passes per phase.
    #[must_use]
    pub fn repetitions(&self) -> NonZero<u64> {
        self.repetitions
    }

    /// Probability that a written cell is alive.
    #[must_use]
    pub fn fill_probability(&self) -> f64 {
        self.fill_probability
    }

    /// Order of the write phase.
    #[must_use]
    pub fn write_order(&self) -> WriteOrder {
        self.write_order
    }

    /// Seed for the random field, if the run is reproducible.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Grid variants to benchmark, in run order.
    #[must_use]
    pub fn variants(&self) -> &[GridKind] {
        &self.variants
    }

    /// Checks that the benchmark can run with these settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if either dimension is zero, the cell count
    /// overflows `usize`, the fill probability is not a number in `[0, 1]` or no variant
    /// is selected.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::invalid_config("width", "must be at least 1"));
        }

        if self.height == 0 {
            return Err(Error::invalid_config("height", "must be at least 1"));
        }

        if self.width.checked_mul(self.height).is_none() {
            return Err(Error::invalid_config(
                "width",
                format!(
                    "multiplied by height {} exceeds the addressable cell count",
                    self.height
                ),
            ));
        }

        if !(0.0..=1.0).contains(&self.fill_probability) {
            return Err(Error::invalid_config(
                "fill_probability",
                format!("must be within [0, 1], got {}", self.fill_probability),
            ));
        }

        if self.variants.is_empty() {
            return Err(Error::invalid_config(
                "variants",
                "must name at least one grid variant",
            ));
        }

        Ok(())
    }

    /// Reads a TOML file and applies it on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigRead`] if the file cannot be read, and anything
    /// [`apply_toml_str()`](Self::apply_toml_str) returns for its contents.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::default().apply_toml_str(&contents, &path.display().to_string())
    }

    /// Overrides every setting present in a TOML document.
    ///
    /// Recognized keys are `width`, `height`, `repetitions`, `fill_probability`,
    /// `write_order`, `seed` and `variants`. Keys absent from the document keep their
    /// current value. `origin` names the document in error messages.
    ///
    /// The result is not validated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] if the text is not TOML, [`Error::UnknownVariant`]
    /// for an unrecognized variant name and [`Error::InvalidConfig`] for unknown keys or
    /// values of the wrong type.
    pub fn apply_toml_str(mut self, text: &str, origin: &str) -> Result<Self> {
        let value: Value = toml::from_str(text).map_err(|source| Error::ConfigParse {
            origin: origin.to_string(),
            source,
        })?;

        let Value::Table(table) = value else {
            return Err(Error::invalid_config(
                origin,
                "must be a table of settings at the top level",
            ));
        };

        for (key, item) in &table {
            match key.as_str() {
                "width" => self.width = usize_setting(key, item)?,
                "height" => self.height = usize_setting(key, item)?,
                "repetitions" => {
                    self.repetitions = NonZero::new(u64_setting(key, item)?)
                        .ok_or_else(|| Error::invalid_config(key, "must be at least 1"))?;
                }
                "fill_probability" => self.fill_probability = probability_setting(key, item)?,
                "write_order" => self.write_order = str_setting(key, item)?.parse()?,
                "seed" => self.seed = Some(u64_setting(key, item)?),
                "variants" => self.variants = variants_setting(key, item)?,
                _ => return Err(Error::invalid_config(key, "is not a recognized setting")),
            }
        }

        Ok(self)
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            repetitions: DEFAULT_REPETITIONS,
            fill_probability: DEFAULT_FILL_PROBABILITY,
            write_order: WriteOrder::default(),
            seed: None,
            variants: GridKind::ALL.to_vec(),
        }
    }
}

impl fmt::Display for BenchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid: {}x{} cells", self.width, self.height)?;
        writeln!(f, "Repetitions: {}", self.repetitions)?;
        writeln!(f, "Fill probability: {}", self.fill_probability)?;
        writeln!(f, "Write order: {}", self.write_order)?;

        match self.seed {
            Some(seed) => writeln!(f, "Seed: {seed}")?,
            None => writeln!(f, "Seed: none")?,
        }

        write!(
            f,
            "Variants: {}",
            self.variants.iter().map(|kind| kind.name()).join(", ")
        )
    }
}

fn u64_setting(key: &str, item: &Value) -> Result<u64> {
    item.as_integer()
        .and_then(|value| u64::try_from(value).ok())
        .ok_or_else(|| Error::invalid_config(key, "must be a non-negative integer"))
}

fn usize_setting(key: &str, item: &Value) -> Result<usize> {
    usize::try_from(u64_setting(key, item)?)
        .map_err(|_| Error::invalid_config(key, "does not fit in the address space"))
}

fn probability_setting(key: &str, item: &Value) -> Result<f64> {
    match item {
        Value::Float(value) => Ok(*value),
        Value::Integer(0) => Ok(0.0),
        Value::Integer(1) => Ok(1.0),
        _ => Err(Error::invalid_config(
            key,
            "must be a number between 0 and 1",
        )),
    }
}

fn str_setting<'a>(key: &str, item: &'a Value) -> Result<&'a str> {
    item.as_str()
        .ok_or_else(|| Error::invalid_config(key, "must be a string"))
}

fn variants_setting(key: &str, item: &Value) -> Result<Vec<GridKind>> {
    let names = item
        .as_array()
        .ok_or_else(|| Error::invalid_config(key, "must be an array of variant names"))?;

    names
        .iter()
        .map(|name| -> Result<GridKind> { str_setting(key, name)?.parse() })
        .collect()
}
