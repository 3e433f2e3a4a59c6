//! CSV export of concentration profiles
//!
//! Writes C(x) columns to CSV (Comma-Separated Values), readable by
//! spreadsheets, pandas, MATLAB and most analysis tools.
//!
//! # Features
//!
//! - **Simple interface**: export from `&[f64]` slices
//! - **Metadata support**: optional `#` header with run parameters
//! - **Customizable**: delimiter, decimal separator, precision
//! - **Several profiles**: one column per snapshot
//! - **Validation**: rejects NaN, empty data and mismatched lengths
//!
//! # Quick Example
//!
//! ```rust,no_run
//! use diffusion_rs::output::export::export_profile_csv;
//!
//! let x = vec![0.0, 0.5, 1.0, 1.5];
//! let c = vec![500.0, 375.0, 125.0, 0.0];
//!
//! export_profile_csv(&x, &c, "profile.csv", None).unwrap();
//! ```
//!
//! **Output** (`profile.csv`):
//! ```text
//! x,C
//! 0.000000,500.000000
//! 0.500000,375.000000
//! 1.000000,125.000000
//! 1.500000,0.000000
//! ```
//!
//! With metadata the data is preceded by:
//! ```text
//! # Diffusion Simulation Data
//! # Generated: 2026-10-16T09:30:00+00:00
//! # Model: Linear diffusion 1D
//! # Diffusivity: 100
//! # ...
//! #
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{DiffusionError, DiffusionResult};
use crate::output::{ProfileSink, ProfileSnapshot};
use crate::physics::PhysicalQuantity;
use crate::solver::SimulationResult;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use diffusion_rs::output::export::CsvConfig;
///
/// let config = CsvConfig::european().precision(10);
/// assert_eq!(config.delimiter, ';');
/// assert_eq!(config.decimal_separator, ',');
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Header of the coordinate column (default: "x")
    pub position_header: String,

    /// Header of the value column for single-profile exports (default: "C")
    pub value_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            position_header: "x".to_string(),
            value_header: "C".to_string(),
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// High precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: set column headers
    pub fn headers(mut self, position: &str, value: &str) -> Self {
        self.position_header = position.to_string();
        self.value_header = value.to_string();
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }

    /// Delimiter and decimal separator must differ
    pub fn validate(&self) -> DiffusionResult<()> {
        if self.delimiter == self.decimal_separator {
            return Err(DiffusionError::InvalidConfiguration(format!(
                "CSV delimiter and decimal separator are both '{}'",
                self.delimiter
            )));
        }
        Ok(())
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only non-None fields are written.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    /// Model name (e.g., "Linear diffusion 1D")
    pub model_name: Option<String>,

    /// Solver name (e.g., "Explicit FTCS")
    pub solver_name: Option<String>,

    /// Diffusivity D
    pub diffusivity: Option<f64>,

    /// Grid spacing dx
    pub grid_spacing: Option<f64>,

    /// Time step dt
    pub time_step: Option<f64>,

    /// Number of time steps
    pub time_steps: Option<usize>,

    /// Left boundary value
    pub boundary_left: Option<f64>,

    /// Right boundary value
    pub boundary_right: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Create metadata from the main run parameters
    pub fn from_simulation(model: &str, solver: &str, time_step: f64, time_steps: usize) -> Self {
        Self {
            model_name: Some(model.to_string()),
            solver_name: Some(solver.to_string()),
            time_step: Some(time_step),
            time_steps: Some(time_steps),
            ..Default::default()
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header(out: &mut impl Write, metadata: &CsvMetadata) -> std::io::Result<()> {
    writeln!(out, "# Diffusion Simulation Data")?;

    let now = chrono::Utc::now();
    writeln!(out, "# Generated: {}", now.to_rfc3339())?;

    if let Some(model) = &metadata.model_name {
        writeln!(out, "# Model: {}", model)?;
    }
    if let Some(solver) = &metadata.solver_name {
        writeln!(out, "# Solver: {}", solver)?;
    }

    if let Some(d) = metadata.diffusivity {
        writeln!(out, "# Diffusivity: {}", d)?;
    }
    if let Some(dx) = metadata.grid_spacing {
        writeln!(out, "# Grid Spacing: {}", dx)?;
    }
    if let Some(dt) = metadata.time_step {
        writeln!(out, "# Time Step: {}", dt)?;
    }
    if let Some(nt) = metadata.time_steps {
        writeln!(out, "# Time Steps: {}", nt)?;
    }
    if let Some(left) = metadata.boundary_left {
        writeln!(out, "# Boundary Left: {}", left)?;
    }
    if let Some(right) = metadata.boundary_right {
        writeln!(out, "# Boundary Right: {}", right)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

fn check_column(name: &str, values: &[f64], expected: usize) -> DiffusionResult<()> {
    if values.len() != expected {
        return Err(DiffusionError::LengthMismatch {
            expected,
            found: values.len(),
        });
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(DiffusionError::Output(format!(
            "invalid data: NaN or Inf detected in column {}",
            name
        )));
    }
    Ok(())
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export one profile to a two-column CSV file
///
/// # Errors
///
/// - Empty data, NaN or Inf values: [`DiffusionError::Output`]
/// - Mismatched lengths: [`DiffusionError::LengthMismatch`]
/// - File creation or write errors: [`DiffusionError::Io`]
pub fn export_profile_csv(
    x: &[f64],
    values: &[f64],
    output_path: impl AsRef<Path>,
    configuration: Option<&CsvConfig>,
) -> DiffusionResult<()> {
    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let header = configuration.value_header.clone();
    export_profiles_csv(x, &[(header.as_str(), values)], output_path, Some(configuration))
}

/// Export several profiles sharing the same coordinates
///
/// The file holds the coordinate column followed by one column per profile,
/// headed by its label.
pub fn export_profiles_csv(
    x: &[f64],
    columns: &[(&str, &[f64])],
    output_path: impl AsRef<Path>,
    configuration: Option<&CsvConfig>,
) -> DiffusionResult<()> {

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);
    configuration.validate()?;

    // ============================= Validation =============================

    if x.is_empty() || columns.is_empty() {
        return Err(DiffusionError::Output(
            "empty data: coordinates and profiles must not be empty".to_string(),
        ));
    }

    check_column(&configuration.position_header, x, x.len())?;
    for (name, values) in columns {
        check_column(name, values, x.len())?;
    }

    // ============================= Open File ==============================

    let mut out = BufWriter::new(File::create(output_path.as_ref())?);

    // ============================= Write Metadata =========================

    if configuration.include_metadata
        && let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut out, metadata)?;
        }

    // ============================= Write Header ===========================

    write!(out, "{}", configuration.position_header)?;
    for (name, _) in columns {
        write!(out, "{}{}", configuration.delimiter, name)?;
    }
    writeln!(out)?;

    // ============================= Write Data =============================

    for (i, xi) in x.iter().enumerate() {
        write!(out, "{}", format_number(*xi, configuration))?;
        for (_, values) in columns {
            write!(out, "{}{}", configuration.delimiter, format_number(values[i], configuration))?;
        }
        writeln!(out)?;
    }

    out.flush()?;

    Ok(())
}

/// Export every recorded snapshot of a run, one column per time
///
/// Column headers read `t=<time>`.
pub fn export_trajectory_csv(
    result: &SimulationResult,
    x: &[f64],
    quantity: PhysicalQuantity,
    output_path: impl AsRef<Path>,
    configuration: Option<&CsvConfig>,
) -> DiffusionResult<()> {
    let mut labels = Vec::with_capacity(result.len());
    let mut profiles = Vec::with_capacity(result.len());
    for (time, state) in result.snapshots() {
        labels.push(format!("t={}", time));
        profiles.push(state.vector(quantity)?.as_slice());
    }

    let columns: Vec<(&str, &[f64])> = labels
        .iter()
        .map(String::as_str)
        .zip(profiles)
        .collect();

    export_profiles_csv(x, &columns, output_path, configuration)
}

// =============================================================================
// Sink
// =============================================================================

/// Writes every snapshot into `<directory>/<title stem>.csv`
#[derive(Debug, Clone)]
pub struct CsvSink {
    directory: PathBuf,
    config: CsvConfig,
    written: Vec<PathBuf>,
}

impl CsvSink {
    /// Sink with the default CSV configuration
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            config: CsvConfig::default(),
            written: Vec::new(),
        }
    }

    /// Builder pattern: CSV configuration
    pub fn with_config(mut self, config: CsvConfig) -> Self {
        self.config = config;
        self
    }

    /// Files written so far, in order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ProfileSink for CsvSink {
    fn receive(&mut self, snapshot: &ProfileSnapshot<'_>) -> DiffusionResult<()> {
        let path = self.directory.join(format!("{}.csv", snapshot.file_stem()));

        let mut config = self.config.clone().headers(snapshot.xlabel, snapshot.ylabel);
        if let Some(metadata) = config.metadata.as_mut() {
            metadata.add_custom("Title".to_string(), snapshot.title.to_string());
            metadata.add_custom("Time".to_string(), snapshot.time.to_string());
        }

        export_profile_csv(snapshot.x, snapshot.values, &path, Some(&config))?;

        debug!("wrote csv {}", path.display());
        self.written.push(path);

        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
