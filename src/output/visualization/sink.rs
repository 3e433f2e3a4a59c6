//! Plot sink: one image file per received snapshot

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{DiffusionError, DiffusionResult};
use crate::output::{ProfileSink, ProfileSnapshot};
use super::config::PlotConfig;
use super::profile::plot_profile;

/// Image format written by [`PlotSink`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    /// File extension
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// Draws every snapshot into `<directory>/<title stem>.<ext>`
///
/// # Example
///
/// ```rust,no_run
/// use diffusion_rs::driver::{run_simulation_with, SimulationConfig};
/// use diffusion_rs::output::visualization::PlotSink;
///
/// let mut sink = PlotSink::new(std::env::temp_dir());
/// run_simulation_with(&SimulationConfig::default(), &mut sink).unwrap();
/// for path in sink.written() {
///     println!("{}", path.display());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PlotSink {
    directory: PathBuf,
    format: ImageFormat,
    base: PlotConfig,
    written: Vec<PathBuf>,
}

impl PlotSink {
    /// PNG sink writing into `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            format: ImageFormat::default(),
            base: PlotConfig::default(),
            written: Vec::new(),
        }
    }

    /// Builder pattern: select the image format
    pub fn format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    /// Builder pattern: size, background and grid come from `config`
    ///
    /// Title, labels and line color are taken from each snapshot.
    pub fn with_config(mut self, config: PlotConfig) -> Self {
        self.base = config;
        self
    }

    /// Output directory
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Files written so far, in order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ProfileSink for PlotSink {
    fn receive(&mut self, snapshot: &ProfileSnapshot<'_>) -> DiffusionResult<()> {
        let path = self
            .directory
            .join(format!("{}.{}", snapshot.file_stem(), self.format.extension()));

        let config = PlotConfig {
            title: snapshot.title.to_string(),
            xlabel: snapshot.xlabel.to_string(),
            ylabel: snapshot.ylabel.to_string(),
            line_color: snapshot.color,
            ..self.base.clone()
        };

        let path_str = path
            .to_str()
            .ok_or_else(|| DiffusionError::Output(format!("non UTF-8 path {}", path.display())))?;

        plot_profile(snapshot.x, snapshot.values, path_str, Some(&config)).map_err(DiffusionError::output)?;

        debug!("wrote plot {}", path.display());
        self.written.push(path);

        Ok(())
    }
}
