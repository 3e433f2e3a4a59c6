//! Plot configuration shared across visualization modules

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_color`: Line color for single-profile plots
/// - `series_colors`: Optional colors for multi-profile plots (one per profile)
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust
/// use diffusion_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::profile("Final concentration profile");
/// config.line_color = BLUE;
/// config.width = 1920;
/// config.height = 1080;
/// assert_eq!(config.xlabel, "x");
/// ```
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Concentration profile")
    pub title: String,

    /// X-axis label (default: "x")
    pub xlabel: String,

    /// Y-axis label (default: "C")
    pub ylabel: String,

    /// Line color for single-profile plots (default: RED)
    pub line_color: RGBColor,

    /// Optional colors for multi-profile plots
    ///
    /// If None, uses the default palette
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Concentration profile".to_string(),
            xlabel: "x".to_string(),
            ylabel: "C".to_string(),
            line_color: RED,
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

const DEFAULT_PALETTE: [RGBColor; 8] = [
    BLUE,
    RED,
    GREEN,
    MAGENTA,
    CYAN,
    BLACK,
    RGBColor(255, 165, 0),  // Orange
    RGBColor(128, 0, 128),   // Purple
];

impl PlotConfig {
    /// Config for a single spatial profile, with an optional custom title
    ///
    /// # Examples
    ///
    /// ```rust
    /// use diffusion_rs::output::visualization::{PlotConfig, NO_TITLE};
    ///
    /// let config = PlotConfig::profile("Initial concentration profile");
    /// assert_eq!(config.title, "Initial concentration profile");
    ///
    /// let config = PlotConfig::profile(NO_TITLE);
    /// assert_eq!(config.title, "Concentration profile");
    /// ```
    pub fn profile(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        if let Some(title) = title.into_optional_title() {
            config.title = title;
        }
        config
    }

    /// Config for a profile evolution plot (several times on one chart)
    pub fn evolution(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Concentration profile evolution".to_string());
        config
    }

    /// Builder pattern: set line color
    pub fn line_color(mut self, color: RGBColor) -> Self {
        self.line_color = color;
        self
    }

    /// Builder pattern: set axis labels
    pub fn labels(mut self, xlabel: &str, ylabel: &str) -> Self {
        self.xlabel = xlabel.to_string();
        self.ylabel = ylabel.to_string();
        self
    }

    /// Builder pattern: set image size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Get color for the profile at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to the default palette
    pub(crate) fn series_color(&self, index: usize) -> RGBColor {
        if let Some(colors) = &self.series_colors
            && index < colors.len() {
                return colors[index];
            }

        DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert_eq!(config.xlabel, "x");
        assert_eq!(config.ylabel, "C");
        assert!(config.show_grid);
    }

    #[test]
    fn test_profile_config_with_string() {
        let config = PlotConfig::profile(format!("t = {}", 6.25));
        assert_eq!(config.title, "t = 6.25");
    }

    #[test]
    fn test_evolution_config_default() {
        let config = PlotConfig::evolution(NO_TITLE);
        assert_eq!(config.title, "Concentration profile evolution");
    }

    #[test]
    fn test_builders() {
        let config = PlotConfig::profile(NO_TITLE)
            .line_color(BLUE)
            .labels("x (m)", "T (K)")
            .size(640, 480);
        assert_eq!(config.line_color, BLUE);
        assert_eq!(config.ylabel, "T (K)");
        assert_eq!((config.width, config.height), (640, 480));
    }

    #[test]
    fn test_series_color_default_palette() {
        let config = PlotConfig::default();
        assert_eq!(config.series_color(0), BLUE);
        assert_eq!(config.series_color(1), RED);
        assert_eq!(config.series_color(8), BLUE); // Wraparound
    }

    #[test]
    fn test_series_color_custom() {
        use plotters::style::full_palette::{LIGHTGREEN, ORANGE};
        let mut config = PlotConfig::default();
        config.series_colors = Some(vec![ORANGE, LIGHTGREEN]);
        assert_eq!(config.series_color(0), ORANGE);
        assert_eq!(config.series_color(1), LIGHTGREEN);
        assert_eq!(config.series_color(2), GREEN);
    }
}
