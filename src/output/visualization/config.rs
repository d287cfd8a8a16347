//! Plot configuration for the treatment comparison figure

use plotters::prelude::*;

use super::pattern::LinePattern;
use crate::study::Treatment;

/// Colour and dash pattern of one series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    /// Line colour
    pub color: RGBColor,

    /// Dash pattern
    pub pattern: LinePattern,
}

impl SeriesStyle {
    /// Create a style
    pub fn new(color: RGBColor, pattern: LinePattern) -> Self {
        Self { color, pattern }
    }
}

/// Configuration for the two-panel figure
///
/// # Fields
///
/// - `width`, `height`: Dimensions of the whole figure in pixels
/// - `before_title`, `after_title`: Panel captions
/// - `xlabel`, `ylabel`: Axis labels, shared by both panels
/// - `series_styles`: Style of the n-th series of each panel
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
/// - `grid_opacity`: Opacity of the major grid lines
///
/// # Example
///
/// ```rust
/// use decay_rs::output::visualization::PlotConfig;
///
/// let config = PlotConfig::default().size(1600, 800).line_width(3);
/// assert_eq!(config.width, 1600);
/// ```
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Figure width in pixels (default: 1000)
    pub width: u32,

    /// Figure height in pixels (default: 500)
    pub height: u32,

    /// Caption of the left panel
    pub before_title: String,

    /// Caption of the right panel
    pub after_title: String,

    /// X-axis label (default: "Time (s)")
    pub xlabel: String,

    /// Y-axis label (default: "Concentration (mol/L)")
    pub ylabel: String,

    /// Style of series `i` in each panel; falls back to the default palette
    pub series_styles: Vec<SeriesStyle>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Caption font size
    pub caption_size: f64,

    /// Show grid lines (default: true)
    pub show_grid: bool,

    /// Opacity of major grid lines (default: 0.6)
    pub grid_opacity: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 500,
            before_title: Treatment::Before.title().to_string(),
            after_title: Treatment::After.title().to_string(),
            xlabel: "Time (s)".to_string(),
            ylabel: "Concentration (mol/L)".to_string(),
            series_styles: vec![
                SeriesStyle::new(BLUE, LinePattern::Solid),
                SeriesStyle::new(RED, LinePattern::Dashed),
                SeriesStyle::new(GREEN, LinePattern::DashDot),
            ],
            background: WHITE,
            line_width: 2,
            caption_size: 24.0,
            show_grid: true,
            grid_opacity: 0.6,
        }
    }
}

impl PlotConfig {
    /// Builder pattern: set figure size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder pattern: set line width
    pub fn line_width(mut self, line_width: u32) -> Self {
        self.line_width = line_width;
        self
    }

    /// Builder pattern: set series styles
    pub fn series_styles(mut self, styles: Vec<SeriesStyle>) -> Self {
        self.series_styles = styles;
        self
    }

    /// Caption for a treatment panel
    pub fn panel_title(&self, treatment: Treatment) -> &str {
        match treatment {
            Treatment::Before => &self.before_title,
            Treatment::After => &self.after_title,
        }
    }

    /// Style for the series at `index` within a panel
    ///
    /// Uses `series_styles` if long enough, otherwise a solid line from the
    /// default palette
    pub(crate) fn series_style(&self, index: usize) -> SeriesStyle {
        if let Some(style) = self.series_styles.get(index) {
            return *style;
        }

        let palette = [
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0),  // Orange
            RGBColor(128, 0, 128),  // Purple
            RGBColor(165, 42, 42),  // Brown
        ];

        SeriesStyle::new(palette[index % palette.len()], LinePattern::Solid)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
