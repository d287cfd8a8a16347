//! Dash patterns for line series
//!
//! Patterns are drawn by splitting the polyline into "on" runs and skipping
//! the "off" runs, so they do not depend on dashed-series support in the
//! plotting backend. Run lengths are counted in samples and scale with the
//! length of the series.

/// Number of dash units along a full series
const UNITS_PER_SERIES: usize = 200;

/// Line pattern of one series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePattern {
    /// Continuous line
    Solid,

    /// Long dashes
    Dashed,

    /// Dash, gap, dot, gap
    DashDot,
}

impl LinePattern {
    /// Alternating on/off run lengths, in units
    fn runs(self) -> &'static [usize] {
        match self {
            LinePattern::Solid => &[],
            LinePattern::Dashed => &[6, 3],
            LinePattern::DashDot => &[6, 2, 1, 2],
        }
    }

    /// Split a polyline into the visible segments of this pattern
    ///
    /// Consecutive segments share no points; each has at least two points
    /// unless the input has fewer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use decay_rs::output::visualization::LinePattern;
    ///
    /// let points: Vec<usize> = (0..10).collect();
    /// assert_eq!(LinePattern::Solid.split(&points), vec![points.clone()]);
    /// assert_eq!(LinePattern::Dashed.split(&points), vec![vec![0, 1, 2, 3, 4, 5, 6]]);
    /// ```
    pub fn split<T: Copy>(self, points: &[T]) -> Vec<Vec<T>> {
        let runs = self.runs();

        if points.is_empty() {
            return Vec::new();
        }
        if runs.is_empty() || points.len() < 2 {
            return vec![points.to_vec()];
        }

        let unit = (points.len() / UNITS_PER_SERIES).max(1);
        let last = points.len() - 1;

        let mut segments = Vec::new();
        let mut start = 0;
        let mut phase = 0;

        while start < last {
            let end = (start + runs[phase % runs.len()] * unit).min(last);
            if phase % 2 == 0 {
                segments.push(points[start..=end].to_vec());
            }
            start = end;
            phase += 1;
        }

        segments
    }
}
