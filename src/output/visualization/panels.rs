//! Side-by-side decay panels, one per treatment
//!
//! The left panel shows the compounds before bleaching, the right panel
//! their residues after bleaching. Each series is drawn with the style at
//! its position in the panel (blue solid, red dashed, green dash-dot by
//! default), with a legend and grid.
//!
//! # Usage
//!
//! ```rust,ignore
//! use decay_rs::output::visualization::plot_treatment_panels;
//! use decay_rs::study::{Study, StudyConfig};
//!
//! let result = Study::new(StudyConfig::default()).run()?;
//! plot_treatment_panels(&result, "bleach_decay.png", None)?;
//! ```

use std::error::Error;
use std::ops::Range;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::config::PlotConfig;
use crate::output::PlotError;
use crate::study::{DecaySeries, StudyResult, Treatment};

type Panel<'a> = (Treatment, Vec<&'a DecaySeries>);

// =================================================================================================
// Public API
// =================================================================================================

/// Render the before/after comparison figure
///
/// # Arguments
///
/// * `result`      - Study result with series of both treatments
/// * `output_path` - Output file path (`.svg` → vector, anything else → PNG)
/// * `config`      - Optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// - [`PlotError::EmptyPanel`] when a treatment has nothing to draw
/// - [`PlotError::LengthMismatch`] when a series is not positionally paired
/// - [`PlotError::NonFinite`] when a trace overflowed
/// - [`PlotError::Backend`] when the backend cannot draw or write the file
pub fn plot_treatment_panels(
    result: &StudyResult,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), PlotError> {
    let default_config = PlotConfig::default();
    let config = config.unwrap_or(&default_config);

    let panels: Vec<Panel<'_>> = Treatment::ALL
        .iter()
        .map(|&treatment| (treatment, result.panel(treatment)))
        .collect();

    for (treatment, series) in &panels {
        check_panel(config.panel_title(*treatment), series)?;
    }

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    let drawn = match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            draw_panels(backend, &panels, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            draw_panels(backend, &panels, config)
        }
    };

    drawn.map_err(|e| PlotError::Backend(e.to_string()))?;

    log::info!("figure written to {}", output_path);
    Ok(())
}

// =================================================================================================
// Helpers
// =================================================================================================

fn check_panel(title: &str, series: &[&DecaySeries]) -> Result<(), PlotError> {
    if series.iter().all(|s| s.is_empty()) {
        return Err(PlotError::EmptyPanel(title.to_string()));
    }

    for s in series {
        if s.time_points.len() != s.concentrations.len() {
            return Err(PlotError::LengthMismatch {
                label: s.label.clone(),
                times: s.time_points.len(),
                concentrations: s.concentrations.len(),
            });
        }

        if s.concentrations.iter().any(|c| !c.is_finite()) {
            return Err(PlotError::NonFinite(s.label.clone()));
        }
    }

    Ok(())
}

/// Axis ranges covering every series of a panel
///
/// The y axis always includes 0 and the initial concentration, with 5 %
/// headroom above.
fn axis_ranges(series: &[&DecaySeries]) -> (Range<f64>, Range<f64>) {
    let max_time = series
        .iter()
        .map(|s| s.final_time())
        .fold(0.0_f64, f64::max);
    let max_time = if max_time > 0.0 { max_time } else { 1.0 };

    let (mut low, mut high) = (0.0_f64, f64::NEG_INFINITY);
    for s in series {
        high = high.max(s.initial_concentration);
        for &c in &s.concentrations {
            low = low.min(c);
            high = high.max(c);
        }
    }

    let span = (high - low).max(1e-10);
    let bottom = if low < 0.0 { low - 0.05 * span } else { 0.0 };

    (0.0..max_time, bottom..(high + 0.05 * span))
}

// =================================================================================================
// Private Plot Implementations
// =================================================================================================

fn draw_panels<DB: DrawingBackend>(
    backend: DB,
    panels: &[Panel<'_>],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let areas = root.split_evenly((1, panels.len()));

    for (area, (treatment, series)) in areas.iter().zip(panels) {
        draw_panel(area, config.panel_title(*treatment), series, config)?;
    }

    root.present()?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    series: &[&DecaySeries],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let (x_range, y_range) = axis_ranges(series);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", config.caption_size).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel).y_desc(&config.ylabel);

    if config.show_grid {
        mesh.bold_line_style(BLACK.mix(config.grid_opacity * 0.5))
            .light_line_style(BLACK.mix(config.grid_opacity * 0.15))
            .draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    for (index, s) in series.iter().enumerate() {
        let style = config.series_style(index);
        let shape = style.color.stroke_width(config.line_width);

        let points: Vec<(f64, f64)> = s
            .time_points
            .iter()
            .copied()
            .zip(s.concentrations.iter().copied())
            .collect();

        chart
            .draw_series(
                style
                    .pattern
                    .split(&points)
                    .into_iter()
                    .map(move |segment| PathElement::new(segment, shape)),
            )?
            .label(s.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], shape));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(config.background.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study::{CompoundRun, Study, StudyConfig};

    fn series(label: &str, times: Vec<f64>, concentrations: Vec<f64>) -> DecaySeries {
        DecaySeries {
            label: label.to_string(),
            treatment: Treatment::Before,
            rate_constant: 0.05,
            initial_concentration: 1.0,
            time_points: times,
            concentrations,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Unit tests - validation and ranges
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_check_panel_accepts_paired_series() {
        let s = series("a", vec![0.0, 0.1], vec![0.9, 0.8]);
        assert!(check_panel("p", &[&s]).is_ok());
    }

    #[test]
    fn test_check_panel_rejects_mismatch() {
        let s = series("a", vec![0.0, 0.1], vec![0.9]);
        let err = check_panel("p", &[&s]).unwrap_err();

        assert!(matches!(err, PlotError::LengthMismatch { times: 2, concentrations: 1, .. }));
    }

    #[test]
    fn test_check_panel_rejects_non_finite() {
        let s = series("a", vec![0.0, 0.1], vec![0.9, f64::INFINITY]);
        assert!(matches!(check_panel("p", &[&s]), Err(PlotError::NonFinite(_))));
    }

    #[test]
    fn test_check_panel_rejects_empty() {
        let s = series("a", vec![], vec![]);
        assert!(matches!(check_panel("p", &[&s]), Err(PlotError::EmptyPanel(_))));
        assert!(matches!(check_panel("p", &[]), Err(PlotError::EmptyPanel(_))));
    }

    #[test]
    fn test_axis_ranges_include_initial_concentration() {
        let s = series("a", vec![0.0, 50.0, 99.9], vec![0.9, 0.5, 0.1]);
        let (x, y) = axis_ranges(&[&s]);

        assert_eq!(x, 0.0..99.9);
        assert_eq!(y.start, 0.0);
        assert!(y.end > 1.0);
    }

    #[test]
    fn test_axis_ranges_extend_below_zero() {
        let s = series("a", vec![0.0, 0.1], vec![-1.5, 2.25]);
        let (_, y) = axis_ranges(&[&s]);

        assert!(y.start < -1.5);
        assert!(y.end > 2.25);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Integration tests - file output
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_plot_treatment_panels_png() {
        let result = Study::new(StudyConfig::default()).run().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panels.png");

        plot_treatment_panels(&result, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_treatment_panels_svg() {
        let result = Study::new(StudyConfig::default()).run().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panels.svg");

        plot_treatment_panels(&result, path.to_str().unwrap(), None).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
    }

    #[test]
    fn test_plot_missing_treatment_fails() {
        let config = StudyConfig {
            runs: vec![CompoundRun::new("H₂O₂", Treatment::Before, 0.05)],
            ..StudyConfig::default()
        };
        let result = Study::new(config).run().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("half.png");

        let err = plot_treatment_panels(&result, path.to_str().unwrap(), None).unwrap_err();
        assert!(matches!(err, PlotError::EmptyPanel(_)));
        assert!(!path.exists());
    }
}
