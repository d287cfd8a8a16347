//! Visualization of study results
//!
//! This module draws decay traces using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Figure configuration (`PlotConfig`, `SeriesStyle`)
//! - **pattern**: Dash patterns (`LinePattern`)
//! - **panels**: Before/after comparison figure
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use decay_rs::output::visualization::{plot_treatment_panels, PlotConfig};
//!
//! let result = study.run()?;
//!
//! // Default figure
//! plot_treatment_panels(&result, "bleach_decay.png", None)?;
//!
//! // Or with custom config
//! let config = PlotConfig::default().size(1600, 800);
//! plot_treatment_panels(&result, "bleach_decay.svg", Some(&config))?;
//! ```

pub mod config;
pub mod panels;
pub mod pattern;

pub use config::{PlotConfig, SeriesStyle};
pub use panels::plot_treatment_panels;
pub use pattern::LinePattern;
