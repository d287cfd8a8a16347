//! Output of study results
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── error.rs            ← PlotError
//! └── visualization/      ← Plots and graphics
//!     ├── mod.rs
//!     ├── config.rs
//!     ├── pattern.rs
//!     └── panels.rs
//! ```
//!
//! Figures are written to PNG or SVG, chosen by the file extension.

pub mod error;
pub mod visualization;

pub use error::PlotError;
pub use visualization::{plot_treatment_panels, LinePattern, PlotConfig, SeriesStyle};
