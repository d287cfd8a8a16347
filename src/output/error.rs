//! Errors raised while rendering figures

use thiserror::Error;

/// Failure to render a figure
#[derive(Debug, Error)]
pub enum PlotError {
    /// A panel has no series, or only empty ones
    #[error("panel '{0}' has no data to draw")]
    EmptyPanel(String),

    /// Time and concentration sequences are not paired
    #[error("series '{label}' has {times} time points but {concentrations} concentrations")]
    LengthMismatch {
        label: String,
        times: usize,
        concentrations: usize,
    },

    /// Overflowed or undefined values, typically from an unstable step
    #[error("series '{0}' contains NaN or infinite concentrations")]
    NonFinite(String),

    /// The plotters backend could not draw or write the file
    #[error("drawing backend failed: {0}")]
    Backend(String),
}
