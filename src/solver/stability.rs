//! Step-size classification for explicit time integration
//!
//! For the linear test equation `dy/dt = λy`, one forward Euler step
//! multiplies the state by the amplification factor `r = 1 + λ·dt`.
//! The sign and magnitude of `r` decide what the trace looks like.

use std::fmt;

use log::{debug, warn};

use crate::solver::Scenario;

/// Qualitative behaviour of forward Euler for one eigenvalue and step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepRegime {
    /// `0 <= r < 1`: monotone decay, never changes sign
    Monotone,

    /// `-1 <= r < 0`: sign alternates, magnitude does not grow
    Oscillating,

    /// `r < -1`: sign alternates and magnitude grows without bound
    Divergent,

    /// `r >= 1`: constant or growing (λ >= 0)
    NonDecaying,
}

impl StepRegime {
    /// Classify eigenvalue `λ` integrated with step `dt`
    ///
    /// # Example
    ///
    /// ```rust
    /// use decay_rs::solver::StepRegime;
    ///
    /// // k = 0.05, dt = 0.1
    /// assert_eq!(StepRegime::classify(-0.05, 0.1), StepRegime::Monotone);
    /// // k = 25, dt = 0.1 → k·dt = 2.5
    /// assert_eq!(StepRegime::classify(-25.0, 0.1), StepRegime::Divergent);
    /// ```
    pub fn classify(eigenvalue: f64, dt: f64) -> Self {
        let amplification = Self::amplification(eigenvalue, dt);

        if amplification >= 1.0 {
            StepRegime::NonDecaying
        } else if amplification >= 0.0 {
            StepRegime::Monotone
        } else if amplification >= -1.0 {
            StepRegime::Oscillating
        } else {
            // also reached for NaN
            StepRegime::Divergent
        }
    }

    /// Amplification factor `1 + λ·dt`
    pub fn amplification(eigenvalue: f64, dt: f64) -> f64 {
        1.0 + eigenvalue * dt
    }

    /// True when the magnitude of the trace cannot grow
    pub fn is_bounded(self) -> bool {
        matches!(self, StepRegime::Monotone | StepRegime::Oscillating)
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            StepRegime::Monotone => "monotone",
            StepRegime::Oscillating => "oscillating",
            StepRegime::Divergent => "divergent",
            StepRegime::NonDecaying => "non-decaying",
        }
    }
}

impl fmt::Display for StepRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Log the regime of every species of a scenario
///
/// Instability is reported, never rejected: the trajectory is still computed.
pub(crate) fn report_step_regimes(scenario: &Scenario, dt: f64) {
    let Some(eigenvalues) = scenario.model.eigenvalues() else {
        return;
    };

    for (species, &eigenvalue) in eigenvalues.iter().enumerate() {
        match StepRegime::classify(eigenvalue, dt) {
            regime @ (StepRegime::Oscillating | StepRegime::Divergent) => warn!(
                "{}: species {} is {} with dt = {} (amplification {:.3}); reduce the time step",
                scenario.get_model_name(),
                species,
                regime,
                dt,
                StepRegime::amplification(eigenvalue, dt)
            ),
            regime => debug!(
                "{}: species {} is {} with dt = {}",
                scenario.get_model_name(),
                species,
                regime,
                dt
            ),
        }
    }
}
