//! First-order decay of dissolved compounds
//!
//! # Model Equations
//!
//! Each compound `i` degrades independently with its own rate constant:
//!
//! ```text
//! dC_i/dt = -k_i · C_i
//! ```
//!
//! with the analytical solution `C_i(t) = C₀ · exp(-k_i · t)` and half-life
//! `ln 2 / k_i`.
//!
//! All compounds of one [`FirstOrderDecay`] start from the same initial
//! concentration `C₀` (mol/L). Rate constants are in 1/s and are not
//! checked: `k <= 0` simply gives a constant or growing trace.

use nalgebra::DVector;

use crate::physics::{PhysicalModel, PhysicalState};
use crate::solver::{EulerSolver, Scenario, Solver, SolverConfiguration};

// =================================================================================================
// Compound
// =================================================================================================

/// A labelled compound with its decay rate constant
#[derive(Debug, Clone, PartialEq)]
pub struct Compound {
    label: String,
    rate_constant: f64,
}

impl Compound {
    /// Create a compound
    ///
    /// # Example
    ///
    /// ```rust
    /// use decay_rs::models::Compound;
    ///
    /// let h2o2 = Compound::new("H₂O₂", 0.05);
    /// assert_eq!(h2o2.rate_constant(), 0.05);
    /// ```
    pub fn new(label: impl Into<String>, rate_constant: f64) -> Self {
        Self {
            label: label.into(),
            rate_constant,
        }
    }

    /// Display label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Rate constant `k` (1/s)
    pub fn rate_constant(&self) -> f64 {
        self.rate_constant
    }

    /// Time for the concentration to halve, `ln 2 / k`
    ///
    /// Infinite for `k <= 0`.
    pub fn half_life(&self) -> f64 {
        if self.rate_constant > 0.0 {
            std::f64::consts::LN_2 / self.rate_constant
        } else {
            f64::INFINITY
        }
    }

    /// Exact concentration at time `t` starting from `initial`
    pub fn analytical(&self, initial: f64, t: f64) -> f64 {
        initial * (-self.rate_constant * t).exp()
    }
}

// =================================================================================================
// First-order decay model
// =================================================================================================

/// Independent first-order decay of several compounds
///
/// Species index `i` in every [`PhysicalState`] is compound `i`.
#[derive(Debug, Clone)]
pub struct FirstOrderDecay {
    compounds: Vec<Compound>,
    rates: DVector<f64>,
    initial_concentration: f64,
}

impl FirstOrderDecay {
    /// Create the model
    pub fn new(compounds: Vec<Compound>, initial_concentration: f64) -> Self {
        let rates = DVector::from_iterator(
            compounds.len(),
            compounds.iter().map(Compound::rate_constant),
        );

        Self {
            compounds,
            rates,
            initial_concentration,
        }
    }

    /// Compounds in species order
    pub fn compounds(&self) -> &[Compound] {
        &self.compounds
    }

    /// Shared initial concentration `C₀` (mol/L)
    pub fn initial_concentration(&self) -> f64 {
        self.initial_concentration
    }
}

impl PhysicalModel for FirstOrderDecay {
    fn species(&self) -> usize {
        self.compounds.len()
    }

    fn compute_physics(&self, state: &PhysicalState) -> PhysicalState {
        // dC/dt = -k * C, element by element
        let derivative = self
            .rates
            .iter()
            .zip(state.concentrations().iter())
            .map(|(k, c)| -k * c);

        PhysicalState::new(DVector::from_iterator(self.rates.len(), derivative))
    }

    fn setup_initial_state(&self) -> PhysicalState {
        PhysicalState::uniform(self.compounds.len(), self.initial_concentration)
    }

    fn name(&self) -> &str {
        "First-Order Decay"
    }

    fn description(&self) -> Option<&str> {
        Some(
            "Independent first-order decay dC/dt = -k*C of each compound \
             from a shared initial concentration.",
        )
    }

    fn eigenvalues(&self) -> Option<DVector<f64>> {
        Some(-self.rates.clone())
    }
}

// =================================================================================================
// Single-compound entry point
// =================================================================================================

/// Integrate `dC/dt = -k·C` for one compound with forward Euler
///
/// Returns `(times, concentrations)`, two sequences of equal length:
/// `times` is `0, dt, 2·dt, …` below `horizon`, and `concentrations[i]` is
/// the value AFTER the update at `times[i]`. The first concentration is
/// therefore `C0 + (-k·C0·dt)`, not `C0`.
///
/// `rate_constant` and `initial_concentration` are used as given. A step
/// size too large for the rate constant gives an oscillating or growing
/// trace, not an error.
///
/// # Errors
///
/// Only when no finite grid exists (`time_step` not strictly positive or
/// not finite, `horizon` not finite).
///
/// # Example
///
/// ```rust
/// use decay_rs::models::simulate;
///
/// let (times, concentrations) = simulate(0.05, 1.0, 0.1, 100.0)?;
/// assert_eq!(times.len(), 1000);
/// assert_eq!(concentrations.len(), times.len());
/// assert!((concentrations[0] - 0.995).abs() < 1e-12);
/// # Ok::<(), String>(())
/// ```
pub fn simulate(
    rate_constant: f64,
    initial_concentration: f64,
    time_step: f64,
    horizon: f64,
) -> Result<(Vec<f64>, Vec<f64>), String> {
    let model = FirstOrderDecay::new(
        vec![Compound::new("compound", rate_constant)],
        initial_concentration,
    );
    let scenario = Scenario::new(Box::new(model));
    let config = SolverConfiguration::new(time_step, horizon);

    let result = EulerSolver::new().solve(&scenario, &config)?;
    let concentrations = result
        .species_trace(0)
        .ok_or_else(|| "Single-compound trajectory is missing its species".to_string())?;

    Ok((result.time_points, concentrations))
}

// =================================================================================================
// Tests
// =================================================================================================
