//! Forward Euler numerical solver
//!
//! # Mathematical Background
//!
//! The Forward Euler method is the simplest explicit time-stepping scheme
//! for ordinary differential equations:
//!
//! ```text
//! dC/dt = f(C)
//! C_{n+1} = C_n + dt * f(C_n)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate (global error ~ O(dt))
//! - **Stability**: Conditional, `|1 + λ·dt| <= 1` for the linear test equation
//! - **Complexity**: 1 function evaluation per step
//!
//! # Storage convention
//!
//! One state is stored per grid point, and it is the state AFTER the update
//! at that point. The first stored value is therefore already one step of
//! decay away from the initial condition; `C_0` itself is never stored.
//!
//! # Example
//!
//! ```rust
//! use decay_rs::models::{Compound, FirstOrderDecay};
//! use decay_rs::solver::{EulerSolver, Scenario, Solver, SolverConfiguration};
//!
//! let model = FirstOrderDecay::new(vec![Compound::new("H2O2", 0.05)], 1.0);
//! let scenario = Scenario::new(Box::new(model));
//! let config = SolverConfiguration::new(0.1, 100.0);
//!
//! let result = EulerSolver::new().solve(&scenario, &config)?;
//! assert_eq!(result.len(), 1000);
//! # Ok::<(), String>(())
//! ```

use log::{debug, warn};

use crate::physics::PhysicalState;
use crate::solver::stability::report_step_regimes;
use crate::solver::{Scenario, SimulationResult, Solver, SolverConfiguration};

// =================================================================================================
// Forward Euler Solver
// =================================================================================================

/// Forward Euler time-stepping solver
///
/// # Algorithm
///
/// 1. Build the grid `0, dt, 2·dt, …` below the horizon
/// 2. Start from the scenario's initial state
/// 3. For each grid point, in ascending order:
///    - Compute physics: `k = f(C)`
///    - Update state: `C = C + k * dt`
///    - Store the updated state
///
/// Instability (`k·dt` too large) is logged but never turned into an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerSolver;

impl EulerSolver {
    /// Create a new Forward Euler solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use decay_rs::solver::{EulerSolver, Solver};
    ///
    /// let solver = EulerSolver::new();
    /// assert_eq!(solver.name(), "Forward Euler");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for EulerSolver {
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<SimulationResult, String> {
        // ====== Step 1: Validation ======

        let grid = config.time_grid()?;
        scenario.validate()?;

        let dt = grid.step();
        if let Some(description) = scenario.model.description() {
            debug!("{}: {}", scenario.get_model_name(), description);
        }
        report_step_regimes(scenario, dt);

        // ====== Step 2: Setup ======

        let mut state = scenario.initial_state.clone();
        let time_points = grid.points();
        let mut state_trajectory = Vec::with_capacity(time_points.len());

        // ====== Step 3: Time Integration ======

        for _ in &time_points {
            let physics: PhysicalState = scenario.model.compute_physics(&state);

            // C <- C + f(C) * dt, stored after the update
            state = state + physics * dt;
            state_trajectory.push(state.clone());
        }

        if !state.is_finite() {
            warn!(
                "{}: non-finite concentration after {} steps of dt = {}",
                scenario.get_model_name(),
                time_points.len(),
                dt
            );
        }

        debug!(
            "{}: integrated {} species over {} points (dt = {}, horizon = {})",
            scenario.get_model_name(),
            scenario.species(),
            time_points.len(),
            dt,
            grid.horizon()
        );

        // ====== Step 4: Build Result ======

        let mut result = SimulationResult::new(time_points, state_trajectory, state);

        result.add_metadata("solver", self.name());
        result.add_metadata("model", scenario.get_model_name());
        result.add_metadata("dt", &dt.to_string());
        result.add_metadata("horizon", &grid.horizon().to_string());
        result.add_metadata("points", &grid.len().to_string());

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "Forward Euler"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
