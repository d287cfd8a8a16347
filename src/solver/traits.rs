//! Numerical solver traits and types
//!
//! - `Solver` trait: interface shared by all time integrators
//! - `SolverConfiguration`: step size and horizon
//! - `SimulationResult`: time grid, trajectory and metadata

use std::collections::HashMap;

use crate::physics::PhysicalState;
use crate::solver::grid::TimeGrid;
use crate::solver::scenario::Scenario;

// =================================================================================================
// Solver trait
// =================================================================================================

/// Numerical time integrator
///
/// Integrates the equations of a [`Scenario`] over the grid described by a
/// [`SolverConfiguration`].
pub trait Solver {
    /// Integrate the scenario
    ///
    /// # Errors
    ///
    /// Returns a message when the configuration cannot produce a grid or the
    /// scenario is inconsistent. Numerical instability is NOT an error.
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<SimulationResult, String>;

    /// Solver name (display and metadata)
    fn name(&self) -> &str;
}

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Configuration for time integration
///
/// # Example
///
/// ```rust
/// use decay_rs::solver::SolverConfiguration;
///
/// let config = SolverConfiguration::new(0.1, 100.0);
/// assert_eq!(config.time_grid()?.len(), 1000);
/// # Ok::<(), String>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfiguration {
    /// Step size `dt`
    pub time_step: f64,

    /// Exclusive upper bound of simulated time `t_max`
    pub horizon: f64,
}

impl SolverConfiguration {
    /// Create a configuration
    pub fn new(time_step: f64, horizon: f64) -> Self {
        Self { time_step, horizon }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        self.time_grid().map(|_| ())
    }

    /// Time grid described by this configuration
    pub fn time_grid(&self) -> Result<TimeGrid, String> {
        TimeGrid::new(self.time_step, self.horizon)
    }
}

impl Default for SolverConfiguration {
    fn default() -> Self {
        Self::new(0.1, 100.0)
    }
}

// =================================================================================================
// Simulation result
// =================================================================================================

/// Output of a solver run
///
/// `time_points[i]` and `state_trajectory[i]` always describe the same
/// instant; both vectors have the same length.
#[derive(Clone, Debug)]
pub struct SimulationResult {
    /// Time grid
    pub time_points: Vec<f64>,

    /// One state per grid point
    pub state_trajectory: Vec<PhysicalState>,

    /// State after the last step (initial state for an empty grid)
    pub final_state: PhysicalState,

    metadata: HashMap<String, String>,
}

impl SimulationResult {
    /// Build a result
    pub fn new(
        time_points: Vec<f64>,
        state_trajectory: Vec<PhysicalState>,
        final_state: PhysicalState,
    ) -> Self {
        debug_assert_eq!(time_points.len(), state_trajectory.len());

        Self {
            time_points,
            state_trajectory,
            final_state,
            metadata: HashMap::new(),
        }
    }

    /// Number of stored time points
    pub fn len(&self) -> usize {
        self.time_points.len()
    }

    /// True when the grid was empty
    pub fn is_empty(&self) -> bool {
        self.time_points.is_empty()
    }

    /// Number of species in the trajectory
    pub fn species(&self) -> usize {
        self.final_state.species()
    }

    /// Attach a diagnostic key/value
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Read back a diagnostic value
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Concentration trace of one species, positionally paired with `time_points`
    pub fn species_trace(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.species() {
            return None;
        }

        self.state_trajectory
            .iter()
            .map(|state| state.concentration(index))
            .collect()
    }

    /// Split the trajectory into one trace per species
    pub fn traces(&self) -> Vec<Vec<f64>> {
        let mut traces = vec![Vec::with_capacity(self.len()); self.species()];

        for state in &self.state_trajectory {
            for (trace, &c) in traces.iter_mut().zip(state.concentrations().iter()) {
                trace.push(c);
            }
        }

        traces
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> SimulationResult {
        let trajectory = vec![
            PhysicalState::from_vec(vec![0.9, 0.5]),
            PhysicalState::from_vec(vec![0.8, 0.25]),
        ];
        let last = trajectory[1].clone();
        SimulationResult::new(vec![0.0, 1.0], trajectory, last)
    }

    #[test]
    fn test_configuration_default() {
        let config = SolverConfiguration::default();
        assert_eq!(config.time_step, 0.1);
        assert_eq!(config.horizon, 100.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_configuration_rejects_zero_step() {
        let config = SolverConfiguration::new(0.0, 10.0);
        let err = config.validate().unwrap_err();
        assert!(err.contains("Time step"));
    }

    #[test]
    fn test_species_trace() {
        let result = sample_result();

        assert_eq!(result.species_trace(0), Some(vec![0.9, 0.8]));
        assert_eq!(result.species_trace(1), Some(vec![0.5, 0.25]));
        assert_eq!(result.species_trace(2), None);
    }

    #[test]
    fn test_traces_split_by_species() {
        let traces = sample_result().traces();

        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0], vec![0.9, 0.8]);
        assert_eq!(traces[1], vec![0.5, 0.25]);
    }

    #[test]
    fn test_metadata_roundtrip() {
        let mut result = sample_result();
        result.add_metadata("solver", "Forward Euler");

        assert_eq!(result.metadata("solver"), Some("Forward Euler"));
        assert_eq!(result.metadata("dt"), None);
    }
}
