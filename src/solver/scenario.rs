//! Simulation scenario definition
//!
//! A scenario combines a physical model with its initial state.
use crate::physics::{PhysicalModel, PhysicalState};

/// Simulation scenario
///
/// Defines a specific case to simulate:
/// - Physical model (equations)
/// - Initial concentrations
///
/// The same scenario can be integrated with different step sizes or
/// solvers. This is the "WHAT to solve" (not "HOW to solve").
pub struct Scenario {
    /// Physical model (equations)
    pub model: Box<dyn PhysicalModel>,

    /// State at t = 0
    pub initial_state: PhysicalState,
}

impl Scenario {
    /// Create a scenario starting from the model's own initial state
    pub fn new(model: Box<dyn PhysicalModel>) -> Self {
        let initial_state = model.setup_initial_state();
        Self {
            model,
            initial_state,
        }
    }

    /// Create a scenario with an explicit initial state
    pub fn with_initial_state(model: Box<dyn PhysicalModel>, initial_state: PhysicalState) -> Self {
        Self {
            model,
            initial_state,
        }
    }

    /// Check that the initial state matches the model
    pub fn validate(&self) -> Result<(), String> {
        if self.model.species() == 0 {
            return Err(format!("Model {} tracks no species", self.model.name()));
        }

        if self.initial_state.species() != self.model.species() {
            return Err(format!(
                "Initial state has {} species but model {} expects {}",
                self.initial_state.species(),
                self.model.name(),
                self.model.species()
            ));
        }

        Ok(())
    }

    /// Get model name
    pub fn get_model_name(&self) -> &str {
        self.model.name()
    }

    /// Number of species
    pub fn species(&self) -> usize {
        self.model.species()
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.get_model_name())
            .field("species", &self.species())
            .field("initial state", &self.initial_state)
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
