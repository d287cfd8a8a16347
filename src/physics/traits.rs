//! Physical models traits and types
//!
//! This module defines the core API for physical models:
//! - `PhysicalModel`: trait for all kinetic models
//! - `PhysicalState`: concentration of every tracked species at one instant

use nalgebra::DVector;

// =================================================================================================
// Physical State
// =================================================================================================

/// Physical state of the system
///
/// Holds the concentration (mol/L) of each species at a given time. Species
/// are independent columns of the same solution: index `i` always refers to
/// the same compound for the whole simulation.
///
/// # Example
/// ```
/// use decay_rs::physics::PhysicalState;
///
/// let state = PhysicalState::uniform(3, 1.0);
/// assert_eq!(state.species(), 3);
/// assert_eq!(state.concentration(2), Some(1.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalState {
    concentrations: DVector<f64>,
}

impl PhysicalState {
    /// Create a state from a concentration vector
    pub fn new(concentrations: DVector<f64>) -> Self {
        Self { concentrations }
    }

    /// Create a state from a plain vector
    pub fn from_vec(concentrations: Vec<f64>) -> Self {
        Self::new(DVector::from_vec(concentrations))
    }

    /// Create a state where every species has the same concentration
    pub fn uniform(species: usize, value: f64) -> Self {
        Self::new(DVector::from_element(species, value))
    }

    /// Number of species tracked
    pub fn species(&self) -> usize {
        self.concentrations.len()
    }

    /// Concentration of one species, `None` if the index is out of range
    pub fn concentration(&self, index: usize) -> Option<f64> {
        self.concentrations.get(index).copied()
    }

    /// Get the concentration vector
    pub fn concentrations(&self) -> &DVector<f64> {
        &self.concentrations
    }

    /// Get mutable reference to the concentration vector
    pub fn concentrations_mut(&mut self) -> &mut DVector<f64> {
        &mut self.concentrations
    }

    /// True when no species holds NaN or Inf
    pub fn is_finite(&self) -> bool {
        self.concentrations.iter().all(|c| c.is_finite())
    }
}

// Operator overloading for numerical operations

impl std::ops::Add for PhysicalState {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.concentrations += rhs.concentrations;
        self
    }
}

impl std::ops::Mul<f64> for PhysicalState {
    type Output = Self;

    fn mul(mut self, scalar: f64) -> Self::Output {
        self.concentrations *= scalar;
        self
    }
}

// =================================================================================================
// Physical Model Trait
// =================================================================================================

/// Trait for physical models
///
/// # Responsibility
/// Computes the right-hand side `f(C)` of `dC/dt = f(C)` at a given state.
/// Does NOT integrate it (that's the Solver's job).
///
/// The model provides the "physics" (kinetics), the Solver provides
/// the "numerics" (method to integrate them).
pub trait PhysicalModel: Send + Sync {
    /// Number of species
    ///
    /// Used by the solver to check the initial state
    fn species(&self) -> usize;

    /// Computes the time derivative of every species at a given state
    ///
    /// # Arguments
    /// * `state` - Current concentrations
    ///
    /// # Returns
    /// `dC/dt` for each species, same length as `state`
    fn compute_physics(&self, state: &PhysicalState) -> PhysicalState;

    /// Creates the initial state for this model
    fn setup_initial_state(&self) -> PhysicalState;

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Description of the model (option)
    fn description(&self) -> Option<&str> {
        None
    }

    /// Eigenvalues of the linearised system, one per species
    ///
    /// Explicit solvers use them to classify the step size. Models that
    /// are not linear (or do not know) return `None`.
    fn eigenvalues(&self) -> Option<DVector<f64>> {
        None
    }
}
