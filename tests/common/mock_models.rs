//! Mock physical models for testing
//!
//! These models have known analytical solutions, making them
//! ideal for validating numerical solver accuracy.

use decay_rs::physics::{PhysicalModel, PhysicalState};

// =================================================================================================
// Exponential Decay: dy/dt = -k*y
// =================================================================================================

/// Exponential decay model: dy/dt = -k*y, same rate for every species
///
/// Analytical solution: y(t) = y₀ * exp(-k*t)
///
/// Provides no eigenvalues, so the solver skips its step regime report.
pub struct ExponentialDecay {
    pub species: usize,
    pub decay_rate: f64,
}

impl ExponentialDecay {
    pub fn new(species: usize, decay_rate: f64) -> Self {
        Self { species, decay_rate }
    }

    /// Compute analytical solution at time t
    pub fn analytical_solution(&self, t: f64, y0: f64) -> f64 {
        y0 * (-self.decay_rate * t).exp()
    }
}

impl PhysicalModel for ExponentialDecay {
    fn species(&self) -> usize {
        self.species
    }

    fn compute_physics(&self, state: &PhysicalState) -> PhysicalState {
        // dy/dt = -k * y
        let mut result = state.clone();
        result.concentrations_mut().apply(|y| *y *= -self.decay_rate);
        result
    }

    fn setup_initial_state(&self) -> PhysicalState {
        PhysicalState::uniform(self.species, 1.0)
    }

    fn name(&self) -> &str {
        "Exponential Decay"
    }
}

// =================================================================================================
// Constant Growth: dy/dt = c
// =================================================================================================

/// Constant growth model: dy/dt = c
///
/// Analytical solution: y(t) = y₀ + c*t
///
/// Euler is exact for this problem.
pub struct ConstantGrowth {
    pub species: usize,
    pub growth_rate: f64,
}

impl ConstantGrowth {
    pub fn new(species: usize, growth_rate: f64) -> Self {
        Self { species, growth_rate }
    }

    /// Compute analytical solution at time t
    pub fn analytical_solution(&self, t: f64, y0: f64) -> f64 {
        y0 + self.growth_rate * t
    }
}

impl PhysicalModel for ConstantGrowth {
    fn species(&self) -> usize {
        self.species
    }

    fn compute_physics(&self, _state: &PhysicalState) -> PhysicalState {
        PhysicalState::uniform(self.species, self.growth_rate)
    }

    fn setup_initial_state(&self) -> PhysicalState {
        PhysicalState::uniform(self.species, 0.0)
    }

    fn name(&self) -> &str {
        "Constant Growth"
    }
}

// =================================================================================================
// Decay Chain: A -> B
// =================================================================================================

/// Two-species chain `A -> B` with rate k
///
/// ```text
/// dA/dt = -k*A
/// dB/dt =  k*A
/// ```
///
/// A + B is conserved.
pub struct DecayChain {
    pub rate: f64,
}

impl DecayChain {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

impl PhysicalModel for DecayChain {
    fn species(&self) -> usize {
        2
    }

    fn compute_physics(&self, state: &PhysicalState) -> PhysicalState {
        let a = state.concentrations()[0];
        PhysicalState::from_vec(vec![-self.rate * a, self.rate * a])
    }

    fn setup_initial_state(&self) -> PhysicalState {
        PhysicalState::from_vec(vec![1.0, 0.0])
    }

    fn name(&self) -> &str {
        "Decay Chain"
    }
}

// =================================================================================================
// Tests for Mock Models
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_decay_analytical() {
        let model = ExponentialDecay::new(5, 0.5);

        assert!((model.analytical_solution(0.0, 1.0) - 1.0).abs() < 1e-10);

        // y(1) = exp(-0.5) ≈ 0.6065
        let y1 = model.analytical_solution(1.0, 1.0);
        assert!((y1 - 0.6065306597).abs() < 1e-6);
    }

    #[test]
    fn test_constant_growth_analytical() {
        let model = ConstantGrowth::new(5, 2.0);

        assert!((model.analytical_solution(5.0, 0.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_decay_chain_rates_cancel() {
        let model = DecayChain::new(0.3);
        let rate = model.compute_physics(&model.setup_initial_state());

        assert_eq!(rate.concentrations().sum(), 0.0);
    }
}
