//! Helper functions for integration tests

use decay_rs::physics::{PhysicalModel, PhysicalState};
use decay_rs::solver::Scenario;

/// Assert that two physical states are close (within tolerance)
pub fn assert_states_close(
    state1: &PhysicalState,
    state2: &PhysicalState,
    tolerance: f64,
    message: &str,
) {
    assert_eq!(state1.species(), state2.species(), "{}: Dimension mismatch", message);

    for (i, (&v1, &v2)) in state1
        .concentrations()
        .iter()
        .zip(state2.concentrations().iter())
        .enumerate()
    {
        let diff = (v1 - v2).abs();
        assert!(
            diff < tolerance,
            "{}: Element {} differs by {} (tolerance {})",
            message, i, diff, tolerance
        );
    }
}

/// Create a scenario starting from the model's own initial state
pub fn create_simple_scenario(model: Box<dyn PhysicalModel>) -> Scenario {
    Scenario::new(model)
}

/// Exact solution `c0 * exp(-k*t)`
pub fn analytical_decay(rate_constant: f64, initial: f64, t: f64) -> f64 {
    initial * (-rate_constant * t).exp()
}

/// Scalar forward Euler trace, value after each of `steps` updates
pub fn euler_reference(rate_constant: f64, initial: f64, dt: f64, steps: usize) -> Vec<f64> {
    let mut c = initial;
    (0..steps)
        .map(|_| {
            c += -rate_constant * c * dt;
            c
        })
        .collect()
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_euler_reference_first_value() {
        assert_eq!(euler_reference(0.05, 1.0, 0.1, 3)[0], 1.0 + (-0.05 * 1.0 * 0.1));
    }
}
