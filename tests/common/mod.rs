//! Common utilities for integration tests

#![allow(dead_code)]

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::{ConstantGrowth, DecayChain, ExponentialDecay};
pub use test_helpers::{
    analytical_decay,
    assert_states_close,
    create_simple_scenario,
    euler_reference,
    relative_error,
};
