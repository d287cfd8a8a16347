//! Physical models
//!
//! This module provides the traits for kinetic models. A physical model
//! encapsulates the rate equations of a system; here, the degradation of
//! dissolved compounds.
//!
//! # Core Concepts
//!
//! - **Physical Model**: Computes `dC/dt` at a given state
//! - **Physical State**: Concentration of every species at one instant
//!
//! # Architecture
//!
//! Physical models are **separate from numerical solvers**:
//! - The model provides the **equations** (kinetics)
//! - The solver provides the **method** to integrate them (numerics)
//!
//! # Example
//!
//! ```rust
//! use decay_rs::physics::{PhysicalModel, PhysicalState};
//!
//! struct Constant;
//!
//! impl PhysicalModel for Constant {
//!     fn species(&self) -> usize { 1 }
//!     fn compute_physics(&self, _state: &PhysicalState) -> PhysicalState {
//!         PhysicalState::uniform(1, 0.0)
//!     }
//!     fn setup_initial_state(&self) -> PhysicalState { PhysicalState::uniform(1, 1.0) }
//!     fn name(&self) -> &str { "Constant" }
//! }
//!
//! let model = Constant;
//! let rate = model.compute_physics(&model.setup_initial_state());
//! assert_eq!(rate.concentration(0), Some(0.0));
//! ```

pub mod traits;

pub use traits::{PhysicalModel, PhysicalState};
