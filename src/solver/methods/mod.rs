//! Numerical methods for integrating differential equations
//!
//! This module contains concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//!
//! # Available Methods
//!
//! - **[`EulerSolver`]**: Forward Euler method, first order, one evaluation per step

pub mod euler;

pub use euler::EulerSolver;
