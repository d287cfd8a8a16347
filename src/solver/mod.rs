//! Numerical solvers
//!
//! This module provides the traits and implementations for time integration.
//! A numerical solver applies a numerical method to the equations provided
//! by a physical model within a specific scenario.
//!
//! # The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Physical model (rate equations)
//!    - Initial concentrations
//!
//! 2. **Configuration** (`SolverConfiguration`) - HOW to solve
//!    - Step size `dt`
//!    - Horizon `t_max` (exclusive)
//!
//! 3. **Solver** (`Solver` trait) - The numerical method
//!    - Applies the numerical scheme
//!    - Returns the trajectory on the time grid
//!
//! # Module Organization
//!
//! - **`traits`**: `Solver`, `SolverConfiguration`, `SimulationResult`
//! - **`grid`**: `TimeGrid`, the `[0, t_max)` grid
//! - **`scenario`**: `Scenario`, model + initial state
//! - **`stability`**: `StepRegime`, explicit-Euler behaviour for a given `k·dt`
//! - **`methods`**: `EulerSolver`
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────┐
//! │  Physical Model │  (dC/dt = -k·C)
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │ Scenario        │ ← WHAT to solve
//! │ (model + C₀)    │
//! └────────┬────────┘
//!          │
//! ┌────────▼─────────────┐
//! │ Solver Configuration │ ← HOW to solve
//! │ (dt, t_max)          │
//! └────────┬─────────────┘
//!          │
//! ┌────────▼────────┐
//! │ EulerSolver     │ ← The method
//! └────────┬────────┘
//!          │
//! ┌────────▼────────────┐
//! │ Simulation Result   │ ← times + one state per time
//! └─────────────────────┘
//! ```
//!
//! # Time Step Selection
//!
//! For decay with rate `k`, forward Euler multiplies the concentration by
//! `1 - k·dt` at every step:
//! - `k·dt < 1`: monotone decay
//! - `1 < k·dt <= 2`: sign alternates
//! - `k·dt > 2`: sign alternates and grows
//!
//! None of these raise an error; [`StepRegime`] lets callers check ahead of
//! time and the solver logs a warning.
//!
//! # Error Handling
//!
//! Solver methods return `Result<T, String>`. Errors are limited to
//! configurations that cannot produce a finite grid and scenarios whose
//! initial state does not match the model.

mod traits;
mod grid;
mod scenario;
mod stability;
mod methods;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{SimulationResult, Solver, SolverConfiguration};

pub use grid::TimeGrid;
pub use scenario::Scenario;
pub use stability::StepRegime;

pub use methods::EulerSolver;
