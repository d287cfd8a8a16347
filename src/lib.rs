//! decay-rs: First-Order Decay of Bleaching Chemicals
//!
//! Forward Euler integration of `dC/dt = -k·C` for the chemicals of a
//! bleaching bath (hydrogen peroxide, chlorine, EDTA) and for their
//! residues after bleaching, with a side-by-side comparison figure.
//!
//! # Architecture
//!
//! decay-rs keeps physics and numerics apart:
//!
//! - Physical models define equations (what to solve)
//! - Numerical solvers provide methods (how to solve)
//! - A study wires a set of compounds to one solver run
//!
//! # Quick Start
//!
//! ```rust
//! use decay_rs::models::{Compound, FirstOrderDecay};
//! use decay_rs::solver::{EulerSolver, Scenario, Solver, SolverConfiguration};
//!
//! # fn main() -> Result<(), String> {
//! // 1. Configure physical model and scenario
//! let model = FirstOrderDecay::new(
//!     vec![Compound::new("H₂O₂", 0.05), Compound::new("EDTA", 0.005)],
//!     1.0, // C₀ [mol/L]
//! );
//! let scenario = Scenario::new(Box::new(model));
//!
//! // 2. Configure solver
//! let config = SolverConfiguration::new(
//!     0.1,   // dt [s]
//!     100.0, // t_max [s], excluded
//! );
//!
//! // 3. Run simulation
//! let result = EulerSolver::new().solve(&scenario, &config)?;
//!
//! // 4. Access results
//! assert_eq!(result.len(), 1000);
//! assert_eq!(result.species(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: State and model traits
//! - [`models`]: First-order decay model and the single-compound `simulate`
//! - [`solver`]: Time grid, scenario, forward Euler
//! - [`study`]: Before/after bleaching runs
//! - [`output`]: Figure rendering

// Core modules
pub mod physics;

pub mod models;
pub mod solver;

pub mod study;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use decay_rs::prelude::*;
    //! ```
    pub use crate::models::{simulate, Compound, FirstOrderDecay};
    pub use crate::physics::{PhysicalModel, PhysicalState};
    pub use crate::solver::{
        EulerSolver, Scenario, SimulationResult, Solver, SolverConfiguration, StepRegime,
        TimeGrid,
    };
    pub use crate::study::{Study, StudyConfig, StudyResult, Treatment};
}
