//! Kinetic models
//!
//! This module contains the physical models implementing
//! [`PhysicalModel`](crate::physics::PhysicalModel).
//!
//! # Available Models
//!
//! - **[`FirstOrderDecay`]**: independent first-order decay `dC/dt = -k·C`
//!   of any number of [`Compound`]s sharing one initial concentration

pub mod first_order;

pub use first_order::{simulate, Compound, FirstOrderDecay};
