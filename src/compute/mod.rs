//! Compute module - Simulation engine for the particle field.

mod field;
mod rng;
mod simulation;

pub use field::*;
pub use rng::*;
pub use simulation::*;
