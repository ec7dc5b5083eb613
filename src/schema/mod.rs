//! Schema module - Configuration types for the simulation.

mod config;

pub use config::*;
