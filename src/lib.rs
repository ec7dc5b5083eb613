//! Particle Drift - 1D stochastic particle field simulation.
//!
//! A small fixed number of point particles is seeded with even spacing on a
//! 1D array of cells. Each time step every particle moves one cell left or
//! right (uniformly at random, clamped at the field boundaries); when two or
//! more particles land on the same cell they collide and are all destroyed.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration types and validation
//! - `compute`: The field, the random source, and the simulation driver
//!
//! # Example
//!
//! ```rust
//! use particle_drift::{FieldSimulator, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     seed: Some(42),
//!     ..SimulationConfig::default()
//! };
//!
//! let mut simulator = FieldSimulator::new(config)?;
//! for line in simulator.run_transcript() {
//!     println!("{}", line);
//! }
//!
//! println!("Survivors: {}", simulator.field().particle_count());
//! # Ok::<(), particle_drift::ConfigError>(())
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{Field, FieldRng, FieldSimulator, MoveSource, Placement, StepReport};
pub use schema::{ConfigError, SimulationConfig};
