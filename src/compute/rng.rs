//! Random draws for seeding and stepping the field.

use rand::prelude::*;

/// Source of per-particle move directions.
///
/// The simulation consumes exactly one draw per occupied cell per step, in
/// increasing index order. Tests substitute a scripted implementation to
/// force exact trajectories.
pub trait MoveSource {
    /// Draw one direction: `true` moves right, `false` moves left.
    fn move_right(&mut self) -> bool;
}

/// Random number generator wrapper for field operations.
pub struct FieldRng {
    rng: StdRng,
}

impl FieldRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create with entropy seed.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Draw an even spacing in `[2, max_spacing]`.
    ///
    /// Uniform over the even values: `2 * (1 + r)` with `r` uniform in
    /// `[0, max_spacing / 2)`. Requires `max_spacing >= 2`.
    pub fn even_spacing(&mut self, max_spacing: usize) -> usize {
        2 * (1 + self.rng.gen_range(0..max_spacing / 2))
    }

    /// Draw a start index in `[0, bound)`.
    pub fn start_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

impl MoveSource for FieldRng {
    fn move_right(&mut self) -> bool {
        self.rng.gen_range(0..2u32) == 1
    }
}
