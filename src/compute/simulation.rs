//! Simulation driver for the 1D particle field.
//!
//! Orchestrates seeding and the propose/resolve/commit cycle for each
//! time step.

use log::debug;

use crate::schema::{ConfigError, SimulationConfig};

use super::{Field, FieldRng, MoveSource};

/// Where the evenly spaced particles were seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Distance between consecutive particles. Always even, at least 2.
    pub spacing: usize,
    /// Index of the first particle.
    pub start: usize,
}

/// Collisions detected during one step, in increasing index order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepReport {
    /// Cell indices where two or more particles met and were destroyed.
    pub collisions: Vec<usize>,
}

/// Simulation driver.
///
/// Owns the authoritative field, a proposal buffer reused across steps, and
/// the random source. One random direction is drawn per occupied cell per
/// step, in increasing index order, so a fixed seed reproduces an exact
/// trajectory.
pub struct FieldSimulator {
    config: SimulationConfig,
    rng: FieldRng,
    field: Field,
    proposals: Field,
    placement: Placement,
    step: u64,
}

impl FieldSimulator {
    /// Create a simulator with randomly drawn particle placement.
    ///
    /// Draws an even spacing in `[2, max_spacing]`, then a start index such
    /// that all particles fit, then seeds the field. Fails with
    /// [`ConfigError`] when the field cannot hold `particle_count` evenly
    /// spaced particles.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => FieldRng::new(seed),
            None => FieldRng::from_entropy(),
        };
        let spacing = rng.even_spacing(config.max_spacing());
        let start = rng.start_index(config.field_size - (config.particle_count - 1) * spacing);

        Self::seeded(config, rng, Placement { spacing, start })
    }

    /// Create a simulator with an explicit particle placement.
    ///
    /// The placement must satisfy the same bounds the random draw
    /// guarantees: even `spacing >= 2` and all particles inside the field.
    pub fn with_placement(
        config: SimulationConfig,
        placement: Placement,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let span = (config.particle_count - 1) * placement.spacing;
        if placement.spacing < 2
            || placement.spacing % 2 != 0
            || placement.start + span >= config.field_size
        {
            return Err(ConfigError::SpacingInfeasible {
                field_size: config.field_size,
                particle_count: config.particle_count,
            });
        }

        let rng = match config.seed {
            Some(seed) => FieldRng::new(seed),
            None => FieldRng::from_entropy(),
        };
        Self::seeded(config, rng, placement)
    }

    fn seeded(
        config: SimulationConfig,
        rng: FieldRng,
        placement: Placement,
    ) -> Result<Self, ConfigError> {
        let mut field = Field::empty(config.field_size);
        for k in 0..config.particle_count {
            field.set(placement.start + k * placement.spacing, 1);
        }

        debug!(
            "Seeded {} particles: spacing={}, start={}",
            config.particle_count, placement.spacing, placement.start
        );

        let proposals = Field::empty(config.field_size);
        Ok(Self {
            config,
            rng,
            field,
            proposals,
            placement,
            step: 0,
        })
    }

    /// The authoritative field state.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The placement drawn (or supplied) at initialization.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Number of steps executed so far.
    pub fn step_count(&self) -> u64 {
        self.step
    }

    /// The simulation configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Advance one step using the simulator's own random source.
    pub fn step(&mut self) -> StepReport {
        let report = Self::advance(&mut self.field, &mut self.proposals, &mut self.rng);
        self.step += 1;
        report
    }

    /// Advance one step drawing directions from `moves`.
    ///
    /// Used by tests to force exact trajectories; [`step`](Self::step) is
    /// this with the simulator's own RNG.
    pub fn step_with(&mut self, moves: &mut dyn MoveSource) -> StepReport {
        let report = Self::advance(&mut self.field, &mut self.proposals, moves);
        self.step += 1;
        report
    }

    /// Run all configured steps, returning the console transcript.
    ///
    /// One entry per output line: the `Time <k>: ...` snapshot for each
    /// step, followed by its `Collision on index <i>` lines. The resolved
    /// field after the last step is committed but not rendered.
    pub fn run_transcript(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        for k in 0..self.config.steps {
            lines.push(self.field.snapshot_line(k));
            let report = self.step();
            for index in report.collisions {
                lines.push(format!("Collision on index {}", index));
            }
        }
        lines
    }

    /// One propose/resolve/commit cycle.
    ///
    /// Proposals read only the pre-step field; the commit overwrites
    /// `current` in place once every target has been counted.
    fn advance(current: &mut Field, proposals: &mut Field, moves: &mut dyn MoveSource) -> StepReport {
        let size = current.size();

        // Propose: one draw per occupied cell, in increasing index order.
        // Out-of-range targets are clamped to the nearest boundary cell.
        proposals.clear();
        for i in current.occupied_indices() {
            let target = if moves.move_right() {
                (i + 1).min(size - 1)
            } else {
                i.saturating_sub(1)
            };
            proposals.set(target, proposals.get(target) + 1);
        }

        // Resolve and commit: two or more particles on one cell destroy
        // each other; none survive.
        let mut collisions = Vec::new();
        for i in 0..size {
            let resolved = match proposals.get(i) {
                0 => 0,
                1 => 1,
                count => {
                    debug!("Collision on index {} ({} particles)", i, count);
                    collisions.push(i);
                    0
                }
            };
            current.set(i, resolved);
        }

        StepReport { collisions }
    }
}
