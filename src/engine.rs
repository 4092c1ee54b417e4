//! The simulation engine: particle and constraint ownership plus the tick pipeline.

use crate::config::EngineConfig;
use crate::constraint::DistanceConstraint;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use tracing::{debug, trace, warn};

/// Owns every particle and constraint of one scene and advances it in fixed
/// time steps.
///
/// Particles and constraints are addressed by their position in insertion
/// order. Removing a particle shifts every later particle index down by one
/// (constraint endpoints are renumbered to match), so any index held outside
/// the engine is stale after a removal. [`revision`](Self::revision) changes
/// on every structural mutation and lets holders detect this.
#[derive(Clone, Debug)]
pub struct SimulationEngine<F: Float = f64> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<DistanceConstraint<F>>,
    gravity: Vec2<F>,
    time_step: F,
    solver_iterations: usize,
    damping: F,
    current_time: F,
    revision: u64,
}

impl<F: Float> SimulationEngine<F> {
    /// Build an empty engine, rejecting a non-positive time step or zero iterations.
    pub fn new(config: EngineConfig<F>) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: EngineConfig<F>) -> Self {
        SimulationEngine {
            particles: AllocVec::new(),
            constraints: AllocVec::new(),
            gravity: config.gravity,
            time_step: config.time_step,
            solver_iterations: config.solver_iterations,
            damping: config.damping.max(F::zero()),
            current_time: F::zero(),
            revision: 0,
        }
    }

    // ---------------------------------------------------------------------
    // Structure
    // ---------------------------------------------------------------------

    /// Append a particle and return its index.
    pub fn add_particle(&mut self, particle: Particle<F>) -> usize {
        let index = self.particles.len();
        debug!(
            index,
            position = ?particle.position,
            fixed = particle.is_fixed(),
            "particle created"
        );
        self.particles.push(particle);
        self.revision += 1;
        index
    }

    /// Append a free particle at rest.
    pub fn create_particle(&mut self, position: Vec2<F>, mass: F) -> usize {
        self.add_particle(Particle::new(position, mass))
    }

    /// Append an immovable particle.
    pub fn create_fixed_particle(&mut self, position: Vec2<F>) -> usize {
        self.add_particle(Particle::fixed(position))
    }

    /// Remove a particle together with every constraint that references it.
    ///
    /// Remaining constraint endpoints above `index` are decremented so they
    /// keep pointing at the same particles.
    pub fn remove_particle(&mut self, index: usize) -> Result<Particle<F>, PhysicsError> {
        self.check_particle(index).map_err(|err| {
            warn!(index, %err, "particle removal rejected");
            err
        })?;

        let before = self.constraints.len();
        self.constraints.retain(|c| !c.contains(index));
        let particle = self.particles.remove(index);
        for c in self.constraints.iter_mut() {
            if c.a > index {
                c.a -= 1;
            }
            if c.b > index {
                c.b -= 1;
            }
        }
        self.revision += 1;

        debug!(index, dropped_constraints = before - self.constraints.len(), "particle removed");
        Ok(particle)
    }

    /// Connect two particles with a distance constraint and return its index.
    ///
    /// Fails without modifying the engine if either index is out of range,
    /// the indices are equal, the length is not positive, the stiffness is
    /// outside [0, 1], or the pair is already connected.
    pub fn create_constraint(
        &mut self,
        i1: usize,
        i2: usize,
        length: F,
        stiffness: F,
    ) -> Result<usize, PhysicsError> {
        let constraint = self.validate_constraint(i1, i2, length, stiffness).map_err(|err| {
            warn!(i1, i2, %err, "constraint rejected");
            err
        })?;
        let index = self.constraints.len();
        self.constraints.push(constraint);
        self.revision += 1;
        debug!(index, i1, i2, length = ?length, "constraint created");
        Ok(index)
    }

    fn validate_constraint(
        &self,
        i1: usize,
        i2: usize,
        length: F,
        stiffness: F,
    ) -> Result<DistanceConstraint<F>, PhysicsError> {
        self.check_particle(i1)?;
        self.check_particle(i2)?;
        if self.constraints.iter().any(|c| c.connects(i1, i2)) {
            return Err(PhysicsError::DuplicateConstraint { a: i1, b: i2 });
        }
        DistanceConstraint::new(i1, i2, length, stiffness)
    }

    /// Remove one constraint, keeping the order of the others.
    pub fn remove_constraint(
        &mut self,
        index: usize,
    ) -> Result<DistanceConstraint<F>, PhysicsError> {
        let count = self.constraints.len();
        if index >= count {
            warn!(index, count, "constraint index out of bounds");
            return Err(PhysicsError::ConstraintOutOfBounds { index, count });
        }
        let constraint = self.constraints.remove(index);
        self.revision += 1;
        debug!(index, "constraint removed");
        Ok(constraint)
    }

    /// Remove everything and reset the clock.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.constraints.clear();
        self.current_time = F::zero();
        self.revision += 1;
        debug!("scene cleared");
    }

    // ---------------------------------------------------------------------
    // Simulation
    // ---------------------------------------------------------------------

    /// Advance the scene by one time step.
    pub fn step(&mut self) {
        self.step_with(&mut NoOpStepObserver);
    }

    /// Advance by one time step, reporting each phase to `observer`.
    pub fn step_with<O: StepObserver>(&mut self, observer: &mut O) {
        let dt = self.time_step;
        let decay = F::one() - self.damping;

        for p in self.particles.iter_mut().filter(|p| !p.is_fixed()) {
            p.velocity += self.gravity * dt;
            p.velocity *= decay;
        }
        observer.on_forces_integrated();

        for p in self.particles.iter_mut() {
            p.predicted_position = if p.is_fixed() {
                p.position
            } else {
                p.position + p.velocity * dt
            };
        }
        observer.on_predicted();

        // Passes stay sequential: later constraints see earlier corrections in the same pass.
        for i in 0..self.solver_iterations {
            for constraint in self.constraints.iter() {
                constraint.solve(&mut self.particles);
            }
            observer.on_relax_iteration(i);
        }

        for p in self.particles.iter_mut().filter(|p| !p.is_fixed()) {
            p.velocity = (p.predicted_position - p.position) / dt;
            p.position = p.predicted_position;
        }

        self.current_time = self.current_time + dt;
        trace!(time = ?self.current_time, particles = self.particles.len(), "step");
        observer.on_step_complete();
    }

    /// `velocity += force * inverse_mass * time_step` on one particle.
    pub fn apply_force(&mut self, index: usize, force: Vec2<F>) -> Result<(), PhysicsError> {
        let dt = self.time_step;
        self.particle_entry(index)?.apply_force(force, dt);
        Ok(())
    }

    /// `velocity += impulse * inverse_mass` on one particle.
    pub fn apply_impulse(&mut self, index: usize, impulse: Vec2<F>) -> Result<(), PhysicsError> {
        self.particle_entry(index)?.apply_impulse(impulse);
        Ok(())
    }

    /// Change a particle's mass. Has no effect on a fixed particle's inverse mass.
    pub fn set_particle_mass(&mut self, index: usize, mass: F) -> Result<(), PhysicsError> {
        self.particle_entry(index)?.set_mass(mass);
        Ok(())
    }

    /// Overwrite a free particle's velocity. Fixed particles stay at rest.
    pub fn set_particle_velocity(
        &mut self,
        index: usize,
        velocity: Vec2<F>,
    ) -> Result<(), PhysicsError> {
        let particle = self.particle_entry(index)?;
        if !particle.is_fixed() {
            particle.velocity = velocity;
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Settings
    // ---------------------------------------------------------------------

    pub fn gravity(&self) -> Vec2<F> { self.gravity }

    pub fn set_gravity(&mut self, gravity: Vec2<F>) {
        self.gravity = gravity;
    }

    pub fn time_step(&self) -> F { self.time_step }

    /// Rejects a non-positive time step and keeps the previous one.
    pub fn set_time_step(&mut self, time_step: F) -> Result<(), PhysicsError> {
        if !(time_step > F::zero()) {
            warn!(time_step = ?time_step, "time step rejected");
            return Err(PhysicsError::InvalidTimeStep);
        }
        self.time_step = time_step;
        Ok(())
    }

    pub fn solver_iterations(&self) -> usize { self.solver_iterations }

    /// Rejects zero and keeps the previous count.
    pub fn set_solver_iterations(&mut self, iterations: usize) -> Result<(), PhysicsError> {
        if iterations == 0 {
            warn!("solver iteration count rejected");
            return Err(PhysicsError::InvalidIterations);
        }
        self.solver_iterations = iterations;
        Ok(())
    }

    pub fn damping(&self) -> F { self.damping }

    /// Negative values are clamped to zero.
    pub fn set_damping(&mut self, damping: F) {
        self.damping = damping.max(F::zero());
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// Simulated seconds since construction or the last [`clear`](Self::clear).
    pub fn time(&self) -> F { self.current_time }

    /// Incremented by every structural mutation.
    pub fn revision(&self) -> u64 { self.revision }

    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }

    pub fn particle(&self, index: usize) -> Option<&Particle<F>> {
        self.particles.get(index)
    }

    pub fn particle_mut(&mut self, index: usize) -> Option<&mut Particle<F>> {
        self.particles.get_mut(index)
    }

    pub fn constraint(&self, index: usize) -> Option<&DistanceConstraint<F>> {
        self.constraints.get(index)
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn constraints(&self) -> &[DistanceConstraint<F>] { &self.constraints }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.position).collect()
    }

    fn check_particle(&self, index: usize) -> Result<(), PhysicsError> {
        if index < self.particles.len() {
            Ok(())
        } else {
            Err(PhysicsError::ParticleOutOfBounds { index, count: self.particles.len() })
        }
    }

    fn particle_entry(&mut self, index: usize) -> Result<&mut Particle<F>, PhysicsError> {
        let count = self.particles.len();
        self.particles.get_mut(index).ok_or_else(|| {
            warn!(index, count, "particle index out of bounds");
            PhysicsError::ParticleOutOfBounds { index, count }
        })
    }
}

impl<F: Float> Default for SimulationEngine<F> {
    /// Gravity (0, 100), time step 0.016, 10 iterations, no damping.
    fn default() -> Self {
        Self::from_valid_config(EngineConfig::default())
    }
}
