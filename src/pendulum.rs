//! Scene presets: pendulums and pendulum chains built from the engine primitives.
//!
//! Every preset validates its parameters before touching the engine, so a
//! failed call leaves the scene exactly as it was. Bob masses must be
//! positive. Bobs hang from the pivot along the current gravity direction
//! (straight down the +y axis when gravity is zero).

use crate::engine::SimulationEngine;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Indices created by [`SimulationEngine::create_simple_pendulum`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimplePendulum {
    pub pivot: usize,
    pub bob: usize,
}

/// Indices created by [`SimulationEngine::create_double_pendulum`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DoublePendulum {
    pub pivot: usize,
    pub upper: usize,
    pub lower: usize,
}

/// Indices created by [`SimulationEngine::create_pendulum_chain`], pivot first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendulumChain {
    pub pivot: usize,
    pub bobs: AllocVec<usize>,
}

impl<F: Float> SimulationEngine<F> {
    /// A fixed pivot with one bob hanging `length` below it on a rigid rod.
    pub fn create_simple_pendulum(
        &mut self,
        pivot: Vec2<F>,
        length: F,
        mass: F,
    ) -> Result<SimplePendulum, PhysicsError> {
        check_length(length)?;
        check_mass(mass)?;
        let down = self.hanging_direction();

        let pivot_index = self.create_fixed_particle(pivot);
        let bob = self.create_particle(pivot + down * length, mass);
        self.create_constraint(pivot_index, bob, length, F::one())?;

        Ok(SimplePendulum { pivot: pivot_index, bob })
    }

    /// A fixed pivot with two bobs in series, rods of `l1` and `l2`.
    pub fn create_double_pendulum(
        &mut self,
        pivot: Vec2<F>,
        l1: F,
        l2: F,
        m1: F,
        m2: F,
    ) -> Result<DoublePendulum, PhysicsError> {
        check_length(l1)?;
        check_length(l2)?;
        check_mass(m1)?;
        check_mass(m2)?;
        let down = self.hanging_direction();

        let pivot_index = self.create_fixed_particle(pivot);
        let upper_pos = pivot + down * l1;
        let upper = self.create_particle(upper_pos, m1);
        let lower = self.create_particle(upper_pos + down * l2, m2);
        self.create_constraint(pivot_index, upper, l1, F::one())?;
        self.create_constraint(upper, lower, l2, F::one())?;

        Ok(DoublePendulum { pivot: pivot_index, upper, lower })
    }

    /// A fixed pivot followed by `links` equal bobs, each `link_length` apart.
    pub fn create_pendulum_chain(
        &mut self,
        pivot: Vec2<F>,
        link_length: F,
        links: usize,
        mass: F,
    ) -> Result<PendulumChain, PhysicsError> {
        check_length(link_length)?;
        check_mass(mass)?;
        let down = self.hanging_direction();

        let pivot_index = self.create_fixed_particle(pivot);
        let mut bobs = AllocVec::with_capacity(links);
        let mut prev = pivot_index;
        for i in 1..=links {
            let pos = pivot + down * (link_length * F::from_usize(i));
            let bob = self.create_particle(pos, mass);
            self.create_constraint(prev, bob, link_length, F::one())?;
            bobs.push(bob);
            prev = bob;
        }

        Ok(PendulumChain { pivot: pivot_index, bobs })
    }

    /// Hang a new bob at `position` from an existing particle, with a rigid
    /// rod as long as their current distance.
    pub fn attach_bob(
        &mut self,
        anchor: usize,
        position: Vec2<F>,
        mass: F,
        velocity: Vec2<F>,
    ) -> Result<usize, PhysicsError> {
        let count = self.particle_count();
        let anchor_pos = self
            .particle(anchor)
            .map(|p| p.position)
            .ok_or(PhysicsError::ParticleOutOfBounds { index: anchor, count })?;
        let length = anchor_pos.distance(position);
        check_length(length)?;
        check_mass(mass)?;

        let bob = self.add_particle(Particle::new(position, mass).with_velocity(velocity));
        self.create_constraint(anchor, bob, length, F::one())?;
        Ok(bob)
    }

    fn hanging_direction(&self) -> Vec2<F> {
        let down = self.gravity().normalize();
        if down == Vec2::zero() {
            Vec2::new(F::zero(), F::one())
        } else {
            down
        }
    }
}

fn check_length<F: Float>(length: F) -> Result<(), PhysicsError> {
    if length > F::zero() {
        Ok(())
    } else {
        Err(PhysicsError::InvalidLength)
    }
}

fn check_mass<F: Float>(mass: F) -> Result<(), PhysicsError> {
    if mass > F::zero() {
        Ok(())
    } else {
        Err(PhysicsError::InvalidMass)
    }
}
