//! Point-mass particles for position-based dynamics.

use crate::float::Float;
use crate::vec::Vec2;

/// A point mass simulated by the engine.
///
/// `position` is authoritative at the start and end of a tick;
/// `predicted_position` is scratch space the solver relaxes during a tick.
/// A fixed particle always has zero inverse mass, so the inverse mass and the
/// fixed flag are only reachable through [`set_mass`](Self::set_mass),
/// [`fix`](Self::fix) and [`release`](Self::release).
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
    pub(crate) predicted_position: Vec2<F>,
    inv_mass: F,
    fixed: bool,
}

impl<F: Float> Particle<F> {
    /// A free particle at rest. Non-positive `mass` yields an immovable one.
    pub fn new(position: Vec2<F>, mass: F) -> Self {
        let mut particle = Particle {
            position,
            velocity: Vec2::zero(),
            predicted_position: position,
            inv_mass: F::zero(),
            fixed: false,
        };
        particle.set_mass(mass);
        particle
    }

    /// A fixed particle (pivot, anchor).
    pub fn fixed(position: Vec2<F>) -> Self {
        Particle {
            position,
            velocity: Vec2::zero(),
            predicted_position: position,
            inv_mass: F::zero(),
            fixed: true,
        }
    }

    /// Initial velocity. Ignored for fixed particles.
    pub fn with_velocity(mut self, velocity: Vec2<F>) -> Self {
        if !self.fixed {
            self.velocity = velocity;
        }
        self
    }

    pub fn inverse_mass(&self) -> F {
        self.inv_mass
    }

    /// Mass, or infinity for an immovable particle.
    pub fn mass(&self) -> F {
        if self.inv_mass > F::zero() {
            F::one() / self.inv_mass
        } else {
            F::infinity()
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Position predicted as of the last tick. Direct writes to `position`
    /// are not reflected here until the next tick.
    pub fn predicted_position(&self) -> Vec2<F> {
        self.predicted_position
    }

    pub fn set_mass(&mut self, mass: F) {
        self.inv_mass = if mass > F::zero() { F::one() / mass } else { F::zero() };
        if self.fixed {
            self.inv_mass = F::zero();
        }
    }

    /// `velocity += force * inverse_mass * dt`.
    pub fn apply_force(&mut self, force: Vec2<F>, dt: F) {
        if !self.fixed {
            self.velocity += force * (self.inv_mass * dt);
        }
    }

    /// Instantaneous velocity change, not scaled by the time step.
    pub fn apply_impulse(&mut self, impulse: Vec2<F>) {
        if !self.fixed {
            self.velocity += impulse * self.inv_mass;
        }
    }

    pub fn fix(&mut self) {
        self.fixed = true;
        self.inv_mass = F::zero();
        self.velocity = Vec2::zero();
        self.predicted_position = self.position;
    }

    pub fn release(&mut self, mass: F) {
        self.fixed = false;
        self.set_mass(mass);
    }
}
