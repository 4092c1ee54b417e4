//! Distance constraints between pairs of particles.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;

/// Keeps two particles at `target_length` from each other.
///
/// Constraints refer to particles by index into the engine's particle store,
/// never by reference, so a relaxation pass can mutate both endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    pub(crate) a: usize,
    pub(crate) b: usize,
    target_length: F,
    stiffness: F,
}

impl<F: Float> DistanceConstraint<F> {
    /// Validates the endpoints are distinct and the length and stiffness are in
    /// range. Index bounds and duplicates are checked by the engine, which
    /// knows the rest of the scene.
    pub fn new(a: usize, b: usize, target_length: F, stiffness: F) -> Result<Self, PhysicsError> {
        if a == b {
            return Err(PhysicsError::SelfConstraint { index: a });
        }
        if !(target_length > F::zero()) {
            return Err(PhysicsError::InvalidLength);
        }
        if !(stiffness >= F::zero() && stiffness <= F::one()) {
            return Err(PhysicsError::InvalidStiffness);
        }
        Ok(DistanceConstraint { a, b, target_length, stiffness })
    }

    pub fn particle1(&self) -> usize { self.a }
    pub fn particle2(&self) -> usize { self.b }
    pub fn target_length(&self) -> F { self.target_length }
    pub fn stiffness(&self) -> F { self.stiffness }

    pub fn contains(&self, index: usize) -> bool {
        self.a == index || self.b == index
    }

    /// True if this constraint joins `i` and `j` in either order.
    pub fn connects(&self, i: usize, j: usize) -> bool {
        (self.a == i && self.b == j) || (self.a == j && self.b == i)
    }

    /// Distance between the endpoints' committed positions.
    pub fn current_length(&self, particles: &[Particle<F>]) -> F {
        particles[self.a].position.distance(particles[self.b].position)
    }

    /// Signed stretch (positive when too long) of the committed positions.
    pub fn error(&self, particles: &[Particle<F>]) -> F {
        self.current_length(particles) - self.target_length
    }

    /// One Gauss-Seidel relaxation of the predicted positions.
    ///
    /// The correction is split by inverse mass, so the lighter particle moves
    /// more, and scaled by stiffness, so a soft constraint only closes part of
    /// the gap per pass.
    pub fn solve(&self, particles: &mut [Particle<F>]) {
        let eps = F::solver_epsilon();
        if self.stiffness < eps {
            return;
        }

        let (p1, p2) = pair_mut(particles, self.a, self.b);
        if p1.is_fixed() && p2.is_fixed() {
            return;
        }

        let delta = p2.predicted_position - p1.predicted_position;
        let len_sq = delta.length_sq();
        if len_sq < eps * eps {
            return; // degenerate
        }
        let len = len_sq.sqrt();

        let stretch = len - self.target_length;
        if stretch.is_near_zero(eps) {
            return;
        }

        let direction = delta / len;
        let w1 = p1.inverse_mass();
        let w2 = p2.inverse_mass();
        let w_total = w1 + w2;
        if w_total < eps {
            return;
        }

        let lambda = (stretch / w_total) * self.stiffness;
        if !p1.is_fixed() {
            p1.predicted_position += direction * (lambda * w1);
        }
        if !p2.is_fixed() {
            p2.predicted_position -= direction * (lambda * w2);
        }
    }
}

/// Two distinct mutable borrows into the particle store.
fn pair_mut<F: Float>(
    particles: &mut [Particle<F>],
    a: usize,
    b: usize,
) -> (&mut Particle<F>, &mut Particle<F>) {
    debug_assert_ne!(a, b);
    if a < b {
        let (head, tail) = particles.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = particles.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}
