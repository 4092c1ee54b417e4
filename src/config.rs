//! Configuration types for the simulation engine.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;

/// Global parameters of a [`SimulationEngine`](crate::engine::SimulationEngine).
///
/// # Builder Pattern
/// ```
/// use pbd2d::config::EngineConfig;
/// use pbd2d::vec::Vec2;
///
/// let config: EngineConfig<f64> = EngineConfig::new()
///     .with_gravity(Vec2::new(0.0, 300.0))
///     .with_time_step(1.0 / 120.0)
///     .with_solver_iterations(12)
///     .with_damping(0.001);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig<F: Float> {
    /// Gravity acceleration. Default: (0, 100), pointing down in screen space.
    pub gravity: Vec2<F>,
    /// Fixed tick length in seconds. Must be positive. Default: 0.016.
    pub time_step: F,
    /// Relaxation passes per tick. Must be positive. Default: 10.
    pub solver_iterations: usize,
    /// Fraction of velocity removed each tick. Never negative. Default: 0.
    pub damping: F,
}

impl<F: Float> EngineConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        EngineConfig {
            gravity: Vec2::new(F::zero(), F::from_f64(100.0)),
            time_step: F::from_f64(0.016),
            solver_iterations: 10,
            damping: F::zero(),
        }
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_time_step(mut self, time_step: F) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_solver_iterations(mut self, iterations: usize) -> Self {
        self.solver_iterations = iterations;
        self
    }

    /// Set the damping factor, clamped to be non-negative.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping.max(F::zero());
        self
    }

    /// Reject a non-positive time step or a zero iteration count.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.time_step > F::zero()) {
            return Err(PhysicsError::InvalidTimeStep);
        }
        if self.solver_iterations == 0 {
            return Err(PhysicsError::InvalidIterations);
        }
        Ok(())
    }
}

impl<F: Float> Default for EngineConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_screen_space_setup() {
        let config: EngineConfig<f64> = EngineConfig::default();
        assert_eq!(config.gravity, Vec2::new(0.0, 100.0));
        assert!((config.time_step - 0.016).abs() < 1e-9);
        assert_eq!(config.solver_iterations, 10);
        assert_eq!(config.damping, 0.0);
    }

    #[test]
    fn negative_damping_is_clamped() {
        let config: EngineConfig<f64> = EngineConfig::new().with_damping(-0.5);
        assert_eq!(config.damping, 0.0);
    }

    #[test]
    fn validate_rejects_bad_settings() {
        let zero_dt: EngineConfig<f64> = EngineConfig::new().with_time_step(0.0);
        assert_eq!(zero_dt.validate(), Err(PhysicsError::InvalidTimeStep));
        let no_iterations: EngineConfig<f64> = EngineConfig::new().with_solver_iterations(0);
        assert_eq!(no_iterations.validate(), Err(PhysicsError::InvalidIterations));
    }
}
