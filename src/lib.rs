//! Deterministic 2D position-based dynamics for point masses.
//!
//! `pbd2d` simulates particles joined by distance constraints with a fixed
//! time step. Each tick runs four phases in order:
//!
//! 1. **Integrate forces**: gravity and damping update free particles' velocities.
//! 2. **Predict**: every particle gets `position + velocity * dt`.
//! 3. **Relax**: constraints nudge predicted positions, pass after pass,
//!    in insertion order (Gauss-Seidel).
//! 4. **Commit**: velocities are rebuilt from the corrected displacement and
//!    positions are committed.
//!
//! # Features
//!
//! - **Mass-weighted correction**: lighter particles move more; fixed ones never move
//! - **Soft or rigid rods**: per-constraint stiffness in [0, 1]
//! - **Typed errors**: every rejected operation reports why and leaves the scene untouched
//! - **Presets**: simple, double and chained pendulums
//! - **Observable**: monitor tick phases via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! ```
//! use pbd2d::{SimulationEngine, Vec2};
//!
//! let mut engine: SimulationEngine<f64> = SimulationEngine::default();
//! let pendulum = engine.create_simple_pendulum(Vec2::new(0.0, 0.0), 100.0, 1.0).unwrap();
//! engine.apply_impulse(pendulum.bob, Vec2::new(50.0, 0.0)).unwrap();
//! for _ in 0..60 {
//!     engine.step();
//! }
//! let bob = engine.particle(pendulum.bob).unwrap();
//! assert!((bob.position.length() - 100.0).abs() < 1e-3);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod engine;
pub mod pendulum;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::Particle;
pub use constraint::DistanceConstraint;
pub use engine::SimulationEngine;
pub use pendulum::{SimplePendulum, DoublePendulum, PendulumChain};
pub use config::EngineConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::{PhysicsError, ErrorKind};
