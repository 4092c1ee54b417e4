//! Error types for engine operations.

use core::fmt;

/// Broad classification of a [`PhysicsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A parameter value is outside its allowed range.
    Validation,
    /// An index does not name a valid, distinct, unconnected particle or constraint.
    Reference,
    /// An engine setting was rejected; the previous value is kept.
    Configuration,
}

/// Errors that can occur during engine operations.
///
/// A failed operation never leaves the engine partially modified.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Constraint length must be positive.
    InvalidLength,
    /// Stiffness must be in [0, 1].
    InvalidStiffness,
    /// Pendulum bob mass must be positive.
    InvalidMass,
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
    /// Constraint index is out of bounds.
    ConstraintOutOfBounds { index: usize, count: usize },
    /// A constraint cannot connect a particle to itself.
    SelfConstraint { index: usize },
    /// A constraint already connects this unordered pair.
    DuplicateConstraint { a: usize, b: usize },
    /// Time step must be positive.
    InvalidTimeStep,
    /// Solver iteration count must be positive.
    InvalidIterations,
}

impl PhysicsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PhysicsError::InvalidLength
            | PhysicsError::InvalidStiffness
            | PhysicsError::InvalidMass => ErrorKind::Validation,
            PhysicsError::ParticleOutOfBounds { .. }
            | PhysicsError::ConstraintOutOfBounds { .. }
            | PhysicsError::SelfConstraint { .. }
            | PhysicsError::DuplicateConstraint { .. } => ErrorKind::Reference,
            PhysicsError::InvalidTimeStep | PhysicsError::InvalidIterations => {
                ErrorKind::Configuration
            }
        }
    }
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidLength => write!(f, "constraint length must be positive"),
            PhysicsError::InvalidStiffness => write!(f, "stiffness must be in [0, 1]"),
            PhysicsError::InvalidMass => write!(f, "bob mass must be positive"),
            PhysicsError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::ConstraintOutOfBounds { index, count } => {
                write!(f, "constraint index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::SelfConstraint { index } => {
                write!(f, "cannot constrain particle {} to itself", index)
            }
            PhysicsError::DuplicateConstraint { a, b } => {
                write!(f, "constraint between particles {} and {} already exists", a, b)
            }
            PhysicsError::InvalidTimeStep => write!(f, "time step must be positive"),
            PhysicsError::InvalidIterations => write!(f, "solver iterations must be positive"),
        }
    }
}

impl core::error::Error for PhysicsError {}
