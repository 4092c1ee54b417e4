//! Step observer trait for monitoring simulation progress.

/// Trait for observing the phases of a simulation tick.
///
/// Implement this trait to monitor solver progress (debugging, visualizing
/// intermediate predicted positions, profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after gravity and damping have updated velocities.
    fn on_forces_integrated(&mut self) {}

    /// Called after predicted positions have been computed.
    fn on_predicted(&mut self) {}

    /// Called after each full relaxation pass over the constraints.
    fn on_relax_iteration(&mut self, _iteration: usize) {}

    /// Called when positions and velocities have been committed.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
