//! Progress notification port
//!
//! Defines the interface for reporting progress during a sweep.

use std::time::Duration;
use sweep_domain::{Combination, InvocationDescriptor, SolverExit};

/// Callback for progress updates during a sweep
///
/// Implementations live in the presentation layer. The use case calls
/// [`on_invocation_start`](Self::on_invocation_start) before the solver
/// process is spawned, so the description of a run is always visible while
/// that run is in flight.
pub trait SweepProgressNotifier: Send + Sync {
    /// Called once, before the first invocation
    fn on_sweep_start(&self, _total: usize) {}

    /// Called immediately before a combination's solver process is started
    fn on_invocation_start(
        &self,
        combination: &Combination,
        total: usize,
        invocation: &InvocationDescriptor,
    );

    /// Called after the solver process terminated (successfully or not)
    fn on_invocation_complete(
        &self,
        _combination: &Combination,
        _exit: &SolverExit,
        _elapsed: Duration,
    ) {
    }

    /// Called once every combination has succeeded
    fn on_sweep_complete(&self, _total: usize, _elapsed: Duration) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SweepProgressNotifier for NoProgress {
    fn on_invocation_start(
        &self,
        _combination: &Combination,
        _total: usize,
        _invocation: &InvocationDescriptor,
    ) {
    }
}
