//! Application layer for solver-sweep
//!
//! This crate contains the sweep use case, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SweepConfig;
pub use ports::{
    input_probe::InputProbe,
    progress::{NoProgress, SweepProgressNotifier},
    solver_launcher::{LaunchError, SolverLauncher},
};
pub use use_cases::run_sweep::{RunSweepError, RunSweepInput, RunSweepOutput, RunSweepUseCase};
