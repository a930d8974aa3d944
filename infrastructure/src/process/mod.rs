//! Solver process management

mod launcher;

pub use launcher::ProcessSolverLauncher;
