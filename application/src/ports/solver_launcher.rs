//! Solver launcher port
//!
//! Defines the interface for running the external solver once.

use std::path::{Path, PathBuf};
use sweep_domain::{InvocationDescriptor, SolverExit};
use thiserror::Error;

/// The solver process could not be started or waited on.
///
/// Distinct from a solver that ran and reported failure: that case is an
/// `Ok(SolverExit)` whose [`SolverExit::success`] is false.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Solver executable not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Solver executable is not runnable: {}", .path.display())]
    NotExecutable { path: PathBuf },

    #[error("Failed to run solver {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    pub fn path(&self) -> &Path {
        match self {
            LaunchError::NotFound { path }
            | LaunchError::NotExecutable { path }
            | LaunchError::Io { path, .. } => path,
        }
    }
}

/// Port for solver execution
///
/// Implementations run the process synchronously and return only once it
/// has terminated. Implementations (adapters) live in the infrastructure
/// layer.
pub trait SolverLauncher: Send + Sync {
    /// Run one invocation to completion
    fn launch(&self, invocation: &InvocationDescriptor) -> Result<SolverExit, LaunchError>;
}
