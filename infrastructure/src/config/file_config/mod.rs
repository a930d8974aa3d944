//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of `sweep.toml`.
//! They are deserialized directly and use domain types where appropriate.

mod solver;
mod sweep;

pub use solver::FileSolverConfig;
pub use sweep::FileSweepConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;
use sweep_application::SweepConfig;
use sweep_domain::{DomainError, ExecutionLayout};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Solver binary and data directory names
    pub solver: FileSolverConfig,
    /// Sweep sequences and pairing policy
    pub sweep: FileSweepConfig,
}

impl FileConfig {
    pub fn to_sweep_config(&self) -> SweepConfig {
        self.sweep.to_sweep_config()
    }

    /// Resolve the execution layout under `root`.
    ///
    /// `exec_folder` is the executable directory selected on the command line.
    pub fn layout(&self, root: &Path, exec_folder: &str) -> Result<ExecutionLayout, DomainError> {
        ExecutionLayout::new(
            root,
            exec_folder,
            &self.solver.data_dir,
            &self.solver.executable,
        )
    }
}
