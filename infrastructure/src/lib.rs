//! Infrastructure layer for solver-sweep
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the solver process launcher, the filesystem input
//! probe, and configuration file loading.

pub mod config;
pub mod probe;
pub mod process;
pub mod root;

// Re-export commonly used types
pub use config::{
    CONFIG_FILE, ConfigLoadError, ConfigLoader, FileConfig, FileSolverConfig, FileSweepConfig,
};
pub use probe::FsInputProbe;
pub use process::ProcessSolverLauncher;
pub use root::harness_root;
