//! Configuration file loading for solver-sweep
//!
//! The priority order (highest to lowest):
//!
//! 1. `--exec-folder <dir>` on the command line (executable directory only)
//! 2. `<execution root>/sweep.toml`
//! 3. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileSolverConfig, FileSweepConfig};
pub use loader::{CONFIG_FILE, ConfigLoadError, ConfigLoader};
