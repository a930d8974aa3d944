//! Solver configuration from TOML (`[solver]` section)

use serde::{Deserialize, Serialize};
use sweep_domain::{DEFAULT_DATA_DIR, DEFAULT_EXECUTABLE};

/// Raw solver location configuration from TOML
///
/// The executable directory is not configured here; it comes from the
/// `--exec-folder` command-line flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSolverConfig {
    /// Solver binary name inside the executable directory
    pub executable: String,
    /// Directory holding the input matrices, relative to the execution root
    pub data_dir: String,
}

impl Default for FileSolverConfig {
    fn default() -> Self {
        Self {
            executable: DEFAULT_EXECUTABLE.to_string(),
            data_dir: DEFAULT_DATA_DIR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_section_deserialize() {
        let toml_str = r#"
[solver]
executable = "qr_algo_omp"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.solver.executable, "qr_algo_omp");
        assert_eq!(config.solver.data_dir, "data");
    }
}
