//! Sweep configuration from TOML (`[sweep]` section)

use serde::{Deserialize, Serialize};
use sweep_application::SweepConfig;
use sweep_domain::PairingPolicy;

/// Raw sweep sequences from TOML
///
/// Any field left out keeps the built-in benchmark default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSweepConfig {
    /// Thread levels, swept in this order for every triple
    pub threads: Vec<u32>,
    /// Sample counts, paired positionally with `files`
    pub samples: Vec<u32>,
    /// Iteration counts, paired positionally with `files`
    pub iterations: Vec<u32>,
    /// Input matrix file names inside the data directory
    pub files: Vec<String>,
    /// How length mismatches between `files`, `samples` and `iterations` are handled
    pub pairing: PairingPolicy,
}

impl Default for FileSweepConfig {
    fn default() -> Self {
        let defaults = SweepConfig::default();
        Self {
            threads: defaults.threads,
            samples: defaults.samples,
            iterations: defaults.iterations,
            files: defaults.files,
            pairing: defaults.pairing,
        }
    }
}

impl FileSweepConfig {
    pub fn to_sweep_config(&self) -> SweepConfig {
        SweepConfig::default()
            .with_threads(self.threads.clone())
            .with_triples(
                self.files.clone(),
                self.samples.clone(),
                self.iterations.clone(),
            )
            .with_pairing(self.pairing)
    }
}
