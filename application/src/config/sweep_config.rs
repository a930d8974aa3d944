//! Sweep configuration — the sequences a sweep is built from.
//!
//! [`SweepConfig`] is constructed once at startup and handed to
//! [`RunSweepUseCase`](crate::use_cases::run_sweep::RunSweepUseCase). The
//! defaults reproduce the stock QR-algorithm benchmark: two matrices, each
//! swept from 32 threads down to 1.

use sweep_domain::{DomainError, PairingPolicy, SweepPlan, SweepSpec};

/// Default thread levels, swept in this order for every triple
pub const DEFAULT_THREADS: [u32; 6] = [32, 16, 8, 4, 2, 1];

/// Default sample counts, paired positionally with [`DEFAULT_FILES`]
pub const DEFAULT_SAMPLES: [u32; 2] = [20, 5];

/// Default iteration counts, paired positionally with [`DEFAULT_FILES`]
pub const DEFAULT_ITERATIONS: [u32; 2] = [10, 15];

/// Default input matrices, looked up in the data directory
pub const DEFAULT_FILES: [&str; 2] = ["a_500.mtx", "a_2500.mtx"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    pub threads: Vec<u32>,
    pub samples: Vec<u32>,
    pub iterations: Vec<u32>,
    pub files: Vec<String>,
    pub pairing: PairingPolicy,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            threads: DEFAULT_THREADS.to_vec(),
            samples: DEFAULT_SAMPLES.to_vec(),
            iterations: DEFAULT_ITERATIONS.to_vec(),
            files: DEFAULT_FILES.iter().map(|f| f.to_string()).collect(),
            pairing: PairingPolicy::default(),
        }
    }
}

impl SweepConfig {
    // ==================== Builder Methods ====================

    pub fn with_threads(mut self, threads: Vec<u32>) -> Self {
        self.threads = threads;
        self
    }

    /// Replace the parallel (file, samples, iterations) sequences at once
    pub fn with_triples(
        mut self,
        files: Vec<String>,
        samples: Vec<u32>,
        iterations: Vec<u32>,
    ) -> Self {
        self.files = files;
        self.samples = samples;
        self.iterations = iterations;
        self
    }

    pub fn with_pairing(mut self, pairing: PairingPolicy) -> Self {
        self.pairing = pairing;
        self
    }

    // ==================== Derived Values ====================

    pub fn spec(&self) -> SweepSpec {
        SweepSpec::new(
            self.files.clone(),
            self.samples.clone(),
            self.iterations.clone(),
            self.threads.clone(),
        )
    }

    /// Enumerate the sweep under the configured pairing policy
    pub fn plan(&self) -> Result<SweepPlan, DomainError> {
        SweepPlan::from_spec(&self.spec(), self.pairing)
    }
}
