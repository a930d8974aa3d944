//! Sweep entities — parameter triples and the raw sweep specification
//!
//! A [`SweepSpec`] holds the four configured sequences exactly as written.
//! [`SweepSpec::triples`] applies the positional pairing rule to produce the
//! ordered [`ParameterTriple`]s that make up the outer loop of the sweep.

use super::value_objects::{PairingPolicy, ThreadLevel};
use crate::core::error::DomainError;

/// One input file paired with its sample-count and iteration-count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterTriple {
    /// File name, resolved against the data directory at launch time
    pub input_file: String,
    pub samples: u32,
    pub iterations: u32,
}

impl ParameterTriple {
    pub fn new(input_file: impl Into<String>, samples: u32, iterations: u32) -> Self {
        Self {
            input_file: input_file.into(),
            samples,
            iterations,
        }
    }
}

/// The configured sweep sequences, before pairing.
///
/// `files`, `samples` and `iterations` are parallel sequences: index `k` of
/// each forms triple `k`. `threads` is crossed with every triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepSpec {
    pub files: Vec<String>,
    pub samples: Vec<u32>,
    pub iterations: Vec<u32>,
    pub threads: Vec<u32>,
}

impl SweepSpec {
    pub fn new(
        files: Vec<String>,
        samples: Vec<u32>,
        iterations: Vec<u32>,
        threads: Vec<u32>,
    ) -> Self {
        Self {
            files,
            samples,
            iterations,
            threads,
        }
    }

    /// Whether the three parallel sequences have the same length
    pub fn is_aligned(&self) -> bool {
        self.files.len() == self.samples.len() && self.samples.len() == self.iterations.len()
    }

    /// Pair files, sample counts and iteration counts positionally.
    ///
    /// Under [`PairingPolicy::Strict`] unequal lengths are rejected. Under
    /// [`PairingPolicy::Truncate`] the result has
    /// `min(files, samples, iterations)` entries.
    pub fn triples(&self, policy: PairingPolicy) -> Result<Vec<ParameterTriple>, DomainError> {
        if policy == PairingPolicy::Strict && !self.is_aligned() {
            return Err(DomainError::LengthMismatch {
                files: self.files.len(),
                samples: self.samples.len(),
                iterations: self.iterations.len(),
            });
        }

        let triples: Vec<ParameterTriple> = self
            .files
            .iter()
            .zip(&self.samples)
            .zip(&self.iterations)
            .map(|((file, &samples), &iterations)| ParameterTriple::new(file, samples, iterations))
            .collect();

        if triples.is_empty() {
            return Err(DomainError::NoTriples);
        }
        if let Some(k) = triples.iter().position(|t| t.input_file.trim().is_empty()) {
            return Err(DomainError::EmptyInputFile(k));
        }

        Ok(triples)
    }

    pub fn thread_levels(&self) -> Result<Vec<ThreadLevel>, DomainError> {
        ThreadLevel::parse_all(&self.threads)
    }
}
