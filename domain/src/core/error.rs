//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every variant describes a malformed sweep configuration. They are all
/// detected before the first solver process is launched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(
        "Sweep sequences differ in length: {files} files, {samples} sample counts, {iterations} iteration counts"
    )]
    LengthMismatch {
        files: usize,
        samples: usize,
        iterations: usize,
    },

    #[error("No parameter triples configured")]
    NoTriples,

    #[error("No thread levels configured")]
    NoThreadLevels,

    #[error("Invalid thread level: {0} (must be at least 1)")]
    InvalidThreadLevel(u32),

    #[error("Invalid input file name at position {0}: name is empty")]
    EmptyInputFile(usize),

    #[error("Invalid executable directory: {0}")]
    InvalidExecutableDir(String),

    #[error("Invalid executable name: {0}")]
    InvalidExecutableName(String),
}

impl DomainError {
    /// Check if this error comes from mismatched parallel sequences
    pub fn is_length_mismatch(&self) -> bool {
        matches!(self, DomainError::LengthMismatch { .. })
    }
}
