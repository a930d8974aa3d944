//! Sweep value objects — thread levels, pairing policy and solver exit status

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Concurrency degree handed to the solver as its thread-count argument.
///
/// The harness itself never runs anything in parallel; this value is only
/// forwarded. Zero is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThreadLevel(NonZeroU32);

impl ThreadLevel {
    pub fn new(threads: u32) -> Result<Self, DomainError> {
        NonZeroU32::new(threads)
            .map(Self)
            .ok_or(DomainError::InvalidThreadLevel(threads))
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }

    /// Parse a whole sequence, failing on the first invalid level
    pub fn parse_all(levels: &[u32]) -> Result<Vec<Self>, DomainError> {
        if levels.is_empty() {
            return Err(DomainError::NoThreadLevels);
        }
        levels.iter().map(|&t| Self::new(t)).collect()
    }
}

impl TryFrom<u32> for ThreadLevel {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ThreadLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the parallel file / sample / iteration sequences are paired when
/// their lengths differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairingPolicy {
    /// Unequal lengths are a configuration error (default)
    #[default]
    Strict,
    /// Pair up to the shortest sequence and drop the rest
    Truncate,
}

impl PairingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PairingPolicy::Strict => "strict",
            PairingPolicy::Truncate => "truncate",
        }
    }
}

impl fmt::Display for PairingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal status of one solver process.
///
/// Only the status is inspected; the solver's own output goes straight to
/// the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverExit {
    /// Exit code, if the process exited normally
    pub code: Option<i32>,
    /// Terminating signal (Unix only)
    pub signal: Option<i32>,
}

impl SolverExit {
    pub fn from_code(code: i32) -> Self {
        Self {
            code: Some(code),
            signal: None,
        }
    }

    pub fn from_signal(signal: i32) -> Self {
        Self {
            code: None,
            signal: Some(signal),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for SolverExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code, self.signal) {
            (Some(code), _) => write!(f, "exit code {}", code),
            (None, Some(signal)) => write!(f, "terminated by signal {}", signal),
            (None, None) => f.write_str("unknown exit status"),
        }
    }
}
