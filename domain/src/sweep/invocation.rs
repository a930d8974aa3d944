//! Invocation descriptor — the resolved command line for one solver run

use super::plan::Combination;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

/// Resolved executable path and positional arguments for one run.
///
/// Built fresh for each combination and dropped once the run completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationDescriptor {
    pub executable: PathBuf,
    pub samples: u32,
    pub threads: u32,
    pub iterations: u32,
    /// Absolute path to the input matrix
    pub input: PathBuf,
}

impl InvocationDescriptor {
    pub fn new(executable: PathBuf, combination: &Combination, input: PathBuf) -> Self {
        Self {
            executable,
            samples: combination.triple.samples,
            threads: combination.threads.get(),
            iterations: combination.triple.iterations,
            input,
        }
    }

    /// Positional arguments in solver order: samples, threads, iterations, file
    pub fn args(&self) -> [OsString; 4] {
        [
            self.samples.to_string().into(),
            self.threads.to_string().into(),
            self.iterations.to_string().into(),
            self.input.clone().into_os_string(),
        ]
    }

    /// File name component of the input path, for display
    pub fn input_name(&self) -> String {
        self.input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.display().to_string())
    }
}

impl fmt::Display for InvocationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.executable.display(),
            self.samples,
            self.threads,
            self.iterations,
            self.input.display()
        )
    }
}
