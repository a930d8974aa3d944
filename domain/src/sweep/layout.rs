//! Execution layout — where the solver and the input matrices live
//!
//! Both locations hang off a single execution root that is resolved once at
//! startup. The layout only joins paths; checking that they exist is left to
//! the adapters.

use super::invocation::InvocationDescriptor;
use super::plan::Combination;
use crate::core::error::DomainError;
use std::path::{Component, Path, PathBuf};

/// Conventional build-output directory holding the solver binary
pub const DEFAULT_EXEC_FOLDER: &str = "cmake-build-release";

/// Conventional solver binary name
pub const DEFAULT_EXECUTABLE: &str = "qr_algo";

/// Conventional input directory under the execution root
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionLayout {
    root: PathBuf,
    executable_dir: PathBuf,
    data_dir: PathBuf,
    executable_name: String,
}

impl ExecutionLayout {
    pub fn new(
        root: impl Into<PathBuf>,
        executable_dir: impl Into<PathBuf>,
        data_dir: impl Into<PathBuf>,
        executable_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let executable_dir = executable_dir.into();
        let executable_name = executable_name.into();

        if executable_dir.as_os_str().is_empty() {
            return Err(DomainError::InvalidExecutableDir(
                "directory name is empty".to_string(),
            ));
        }
        if executable_name.trim().is_empty() {
            return Err(DomainError::InvalidExecutableName(
                "name is empty".to_string(),
            ));
        }
        if executable_name.contains(|c: char| c == '/' || c == '\\')
            || !matches!(
                Path::new(&executable_name).components().next(),
                Some(Component::Normal(_))
            )
        {
            return Err(DomainError::InvalidExecutableName(format!(
                "'{}' must be a bare file name",
                executable_name
            )));
        }

        Ok(Self {
            root: root.into(),
            executable_dir,
            data_dir: data_dir.into(),
            executable_name,
        })
    }

    /// Layout with the conventional executable and data directory names
    pub fn with_defaults(root: impl Into<PathBuf>) -> Result<Self, DomainError> {
        Self::new(root, DEFAULT_EXEC_FOLDER, DEFAULT_DATA_DIR, DEFAULT_EXECUTABLE)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn executable_dir(&self) -> PathBuf {
        self.root.join(&self.executable_dir)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(&self.data_dir)
    }

    pub fn executable_path(&self) -> PathBuf {
        self.executable_dir().join(&self.executable_name)
    }

    pub fn input_path(&self, file: &str) -> PathBuf {
        self.data_dir().join(file)
    }

    /// Build the invocation for one combination of the sweep
    pub fn describe(&self, combination: &Combination) -> InvocationDescriptor {
        InvocationDescriptor::new(
            self.executable_path(),
            combination,
            self.input_path(&combination.triple.input_file),
        )
    }
}
