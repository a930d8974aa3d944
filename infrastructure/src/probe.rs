//! Filesystem-backed input probe

use std::path::Path;
use sweep_application::ports::input_probe::InputProbe;

/// [`InputProbe`] that checks for a regular file on disk
#[derive(Debug, Default, Clone, Copy)]
pub struct FsInputProbe;

impl InputProbe for FsInputProbe {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
