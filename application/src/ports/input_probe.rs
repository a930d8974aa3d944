//! Input probe port
//!
//! Lets the sweep check its input matrices before launching anything.

use std::path::Path;

/// Port for checking that an input file is present
pub trait InputProbe: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
}
