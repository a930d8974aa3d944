//! Execution root resolution
//!
//! The execution root is the directory that holds the solver's build
//! directory and the `data` directory. It is found at runtime by walking up
//! from the running binary (a release build in `<root>/target/release/`
//! resolves to `<root>`), so an installed or copied harness keeps working
//! next to its own data. When no ancestor qualifies, the workspace the
//! harness was built from is used.

use crate::config::CONFIG_FILE;
use std::path::{Path, PathBuf};
use sweep_domain::DEFAULT_DATA_DIR;
use tracing::debug;

/// Directory the sweep runs against
pub fn harness_root() -> PathBuf {
    let found = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(find_root));
    match found {
        Some(root) => root,
        None => {
            debug!("No execution root above the binary, using the build workspace");
            build_root()
        }
    }
}

/// Nearest ancestor of `start` (inclusive) holding `sweep.toml` or `data/`
pub fn find_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE).is_file() || dir.join(DEFAULT_DATA_DIR).is_dir())
        .map(Path::to_path_buf)
}

fn build_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_root_from_release_dir() {
        let root = tempfile::tempdir().unwrap();
        let release = root.path().join("target").join("release");
        fs::create_dir_all(&release).unwrap();
        fs::create_dir(root.path().join("data")).unwrap();

        assert_eq!(find_root(&release).as_deref(), Some(root.path()));
    }

    #[test]
    fn test_find_root_prefers_nearest_config_file() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("data")).unwrap();
        let nested = root.path().join("harness");
        let bin = nested.join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::write(nested.join(CONFIG_FILE), "").unwrap();

        assert_eq!(find_root(&bin), Some(nested));
    }

    #[test]
    fn test_find_root_ignores_data_file() {
        let root = tempfile::tempdir().unwrap();
        let bin = root.path().join("bin");
        fs::create_dir(&bin).unwrap();
        fs::write(bin.join("data"), "").unwrap();

        let found = find_root(&bin);
        assert_ne!(found.as_deref(), Some(bin.as_path()));
    }

    #[test]
    fn test_build_root_contains_infrastructure_crate() {
        assert!(build_root().join("infrastructure").join("Cargo.toml").is_file());
    }
}
