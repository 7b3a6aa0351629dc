//! Root directory helpers.
//!
//! Responsibilities:
//! - Determine the root directory (`DCOS_DIR`, else `~/.dcos`).
//! - Build the well-known paths under it.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::constants::{CLUSTERS_DIR, CONFIG_FILE_NAME, DEFAULT_DIR_NAME, ENV_DIR};
use crate::env::EnvLookup;

/// Returns the root directory for cluster profiles.
///
/// - `DCOS_DIR` when set (an empty value is treated as unset)
/// - Linux/macOS: `~/.dcos`
/// - Windows: `%USERPROFILE%\.dcos`
pub fn default_dir(env: &EnvLookup) -> Result<PathBuf, anyhow::Error> {
    if let Some(dir) = env.get(ENV_DIR).filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let base_dirs =
        directories::BaseDirs::new().context("Failed to determine home directory")?;

    Ok(base_dirs.home_dir().join(DEFAULT_DIR_NAME))
}

/// `<root>/clusters`
pub(crate) fn clusters_dir(root: &Path) -> PathBuf {
    root.join(CLUSTERS_DIR)
}

/// `<root>/dcos.toml`, used when no cluster profiles exist.
pub(crate) fn legacy_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}
