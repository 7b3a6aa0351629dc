//! Error types for profile loading and resolution.
//!
//! Responsibilities:
//! - Define `LoadError` for a single config file that cannot be read or parsed.
//! - Define `ResolveError` for selection failures in the resolver.
//!
//! Does NOT handle:
//! - Swallowing per-entry failures during enumeration (see `resolver.rs`).
//!
//! Invariants:
//! - Every `LoadError` carries the path it failed on.
//! - `ResolveError::Load` wraps the loader's error verbatim.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading a single config file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl LoadError {
    /// Path of the config file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Read { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }
}

/// Errors that can occur when selecting a cluster profile.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("no cluster is attached")]
    NoAttachedCluster,

    /// Two or more profiles carry the attached marker. This is a
    /// consistency violation on disk.
    #[error("multiple clusters are attached")]
    AmbiguousAttachment,

    #[error("no match found for '{name}'")]
    NotFound { name: String },

    #[error("multiple matches found for '{name}': {}", .ids.join(", "))]
    AmbiguousMatch { name: String, ids: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_match_lists_ids() {
        let err = ResolveError::AmbiguousMatch {
            name: "prod".to_string(),
            ids: vec!["abc".to_string(), "def".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "multiple matches found for 'prod': abc, def"
        );
    }

    #[test]
    fn test_load_error_is_transparent() {
        let load = LoadError::Read {
            path: PathBuf::from("/root/.dcos/dcos.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let expected = load.to_string();
        let err = ResolveError::from(load);
        assert_eq!(err.to_string(), expected);
        assert!(expected.contains("/root/.dcos/dcos.toml"));
    }
}
