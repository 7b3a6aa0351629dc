//! Cluster profiles: the contract the resolver selects over, and its TOML implementation.
//!
//! Responsibilities:
//! - Define the `Profile` trait (load, path, cluster name, attached flag).
//! - Provide `Config`, a read-only `dcos.toml` view with dotted-key lookup.
//! - Apply per-key environment overrides (`cluster.name` -> `DCOS_CLUSTER_NAME`).
//!
//! Does NOT handle:
//! - Writing, validating, or migrating config content.
//! - Deciding which profile is current (see `resolver.rs`).
//!
//! Invariants:
//! - A `Config` always corresponds to a file that was read and parsed successfully.
//! - The cluster ID is the name of the directory containing the file.
//! - A profile is attached iff an `attached` file sits next to its `dcos.toml`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use toml::{Table, Value};

use crate::constants::{ATTACHED_FILE_NAME, ENV_KEY_PREFIX, KEY_CLUSTER_NAME};
use crate::env::EnvLookup;
use crate::error::LoadError;
use crate::fs::Filesystem;

/// What the resolver needs from a stored profile.
pub trait Profile: Sized {
    /// Loads the profile stored at `path`.
    fn load_path(
        fs: &Arc<dyn Filesystem>,
        env: &EnvLookup,
        path: &Path,
    ) -> Result<Self, LoadError>;

    /// Path of the file the profile was loaded from.
    fn path(&self) -> &Path;

    /// Stored human-readable cluster name, empty when unset.
    fn cluster_name(&self) -> String;

    /// Whether this profile is the attached one.
    fn attached(&self) -> bool;

    /// Cluster ID: name of the directory holding the profile file.
    fn cluster_id(&self) -> Option<String> {
        self.path()
            .parent()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
    }
}

/// A `dcos.toml` file loaded through a [`Filesystem`].
#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    table: Table,
    fs: Arc<dyn Filesystem>,
    env: EnvLookup,
}

impl Config {
    /// Looks up a dotted key such as `core.dcos_url`.
    ///
    /// `DCOS_` followed by the upper-cased key with dots replaced by
    /// underscores overrides the file value when set.
    pub fn get(&self, key: &str) -> Option<Value> {
        if let Some(value) = self.env.get(&env_key(key)) {
            return Some(Value::String(value));
        }

        let mut segments = key.split('.');
        let mut current = self.table.get(segments.next()?)?;
        for segment in segments {
            current = current.as_table()?.get(segment)?;
        }
        Some(current.clone())
    }

    /// Like [`Config::get`], deserialized into `T`. Returns `None` when the
    /// key is missing or has a different shape.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get(key)?.try_into().ok()
    }

    /// The parsed file contents, without environment overrides.
    pub fn table(&self) -> &Table {
        &self.table
    }
}

impl Profile for Config {
    fn load_path(
        fs: &Arc<dyn Filesystem>,
        env: &EnvLookup,
        path: &Path,
    ) -> Result<Self, LoadError> {
        let content = fs.read_to_string(path).map_err(|e| LoadError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let table: Table = toml::from_str(&content).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            table,
            fs: Arc::clone(fs),
            env: env.clone(),
        })
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn cluster_name(&self) -> String {
        self.get_as::<String>(KEY_CLUSTER_NAME).unwrap_or_default()
    }

    fn attached(&self) -> bool {
        self.path
            .parent()
            .is_some_and(|dir| self.fs.is_file(&dir.join(ATTACHED_FILE_NAME)))
    }
}

/// `cluster.name` -> `DCOS_CLUSTER_NAME`
fn env_key(key: &str) -> String {
    format!("{}{}", ENV_KEY_PREFIX, key.replace('.', "_").to_uppercase())
}
