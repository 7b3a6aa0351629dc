//! Selection of the active cluster profile.
//!
//! Responsibilities:
//! - Enumerate profiles stored under `<root>/clusters/<id>/dcos.toml`.
//! - Find a profile by ID, name, or ID prefix.
//! - Pick the current profile from env overrides, attachment, or the legacy file.
//!
//! Does NOT handle:
//! - Parsing config content (see `profile.rs`).
//! - Creating, attaching, or deleting profiles.
//!
//! Invariants:
//! - Precedence for `current`: `DCOS_CONFIG` > `DCOS_CLUSTER` > discovered profiles > legacy file.
//! - An exact cluster ID match in `find` wins over every name or prefix match.
//! - `all` never fails; unreadable or unparsable entries are skipped.
//! - Nothing is cached. Every call re-reads the filesystem and environment.

use std::fmt;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_DIR_NAME, ENV_CLUSTER, ENV_CONFIG};
use crate::env::EnvLookup;
use crate::error::{LoadError, ResolveError};
use crate::fs::{Filesystem, OsFs};
use crate::path::{clusters_dir, default_dir, legacy_config_path};
use crate::profile::{Config, Profile};

/// Construction options for a [`Resolver`]. Unset fields get defaults.
#[derive(Debug, Clone, Default)]
pub struct ResolverOptions {
    /// Filesystem to read from. Defaults to [`OsFs`].
    pub fs: Option<Arc<dyn Filesystem>>,
    /// Environment lookup. Defaults to the process environment.
    pub env_lookup: Option<EnvLookup>,
    /// Root directory. Defaults to `DCOS_DIR`, else `~/.dcos`.
    pub dir: Option<PathBuf>,
}

impl ResolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fs(mut self, fs: impl Filesystem + 'static) -> Self {
        self.fs = Some(Arc::new(fs));
        self
    }

    pub fn with_env_lookup(mut self, env_lookup: EnvLookup) -> Self {
        self.env_lookup = Some(env_lookup);
        self
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }
}

/// Resolves which cluster profile is in effect.
///
/// ```
/// use dcos_config::{EnvLookup, MemFs, Profile, Resolver, ResolverOptions};
///
/// let fs = MemFs::new().with_file("/dcos/clusters/abc123/dcos.toml", "[cluster]\nname = \"prod\"\n");
/// let resolver = Resolver::new(
///     ResolverOptions::new()
///         .with_fs(fs)
///         .with_env_lookup(EnvLookup::from_fn(|_| None))
///         .with_dir("/dcos"),
/// );
///
/// let config = resolver.current().unwrap();
/// assert_eq!(config.cluster_name(), "prod");
/// assert_eq!(config.cluster_id().as_deref(), Some("abc123"));
/// ```
pub struct Resolver<P = Config> {
    fs: Arc<dyn Filesystem>,
    env: EnvLookup,
    dir: PathBuf,
    _profile: PhantomData<fn() -> P>,
}

impl Resolver<Config> {
    /// Creates a resolver producing [`Config`] profiles.
    pub fn new(opts: ResolverOptions) -> Self {
        Self::new_for_profile(opts)
    }
}

impl<P: Profile> Resolver<P> {
    /// Creates a resolver producing profiles of type `P`.
    pub fn new_for_profile(opts: ResolverOptions) -> Self {
        let fs = opts.fs.unwrap_or_else(|| Arc::new(OsFs));
        let env = opts.env_lookup.unwrap_or_default();
        let dir = opts.dir.unwrap_or_else(|| {
            default_dir(&env).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to relative config directory");
                PathBuf::from(DEFAULT_DIR_NAME)
            })
        });

        Self {
            fs,
            env,
            dir,
            _profile: PhantomData,
        }
    }

    /// Root directory holding `clusters/` and the legacy `dcos.toml`.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the current profile.
    ///
    /// The lookup order is:
    /// - `DCOS_CONFIG` is set: load the file it points to.
    /// - `DCOS_CLUSTER` is set: strict [`Resolver::find`] on its value.
    /// - Exactly one profile exists: that profile.
    /// - Several profiles exist: the single attached one.
    /// - No profiles exist: the legacy `<root>/dcos.toml`.
    pub fn current(&self) -> Result<P, ResolveError> {
        if let Some(config_path) = self.env.get(ENV_CONFIG) {
            tracing::debug!(path = %config_path, "Using config from {}", ENV_CONFIG);
            return Ok(self.load(Path::new(&config_path))?);
        }

        if let Some(cluster) = self.env.get(ENV_CLUSTER) {
            tracing::debug!(cluster = %cluster, "Using cluster from {}", ENV_CLUSTER);
            return self.find(&cluster, true);
        }

        let mut profiles = self.all();
        match profiles.len() {
            0 => {
                let path = legacy_config_path(&self.dir);
                tracing::debug!(path = %path.display(), "No cluster profiles, using legacy config");
                Ok(self.load(&path)?)
            }
            1 => Ok(profiles.remove(0)),
            count => {
                let mut attached = profiles.into_iter().filter(|p| p.attached());
                let current = attached.next().ok_or(ResolveError::NoAttachedCluster)?;
                if attached.next().is_some() {
                    return Err(ResolveError::AmbiguousAttachment);
                }
                tracing::debug!(
                    path = %current.path().display(),
                    profiles = count,
                    "Selected attached cluster"
                );
                Ok(current)
            }
        }
    }

    /// Finds a profile by cluster ID or name.
    ///
    /// An exact ID match returns immediately. Otherwise a profile matches
    /// when its cluster name equals `name` or, unless `strict`, when its ID
    /// starts with `name`. Exactly one match is required.
    pub fn find(&self, name: &str, strict: bool) -> Result<P, ResolveError> {
        let mut matches = Vec::new();
        for profile in self.all() {
            let cluster_id = profile.cluster_id().unwrap_or_default();
            if cluster_id == name {
                return Ok(profile);
            }
            if profile.cluster_name() == name || (!strict && cluster_id.starts_with(name)) {
                matches.push((cluster_id, profile));
            }
        }

        match matches.len() {
            0 => Err(ResolveError::NotFound {
                name: name.to_string(),
            }),
            1 => Ok(matches.remove(0).1),
            _ => Err(ResolveError::AmbiguousMatch {
                name: name.to_string(),
                ids: matches.into_iter().map(|(id, _)| id).collect(),
            }),
        }
    }

    /// Returns every loadable profile under `<root>/clusters`, ordered by cluster ID.
    ///
    /// A missing or unreadable `clusters` directory yields an empty list.
    pub fn all(&self) -> Vec<P> {
        let clusters_dir = clusters_dir(&self.dir);
        let entries = match self.fs.read_dir(&clusters_dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(
                    path = %clusters_dir.display(),
                    error = %e,
                    "No cluster profiles directory"
                );
                return Vec::new();
            }
        };

        entries
            .into_iter()
            .filter(|entry| entry.is_dir)
            .filter_map(|entry| {
                let path = clusters_dir.join(&entry.name).join(CONFIG_FILE_NAME);
                match self.load(&path) {
                    Ok(profile) => Some(profile),
                    Err(e) => {
                        tracing::debug!(error = %e, "Skipping cluster profile");
                        None
                    }
                }
            })
            .collect()
    }

    fn load(&self, path: &Path) -> Result<P, LoadError> {
        P::load_path(&self.fs, &self.env, path)
    }
}

impl<P> Clone for Resolver<P> {
    fn clone(&self) -> Self {
        Self {
            fs: Arc::clone(&self.fs),
            env: self.env.clone(),
            dir: self.dir.clone(),
            _profile: PhantomData,
        }
    }
}

impl<P> fmt::Debug for Resolver<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("fs", &self.fs)
            .field("dir", &self.dir)
            .finish_non_exhaustive()
    }
}
