//! Cluster profile resolution for the DC/OS CLI.
//!
//! This crate locates the config profiles stored under a root directory
//! (`~/.dcos` by default) and decides which one is in effect, honoring
//! `DCOS_CONFIG` and `DCOS_CLUSTER` overrides, the attached marker, and the
//! legacy single-file layout. Filesystem and environment access are injected
//! so resolution can run entirely in memory.

pub mod constants;
mod env;
mod error;
mod fs;
mod path;
mod profile;
mod resolver;

pub use env::EnvLookup;
pub use error::{LoadError, ResolveError};
pub use fs::{DirEntry, Filesystem, MemFs, OsFs};
pub use path::default_dir;
pub use profile::{Config, Profile};
pub use resolver::{Resolver, ResolverOptions};
