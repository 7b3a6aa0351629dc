//! Centralized constants for cluster profile resolution.
//!
//! Environment variable names, on-disk file names, and well-known config
//! keys live here so the resolver, the profile loader, and the path helpers
//! agree on them.

// =============================================================================
// Environment Variables
// =============================================================================

/// Path to a config file that overrides all profile discovery.
pub const ENV_CONFIG: &str = "DCOS_CONFIG";

/// Name, ID, or ID prefix of the cluster to use.
pub const ENV_CLUSTER: &str = "DCOS_CLUSTER";

/// Root directory holding the legacy config and the `clusters/` directory.
pub const ENV_DIR: &str = "DCOS_DIR";

/// Prefix for per-key environment overrides (`cluster.name` -> `DCOS_CLUSTER_NAME`).
pub const ENV_KEY_PREFIX: &str = "DCOS_";

// =============================================================================
// Filesystem Layout
// =============================================================================

/// Directory under the root that holds one subdirectory per cluster.
pub const CLUSTERS_DIR: &str = "clusters";

/// Name of the TOML config file, both per cluster and at the legacy location.
pub const CONFIG_FILE_NAME: &str = "dcos.toml";

/// Marker file placed next to `dcos.toml` in the attached cluster's directory.
pub const ATTACHED_FILE_NAME: &str = "attached";

/// Root directory name under the user's home when `DCOS_DIR` is unset.
pub const DEFAULT_DIR_NAME: &str = ".dcos";

// =============================================================================
// Config Keys
// =============================================================================

/// Human-readable cluster name.
pub const KEY_CLUSTER_NAME: &str = "cluster.name";
