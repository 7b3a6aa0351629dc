//! Environment variable lookup capability.
//!
//! Responsibilities:
//! - Wrap a key -> value lookup function behind a cloneable handle.
//! - Default to the real process environment.
//! - Provide a fixed-map lookup for tests and embedding.
//!
//! Invariants:
//! - A variable set to the empty string counts as set. Callers that need
//!   "empty means unset" must check for it themselves.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type LookupFn = dyn Fn(&str) -> Option<String> + Send + Sync;

/// Looks up environment variables by key.
#[derive(Clone)]
pub struct EnvLookup(Arc<LookupFn>);

impl EnvLookup {
    /// Reads from the process environment.
    ///
    /// Values that are not valid Unicode are converted lossily rather than
    /// being reported as unset.
    pub fn process() -> Self {
        Self::from_fn(|key| std::env::var_os(key).map(|v| v.to_string_lossy().into_owned()))
    }

    /// Uses an arbitrary lookup function.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Uses a fixed set of variables; every other key is unset.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::from_fn(move |key| vars.get(key).cloned())
    }

    /// Returns the value of `key`, or `None` if it is not set.
    pub fn get(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }
}

impl Default for EnvLookup {
    fn default() -> Self {
        Self::process()
    }
}

impl fmt::Debug for EnvLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvLookup").finish_non_exhaustive()
    }
}
