//! Filesystem capability used by profile discovery.
//!
//! Responsibilities:
//! - Define the `Filesystem` trait: list a directory, read a file, check whether a file exists.
//! - Provide `OsFs`, backed by `std::fs`.
//! - Provide `MemFs`, a fully in-memory tree for tests and embedding.
//!
//! Does NOT handle:
//! - Writing, renaming, or deleting anything. Resolution is read-only.
//!
//! Invariants:
//! - `read_dir` returns entries sorted by name, regardless of backend.
//! - `MemFs` never touches the real filesystem.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// A single entry returned by [`Filesystem::read_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File name of the entry (last path component), as stored on disk.
    pub name: OsString,
    /// Whether the entry is a directory. Symlinks are not followed.
    pub is_dir: bool,
}

/// Read-only filesystem access.
pub trait Filesystem: Send + Sync + std::fmt::Debug {
    /// Lists the entries of a directory, sorted by name.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Reads a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Returns true if `path` exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;
}

/// The real OS filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl Filesystem for OsFs {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            entries.push(DirEntry {
                name: entry.file_name(),
                is_dir: file_type.is_dir(),
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// An in-memory filesystem tree.
///
/// Parent directories are created implicitly when a file is added.
///
/// ```
/// use dcos_config::{Filesystem, MemFs};
/// use std::path::Path;
///
/// let fs = MemFs::new().with_file("/dcos/clusters/abc/dcos.toml", "");
/// assert!(fs.is_file(Path::new("/dcos/clusters/abc/dcos.toml")));
/// assert_eq!(fs.read_dir(Path::new("/dcos/clusters")).unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemFs {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
}

impl MemFs {
    /// Creates an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file (and its ancestors), replacing any previous contents.
    pub fn add_file(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.insert(path, contents.into());
    }

    /// Adds a directory and all of its ancestors.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        for ancestor in path.as_ref().ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }

    /// Builder form of [`MemFs::add_file`].
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.add_file(path, contents);
        self
    }

    /// Builder form of [`MemFs::add_dir`].
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.add_dir(path);
        self
    }
}

impl Filesystem for MemFs {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        if self.files.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("{} is not a directory", path.display()),
            ));
        }
        if !self.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            ));
        }

        let child_name = |child: &Path| -> Option<OsString> {
            (child.parent() == Some(path))
                .then(|| child.file_name())
                .flatten()
                .map(|name| name.to_os_string())
        };

        let mut entries: Vec<DirEntry> = self
            .dirs
            .iter()
            .filter_map(|dir| child_name(dir).map(|name| DirEntry { name, is_dir: true }))
            .chain(self.files.keys().filter_map(|file| {
                child_name(file).map(|name| DirEntry {
                    name,
                    is_dir: false,
                })
            }))
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.files.get(path) {
            Some(contents) => Ok(contents.clone()),
            None if self.dirs.contains(path) => Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("{} is a directory", path.display()),
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )),
        }
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}
