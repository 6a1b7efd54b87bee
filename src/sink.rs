//! File sinks: where composed pages end up.
//!
//! Paths handed to a sink are relative to the documentation root.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Destination for composed pages.
pub trait FileSink {
    /// Create a directory and any missing parents. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `Error::CreateDir` naming the directory on failure.
    fn create_dir(&mut self, path: &Path) -> Result<(), Error>;

    /// Write a page, replacing any existing content.
    ///
    /// # Errors
    ///
    /// Returns `Error::Write` naming the page on failure.
    fn write(&mut self, path: &Path, content: &str) -> Result<(), Error>;
}

/// Writes pages under a root directory on disk.
#[derive(Debug)]
pub struct FsSink {
    /// Output root every relative path is joined onto.
    root: PathBuf,
}

impl FsSink {
    /// Sink rooted at `root`. Nothing is touched until the first call.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        return Self { root: root.into() };
    }
}

impl FileSink for FsSink {
    fn create_dir(&mut self, path: &Path) -> Result<(), Error> {
        let full = self.root.join(path);
        std::fs::create_dir_all(&full).map_err(|source| return Error::CreateDir { path: full, source })?;
        return Ok(());
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<(), Error> {
        let full = self.root.join(path);
        std::fs::write(&full, content).map_err(|source| return Error::Write { path: full, source })?;
        return Ok(());
    }
}

/// Keeps pages in memory, keyed by relative path. Used for dry runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Directories requested so far.
    dirs: Vec<PathBuf>,
    /// Written pages by relative path.
    pages: BTreeMap<PathBuf, String>,
}

impl MemorySink {
    /// Directories requested so far, in request order, without repeats.
    pub fn dirs(&self) -> &[PathBuf] {
        return &self.dirs;
    }

    /// Content of a written page.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        return self.pages.get(path.as_ref()).map(String::as_str);
    }

    /// Empty sink.
    pub fn new() -> Self {
        return Self::default();
    }

    /// Every written page, sorted by path.
    pub const fn pages(&self) -> &BTreeMap<PathBuf, String> {
        return &self.pages;
    }
}

impl FileSink for MemorySink {
    fn create_dir(&mut self, path: &Path) -> Result<(), Error> {
        if !self.dirs.iter().any(|d| return d == path) {
            self.dirs.push(path.to_path_buf());
        }
        return Ok(());
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<(), Error> {
        self.pages.insert(path.to_path_buf(), content.to_string());
        return Ok(());
    }
}
