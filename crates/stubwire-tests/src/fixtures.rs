//! Test fixture utilities for creating stub file trees.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A directory of stub files backed by a [`TempDir`].
pub struct StubDir {
    pub root: TempDir,
}

impl StubDir {
    /// Create a new empty stub directory.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Get the stub directory path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write a `.json` stub holding the given document.
    pub fn add_json(&self, name: &str, document: &serde_json::Value) -> PathBuf {
        let contents = serde_json::to_vec(document).expect("Failed to serialize stub document");
        let path = self.path().join(name);
        fs::write(&path, contents).expect("Failed to write stub file");
        path
    }

    /// Write a python script stub.
    pub fn add_script(&self, name: &str, source: &str) -> PathBuf {
        self.add_raw(name, source)
    }

    /// Write a raw stub file, valid or otherwise.
    pub fn add_raw(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, contents).expect("Failed to write stub file");
        path
    }
}

impl Default for StubDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if a python interpreter is available in the environment.
pub fn python_available() -> bool {
    match stubwire::resolve(Path::new("probe.py")) {
        Ok(strategy) => stubwire::runtime_available(strategy),
        Err(_) => false,
    }
}
