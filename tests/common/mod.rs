//! Common test infrastructure for Pigment integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Scratch directory holding a config file and fuzz artifacts
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a config file and return its path
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.dir.path().join("pigment.yaml");
        std::fs::write(&path, yaml).expect("Failed to write config");
        path
    }

    /// Write raw bytes under `name` and return the path
    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, bytes).expect("Failed to write file");
        path
    }

    /// Files directly inside `subdir`, sorted by name
    pub fn files_in(&self, subdir: &str) -> Vec<PathBuf> {
        let Ok(entries) = std::fs::read_dir(self.dir.path().join(subdir)) else {
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .collect();
        files.sort();
        files
    }
}

/// Count the colors rendered in harness output
pub fn count_colors(output: &str) -> usize {
    output.matches("\n[").count()
}
