//! Common test infrastructure for qualpal integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

/// A request file written into its own temporary directory.
pub struct RequestFile {
    _dir: TempDir,
    pub path: PathBuf,
}

impl RequestFile {
    pub fn new(yaml: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("request.yaml");
        let mut file = std::fs::File::create(&path).expect("Failed to create request file");
        file.write_all(yaml.as_bytes())
            .expect("Failed to write request file");
        Self { _dir: dir, path }
    }
}

/// Parse `#rrggbb` strings, panicking on malformed fixtures.
pub fn hex_colors(colors: &[&str]) -> Vec<qualpal_core::Rgb> {
    colors
        .iter()
        .map(|s| s.parse().expect("fixture colors are valid hex"))
        .collect()
}
