//! Shared test utilities for all integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from any test's
//! main.rs.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use serde_json::json;
use tempfile::TempDir;

pub use docketdb::{Document, Error, Record, RecordReader, Result, Store};

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Install a test-writer tracing subscriber once per test binary.
///
/// Output is captured per test and shown only on failure.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        tracing_subscriber::fmt().with_test_writer().init();
    });
}

// ============================================================================
// Fixtures
// ============================================================================

/// Build a [`Document`] from a `serde_json::json!` object literal.
///
/// Panics when handed anything but an object, which in a test is the bug.
pub fn doc(value: serde_json::Value) -> Document {
    Document::from_value(value).expect("test document must be a JSON object")
}

/// A small three-person store used across suites.
pub fn people_store() -> Store {
    let mut store = Store::new();
    store.put("alice", doc(json!({"age": 30, "city": "Lisbon"})));
    store.put("bob", doc(json!({"age": 25, "city": "Porto"})));
    store.put("carol", doc(json!({"age": 41})));
    store
}

// ============================================================================
// TestDir - scratch directory with raw-byte file helpers
// ============================================================================

/// Scratch directory that cleans up on drop, with helpers for writing
/// arbitrary bytes so malformed-input tests can build files the store's own
/// writer would never produce.
pub struct TestDir {
    pub dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        TestDir { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write raw contents under `name` and return the full path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("failed to write test file");
        path
    }

    /// Read a file previously written under this directory.
    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).expect("failed to read test file")
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
