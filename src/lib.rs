//! DocketDB - In-memory key/document store with flat-text persistence
//!
//! DocketDB maps string keys to JSON documents and keeps the whole store in
//! memory. Beyond whole-document CRUD it offers field-level reads and
//! writes, regex search over keys, sorted snapshots, and a line-oriented
//! text format that writes to and reads back from ordinary files.
//!
//! # Quick Start
//!
//! ```ignore
//! use docketdb::{Document, Store};
//! use serde_json::json;
//!
//! let mut store = Store::new();
//! store.put("alice", Document::parse(r#"{"name": "Alice", "age": 30}"#)?);
//!
//! // Field-level access
//! let age = store.get_field("alice", "age")?;
//! store.update_field("alice", "age", Some(json!(31)))?;
//!
//! // Persist and restore
//! store.write_to_file("/var/lib/docket", "people.txt")?;
//! let restored = Store::from_file("/var/lib/docket/people.txt")?;
//! ```
//!
//! # Architecture
//!
//! The store engine lives in [`docket_store`]; shared primitives (the
//! [`Document`] type and the [`Error`] taxonomy) live in [`docket_core`].
//! This crate re-exports both, so applications depend on `docketdb` alone.

// Re-export the public API
pub use docket_core::{Document, Error, Result, INDENT};
pub use docket_store::{render_record, Record, RecordReader, Store};
