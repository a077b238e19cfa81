//! Integration tests for the in-memory store: whole-document mapping,
//! field-level access, search, and sorted snapshots.

#[path = "../common/mod.rs"]
mod common;

mod fields;
