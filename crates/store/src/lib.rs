//! Store engine for DocketDB
//!
//! This crate implements the in-memory key/document mapping and its
//! flat-text persistence:
//!
//! - [`Store`]: whole-document CRUD, field-level reads and writes, regex
//!   search over keys, and sorted snapshots
//! - [`format`]: the line-oriented record encoding shared by
//!   [`Store::to_text`] and the file read/write paths

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod format;
pub mod store;

// Re-export the public API
pub use format::{render_record, Record, RecordReader};
pub use store::Store;
