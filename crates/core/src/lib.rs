//! Core types for docket stores
//!
//! This crate defines the foundational types used throughout the workspace:
//! - Document: JSON object newtype, the value side of every store entry
//! - INDENT: indentation unit of the persisted document form
//! - Error / Result: error taxonomy for store and persistence operations

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod document;
pub mod error;

// Re-export commonly used types
pub use document::{Document, INDENT};
pub use error::{Error, Result};
