//! In-memory associative store mapping string keys to JSON documents.
//!
//! The [`Store`] is the central type: a single-threaded map from `String`
//! keys to [`Document`] values with whole-document CRUD, field-level reads
//! and writes, regex search over keys, sorted snapshots, and a reversible
//! flat-text persistence format (see [`crate::format`]).

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use regex::Regex;
use serde_json::Value;
use tracing::{debug, info};

use docket_core::{Document, Error, Result};

use crate::format::{render_record, Record, RecordReader};

// ============================================================================
// Store
// ============================================================================

/// An in-memory mapping from string keys to JSON documents.
///
/// Keys are arbitrary strings compared by exact equality; values are always
/// JSON objects ([`Document`]). The store owns its documents and is backed
/// by a `BTreeMap`, so iteration, the text rendering, and the on-disk record
/// order are all ascending by key and deterministic.
///
/// # Concurrency
///
/// The store carries no internal synchronization. Callers that share one
/// across threads must provide their own locking.
///
/// # Examples
///
/// ```
/// use docket_store::Store;
/// use docket_core::Document;
///
/// let mut store = Store::new();
/// store.put("alice", Document::parse(r#"{"age": 30}"#)?);
/// assert_eq!(store.len(), 1);
/// assert!(store.get("alice").is_some());
/// assert!(store.get("bob").is_none());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Store {
    entries: BTreeMap<String, Document>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Store {
            entries: BTreeMap::new(),
        }
    }

    /// Create a store populated from a record file.
    ///
    /// Shorthand for [`Store::new`] followed by [`Store::read_from_file`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut store = Store::new();
        store.read_from_file(path)?;
        Ok(store)
    }

    // ------------------------------------------------------------------
    // Whole-document operations
    // ------------------------------------------------------------------

    /// Insert or replace the document under `key`.
    ///
    /// Returns the displaced document when the key already existed, `None`
    /// when it did not. The store takes ownership of the new document and
    /// hands ownership of the old one back to the caller.
    pub fn put(&mut self, key: impl Into<String>, document: Document) -> Option<Document> {
        self.entries.insert(key.into(), document)
    }

    /// Look up the document under `key`. An absent key is `None`, never an
    /// error.
    pub fn get(&self, key: &str) -> Option<&Document> {
        self.entries.get(key)
    }

    /// Delete the entry under `key`, returning its document when the key was
    /// present. Removing an absent key is a no-op yielding `None`.
    pub fn remove(&mut self, key: &str) -> Option<Document> {
        self.entries.remove(key)
    }

    /// Whether an entry exists under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear()
    }

    /// Iterate over entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Document)> {
        self.entries.iter()
    }

    /// Iterate over keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    // ------------------------------------------------------------------
    // Field-level operations
    // ------------------------------------------------------------------

    /// Look up one field inside the document under `key`.
    ///
    /// An absent key is `Ok(None)`; a present key whose document lacks the
    /// field is [`Error::FieldNotFound`]. The two cases are deliberately
    /// distinct, so callers can tell "no such entry" from "entry exists but
    /// says nothing about this field".
    pub fn get_field(&self, key: &str, field: &str) -> Result<Option<&Value>> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(document) => match document.get(field) {
                Some(value) => Ok(Some(value)),
                None => Err(Error::FieldNotFound {
                    key: key.to_string(),
                    field: field.to_string(),
                }),
            },
        }
    }

    /// Update one field of the document under `key`, in place.
    ///
    /// The key must already be present; a missing key is
    /// [`Error::KeyNotFound`], not a silent no-op and not an implicit
    /// insert. `None` removes the field (a no-op when it was already
    /// absent), while `Some(Value::Null)` stores a JSON null. Returns a
    /// borrow of the mutated document.
    ///
    /// # Examples
    ///
    /// ```
    /// use docket_store::Store;
    /// use docket_core::Document;
    /// use serde_json::json;
    ///
    /// let mut store = Store::new();
    /// store.put("alice", Document::parse(r#"{"age": 30}"#)?);
    ///
    /// let doc = store.update_field("alice", "age", Some(json!(31))).unwrap();
    /// assert_eq!(doc.get("age"), Some(&json!(31)));
    ///
    /// store.update_field("alice", "age", None).unwrap();
    /// assert!(!store.get("alice").unwrap().contains_field("age"));
    /// # Ok::<(), serde_json::Error>(())
    /// ```
    pub fn update_field(
        &mut self,
        key: &str,
        field: &str,
        value: Option<Value>,
    ) -> Result<&Document> {
        let document = self
            .entries
            .get_mut(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))?;
        match value {
            Some(value) => {
                document.insert(field, value);
            }
            None => {
                document.remove(field);
            }
        }
        Ok(&*document)
    }

    // ------------------------------------------------------------------
    // Search and snapshots
    // ------------------------------------------------------------------

    /// Collect every entry whose key matches a regular expression into a
    /// new, independent store.
    ///
    /// A key matches when the pattern is found anywhere within it; anchor
    /// with `^` and `$` for whole-key matches. The returned store holds deep
    /// copies, so mutating either side never affects the other. No match is
    /// an empty store, not an error; a pattern that does not compile is
    /// [`Error::InvalidPattern`].
    pub fn search(&self, pattern: &str) -> Result<Store> {
        let regex = Regex::new(pattern).map_err(|e| Error::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        let entries = self
            .entries
            .iter()
            .filter(|(key, _)| regex.is_match(key))
            .map(|(key, document)| (key.clone(), document.clone()))
            .collect();
        Ok(Store { entries })
    }

    /// Owned snapshot of every entry, sorted ascending by key.
    ///
    /// The snapshot shares nothing with the store: mutations on either side
    /// after the call leave the other untouched.
    pub fn sorted_view(&self) -> Vec<(String, Document)> {
        self.entries
            .iter()
            .map(|(key, document)| (key.clone(), document.clone()))
            .collect()
    }

    // ------------------------------------------------------------------
    // Text rendering and file I/O
    // ------------------------------------------------------------------

    /// Render the whole store in the record format, one record per entry in
    /// ascending key order. An empty store renders as the empty string.
    ///
    /// [`Store::read_from_file`] reverses this encoding exactly, provided no
    /// key contains a line break.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (key, document) in &self.entries {
            out.push_str(&render_record(key, document));
        }
        out
    }

    /// Write the store to `dir/filename` in the record format, replacing
    /// any existing file.
    ///
    /// The handle is flushed and closed on every exit path, and any I/O
    /// failure surfaces as [`Error::Io`]. The directory must already exist.
    /// Keys containing line breaks cannot be represented in this
    /// line-oriented format and will not read back as written.
    pub fn write_to_file(&self, dir: impl AsRef<Path>, filename: &str) -> Result<()> {
        let path = dir.as_ref().join(filename);
        debug!(path = %path.display(), entries = self.len(), "writing store");

        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        for (key, document) in &self.entries {
            writer.write_all(render_record(key, document).as_bytes())?;
        }
        writer.flush()?;

        info!(path = %path.display(), entries = self.len(), "store written");
        Ok(())
    }

    /// Read records from a file into this store.
    ///
    /// Records append to the current contents through [`Store::put`], so a
    /// key read from the file replaces an in-memory entry of the same name,
    /// and when a file repeats a key the last occurrence wins. Each record
    /// applies as soon as it parses: on a malformed file the records before
    /// the failure remain in the store.
    ///
    /// I/O failures surface as [`Error::Io`]; structural problems in the
    /// file surface as [`Error::MalformedRecord`] with the offending line
    /// number. The handle closes on every exit path.
    pub fn read_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading store");

        let file = File::open(path)?;
        let mut records = 0usize;
        for record in RecordReader::new(BufReader::new(file)) {
            let Record { key, document } = record?;
            self.put(key, document);
            records += 1;
        }

        info!(path = %path.display(), records, "store read");
        Ok(())
    }
}

// ============================================================================
// Trait implementations
// ============================================================================

impl fmt::Display for Store {
    /// The record-format rendering, identical to [`Store::to_text`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromIterator<(String, Document)> for Store {
    fn from_iter<I: IntoIterator<Item = (String, Document)>>(iter: I) -> Self {
        Store {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, Document)> for Store {
    fn extend<I: IntoIterator<Item = (String, Document)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for Store {
    type Item = (String, Document);
    type IntoIter = std::collections::btree_map::IntoIter<String, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = (&'a String, &'a Document);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
