//! Flat-text record format shared by the text rendering and file I/O paths.
//!
//! A store serializes to a sequence of records, one per entry, in iteration
//! order. Each record is:
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │ key            (one non-blank line)        │
//! ├────────────────────────────────────────────┤
//! │ document body  (4-space-indented JSON,     │
//! │                 one or more lines)         │
//! ├────────────────────────────────────────────┤
//! │ terminator     (one line blank after trim) │
//! └────────────────────────────────────────────┘
//! ```
//!
//! Reading reverses the encoding with a line-oriented state machine: the
//! first line of a record is taken verbatim as the key, subsequent lines are
//! concatenated **without separators** until a line that is blank after
//! trimming, and the accumulated text is parsed as a JSON document. End of
//! input while expecting a key is the clean terminal.
//!
//! The format is strict. A blank line where a key should be, a record with
//! no body lines, a record whose terminator never arrives, or a body that is
//! not a JSON object all fail with [`Error::MalformedRecord`] carrying the
//! 1-based line number where the problem was detected.
//!
//! Because body lines are joined with nothing in between, the document
//! printer must never rely on line breaks to separate tokens. The 4-space
//! indented form produced by [`Document::to_json_string_indented`] holds
//! that property, which is what makes the encoding reversible.

use std::io::{BufRead, Lines};

use docket_core::{Document, Error, Result};

// ============================================================================
// Records
// ============================================================================

/// One parsed unit of the text format: a key and its document.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// The store key, exactly as it appeared on the record's first line.
    pub key: String,
    /// The document parsed from the record body.
    pub document: Document,
}

/// Render a single entry in the record encoding:
/// the key line, the 4-space-indented document, and a blank terminator line.
pub fn render_record(key: &str, document: &Document) -> String {
    format!("{key}\n{}\n\n", document.to_json_string_indented())
}

// ============================================================================
// Reader
// ============================================================================

/// Streaming reader that yields [`Record`]s from any buffered source.
///
/// Implements [`Iterator`], so a whole file reads as a `for` loop. Iteration
/// ends at the first error; the reader does not attempt to resynchronize on
/// malformed input, since a missing terminator makes every later line
/// suspect.
pub struct RecordReader<R> {
    lines: Lines<R>,
    line: usize,
    failed: bool,
}

impl<R: BufRead> RecordReader<R> {
    /// Create a reader over a buffered source.
    pub fn new(reader: R) -> Self {
        RecordReader {
            lines: reader.lines(),
            line: 0,
            failed: false,
        }
    }

    /// Pull the next line, keeping the 1-based line counter current.
    fn next_line(&mut self) -> Option<std::io::Result<String>> {
        let line = self.lines.next();
        if line.is_some() {
            self.line += 1;
        }
        line
    }

    fn read_record(&mut self) -> Result<Option<Record>> {
        // Expecting a key. End of input here is the clean terminal.
        let key = match self.next_line() {
            None => return Ok(None),
            Some(Err(e)) => return Err(e.into()),
            Some(Ok(line)) => {
                if line.trim().is_empty() {
                    return Err(Error::MalformedRecord {
                        line: self.line,
                        reason: "blank line where a record key was expected".to_string(),
                    });
                }
                line
            }
        };
        let key_line = self.line;

        // Accumulate body lines, joined without separators, until the blank
        // terminator. End of input before the terminator is malformed even
        // when the body itself would parse.
        let mut body = String::new();
        let mut body_lines = 0usize;
        loop {
            match self.next_line() {
                None => {
                    return Err(Error::MalformedRecord {
                        line: self.line,
                        reason: format!("record {key:?} is missing its blank-line terminator"),
                    });
                }
                Some(Err(e)) => return Err(e.into()),
                Some(Ok(line)) => {
                    if line.trim().is_empty() {
                        break;
                    }
                    body.push_str(&line);
                    body_lines += 1;
                }
            }
        }

        if body_lines == 0 {
            return Err(Error::MalformedRecord {
                line: self.line,
                reason: format!("record {key:?} has no document body"),
            });
        }

        let document = Document::parse(&body).map_err(|e| Error::MalformedRecord {
            line: key_line,
            reason: format!("document body for key {key:?} is not valid JSON: {e}"),
        })?;

        Ok(Some(Record { key, document }))
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
