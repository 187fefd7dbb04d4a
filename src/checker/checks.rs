// src/checker/checks.rs
// =============================================================================
// This module loads the list of selectors to check for.
//
// The checks file is plain JSON: a single array of strings, e.g.
//
//   ["h1", "a[href]", "#submit"]
//
// We sort the list right after loading so the report always comes out in the
// same key order, no matter how the file was written.
// =============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::GraderError;
use crate::source::assert_file_exists;

// An ordered, immutable list of CSS selectors
//
// Duplicates are kept here on purpose: the report collapses them, the list
// doesn't need to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckList {
    selectors: Vec<String>,
}

impl CheckList {
    /// Builds a check list, sorting the selectors ascending
    pub fn new(mut selectors: Vec<String>) -> Self {
        selectors.sort();
        CheckList { selectors }
    }

    /// Reads and parses a checks file from disk
    ///
    /// Fails with `MissingFile` before reading anything if `path` doesn't exist.
    pub fn load(path: &Path) -> Result<Self, GraderError> {
        let path = assert_file_exists(path)?;

        let bytes = fs::read(path).map_err(|source| GraderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let checks = Self::from_json_slice(&bytes, path)?;
        info!(count = checks.len(), path = %path.display(), "loaded checks");
        Ok(checks)
    }

    /// Parses checks from JSON text
    ///
    /// `origin` is only used to say where bad JSON came from.
    pub fn from_json_str(text: &str, origin: &Path) -> Result<Self, GraderError> {
        Self::from_json_slice(text.as_bytes(), origin)
    }

    /// Parses checks from raw file bytes
    ///
    /// Bytes that aren't UTF-8 are bad JSON like any other, not an I/O error.
    pub fn from_json_slice(bytes: &[u8], origin: &Path) -> Result<Self, GraderError> {
        let selectors: Vec<String> =
            serde_json::from_slice(bytes).map_err(|source| GraderError::MalformedChecks {
                path: PathBuf::from(origin),
                source,
            })?;
        Ok(Self::new(selectors))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selectors.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}
