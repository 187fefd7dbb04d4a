// src/source/mod.rs
// =============================================================================
// This module gets the raw HTML we are going to grade.
//
// The markup comes from exactly one place:
// - a local file (--file), read synchronously
// - a web page (--url), fetched with a single HTTP GET
//
// Submodules:
// - fetch: The HTTP side of things
//
// Rust concepts:
// - Enums: A Source is a File OR a Url, never both
// - async: Only the Url branch actually waits on anything
// =============================================================================

mod fetch;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::info;

use crate::error::GraderError;

pub use fetch::fetch_page;

/// Markup file graded when neither --file nor --url is given
pub const HTMLFILE_DEFAULT: &str = "index.html";

// Where the markup comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Source {
    /// Picks the source from the --file / --url options
    ///
    /// Both at once is a conflict and nothing is touched. Neither falls back
    /// to `index.html` in the working directory.
    pub fn from_args(file: Option<PathBuf>, url: Option<String>) -> Result<Self, GraderError> {
        match (file, url) {
            (Some(_), Some(_)) => Err(GraderError::ConfigConflict),
            (None, Some(url)) => Ok(Source::Url(url)),
            (Some(path), None) => Ok(Source::File(path)),
            (None, None) => Ok(Source::File(PathBuf::from(HTMLFILE_DEFAULT))),
        }
    }

    /// Checks preconditions that can be verified without doing any work
    ///
    /// For files that means "exists on disk". URLs are only checked when
    /// fetched.
    pub fn validate(&self) -> Result<(), GraderError> {
        if let Source::File(path) = self {
            assert_file_exists(path)?;
        }
        Ok(())
    }

    /// Loads the markup
    ///
    /// `timeout` only applies to the Url branch; `None` waits as long as the
    /// server takes.
    pub async fn load(&self, timeout: Option<Duration>) -> Result<String, GraderError> {
        match self {
            Source::File(path) => read_html_file(path),
            Source::Url(url) => fetch_page(url, timeout).await,
        }
    }
}

/// Fails with `MissingFile` unless `path` exists
///
/// Returns the path back so callers can chain it.
pub fn assert_file_exists(path: &Path) -> Result<&Path, GraderError> {
    if !path.exists() {
        return Err(GraderError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    Ok(path)
}

/// Reads a local HTML file
///
/// Bytes that aren't valid UTF-8 are replaced instead of failing the run;
/// html5ever would have to cope with them anyway.
pub fn read_html_file(path: &Path) -> Result<String, GraderError> {
    let path = assert_file_exists(path)?;

    let bytes = fs::read(path).map_err(|source| GraderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), bytes = bytes.len(), "read html file");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_and_url_conflict() {
        let result = Source::from_args(
            Some(PathBuf::from("index.html")),
            Some("https://example.com".to_string()),
        );
        assert!(matches!(result, Err(GraderError::ConfigConflict)));
    }

    #[test]
    fn test_defaults_to_index_html() {
        let source = Source::from_args(None, None).unwrap();
        assert_eq!(source, Source::File(PathBuf::from("index.html")));
    }

    #[test]
    fn test_url_only() {
        let source = Source::from_args(None, Some("https://example.com".to_string())).unwrap();
        assert_eq!(source, Source::Url("https://example.com".to_string()));
        // Nothing to check on disk for a URL
        assert!(source.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_file() {
        let dir = TempDir::new().unwrap();
        let source = Source::File(dir.path().join("missing.html"));
        assert!(matches!(source.validate(), Err(GraderError::MissingFile { .. })));
    }

    #[tokio::test]
    async fn test_load_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "<h1>Hello</h1>").unwrap();

        let html = Source::File(path).load(None).await.unwrap();
        assert_eq!(html, "<h1>Hello</h1>");
    }

    #[tokio::test]
    async fn test_load_file_with_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.html");
        fs::write(&path, b"<p>caf\xe9</p>").unwrap();

        let html = Source::File(path).load(None).await.unwrap();
        assert!(html.starts_with("<p>caf"));
        assert!(html.ends_with("</p>"));
    }
}
