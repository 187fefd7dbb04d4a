// src/lib.rs
// =============================================================================
// html-grader: check an HTML document for a list of required CSS selectors.
//
// The pipeline is:
//   source  -> raw HTML from a file or a URL
//   checker -> load checks.json, run each selector, build a Report
//   report  -> print the Report as JSON
//
// check_html_file() and check_source() run the whole pipeline up to the
// Report in one call; main.rs only adds argument parsing and printing.
// =============================================================================

pub mod checker;
pub mod cli;
pub mod error;
pub mod report;
pub mod source;

use std::path::Path;
use std::time::Duration;

use tracing::info;

pub use checker::{CheckList, Report, Verifier};
pub use error::GraderError;
pub use source::Source;

/// Grades a local HTML file against a checks file
///
/// Both files must exist; the HTML file is checked first.
pub fn check_html_file(html: &Path, checks: &Path) -> Result<Report, GraderError> {
    source::assert_file_exists(html)?;
    let checks = CheckList::load(checks)?;
    let markup = source::read_html_file(html)?;
    grade(&markup, &checks)
}

/// Grades whatever `source` points at
///
/// Preconditions (file exists, checks file exists and parses) are all checked
/// before a request goes out. `timeout` only applies to URLs.
pub async fn check_source(
    source: &Source,
    checks: &Path,
    timeout: Option<Duration>,
) -> Result<Report, GraderError> {
    source.validate()?;
    let checks = CheckList::load(checks)?;
    let markup = source.load(timeout).await?;
    grade(&markup, &checks)
}

fn grade(markup: &str, checks: &CheckList) -> Result<Report, GraderError> {
    let report = Verifier::parse(markup).verify(checks)?;
    info!(selectors = report.len(), "grading finished");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture(checks: &str, html: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("checks.json"), checks).unwrap();
        fs::write(dir.path().join("index.html"), html).unwrap();
        dir
    }

    #[test]
    fn test_check_html_file() {
        let dir = fixture(r#"["h1", "a"]"#, "<h1>Hi</h1>");
        let report =
            check_html_file(&dir.path().join("index.html"), &dir.path().join("checks.json")).unwrap();

        let pairs: Vec<(&str, bool)> = report.iter().collect();
        assert_eq!(pairs, vec![("a", false), ("h1", true)]);
    }

    #[test]
    fn test_check_html_file_missing_html_reported_first() {
        let dir = TempDir::new().unwrap();
        let html = dir.path().join("index.html");

        // Neither file exists; the HTML path is the one named
        match check_html_file(&html, &dir.path().join("checks.json")) {
            Err(GraderError::MissingFile { path }) => assert_eq!(path, html),
            other => panic!("expected MissingFile, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_check_source_file() {
        let dir = fixture(r#"["p", "table"]"#, "<p>text</p>");
        let source = Source::File(dir.path().join("index.html"));
        let report = check_source(&source, &dir.path().join("checks.json"), None)
            .await
            .unwrap();

        assert_eq!(report.get("p"), Some(true));
        assert_eq!(report.get("table"), Some(false));
    }

    #[tokio::test]
    async fn test_check_source_bad_checks_before_fetch() {
        // The URL is never contacted: the checks file fails first
        let dir = fixture("not json", "");
        let source = Source::Url("http://127.0.0.1:1/".to_string());
        let result = check_source(&source, &dir.path().join("checks.json"), None).await;
        assert!(matches!(result, Err(GraderError::MalformedChecks { .. })));
    }
}
