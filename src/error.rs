// src/error.rs
// =============================================================================
// Every way a grading run can fail, as one error type.
//
// Each variant knows its exit code. main.rs decides how to print it; the
// modules that produce these errors never print or exit themselves.
// =============================================================================

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum GraderError {
    /// Both --file and --url were given
    #[error("Either use option -f or -u, not both")]
    ConfigConflict,

    /// The markup file or the checks file is not on disk
    #[error("{} does not exist. Exiting.", path.display())]
    MissingFile { path: PathBuf },

    /// A file exists but could not be read
    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// checks.json is not a JSON array of strings
    #[error("Malformed checks file {}: {source}", path.display())]
    MalformedChecks {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A selector in the checks file is not valid CSS
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// --url could not be parsed as a URL
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The GET request failed before a response arrived
    #[error("Failed to fetch {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl GraderError {
    /// Process exit status for this failure
    ///
    /// 1 = the run could not produce a report, 2 = the arguments were unusable
    pub fn exit_code(&self) -> i32 {
        match self {
            GraderError::ConfigConflict => 2,
            _ => 1,
        }
    }

    /// True for failures that happen while fetching a remote page
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            GraderError::InvalidUrl { .. } | GraderError::Network { .. }
        )
    }
}
