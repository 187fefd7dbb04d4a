// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Note that --file and --url are NOT declared as conflicting here. clap would
// reject the combination with its own wording; we want our own message, so
// the check lives in Source::from_args.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Checks file used when --checks is not given
pub const CHECKSFILE_DEFAULT: &str = "checks.json";

/// Log filter used when RUST_LOG is not set
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Parser, Debug)]
#[command(
    name = "html-grader",
    version,
    about = "Grade an HTML file or web page for the presence of required CSS selectors",
    long_about = "html-grader loads an HTML document from a local file or a URL, checks it \
                  against a list of CSS selectors from a JSON checks file, and prints a JSON \
                  report mapping each selector to true (present) or false (absent)."
)]
pub struct Cli {
    /// Local path to the HTML file to grade (default: index.html)
    #[arg(short = 'f', long = "file", value_name = "html_file")]
    pub file: Option<PathBuf>,

    /// URL of a web page to fetch and grade
    #[arg(short = 'u', long = "url", value_name = "url")]
    pub url: Option<String>,

    /// Path to the JSON checks file (a list of CSS selectors)
    #[arg(
        short = 'c',
        long = "checks",
        value_name = "check_file",
        default_value = CHECKSFILE_DEFAULT
    )]
    pub checks: PathBuf,

    /// Give up on --url requests after this many seconds (default: wait forever)
    #[arg(long, value_name = "seconds")]
    pub timeout: Option<u64>,

    /// Log level for stderr output (trace, debug, info, warn, error)
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(
        long,
        default_value = DEFAULT_LOG_LEVEL,
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    pub log_level: String,
}

impl Cli {
    /// The --timeout value as a Duration
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}
