// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr only, stdout is reserved for the report)
// 3. Pick the HTML source, load the checks, load the HTML
// 4. Run every selector and print the JSON report
// 5. Exit with a proper code (0 = report printed, 1 = run failed, 2 = bad usage)
//
// The runtime is single-threaded on purpose: at most one request is ever in
// flight, and file mode never awaits anything at all.
// =============================================================================

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use anyhow::Result;

use html_grader::cli::Cli;
use html_grader::{report, GraderError, Source};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => report_failure(&e),
    };

    std::process::exit(exit_code);
}

// Sends tracing output to stderr
//
// RUST_LOG wins over --log-level when both are present.
fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// The grading pipeline: source -> checks -> html -> verify -> print
async fn run(cli: Cli) -> Result<()> {
    let timeout = cli.request_timeout();

    // Argument problems first, before touching the disk or the network
    let source = Source::from_args(cli.file, cli.url)?;

    let report = html_grader::check_source(&source, &cli.checks, timeout).await?;
    report::print(&report)
}

// Prints a failure the way the user expects to see it and picks the exit code
fn report_failure(e: &anyhow::Error) -> i32 {
    let grader_error = e.chain().find_map(|cause| cause.downcast_ref::<GraderError>());

    match grader_error {
        // These two are plain user messages on stdout, nothing more
        Some(err @ (GraderError::ConfigConflict | GraderError::MissingFile { .. })) => {
            println!("{}", err);
            err.exit_code()
        }
        // Printed directly so no log filter can hide it
        Some(err) if err.is_fetch_error() => {
            eprintln!("Error: {}. Request Aborted", err);
            warn!(error = %err, "page fetch failed");
            err.exit_code()
        }
        Some(err) => {
            eprintln!("Error: {}", err);
            err.exit_code()
        }
        None => {
            // Anything we didn't plan for (e.g. stdout closed under us)
            eprintln!("Error: {:#}", e);
            2
        }
    }
}
