// src/checker/mod.rs
// =============================================================================
// This module contains all grading logic.
//
// Submodules:
// - checks: Loads the list of selectors from checks.json
// - verify: Runs each selector against the parsed HTML and builds the report
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers can write `checker::Verifier` instead of `checker::verify::Verifier`.
// =============================================================================

mod checks;
mod verify;

pub use checks::CheckList;
pub use verify::{Report, Verifier};
