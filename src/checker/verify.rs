// src/checker/verify.rs
// =============================================================================
// This module runs the selector checks against a parsed HTML document.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// For every selector in the check list we ask "does at least one element
// match?" and store the answer in a Report.
//
// Rust concepts:
// - BTreeMap: A map that keeps its keys sorted
// - Ownership: The Verifier owns the document for the whole run
// - Result<T, E>: Selector parsing can fail on user input
// =============================================================================

use std::collections::BTreeMap;

use scraper::{Html, Selector};
use serde::Serialize;
use tracing::debug;

use super::checks::CheckList;
use crate::error::GraderError;

// The outcome of a grading run: selector -> present?
//
// Keys are unique and iterate in ascending order, which is the same order as
// a sorted CheckList. A selector listed twice simply lands on the same key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    results: BTreeMap<String, bool>,
}

impl Report {
    /// Looks up the result for one selector
    pub fn get(&self, selector: &str) -> Option<bool> {
        self.results.get(selector).copied()
    }

    /// Iterates (selector, present) pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.results.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    fn record(&mut self, selector: &str, present: bool) {
        self.results.insert(selector.to_string(), present);
    }
}

// Holds one parsed document and answers selector queries against it
pub struct Verifier {
    document: Html,
}

impl Verifier {
    /// Parses markup into a queryable document
    ///
    /// html5ever never rejects input; broken markup is repaired the way a
    /// browser would repair it.
    pub fn parse(markup: &str) -> Self {
        Verifier {
            document: Html::parse_document(markup),
        }
    }

    /// Checks every selector and builds the report
    ///
    /// Stops at the first selector that isn't valid CSS.
    pub fn verify(&self, checks: &CheckList) -> Result<Report, GraderError> {
        let mut report = Report::default();

        for raw in checks.iter() {
            let present = self.is_present(raw)?;
            debug!(selector = raw, present, "checked selector");
            report.record(raw, present);
        }

        Ok(report)
    }

    /// True when at least one element matches `raw`
    ///
    /// A blank selector selects nothing, so it is reported as absent rather
    /// than rejected.
    pub fn is_present(&self, raw: &str) -> Result<bool, GraderError> {
        if raw.trim().is_empty() {
            return Ok(false);
        }

        let selector = Selector::parse(raw).map_err(|e| GraderError::InvalidSelector {
            selector: raw.to_string(),
            reason: e.to_string(),
        })?;

        Ok(self.document.select(&selector).next().is_some())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why .next().is_some() instead of counting matches?
//    - document.select() returns a lazy iterator over matching elements
//    - We only care whether there is at least one
//    - .next() stops at the first match instead of walking the whole tree
//
// 2. Why a BTreeMap and not a HashMap?
//    - HashMap iteration order is random
//    - BTreeMap keeps keys sorted, so the JSON output is the same every run
//    - Inserting the same key twice just overwrites the old value
//
// 3. Why does Selector::parse return a Result?
//    - Selectors come from the user's checks.json, so they can be invalid
//    - We turn the error into GraderError::InvalidSelector with the bad text
//    - Never unwrap() on user input!
// -----------------------------------------------------------------------------
