// crates/nordnotes-harness/src/docs.rs
// ============================================================================
// Module: Documentation Context
// Description: Accumulator for API documentation entries across test runs.
// Purpose: Record executed calls per endpoint and render a preview artifact.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! The [`DocContext`] lives for one suite run: cleared at suite start,
//! filled by the HTTP helper as cases execute, and flushed to a Markdown
//! preview once all versions complete. Endpoint scoping is balanced by
//! construction: [`DocContext::new_endpoint`] opens exactly one entry and
//! [`DocContext::save_endpoint`] finalizes it; unbalanced calls fail closed.
//!
//! ## Invariants
//! - At most one endpoint entry is open at any time.
//! - Rendering requires every opened endpoint to have been saved.
//! - Preview output is deterministic: insertion order, pretty-printed JSON.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde_json::Value;

use crate::error::HarnessError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// File name of the rendered documentation preview.
pub const PREVIEW_FILE_NAME: &str = "nordnotes-api-preview.md";

// ============================================================================
// SECTION: Types
// ============================================================================

/// One executed call recorded under an endpoint entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    /// Short summary collected before the call, when provided.
    pub summary: String,
    /// HTTP method of the recorded call.
    pub method: String,
    /// Full request URL.
    pub url: String,
    /// Response status code.
    pub status: u16,
    /// Decoded response body, when the body was valid JSON.
    pub response: Option<Value>,
}

/// One documented endpoint with the calls executed against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDoc {
    /// API version the endpoint was exercised under.
    pub version: String,
    /// Documentation tag grouping related endpoints.
    pub tag: String,
    /// Human-readable endpoint title.
    pub title: String,
    /// Calls recorded while the endpoint entry was open.
    pub calls: Vec<CallRecord>,
}

/// Accumulator of documentation entries for one suite run.
#[derive(Debug, Default)]
pub struct DocContext {
    /// Finalized endpoint entries in insertion order.
    entries: Vec<EndpointDoc>,
    /// Endpoint entry currently being built, if any.
    open: Option<EndpointDoc>,
    /// Summary applied to the next recorded call.
    pending_summary: String,
}

// ============================================================================
// SECTION: Operations
// ============================================================================

impl DocContext {
    /// Creates an empty documentation context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards all accumulated entries and any open endpoint.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.open = None;
        self.pending_summary.clear();
    }

    /// Returns the finalized endpoint entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[EndpointDoc] {
        &self.entries
    }

    /// Opens a new endpoint entry.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Docs`] when another endpoint is still open.
    pub fn new_endpoint(
        &mut self,
        version: &str,
        tag: &str,
        title: &str,
    ) -> Result<(), HarnessError> {
        if let Some(open) = &self.open {
            return Err(HarnessError::Docs(format!(
                "endpoint '{}' is still open, save it before opening '{title}'",
                open.title
            )));
        }
        self.open = Some(EndpointDoc {
            version: version.to_string(),
            tag: tag.to_string(),
            title: title.to_string(),
            calls: Vec::new(),
        });
        Ok(())
    }

    /// Sets the summary attached to the next recorded call.
    pub fn collect(&mut self, summary: &str) {
        self.pending_summary = summary.to_string();
    }

    /// Records one executed call under the open endpoint entry.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Docs`] when no endpoint entry is open.
    pub fn record_call(
        &mut self,
        method: &str,
        url: &str,
        status: u16,
        response: Option<Value>,
    ) -> Result<(), HarnessError> {
        let Some(open) = self.open.as_mut() else {
            return Err(HarnessError::Docs(format!(
                "no endpoint entry is open while recording {method} {url}"
            )));
        };
        open.calls.push(CallRecord {
            summary: std::mem::take(&mut self.pending_summary),
            method: method.to_string(),
            url: url.to_string(),
            status,
            response,
        });
        Ok(())
    }

    /// Finalizes the open endpoint entry.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Docs`] when no endpoint entry is open.
    pub fn save_endpoint(&mut self) -> Result<(), HarnessError> {
        match self.open.take() {
            Some(entry) => {
                self.entries.push(entry);
                Ok(())
            }
            None => Err(HarnessError::Docs("no endpoint entry is open to save".to_string())),
        }
    }

    /// Renders the documentation preview into `dir` and returns the path.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Docs`] when an endpoint is still open or the
    /// artifact cannot be written.
    pub fn render_preview(&self, dir: &Path) -> Result<PathBuf, HarnessError> {
        if let Some(open) = &self.open {
            return Err(HarnessError::Docs(format!(
                "endpoint '{}' is still open, save it before rendering",
                open.title
            )));
        }
        let rendered = self.render_markdown();
        fs::create_dir_all(dir)
            .map_err(|err| HarnessError::Docs(format!("cannot create {}: {err}", dir.display())))?;
        let path = dir.join(PREVIEW_FILE_NAME);
        fs::write(&path, rendered)
            .map_err(|err| HarnessError::Docs(format!("cannot write {}: {err}", path.display())))?;
        Ok(path)
    }

    /// Renders all finalized entries as Markdown.
    fn render_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str("# nordnotes API preview\n");
        for entry in &self.entries {
            let _ = write!(
                out,
                "\n## {} ({}, {})\n",
                entry.title, entry.tag, entry.version
            );
            for call in &entry.calls {
                if !call.summary.is_empty() {
                    let _ = write!(out, "\n### {}\n", call.summary);
                }
                let _ = write!(out, "\n`{} {}` -> {}\n", call.method, call.url, call.status);
                if let Some(response) = &call.response {
                    let pretty = serde_json::to_string_pretty(response)
                        .unwrap_or_else(|_| response.to_string());
                    let _ = write!(out, "\n```json\n{pretty}\n```\n");
                }
            }
        }
        out
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::expect_used,
        clippy::unwrap_used,
        reason = "Test-only assertions favor direct unwrap/expect for clarity."
    )]

    use serde_json::json;

    use super::DocContext;
    use super::PREVIEW_FILE_NAME;

    #[test]
    fn endpoint_scope_is_balanced() {
        let mut docs = DocContext::new();
        docs.new_endpoint("v1", "system", "System information").expect("open should succeed");
        assert!(docs.new_endpoint("v1", "system", "Another").is_err());
        docs.save_endpoint().expect("save should succeed");
        assert!(docs.save_endpoint().is_err());
        assert_eq!(docs.entries().len(), 1);
    }

    #[test]
    fn record_requires_open_endpoint() {
        let mut docs = DocContext::new();
        assert!(docs.record_call("GET", "http://x/api/v1/info", 200, None).is_err());
    }

    #[test]
    fn collect_attaches_summary_to_next_call_only() {
        let mut docs = DocContext::new();
        docs.new_endpoint("v1", "system", "System information").expect("open should succeed");
        docs.collect("System information");
        docs.record_call("GET", "http://x/api/v1/info", 200, None).expect("record");
        docs.record_call("GET", "http://x/api/v1/info", 200, None).expect("record");
        docs.save_endpoint().expect("save");
        let calls = &docs.entries()[0].calls;
        assert_eq!(calls[0].summary, "System information");
        assert!(calls[1].summary.is_empty());
    }

    #[test]
    fn clear_discards_everything() {
        let mut docs = DocContext::new();
        docs.new_endpoint("v1", "system", "System information").expect("open");
        docs.save_endpoint().expect("save");
        docs.clear();
        assert!(docs.entries().is_empty());
    }

    #[test]
    fn render_fails_while_endpoint_open() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut docs = DocContext::new();
        docs.new_endpoint("v1", "system", "System information").expect("open");
        assert!(docs.render_preview(dir.path()).is_err());
    }

    #[test]
    fn render_writes_deterministic_preview() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut docs = DocContext::new();
        docs.new_endpoint("v1", "system", "System information").expect("open");
        docs.collect("System information");
        docs.record_call(
            "GET",
            "http://0.0.0.0:8085/api/v1/info",
            200,
            Some(json!({"data": {"name": "nordnotes"}})),
        )
        .expect("record");
        docs.save_endpoint().expect("save");

        let path = docs.render_preview(dir.path()).expect("render should succeed");
        assert!(path.ends_with(PREVIEW_FILE_NAME));
        let rendered = std::fs::read_to_string(&path).expect("read preview");
        assert!(rendered.contains("# nordnotes API preview"));
        assert!(rendered.contains("## System information (system, v1)"));
        assert!(rendered.contains("`GET http://0.0.0.0:8085/api/v1/info` -> 200"));
        assert!(rendered.contains("\"name\": \"nordnotes\""));

        let again = docs.render_preview(dir.path()).expect("render twice");
        assert_eq!(std::fs::read_to_string(again).expect("read again"), rendered);
    }
}
