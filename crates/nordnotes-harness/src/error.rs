// crates/nordnotes-harness/src/error.rs
// ============================================================================
// Module: Harness Errors
// Description: Error taxonomy for the nordnotes test harness.
// Purpose: Classify configuration, transport, content, and docs failures.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Every failure class the harness can hit maps onto one variant. There is
//! no recovery path: callers propagate with `?` and the run aborts at the
//! first error, matching the fail-fast contract of the suite.

use thiserror::Error;

/// Errors raised while running the harness.
///
/// # Invariants
/// - Variant meanings are stable for tests asserting on failure classes.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Invalid environment or configuration value.
    #[error("configuration error: {0}")]
    Config(String),
    /// The request could not be sent or completed.
    #[error("transport error for {url}: {message}")]
    Transport {
        /// Request URL.
        url: String,
        /// Underlying transport failure description.
        message: String,
    },
    /// The response status differed from the expected status.
    #[error("unexpected status for {url}: expected {expected}, got {actual}: {body}")]
    Status {
        /// Request URL.
        url: String,
        /// Status the test case expected.
        expected: u16,
        /// Status the service returned.
        actual: u16,
        /// Response body captured for diagnosis.
        body: String,
    },
    /// The response body was not valid JSON for the target type.
    #[error("decode error for {url}: {message}")]
    Decode {
        /// Request URL.
        url: String,
        /// Underlying decode failure description.
        message: String,
    },
    /// A field value differed from the expected constant.
    #[error("assertion failed for {field}: expected '{expected}', got '{actual}'")]
    Assertion {
        /// Logical name of the compared field.
        field: &'static str,
        /// Expected value.
        expected: String,
        /// Actual value.
        actual: String,
    },
    /// Documentation context misuse or artifact write failure.
    #[error("docs error: {0}")]
    Docs(String),
}
