// crates/nordnotes-harness/src/asserts.rs
// ============================================================================
// Module: Fatal Assertions
// Description: Equality assertions that abort the run on mismatch.
// Purpose: Compare decoded response fields against expected constants.
// Dependencies: nordnotes-harness error
// ============================================================================

//! ## Overview
//! Assertions return `Result` instead of panicking so that callers can
//! propagate with `?` and the CLI can map failures to a diagnostic and a
//! non-zero exit code. There is no retry: the first mismatch ends the run.

use crate::error::HarnessError;

/// Asserts that two strings are equal.
///
/// # Errors
///
/// Returns [`HarnessError::Assertion`] carrying the field name and both
/// values when they differ.
pub fn assert_equal_str(
    field: &'static str,
    expected: &str,
    actual: &str,
) -> Result<(), HarnessError> {
    if expected == actual {
        return Ok(());
    }
    Err(HarnessError::Assertion {
        field,
        expected: expected.to_string(),
        actual: actual.to_string(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        clippy::panic,
        reason = "Test-only assertions favor direct unwrap/panic for clarity."
    )]

    use super::assert_equal_str;
    use crate::error::HarnessError;

    #[test]
    fn equal_values_pass() {
        assert!(assert_equal_str("name", "nordnotes", "nordnotes").is_ok());
    }

    #[test]
    fn mismatch_reports_field_and_values() {
        let err = assert_equal_str("version", "1.0.0", "2.0.0").unwrap_err();
        match err {
            HarnessError::Assertion {
                field,
                expected,
                actual,
            } => {
                assert_eq!(field, "version");
                assert_eq!(expected, "1.0.0");
                assert_eq!(actual, "2.0.0");
            }
            other => panic!("unexpected error class: {other}"),
        }
    }
}
