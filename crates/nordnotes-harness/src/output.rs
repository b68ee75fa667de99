// crates/nordnotes-harness/src/output.rs
// ============================================================================
// Module: Output Helpers
// Description: Explicit stdout/stderr writers for harness progress lines.
// Purpose: Route all user-facing output through lint-clean io helpers.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Progress output is best-effort: a failed write to stdout must never abort
//! a test run, so the convenience helpers swallow io errors. The raw line
//! writers are exposed for callers that want to handle failures themselves.

use std::io::Write;

/// Writes a single line to stdout.
///
/// # Errors
///
/// Returns an error when the write to stdout fails.
pub fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
///
/// # Errors
///
/// Returns an error when the write to stderr fails.
pub fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Prints a progress trace line for one stage of the call chain.
pub fn stage(label: &str) {
    let _ = write_stdout_line(label);
}

/// Prints the version header for one suite pass.
pub fn version_header(version: &str) {
    let _ = write_stdout_line(&format!("===== API {version} ====="));
}

/// Prints the confirmation line closing a successful test case.
pub fn ok() {
    let _ = write_stdout_line("OK");
}
