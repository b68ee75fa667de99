// crates/nordnotes-harness-cli/src/main.rs
// ============================================================================
// Module: Harness CLI Entry Point
// Description: Argument handling and dispatch for the nordnotes test harness.
// Purpose: Run the full suite on `ALL`, report misuse without running tests.
// Dependencies: clap, nordnotes-harness, tokio
// ============================================================================

//! ## Overview
//! The binary takes one positional argument. `ALL` runs every suite against
//! the configured service and renders the documentation preview. Zero
//! arguments, surplus arguments, or an unrecognized value never attempt an
//! HTTP call: argument handling is a pure planning step, and only the
//! [`Action::RunAll`] plan touches the network. A suite failure exits
//! non-zero with the error on stderr; misuse keeps exit code 0.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use nordnotes_harness::HarnessConfig;
use nordnotes_harness::output::write_stderr_line;
use nordnotes_harness::output::write_stdout_line;
use nordnotes_harness::runner;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Message printed when the argument list does not select a run.
const USAGE_MESSAGE: &str = "no input arguments specified";

/// Argument value selecting the full suite.
const RUN_ALL: &str = "ALL";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Command-line arguments of the harness.
#[derive(Debug, Parser)]
#[command(name = "nordnotes-tests", about = "End-to-end test harness for the nordnotes service")]
struct Cli {
    /// Test selection; `ALL` runs every suite.
    target: Option<String>,
}

/// Action planned from the argument list before anything executes.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    /// Run every suite.
    RunAll,
    /// Print the usage message and exit cleanly.
    Usage,
    /// Print rendered help or version text and exit cleanly.
    Help(String),
    /// Unrecognized selection: run nothing and exit cleanly.
    Nothing,
}

/// Plans the action for an argument list, without side effects.
fn plan(args: &[String]) -> Action {
    match Cli::try_parse_from(args) {
        Ok(cli) => match cli.target.as_deref() {
            Some(RUN_ALL) => Action::RunAll,
            Some(_) => Action::Nothing,
            None => Action::Usage,
        },
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Action::Help(err.to_string())
        }
        Err(_) => Action::Usage,
    }
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    match plan(&args) {
        Action::RunAll => match run_suites().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(message) => emit_error(&message),
        },
        Action::Usage => {
            let _ = write_stdout_line(USAGE_MESSAGE);
            ExitCode::SUCCESS
        }
        Action::Help(text) => {
            let _ = write_stdout_line(&text);
            ExitCode::SUCCESS
        }
        Action::Nothing => ExitCode::SUCCESS,
    }
}

/// Loads the configuration and drives the suite runner.
async fn run_suites() -> Result<(), String> {
    let config = HarnessConfig::load()?;
    runner::run_all(&config).await.map_err(|err| err.to_string())?;
    Ok(())
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
