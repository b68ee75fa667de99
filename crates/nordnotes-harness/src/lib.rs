// crates/nordnotes-harness/src/lib.rs
// ============================================================================
// Module: Nordnotes Harness Library
// Description: End-to-end HTTP test harness for the nordnotes service.
// Purpose: Issue requests, assert response content, and accumulate API docs.
// Dependencies: reqwest, serde, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! This crate drives end-to-end checks against a running nordnotes service
//! and generates an API documentation preview from the same executions. The
//! pieces are deliberately narrow: a typed configuration, a per-run mutable
//! [`Context`], an HTTP helper that verifies status and decodes JSON, fatal
//! equality assertions, and a [`DocContext`] accumulator rendered to a
//! Markdown artifact after the suite completes.
//!
//! ## Invariants
//! - Execution is strictly sequential; later cases observe every context
//!   mutation made by earlier steps.
//! - Any transport, status, decode, or assertion failure aborts the run.
//! - `Context::version` must be set before a test case executes.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod asserts;
pub mod client;
pub mod config;
pub mod context;
pub mod docs;
pub mod dto;
pub mod error;
pub mod output;
pub mod runner;
pub mod suites;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use client::ApiClient;
pub use config::HarnessConfig;
pub use context::Context;
pub use docs::DocContext;
pub use error::HarnessError;
