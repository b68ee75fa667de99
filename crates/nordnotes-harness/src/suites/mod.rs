// crates/nordnotes-harness/src/suites/mod.rs
// ============================================================================
// Module: Test Suites
// Description: Logical service groups exercised by the suite runner.
// Purpose: Collect per-service suite entry points under one namespace.
// Dependencies: nordnotes-harness client, docs
// ============================================================================

//! ## Overview
//! One module per logical service. Each suite is an async function taking
//! the run [`crate::Context`], the shared [`crate::ApiClient`], and the
//! [`crate::DocContext`]; new endpoints join the suite of the service that
//! owns them.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod service;
