// crates/nordnotes-harness/src/context.rs
// ============================================================================
// Module: Run Context
// Description: Mutable per-run aggregate threaded through every test call.
// Purpose: Carry the target URL, credentials, and the active API version.
// Dependencies: nordnotes-harness config
// ============================================================================

//! ## Overview
//! One [`Context`] is constructed at process start from [`HarnessConfig`]
//! and passed by reference through the whole call chain. The suite runner
//! overwrites [`Context::version`] before each suite pass; execution is
//! strictly sequential, so no synchronization is required.

use crate::config::HarnessConfig;

/// Mutable run context shared by every test case.
///
/// # Invariants
/// - `version` must be non-empty before any test case executes; the HTTP
///   helper fails closed otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// Base URL of the service under test.
    pub base_url: String,
    /// Authorization token; empty means no `Authorization` header.
    pub token: String,
    /// Login of the acting user, when a scenario authenticates.
    pub login: String,
    /// Name of the acting user's role.
    pub role_name: String,
    /// Whether request/response details are printed.
    pub verbose: bool,
    /// Version of the called API, reassigned per runner iteration.
    pub version: String,
}

impl Context {
    /// Builds a fresh context for one harness run.
    #[must_use]
    pub fn new(config: &HarnessConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            token: config.token.clone(),
            login: String::new(),
            role_name: String::new(),
            verbose: config.verbose,
            version: String::new(),
        }
    }
}
