// crates/nordnotes-harness/src/runner.rs
// ============================================================================
// Module: Suite Runner
// Description: Drives every suite once per configured API version.
// Purpose: Bracket suite execution between docs clear and preview render.
// Dependencies: nordnotes-harness client, config, context, docs, suites
// ============================================================================

//! ## Overview
//! The runner owns the run lifecycle: clear the documentation context, set
//! the context version, run the suites for that version, and only after
//! every version completed render the preview artifact. Versions are
//! processed one at a time because the shared context is mutated in place.

use std::path::PathBuf;

use crate::client::ApiClient;
use crate::config;
use crate::config::HarnessConfig;
use crate::context::Context;
use crate::docs::DocContext;
use crate::error::HarnessError;
use crate::output;
use crate::suites;

/// Runs every suite for every configured API version.
///
/// Returns the path of the rendered documentation preview.
///
/// # Errors
///
/// Propagates the first failure of any suite pass or of the preview
/// rendering; nothing is retried.
pub async fn run_all(config: &HarnessConfig) -> Result<PathBuf, HarnessError> {
    let client = ApiClient::new(config.timeout)?;
    let mut ctx = Context::new(config);
    let mut docs = DocContext::new();
    docs.clear();
    for version in config::API_VERSIONS {
        ctx.version = (*version).to_string();
        output::version_header(version);
        suites::service::run(&ctx, &client, &mut docs).await?;
    }
    let path = docs.render_preview(&config.docs_dir)?;
    output::stage(&format!("documentation preview written to {}", path.display()));
    Ok(path)
}
