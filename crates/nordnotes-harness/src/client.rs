// crates/nordnotes-harness/src/client.rs
// ============================================================================
// Module: API Client
// Description: HTTP helper issuing requests against the nordnotes service.
// Purpose: Interpolate versioned URLs, verify status, and decode JSON bodies.
// Dependencies: reqwest, serde, serde_json, url
// ============================================================================

//! ## Overview
//! One [`ApiClient`] wraps a configured `reqwest::Client` for the whole run.
//! Every request interpolates the active API version from the [`Context`],
//! attaches the bearer token when one is set, records the call into the
//! [`DocContext`], verifies the expected status, and decodes the body into
//! the caller's DTO. There are no retries: any failure is fatal.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::context::Context;
use crate::docs::DocContext;
use crate::error::HarnessError;
use crate::output;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Placeholder interpolated with the active API version.
const VERSION_PLACEHOLDER: &str = "{apiVersion}";

/// Substitutes the API version placeholder in an endpoint path.
///
/// # Errors
///
/// Returns [`HarnessError::Config`] when the version is empty, since the
/// URL template cannot be resolved without it.
pub fn interpolate_version(path: &str, version: &str) -> Result<String, HarnessError> {
    if version.is_empty() {
        return Err(HarnessError::Config(
            "context version must be set before issuing requests".to_string(),
        ));
    }
    Ok(path.replace(VERSION_PLACEHOLDER, version))
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// HTTP client shared by every test case of one run.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Underlying reqwest client carrying the configured timeout.
    http: reqwest::Client,
}

impl ApiClient {
    /// Builds an API client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`] when the underlying client cannot
    /// be constructed.
    pub fn new(timeout: Duration) -> Result<Self, HarnessError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| HarnessError::Config(format!("cannot build http client: {err}")))?;
        Ok(Self {
            http,
        })
    }

    /// Issues a GET request, verifies the status, and decodes the body.
    ///
    /// The call is recorded into the documentation context before the
    /// status check, so failing calls still appear in the preview input.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`] for an unset version or invalid
    /// URL, [`HarnessError::Transport`] when the request fails,
    /// [`HarnessError::Status`] on an unexpected status, and
    /// [`HarnessError::Decode`] when the body does not decode into `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        docs: &mut DocContext,
        path: &str,
        expected_status: u16,
    ) -> Result<T, HarnessError> {
        let interpolated = interpolate_version(path, &ctx.version)?;
        let url = Url::parse(&format!("{}{interpolated}", ctx.base_url))
            .map_err(|err| HarnessError::Config(format!("invalid request URL: {err}")))?;
        if ctx.verbose {
            output::stage(&format!("> GET {url}"));
        }
        let mut request = self.http.get(url.clone());
        if !ctx.token.is_empty() {
            request = request.bearer_auth(&ctx.token);
        }
        let response = request.send().await.map_err(|err| HarnessError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        })?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|err| HarnessError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        })?;
        if ctx.verbose {
            output::stage(&format!("< {status} {}", String::from_utf8_lossy(&bytes)));
        }
        let body_value = serde_json::from_slice::<Value>(&bytes).ok();
        docs.record_call("GET", url.as_str(), status, body_value)?;
        if status != expected_status {
            return Err(HarnessError::Status {
                url: url.to_string(),
                expected: expected_status,
                actual: status,
                body: String::from_utf8_lossy(&bytes).to_string(),
            });
        }
        serde_json::from_slice(&bytes).map_err(|err| HarnessError::Decode {
            url: url.to_string(),
            message: err.to_string(),
        })
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
