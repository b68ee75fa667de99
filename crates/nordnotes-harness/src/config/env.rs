// crates/nordnotes-harness/src/config/env.rs
// ============================================================================
// Module: Harness Environment
// Description: Environment-backed configuration for the nordnotes harness.
// Purpose: Centralize defaults and env parsing with strict UTF-8 validation.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid
//! silent misconfiguration. Invalid UTF-8, empty values, zero timeouts, and
//! unrecognized boolean literals all fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default base URL of the nordnotes service under test.
pub const DEFAULT_BASE_URL: &str = "http://0.0.0.0:8085";

/// API versions exercised by the suite runner, in execution order.
pub const API_VERSIONS: &[&str] = &["v1"];

/// URL mapping prefix shared by every versioned REST endpoint.
pub const MAPPING_API_REST: &str = "/api/{apiVersion}";

/// Default request timeout when no override is set.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default directory receiving the rendered documentation preview.
const DEFAULT_DOCS_DIR: &str = "target/api-docs";

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for harness configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarnessEnv {
    /// Optional base URL override for the service under test.
    BaseUrl,
    /// Optional bearer token sent with every request.
    Token,
    /// Optional timeout override in seconds (positive integer).
    TimeoutSeconds,
    /// Verbose request/response dumps (`true`/`false` or `1`/`0`).
    Verbose,
    /// Optional directory override for the documentation preview.
    DocsDir,
}

impl HarnessEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "NORDNOTES_TESTS_BASE_URL",
            Self::Token => "NORDNOTES_TESTS_TOKEN",
            Self::TimeoutSeconds => "NORDNOTES_TESTS_TIMEOUT_SEC",
            Self::Verbose => "NORDNOTES_TESTS_VERBOSE",
            Self::DocsDir => "NORDNOTES_TESTS_DOCS_DIR",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed harness configuration derived from defaults and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Base URL of the service under test.
    pub base_url: String,
    /// Bearer token sent with every request; empty means no header.
    pub token: String,
    /// Request timeout applied by the HTTP client.
    pub timeout: Duration,
    /// Whether request/response details are printed.
    pub verbose: bool,
    /// Directory receiving the rendered documentation preview.
    pub docs_dir: PathBuf,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: String::new(),
            timeout: DEFAULT_TIMEOUT,
            verbose: false,
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
        }
    }
}

impl HarnessConfig {
    /// Loads configuration from compile-time defaults and env overrides.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is
    /// empty, or fails validation (for example, an invalid timeout or
    /// boolean value).
    pub fn load() -> Result<Self, String> {
        let mut config = Self::default();
        if let Some(base_url) = read_env_nonempty(HarnessEnv::BaseUrl.as_str())? {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(token) = read_env_nonempty(HarnessEnv::Token.as_str())? {
            config.token = token;
        }
        if let Some(raw) = read_env_nonempty(HarnessEnv::TimeoutSeconds.as_str())? {
            config.timeout = parse_timeout_seconds(HarnessEnv::TimeoutSeconds.as_str(), &raw)?;
        }
        config.verbose = parse_bool_env(
            HarnessEnv::Verbose.as_str(),
            read_env_nonempty(HarnessEnv::Verbose.as_str())?,
        )?;
        if let Some(dir) = read_env_nonempty(HarnessEnv::DocsDir.as_str())? {
            config.docs_dir = PathBuf::from(dir);
        }
        Ok(config)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}

/// Parses a boolean environment variable with permissive defaults.
///
/// # Errors
///
/// Returns an error when the value is not a recognized boolean literal.
fn parse_bool_env(name: &str, raw: Option<String>) -> Result<bool, String> {
    let Some(value) = raw else {
        return Ok(false);
    };
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        return Ok(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        return Ok(false);
    }
    Err(format!("{name} must be 1, 0, true, or false"))
}
