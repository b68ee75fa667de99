// crates/nordnotes-harness/src/config/mod.rs
// ============================================================================
// Module: Harness Configuration
// Description: Centralized configuration for the nordnotes test harness.
// Purpose: Provide typed access to harness settings and defaults.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Harness configuration is a single authoritative source: compile-time
//! defaults plus strict environment overrides mapped into a typed structure
//! constructed once at process start. No package-level mutable state exists.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod env;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use env::API_VERSIONS;
pub use env::DEFAULT_BASE_URL;
pub use env::HarnessConfig;
pub use env::HarnessEnv;
pub use env::MAPPING_API_REST;
pub use env::read_env_strict;
