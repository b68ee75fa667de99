// crates/nordnotes-harness/src/dto.rs
// ============================================================================
// Module: Wire DTOs
// Description: Data-transfer objects mirroring the nordnotes JSON contract.
// Purpose: Decode service responses into typed records for assertions.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! These records mirror the service's JSON contract exactly. Successful
//! responses populate `data`; failing responses populate `errors`. The
//! harness does not enforce that exclusivity, it only asserts on the
//! decoded values.

use serde::Deserialize;

/// One element of the error list returned by a failing request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorDto {
    /// Human-readable failure detail.
    pub details: String,
}

/// Body of a successful service-info response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceInfoDto {
    /// Name of the system.
    pub name: String,
    /// Version of the system.
    pub version: String,
    /// Legal note.
    #[serde(rename = "legalNote")]
    pub legal_note: String,
}

/// Envelope of the service-info endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceInfoResult {
    /// Data object with system information, present on success.
    #[serde(default)]
    pub data: Option<ServiceInfoDto>,
    /// List of errors when the request fails.
    #[serde(default)]
    pub errors: Option<Vec<ErrorDto>>,
}
