// crates/nordnotes-harness/src/suites/service.rs
// ============================================================================
// Module: Service Suite
// Description: Tests for the nordnotes service-info endpoint.
// Purpose: Verify system identity metadata and document the endpoint.
// Dependencies: nordnotes-harness client, docs, dto, asserts
// ============================================================================

//! ## Overview
//! The service suite covers the `system` documentation tag. It currently
//! holds one endpoint, service information, and exists as the extension
//! point for further endpoints under the same tag. The call chain is
//! suite -> definition -> case: the definition brackets its cases between
//! `new_endpoint` and `save_endpoint`, so each endpoint's documentation is
//! finalized exactly once regardless of how many cases run inside.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::asserts::assert_equal_str;
use crate::client::ApiClient;
use crate::context::Context;
use crate::docs::DocContext;
use crate::dto::ServiceInfoResult;
use crate::error::HarnessError;
use crate::output;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Path template of the service-info endpoint.
pub const SERVICE_INFO_PATH: &str = "/api/{apiVersion}/info";

/// Documentation tag grouping system endpoints.
pub const SERVICE_DOC_TAG: &str = "system";

/// Expected service name.
pub const SERVICE_NAME: &str = "nordnotes";

/// Expected service version.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Expected legal note.
pub const SERVICE_LEGAL_NOTE: &str = "Copyright © 2022 Dariusz Depta Engos Software";

// ============================================================================
// SECTION: Suite
// ============================================================================

/// Runs every endpoint test of the service group.
///
/// # Errors
///
/// Propagates the first transport, status, decode, assertion, or docs
/// failure; the run aborts at that point.
pub async fn run(
    ctx: &Context,
    client: &ApiClient,
    docs: &mut DocContext,
) -> Result<(), HarnessError> {
    output::stage("suite: service");
    document_service_info(ctx, client, docs).await
}

/// Documents the service-info endpoint around its test cases.
async fn document_service_info(
    ctx: &Context,
    client: &ApiClient,
    docs: &mut DocContext,
) -> Result<(), HarnessError> {
    output::stage("endpoint: system information");
    docs.new_endpoint(&ctx.version, SERVICE_DOC_TAG, "System information")?;
    check_service_info(ctx, client, docs).await?;
    docs.save_endpoint()
}

/// Fetches the service-info endpoint and asserts its content.
async fn check_service_info(
    ctx: &Context,
    client: &ApiClient,
    docs: &mut DocContext,
) -> Result<(), HarnessError> {
    output::stage("case: service info");
    docs.collect("System information");
    let result: ServiceInfoResult = client.get_json(ctx, docs, SERVICE_INFO_PATH, 200).await?;
    assert_service_info(&result)?;
    output::ok();
    Ok(())
}

/// Asserts the decoded service-info fields against the expected constants.
///
/// A missing `data` object compares as empty strings and therefore fails
/// on the first field.
///
/// # Errors
///
/// Returns [`HarnessError::Assertion`] for the first mismatching field.
pub fn assert_service_info(result: &ServiceInfoResult) -> Result<(), HarnessError> {
    let data = result.data.clone().unwrap_or_default();
    assert_equal_str("data.name", SERVICE_NAME, &data.name)?;
    assert_equal_str("data.version", SERVICE_VERSION, &data.version)?;
    assert_equal_str("data.legalNote", SERVICE_LEGAL_NOTE, &data.legal_note)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::SERVICE_INFO_PATH;
    use super::SERVICE_LEGAL_NOTE;
    use super::SERVICE_NAME;
    use super::SERVICE_VERSION;
    use super::assert_service_info;
    use crate::config::MAPPING_API_REST;
    use crate::dto::ServiceInfoDto;
    use crate::dto::ServiceInfoResult;

    fn golden() -> ServiceInfoResult {
        ServiceInfoResult {
            data: Some(ServiceInfoDto {
                name: SERVICE_NAME.to_string(),
                version: SERVICE_VERSION.to_string(),
                legal_note: SERVICE_LEGAL_NOTE.to_string(),
            }),
            errors: None,
        }
    }

    #[test]
    fn path_extends_the_shared_mapping() {
        assert!(SERVICE_INFO_PATH.starts_with(MAPPING_API_REST));
    }

    #[test]
    fn golden_response_passes() {
        assert!(assert_service_info(&golden()).is_ok());
    }

    #[test]
    fn any_field_deviation_fails() {
        let mut wrong_name = golden();
        if let Some(data) = wrong_name.data.as_mut() {
            data.name = "othernotes".to_string();
        }
        assert!(assert_service_info(&wrong_name).is_err());

        let mut wrong_version = golden();
        if let Some(data) = wrong_version.data.as_mut() {
            data.version = "1.0.1".to_string();
        }
        assert!(assert_service_info(&wrong_version).is_err());

        let mut wrong_note = golden();
        if let Some(data) = wrong_note.data.as_mut() {
            data.legal_note = "All rights reserved".to_string();
        }
        assert!(assert_service_info(&wrong_note).is_err());
    }

    #[test]
    fn missing_data_fails_on_first_field() {
        let result = ServiceInfoResult {
            data: None,
            errors: None,
        };
        assert!(assert_service_info(&result).is_err());
    }
}
