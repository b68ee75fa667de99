// crates/nordnotes-harness/tests/service_info.rs
// ============================================================================
// Module: Service Info End-to-End Tests
// Description: Runs the full harness against an in-process nordnotes stub.
// Purpose: Cover the golden path, content mismatches, and failure classes.
// Dependencies: axum, nordnotes-harness, tempfile, tokio
// ============================================================================

//! ## Overview
//! Each test spawns an axum stub serving `GET /api/{version}/info`, points
//! the harness at it, and drives the whole runner. Invariants:
//! - A golden response completes the run and renders the preview once.
//! - Any single-field deviation aborts the run before the preview exists.
//! - The stub observes exactly one request per configured API version.

#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::panic,
    reason = "Test-only assertions favor direct unwrap/expect for clarity."
)]

use std::net::TcpListener as StdTcpListener;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use nordnotes_harness::HarnessConfig;
use nordnotes_harness::HarnessError;
use nordnotes_harness::docs::PREVIEW_FILE_NAME;
use nordnotes_harness::runner::run_all;
use nordnotes_harness::suites::service::SERVICE_LEGAL_NOTE;
use nordnotes_harness::suites::service::SERVICE_NAME;
use nordnotes_harness::suites::service::SERVICE_VERSION;
use serde_json::Value;
use serde_json::json;
use tokio::task::JoinHandle;

/// Shared state of the stub service.
#[derive(Clone)]
struct StubState {
    /// Status returned by the info route.
    status: StatusCode,
    /// Body returned by the info route.
    body: Value,
    /// API versions observed in request paths, in arrival order.
    versions_seen: Arc<Mutex<Vec<String>>>,
}

/// Handle for a spawned nordnotes stub.
struct StubHandle {
    /// Base URL of the stub.
    base_url: String,
    /// API versions observed in request paths, in arrival order.
    versions_seen: Arc<Mutex<Vec<String>>>,
    /// Server task, aborted on shutdown.
    join: JoinHandle<()>,
}

impl StubHandle {
    /// Returns the observed API versions.
    fn versions_seen(&self) -> Vec<String> {
        self.versions_seen.lock().expect("stub state lock poisoned").clone()
    }

    /// Shuts down the server task.
    async fn shutdown(self) {
        self.join.abort();
        let _ = self.join.await;
    }
}

/// Serves one info request and records the interpolated version.
async fn info_route(
    Path(version): Path<String>,
    State(state): State<StubState>,
) -> impl IntoResponse {
    state.versions_seen.lock().expect("stub state lock poisoned").push(version);
    (state.status, Json(state.body.clone()))
}

/// Spawns a stub serving `GET /api/{version}/info`.
async fn spawn_info_stub(status: StatusCode, body: Value) -> StubHandle {
    let versions_seen = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        status,
        body,
        versions_seen: Arc::clone(&versions_seen),
    };
    let app = Router::new().route("/api/{version}/info", get(info_route)).with_state(state);
    let listener =
        tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("failed to bind loopback");
    let addr = listener.local_addr().expect("failed to read listener address");
    let join = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    StubHandle {
        base_url: format!("http://{addr}"),
        versions_seen,
        join,
    }
}

/// Builds a harness config pointed at the stub and a temp docs dir.
fn stub_config(base_url: &str, docs_dir: &std::path::Path) -> HarnessConfig {
    HarnessConfig {
        base_url: base_url.to_string(),
        token: String::new(),
        timeout: Duration::from_secs(5),
        verbose: false,
        docs_dir: docs_dir.to_path_buf(),
    }
}

/// The golden service-info body.
fn golden_body() -> Value {
    json!({
        "data": {
            "name": SERVICE_NAME,
            "version": SERVICE_VERSION,
            "legalNote": SERVICE_LEGAL_NOTE,
        }
    })
}

#[tokio::test]
async fn golden_run_renders_preview_once() {
    let stub = spawn_info_stub(StatusCode::OK, golden_body()).await;
    let docs_dir = tempfile::tempdir().expect("tempdir");
    let config = stub_config(&stub.base_url, docs_dir.path());

    let path = run_all(&config).await.expect("golden run should succeed");
    assert!(path.ends_with(PREVIEW_FILE_NAME));
    let rendered = std::fs::read_to_string(&path).expect("preview should exist");
    assert!(rendered.contains("## System information (system, v1)"));
    assert!(rendered.contains("/api/v1/info` -> 200"));

    // One suite pass per configured version, version threaded into the URL.
    assert_eq!(stub.versions_seen(), vec!["v1".to_string()]);
    stub.shutdown().await;
}

#[tokio::test]
async fn field_mismatch_aborts_before_preview() {
    let mut body = golden_body();
    body["data"]["version"] = json!("2.0.0");
    let stub = spawn_info_stub(StatusCode::OK, body).await;
    let docs_dir = tempfile::tempdir().expect("tempdir");
    let config = stub_config(&stub.base_url, docs_dir.path());

    let err = run_all(&config).await.expect_err("mismatch must abort the run");
    assert!(matches!(
        err,
        HarnessError::Assertion {
            field: "data.version",
            ..
        }
    ));
    assert!(!docs_dir.path().join(PREVIEW_FILE_NAME).exists());
    stub.shutdown().await;
}

#[tokio::test]
async fn error_envelope_fails_the_first_assertion() {
    let body = json!({"errors": [{"details": "service unavailable"}]});
    let stub = spawn_info_stub(StatusCode::OK, body).await;
    let docs_dir = tempfile::tempdir().expect("tempdir");
    let config = stub_config(&stub.base_url, docs_dir.path());

    let err = run_all(&config).await.expect_err("error envelope must abort the run");
    assert!(matches!(
        err,
        HarnessError::Assertion {
            field: "data.name",
            ..
        }
    ));
    stub.shutdown().await;
}

#[tokio::test]
async fn unexpected_status_aborts_the_run() {
    let stub = spawn_info_stub(StatusCode::SERVICE_UNAVAILABLE, golden_body()).await;
    let docs_dir = tempfile::tempdir().expect("tempdir");
    let config = stub_config(&stub.base_url, docs_dir.path());

    let err = run_all(&config).await.expect_err("non-200 must abort the run");
    match err {
        HarnessError::Status {
            expected,
            actual,
            ..
        } => {
            assert_eq!(expected, 200);
            assert_eq!(actual, 503);
        }
        other => panic!("unexpected error class: {other}"),
    }
    stub.shutdown().await;
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    // Bind and drop a listener to obtain a port nothing is serving on.
    let listener = StdTcpListener::bind("127.0.0.1:0").expect("failed to bind loopback");
    let addr = listener.local_addr().expect("failed to read listener address");
    drop(listener);

    let docs_dir = tempfile::tempdir().expect("tempdir");
    let config = stub_config(&format!("http://{addr}"), docs_dir.path());

    let err = run_all(&config).await.expect_err("unreachable service must abort the run");
    assert!(matches!(err, HarnessError::Transport { .. }));
}
