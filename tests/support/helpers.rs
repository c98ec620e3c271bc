// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use fude_core::application::ports::generation::{ContentProvider, ContentSynthesizer};
use fude_core::application::services::{ApplicationServices, DEFAULT_PROVIDER_TIMEOUT};
use fude_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use fude_core::infrastructure::{
    database,
    repositories::{SqliteArticleReadRepository, SqliteArticleWriteRepository},
    util::DefaultSlugGenerator,
};
use fude_core::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tower::ServiceExt as _;

/// Fresh in-memory store with migrations applied.
pub async fn sqlite_repos() -> (Arc<dyn ArticleWriteRepository>, Arc<dyn ArticleReadRepository>) {
    let pool = database::init_pool("sqlite::memory:")
        .await
        .expect("in-memory sqlite pool");
    database::run_migrations(&pool).await.expect("migrations");
    (
        Arc::new(SqliteArticleWriteRepository::new(pool.clone())),
        Arc::new(SqliteArticleReadRepository::new(pool)),
    )
}

/// Wiring for one test. Defaults: in-memory sqlite, offline mode, fixed clock.
pub struct TestServices {
    pub write_repo: Option<Arc<dyn ArticleWriteRepository>>,
    pub read_repo: Option<Arc<dyn ArticleReadRepository>>,
    pub provider: Option<Arc<dyn ContentProvider>>,
    pub synthesizer: Arc<dyn ContentSynthesizer>,
    pub provider_timeout: Duration,
}

impl Default for TestServices {
    fn default() -> Self {
        Self {
            write_repo: None,
            read_repo: None,
            provider: None,
            synthesizer: Arc::new(mocks::CountingSynthesizer::new()),
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }
}

impl TestServices {
    pub async fn build(self) -> Arc<ApplicationServices> {
        let (sqlite_write, sqlite_read) = sqlite_repos().await;
        Arc::new(ApplicationServices::new(
            self.write_repo.unwrap_or(sqlite_write),
            self.read_repo.unwrap_or(sqlite_read),
            self.provider,
            self.synthesizer,
            Arc::new(mocks::FixedClock),
            Arc::new(DefaultSlugGenerator),
            self.provider_timeout,
        ))
    }
}

pub fn router_for(services: Arc<ApplicationServices>) -> axum::Router {
    let options = RouterOptions {
        rate_limit: false,
        ..RouterOptions::default()
    };
    build_router(HttpState { services }, options)
}

pub async fn make_test_router() -> axum::Router {
    router_for(TestServices::default().build().await)
}

/// Sends one request through the router and decodes the JSON body (Null when empty).
pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}
