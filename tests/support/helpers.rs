// tests/support/helpers.rs
use super::mocks::{
    InMemoryAnalytics, InMemoryArticleRepo, RecordingPublisher, ScriptedContentAnalyzer,
    ScriptedFactChecker, SequentialIds, SteppingClock,
};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use reality_filter::application::ports::cache::ArticleCache;
use reality_filter::application::services::ApplicationServices;
use reality_filter::infrastructure::cache::InMemoryArticleCache;
use reality_filter::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Wires the application services over in-memory adapters and keeps handles
/// to each of them for assertions.
pub struct TestHarness {
    pub repo: Arc<InMemoryArticleRepo>,
    pub cache: Arc<dyn ArticleCache>,
    pub analyzer: Arc<ScriptedContentAnalyzer>,
    pub fact_checker: Arc<ScriptedFactChecker>,
    pub publisher: Arc<RecordingPublisher>,
    pub analytics: Arc<InMemoryAnalytics>,
    pub clock: Arc<SteppingClock>,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self {
            repo: Arc::new(InMemoryArticleRepo::new()),
            cache: Arc::new(InMemoryArticleCache::default()),
            analyzer: Arc::new(ScriptedContentAnalyzer::default()),
            fact_checker: Arc::new(ScriptedFactChecker::default()),
            publisher: Arc::new(RecordingPublisher::new()),
            analytics: Arc::new(InMemoryAnalytics::new()),
            clock: Arc::new(SteppingClock::new()),
        }
    }
}

impl TestHarness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_analyzer(mut self, analyzer: ScriptedContentAnalyzer) -> Self {
        self.analyzer = Arc::new(analyzer);
        self
    }

    pub fn with_fact_checker(mut self, checker: ScriptedFactChecker) -> Self {
        self.fact_checker = Arc::new(checker);
        self
    }

    pub fn with_cache(mut self, cache: Arc<dyn ArticleCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_publisher(mut self, publisher: RecordingPublisher) -> Self {
        self.publisher = Arc::new(publisher);
        self
    }

    pub fn services(&self) -> ApplicationServices {
        ApplicationServices::new(
            self.repo.clone(),
            Arc::clone(&self.cache),
            self.analyzer.clone(),
            self.fact_checker.clone(),
            self.publisher.clone(),
            self.analytics.clone(),
            self.clock.clone(),
            Arc::new(SequentialIds::default()),
        )
    }

    pub fn router(&self) -> axum::Router {
        build_router_with_rate_limiter(HttpState::new(self.services()), false)
    }
}

pub fn make_test_router() -> axum::Router {
    TestHarness::new().router()
}

/// Sends one request through a clone of `app`.
pub async fn send(app: &axum::Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Submits an article through the API and returns its id.
pub async fn create_via_api(app: &axum::Router, payload: Value) -> String {
    let resp = send(app, Method::POST, "/api/v1/articles", Some(payload)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = read_json(resp).await;
    json["articleId"].as_str().expect("articleId").to_string()
}

pub fn article_payload(title: &str, source: &str, tags: &[&str]) -> Value {
    serde_json::json!({
        "title": title,
        "content": "The city council approved the new transit budget on Monday.",
        "source": source,
        "author": "Staff Reporter",
        "tags": tags,
    })
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
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
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
