#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tokio::sync::{Mutex, Notify};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use scoreboard_api::config::{ServerConfig, StoreBackend};
use scoreboard_api::router::build_app_router;
use scoreboard_api::state::AppState;
use scoreboard_core::scoring::memory::{
    InMemoryFailStore, InMemoryPassStore, InMemorySubmissionStore,
};
use scoreboard_core::scoring::{
    ScoreService, ScoreSubmissionStore, StudentFailStore, StudentPassStore,
};
use scoreboard_events::{MessageBroker, MessageHandler, MessageProducer, TopicListener};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        messaging_topic: "score-topic".to_string(),
    }
}

/// In-memory stores kept by the test so it can inspect what was written.
pub struct TestStores {
    pub submissions: Arc<InMemorySubmissionStore>,
    pub passes: Arc<InMemoryPassStore>,
    pub fails: Arc<InMemoryFailStore>,
}

impl TestStores {
    pub fn new() -> Self {
        Self {
            submissions: Arc::new(InMemorySubmissionStore::new()),
            passes: Arc::new(InMemoryPassStore::new()),
            fails: Arc::new(InMemoryFailStore::new()),
        }
    }
}

/// Build the full application router over fresh in-memory stores.
pub fn build_test_app() -> (Router, TestStores) {
    let stores = TestStores::new();
    let app = build_app_with(
        stores.submissions.clone(),
        stores.passes.clone(),
        stores.fails.clone(),
    );
    (app, stores)
}

/// Build the full application router over arbitrary stores.
pub fn build_app_with(
    submissions: Arc<dyn ScoreSubmissionStore>,
    passes: Arc<dyn StudentPassStore>,
    fails: Arc<dyn StudentFailStore>,
) -> Router {
    let config = test_config();
    let broker = Arc::new(MessageBroker::default());
    let state = build_state(
        ScoreService::new(submissions, passes, fails),
        MessageProducer::new(broker),
    );
    build_app_router(state, &config)
}

/// Assemble an `AppState` around the test config.
pub fn build_state(score_service: ScoreService, producer: MessageProducer) -> AppState {
    AppState {
        config: Arc::new(test_config()),
        score_service: Arc::new(score_service),
        producer: Arc::new(producer),
    }
}

// ---------------------------------------------------------------------------
// Messaging
// ---------------------------------------------------------------------------

/// Handler that records every payload it receives.
#[derive(Default)]
pub struct RecordingHandler {
    pub received: Mutex<Vec<String>>,
    pub notify: Notify,
}

#[async_trait]
impl MessageHandler for RecordingHandler {
    async fn process(&self, message: &str) {
        self.received.lock().await.push(message.to_string());
        self.notify.notify_one();
    }
}

/// App state wired to a broker with a running listener on the score topic.
pub struct TestMessaging {
    pub state: AppState,
    pub handler: Arc<RecordingHandler>,
    pub cancel: CancellationToken,
    pub listener: JoinHandle<()>,
}

pub fn build_test_messaging() -> TestMessaging {
    let config = test_config();
    let stores = TestStores::new();
    let broker = Arc::new(MessageBroker::default());
    let handler = Arc::new(RecordingHandler::default());
    let cancel = CancellationToken::new();

    let listener = TopicListener::new("test-listener", config.messaging_topic, handler.clone());
    let listener = tokio::spawn(listener.run(broker.subscribe(), cancel.clone()));

    let state = build_state(
        ScoreService::new(stores.submissions, stores.passes, stores.fails),
        MessageProducer::new(broker),
    );

    TestMessaging {
        state,
        handler,
        cancel,
        listener,
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    put_raw(app, uri, body.to_string()).await
}

pub async fn put_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}
