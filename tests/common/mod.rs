#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use movie_explorer::{
    AppState,
    config::{Config, DEFAULT_GROQ_API_URL, DEFAULT_SUMMARY_MODEL},
    db,
    store::MovieStore,
    summary::{SummaryError, SummaryProvider},
};

/// Records every prompt and answers with a canned reply, or fails when `reply` is `None`.
pub struct StubSummarizer {
    pub prompts: Mutex<Vec<String>>,
    reply: Option<String>,
}

#[async_trait]
impl SummaryProvider for StubSummarizer {
    async fn complete(&self, prompt: &str) -> Result<String, SummaryError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or(SummaryError::EmptyResponse)
    }
}

pub struct TestApp {
    pub store: MovieStore,
    pub summarizer: Arc<StubSummarizer>,
    state: Arc<AppState>,
    _dir: tempfile::TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_reply(Some("A mind-bending heist.".to_string())).await
    }

    pub async fn failing_provider() -> Self {
        Self::with_reply(None).await
    }

    async fn with_reply(reply: Option<String>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());
        let store = MovieStore::new(db::connect_and_migrate(&url).await.unwrap());

        let summarizer = Arc::new(StubSummarizer { prompts: Mutex::new(Vec::new()), reply });

        let config = Config {
            addr: "127.0.0.1:0".parse().unwrap(),
            database_url: url,
            groq_api_key: String::new(),
            groq_api_url: DEFAULT_GROQ_API_URL.to_string(),
            summary_model: DEFAULT_SUMMARY_MODEL.to_string(),
            api_url: String::new(),
        };

        let state = Arc::new(AppState {
            config: Arc::new(config),
            store: store.clone(),
            summarizer: summarizer.clone(),
        });

        Self { store, summarizer, state, _dir: dir }
    }

    pub fn router(&self) -> Router {
        movie_explorer::app(self.state.clone())
    }

    pub fn prompts(&self) -> Vec<String> {
        self.summarizer.prompts.lock().unwrap().clone()
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(req).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(req).await.unwrap()
}

pub async fn body_json(resp: Response<Body>) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(resp: Response<Body>) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
