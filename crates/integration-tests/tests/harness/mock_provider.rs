//! Mock text-to-image backend for integration tests
//!
//! Serves both the Cloudflare Workers AI run route and the Hugging Face
//! Inference model route, answering with a fixed behavior

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// Base64 payload returned by the JSON behavior
pub const IMAGE_BASE64: &str = "iVBORw0KGgoAAAANSUhEUg==";

/// Raw bytes returned by the binary behavior
pub const IMAGE_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nmock";

/// How the mock answers every generation request
#[derive(Debug, Clone, Copy)]
pub enum Behavior {
    /// `200` with `{"result":{"image":...}}`
    JsonImage,
    /// `200` with raw `image/jpeg` bytes
    Binary,
    /// `200` JSON without any image field
    EmptyJson,
    /// `500` with an error body
    Fail,
}

/// A recorded upstream call
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub path: String,
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

pub struct MockProvider {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    behavior: Behavior,
    request_count: AtomicU32,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockProvider {
    /// Start the mock server, returning immediately
    pub async fn start(behavior: Behavior) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            behavior,
            request_count: AtomicU32::new(0),
            calls: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/client/v4/accounts/{account}/ai/run/{*model}", routing::post(handle_generate))
            .route("/models/{*model}", routing::post(handle_generate))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as a Cloudflare provider
    pub fn cloudflare_base_url(&self) -> String {
        format!("http://{}/client/v4", self.addr)
    }

    /// Base URL for configuring the mock as a Hugging Face provider
    pub fn hugging_face_base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of generation requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Calls received so far, oldest first
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.calls.lock().unwrap().clone()
    }
}

impl Drop for MockProvider {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_generate(
    State(state): State<Arc<MockState>>,
    uri: axum::http::Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    state.calls.lock().unwrap().push(RecordedCall {
        path: uri.path().to_owned(),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned),
        body: serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null),
    });

    match state.behavior {
        Behavior::JsonImage => Json(serde_json::json!({
            "result": { "image": IMAGE_BASE64 },
            "success": true,
            "errors": []
        }))
        .into_response(),
        Behavior::Binary => ([(header::CONTENT_TYPE, "image/jpeg")], IMAGE_BYTES).into_response(),
        Behavior::EmptyJson => Json(serde_json::json!({ "result": {}, "success": true })).into_response(),
        Behavior::Fail => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "model is overloaded" })),
        )
            .into_response(),
    }
}
