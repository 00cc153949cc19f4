#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod http_client;
mod provider;
mod request;
mod server;
mod types;

use std::{any::Any, sync::Arc};

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;

pub use error::{ImageGenError, Result};
pub use provider::ImageProvider;
pub use request::{BODY_LIMIT_BYTES, ValidatedRequest};
pub use server::{Generator, GeneratorBuilder};
pub use types::{ErrorBody, GenerateSuccess, GenerationMode, ProviderStatus};

/// Build the generator from configuration
///
/// # Errors
///
/// Returns an error if the shared HTTP client cannot be created
pub fn build_generator(config: &illustrate_config::Config) -> anyhow::Result<Arc<Generator>> {
    let generator = Arc::new(
        GeneratorBuilder::new(&config.providers)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize image generator: {e}"))?,
    );
    Ok(generator)
}

/// Create the endpoint router for generation and provider status
pub fn endpoint_router() -> Router<Arc<Generator>> {
    Router::new()
        .route("/api/generate", post(generate))
        .route("/api/providers", get(providers))
        .layer(CatchPanicLayer::custom(panic_response))
}

/// Handle generation requests
async fn generate(
    State(generator): State<Arc<Generator>>,
    ValidatedRequest(request): ValidatedRequest,
) -> Json<GenerateSuccess> {
    tracing::debug!(
        output = %request.output,
        force_mock = request.force_mock,
        "generation handler called"
    );

    let response = generator.generate(&request).await;

    tracing::debug!(mode = %response.mode, "generation complete");

    Json(response)
}

/// Report which remote providers are configured
async fn providers(State(generator): State<Arc<Generator>>) -> Json<ProviderStatus> {
    Json(generator.status())
}

/// Turn an unexpected failure inside a handler into a 500 envelope
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = match panic.downcast::<String>() {
        Ok(message) => *message,
        Err(panic) => panic
            .downcast::<&str>()
            .map_or_else(|_| "Unknown server failure".to_owned(), |message| (*message).to_owned()),
    };

    tracing::error!(error = %message, "generation handler panicked");

    ImageGenError::GenerationFailed(message).into_response()
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::StatusCode};
    use http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::post("/api/generate")
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    fn router() -> Router {
        endpoint_router().with_state(Arc::new(Generator::new(Vec::new())))
    }

    async fn boom() -> &'static str {
        panic!("disk on fire")
    }

    #[tokio::test]
    async fn panics_become_generation_failures() {
        let router: Router = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(panic_response));

        let (status, body) = send(router, Request::get("/boom").body(Body::empty()).unwrap()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            serde_json::json!({ "ok": false, "error": "Generation failed: disk on fire" })
        );
    }

    #[tokio::test]
    async fn non_json_body_is_rejected() {
        let (status, body) = send(router(), post_json("{prompt:")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "ok": false, "error": "Invalid JSON body." }));
    }

    #[tokio::test]
    async fn wrong_field_type_is_invalid_request() {
        let (status, body) = send(router(), post_json(r#"{"prompt": 42}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Invalid request body. Check prompt, options, and hex colors."
        );
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let prompt = "a".repeat(BODY_LIMIT_BYTES);
        let (status, body) = send(router(), post_json(&format!(r#"{{"prompt":"{prompt}"}}"#))).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["ok"], false);
    }

    #[tokio::test]
    async fn provider_status_without_credentials() {
        let request = Request::get("/api/providers").body(Body::empty()).unwrap();
        let (status, body) = send(router(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "cloudflare": false, "huggingFace": false }));
    }
}
