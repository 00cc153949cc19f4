use axum::body::Body;
use illustrate_core::{GenerationRequest, RawGenerationRequest};
use serde_json::Value;

use crate::error::ImageGenError;

/// Body limit for generation requests (64 KiB)
pub const BODY_LIMIT_BYTES: usize = 64 << 10;

/// Extractor for a validated generation request
///
/// The body is parsed as JSON without looking at `Content-Type`, then
/// checked field by field. Malformed JSON and invalid fields reject with
/// their own messages.
pub struct ValidatedRequest(pub GenerationRequest);

impl<S> axum::extract::FromRequest<S> for ValidatedRequest
where
    S: Send + Sync,
{
    type Rejection = ImageGenError;

    async fn from_request(request: http::Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        let bytes = axum::body::to_bytes(request.into_body(), BODY_LIMIT_BYTES)
            .await
            .map_err(|err| {
                if std::error::Error::source(&err)
                    .is_some_and(|source| source.is::<http_body_util::LengthLimitError>())
                {
                    ImageGenError::PayloadTooLarge(BODY_LIMIT_BYTES)
                } else {
                    tracing::debug!(error = %err, "failed to read request body");
                    ImageGenError::InvalidJson
                }
            })?;

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "request body is not JSON");
            ImageGenError::InvalidJson
        })?;

        let raw: RawGenerationRequest = serde_json::from_value(value).map_err(|e| {
            tracing::debug!(error = %e, "request body has the wrong shape");
            ImageGenError::InvalidRequest(illustrate_core::ValidationError::Malformed(e.to_string()))
        })?;

        let request = GenerationRequest::try_from(raw).map_err(|e| {
            tracing::debug!(error = %e, "request failed validation");
            ImageGenError::InvalidRequest(e)
        })?;

        Ok(Self(request))
    }
}
