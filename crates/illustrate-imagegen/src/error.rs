use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use illustrate_core::ValidationError;
use thiserror::Error;

use crate::types::ErrorBody;

pub type Result<T> = std::result::Result<T, ImageGenError>;

/// Image generation errors
///
/// Provider variants are swallowed by the chain and only logged; the rest
/// become `{ ok: false, error }` responses.
#[derive(Debug, Error)]
pub enum ImageGenError {
    /// Body could not be parsed as JSON
    #[error("Invalid JSON body.")]
    InvalidJson,

    /// Body parsed but failed validation
    #[error("Invalid request body. Check prompt, options, and hex colors.")]
    InvalidRequest(#[source] ValidationError),

    /// Body exceeded the size limit
    #[error("Request body is too large, limit is {0} bytes")]
    PayloadTooLarge(usize),

    /// Network or connection error talking to a provider
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Provider answered with a non-success status
    #[error("Provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Provider answered 2xx with a payload that carries no image
    #[error("Unrecognized provider response: {0}")]
    UnrecognizedResponse(String),

    /// Configuration error while building providers
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Unexpected failure while generating
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

impl ImageGenError {
    /// Get the appropriate HTTP status code for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidJson | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            // Provider errors stay inside the chain and never reach a client
            Self::ConnectionError(_)
            | Self::ProviderApiError { .. }
            | Self::UnrecognizedResponse(_)
            | Self::ConfigError(_)
            | Self::GenerationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ImageGenError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
