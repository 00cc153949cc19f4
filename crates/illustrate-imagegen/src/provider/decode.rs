use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Response, header::CONTENT_TYPE};
use serde_json::Value;

use crate::error::{ImageGenError, Result};

/// Turn a provider response into a `data:` URL
///
/// JSON bodies must carry base64 in `result.image` or `result.b64_json`;
/// anything else is treated as raw image bytes.
pub(crate) async fn into_data_url(provider: &str, response: Response) -> Result<String> {
    let status = response.status();

    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        return Err(ImageGenError::ProviderApiError {
            status: status.as_u16(),
            message,
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let body = response.bytes().await.map_err(|e| {
        ImageGenError::ConnectionError(format!("failed to read {provider} response body: {e}"))
    })?;

    decode_body(&content_type, &body)
}

/// Decode a successful response body given its lowercased content type
pub(crate) fn decode_body(content_type: &str, body: &[u8]) -> Result<String> {
    if content_type.contains("application/json") {
        let payload: Value = serde_json::from_slice(body)
            .map_err(|e| ImageGenError::UnrecognizedResponse(format!("invalid JSON: {e}")))?;

        let result = payload.get("result");
        // First string field wins, even when empty
        let base64 = ["image", "b64_json"]
            .into_iter()
            .find_map(|field| result.and_then(|result| result.get(field)).and_then(Value::as_str))
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ImageGenError::UnrecognizedResponse("no image in JSON payload".to_owned()))?;

        return Ok(format!("data:image/png;base64,{base64}"));
    }

    let mime = if content_type.is_empty() || content_type == "application/octet-stream" {
        "image/png"
    } else {
        content_type
    };

    Ok(format!("data:{mime};base64,{}", STANDARD.encode(body)))
}
