use std::fmt;

use illustrate_core::GenerationRequest;
use serde::{Deserialize, Serialize};

/// Where an image came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenerationMode {
    /// Cloudflare Workers AI
    #[serde(rename = "cloudflare")]
    Cloudflare,
    /// Hugging Face Inference API
    #[serde(rename = "hf")]
    HuggingFace,
    /// Locally synthesized placeholder
    #[serde(rename = "mock")]
    Mock,
}

impl GenerationMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cloudflare => "cloudflare",
            Self::HuggingFace => "hf",
            Self::Mock => "mock",
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful generation response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSuccess {
    /// Always `true`
    pub ok: bool,
    pub mode: GenerationMode,
    /// Placeholder SVG text, only in `mock` mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
    /// Image as a `data:` URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub png_data_url: Option<String>,
}

impl GenerateSuccess {
    /// Response carrying an image produced by a remote provider
    pub const fn remote(mode: GenerationMode, data_url: String) -> Self {
        Self {
            ok: true,
            mode,
            svg: None,
            png_data_url: Some(data_url),
        }
    }

    /// Response carrying the placeholder for `request`
    pub fn placeholder(request: &GenerationRequest) -> Self {
        let svg = illustrate_placeholder::synthesize(request);
        let data_url = illustrate_placeholder::to_data_url(&svg);

        Self {
            ok: true,
            mode: GenerationMode::Mock,
            svg: Some(svg),
            png_data_url: Some(data_url),
        }
    }
}

/// Failure envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `false`
    pub ok: bool,
    pub error: String,
}

impl ErrorBody {
    pub const fn new(error: String) -> Self {
        Self { ok: false, error }
    }
}

/// Which remote providers have credentials
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderStatus {
    pub cloudflare: bool,
    pub hugging_face: bool,
}
