use async_trait::async_trait;
use illustrate_config::HuggingFaceConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use super::{ImageProvider, decode::into_data_url};
use crate::{
    error::{ImageGenError, Result},
    types::GenerationMode,
};

/// Default Hugging Face Inference API base URL
const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Hugging Face Inference API text-to-image provider
pub(crate) struct HuggingFaceProvider {
    client: Client,
    url: String,
    token: SecretString,
}

impl HuggingFaceProvider {
    /// Build from configuration, or `None` when no token is set
    pub fn from_config(client: Client, config: &HuggingFaceConfig) -> Option<Self> {
        let token = config.credentials()?.clone();
        let base_url = config
            .base_url
            .as_ref()
            .map_or(DEFAULT_BASE_URL, url::Url::as_str);

        let url = format!("{}/models/{}", base_url.trim_end_matches('/'), config.model());

        Some(Self { client, url, token })
    }
}

/// Wire format for the Inference API request
#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[async_trait]
impl ImageProvider for HuggingFaceProvider {
    async fn attempt(&self, prompt: &str) -> Result<String> {
        tracing::debug!(provider = self.name(), url = %self.url, "sending image generation request");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(self.token.expose_secret())
            .json(&InferenceRequest { inputs: prompt })
            .send()
            .await
            .map_err(|e| ImageGenError::ConnectionError(format!("Failed to send request to Hugging Face: {e}")))?;

        into_data_url(self.name(), response).await
    }

    fn mode(&self) -> GenerationMode {
        GenerationMode::HuggingFace
    }

    fn name(&self) -> &str {
        "hugging_face"
    }
}
