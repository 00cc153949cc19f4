use async_trait::async_trait;
use illustrate_config::CloudflareConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use super::{ImageProvider, decode::into_data_url};
use crate::{
    error::{ImageGenError, Result},
    types::GenerationMode,
};

/// Default Cloudflare API base URL
const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Cloudflare Workers AI text-to-image provider
pub(crate) struct CloudflareProvider {
    client: Client,
    url: String,
    api_token: SecretString,
}

impl CloudflareProvider {
    /// Build from configuration, or `None` when either credential is missing
    pub fn from_config(client: Client, config: &CloudflareConfig) -> Option<Self> {
        let (account_id, api_token) = config.credentials()?;
        let base_url = config
            .base_url
            .as_ref()
            .map_or(DEFAULT_BASE_URL, url::Url::as_str);

        let url = format!(
            "{}/accounts/{account_id}/ai/run/{}",
            base_url.trim_end_matches('/'),
            config.model()
        );

        Some(Self {
            client,
            url,
            api_token: api_token.clone(),
        })
    }
}

/// Wire format for the Workers AI run request
#[derive(Serialize)]
struct RunRequest<'a> {
    prompt: &'a str,
}

#[async_trait]
impl ImageProvider for CloudflareProvider {
    async fn attempt(&self, prompt: &str) -> Result<String> {
        tracing::debug!(provider = self.name(), url = %self.url, "sending image generation request");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(self.api_token.expose_secret())
            .json(&RunRequest { prompt })
            .send()
            .await
            .map_err(|e| ImageGenError::ConnectionError(format!("Failed to send request to Cloudflare: {e}")))?;

        into_data_url(self.name(), response).await
    }

    fn mode(&self) -> GenerationMode {
        GenerationMode::Cloudflare
    }

    fn name(&self) -> &str {
        "cloudflare"
    }
}
