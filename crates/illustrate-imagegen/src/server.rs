use illustrate_config::ProvidersConfig;
use illustrate_core::GenerationRequest;

use crate::{
    http_client,
    provider::{ImageProvider, cloudflare::CloudflareProvider, hugging_face::HuggingFaceProvider},
    types::{GenerateSuccess, GenerationMode, ProviderStatus},
};

/// Runs the provider chain and falls back to the placeholder
pub struct Generator {
    providers: Vec<Box<dyn ImageProvider>>,
}

impl Generator {
    /// Generator over an explicit, ordered provider list
    pub fn new(providers: Vec<Box<dyn ImageProvider>>) -> Self {
        Self { providers }
    }

    /// Which remote providers are available
    pub fn status(&self) -> ProviderStatus {
        let has = |mode| self.providers.iter().any(|p| p.mode() == mode);

        ProviderStatus {
            cloudflare: has(GenerationMode::Cloudflare),
            hugging_face: has(GenerationMode::HuggingFace),
        }
    }

    /// Produce an illustration for a validated request
    ///
    /// PNG requests without `force_mock` try each provider in order and
    /// return the first image. Every other case, including a chain where
    /// all providers fail, yields the placeholder SVG.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerateSuccess {
        if request.wants_remote() {
            for provider in &self.providers {
                match provider.attempt(&request.prompt).await {
                    Ok(data_url) => {
                        tracing::debug!(provider = provider.name(), "provider returned an image");
                        return GenerateSuccess::remote(provider.mode(), data_url);
                    }
                    Err(e) => {
                        tracing::warn!(provider = provider.name(), error = %e, "provider failed, trying next");
                    }
                }
            }

            if !self.providers.is_empty() {
                tracing::info!("all providers failed, returning placeholder");
            }
        }

        GenerateSuccess::placeholder(request)
    }
}

/// Builder for constructing the generator from configuration
pub struct GeneratorBuilder<'a> {
    config: &'a ProvidersConfig,
}

impl<'a> GeneratorBuilder<'a> {
    pub fn new(config: &'a ProvidersConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> crate::error::Result<Generator> {
        let client = http_client::build()?;
        let mut providers: Vec<Box<dyn ImageProvider>> = Vec::new();

        let cloudflare = &self.config.cloudflare;
        if let Some(provider) = CloudflareProvider::from_config(client.clone(), cloudflare) {
            tracing::debug!(model = cloudflare.model(), "Initializing Cloudflare provider");
            providers.push(Box::new(provider));
        } else if cloudflare.account_id.is_some() || cloudflare.api_token.is_some() {
            tracing::warn!("Cloudflare needs both account_id and api_token, provider disabled");
        }

        let hugging_face = &self.config.hugging_face;
        if let Some(provider) = HuggingFaceProvider::from_config(client, hugging_face) {
            tracing::debug!(model = hugging_face.model(), "Initializing Hugging Face provider");
            providers.push(Box::new(provider));
        }

        if providers.is_empty() {
            tracing::info!("No image providers configured, serving placeholders only");
        } else {
            tracing::debug!("Generator initialized with {} provider(s)", providers.len());
        }

        Ok(Generator { providers })
    }
}
