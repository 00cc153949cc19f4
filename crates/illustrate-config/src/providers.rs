use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

/// Environment variable holding the Cloudflare account id
pub const CLOUDFLARE_ACCOUNT_ID_VAR: &str = "CLOUDFLARE_ACCOUNT_ID";
/// Environment variable holding the Cloudflare API token
pub const CLOUDFLARE_API_TOKEN_VAR: &str = "CLOUDFLARE_API_TOKEN";
/// Environment variable overriding the Cloudflare model
pub const CLOUDFLARE_MODEL_VAR: &str = "CLOUDFLARE_MODEL";
/// Environment variable holding the Hugging Face token
pub const HF_TOKEN_VAR: &str = "HF_TOKEN";
/// Environment variable overriding the Hugging Face model
pub const HF_MODEL_VAR: &str = "HF_MODEL";

/// Cloudflare Workers AI model used when none is configured
pub const DEFAULT_CLOUDFLARE_MODEL: &str = "@cf/stabilityai/stable-diffusion-xl-base-1.0";
/// Hugging Face Inference model used when none is configured
pub const DEFAULT_HF_MODEL: &str = "stabilityai/stable-diffusion-xl-base-1.0";

/// Remote image providers, tried in declaration order
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProvidersConfig {
    /// Cloudflare Workers AI
    #[serde(default)]
    pub cloudflare: CloudflareConfig,
    /// Hugging Face Inference API
    #[serde(default)]
    pub hugging_face: HuggingFaceConfig,
}

impl ProvidersConfig {
    /// Fill unset fields from environment variables
    ///
    /// Values already present in the file win. Empty variables are treated
    /// as unset. `lookup` is usually `|name| std::env::var(name).ok()`.
    pub fn merge_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let cloudflare = &mut self.cloudflare;
        if cloudflare.account_id.is_none() {
            cloudflare.account_id = lookup(CLOUDFLARE_ACCOUNT_ID_VAR);
        }
        if cloudflare.api_token.is_none() {
            cloudflare.api_token = lookup(CLOUDFLARE_API_TOKEN_VAR).map(SecretString::from);
        }
        if cloudflare.model.is_none() {
            cloudflare.model = lookup(CLOUDFLARE_MODEL_VAR);
        }

        let hugging_face = &mut self.hugging_face;
        if hugging_face.token.is_none() {
            hugging_face.token = lookup(HF_TOKEN_VAR).map(SecretString::from);
        }
        if hugging_face.model.is_none() {
            hugging_face.model = lookup(HF_MODEL_VAR);
        }
    }
}

/// Cloudflare Workers AI credentials and model
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CloudflareConfig {
    /// Account identifier
    #[serde(default)]
    pub account_id: Option<String>,
    /// API token
    #[serde(default)]
    pub api_token: Option<SecretString>,
    /// Model id, defaults to [`DEFAULT_CLOUDFLARE_MODEL`]
    #[serde(default)]
    pub model: Option<String>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
}

impl CloudflareConfig {
    /// Account id and token, when both are present and non-empty
    pub fn credentials(&self) -> Option<(&str, &SecretString)> {
        let account_id = self.account_id.as_deref().filter(|id| !id.is_empty())?;
        let api_token = self
            .api_token
            .as_ref()
            .filter(|token| !token.expose_secret().is_empty())?;
        Some((account_id, api_token))
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_CLOUDFLARE_MODEL)
    }
}

/// Hugging Face Inference credentials and model
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HuggingFaceConfig {
    /// Access token
    #[serde(default)]
    pub token: Option<SecretString>,
    /// Model id, defaults to [`DEFAULT_HF_MODEL`]
    #[serde(default)]
    pub model: Option<String>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
}

impl HuggingFaceConfig {
    /// Token, when present and non-empty
    pub fn credentials(&self) -> Option<&SecretString> {
        self.token
            .as_ref()
            .filter(|token| !token.expose_secret().is_empty())
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_HF_MODEL)
    }
}
