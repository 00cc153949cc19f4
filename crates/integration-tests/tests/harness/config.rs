//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use illustrate_config::{Config, CorsConfig, HealthConfig, ServerConfig};
use secrecy::SecretString;

/// Account id given to mock Cloudflare providers
pub const CLOUDFLARE_ACCOUNT: &str = "test-account";
/// Token given to mock Cloudflare providers
pub const CLOUDFLARE_TOKEN: &str = "cf-test-token";
/// Token given to mock Hugging Face providers
pub const HF_TOKEN: &str = "hf-test-token";

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with no providers
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig {
                        enabled: true,
                        ..HealthConfig::default()
                    },
                    ..ServerConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Configure Cloudflare pointed at a mock backend
    pub fn with_cloudflare(mut self, base_url: &str) -> Self {
        let cloudflare = &mut self.config.providers.cloudflare;
        cloudflare.account_id = Some(CLOUDFLARE_ACCOUNT.to_owned());
        cloudflare.api_token = Some(SecretString::from(CLOUDFLARE_TOKEN));
        cloudflare.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Configure Hugging Face pointed at a mock backend
    pub fn with_hugging_face(mut self, base_url: &str) -> Self {
        let hugging_face = &mut self.config.providers.hugging_face;
        hugging_face.token = Some(SecretString::from(HF_TOKEN));
        hugging_face.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
