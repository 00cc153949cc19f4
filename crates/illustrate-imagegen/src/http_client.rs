use std::time::Duration;

use reqwest::Client;

use crate::error::{ImageGenError, Result};

/// Connection pool shared by the remote providers
///
/// No request timeout is set; provider calls run until the upstream
/// answers or the connection drops.
pub fn build() -> Result<Client> {
    Client::builder()
        .pool_idle_timeout(Some(Duration::from_secs(30)))
        .tcp_nodelay(true)
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .build()
        .map_err(|e| ImageGenError::ConfigError(format!("failed to build HTTP client: {e}")))
}
