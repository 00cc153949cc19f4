pub(crate) mod cloudflare;
mod decode;
pub(crate) mod hugging_face;

use async_trait::async_trait;

use crate::{error::Result, types::GenerationMode};

/// A remote text-to-image service
///
/// Implementations are tried in order by [`crate::Generator`]; any error
/// moves on to the next one.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Generate an image for `prompt`, returned as a `data:` URL
    async fn attempt(&self, prompt: &str) -> Result<String>;

    /// Mode reported to the client when this provider succeeds
    fn mode(&self) -> GenerationMode;

    /// Get the provider name
    fn name(&self) -> &str;
}
