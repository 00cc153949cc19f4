use std::path::Path;

use crate::{Config, DEFAULT_CONFIG_FILE};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a placeholder cannot be
    /// expanded, the TOML is invalid, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse and validate configuration text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Resolve the configuration the binary runs with
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and built-in defaults are used otherwise. Provider
    /// credentials missing from the file are then taken from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file cannot be loaded
    pub fn discover(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::load(Path::new(DEFAULT_CONFIG_FILE))?,
            None => Self::default(),
        };

        config.providers.merge_env(|name| std::env::var(name).ok());

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_server()?;
        self.validate_providers()?;
        Ok(())
    }

    fn validate_server(&self) -> anyhow::Result<()> {
        let health = &self.server.health;
        if health.enabled && !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/': `{}`", health.path);
        }

        if let Some(ref cors) = self.server.cors
            && let crate::AnyOrList::List(ref origins) = cors.origins
            && origins.is_empty()
        {
            anyhow::bail!("server.cors.origins must not be empty; use \"*\" to allow any origin");
        }

        Ok(())
    }

    fn validate_providers(&self) -> anyhow::Result<()> {
        let cloudflare = &self.providers.cloudflare;
        let hugging_face = &self.providers.hugging_face;

        for (name, model) in [
            ("cloudflare", cloudflare.model.as_deref()),
            ("hugging_face", hugging_face.model.as_deref()),
        ] {
            if model.is_some_and(|model| model.trim().is_empty()) {
                anyhow::bail!("providers.{name}.model must not be empty");
            }
        }

        for (name, base_url) in [
            ("cloudflare", cloudflare.base_url.as_ref()),
            ("hugging_face", hugging_face.base_url.as_ref()),
        ] {
            if let Some(url) = base_url
                && !matches!(url.scheme(), "http" | "https")
            {
                anyhow::bail!("providers.{name}.base_url must be an http(s) URL: `{url}`");
            }
        }

        Ok(())
    }
}
