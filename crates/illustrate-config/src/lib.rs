#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod log;
pub mod providers;
pub mod server;

use serde::Deserialize;

pub use cors::*;
pub use health::*;
pub use log::*;
pub use providers::*;
pub use server::*;

/// Default configuration file, read from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "illustratelab.toml";

/// Top-level IllustrateLab configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Remote image provider configuration
    #[serde(default)]
    pub providers: ProvidersConfig,
    /// Log output configuration
    #[serde(default)]
    pub log: LogConfig,
}
