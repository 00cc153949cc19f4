use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;

/// IllustrateLab illustration server
#[derive(Debug, Parser)]
#[command(name = "illustratelab", about = "Prompt-driven illustration generator with a deterministic SVG fallback")]
pub struct Args {
    /// Path to configuration file, defaults to `illustratelab.toml` when present
    #[arg(short, long, env = "ILLUSTRATELAB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the listen address
    #[arg(long, env = "ILLUSTRATELAB_LISTEN")]
    pub listen: Option<SocketAddr>,
}
