//! Log output for IllustrateLab
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a `fmt`
//! layer in either human readable or JSON form.

use illustrate_config::{LogConfig, LogFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global subscriber from configuration
///
/// `RUST_LOG`, when set, takes precedence over `config.filter`. An invalid
/// filter falls back to `info`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let env_override = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::new(select_directives(env_override.as_deref(), &config.filter));

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Pretty => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false);

            registry
                .with(fmt_layer)
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;
        }
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_target(true);

            registry
                .with(fmt_layer)
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;
        }
    }

    Ok(())
}

/// Pick filter directives, preferring a valid environment override
fn select_directives<'a>(env_override: Option<&'a str>, configured: &'a str) -> &'a str {
    let valid = |directives: &&str| !directives.trim().is_empty() && EnvFilter::try_new(directives).is_ok();

    env_override
        .filter(valid)
        .or_else(|| Some(configured).filter(valid))
        .unwrap_or("info")
}
