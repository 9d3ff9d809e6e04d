//! Logging and tracing setup

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

/// Initialize logging; `RUST_LOG` wins over `level`
pub fn initialize_logging(level: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    let fmt_layer = fmt::layer().with_target(false).with_ansi(true);

    tracing_subscriber::registry().with(env_filter).with(fmt_layer).try_init()?;

    Ok(())
}
