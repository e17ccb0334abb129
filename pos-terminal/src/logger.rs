//! Logging Infrastructure
//!
//! Console logging by default. When `POS_LOG_DIR` points at an existing
//! directory, logs go to a daily rotating file there instead so they do
//! not interleave with the interactive prompts.

use std::path::Path;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the logger
///
/// `RUST_LOG` wins over `level` when set.
pub fn init_logger(level: &str, log_dir: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::registry().with(env_filter);

    if let Some(dir) = log_dir
        && Path::new(dir).is_dir()
    {
        let file_appender = tracing_appender::rolling::daily(dir, "pos-terminal");
        subscriber
            .with(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true),
            )
            .try_init()?;
        return Ok(());
    }

    subscriber
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false),
        )
        .try_init()?;
    Ok(())
}
