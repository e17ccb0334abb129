//! Terminal configuration
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | POS_WAITER_NAME | (none) | Name attached to every order opened here |
//! | POS_LOG_LEVEL | warn | Log level when `RUST_LOG` is unset |
//! | POS_LOG_DIR | (none) | Write logs to daily files in this directory |
//!
//! Connection settings (`POS_API_URL`, `POS_API_TOKEN`,
//! `POS_REQUEST_TIMEOUT`) are read by [`ClientConfig::from_env`].

use pos_client::ClientConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub client: ClientConfig,
    pub waiter_name: Option<String>,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load `.env` (if present) and read the environment
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            client: ClientConfig::from_env(),
            waiter_name: non_empty_var("POS_WAITER_NAME"),
            log_level: non_empty_var("POS_LOG_LEVEL").unwrap_or_else(|| "warn".into()),
            log_dir: non_empty_var("POS_LOG_DIR"),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
