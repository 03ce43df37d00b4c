use anyhow::{Context, Result};

/// Application configuration loaded from environment variables (`.env`
/// supported). The store credentials belong to the deployment, never to the
/// source tree.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote record store, e.g. `https://pocket.example.com`.
    pub store_url: String,
    pub store_identity: String,
    pub store_password: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            store_url: require_env("POCKETBASE_URL")?,
            store_identity: require_env("POCKETBASE_IDENTITY")?,
            store_password: require_env("POCKETBASE_PASSWORD")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
