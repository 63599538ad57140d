use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a sensible default — the service runs with no env at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on the photo upload body. The photo collaborator performs
    /// no format validation; this transport cap is the only limit.
    pub max_photo_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_photo_bytes: std::env::var("MAX_PHOTO_BYTES")
                .unwrap_or_else(|_| "5242880".to_string())
                .parse::<usize>()
                .context("MAX_PHOTO_BYTES must be a byte count")?,
        })
    }
}
