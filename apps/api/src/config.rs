use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::content::ContentSource;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON file to serve instead of the bundled dataset.
    pub content_path: Option<PathBuf>,
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
            content_path: std::env::var("CONTENT_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn content_source(&self) -> ContentSource {
        match &self.content_path {
            Some(path) => ContentSource::File(path.clone()),
            None => ContentSource::Bundled,
        }
    }
}
