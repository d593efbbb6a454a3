use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

const DEFAULT_API_URL: &str = "http://localhost:8080/graphql";

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Server-side configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// GraphQL endpoint of the roster data service
    pub api_url: String,
    /// Bearer token for the data service, if it requires one
    pub api_token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_values(env::var("API_URL").ok(), env::var("API_TOKEN").ok())
    }

    fn from_values(api_url: Option<String>, api_token: Option<String>) -> Result<Self> {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            anyhow::bail!("API_URL must be an http(s) URL, got {api_url:?}");
        }

        Ok(Self {
            api_url,
            api_token: api_token.filter(|t| !t.is_empty()),
        })
    }
}

/// Install the configuration loaded at startup
pub fn init(config: Config) {
    CONFIG.set(config).ok();
}

/// Configuration installed at startup, or loaded now if startup skipped it
pub fn get() -> Result<&'static Config> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }

    let config = Config::from_env().context("Failed to load configuration")?;
    Ok(CONFIG.get_or_init(|| config))
}
