use std::env;
use std::time::Duration;

use clap::Parser;
use lexicon::{GatewaySettings, DEFAULT_API_URL, DEFAULT_MODEL};

const DEFAULT_DB_URL: &str = "sqlite://wordwise.db";
const DEFAULT_CACHE_TTL_HOURS: i64 = 24;

#[derive(Debug, Parser)]
#[command(name = "wordwise", version, about = "Vocabulary trainer for the terminal")]
pub struct Cli {
    /// Use the built-in content even when an API key is configured
    #[arg(long)]
    pub offline: bool,

    /// SQLite database holding the daily cache
    #[arg(long)]
    pub db_url: Option<String>,

    /// Log filter, e.g. `wordwise=debug`
    #[arg(long)]
    pub log_level: Option<String>,

    /// Start from an empty progress state instead of the sample session
    #[arg(long)]
    pub fresh: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub request_timeout: Duration,
    pub db_url: String,
    pub log_level: String,
    pub swipe_feedback: Duration,
    pub cache_ttl: chrono::Duration,
    pub seed_progress: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty());

        let api_url = env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let db_url = env::var("WORDWISE_DB_URL").unwrap_or_else(|_| DEFAULT_DB_URL.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());

        let swipe_feedback_ms = env::var("SWIPE_FEEDBACK_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1000);

        let cache_ttl = cache_ttl(env::var("DAILY_CACHE_TTL_HOURS").ok().as_deref());

        Self {
            api_key,
            api_url,
            model,
            request_timeout: Duration::from_secs(request_timeout_secs),
            db_url,
            log_level,
            swipe_feedback: Duration::from_millis(swipe_feedback_ms),
            cache_ttl,
            seed_progress: true,
        }
    }

    /// Command line flags win over the environment.
    pub fn with_cli(mut self, cli: Cli) -> Self {
        if cli.offline {
            self.api_key = None;
        }
        if let Some(db_url) = cli.db_url {
            self.db_url = db_url;
        }
        if let Some(log_level) = cli.log_level {
            self.log_level = log_level;
        }
        if cli.fresh {
            self.seed_progress = false;
        }
        self
    }

    pub fn gateway_settings(&self) -> GatewaySettings {
        GatewaySettings {
            api_key: self.api_key.clone(),
            api_url: self.api_url.clone(),
            model: self.model.clone(),
            timeout: self.request_timeout,
        }
    }
}

/// Positive whole hours that fit a `chrono::Duration`, else one day.
fn cache_ttl(hours: Option<&str>) -> chrono::Duration {
    hours
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|hours| *hours > 0)
        .and_then(chrono::Duration::try_hours)
        .unwrap_or_else(|| chrono::Duration::hours(DEFAULT_CACHE_TTL_HOURS))
}
