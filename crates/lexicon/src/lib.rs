use std::sync::Arc;
use std::time::Duration;

mod fixtures;
mod gateway;
mod gemini;
mod word;

pub use fixtures::FixtureSource;
pub use gateway::Gateway;
pub use gemini::GeminiSource;
pub use reqwest::StatusCode;
pub use word::{
    Difficulty, Quote, QuoteDraft, QuizDraft, QuizQuestion, ReverseLookupDraft, SwipeItem, Word,
    WordDraft, QUIZ_OPTIONS,
};

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error: HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("response carried no content")]
    EmptyResponse,

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl GatewayError {
    /// True when the service could not be reached or refused the request,
    /// as opposed to answering with something unusable.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, GatewayError::Transport(_) | GatewayError::Status(_))
    }
}

#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    pub remote: bool,
}

/// Raw content provider. Implementations report failures as-is; the
/// fallback policy lives in [`Gateway`].
#[async_trait::async_trait]
pub trait ContentSource: Send + Sync {
    async fn word_of_the_day(&self) -> Result<WordDraft, GatewayError>;

    async fn quote_of_the_day(&self) -> Result<QuoteDraft, GatewayError>;

    async fn quiz_question(&self, word: &Word) -> Result<QuizDraft, GatewayError>;

    async fn synonym_pair(&self) -> Result<SwipeItem, GatewayError>;

    /// Words matching a free-form description.
    async fn reverse_lookup(&self, description: &str) -> Result<ReverseLookupDraft, GatewayError>;

    /// Details for an arbitrary word; an empty draft means the word is unknown.
    async fn word_details(&self, word: &str) -> Result<WordDraft, GatewayError>;

    fn metadata(&self) -> SourceMetadata;
}

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

pub(crate) type SharedSource = Arc<dyn ContentSource>;
