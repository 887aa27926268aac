use std::sync::Arc;

use crate::fixtures::{
    mock_quiz_question, mock_quote, mock_reverse_lookup, mock_swipe_item, mock_word,
};
use crate::{
    ContentSource, Difficulty, FixtureSource, GatewayError, GatewaySettings, GeminiSource, Quote,
    QuizQuestion, SharedSource, SourceMetadata, SwipeItem, Word,
};

/// Front door to the content source. Every call except [`Gateway::word_details`]
/// collapses failures into a canned value.
#[derive(Clone)]
pub struct Gateway {
    source: SharedSource,
}

impl Gateway {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    pub fn fixture() -> Self {
        Self::new(Arc::new(FixtureSource))
    }

    /// Remote source when an API key is configured, fixtures otherwise.
    pub fn from_settings(settings: &GatewaySettings) -> Result<Self, GatewayError> {
        match settings.api_key.as_deref().filter(|key| !key.trim().is_empty()) {
            Some(key) => {
                let source = GeminiSource::new(key.to_string(), settings)?;
                tracing::info!(model = %settings.model, "using remote content source");
                Ok(Self::new(Arc::new(source)))
            }
            None => {
                tracing::warn!("API key not set, using the mock content service");
                Ok(Self::fixture())
            }
        }
    }

    pub fn metadata(&self) -> SourceMetadata {
        self.source.metadata()
    }

    pub async fn word_of_the_day(&self) -> Word {
        match self.source.word_of_the_day().await {
            Ok(draft) => draft.complete(Difficulty::Medium).unwrap_or_else(|| {
                tracing::warn!(
                    "word of the day response was incomplete, falling back to mock word"
                );
                mock_word()
            }),
            Err(error) => {
                tracing::error!("error fetching word of the day: {error}");
                mock_word()
            }
        }
    }

    pub async fn quote_of_the_day(&self) -> Quote {
        match self.source.quote_of_the_day().await {
            Ok(draft) => draft.complete().unwrap_or_else(|| {
                tracing::warn!(
                    "quote of the day response was incomplete, falling back to mock quote"
                );
                mock_quote()
            }),
            Err(error) => {
                tracing::error!("error fetching quote of the day: {error}");
                mock_quote()
            }
        }
    }

    pub async fn quiz_question(&self, word: &Word) -> QuizQuestion {
        match self.source.quiz_question(word).await {
            Ok(draft) => draft.complete(&word.word).unwrap_or_else(|| {
                tracing::warn!(
                    word = %word.word,
                    "quiz question was unusable, falling back to mock question"
                );
                mock_quiz_question()
            }),
            Err(error) => {
                tracing::error!(word = %word.word, "error generating quiz question: {error}");
                mock_quiz_question()
            }
        }
    }

    pub async fn synonym_pair(&self) -> SwipeItem {
        match self.source.synonym_pair().await {
            Ok(item) => item,
            Err(error) => {
                tracing::error!("error generating swipe pair: {error}");
                mock_swipe_item()
            }
        }
    }

    pub async fn reverse_lookup(&self, description: &str) -> Vec<String> {
        match self.source.reverse_lookup(description).await {
            Ok(draft) => draft.words.unwrap_or_else(|| {
                tracing::warn!(
                    "reverse dictionary response had no word list, falling back to mock list"
                );
                mock_reverse_lookup()
            }),
            Err(error) => {
                tracing::error!("error with reverse dictionary: {error}");
                mock_reverse_lookup()
            }
        }
    }

    /// `Ok(None)` when the word is unknown or the answer was unusable, `Err`
    /// when the service could not be reached.
    pub async fn word_details(&self, word: &str) -> Result<Option<Word>, GatewayError> {
        match self.source.word_details(word).await {
            Ok(draft) => Ok(draft.complete(Difficulty::Medium)),
            Err(error) if error.is_unavailable() => {
                tracing::error!("error fetching details for {word:?}: {error}");
                Err(error)
            }
            Err(error) => {
                tracing::warn!("unusable details for {word:?}: {error}");
                Ok(None)
            }
        }
    }
}
