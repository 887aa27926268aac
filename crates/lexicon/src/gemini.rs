// https://ai.google.dev/api/generate-content - structured output through
// generationConfig.responseSchema, the JSON comes back as the text of the first part

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    ContentSource, GatewayError, GatewaySettings, QuoteDraft, QuizDraft, ReverseLookupDraft,
    SourceMetadata, SwipeItem, Word, WordDraft,
};

const WORD_OF_THE_DAY_PROMPT: &str = "Provide me with an interesting English vocabulary word that is not too obscure. Include its pronunciation, definition, an example sentence, and a few synonyms.";
const QUOTE_PROMPT: &str = "Provide a short, inspiring quote about words, vocabulary, or language from a famous author or novel.";
const SWIPE_PROMPT: &str = "Generate two English words. With a 50% probability, they should be synonyms. With a 50% probability, they should be antonyms or unrelated. Don't pick extremely obscure words.";

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Content source backed by the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiSource {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiSource {
    pub fn new(api_key: String, settings: &GatewaySettings) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;
        Ok(Self {
            client,
            api_key,
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_url, self.model)
    }

    async fn generate<T: DeserializeOwned>(
        &self,
        prompt: &str,
        schema: Value,
    ) -> Result<T, GatewayError> {
        let body = request_body(prompt, schema);
        let res = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(GatewayError::Status(res.status()));
        }
        let text = res.text().await?;
        decode_generated(serde_json::from_str(&text)?)
    }
}

fn request_body(prompt: &str, schema: Value) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": schema,
        }
    })
}

/// Pulls the generated JSON text out of a `generateContent` response and
/// decodes it.
fn decode_generated<T: DeserializeOwned>(envelope: Value) -> Result<T, GatewayError> {
    let response: GenerateResponse = serde_json::from_value(envelope)?;
    let text = response
        .candidates
        .into_iter()
        .filter_map(|candidate| candidate.content)
        .flat_map(|content| content.parts)
        .find_map(|part| part.text)
        .filter(|text| !text.trim().is_empty())
        .ok_or(GatewayError::EmptyResponse)?;
    Ok(serde_json::from_str(&text)?)
}

fn word_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "word": { "type": "STRING" },
            "pronunciation": { "type": "STRING" },
            "definition": { "type": "STRING" },
            "example": { "type": "STRING" },
            "synonyms": { "type": "ARRAY", "items": { "type": "STRING" } },
        }
    })
}

#[async_trait::async_trait]
impl ContentSource for GeminiSource {
    async fn word_of_the_day(&self) -> Result<WordDraft, GatewayError> {
        self.generate(WORD_OF_THE_DAY_PROMPT, word_schema()).await
    }

    async fn quote_of_the_day(&self) -> Result<QuoteDraft, GatewayError> {
        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "quote": { "type": "STRING" },
                "author": { "type": "STRING" },
            }
        });
        self.generate(QUOTE_PROMPT, schema).await
    }

    async fn quiz_question(&self, word: &Word) -> Result<QuizDraft, GatewayError> {
        let prompt = format!(
            "Create a multiple-choice question to test the user's knowledge of the word \"{}\". The definition is: \"{}\". Provide three plausible incorrect options and include the correct word as one of the options. The options should be single words.",
            word.word, word.definition
        );
        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "question": {
                    "type": "STRING",
                    "description": "The definition of the word, posed as a question."
                },
                "options": { "type": "ARRAY", "items": { "type": "STRING" } },
                "correctAnswer": { "type": "STRING" },
            }
        });
        let mut draft: QuizDraft = self.generate(&prompt, schema).await?;
        draft.word = None;
        Ok(draft)
    }

    async fn synonym_pair(&self) -> Result<SwipeItem, GatewayError> {
        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "word1": { "type": "STRING" },
                "word2": { "type": "STRING" },
                "areSynonyms": {
                    "type": "BOOLEAN",
                    "description": "True if the words are synonyms, false otherwise."
                },
            }
        });
        self.generate(SWIPE_PROMPT, schema).await
    }

    async fn reverse_lookup(&self, description: &str) -> Result<ReverseLookupDraft, GatewayError> {
        let prompt = format!(
            "Based on the following definition or concept, suggest a list of 3-5 relevant English words: \"{description}\""
        );
        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "words": { "type": "ARRAY", "items": { "type": "STRING" } },
            }
        });
        self.generate(&prompt, schema).await
    }

    async fn word_details(&self, word: &str) -> Result<WordDraft, GatewayError> {
        let prompt = format!(
            "Provide me with the details for the English word \"{word}\". If the word is not a valid English word, return an empty object. Include its pronunciation, definition, an example sentence, and a few synonyms."
        );
        self.generate(&prompt, word_schema()).await
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: format!("gemini ({})", self.model),
            remote: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        })
    }

    #[test]
    fn decodes_the_first_candidate_text() {
        let quote: QuoteDraft = decode_generated(envelope(
            r#"{"quote":"Words are, of course, the most powerful drug used by mankind.","author":"Rudyard Kipling"}"#,
        ))
        .unwrap();
        assert_eq!(quote.author.as_deref(), Some("Rudyard Kipling"));
    }

    #[test]
    fn empty_object_decodes_to_empty_draft() {
        let draft: WordDraft = decode_generated(envelope("{}")).unwrap();
        assert_eq!(draft, WordDraft::default());
    }

    #[test]
    fn missing_candidates_is_an_empty_response() {
        let result: Result<WordDraft, _> = decode_generated(json!({ "candidates": [] }));
        assert!(matches!(result, Err(GatewayError::EmptyResponse)));

        let result: Result<WordDraft, _> = decode_generated(json!({}));
        assert!(matches!(result, Err(GatewayError::EmptyResponse)));
    }

    #[test]
    fn non_json_text_is_malformed() {
        let result: Result<SwipeItem, _> = decode_generated(envelope("Happy and Joyful"));
        let error = result.unwrap_err();
        assert!(matches!(error, GatewayError::Malformed(_)));
        assert!(!error.is_unavailable());
    }

    #[test]
    fn request_carries_schema_and_mime_type() {
        let body = request_body("prompt", word_schema());
        assert_eq!(body["contents"][0]["parts"][0]["text"], "prompt");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            body["generationConfig"]["responseSchema"]["properties"]["synonyms"]["type"],
            "ARRAY"
        );
    }

    #[test]
    fn endpoint_joins_base_url_and_model() {
        let settings = GatewaySettings {
            api_url: "https://example.test/v1beta/".to_string(),
            ..GatewaySettings::default()
        };
        let source = GeminiSource::new("key".to_string(), &settings).unwrap();
        assert_eq!(
            source.endpoint(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert!(source.metadata().remote);
    }
}
