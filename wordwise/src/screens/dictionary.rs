use lexicon::{Gateway, Word};

use super::{print_word, prompt, AppContext, Input};
use crate::navigation::NavEvent;

pub const MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupState {
    Initial,
    Found(Word),
    NotFound(String),
    Failed,
}

impl LookupState {
    pub fn print(&self) {
        match self {
            LookupState::Initial => println!("Search for a word to see its definition here."),
            LookupState::Found(word) => print_word(word),
            LookupState::NotFound(query) => println!(
                "Could not find a definition for \"{query}\". Check the spelling or try another word."
            ),
            LookupState::Failed => {
                println!("An error occurred while searching. Please try again later.")
            }
        }
    }
}

pub fn validate_query(query: &str) -> Result<&str, &'static str> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_LEN {
        return Err("Please enter a word to search.");
    }
    Ok(query)
}

pub async fn lookup(gateway: &Gateway, query: &str) -> LookupState {
    match gateway.word_details(query).await {
        Ok(Some(word)) => LookupState::Found(word),
        Ok(None) => LookupState::NotFound(query.to_string()),
        Err(error) => {
            tracing::debug!(query, "dictionary lookup failed: {error}");
            LookupState::Failed
        }
    }
}

pub async fn run(ctx: &mut AppContext) -> anyhow::Result<NavEvent> {
    println!("Dictionary. Type :close to go back.");
    let mut state = LookupState::Initial;
    state.print();
    loop {
        let line = match prompt("dictionary", true)? {
            Input::Nav(event) => return Ok(event),
            Input::Blank => continue,
            Input::Text(line) => line,
        };
        let query = match validate_query(&line) {
            Ok(query) => query,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        println!("Searching...");
        match ctx.loads.run(lookup(&ctx.gateway, query)).await {
            Some(found) => state = found,
            None => println!("Search cancelled."),
        }
        state.print();
        if let LookupState::Found(word) = &state {
            if ctx.progress.is_learned(&word.word) {
                println!("You have already learned this word.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use lexicon::{
        ContentSource, GatewayError, QuizDraft, QuoteDraft, ReverseLookupDraft, SourceMetadata,
        StatusCode, SwipeItem, WordDraft,
    };

    use super::*;

    struct Unreachable;

    #[async_trait]
    impl ContentSource for Unreachable {
        async fn word_of_the_day(&self) -> Result<WordDraft, GatewayError> {
            unavailable()
        }

        async fn quote_of_the_day(&self) -> Result<QuoteDraft, GatewayError> {
            unavailable()
        }

        async fn quiz_question(&self, _word: &Word) -> Result<QuizDraft, GatewayError> {
            unavailable()
        }

        async fn synonym_pair(&self) -> Result<SwipeItem, GatewayError> {
            unavailable()
        }

        async fn reverse_lookup(&self, _: &str) -> Result<ReverseLookupDraft, GatewayError> {
            unavailable()
        }

        async fn word_details(&self, _: &str) -> Result<WordDraft, GatewayError> {
            unavailable()
        }

        fn metadata(&self) -> SourceMetadata {
            SourceMetadata {
                name: "unreachable".into(),
                remote: true,
            }
        }
    }

    fn unavailable<T>() -> Result<T, GatewayError> {
        Err(GatewayError::Status(StatusCode::SERVICE_UNAVAILABLE))
    }

    #[test]
    fn queries_need_two_characters() {
        assert_eq!(validate_query(" a "), Err("Please enter a word to search."));
        assert_eq!(validate_query(" ox "), Ok("ox"));
    }

    #[tokio::test]
    async fn fixture_lookup_distinguishes_found_from_missing() {
        let gateway = Gateway::fixture();
        match lookup(&gateway, "Query").await {
            LookupState::Found(word) => assert_eq!(word.word, "Query"),
            other => panic!("expected a definition, got {other:?}"),
        }
        assert_eq!(
            lookup(&gateway, "zyzzyva").await,
            LookupState::NotFound("zyzzyva".into())
        );
    }

    #[tokio::test]
    async fn unavailable_service_is_an_error_state() {
        let gateway = Gateway::new(Arc::new(Unreachable));
        assert_eq!(lookup(&gateway, "query").await, LookupState::Failed);
    }
}
