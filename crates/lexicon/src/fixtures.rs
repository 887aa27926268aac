use crate::{
    ContentSource, Difficulty, GatewayError, Quote, QuoteDraft, QuizDraft, QuizQuestion,
    ReverseLookupDraft, SourceMetadata, SwipeItem, Word, WordDraft,
};

pub(crate) fn mock_word() -> Word {
    Word {
        word: "Lexicographer".into(),
        pronunciation: "/ˌlɛksɪˈkɒɡrəfər/".into(),
        definition: "A person who compiles dictionaries.".into(),
        example: "The lexicographer diligently updated the new edition of the dictionary.".into(),
        synonyms: vec![
            "word-smith".into(),
            "glossologist".into(),
            "dictionary-maker".into(),
        ],
        difficulty: Difficulty::Medium,
    }
}

pub(crate) fn mock_dictionary_word() -> Word {
    Word {
        word: "Query".into(),
        pronunciation: "/ˈkwɪəri/".into(),
        definition: "A question, especially one addressed to an official or organization.".into(),
        example: "The journalist posed a sharp query to the politician.".into(),
        synonyms: vec!["question".into(), "inquiry".into(), "interrogation".into()],
        difficulty: Difficulty::Easy,
    }
}

pub(crate) fn mock_quiz_question() -> QuizQuestion {
    QuizQuestion {
        word: "Ephemeral".into(),
        definition: "Lasting for a very short time.".into(),
        options: vec![
            "Ephemeral".into(),
            "Eternal".into(),
            "Ubiquitous".into(),
            "Ancient".into(),
        ],
        correct_answer: "Ephemeral".into(),
    }
}

pub(crate) fn mock_swipe_item() -> SwipeItem {
    SwipeItem {
        word1: "Happy".into(),
        word2: "Joyful".into(),
        are_synonyms: true,
    }
}

pub(crate) fn mock_reverse_lookup() -> Vec<String> {
    vec!["Vocabulary".into(), "Lexicon".into(), "Glossary".into()]
}

pub(crate) fn mock_quote() -> Quote {
    Quote {
        quote: "The limits of my language mean the limits of my world.".into(),
        author: "Ludwig Wittgenstein".into(),
    }
}

/// Offline source serving canned content.
#[derive(Debug, Default, Clone)]
pub struct FixtureSource;

#[async_trait::async_trait]
impl ContentSource for FixtureSource {
    async fn word_of_the_day(&self) -> Result<WordDraft, GatewayError> {
        Ok(WordDraft::from(&mock_word()))
    }

    async fn quote_of_the_day(&self) -> Result<QuoteDraft, GatewayError> {
        let quote = mock_quote();
        Ok(QuoteDraft {
            quote: Some(quote.quote),
            author: Some(quote.author),
        })
    }

    async fn quiz_question(&self, _word: &Word) -> Result<QuizDraft, GatewayError> {
        let question = mock_quiz_question();
        Ok(QuizDraft {
            word: Some(question.word),
            question: Some(question.definition),
            options: Some(question.options),
            correct_answer: Some(question.correct_answer),
        })
    }

    async fn synonym_pair(&self) -> Result<SwipeItem, GatewayError> {
        Ok(mock_swipe_item())
    }

    async fn reverse_lookup(&self, _description: &str) -> Result<ReverseLookupDraft, GatewayError> {
        Ok(ReverseLookupDraft {
            words: Some(mock_reverse_lookup()),
        })
    }

    async fn word_details(&self, word: &str) -> Result<WordDraft, GatewayError> {
        if word.trim().eq_ignore_ascii_case("query") {
            Ok(WordDraft::from(&mock_dictionary_word()))
        } else {
            Ok(WordDraft::default())
        }
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "fixture".to_string(),
            remote: false,
        }
    }
}
