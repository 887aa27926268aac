use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Options offered by every quiz question.
pub const QUIZ_OPTIONS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A vocabulary entry. The `word` field is its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    pub pronunciation: String,
    pub definition: String,
    pub example: String,
    pub synonyms: Vec<String>,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub word: String,
    /// The definition, posed as the question text.
    pub definition: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl QuizQuestion {
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.correct_answer
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeItem {
    pub word1: String,
    pub word2: String,
    pub are_synonyms: bool,
}

/// Word as returned by a content source, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordDraft {
    pub word: Option<String>,
    pub pronunciation: Option<String>,
    pub definition: Option<String>,
    pub example: Option<String>,
    pub synonyms: Option<Vec<String>>,
    /// Set by sources that already know it; remote answers leave it out.
    pub difficulty: Option<Difficulty>,
}

impl WordDraft {
    /// Returns the word only when every text field is non-blank and a
    /// synonym list is present. `difficulty` applies when the draft has none.
    pub fn complete(self, difficulty: Difficulty) -> Option<Word> {
        Some(Word {
            word: non_blank(self.word)?,
            pronunciation: non_blank(self.pronunciation)?,
            definition: non_blank(self.definition)?,
            example: non_blank(self.example)?,
            synonyms: self.synonyms?,
            difficulty: self.difficulty.unwrap_or(difficulty),
        })
    }
}

impl From<&Word> for WordDraft {
    fn from(word: &Word) -> Self {
        Self {
            word: Some(word.word.clone()),
            pronunciation: Some(word.pronunciation.clone()),
            definition: Some(word.definition.clone()),
            example: Some(word.example.clone()),
            synonyms: Some(word.synonyms.clone()),
            difficulty: Some(word.difficulty),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteDraft {
    pub quote: Option<String>,
    pub author: Option<String>,
}

impl QuoteDraft {
    pub fn complete(self) -> Option<Quote> {
        Some(Quote {
            quote: non_blank(self.quote)?,
            author: non_blank(self.author)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuizDraft {
    /// Word the question is about, when the source pins it.
    pub word: Option<String>,
    pub question: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct_answer: Option<String>,
}

impl QuizDraft {
    /// Builds the question, about `word` unless the draft names its own.
    /// Needs exactly [`QUIZ_OPTIONS`] distinct options, one of them the
    /// correct answer.
    pub fn complete(self, word: &str) -> Option<QuizQuestion> {
        let definition = non_blank(self.question)?;
        let options = self.options?;
        let correct_answer = non_blank(self.correct_answer)?;
        let distinct = options.iter().collect::<HashSet<_>>().len();
        if options.len() != QUIZ_OPTIONS
            || distinct != QUIZ_OPTIONS
            || !options.contains(&correct_answer)
        {
            return None;
        }
        Some(QuizQuestion {
            word: self.word.unwrap_or_else(|| word.to_owned()),
            definition,
            options,
            correct_answer,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReverseLookupDraft {
    pub words: Option<Vec<String>>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
