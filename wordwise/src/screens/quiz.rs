use futures::future::join_all;
use lexicon::{Gateway, QuizQuestion, Word};
use rand::seq::SliceRandom;
use rand::Rng;

use super::{prompt, AppContext, Input};
use crate::navigation::NavEvent;
use crate::progress::ProgressStore;
use crate::utilities::resolve_choice;

pub const QUIZ_LENGTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Loading,
    Presenting(usize),
    Answered(usize),
    Complete,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    phase: QuizPhase,
    score: usize,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self {
            questions: Vec::new(),
            phase: QuizPhase::Loading,
            score: 0,
        }
    }
}

impl QuizSession {
    pub fn start(&mut self, questions: Vec<QuizQuestion>) {
        self.phase = if questions.is_empty() {
            QuizPhase::Complete
        } else {
            QuizPhase::Presenting(0)
        };
        self.questions = questions;
        self.score = 0;
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn current(&self) -> Option<&QuizQuestion> {
        match self.phase {
            QuizPhase::Presenting(index) | QuizPhase::Answered(index) => self.questions.get(index),
            QuizPhase::Loading | QuizPhase::Complete => None,
        }
    }

    /// Answers the presented question with option `choice`. The result is
    /// recorded either way; a correct answer also marks the word learned.
    /// `None` when no question is waiting for an answer.
    pub fn select(&mut self, choice: usize, progress: &mut ProgressStore) -> Option<bool> {
        let QuizPhase::Presenting(index) = self.phase else {
            return None;
        };
        let question = self.questions.get(index)?;
        let correct = question.is_correct(question.options.get(choice)?);
        progress.record_quiz_result(correct);
        if correct {
            self.score += 1;
            progress.mark_as_learned(&question.word);
        }
        self.phase = QuizPhase::Answered(index);
        Some(correct)
    }

    pub fn advance(&mut self) -> QuizPhase {
        if let QuizPhase::Answered(index) = self.phase {
            self.phase = if index + 1 < self.questions.len() {
                QuizPhase::Presenting(index + 1)
            } else {
                QuizPhase::Complete
            };
        }
        self.phase
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn stars(&self) -> usize {
        star_rating(self.score, self.len())
    }
}

pub fn star_rating(score: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    let percent = score as f64 / total as f64 * 100.0;
    match percent {
        p if p >= 90.0 => 3,
        p if p >= 60.0 => 2,
        p if p >= 30.0 => 1,
        _ => 0,
    }
}

pub fn pick_words<R: Rng + ?Sized>(words: &[Word], count: usize, rng: &mut R) -> Vec<Word> {
    words.choose_multiple(rng, count).cloned().collect()
}

/// Issues one request per word at once; question order follows `words`.
pub async fn generate_questions(gateway: &Gateway, words: &[Word]) -> Vec<QuizQuestion> {
    join_all(words.iter().map(|word| gateway.quiz_question(word))).await
}

fn print_question(session: &QuizSession, question: &QuizQuestion) {
    if let QuizPhase::Presenting(index) = session.phase() {
        println!("Question {} of {}", index + 1, session.len());
    }
    println!("Which word means: {}", question.definition);
    for (index, option) in question.options.iter().enumerate() {
        println!("[{}]: {}", index + 1, option);
    }
}

/// Plays one quiz. `Some` carries a navigation event typed mid-game.
pub async fn play(ctx: &mut AppContext) -> anyhow::Result<Option<NavEvent>> {
    let mut session = QuizSession::default();
    println!("Generating your quiz...");
    let words = pick_words(
        ctx.progress.catalog().words(),
        QUIZ_LENGTH,
        &mut rand::thread_rng(),
    );
    let Some(questions) = ctx.loads.run(generate_questions(&ctx.gateway, &words)).await else {
        println!("Loading cancelled.");
        return Ok(None);
    };
    session.start(questions);

    while let Some(question) = session.current().cloned() {
        print_question(&session, &question);
        let correct = loop {
            let answer = match prompt("quiz", true)? {
                Input::Nav(event) => return Ok(Some(event)),
                Input::Blank => continue,
                Input::Text(answer) => answer,
            };
            if answer.eq_ignore_ascii_case(":back") || answer.eq_ignore_ascii_case("back") {
                return Ok(None);
            }
            let Some(choice) = resolve_choice(&question.options, &answer) else {
                println!("Couldn't understand your answer, please try again.");
                continue;
            };
            if let Some(correct) = session.select(choice, &mut ctx.progress) {
                break correct;
            }
        };
        if correct {
            println!("The answer is correct. Well done!");
        } else {
            println!(
                "The answer is incorrect. The right answer is {}.",
                question.correct_answer
            );
        }
        session.advance();
    }

    println!("Quiz complete!");
    println!("You scored {} out of {}.", session.score(), session.len());
    let stars = session.stars();
    println!("{}{}", "\u{2605}".repeat(stars), "\u{2606}".repeat(3 - stars));
    Ok(None)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use lexicon::{
        ContentSource, GatewayError, QuizDraft, QuoteDraft, ReverseLookupDraft, SourceMetadata,
        SwipeItem, WordDraft,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::catalog::Catalog;

    fn question(word: &str) -> QuizQuestion {
        QuizQuestion {
            word: word.into(),
            definition: format!("definition of {word}"),
            options: vec!["Other".into(), word.into()],
            correct_answer: word.into(),
        }
    }

    #[test]
    fn walks_through_every_phase() {
        let mut store = ProgressStore::new(Catalog::default());
        let mut session = QuizSession::default();
        assert_eq!(session.phase(), QuizPhase::Loading);
        assert_eq!(session.select(0, &mut store), None);

        session.start(vec![question("Ephemeral"), question("Benevolent")]);
        assert_eq!(session.phase(), QuizPhase::Presenting(0));
        assert_eq!(session.select(1, &mut store), Some(true));
        assert_eq!(session.phase(), QuizPhase::Answered(0));
        // answered questions do not take a second answer
        assert_eq!(session.select(0, &mut store), None);

        assert_eq!(session.advance(), QuizPhase::Presenting(1));
        assert_eq!(session.select(0, &mut store), Some(false));
        assert_eq!(session.advance(), QuizPhase::Complete);
        assert!(session.current().is_none());
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn only_correct_answers_mark_words_learned() {
        let mut store = ProgressStore::new(Catalog::default());
        let mut session = QuizSession::default();
        session.start(vec![question("Ephemeral"), question("Benevolent")]);

        session.select(1, &mut store);
        session.advance();
        session.select(0, &mut store);

        assert!(store.is_learned("Ephemeral"));
        assert!(!store.is_learned("Benevolent"));
        assert_eq!(store.total_answered(), 2);
        assert_eq!(store.progress().accuracy, 50);
    }

    #[test]
    fn out_of_range_choice_is_rejected() {
        let mut store = ProgressStore::new(Catalog::default());
        let mut session = QuizSession::default();
        session.start(vec![question("Ephemeral")]);
        assert_eq!(session.select(5, &mut store), None);
        assert_eq!(session.phase(), QuizPhase::Presenting(0));
        assert_eq!(store.total_answered(), 0);
    }

    #[test]
    fn empty_quiz_completes_at_once() {
        let mut session = QuizSession::default();
        session.start(Vec::new());
        assert_eq!(session.phase(), QuizPhase::Complete);
        assert_eq!(session.stars(), 0);
    }

    #[test]
    fn stars_follow_score_thresholds() {
        assert_eq!(star_rating(5, 5), 3);
        assert_eq!(star_rating(4, 5), 2);
        assert_eq!(star_rating(3, 5), 2);
        assert_eq!(star_rating(2, 5), 1);
        assert_eq!(star_rating(1, 5), 0);
        assert_eq!(star_rating(9, 10), 3);
        assert_eq!(star_rating(0, 0), 0);
    }

    #[test]
    fn picks_distinct_catalog_words() {
        let catalog = Catalog::default();
        let mut rng = StdRng::seed_from_u64(7);
        let words = pick_words(catalog.words(), QUIZ_LENGTH, &mut rng);
        assert_eq!(words.len(), QUIZ_LENGTH);
        let mut names = words.iter().map(|w| w.word.as_str()).collect::<Vec<_>>();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), QUIZ_LENGTH);

        assert_eq!(pick_words(&catalog.words()[..2], QUIZ_LENGTH, &mut rng).len(), 2);
    }

    /// Answers about whichever word it is asked for, slower for words
    /// earlier in `words`.
    struct SlowEcho {
        words: Vec<String>,
        finished: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ContentSource for SlowEcho {
        async fn word_of_the_day(&self) -> Result<WordDraft, GatewayError> {
            Err(GatewayError::EmptyResponse)
        }

        async fn quote_of_the_day(&self) -> Result<QuoteDraft, GatewayError> {
            Err(GatewayError::EmptyResponse)
        }

        async fn quiz_question(&self, word: &Word) -> Result<QuizDraft, GatewayError> {
            let position = self.words.iter().position(|w| *w == word.word).unwrap_or(0);
            let delay = 20 * (self.words.len() - position) as u64;
            tokio::time::sleep(Duration::from_millis(delay)).await;
            self.finished.lock().unwrap().push(word.word.clone());
            Ok(QuizDraft {
                word: None,
                question: Some(word.definition.clone()),
                options: Some(vec![
                    word.word.clone(),
                    "Decoy".into(),
                    "Filler".into(),
                    "Other".into(),
                ]),
                correct_answer: Some(word.word.clone()),
            })
        }

        async fn synonym_pair(&self) -> Result<SwipeItem, GatewayError> {
            Err(GatewayError::EmptyResponse)
        }

        async fn reverse_lookup(&self, _: &str) -> Result<ReverseLookupDraft, GatewayError> {
            Err(GatewayError::EmptyResponse)
        }

        async fn word_details(&self, _: &str) -> Result<WordDraft, GatewayError> {
            Err(GatewayError::EmptyResponse)
        }

        fn metadata(&self) -> SourceMetadata {
            SourceMetadata {
                name: "slow echo".into(),
                remote: false,
            }
        }
    }

    #[tokio::test]
    async fn questions_follow_issue_order_not_completion_order() {
        let catalog = Catalog::default();
        let words = &catalog.words()[..4];
        let source = Arc::new(SlowEcho {
            words: words.iter().map(|word| word.word.clone()).collect(),
            finished: Mutex::new(Vec::new()),
        });
        let gateway = Gateway::new(source.clone());

        let questions = generate_questions(&gateway, words).await;

        let mut finished = source.finished.lock().unwrap().clone();
        finished.reverse();
        assert_eq!(finished, source.words);
        assert_eq!(questions.len(), words.len());
        for (question, word) in questions.iter().zip(words) {
            assert_eq!(question.word, word.word);
            assert_eq!(question.definition, word.definition);
        }
    }
}
