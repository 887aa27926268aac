use std::io;
use std::time::Duration;

use lexicon::{Gateway, Word};

use crate::daily::DailyContent;
use crate::load::LoadGuard;
use crate::navigation::{NavEvent, View};
use crate::progress::{ProgressStore, UserProgress};
use crate::utilities::input;

pub mod dictionary;
pub mod home;
pub mod learn;
pub mod practice;
pub mod profile;
pub mod quiz;
pub mod search;
pub mod swipe;

/// Everything a screen can reach.
pub struct AppContext {
    pub gateway: Gateway,
    pub progress: ProgressStore,
    pub daily: DailyContent,
    pub loads: LoadGuard,
    pub swipe_feedback: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Nav(NavEvent),
    Text(String),
    Blank,
}

impl Input {
    /// On free-text prompts navigation needs a `:` prefix so that words like
    /// "close" can still be typed as answers.
    pub fn classify(line: &str, free_text: bool) -> Input {
        let line = line.trim();
        if line.is_empty() {
            return Input::Blank;
        }
        if let Some(command) = line.strip_prefix(':') {
            if let Some(event) = NavEvent::parse(command) {
                return Input::Nav(event);
            }
        } else if !free_text {
            if let Some(event) = NavEvent::parse(line) {
                return Input::Nav(event);
            }
        }
        Input::Text(line.to_string())
    }
}

/// Reads the next line for a screen; a closed stdin reads as quit.
pub fn prompt(label: &str, free_text: bool) -> io::Result<Input> {
    match input(&format!("[{label}] >> "))? {
        Some(line) => Ok(Input::classify(&line, free_text)),
        None => Ok(Input::Nav(NavEvent::Quit)),
    }
}

pub fn print_stats(progress: &UserProgress) {
    println!(
        "Words learned: {}   Accuracy: {}%   Rank: {}",
        progress.words_learned, progress.accuracy, progress.rank
    );
}

pub fn print_word(word: &Word) {
    println!("{}  {}", word.word, word.pronunciation);
    println!("    {}", word.definition);
    println!("    example: {}", word.example);
    if !word.synonyms.is_empty() {
        println!("    synonyms: {}", word.synonyms.join(", "));
    }
}

pub fn print_navigation_help() {
    let views = View::ALL.map(View::command).join(", ");
    println!("Go to: {views}. Type quit to leave.");
}
