use lexicon::Word;

use super::{print_navigation_help, prompt, AppContext, Input};
use crate::navigation::NavEvent;

/// Position in the list of words still to learn, and which side of the
/// card is up.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LearnDeck {
    index: usize,
    flipped: bool,
}

impl LearnDeck {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn current<'a>(&self, words: &[&'a Word]) -> Option<&'a Word> {
        words.get(self.index).copied()
    }

    pub fn next(&mut self, len: usize) -> bool {
        if self.index + 1 < len {
            self.index += 1;
            self.flipped = false;
            true
        } else {
            false
        }
    }

    pub fn prev(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            self.flipped = false;
            true
        } else {
            false
        }
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Called after the current word left the list; keeps the index inside
    /// the `remaining` words.
    pub fn word_learned(&mut self, remaining: usize) {
        self.index = self.index.min(remaining.saturating_sub(1));
        self.flipped = false;
    }
}

fn print_card(ctx: &AppContext, deck: &LearnDeck) {
    let words = ctx.progress.words_to_learn();
    let Some(word) = deck.current(&words) else {
        return;
    };
    let mark = if ctx.progress.is_bookmarked(&word.word) {
        " [bookmarked]"
    } else {
        ""
    };
    println!("Card {} of {}{mark}", deck.index() + 1, words.len());
    if deck.is_flipped() {
        println!("    {}", word.definition);
        println!("    example: {}", word.example);
        println!("    synonyms: {}", word.synonyms.join(", "));
    } else {
        println!("    {}  {}", word.word, word.pronunciation);
    }
}

fn print_all_learned() {
    println!("All words learned! You've learned all the words in the current list. Great job!");
}

pub async fn run(ctx: &mut AppContext) -> anyhow::Result<NavEvent> {
    let mut deck = LearnDeck::default();
    if ctx.progress.words_to_learn().is_empty() {
        print_all_learned();
    } else {
        println!("Commands: flip, next, prev, bookmark, know");
        print_card(ctx, &deck);
    }
    loop {
        let command = match prompt("learn", false)? {
            Input::Nav(event) => return Ok(event),
            Input::Blank => continue,
            Input::Text(command) => command.to_ascii_lowercase(),
        };
        let words = ctx.progress.words_to_learn();
        let Some(word) = deck.current(&words).map(|word| word.word.clone()) else {
            print_all_learned();
            print_navigation_help();
            continue;
        };
        let len = words.len();
        match command.as_str() {
            "flip" | "f" => deck.flip(),
            "next" | "n" => {
                if !deck.next(len) {
                    println!("This is the last card.");
                }
            }
            "prev" | "p" => {
                if !deck.prev() {
                    println!("This is the first card.");
                }
            }
            "bookmark" | "b" => ctx.progress.toggle_bookmark(&word),
            "know" | "k" => {
                ctx.progress.mark_as_learned(&word);
                println!("Marked {word} as learned.");
                let remaining = ctx.progress.words_to_learn().len();
                if remaining == 0 {
                    print_all_learned();
                    continue;
                }
                deck.word_learned(remaining);
            }
            _ => {
                println!("Unknown command {command}. Commands: flip, next, prev, bookmark, know");
                continue;
            }
        }
        print_card(ctx, &deck);
    }
}
