use std::collections::HashSet;
use std::fmt;

use lexicon::Word;
use tokio::sync::watch;

use crate::catalog::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RankName {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl fmt::Display for RankName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RankName::Bronze => "Bronze",
            RankName::Silver => "Silver",
            RankName::Gold => "Gold",
            RankName::Platinum => "Platinum",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    pub name: RankName,
    pub icon: &'static str,
    pub min_words: usize,
}

/// Ordered by strictly increasing `min_words`.
pub const RANKS: [Rank; 4] = [
    Rank {
        name: RankName::Bronze,
        icon: "🥉",
        min_words: 0,
    },
    Rank {
        name: RankName::Silver,
        icon: "🥈",
        min_words: 25,
    },
    Rank {
        name: RankName::Gold,
        icon: "🥇",
        min_words: 50,
    },
    Rank {
        name: RankName::Platinum,
        icon: "💎",
        min_words: 100,
    },
];

impl Rank {
    /// Highest rank whose threshold is reached.
    pub fn for_words(words_learned: usize) -> Rank {
        RANKS
            .iter()
            .rev()
            .find(|rank| words_learned >= rank.min_words)
            .copied()
            .unwrap_or(RANKS[0])
    }

    pub fn next(&self) -> Option<Rank> {
        RANKS
            .iter()
            .find(|rank| rank.min_words > self.min_words)
            .copied()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserProgress {
    pub words_learned: usize,
    pub accuracy: u32,
    pub rank: Rank,
}

impl UserProgress {
    /// The next rank and how many more words it takes, if any rank is left.
    pub fn next_rank(&self) -> Option<(Rank, usize)> {
        self.rank
            .next()
            .map(|next| (next, next.min_words.saturating_sub(self.words_learned)))
    }
}

/// Percentage of correct answers, rounded; 0 before the first answer.
pub fn accuracy(correct: u32, answered: u32) -> u32 {
    if answered == 0 {
        return 0;
    }
    // round half up, in integers
    let (correct, answered) = (u64::from(correct), u64::from(answered));
    ((200 * correct + answered) / (2 * answered)) as u32
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressCommand {
    MarkLearned(String),
    ToggleBookmark(String),
    RecordQuizResult { correct: bool },
}

/// Learned and bookmarked words plus quiz counters. Mutated only through
/// [`ProgressStore::apply`]; subscribers see every resulting [`UserProgress`].
pub struct ProgressStore {
    catalog: Catalog,
    learned: HashSet<String>,
    bookmarked: HashSet<String>,
    total_correct: u32,
    total_answered: u32,
    notifier: watch::Sender<UserProgress>,
}

impl ProgressStore {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_state(catalog, HashSet::new(), HashSet::new(), 0, 0)
    }

    /// Starting state of a new session: one word learned, one bookmarked,
    /// 15 of 18 quiz answers correct.
    pub fn seeded(catalog: Catalog) -> Self {
        Self::with_state(
            catalog,
            HashSet::from(["Benevolent".to_string()]),
            HashSet::from(["Serendipity".to_string()]),
            15,
            18,
        )
    }

    fn with_state(
        catalog: Catalog,
        learned: HashSet<String>,
        bookmarked: HashSet<String>,
        total_correct: u32,
        total_answered: u32,
    ) -> Self {
        let initial = UserProgress {
            words_learned: learned.len(),
            accuracy: accuracy(total_correct, total_answered),
            rank: Rank::for_words(learned.len()),
        };
        let (notifier, _) = watch::channel(initial);
        Self {
            catalog,
            learned,
            bookmarked,
            total_correct,
            total_answered,
            notifier,
        }
    }

    /// Applies a command, returns whether anything changed.
    pub fn apply(&mut self, command: ProgressCommand) -> bool {
        tracing::debug!(?command, "applying progress command");
        let changed = match command {
            ProgressCommand::MarkLearned(word) => self.learned.insert(word),
            ProgressCommand::ToggleBookmark(word) => {
                if !self.bookmarked.remove(&word) {
                    self.bookmarked.insert(word);
                }
                true
            }
            ProgressCommand::RecordQuizResult { correct } => {
                self.total_answered += 1;
                if correct {
                    self.total_correct += 1;
                }
                true
            }
        };
        if changed {
            self.notifier.send_replace(self.progress());
        }
        changed
    }

    pub fn mark_as_learned(&mut self, word: &str) -> bool {
        self.apply(ProgressCommand::MarkLearned(word.to_string()))
    }

    pub fn toggle_bookmark(&mut self, word: &str) {
        self.apply(ProgressCommand::ToggleBookmark(word.to_string()));
    }

    pub fn record_quiz_result(&mut self, correct: bool) {
        self.apply(ProgressCommand::RecordQuizResult { correct });
    }

    pub fn subscribe(&self) -> watch::Receiver<UserProgress> {
        self.notifier.subscribe()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_learned(&self, word: &str) -> bool {
        self.learned.contains(word)
    }

    pub fn is_bookmarked(&self, word: &str) -> bool {
        self.bookmarked.contains(word)
    }

    pub fn total_answered(&self) -> u32 {
        self.total_answered
    }

    /// Catalog words not learned yet, in catalog order.
    pub fn words_to_learn(&self) -> Vec<&Word> {
        self.catalog
            .words()
            .iter()
            .filter(|word| !self.learned.contains(&word.word))
            .collect()
    }

    /// Bookmarked catalog words, in catalog order.
    pub fn bookmarked_words(&self) -> Vec<&Word> {
        self.catalog
            .words()
            .iter()
            .filter(|word| self.bookmarked.contains(&word.word))
            .collect()
    }

    pub fn progress(&self) -> UserProgress {
        let words_learned = self.learned.len();
        UserProgress {
            words_learned,
            accuracy: accuracy(self.total_correct, self.total_answered),
            rank: Rank::for_words(words_learned),
        }
    }
}
