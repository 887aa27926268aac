use lexicon::SwipeItem;

use super::{prompt, AppContext, Input};
use crate::navigation::NavEvent;
use crate::utilities::str_to_bool;

pub const GAME_LENGTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Not synonyms.
    Left,
    /// Synonyms.
    Right,
}

impl Swipe {
    pub fn parse(input: &str) -> Option<Swipe> {
        match input.trim().to_ascii_lowercase().as_str() {
            "r" | "right" => Some(Swipe::Right),
            "l" | "left" => Some(Swipe::Left),
            other => str_to_bool(other).map(|synonyms| {
                if synonyms {
                    Swipe::Right
                } else {
                    Swipe::Left
                }
            }),
        }
    }

    fn asserts_synonyms(self) -> bool {
        self == Swipe::Right
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    Loading(usize),
    Presenting(usize),
    Feedback(usize),
    Complete,
}

/// Ten rounds of "are these two words synonyms?". Rounds are fetched one at
/// a time and nothing here touches learned words.
#[derive(Debug, Clone)]
pub struct SwipeSession {
    phase: SwipePhase,
    item: Option<SwipeItem>,
    score: usize,
}

impl Default for SwipeSession {
    fn default() -> Self {
        Self {
            phase: SwipePhase::Loading(0),
            item: None,
            score: 0,
        }
    }
}

impl SwipeSession {
    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    pub fn item(&self) -> Option<&SwipeItem> {
        self.item.as_ref()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn present(&mut self, item: SwipeItem) {
        if let SwipePhase::Loading(round) = self.phase {
            self.item = Some(item);
            self.phase = SwipePhase::Presenting(round);
        }
    }

    /// `None` unless a pair is on screen.
    pub fn swipe(&mut self, swipe: Swipe) -> Option<bool> {
        let SwipePhase::Presenting(round) = self.phase else {
            return None;
        };
        let item = self.item.as_ref()?;
        let correct = swipe.asserts_synonyms() == item.are_synonyms;
        if correct {
            self.score += 1;
        }
        self.phase = SwipePhase::Feedback(round);
        Some(correct)
    }

    pub fn advance(&mut self) -> SwipePhase {
        if let SwipePhase::Feedback(round) = self.phase {
            self.item = None;
            self.phase = if round + 1 < GAME_LENGTH {
                SwipePhase::Loading(round + 1)
            } else {
                SwipePhase::Complete
            };
        }
        self.phase
    }
}

/// Fetches the pair for the round being loaded; false when cancelled.
pub async fn load_round(ctx: &AppContext, session: &mut SwipeSession) -> bool {
    match ctx.loads.run(ctx.gateway.synonym_pair()).await {
        Some(item) => {
            session.present(item);
            true
        }
        None => false,
    }
}

pub async fn play(ctx: &mut AppContext) -> anyhow::Result<Option<NavEvent>> {
    let mut session = SwipeSession::default();
    println!("Swipe right (r) if the words are synonyms, left (l) if they are not.");
    while let SwipePhase::Loading(round) = session.phase() {
        if !load_round(ctx, &mut session).await {
            println!("Loading cancelled.");
            return Ok(None);
        }
        if let Some(item) = session.item() {
            println!("Round {} of {GAME_LENGTH}", round + 1);
            println!("    {}  /  {}", item.word1, item.word2);
        }

        loop {
            let answer = match prompt("swipe", false)? {
                Input::Nav(event) => return Ok(Some(event)),
                Input::Blank => continue,
                Input::Text(answer) => answer,
            };
            if answer.eq_ignore_ascii_case("back") {
                return Ok(None);
            }
            match Swipe::parse(&answer).and_then(|swipe| session.swipe(swipe)) {
                Some(true) => println!("Correct!"),
                Some(false) => println!("Incorrect!"),
                None => {
                    println!("Swipe left (l) or right (r).");
                    continue;
                }
            }
            break;
        }
        tokio::time::sleep(ctx.swipe_feedback).await;
        session.advance();
    }
    println!("Game over! You scored {} out of {GAME_LENGTH}.", session.score());
    Ok(None)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use lexicon::Gateway;

    use super::*;
    use crate::catalog::Catalog;
    use crate::daily::DailyContent;
    use crate::load::LoadGuard;
    use crate::progress::ProgressStore;
    use crate::storage::Storage;

    async fn context() -> AppContext {
        AppContext {
            gateway: Gateway::fixture(),
            progress: ProgressStore::seeded(Catalog::default()),
            daily: DailyContent::new(
                Storage::in_memory().await.unwrap(),
                chrono::Duration::hours(24),
            ),
            loads: LoadGuard::default(),
            swipe_feedback: Duration::ZERO,
        }
    }

    fn pair(are_synonyms: bool) -> SwipeItem {
        SwipeItem {
            word1: "Happy".into(),
            word2: if are_synonyms { "Joyful" } else { "Sad" }.into(),
            are_synonyms,
        }
    }

    #[test]
    fn swipes_parse_from_short_and_long_forms() {
        for input in ["r", "Y", "yes", "right\n"] {
            assert_eq!(Swipe::parse(input), Some(Swipe::Right));
        }
        for input in ["l", "n", "NO", "left"] {
            assert_eq!(Swipe::parse(input), Some(Swipe::Left));
        }
        assert_eq!(Swipe::parse("up"), None);
    }

    #[test]
    fn correctness_compares_with_the_true_relation() {
        let mut session = SwipeSession::default();
        session.present(pair(false));
        assert_eq!(session.swipe(Swipe::Left), Some(true));

        session.advance();
        session.present(pair(true));
        assert_eq!(session.swipe(Swipe::Left), Some(false));
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn swipes_count_only_while_presenting() {
        let mut session = SwipeSession::default();
        assert_eq!(session.swipe(Swipe::Right), None);
        session.present(pair(true));
        assert_eq!(session.swipe(Swipe::Right), Some(true));
        assert_eq!(session.phase(), SwipePhase::Feedback(0));
        assert_eq!(session.swipe(Swipe::Right), None);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn game_completes_after_ten_rounds() {
        let mut session = SwipeSession::default();
        for round in 0..GAME_LENGTH {
            assert_eq!(session.phase(), SwipePhase::Loading(round));
            session.present(pair(true));
            assert_eq!(session.phase(), SwipePhase::Presenting(round));
            session.swipe(Swipe::Right);
            session.advance();
        }
        assert_eq!(session.phase(), SwipePhase::Complete);
        assert!(session.item().is_none());
        assert_eq!(session.score(), GAME_LENGTH);
    }

    #[tokio::test]
    async fn full_game_leaves_progress_alone() {
        let ctx = context().await;
        let before = ctx.progress.progress();
        let answered = ctx.progress.total_answered();
        let updates = ctx.progress.subscribe();

        let mut session = SwipeSession::default();
        let mut swipes = [Swipe::Right, Swipe::Left].into_iter().cycle();
        while let SwipePhase::Loading(_) = session.phase() {
            assert!(load_round(&ctx, &mut session).await);
            assert!(session.swipe(swipes.next().unwrap()).is_some());
            session.advance();
        }

        assert_eq!(session.phase(), SwipePhase::Complete);
        // the fixture pair is always synonyms
        assert_eq!(session.score(), GAME_LENGTH / 2);
        assert_eq!(ctx.progress.progress(), before);
        assert_eq!(ctx.progress.total_answered(), answered);
        assert!(!updates.has_changed().unwrap());
    }
}
