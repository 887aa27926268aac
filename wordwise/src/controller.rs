use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::navigation::{NavEvent, Screen, Transition, View};
use crate::progress::{Rank, UserProgress};
use crate::screens::{self, print_navigation_help, AppContext};

/// Owns the app state and moves between screens.
pub struct Controller {
    ctx: AppContext,
    screen: Screen,
}

impl Controller {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            screen: Screen::default(),
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let announcer = spawn_rank_announcer(self.ctx.progress.subscribe());
        let source = self.ctx.gateway.metadata();
        tracing::info!(source = %source.name, remote = source.remote, "starting");
        if !source.remote {
            println!("Offline mode: showing sample content.");
        }
        print_navigation_help();

        let result = self.event_loop().await;
        announcer.abort();
        result
    }

    async fn event_loop(&mut self) -> anyhow::Result<()> {
        loop {
            println!();
            println!("== {} ==", self.screen.label());
            let event = match self.screen {
                Screen::Main(View::Home) => screens::home::run(&mut self.ctx).await?,
                Screen::Main(View::Learn) => screens::learn::run(&mut self.ctx).await?,
                Screen::Main(View::Practice) => screens::practice::run(&mut self.ctx).await?,
                Screen::Main(View::Search) => screens::search::run(&mut self.ctx).await?,
                Screen::Main(View::Profile) => screens::profile::run(&mut self.ctx).await?,
                Screen::Dictionary { .. } => screens::dictionary::run(&mut self.ctx).await?,
            };
            match self.screen.on(event) {
                Transition::To(next) => {
                    tracing::debug!(from = %self.screen.label(), to = %next.label(), "navigating");
                    self.screen = next;
                }
                Transition::Exit => return Ok(()),
                Transition::Ignored => println!("{}", ignored_hint(self.screen, event)),
            }
        }
    }
}

pub fn ignored_hint(screen: Screen, event: NavEvent) -> &'static str {
    match (screen, event) {
        (Screen::Dictionary { .. }, _) => "Close the dictionary first (:close).",
        (Screen::Main(_), NavEvent::OpenDictionary) => "The dictionary opens from the home screen.",
        _ => "The dictionary is not open.",
    }
}

/// The new rank when `progress` moved past `previous`.
pub fn rank_up(previous: Rank, progress: &UserProgress) -> Option<Rank> {
    (progress.rank.min_words > previous.min_words).then_some(progress.rank)
}

fn spawn_rank_announcer(mut updates: watch::Receiver<UserProgress>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut rank = updates.borrow_and_update().rank;
        while updates.changed().await.is_ok() {
            let progress = *updates.borrow_and_update();
            if let Some(next) = rank_up(rank, &progress) {
                println!();
                println!("Rank up! You are now {next}.");
            }
            rank = progress.rank;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::progress::{ProgressStore, RANKS};

    #[test]
    fn hints_explain_ignored_events() {
        let overlay = Screen::Dictionary { over: View::Home };
        assert_eq!(
            ignored_hint(overlay, NavEvent::Go(View::Learn)),
            "Close the dictionary first (:close)."
        );
        assert_eq!(
            ignored_hint(Screen::Main(View::Search), NavEvent::OpenDictionary),
            "The dictionary opens from the home screen."
        );
        assert_eq!(
            ignored_hint(Screen::Main(View::Home), NavEvent::CloseDictionary),
            "The dictionary is not open."
        );
    }

    #[test]
    fn rank_up_only_when_the_threshold_is_crossed() {
        let mut store = ProgressStore::new(Catalog::default());
        let bronze = store.progress().rank;
        for n in 0..RANKS[1].min_words - 1 {
            store.mark_as_learned(&format!("word-{n}"));
        }
        assert_eq!(rank_up(bronze, &store.progress()), None);

        store.mark_as_learned("one more");
        assert_eq!(rank_up(bronze, &store.progress()), Some(RANKS[1]));
        assert_eq!(rank_up(RANKS[1], &store.progress()), None);
    }

    #[tokio::test]
    async fn subscribers_see_learned_words() {
        let mut store = ProgressStore::new(Catalog::default());
        let mut updates = store.subscribe();
        store.mark_as_learned("Ephemeral");
        updates.changed().await.unwrap();
        assert_eq!(updates.borrow_and_update().words_learned, 1);
    }
}
