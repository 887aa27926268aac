use super::{prompt, AppContext, Input};
use crate::navigation::NavEvent;
use crate::progress::ProgressStore;

fn render(progress: &ProgressStore) {
    let stats = progress.progress();
    println!("Rank: {}", stats.rank);
    println!("Words learned: {}", stats.words_learned);
    println!(
        "Accuracy: {}% over {} quiz answers",
        stats.accuracy,
        progress.total_answered()
    );
    match stats.next_rank() {
        Some((rank, remaining)) => println!("{remaining} more words to reach {rank}."),
        None => println!("You have reached the highest rank."),
    }
    println!();

    let bookmarks = progress.bookmarked_words();
    if bookmarks.is_empty() {
        println!("No bookmarks yet. Bookmark words from the learn screen.");
        return;
    }
    println!("Bookmarked words:");
    for word in bookmarks {
        println!("    {} - {}", word.word, word.definition);
    }
}

pub async fn run(ctx: &mut AppContext) -> anyhow::Result<NavEvent> {
    render(&ctx.progress);
    loop {
        match prompt("profile", false)? {
            Input::Nav(event) => return Ok(event),
            Input::Blank => {}
            Input::Text(_) => render(&ctx.progress),
        }
    }
}
