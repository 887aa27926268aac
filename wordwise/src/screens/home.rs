use chrono::Utc;
use futures::future::join;

use super::{print_navigation_help, print_stats, prompt, AppContext, Input};
use crate::navigation::NavEvent;

async fn render(ctx: &AppContext) {
    println!("Hello, Learner! Let's expand your vocabulary today.");
    println!();

    let now = Utc::now();
    let daily = join(
        ctx.daily.word_of_the_day(&ctx.gateway, now),
        ctx.daily.quote_of_the_day(&ctx.gateway, now),
    );
    match ctx.loads.run(daily).await {
        Some((word, quote)) => {
            println!("Word of the Day:");
            super::print_word(&word);
            println!();
            println!("\u{201c}{}\u{201d}", quote.quote);
            println!("    - {}", quote.author);
        }
        None => println!("Loading cancelled."),
    }
    println!();
    print_stats(&ctx.progress.progress());
    println!("Type define to look up a word, refresh for a new word of the day.");
}

pub async fn run(ctx: &mut AppContext) -> anyhow::Result<NavEvent> {
    render(ctx).await;
    loop {
        match prompt("home", false)? {
            Input::Nav(event) => return Ok(event),
            Input::Blank => {}
            Input::Text(command) => match command.to_ascii_lowercase().as_str() {
                "refresh" => {
                    ctx.daily.invalidate().await;
                    render(ctx).await;
                }
                "stats" => print_stats(&ctx.progress.progress()),
                _ => {
                    println!("Unknown command {command}.");
                    print_navigation_help();
                }
            },
        }
    }
}
