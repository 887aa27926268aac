use super::{print_navigation_help, prompt, quiz, swipe, AppContext, Input};
use crate::navigation::NavEvent;

fn print_menu() {
    println!("Practice makes perfect. Pick a game:");
    println!("    quiz   five definition questions");
    println!("    swipe  ten rounds of synonym or not");
}

pub async fn run(ctx: &mut AppContext) -> anyhow::Result<NavEvent> {
    print_menu();
    loop {
        let command = match prompt("practice", false)? {
            Input::Nav(event) => return Ok(event),
            Input::Blank => continue,
            Input::Text(command) => command.to_ascii_lowercase(),
        };
        let left_with = match command.as_str() {
            "quiz" => quiz::play(ctx).await?,
            "swipe" => swipe::play(ctx).await?,
            _ => {
                println!("Unknown command {command}.");
                print_navigation_help();
                continue;
            }
        };
        if let Some(event) = left_with {
            return Ok(event);
        }
        print_menu();
    }
}
