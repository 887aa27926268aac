use super::{prompt, AppContext, Input};
use crate::navigation::NavEvent;

pub const MIN_DESCRIPTION_LEN: usize = 10;

/// Trimmed description, or the message to show instead of searching.
pub fn validate_description(description: &str) -> Result<&str, &'static str> {
    let description = description.trim();
    if description.chars().count() < MIN_DESCRIPTION_LEN {
        return Err("Please enter a more descriptive phrase (at least 10 characters).");
    }
    Ok(description)
}

pub async fn run(ctx: &mut AppContext) -> anyhow::Result<NavEvent> {
    println!("Describe a word and we'll try to find it.");
    loop {
        let line = match prompt("search", false)? {
            Input::Nav(event) => return Ok(event),
            Input::Blank => continue,
            Input::Text(line) => line,
        };
        let description = match validate_description(&line) {
            Ok(description) => description,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        println!("Searching...");
        let Some(words) = ctx.loads.run(ctx.gateway.reverse_lookup(description)).await else {
            println!("Search cancelled.");
            continue;
        };
        if words.is_empty() {
            println!("No matching words found.");
        } else {
            println!("Suggestions:");
            for word in words {
                println!("    {word}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_descriptions_are_rejected() {
        assert!(validate_description("too short").is_err());
        assert!(validate_description("   shiny    ").is_err());
        assert_eq!(
            validate_description("  a very happy feeling "),
            Ok("a very happy feeling")
        );
    }

    #[test]
    fn length_counts_characters() {
        assert!(validate_description("éééééééééé").is_ok());
        assert!(validate_description("ééééééééé").is_err());
    }
}
