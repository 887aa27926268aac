use std::io::{self, Write};

/// Prompts and reads one line; `None` once stdin is closed.
pub fn input(prompt: &str) -> io::Result<Option<String>> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    if io::stdin().read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line))
}

pub fn str_to_bool(str: &str) -> Option<bool> {
    match str.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "yeah" | "yea" | "true" | "on" => Some(true),
        "n" | "no" | "nope" | "false" | "off" => Some(false),
        _ => None,
    }
}

/// Maps an answer to an option index: either its 1-based number or text
/// close enough to exactly one option.
pub fn resolve_choice(options: &[String], answer: &str) -> Option<usize> {
    let answer = answer.trim();
    if let Ok(number) = answer.parse::<usize>() {
        return (number >= 1 && number <= options.len()).then(|| number - 1);
    }
    let answer = answer.to_lowercase();
    let mut scored = options
        .iter()
        .enumerate()
        .map(|(index, option)| (index, strsim::jaro(&option.to_lowercase(), &answer)))
        .collect::<Vec<(usize, f64)>>();
    // most similar at the start
    scored.sort_unstable_by(|(_, a), (_, b)| b.total_cmp(a));
    let (best, best_score) = *scored.first()?;
    if best_score == 1.0 {
        return Some(best);
    }
    let runner_up = scored.get(1).map(|(_, score)| *score).unwrap_or(0.0);
    (best_score > 0.9 && best_score - runner_up > 0.25).then_some(best)
}
