use lexicon::{Difficulty, Word};

/// The fixed seed list of words the app teaches.
#[derive(Debug, Clone)]
pub struct Catalog {
    words: Vec<Word>,
}

impl Catalog {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(initial_words())
    }
}

fn entry(
    word: &str,
    pronunciation: &str,
    definition: &str,
    example: &str,
    synonyms: [&str; 3],
    difficulty: Difficulty,
) -> Word {
    Word {
        word: word.to_string(),
        pronunciation: pronunciation.to_string(),
        definition: definition.to_string(),
        example: example.to_string(),
        synonyms: synonyms.iter().map(|synonym| synonym.to_string()).collect(),
        difficulty,
    }
}

pub fn initial_words() -> Vec<Word> {
    vec![
        entry(
            "Ephemeral",
            "/əˈfem(ə)rəl/",
            "Lasting for a very short time.",
            "The beauty of the cherry blossoms is ephemeral.",
            ["transitory", "fleeting", "momentary"],
            Difficulty::Medium,
        ),
        entry(
            "Ubiquitous",
            "/yo͞oˈbikwədəs/",
            "Present, appearing, or found everywhere.",
            "Smartphones have become ubiquitous in modern society.",
            ["omnipresent", "pervasive", "universal"],
            Difficulty::Medium,
        ),
        entry(
            "Mellifluous",
            "/məˈliflo͞oəs/",
            "A sound that is sweet and smooth, pleasing to hear.",
            "Her mellifluous voice captivated the audience.",
            ["euphonious", "melodious", "dulcet"],
            Difficulty::Hard,
        ),
        entry(
            "Serendipity",
            "/ˌserənˈdipədē/",
            "The occurrence and development of events by chance in a happy or beneficial way.",
            "Discovering the hidden cafe was a moment of pure serendipity.",
            ["fluke", "chance", "happy accident"],
            Difficulty::Hard,
        ),
        entry(
            "Benevolent",
            "/bəˈnevələnt/",
            "Well meaning and kindly.",
            "A benevolent smile from a stranger can brighten your day.",
            ["kind", "charitable", "magnanimous"],
            Difficulty::Easy,
        ),
        entry(
            "Fastidious",
            "/faˈstidēəs/",
            "Very attentive to and concerned about accuracy and detail.",
            "He was a fastidious dresser, always impeccably attired.",
            ["meticulous", "scrupulous", "punctilious"],
            Difficulty::Hard,
        ),
        entry(
            "Gregarious",
            "/ɡrəˈɡerēəs/",
            "Fond of company; sociable.",
            "He was a popular and gregarious man.",
            ["sociable", "convivial", "outgoing"],
            Difficulty::Easy,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn seed_catalog_has_seven_unique_words() {
        let catalog = Catalog::default();
        assert_eq!(catalog.words().len(), 7);
        let unique: HashSet<&str> = catalog.words().iter().map(|w| w.word.as_str()).collect();
        assert_eq!(unique.len(), 7);
        assert_eq!(catalog.words()[0].word, "Ephemeral");
    }
}
