use crate::domain::model::WordFrequency;
use std::collections::HashMap;

/// Keeps ASCII letters and digits, lowercasing the letters.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

pub fn extract_words(line: &str) -> impl Iterator<Item = &str> {
    line.split([' ', '\n', '\t']).filter(|word| !word.is_empty())
}

#[derive(Debug, Default)]
pub struct WordCounter {
    counts: HashMap<String, usize>,
    total: usize,
}

impl WordCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self, line: &str) {
        for raw in extract_words(line) {
            let word = normalize_word(raw);
            if word.is_empty() {
                continue;
            }
            *self.counts.entry(word).or_insert(0) += 1;
            self.total += 1;
        }
    }

    pub fn total_words(&self) -> usize {
        self.total
    }

    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }

    /// Frequencies sorted by count descending, then alphabetically.
    pub fn into_sorted(self) -> Vec<WordFrequency> {
        let mut frequencies: Vec<WordFrequency> = self
            .counts
            .into_iter()
            .map(|(word, count)| WordFrequency { word, count })
            .collect();
        frequencies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        frequencies
    }
}

pub fn count_words(text: &str) -> Vec<WordFrequency> {
    let mut counter = WordCounter::new();
    for line in text.lines() {
        counter.add_line(line);
    }
    counter.into_sorted()
}
