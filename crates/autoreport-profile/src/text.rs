//! Word, sentence and vocabulary statistics for free text.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use autoreport_model::{TextStats, WordCount, round_to};

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("word pattern compiles"));

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Tokens shorter than this are left out of the word ranking.
const MIN_RANKED_LEN: usize = 3;

/// Function words left out of the word ranking.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "and", "or", "but", "in", "on", "at", "to",
    "for", "of", "with", "by", "from", "as", "this", "that", "it", "its", "be", "been", "being",
    "have", "has", "had", "do", "did", "i", "you", "he", "she", "we", "they", "not", "so", "if",
    "all", "can", "will",
];

/// Computes [`TextStats`] for `text`, ranking the `top_words` most frequent
/// content words.
pub fn profile_text(text: &str, top_words: usize) -> TextStats {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = WORD.find_iter(&lowered).map(|m| m.as_str()).collect();
    let sentence_count = text
        .split(SENTENCE_TERMINATORS)
        .filter(|s| !s.trim().is_empty())
        .count();
    let line_count = text.lines().filter(|l| !l.trim().is_empty()).count();

    let word_count = words.len();
    let unique_words = words.iter().collect::<HashSet<_>>().len();
    let total_len: usize = words.iter().map(|w| w.chars().count()).sum();

    TextStats {
        char_count: text.chars().count(),
        word_count,
        unique_words,
        sentence_count,
        line_count,
        avg_word_length: round_to(total_len as f64 / word_count.max(1) as f64, 2),
        avg_sentence_length: round_to(word_count as f64 / sentence_count.max(1) as f64, 2),
        top_words: rank_words(&words, top_words),
        lexical_diversity: round_to(unique_words as f64 / word_count.max(1) as f64, 4),
    }
}

fn rank_words(words: &[&str], top: usize) -> Vec<WordCount> {
    let stop: HashSet<&str> = STOP_WORDS.iter().copied().collect();
    let mut ranked: Vec<WordCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for &word in words {
        if stop.contains(word) || word.chars().count() < MIN_RANKED_LEN {
            continue;
        }
        match index.get(word) {
            Some(&slot) => ranked[slot].count += 1,
            None => {
                index.insert(word, ranked.len());
                ranked.push(WordCount {
                    word: word.to_string(),
                    count: 1,
                });
            }
        }
    }
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(top);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_passage() {
        let stats = profile_text("Cats chase mice. Mice run fast. Cats are fast.", 20);
        assert_eq!(stats.word_count, 9);
        assert_eq!(stats.unique_words, 6);
        assert_eq!(stats.sentence_count, 3);
        assert_eq!(stats.line_count, 1);
        assert_eq!(stats.lexical_diversity, 0.6667);
        assert_eq!(stats.avg_sentence_length, 3.0);
        let top: Vec<(&str, usize)> = stats
            .top_words
            .iter()
            .map(|w| (w.word.as_str(), w.count))
            .collect();
        assert_eq!(
            top,
            vec![("cats", 2), ("mice", 2), ("fast", 2), ("chase", 1), ("run", 1)]
        );
    }

    #[test]
    fn empty_text() {
        let stats = profile_text("", 20);
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.sentence_count, 0);
        assert_eq!(stats.lexical_diversity, 0.0);
        assert_eq!(stats.avg_word_length, 0.0);
        assert!(stats.top_words.is_empty());
    }

    #[test]
    fn counts_non_empty_lines_and_unicode_chars() {
        let stats = profile_text("héllo wörld\n\n  \nsecond line!", 20);
        assert_eq!(stats.line_count, 2);
        assert_eq!(stats.char_count, 28);
        assert_eq!(stats.word_count, 4);
    }
}
