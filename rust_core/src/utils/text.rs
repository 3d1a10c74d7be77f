//! Text helpers shared by the classifier, tagger and reply formatting.

use regex::Regex;
use std::sync::OnceLock;

/// Word tokens: a letter followed by letters, marks, apostrophes or hyphens,
/// or a run of digits.
fn word_regex() -> &'static Regex {
    static WORD_RE: OnceLock<Regex> = OnceLock::new();
    WORD_RE.get_or_init(|| {
        Regex::new(r"\p{L}[\p{L}\p{M}'’\-]*|\p{N}+").expect("word pattern is valid")
    })
}

/// A word with its byte offset in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub start: usize,
}

/// Trailing hyphens, apostrophes and a possessive `'s` are not part of a name.
fn strip_trailing(word: &str) -> &str {
    let word = word.trim_end_matches(['\'', '’', '-']);
    ["'s", "’s", "'S", "’S"]
        .iter()
        .find_map(|&clitic| word.strip_suffix(clitic))
        .filter(|stem| !stem.is_empty())
        .unwrap_or(word)
}

/// Split text into words, keeping original case and byte offsets.
pub fn words(text: &str) -> Vec<Word<'_>> {
    word_regex()
        .find_iter(text)
        .map(|m| Word {
            text: strip_trailing(m.as_str()),
            start: m.start(),
        })
        .filter(|w| !w.text.is_empty())
        .collect()
}

/// Normalize a string for comparison: lowercase, drop punctuation, collapse whitespace.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercased word tokens.
pub fn tokenize(s: &str) -> Vec<String> {
    words(s).iter().map(|w| w.text.to_lowercase()).collect()
}

/// Check if `words` contains `phrase` as a contiguous run of whole words.
pub fn contains_phrase(words: &[String], phrase: &str) -> bool {
    let phrase_words: Vec<&str> = phrase.split_whitespace().collect();
    if phrase_words.is_empty() {
        return false;
    }

    words
        .windows(phrase_words.len())
        .any(|window| window.iter().zip(&phrase_words).all(|(w, p)| w == p))
}

/// Title-case every alphabetic run: "man city" -> "Man City", "o'neil" -> "O'Neil".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_keep_offsets() {
        let ws = words("Is Haaland or Son?");
        let texts: Vec<&str> = ws.iter().map(|w| w.text).collect();
        assert_eq!(texts, vec!["Is", "Haaland", "or", "Son"]);
        assert_eq!(ws[1].start, 3);
        assert_eq!(ws[3].start, 14);
    }

    #[test]
    fn test_words_handle_accents_and_apostrophes() {
        let texts: Vec<&str> = words("Ødegaard vs. N'Golo, Alexander-Arnold's")
            .iter()
            .map(|w| w.text)
            .collect();
        assert_eq!(texts, vec!["Ødegaard", "vs", "N'Golo", "Alexander-Arnold"]);
    }

    #[test]
    fn test_words_drop_possessive() {
        let texts: Vec<&str> = words("Son's form, Haaland’s goals, SAKA'S assists")
            .iter()
            .map(|w| w.text)
            .collect();
        assert_eq!(texts, vec!["Son", "form", "Haaland", "goals", "SAKA", "assists"]);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Man.   City! "), "man city");
    }

    #[test]
    fn test_contains_phrase_whole_words() {
        let ws = tokenize("Good morning, rate my team");
        assert!(contains_phrase(&ws, "rate my team"));
        assert!(!contains_phrase(&ws, "or"));
        assert!(!contains_phrase(&ws, ""));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("man city"), "Man City");
        assert_eq!(title_case("TOTTENHAM"), "Tottenham");
        assert_eq!(title_case("nott'm forest"), "Nott'M Forest");
        assert_eq!(title_case(""), "");
    }
}
