//! Fuzzy Matching Abstractions
//!
//! Defines the FuzzyMatcher trait used to resolve free-text mentions against
//! the alias table, so the scoring algorithm can be swapped without touching
//! extraction or reply logic.

use crate::utils::text::normalize;
use strsim::normalized_levenshtein;

/// Minimum score (0-100) for a mention to count as a player.
pub const MATCH_THRESHOLD: u8 = 80;

/// Best corpus entry for a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMatch<'a> {
    pub value: &'a str,
    pub score: u8,
}

impl BestMatch<'_> {
    pub fn is_match(&self) -> bool {
        self.score >= MATCH_THRESHOLD
    }
}

/// Similarity-scored string matcher.
///
/// Implementations only need [`FuzzyMatcher::similarity`]; the default
/// [`FuzzyMatcher::best_match`] scans the corpus in order and keeps the
/// first entry with the highest score.
pub trait FuzzyMatcher: Send + Sync {
    /// Similarity of two strings on a 0-100 scale
    fn similarity(&self, a: &str, b: &str) -> u8;

    /// Highest scoring corpus entry, or `None` for an empty corpus
    fn best_match<'a>(&self, candidate: &str, corpus: &[&'a str]) -> Option<BestMatch<'a>> {
        let mut best: Option<BestMatch<'a>> = None;
        for &value in corpus {
            let score = self.similarity(candidate, value);
            if best.map_or(true, |b| score > b.score) {
                best = Some(BestMatch { value, score });
                if score == 100 {
                    break;
                }
            }
        }
        best
    }

    /// Matcher name for logging and debugging
    fn matcher_name(&self) -> &str;
}

/// Edit-distance matcher backed by strsim.
///
/// Score is the better of the plain normalized Levenshtein ratio and the
/// ratio after sorting words, so "Kane Harry" scores like "harry kane".
#[derive(Debug, Clone, Copy, Default)]
pub struct StrsimMatcher;

impl StrsimMatcher {
    pub fn new() -> Self {
        Self
    }
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

impl FuzzyMatcher for StrsimMatcher {
    fn similarity(&self, a: &str, b: &str) -> u8 {
        let a = normalize(a);
        let b = normalize(b);
        if a.is_empty() || b.is_empty() {
            return 0;
        }

        let plain = normalized_levenshtein(&a, &b);
        let sorted = normalized_levenshtein(&sorted_tokens(&a), &sorted_tokens(&b));
        (plain.max(sorted) * 100.0).round().clamp(0.0, 100.0) as u8
    }

    fn matcher_name(&self) -> &str {
        "StrsimMatcher"
    }
}
