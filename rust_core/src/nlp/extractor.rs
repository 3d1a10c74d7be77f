//! Player name extraction.
//!
//! Tags candidate mentions, fuzzy-matches each against every alias variant,
//! and keeps the canonical names that clear
//! [`MATCH_THRESHOLD`](crate::matching::MATCH_THRESHOLD).

use super::{CandidateMention, EntityTagger};
use crate::matching::FuzzyMatcher;
use crate::tables::AliasTable;
use log::debug;
use std::collections::HashSet;

/// Resolves informal player mentions to canonical names.
pub struct NameExtractor<'t, T: EntityTagger, M: FuzzyMatcher> {
    aliases: &'t AliasTable,
    /// Alias keys in table order, collected once
    variants: Vec<&'t str>,
    tagger: T,
    matcher: M,
}

impl<'t, T: EntityTagger, M: FuzzyMatcher> NameExtractor<'t, T, M> {
    pub fn new(aliases: &'t AliasTable, tagger: T, matcher: M) -> Self {
        Self {
            aliases,
            variants: aliases.variants(),
            tagger,
            matcher,
        }
    }

    /// Candidate strings in order of first appearance, deduplicated case-insensitively.
    pub fn candidates(&self, text: &str) -> Vec<CandidateMention> {
        let mut seen = HashSet::new();
        let mut mentions = self.tagger.tag(text);
        mentions.retain(|m| seen.insert(m.text.to_lowercase()));
        mentions
    }

    /// Canonical names mentioned in `text`, first-match order, each at most once.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        if text.trim().is_empty() || self.variants.is_empty() {
            return names;
        }

        for mention in self.candidates(text) {
            let Some(best) = self
                .matcher
                .best_match(&mention.text.to_lowercase(), &self.variants)
            else {
                continue;
            };

            if !best.is_match() {
                debug!(
                    "Discarding '{}': best {} scored {}",
                    mention.text, best.value, best.score
                );
                continue;
            }

            let Some(canonical) = self.aliases.resolve(best.value) else {
                continue;
            };
            let canonical_lower = canonical.to_lowercase();
            if !names.iter().any(|n| n.to_lowercase() == canonical_lower) {
                debug!(
                    "Resolved '{}' -> {} (score {})",
                    mention.text, canonical, best.score
                );
                names.push(canonical.to_string());
            }
        }

        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{StrsimMatcher, MATCH_THRESHOLD};
    use crate::nlp::{HeuristicTagger, MentionKind};

    fn aliases() -> AliasTable {
        let mut table = AliasTable::new();
        table.insert("haaland", "Haaland");
        table.insert("son", "Son");
        table.insert("rashford", "Rashford");
        table.insert("kane", "Kane");
        table
    }

    fn extractor(table: &AliasTable) -> NameExtractor<'_, HeuristicTagger, StrsimMatcher> {
        NameExtractor::new(table, HeuristicTagger::new(), StrsimMatcher::new())
    }

    #[test]
    fn test_extract_simple() {
        let table = aliases();
        let names = extractor(&table).extract("Should I pick Haaland or Son?");
        assert_eq!(names, vec!["Haaland", "Son"]);
    }

    #[test]
    fn test_extract_with_typos_and_variants() {
        let mut table = aliases();
        table.insert("haland", "Haaland");
        table.insert("rashy", "Rashford");
        let names = extractor(&table).extract("Is Haland a better choice than Rashy?");
        assert_eq!(names, vec!["Haaland", "Rashford"]);
    }

    #[test]
    fn test_near_miss_spelling_resolves() {
        let table = aliases();
        // "Haalnd" is not a variant but scores above the threshold
        let names = extractor(&table).extract("Captain Haalnd this week");
        assert_eq!(names, vec!["Haaland"]);
    }

    #[test]
    fn test_same_player_twice_kept_once() {
        let mut table = aliases();
        table.insert("erling", "Haaland");
        let names = extractor(&table).extract("Haaland, Erling, HAALAND and Erling Haaland");
        assert_eq!(names, vec!["Haaland"]);
    }

    #[test]
    fn test_unresolved_candidates_are_dropped() {
        let table = aliases();
        let names = extractor(&table).extract("Palmer or Saka for Chelsea?");
        assert!(names.is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        let table = aliases();
        assert!(extractor(&table).extract("").is_empty());
        assert!(extractor(&table).extract("no names here at all").is_empty());

        let empty = AliasTable::new();
        assert!(extractor(&empty).extract("Haaland or Son").is_empty());
    }

    #[test]
    fn test_possessives_resolve_to_stem() {
        let table = aliases();
        let ex = extractor(&table);
        assert_eq!(
            ex.extract("Is Son's form better or Haaland's?"),
            vec!["Son", "Haaland"]
        );
        assert_eq!(ex.extract("Son’s fixtures vs Haaland"), vec!["Son", "Haaland"]);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut table = aliases();
        table.insert("alexander", "Alexander-Arnold");
        let ex = extractor(&table);
        let matcher = StrsimMatcher::new();

        // one edit over five characters
        assert_eq!(matcher.similarity("Kanes", "kane"), MATCH_THRESHOLD);
        assert_eq!(ex.extract("Kanes"), vec!["Kane"]);

        // two edits over nine characters
        assert_eq!(matcher.similarity("Alexandra", "alexander"), 78);
        assert!(ex.extract("Alexandra").is_empty());
    }

    #[test]
    fn test_candidates_dedup_keeps_first() {
        let table = aliases();
        let candidates = extractor(&table).candidates("Son then SON then Son");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text, "Son");
        assert_eq!(candidates[0].kind, MentionKind::ProperNoun);
    }

    #[test]
    fn test_alias_resolution_is_idempotent() {
        let table = aliases();
        let ex = extractor(&table);
        for canonical in ["Haaland", "Son", "Rashford", "Kane"] {
            assert_eq!(ex.extract(canonical), vec![canonical.to_string()]);
            assert_eq!(table.normalize(&canonical.to_lowercase()), canonical);
        }
    }
}
