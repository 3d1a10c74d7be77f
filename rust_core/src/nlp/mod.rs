//! Candidate mention tagging.
//!
//! The [`EntityTagger`] trait finds spans that might name a player: entity
//! spans (person, organization, place) and single proper-noun tokens. The
//! default [`HeuristicTagger`] is rule based and needs no model files.

pub mod extractor;

use crate::utils::text::{words, Word};

/// Entity categories kept as player-name candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    Person,
    Organization,
    Place,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MentionKind {
    Entity(EntityLabel),
    ProperNoun,
}

/// A span that may name an entity. Lives only while one comment is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMention {
    /// Span text with original case
    pub text: String,
    /// Byte offset in the comment
    pub start: usize,
    pub kind: MentionKind,
}

/// Finds candidate mentions in free text.
pub trait EntityTagger: Send + Sync {
    /// Mentions in text order; entity spans precede the tokens they start with
    fn tag(&self, text: &str) -> Vec<CandidateMention>;

    fn tagger_name(&self) -> &str;
}

/// Words that are capitalized at sentence start or are forum jargon, never names.
const FUNCTION_WORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "also", "am", "an", "and", "any", "anyone", "are",
    "as", "at", "be", "because", "been", "before", "best", "better", "both", "but", "by", "can",
    "could", "did", "do", "does", "either", "every", "for", "from", "go", "going", "good", "had",
    "has", "have", "he", "hello", "her", "here", "hey", "hi", "his", "how", "i", "i'd", "i'll",
    "i'm", "i've", "if", "in", "into", "is", "it", "it's", "its", "just", "keep", "me", "my",
    "need", "no", "not", "now", "of", "ok", "on", "or", "our", "please", "rate", "she", "should",
    "so", "still", "team", "thanks", "that", "the", "their", "them", "then", "there", "these",
    "they", "this", "those", "thoughts", "to", "too", "vs", "versus", "was", "we", "were",
    "what", "what's", "when", "where", "which", "who", "who's", "why", "will", "with", "would",
    "yes", "you", "your",
    // fantasy football shorthand
    "bb", "fh", "fpl", "gw", "rmt", "tc", "wc",
];

/// Final words that mark a multi-word span as a club.
const CLUB_SUFFIXES: &[&str] = &[
    "albion", "athletic", "city", "county", "fc", "forest", "hotspur", "palace", "rovers",
    "town", "united", "villa", "wanderers",
];

/// Words that put the following span in a place role.
const PLACE_PREPOSITIONS: &[&str] = &["at", "from", "in"];

fn is_function_word(word: &str) -> bool {
    FUNCTION_WORDS.contains(&word)
}

/// Rule-based tagger: capitalized non-function words are proper nouns, and
/// runs of two or more adjacent proper nouns form an entity span.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTagger;

impl HeuristicTagger {
    pub fn new() -> Self {
        Self
    }

    fn is_proper_noun(word: &str) -> bool {
        let starts_upper = word.chars().next().map_or(false, char::is_uppercase);
        starts_upper && !is_function_word(&word.to_lowercase())
    }

    fn label_run(run: &[Word<'_>], previous: Option<&Word<'_>>) -> EntityLabel {
        let last = run.last().map(|w| w.text.to_lowercase()).unwrap_or_default();
        if CLUB_SUFFIXES.contains(&last.as_str()) {
            return EntityLabel::Organization;
        }
        let after_preposition = previous
            .map(|w| PLACE_PREPOSITIONS.contains(&w.text.to_lowercase().as_str()))
            .unwrap_or(false);
        if after_preposition {
            EntityLabel::Place
        } else {
            EntityLabel::Person
        }
    }
}

impl EntityTagger for HeuristicTagger {
    fn tag(&self, text: &str) -> Vec<CandidateMention> {
        let ws = words(text);
        let mut mentions = Vec::new();

        let mut i = 0;
        while i < ws.len() {
            if !Self::is_proper_noun(ws[i].text) {
                i += 1;
                continue;
            }

            // Extend the run while the next proper noun is separated only by spaces
            let start = i;
            let mut end = i + 1;
            while end < ws.len() && Self::is_proper_noun(ws[end].text) {
                let prev = &ws[end - 1];
                let gap = &text[prev.start + prev.text.len()..ws[end].start];
                if !gap.chars().all(char::is_whitespace) {
                    break;
                }
                end += 1;
            }

            let run = &ws[start..end];
            if run.len() >= 2 {
                let first = &run[0];
                let last = &run[run.len() - 1];
                let previous = start.checked_sub(1).map(|p| &ws[p]);
                mentions.push(CandidateMention {
                    text: text[first.start..last.start + last.text.len()].to_string(),
                    start: first.start,
                    kind: MentionKind::Entity(Self::label_run(run, previous)),
                });
            }
            for w in run {
                mentions.push(CandidateMention {
                    text: w.text.to_string(),
                    start: w.start,
                    kind: MentionKind::ProperNoun,
                });
            }

            i = end;
        }

        mentions
    }

    fn tagger_name(&self) -> &str {
        "HeuristicTagger"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(mentions: &[CandidateMention]) -> Vec<&str> {
        mentions.iter().map(|m| m.text.as_str()).collect()
    }

    #[test]
    fn test_proper_nouns_skip_function_words() {
        let tagger = HeuristicTagger::new();
        let mentions = tagger.tag("Is Haaland or Son the better pick?");
        assert_eq!(texts(&mentions), vec!["Haaland", "Son"]);
        assert!(mentions.iter().all(|m| m.kind == MentionKind::ProperNoun));
    }

    #[test]
    fn test_person_span_before_tokens() {
        let tagger = HeuristicTagger::new();
        let mentions = tagger.tag("Should I bring Erling Haaland?");
        assert_eq!(texts(&mentions), vec!["Erling Haaland", "Erling", "Haaland"]);
        assert_eq!(mentions[0].kind, MentionKind::Entity(EntityLabel::Person));
        assert_eq!(mentions[0].start, mentions[1].start);
    }

    #[test]
    fn test_entity_labels() {
        let tagger = HeuristicTagger::new();

        let mentions = tagger.tag("Bukayo Saka is on fire");
        assert_eq!(mentions[0].kind, MentionKind::Entity(EntityLabel::Person));

        let mentions = tagger.tag("avoid Man City defenders");
        assert_eq!(mentions[0].text, "Man City");
        assert_eq!(
            mentions[0].kind,
            MentionKind::Entity(EntityLabel::Organization)
        );

        let mentions = tagger.tag("any differentials from North London?");
        assert_eq!(mentions[0].text, "North London");
        assert_eq!(mentions[0].kind, MentionKind::Entity(EntityLabel::Place));
    }

    #[test]
    fn test_punctuation_breaks_runs() {
        let tagger = HeuristicTagger::new();
        let mentions = tagger.tag("Salah, Saka");
        assert_eq!(texts(&mentions), vec!["Salah", "Saka"]);
    }

    #[test]
    fn test_lowercase_and_empty() {
        let tagger = HeuristicTagger::new();
        assert!(tagger.tag("haaland or son").is_empty());
        assert!(tagger.tag("").is_empty());
        assert!(tagger.tag("RMT please, GW5 thoughts?").is_empty());
    }
}
