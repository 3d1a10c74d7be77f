//! Keyword intent classification.
//!
//! Rules are evaluated in declaration order and the first match wins, so an
//! RMT comment that also mentions a transfer is still classified as RMT.

use crate::models::Intent;
use crate::utils::text::tokenize;

/// A single classification rule.
#[derive(Debug, Clone)]
pub struct IntentRule {
    /// Intent returned when this rule matches
    pub intent: Intent,
    /// Case-insensitive substrings
    pub phrases: &'static [&'static str],
    /// Case-insensitive whole words
    pub words: &'static [&'static str],
}

impl IntentRule {
    /// Check the rule against lowercased text and its word tokens.
    pub fn matches(&self, text_lower: &str, tokens: &[String]) -> bool {
        self.phrases.iter().any(|p| text_lower.contains(p))
            || self.words.iter().any(|w| tokens.iter().any(|t| t == w))
    }
}

/// Ordered classification rules.
pub static INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::RateMyTeam,
        phrases: &["rate my team", "rmt"],
        words: &[],
    },
    IntentRule {
        intent: Intent::Transfer,
        phrases: &["transfer", "buy", "sell"],
        words: &[],
    },
    // "or" is whole-word only, it would otherwise match "for", "more", "morning"
    IntentRule {
        intent: Intent::Comparison,
        phrases: &["vs", "versus"],
        words: &["or"],
    },
];

/// Classify a comment. Total: falls back to [`Intent::Unknown`].
pub fn classify(text: &str) -> Intent {
    classify_with(INTENT_RULES, text)
}

/// Classify against a custom rule list.
pub fn classify_with(rules: &[IntentRule], text: &str) -> Intent {
    let text_lower = text.to_lowercase();
    let tokens = tokenize(&text_lower);

    rules
        .iter()
        .find(|rule| rule.matches(&text_lower, &tokens))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rmt() {
        assert_eq!(classify("RMT please!"), Intent::RateMyTeam);
        assert_eq!(classify("Could you Rate My Team?"), Intent::RateMyTeam);
    }

    #[test]
    fn test_rmt_takes_precedence() {
        assert_eq!(
            classify("rmt - should I sell Salah or Son?"),
            Intent::RateMyTeam
        );
        assert_eq!(classify("Quick RMT, transfer vs hold"), Intent::RateMyTeam);
    }

    #[test]
    fn test_transfer() {
        assert_eq!(classify("Should I transfer in Kane?"), Intent::Transfer);
        assert_eq!(classify("Buying Palmer this week"), Intent::Transfer);
        assert_eq!(classify("Sell Son or Saka?"), Intent::Transfer);
    }

    #[test]
    fn test_comparison() {
        assert_eq!(classify("Who is better, Haaland or Kane?"), Intent::Comparison);
        assert_eq!(classify("Salah vs. Saka"), Intent::Comparison);
        assert_eq!(classify("Palmer VERSUS Foden"), Intent::Comparison);
    }

    #[test]
    fn test_comparison_joined_vs() {
        assert_eq!(classify("Salah-vs-Son?"), Intent::Comparison);
        assert_eq!(classify("Haaland/vs/Son"), Intent::Comparison);
        assert_eq!(classify("Palmer-versus-Foden"), Intent::Comparison);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(classify("Good morning!"), Intent::Unknown);
        assert_eq!(classify("What a score for the team"), Intent::Unknown);
        assert_eq!(classify(""), Intent::Unknown);
    }

    #[test]
    fn test_rule_order_is_explicit() {
        let rules = [INTENT_RULES[2].clone(), INTENT_RULES[1].clone()];
        assert_eq!(classify_with(&rules, "buy Son or Kane"), Intent::Comparison);
        assert_eq!(classify_with(&[], "rmt"), Intent::Unknown);
    }
}
