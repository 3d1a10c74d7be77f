//! Reply generation from intent, extracted names and predicted points.
//!
//! Lookups match on player name only and take the first row in table order.
//! A player missing from the table is scored at [`DEFAULT_POINTS`] instead of
//! failing the reply.

use crate::models::Intent;
use crate::tables::PredictionTable;
use crate::utils::text::title_case;

pub const FALLBACK_RESPONSE: &str = "I'm sorry, I couldn't understand your query.";

/// Points assumed for a player with no prediction row
pub const DEFAULT_POINTS: f64 = 1.0;

/// Team shown for a player with no prediction row
pub const UNKNOWN_TEAM: &str = "Unknown Team";

const TRANSFER_HEADER: &str = "Here are the predicted points for the players:";

/// A player's prediction, or the default stand-in
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlayer {
    pub name: String,
    /// Title-cased team, `None` when defaulted
    pub team: Option<String>,
    pub points: f64,
}

impl ResolvedPlayer {
    pub fn is_default(&self) -> bool {
        self.team.is_none()
    }

    fn team_or_unknown(&self) -> &str {
        self.team.as_deref().unwrap_or(UNKNOWN_TEAM)
    }
}

/// Builds replies against a prediction table.
#[derive(Debug, Clone, Copy)]
pub struct ResponseGenerator<'t> {
    predictions: &'t PredictionTable,
}

impl<'t> ResponseGenerator<'t> {
    pub fn new(predictions: &'t PredictionTable) -> Self {
        Self { predictions }
    }

    /// Reply for an intent. Unmet name-count preconditions fall back.
    pub fn generate(&self, intent: Intent, names: &[String]) -> String {
        match intent {
            Intent::Comparison => self.comparison(names),
            Intent::Transfer => self.transfer(names),
            Intent::RateMyTeam => self.rate_my_team(names),
            Intent::Unknown => None,
        }
        .unwrap_or_else(|| FALLBACK_RESPONSE.to_string())
    }

    /// First prediction row for the player, or the default.
    pub fn resolve(&self, name: &str) -> ResolvedPlayer {
        match self.predictions.first_for_player(name) {
            Some(entry) => ResolvedPlayer {
                name: name.to_string(),
                team: Some(title_case(&entry.team)),
                points: entry.points,
            },
            None => ResolvedPlayer {
                name: name.to_string(),
                team: None,
                points: DEFAULT_POINTS,
            },
        }
    }

    /// Exactly two names. Ties go to the second player.
    fn comparison(&self, names: &[String]) -> Option<String> {
        let [first, second] = names else {
            return None;
        };
        let a = self.resolve(first);
        let b = self.resolve(second);
        let better = if a.points > b.points { &a } else { &b };

        Some(format!(
            "Based on predicted points, {} ({}) is the better choice.",
            better.name,
            better.team_or_unknown()
        ))
    }

    /// At least one name.
    fn transfer(&self, names: &[String]) -> Option<String> {
        if names.is_empty() {
            return None;
        }

        let mut out = String::from(TRANSFER_HEADER);
        for name in names {
            let player = self.resolve(name);
            out.push('\n');
            match &player.team {
                Some(team) => {
                    out.push_str(&format!("{} ({}): {:.2} points", player.name, team, player.points))
                }
                None => out.push_str(&format!("{}: {:.2} point (default)", player.name, player.points)),
            }
        }
        Some(out)
    }

    /// Any number of names, including none.
    fn rate_my_team(&self, names: &[String]) -> Option<String> {
        let total: f64 = names.iter().map(|n| self.resolve(n).points).sum();
        Some(format!(
            "Your team's total predicted points are approximately {:.2}.",
            total
        ))
    }
}
