//! Win/loss/draw tally over a team's recent matches.

use serde::{Deserialize, Serialize};

use crate::models::Match;

/// How a single match counts toward [`Statistics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchOutcome {
    Win,
    Loss,
    /// Any status other than "won" or "lost", including an absent or empty one.
    Draw,
}

impl MatchOutcome {
    pub fn classify(status: Option<&str>) -> Self {
        match status {
            Some(s) if s.eq_ignore_ascii_case("won") => MatchOutcome::Win,
            Some(s) if s.eq_ignore_ascii_case("lost") => MatchOutcome::Loss,
            _ => MatchOutcome::Draw,
        }
    }

    pub fn of(m: &Match) -> Self {
        Self::classify(m.match_status.as_deref())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub win: u32,
    pub loss: u32,
    pub draw: u32,
}

/// One segment of the results pie chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatSlice {
    pub name: &'static str,
    pub value: u32,
    pub color: &'static str,
}

impl Statistics {
    pub fn record(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Win => self.win += 1,
            MatchOutcome::Loss => self.loss += 1,
            MatchOutcome::Draw => self.draw += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.win + self.loss + self.draw
    }

    /// Chart series in display order: wins, losses, draws.
    pub fn slices(&self) -> [StatSlice; 3] {
        [
            StatSlice {
                name: "Wins",
                value: self.win,
                color: "#4CAF50",
            },
            StatSlice {
                name: "Losses",
                value: self.loss,
                color: "#F44336",
            },
            StatSlice {
                name: "Draws",
                value: self.draw,
                color: "#FFEB3B",
            },
        ]
    }
}

/// Tally `matches` into win/loss/draw counts.
///
/// Order does not matter; an empty slice gives all zeros.
pub fn aggregate(matches: &[Match]) -> Statistics {
    matches.iter().fold(Statistics::default(), |mut stats, m| {
        stats.record(MatchOutcome::of(m));
        stats
    })
}
