use super::PlayerId;
use std::fmt;

/// Per-player birth counters for a competitive match.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ScoreTracker {
    first: u64,
    second: u64,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn score(&self, player: PlayerId) -> u64 {
        match player {
            PlayerId::First => self.first,
            PlayerId::Second => self.second,
        }
    }

    /// (first, second)
    pub const fn totals(&self) -> (u64, u64) {
        (self.first, self.second)
    }

    pub fn record_birth(&mut self, player: PlayerId) {
        match player {
            PlayerId::First => self.first += 1,
            PlayerId::Second => self.second += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Strictly higher counter wins, equal counters draw
    pub fn outcome(&self) -> Outcome {
        use std::cmp::Ordering;
        match self.first.cmp(&self.second) {
            Ordering::Greater => Outcome::FirstWins,
            Ordering::Less => Outcome::SecondWins,
            Ordering::Equal => Outcome::Draw,
        }
    }
}

/// Result of a finished competitive match.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::FirstWins => write!(f, "First player wins!"),
            Outcome::SecondWins => write!(f, "Second player wins!"),
            Outcome::Draw => write!(f, "Draw!"),
        }
    }
}
