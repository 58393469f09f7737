//! Arena match statistics.

use serde::{Deserialize, Serialize};

use crate::core::Actor;
use crate::rules::Outcome;

/// Statistics collected over a series of games.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaStats {
    /// Games played.
    pub games: u32,

    /// Games won by the Player side.
    pub player_wins: u32,

    /// Games won by the Opponent side.
    pub opponent_wins: u32,

    /// Moves made across all games.
    pub total_moves: u64,
}

impl ArenaStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished game.
    pub fn record(&mut self, outcome: Outcome, moves: usize) {
        self.games += 1;
        self.total_moves += moves as u64;
        match outcome.winner() {
            Actor::Player => self.player_wins += 1,
            Actor::Opponent => self.opponent_wins += 1,
        }
    }

    /// Fraction of games won by the Player side.
    #[must_use]
    pub fn player_win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.player_wins) / f64::from(self.games)
        }
    }

    /// Average moves per game.
    #[must_use]
    pub fn avg_moves(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_moves as f64 / f64::from(self.games)
        }
    }
}
