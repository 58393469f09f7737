//! Opponent difficulty tiers.

use serde::{Deserialize, Serialize};

use crate::strategy::{MixedPolicy, MovePolicy, OptimalPolicy, RandomPolicy};

/// How the automated opponent chooses its moves.
///
/// Difficulty never affects which moves are legal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniformly random legal move.
    Easy,
    /// Coin flip between Easy and Hard on every move.
    #[default]
    Normal,
    /// Nim-sum strategy, random only when already lost.
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// The move-selection policy for this tier.
    #[must_use]
    pub fn policy(self) -> Box<dyn MovePolicy> {
        match self {
            Difficulty::Easy => Box::new(RandomPolicy),
            Difficulty::Normal => Box::new(MixedPolicy::default()),
            Difficulty::Hard => Box::new(OptimalPolicy),
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{other}' (expected easy, normal or hard)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" NORMAL ".parse::<Difficulty>(), Ok(Difficulty::Normal));
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>(), Ok(difficulty));
        }
    }

    #[test]
    fn test_default_is_normal() {
        assert_eq!(Difficulty::default(), Difficulty::Normal);
    }
}
