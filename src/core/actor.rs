//! The two sides of a game.
//!
//! `Player` is the human (or whoever drives the presentation layer) and
//! always moves first after a reset. `Opponent` is the automated side.

use serde::{Deserialize, Serialize};

/// One of the two sides of a Nim game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    Player,
    Opponent,
}

impl Actor {
    /// Both actors, in turn order.
    pub const ALL: [Actor; 2] = [Actor::Player, Actor::Opponent];

    /// Get the other actor.
    #[must_use]
    pub const fn other(self) -> Actor {
        match self {
            Actor::Player => Actor::Opponent,
            Actor::Opponent => Actor::Player,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Actor::Player => "Player",
            Actor::Opponent => "Opponent",
        }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_actor() {
        assert_eq!(Actor::Player.other(), Actor::Opponent);
        assert_eq!(Actor::Opponent.other(), Actor::Player);
        assert_eq!(Actor::Player.other().other(), Actor::Player);
    }

    #[test]
    fn test_actor_display() {
        assert_eq!(format!("{}", Actor::Player), "Player");
        assert_eq!(format!("{}", Actor::Opponent), "Opponent");
    }

    #[test]
    fn test_actor_serialization() {
        let json = serde_json::to_string(&Actor::Opponent).unwrap();
        let deserialized: Actor = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Actor::Opponent);
    }
}
