//! Moves and move records.
//!
//! A `Move` is a proposed removal: a pile index and a positive amount. A
//! `MoveRecord` is a move that was applied, tagged with the actor who made
//! it. Records render the way a front end shows the last move, e.g.
//! "Player removed 3 stone(s) from pile 2" (piles numbered from 1).

use serde::{Deserialize, Serialize};

use super::actor::Actor;
use crate::error::EngineError;

/// A removal of `amount` items from the pile at index `pile`.
///
/// ## Example
///
/// ```
/// use nim_engine::core::Move;
///
/// // Clicking the stone at height 1 of a 4-stone pile removes 3 stones.
/// let mv = Move::from_stone(0, 4, 1).unwrap();
/// assert_eq!(mv, Move::new(0, 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Pile index (0-based).
    pub pile: usize,

    /// Number of items to remove.
    pub amount: u32,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(pile: usize, amount: u32) -> Self {
        Self { pile, amount }
    }

    /// Translate a click on a stone into a move.
    ///
    /// Stones are indexed from the bottom of the pile (0) upward. Clicking a
    /// stone removes it together with every stone above it.
    pub fn from_stone(pile: usize, pile_size: u32, stone_index: u32) -> Result<Self, EngineError> {
        if stone_index >= pile_size {
            return Err(EngineError::invalid_move(
                pile,
                format!("no stone at height {stone_index} in a pile of {pile_size}"),
            ));
        }
        Ok(Self::new(pile, pile_size - stone_index))
    }
}

impl From<(usize, u32)> for Move {
    fn from((pile, amount): (usize, u32)) -> Self {
        Self::new(pile, amount)
    }
}

/// A move that has been applied, with the actor who made it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who moved.
    pub actor: Actor,

    /// Pile index (0-based).
    pub pile: usize,

    /// Number of items removed.
    pub amount: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub const fn new(actor: Actor, mv: Move) -> Self {
        Self {
            actor,
            pile: mv.pile,
            amount: mv.amount,
        }
    }

    /// The move without the actor.
    #[must_use]
    pub const fn as_move(&self) -> Move {
        Move::new(self.pile, self.amount)
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} removed {} stone(s) from pile {}",
            self.actor,
            self.amount,
            self.pile + 1
        )
    }
}
