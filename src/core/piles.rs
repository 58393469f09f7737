//! Pile state: an ordered sequence of pile sizes.
//!
//! ## PileSet
//!
//! - Pile index is the position in the sequence and never changes during a
//!   game. The number of piles is fixed until the set is replaced.
//! - The only mutation is `remove`, which takes a positive amount not larger
//!   than the pile. A failed `remove` leaves the set untouched.
//! - `nim_sum` is the XOR of all sizes. A position is lost for the player to
//!   move (under optimal play by the other side) iff the nim-sum is zero.
//!
//! ```
//! use nim_engine::core::{Move, PileSet};
//!
//! let mut piles = PileSet::from_sizes(vec![5, 7]).unwrap();
//! assert_eq!(piles.nim_sum(), 2);
//! assert_eq!(piles.winning_move(), Some(Move::new(1, 2)));
//!
//! piles.remove(1, 2).unwrap();
//! assert!(piles.is_losing_for_mover());
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::Move;
use super::rng::GameRng;
use crate::error::EngineError;

/// Ordered pile sizes.
///
/// SmallVec keeps typical boards (up to 8 piles) off the heap.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileSet {
    piles: SmallVec<[u32; 8]>,
}

impl PileSet {
    /// Roll `count` piles with sizes uniform in `[min_size, max_size]`.
    pub fn new(count: usize, min_size: u32, max_size: u32, rng: &mut GameRng) -> Result<Self, EngineError> {
        validate_shape(count, min_size, max_size)?;

        let piles = (0..count)
            .map(|_| rng.gen_inclusive(min_size, max_size))
            .collect();

        Ok(Self { piles })
    }

    /// Build a set from explicit sizes.
    ///
    /// Zero-sized piles are allowed; an empty list is not.
    pub fn from_sizes(sizes: impl Into<Vec<u32>>) -> Result<Self, EngineError> {
        let sizes = sizes.into();
        if sizes.is_empty() {
            return Err(EngineError::InvalidConfig(
                "pile count must be at least 1".into(),
            ));
        }
        Ok(Self {
            piles: SmallVec::from_vec(sizes),
        })
    }

    /// Remove `amount` items from pile `pile_index`.
    pub fn remove(&mut self, pile_index: usize, amount: u32) -> Result<(), EngineError> {
        let size = *self.piles.get(pile_index).ok_or_else(|| {
            EngineError::invalid_move(pile_index, format!("only {} piles", self.piles.len()))
        })?;

        if amount == 0 {
            return Err(EngineError::invalid_move(pile_index, "must remove at least one"));
        }
        if amount > size {
            return Err(EngineError::invalid_move(
                pile_index,
                format!("cannot remove {amount}, pile has {size}"),
            ));
        }

        self.piles[pile_index] = size - amount;
        Ok(())
    }

    /// Apply a `Move`. Same rules as `remove`.
    pub fn apply(&mut self, mv: Move) -> Result<(), EngineError> {
        self.remove(mv.pile, mv.amount)
    }

    /// Check whether a move would be accepted, without applying it.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        mv.amount > 0 && self.get(mv.pile).is_some_and(|size| mv.amount <= size)
    }

    /// XOR of all pile sizes (0 for no piles).
    #[must_use]
    pub fn nim_sum(&self) -> u32 {
        self.piles.iter().fold(0, |acc, &size| acc ^ size)
    }

    /// True iff every pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.piles.iter().all(|&size| size == 0)
    }

    /// Sum of all pile sizes.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.piles.iter().map(|&size| u64::from(size)).sum()
    }

    /// Indices of non-empty piles, in order.
    #[must_use]
    pub fn non_empty_indices(&self) -> Vec<usize> {
        self.piles
            .iter()
            .enumerate()
            .filter(|&(_, &size)| size > 0)
            .map(|(i, _)| i)
            .collect()
    }

    /// True iff the player to move loses against optimal play.
    ///
    /// The empty board counts as lost: the mover has nothing to take.
    #[must_use]
    pub fn is_losing_for_mover(&self) -> bool {
        self.nim_sum() == 0
    }

    /// The move that brings the nim-sum to zero, if one exists.
    ///
    /// Scans piles in index order and returns the first pile whose size
    /// shrinks when XORed with the nim-sum. Lowest index wins ties.
    #[must_use]
    pub fn winning_move(&self) -> Option<Move> {
        let nim_sum = self.nim_sum();
        if nim_sum == 0 {
            return None;
        }

        self.piles.iter().enumerate().find_map(|(i, &size)| {
            let target = size ^ nim_sum;
            (target < size).then(|| Move::new(i, size - target))
        })
    }

    /// Size of one pile.
    #[must_use]
    pub fn get(&self, pile_index: usize) -> Option<u32> {
        self.piles.get(pile_index).copied()
    }

    /// Number of piles (empty ones included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.piles.len()
    }

    /// Pile sizes in index order.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.piles
    }

    /// Iterate over pile sizes.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.piles.iter().copied()
    }
}

impl std::fmt::Display for PileSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.piles.as_slice())
    }
}

/// Validate a pile count and size range.
pub(crate) fn validate_shape(count: usize, min_size: u32, max_size: u32) -> Result<(), EngineError> {
    if count == 0 {
        return Err(EngineError::InvalidConfig(
            "pile count must be at least 1".into(),
        ));
    }
    if min_size > max_size {
        return Err(EngineError::InvalidConfig(format!(
            "min_size {min_size} is greater than max_size {max_size}"
        )));
    }
    Ok(())
}
