//! Move-selection policies.

use crate::core::{GameRng, Move, PileSet};
use crate::error::EngineError;

/// Which rule produced a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionKind {
    /// Random legal move.
    Random,
    /// Nim-sum-zeroing move.
    Optimal,
}

/// A chosen move together with how it was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub mv: Move,
    pub kind: DecisionKind,
}

impl Decision {
    fn random(mv: Move) -> Self {
        Self {
            mv,
            kind: DecisionKind::Random,
        }
    }

    fn optimal(mv: Move) -> Self {
        Self {
            mv,
            kind: DecisionKind::Optimal,
        }
    }
}

/// Policy for choosing a move from a position.
pub trait MovePolicy: Send + Sync {
    /// Choose a legal move.
    ///
    /// Fails with `NoMoveAvailable` if every pile is empty. Never mutates
    /// the position.
    fn decide(&self, piles: &PileSet, rng: &mut GameRng) -> Result<Decision, EngineError>;

    /// Choose a legal move, discarding how it was chosen.
    fn choose_move(&self, piles: &PileSet, rng: &mut GameRng) -> Result<Move, EngineError> {
        self.decide(piles, rng).map(|d| d.mv)
    }
}

/// Uniform random policy.
///
/// Picks a non-empty pile uniformly, then an amount uniformly in
/// `[1, pile_size]`.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl RandomPolicy {
    fn random_move(piles: &PileSet, rng: &mut GameRng) -> Result<Move, EngineError> {
        let candidates = piles.non_empty_indices();
        let &pile = rng.choose(&candidates).ok_or(EngineError::NoMoveAvailable)?;
        let size = piles.get(pile).ok_or(EngineError::NoMoveAvailable)?;
        Ok(Move::new(pile, rng.gen_inclusive(1, size)))
    }
}

impl MovePolicy for RandomPolicy {
    fn decide(&self, piles: &PileSet, rng: &mut GameRng) -> Result<Decision, EngineError> {
        Self::random_move(piles, rng).map(Decision::random)
    }
}

/// Optimal (nim-sum) policy.
///
/// From a winning position plays the lowest-index nim-sum-zeroing move.
/// From a losing position no move keeps the nim-sum at zero, so it plays a
/// random move instead.
#[derive(Clone, Debug, Default)]
pub struct OptimalPolicy;

impl MovePolicy for OptimalPolicy {
    fn decide(&self, piles: &PileSet, rng: &mut GameRng) -> Result<Decision, EngineError> {
        if piles.is_empty() {
            return Err(EngineError::NoMoveAvailable);
        }
        match piles.winning_move() {
            Some(mv) => Ok(Decision::optimal(mv)),
            None => RandomPolicy::random_move(piles, rng).map(Decision::random),
        }
    }
}

/// Mixture of the random and optimal policies.
///
/// Plays optimally with probability `optimal_probability`, randomly
/// otherwise. Normal difficulty uses 0.5.
#[derive(Clone, Debug)]
pub struct MixedPolicy {
    optimal_probability: f64,
}

impl Default for MixedPolicy {
    fn default() -> Self {
        Self {
            optimal_probability: 0.5,
        }
    }
}

impl MixedPolicy {
    /// Create a mixture with the given chance of playing optimally.
    ///
    /// Fails with `InvalidConfig` unless the probability lies in `[0, 1]`.
    pub fn new(optimal_probability: f64) -> Result<Self, EngineError> {
        if !(0.0..=1.0).contains(&optimal_probability) {
            return Err(EngineError::InvalidConfig(format!(
                "optimal probability must be in [0, 1], got {optimal_probability}"
            )));
        }
        Ok(Self {
            optimal_probability,
        })
    }

    /// Chance of playing the optimal move on each decision.
    #[must_use]
    pub fn optimal_probability(&self) -> f64 {
        self.optimal_probability
    }
}

impl MovePolicy for MixedPolicy {
    fn decide(&self, piles: &PileSet, rng: &mut GameRng) -> Result<Decision, EngineError> {
        if piles.is_empty() {
            return Err(EngineError::NoMoveAvailable);
        }
        if rng.gen_bool(self.optimal_probability) {
            OptimalPolicy.decide(piles, rng)
        } else {
            RandomPolicy.decide(piles, rng)
        }
    }
}
