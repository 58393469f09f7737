//! The game engine: turn state machine, move application, opponent moves.
//!
//! ## State machine
//!
//! - `InProgress { turn }` flips to the other actor after every successful
//!   move that leaves something on the board.
//! - The move that empties the board ends the game and its mover wins
//!   (normal play). The terminal state is absorbing: further moves fail
//!   with `GameOver`.
//! - `reset` returns to a fresh board with the Player to move, from any
//!   state.
//!
//! Every failing call leaves piles, turn, outcome and history untouched.
//!
//! ## Example
//!
//! ```
//! use nim_engine::core::{Actor, PileSet};
//! use nim_engine::rules::{Difficulty, GameEngine, Outcome};
//!
//! let piles = PileSet::from_sizes(vec![3]).unwrap();
//! let mut engine = GameEngine::with_piles(piles, Difficulty::Hard, Some(42)).unwrap();
//!
//! engine.apply_move(Actor::Player, 0, 3).unwrap();
//! assert_eq!(engine.outcome(), Some(Outcome::PlayerWins));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Actor, GameConfig, GameRng, Move, MoveRecord, PileSet};
use crate::error::EngineError;

use super::difficulty::Difficulty;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWins,
    OpponentWins,
}

impl Outcome {
    /// The outcome in which `actor` wins.
    #[must_use]
    pub const fn win_for(actor: Actor) -> Self {
        match actor {
            Actor::Player => Outcome::PlayerWins,
            Actor::Opponent => Outcome::OpponentWins,
        }
    }

    /// The winning actor.
    #[must_use]
    pub const fn winner(self) -> Actor {
        match self {
            Outcome::PlayerWins => Actor::Player,
            Outcome::OpponentWins => Actor::Opponent,
        }
    }

    /// Check if an actor won.
    #[must_use]
    pub fn is_winner(self, actor: Actor) -> bool {
        self.winner() == actor
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Wins!", self.winner())
    }
}

/// Create a game with freshly rolled piles and an entropy seed.
pub fn new_game(
    pile_count: usize,
    min_size: u32,
    max_size: u32,
    difficulty: Difficulty,
) -> Result<GameEngine, EngineError> {
    GameEngine::new(GameConfig::new(pile_count, min_size, max_size, difficulty))
}

/// One Nim session: piles plus turn, outcome and history.
///
/// The engine exclusively owns its state. Hosts running several sessions
/// create one engine per session.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    piles: PileSet,
    turn: Actor,
    outcome: Option<Outcome>,
    history: Vec<MoveRecord>,
    /// Stream for rolling piles on start/reset.
    pile_rng: GameRng,
    /// Stream for opponent decisions.
    decision_rng: GameRng,
}

impl GameEngine {
    /// Create a game from a configuration.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let rng = GameRng::from_seed_or_entropy(config.seed);
        let mut pile_rng = rng.for_context("piles");
        let decision_rng = rng.for_context("opponent");
        let piles = roll_piles(&config, &mut pile_rng)?;

        log::info!(
            "new game: piles={} difficulty={} seed={}",
            piles,
            config.difficulty,
            rng.seed()
        );

        Ok(Self {
            config,
            piles,
            turn: Actor::Player,
            outcome: None,
            history: Vec::new(),
            pile_rng,
            decision_rng,
        })
    }

    /// Create a game from an explicit position.
    ///
    /// Later resets roll piles within the range spanned by `piles`.
    pub fn with_piles(piles: PileSet, difficulty: Difficulty, seed: Option<u64>) -> Result<Self, EngineError> {
        if piles.is_empty() {
            return Err(EngineError::InvalidConfig(
                "starting position has no items".into(),
            ));
        }

        let min_size = piles.iter().min().unwrap_or(1);
        let max_size = piles.iter().max().unwrap_or(1);
        let config = GameConfig {
            pile_count: piles.len(),
            min_size,
            max_size,
            difficulty,
            seed,
        };

        let rng = GameRng::from_seed_or_entropy(seed);
        log::info!("new game: piles={} difficulty={} seed={}", piles, difficulty, rng.seed());

        Ok(Self {
            config,
            piles,
            turn: Actor::Player,
            outcome: None,
            history: Vec::new(),
            pile_rng: rng.for_context("piles"),
            decision_rng: rng.for_context("opponent"),
        })
    }

    // === Lifecycle ===

    /// Start a new game, optionally with a different number of piles.
    ///
    /// The Player always moves first after a reset. On failure nothing
    /// changes.
    pub fn reset(&mut self, pile_count: Option<usize>) -> Result<(), EngineError> {
        let config = match pile_count {
            Some(count) => self.config.clone().with_pile_count(count),
            None => self.config.clone(),
        };
        config.validate()?;

        let mut pile_rng = self.pile_rng.clone();
        let piles = roll_piles(&config, &mut pile_rng)?;

        log::info!("reset: piles={}", piles);

        self.config = config;
        self.pile_rng = pile_rng;
        self.piles = piles;
        self.turn = Actor::Player;
        self.outcome = None;
        self.history.clear();
        Ok(())
    }

    /// Change the opponent's difficulty for subsequent decisions.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        log::debug!("difficulty: {} -> {}", self.config.difficulty, difficulty);
        self.config.difficulty = difficulty;
    }

    // === Moves ===

    /// Apply a move for `actor`.
    ///
    /// Checks, in order: game over, the actor's turn, move legality. A
    /// finished game answers `GameOver` to both actors.
    pub fn apply_move(&mut self, actor: Actor, pile_index: usize, amount: u32) -> Result<MoveRecord, EngineError> {
        if self.outcome.is_some() {
            return Err(EngineError::GameOver);
        }
        if actor != self.turn {
            log::debug!("rejected move by {}: turn is {}", actor, self.turn);
            return Err(EngineError::NotYourTurn {
                actor,
                turn: self.turn,
            });
        }
        if let Err(err) = self.piles.remove(pile_index, amount) {
            log::debug!("rejected move by {}: {}", actor, err);
            return Err(err);
        }

        let record = MoveRecord::new(actor, Move::new(pile_index, amount));
        self.history.push(record);
        log::debug!("{} -> piles={}", record, self.piles);

        if self.piles.is_empty() {
            let outcome = Outcome::win_for(actor);
            log::info!("game over after {} moves: {}", self.history.len(), outcome);
            self.outcome = Some(outcome);
        } else {
            self.turn = actor.other();
        }

        Ok(record)
    }

    /// Apply a `Move` for `actor`.
    pub fn apply(&mut self, actor: Actor, mv: Move) -> Result<MoveRecord, EngineError> {
        self.apply_move(actor, mv.pile, mv.amount)
    }

    /// Apply a move for the Player.
    pub fn apply_player_move(&mut self, pile_index: usize, amount: u32) -> Result<MoveRecord, EngineError> {
        self.apply_move(Actor::Player, pile_index, amount)
    }

    /// Apply a move for the Opponent.
    pub fn apply_opponent_move(&mut self, pile_index: usize, amount: u32) -> Result<MoveRecord, EngineError> {
        self.apply_move(Actor::Opponent, pile_index, amount)
    }

    /// Apply a click on a stone: that stone and every stone above it go.
    pub fn apply_stone_click(
        &mut self,
        actor: Actor,
        pile_index: usize,
        stone_index: u32,
    ) -> Result<MoveRecord, EngineError> {
        if self.outcome.is_some() {
            return Err(EngineError::GameOver);
        }
        let size = self.piles.get(pile_index).ok_or_else(|| {
            EngineError::invalid_move(pile_index, format!("only {} piles", self.piles.len()))
        })?;
        let mv = Move::from_stone(pile_index, size, stone_index)?;
        self.apply(actor, mv)
    }

    /// Decide the opponent's next move without applying it.
    ///
    /// Consumes opponent randomness but leaves piles, turn, outcome and
    /// history untouched. Commit the move with `apply_opponent_move`.
    pub fn compute_opponent_move(&mut self) -> Result<Move, EngineError> {
        if self.piles.is_empty() {
            return Err(EngineError::NoMoveAvailable);
        }

        let difficulty = self.config.difficulty;
        let decision = difficulty
            .policy()
            .decide(&self.piles, &mut self.decision_rng)?;

        log::debug!(
            "opponent ({}) chose {:?} via {:?} rule on piles={} (nim-sum {})",
            difficulty,
            decision.mv,
            decision.kind,
            self.piles,
            self.piles.nim_sum()
        );

        Ok(decision.mv)
    }

    /// Decide and apply the opponent's move in one step.
    pub fn play_opponent_turn(&mut self) -> Result<MoveRecord, EngineError> {
        if self.outcome.is_some() {
            return Err(EngineError::GameOver);
        }
        if self.turn != Actor::Opponent {
            return Err(EngineError::NotYourTurn {
                actor: Actor::Opponent,
                turn: self.turn,
            });
        }
        let mv = self.compute_opponent_move()?;
        self.apply(Actor::Opponent, mv)
    }

    // === Accessors ===

    /// Pile sizes in index order.
    #[must_use]
    pub fn piles(&self) -> &[u32] {
        self.piles.as_slice()
    }

    /// The pile set itself.
    #[must_use]
    pub fn pile_set(&self) -> &PileSet {
        &self.piles
    }

    /// Whose turn it is. After the game ends this stays on the winner.
    #[must_use]
    pub fn turn(&self) -> Actor {
        self.turn
    }

    /// The outcome, once the board is empty.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// True once the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The most recent move of this game.
    #[must_use]
    pub fn last_move(&self) -> Option<MoveRecord> {
        self.history.last().copied()
    }

    /// All moves of this game, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Items left on the board.
    #[must_use]
    pub fn total_remaining(&self) -> u64 {
        self.piles.total()
    }

    /// Current opponent difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    /// Current configuration (reflects `reset` pile counts and difficulty
    /// changes).
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

/// Roll a board for `config`.
///
/// If every pile comes up empty (possible when `min_size` is 0), one random
/// pile is re-drawn from `[1, max_size]` so the game has a first move.
fn roll_piles(config: &GameConfig, rng: &mut GameRng) -> Result<PileSet, EngineError> {
    let piles = PileSet::new(config.pile_count, config.min_size, config.max_size, rng)?;
    if !piles.is_empty() {
        return Ok(piles);
    }

    let mut sizes = piles.as_slice().to_vec();
    let index = rng.gen_index(sizes.len());
    sizes[index] = rng.gen_inclusive(1, config.max_size);
    PileSet::from_sizes(sizes)
}
