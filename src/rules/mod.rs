//! Game rules: the engine state machine and difficulty tiers.
//!
//! `GameEngine` is the only thing that mutates piles during a game. A
//! presentation layer drives it:
//! - `apply_move` on user input
//! - `compute_opponent_move` then `apply_move` on the opponent's turn,
//!   with whatever delay or animation it likes in between

pub mod difficulty;
pub mod engine;

pub use difficulty::Difficulty;
pub use engine::{new_game, GameEngine, Outcome};
