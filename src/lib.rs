//! # nim-engine
//!
//! A Nim game engine: two players alternately remove items from piles, and
//! whoever takes the last item wins (normal play).
//!
//! ## Design Principles
//!
//! 1. **Engine only**: No rendering, input devices or timing. A presentation
//!    layer calls into `GameEngine` and draws from its read accessors.
//!
//! 2. **Encapsulated state**: One `GameEngine` per session owns the piles,
//!    the turn, the outcome and the move history.
//!
//! 3. **All-or-nothing moves**: A rejected call changes nothing.
//!
//! ## Opponent tiers
//!
//! - Easy: random legal move
//! - Normal: coin flip between Easy and Hard
//! - Hard: nim-sum strategy, random when already lost
//!
//! ## Modules
//!
//! - `core`: Actors, piles, moves, RNG, configuration
//! - `rules`: Game engine state machine and difficulty tiers
//! - `strategy`: Move-selection policies
//! - `arena`: Automated matches between tiers
//! - `error`: Error types

pub mod core;
pub mod error;
pub mod rules;
pub mod strategy;
pub mod arena;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{Actor, GameConfig, GameRng, Move, MoveRecord, PileSet};
pub use crate::error::{ConfigError, EngineError};
pub use crate::rules::{new_game, Difficulty, GameEngine, Outcome};
pub use crate::strategy::{Decision, DecisionKind, MixedPolicy, MovePolicy, OptimalPolicy, RandomPolicy};
pub use crate::arena::{Arena, ArenaConfig, ArenaStats};
