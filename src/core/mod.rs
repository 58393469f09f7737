//! Core types: actors, piles, moves, RNG, configuration.
//!
//! These are the building blocks the engine and strategies share. Nothing
//! here knows about turns or difficulty tiers.

pub mod actor;
pub mod piles;
pub mod rng;
pub mod config;
pub mod action;

pub use actor::Actor;
pub use piles::PileSet;
pub use rng::GameRng;
pub use config::GameConfig;
pub use action::{Move, MoveRecord};
