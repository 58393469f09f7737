//! Opponent move selection.
//!
//! Policies are trait-based so callers (and the arena) can plug in their own:
//! - `RandomPolicy`: uniform random pile, uniform random amount (Easy)
//! - `OptimalPolicy`: nim-sum strategy with a random fallback (Hard)
//! - `MixedPolicy`: coin flip between the two (Normal)
//!
//! Every policy is total over non-terminal positions and only ever returns
//! legal moves. On an empty board they fail with `NoMoveAvailable`.

pub mod policy;

pub use policy::{Decision, DecisionKind, MixedPolicy, MovePolicy, OptimalPolicy, RandomPolicy};
