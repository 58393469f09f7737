//! Automated engine-vs-engine matches.
//!
//! Plays complete games where both sides are driven by difficulty tiers and
//! collects win statistics. Useful for checking that the tiers rank as
//! expected (Hard beats Easy far more often than not).

pub mod runner;
pub mod stats;

pub use runner::{Arena, ArenaConfig};
pub use stats::ArenaStats;
