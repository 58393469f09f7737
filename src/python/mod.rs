//! Python bindings for the Nim engine.
//!
//! Lets a Python front end (pygame or similar) own the window and input
//! while the engine owns the game.
//!
//! # Quick Start
//!
//! ```python
//! import nim_engine as nim
//!
//! game = nim.NimGame(pile_count=4, min_size=1, max_size=10, difficulty="Normal")
//!
//! # Player clicks the second stone of pile 0
//! game.apply_stone_click(0, 1)
//!
//! # Opponent's turn: decide, pause for effect, then commit
//! pile, amount = game.compute_opponent_move()
//! game.apply_opponent_move(pile, amount)
//!
//! print(game.piles, game.last_move, game.outcome)
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// nim_engine: Nim game engine with a tiered automated opponent.
#[pymodule]
fn nim_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyNimGame>()?;
    m.add_class::<PyArena>()?;
    Ok(())
}
