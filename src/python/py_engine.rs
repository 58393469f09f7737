//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::arena::{Arena, ArenaConfig};
use crate::core::{Actor, GameConfig};
use crate::error::EngineError;
use crate::rules::{Difficulty, GameEngine};

fn to_py_err(err: EngineError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn parse_difficulty(name: &str) -> PyResult<Difficulty> {
    name.parse::<Difficulty>().map_err(PyValueError::new_err)
}

/// Python wrapper for GameEngine.
///
/// Errors (bad config, illegal move, wrong turn, game over, empty board)
/// raise `ValueError` and leave the game unchanged.
#[pyclass(name = "NimGame")]
pub struct PyNimGame {
    engine: GameEngine,
}

#[pymethods]
impl PyNimGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - pile_count: Number of piles (>= 1)
    /// - min_size / max_size: Initial pile size range (inclusive)
    /// - difficulty: "Easy", "Normal" or "Hard"
    /// - seed: RNG seed; None seeds from entropy
    #[new]
    #[pyo3(signature = (
        pile_count = 4,
        min_size = 1,
        max_size = 10,
        difficulty = "Normal",
        seed = None
    ))]
    fn new(
        pile_count: usize,
        min_size: u32,
        max_size: u32,
        difficulty: &str,
        seed: Option<u64>,
    ) -> PyResult<Self> {
        let mut config = GameConfig::new(pile_count, min_size, max_size, parse_difficulty(difficulty)?);
        config.seed = seed;
        let engine = GameEngine::new(config).map_err(to_py_err)?;
        Ok(Self { engine })
    }

    /// Start over, optionally with a different number of piles.
    #[pyo3(signature = (pile_count = None))]
    fn reset(&mut self, pile_count: Option<usize>) -> PyResult<()> {
        self.engine.reset(pile_count).map_err(to_py_err)
    }

    /// Change the opponent's difficulty.
    fn set_difficulty(&mut self, difficulty: &str) -> PyResult<()> {
        self.engine.set_difficulty(parse_difficulty(difficulty)?);
        Ok(())
    }

    /// Remove `amount` items from `pile` for the player.
    fn apply_player_move(&mut self, pile: usize, amount: u32) -> PyResult<()> {
        self.engine
            .apply_player_move(pile, amount)
            .map(|_| ())
            .map_err(to_py_err)
    }

    /// Remove the clicked stone and everything above it, for the player.
    fn apply_stone_click(&mut self, pile: usize, stone_index: u32) -> PyResult<()> {
        self.engine
            .apply_stone_click(Actor::Player, pile, stone_index)
            .map(|_| ())
            .map_err(to_py_err)
    }

    /// Decide the opponent's move as `(pile, amount)` without applying it.
    fn compute_opponent_move(&mut self) -> PyResult<(usize, u32)> {
        self.engine
            .compute_opponent_move()
            .map(|mv| (mv.pile, mv.amount))
            .map_err(to_py_err)
    }

    /// Remove `amount` items from `pile` for the opponent.
    fn apply_opponent_move(&mut self, pile: usize, amount: u32) -> PyResult<()> {
        self.engine
            .apply_opponent_move(pile, amount)
            .map(|_| ())
            .map_err(to_py_err)
    }

    /// Pile sizes in index order.
    #[getter]
    fn piles(&self) -> Vec<u32> {
        self.engine.piles().to_vec()
    }

    /// "Player" or "Opponent".
    #[getter]
    fn turn(&self) -> &'static str {
        self.engine.turn().name()
    }

    /// Winner's name once the game is over, else None.
    #[getter]
    fn outcome(&self) -> Option<&'static str> {
        self.engine.outcome().map(|o| o.winner().name())
    }

    /// Human-readable description of the last move, if any.
    #[getter]
    fn last_move(&self) -> Option<String> {
        self.engine.last_move().map(|m| m.to_string())
    }

    /// Items left on the board.
    #[getter]
    fn total_remaining(&self) -> u64 {
        self.engine.total_remaining()
    }

    /// Current difficulty name.
    #[getter]
    fn difficulty(&self) -> &'static str {
        self.engine.difficulty().name()
    }

    fn __repr__(&self) -> String {
        format!(
            "NimGame(piles={:?}, turn={}, difficulty={})",
            self.engine.piles(),
            self.engine.turn(),
            self.engine.difficulty()
        )
    }
}

/// Python wrapper for Arena.
#[pyclass(name = "Arena")]
pub struct PyArena {
    arena: Arena,
}

#[pymethods]
impl PyArena {
    #[new]
    #[pyo3(signature = (player = "Easy", opponent = "Hard", games = 100, pile_count = 4, seed = 0))]
    fn new(player: &str, opponent: &str, games: u32, pile_count: usize, seed: u64) -> PyResult<Self> {
        let config = ArenaConfig::new(parse_difficulty(player)?, parse_difficulty(opponent)?)
            .with_games(games)
            .with_board(GameConfig::default().with_pile_count(pile_count))
            .with_seed(seed);
        Ok(Self {
            arena: Arena::new(config),
        })
    }

    /// Play all games; returns `(player_wins, opponent_wins)`.
    fn run(&self) -> PyResult<(u32, u32)> {
        self.arena
            .run()
            .map(|stats| (stats.player_wins, stats.opponent_wins))
            .map_err(to_py_err)
    }
}
