//! Arena runner.

use crate::core::{Actor, GameConfig, GameRng};
use crate::error::EngineError;
use crate::rules::{Difficulty, GameEngine, Outcome};

use super::stats::ArenaStats;

/// Configuration for an arena run.
#[derive(Clone, Debug)]
pub struct ArenaConfig {
    /// Number of games to play.
    pub games: u32,

    /// Board settings. `board.difficulty` is ignored; the two sides below
    /// are used instead.
    pub board: GameConfig,

    /// Tier driving the Player side (moves first).
    pub player: Difficulty,

    /// Tier driving the Opponent side.
    pub opponent: Difficulty,

    /// Base seed. Each game is seeded from a fork of `GameRng::new(seed)`.
    pub seed: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: 100,
            board: GameConfig::default(),
            player: Difficulty::Easy,
            opponent: Difficulty::Hard,
            seed: 0,
        }
    }
}

impl ArenaConfig {
    /// Create a config pitting `player` against `opponent`.
    pub fn new(player: Difficulty, opponent: Difficulty) -> Self {
        Self {
            player,
            opponent,
            ..Self::default()
        }
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set the board settings.
    pub fn with_board(mut self, board: GameConfig) -> Self {
        self.board = board;
        self
    }

    /// Set the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Plays series of automated games.
pub struct Arena {
    config: ArenaConfig,
}

impl Arena {
    /// Create a new arena.
    pub fn new(config: ArenaConfig) -> Self {
        Self { config }
    }

    /// Play a single game to completion.
    ///
    /// Returns the outcome and the number of moves made. Every move removes
    /// at least one item, so a game ends within `total()` moves.
    pub fn play_game(&self, seed: u64) -> Result<(Outcome, usize), EngineError> {
        let board = self
            .config
            .board
            .clone()
            .with_difficulty(self.config.opponent)
            .with_seed(seed);
        let mut engine = GameEngine::new(board)?;
        let mut player_rng = GameRng::new(seed).for_context("arena-player");
        let player_policy = self.config.player.policy();

        loop {
            if let Some(outcome) = engine.outcome() {
                return Ok((outcome, engine.history().len()));
            }

            match engine.turn() {
                Actor::Player => {
                    let mv = player_policy.choose_move(engine.pile_set(), &mut player_rng)?;
                    engine.apply(Actor::Player, mv)?;
                }
                Actor::Opponent => {
                    engine.play_opponent_turn()?;
                }
            }
        }
    }

    /// Play all configured games.
    pub fn run(&self) -> Result<ArenaStats, EngineError> {
        let mut stats = ArenaStats::new();
        let mut rng = GameRng::new(self.config.seed);

        for _ in 0..self.config.games {
            let seed = rng.fork().seed();
            let (outcome, moves) = self.play_game(seed)?;
            stats.record(outcome, moves);
        }

        log::info!(
            "arena {} vs {}: {} games, player win rate {:.2}, {:.1} moves/game",
            self.config.player,
            self.config.opponent,
            stats.games,
            stats.player_win_rate(),
            stats.avg_moves()
        );

        Ok(stats)
    }
}
