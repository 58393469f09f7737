//! Engine scenario tests.
//!
//! Drives `GameEngine` the way a presentation layer would: player input,
//! then a decide/apply pair for the opponent.

use nim_engine::core::{Actor, GameConfig, Move, MoveRecord, PileSet};
use nim_engine::error::EngineError;
use nim_engine::rules::{new_game, Difficulty, GameEngine, Outcome};

fn engine(sizes: &[u32], difficulty: Difficulty, seed: u64) -> GameEngine {
    let piles = PileSet::from_sizes(sizes.to_vec()).unwrap();
    GameEngine::with_piles(piles, difficulty, Some(seed)).unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_single_pile_taken_whole() {
    let mut game = engine(&[3], Difficulty::Hard, 1);
    game.apply_move(Actor::Player, 0, 3).unwrap();

    assert!(game.pile_set().is_empty());
    assert_eq!(game.outcome(), Some(Outcome::PlayerWins));
}

#[test]
fn test_hard_falls_back_on_losing_position() {
    for seed in 0..30 {
        let mut game = engine(&[1, 2, 3], Difficulty::Hard, seed);
        let mv = game
            .compute_opponent_move()
            .expect("a losing position still has legal moves");
        assert!(game.pile_set().is_legal(mv));
    }
}

#[test]
fn test_hard_picks_lowest_qualifying_pile() {
    let mut game = engine(&[5, 7], Difficulty::Hard, 1);
    assert_eq!(game.compute_opponent_move().unwrap(), Move::new(1, 2));
}

#[test]
fn test_reset_clears_finished_game() {
    let config = GameConfig::new(3, 1, 5, Difficulty::Hard).with_seed(77);
    let mut game = GameEngine::new(config).unwrap();

    // Play Player vs Hard until someone wins
    while !game.is_over() {
        match game.turn() {
            Actor::Player => {
                let pile = game.pile_set().non_empty_indices()[0];
                game.apply_player_move(pile, 1).unwrap();
            }
            Actor::Opponent => {
                game.play_opponent_turn().unwrap();
            }
        }
    }
    assert!(game.outcome().is_some());

    game.reset(None).unwrap();
    assert!(game.outcome().is_none());
    assert!(game.last_move().is_none());
    assert_eq!(game.turn(), Actor::Player);
    assert_eq!(game.piles().len(), 3);
    assert!(game.piles().iter().all(|s| (1..=5).contains(s)));
}

// =============================================================================
// Presentation-layer flow
// =============================================================================

#[test]
fn test_full_game_against_hard_from_winning_start() {
    // Player starts on nim-sum 0 and plays randomly-ish; Hard keeps zeroing.
    let mut game = engine(&[4, 4], Difficulty::Hard, 5);

    game.apply_player_move(0, 1).unwrap(); // [3, 4]
    let mv = game.compute_opponent_move().unwrap();
    game.apply_opponent_move(mv.pile, mv.amount).unwrap();
    assert_eq!(game.piles(), &[3, 3]);

    game.apply_player_move(1, 3).unwrap(); // [3, 0]
    let record = game.play_opponent_turn().unwrap();
    assert_eq!(record, MoveRecord::new(Actor::Opponent, Move::new(0, 3)));
    assert_eq!(game.outcome(), Some(Outcome::OpponentWins));
    assert_eq!(game.history().len(), 4);
    assert_eq!(
        game.last_move().unwrap().to_string(),
        "Opponent removed 3 stone(s) from pile 1"
    );
}

#[test]
fn test_difficulty_change_applies_to_next_decision() {
    let mut game = engine(&[5, 7], Difficulty::Easy, 3);
    game.set_difficulty(Difficulty::Hard);
    assert_eq!(game.compute_opponent_move().unwrap(), Move::new(1, 2));

    game.set_difficulty(Difficulty::Easy);
    for _ in 0..20 {
        let mv = game.compute_opponent_move().unwrap();
        assert!(game.pile_set().is_legal(mv));
    }
}

#[test]
fn test_moves_after_game_over_rejected() {
    let mut game = engine(&[2], Difficulty::Easy, 1);
    game.apply_stone_click(Actor::Player, 0, 0).unwrap();
    assert_eq!(game.outcome(), Some(Outcome::PlayerWins));

    let piles = game.piles().to_vec();
    let history = game.history().to_vec();
    assert_eq!(game.apply_player_move(0, 1), Err(EngineError::GameOver));
    assert_eq!(game.apply_opponent_move(0, 1), Err(EngineError::GameOver));
    assert_eq!(game.play_opponent_turn(), Err(EngineError::GameOver));
    assert_eq!(game.compute_opponent_move(), Err(EngineError::NoMoveAvailable));

    assert_eq!(game.piles(), piles.as_slice());
    assert_eq!(game.turn(), Actor::Player);
    assert_eq!(game.outcome(), Some(Outcome::PlayerWins));
    assert_eq!(game.history(), history.as_slice());
}

#[test]
fn test_loser_click_after_ai_win_is_game_over() {
    // AI empties the board; a stray click by the user must not read as "not your turn".
    let mut game = engine(&[3, 3], Difficulty::Hard, 4);
    game.apply_player_move(0, 3).unwrap();
    let record = game.play_opponent_turn().unwrap();
    assert_eq!(record.as_move(), Move::new(1, 3));
    assert_eq!(game.outcome(), Some(Outcome::OpponentWins));

    assert_eq!(game.apply_stone_click(Actor::Player, 1, 0), Err(EngineError::GameOver));
    assert_eq!(game.apply_player_move(1, 1), Err(EngineError::GameOver));
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.turn(), Actor::Opponent);
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed: u64| {
        let config = GameConfig::new(4, 1, 10, Difficulty::Normal).with_seed(seed);
        let mut game = GameEngine::new(config).unwrap();
        while !game.is_over() {
            if game.turn() == Actor::Player {
                let pile = *game.pile_set().non_empty_indices().last().unwrap();
                game.apply_player_move(pile, 1).unwrap();
            } else {
                game.play_opponent_turn().unwrap();
            }
        }
        game.history().to_vec()
    };

    assert_eq!(play(1234), play(1234));
}

#[test]
fn test_new_game_validation() {
    assert!(new_game(2, 1, 10, Difficulty::Hard).is_ok());
    assert!(matches!(
        new_game(0, 1, 10, Difficulty::Hard),
        Err(EngineError::InvalidConfig(_))
    ));
    assert!(matches!(
        new_game(2, 11, 10, Difficulty::Hard),
        Err(EngineError::InvalidConfig(_))
    ));
}

#[test]
fn test_independent_sessions() {
    let mut a = engine(&[3, 3], Difficulty::Hard, 1);
    let b = engine(&[3, 3], Difficulty::Hard, 1);

    a.apply_player_move(0, 2).unwrap();
    assert_eq!(a.piles(), &[1, 3]);
    assert_eq!(b.piles(), &[3, 3]);
    assert_eq!(b.turn(), Actor::Player);
}
