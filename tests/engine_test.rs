//! Tests for the tic-tac-toe game engine.

use tictactoe_engine::{Board, GameEngine, Outcome, Player, Position, Square};

fn play(moves: &[usize]) -> GameEngine {
    let mut engine = GameEngine::new();
    for &index in moves {
        engine.apply_move(index);
    }
    engine
}

#[test]
fn test_new_engine_is_empty() {
    let engine = GameEngine::new();
    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.turn(), Player::X);
    assert_eq!(engine.outcome(), Outcome::InProgress);
}

#[test]
fn test_top_row_win() {
    let engine = play(&[0, 4, 1, 5, 2]);
    assert_eq!(engine.outcome(), Outcome::Won(Player::X));
}

#[test]
fn test_column_win_for_o() {
    // X: 0, 3, 8  O: 1, 4, 7
    let engine = play(&[0, 1, 3, 4, 8, 7]);
    assert_eq!(engine.outcome(), Outcome::Won(Player::O));
}

#[test]
fn test_full_board_draw() {
    // X O X / X O O / O X X
    let engine = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(engine.outcome(), Outcome::Draw);
    assert!(engine.board().empty_positions().is_empty());
}

#[test]
fn test_middle_column_ends_game_early() {
    // O owns 1-4-7 after the sixth move; the last three moves are ignored
    let engine = play(&[0, 1, 2, 4, 3, 7, 5, 6, 8]);
    assert_eq!(engine.outcome(), Outcome::Won(Player::O));
    assert_eq!(
        engine.board().empty_positions(),
        vec![Position::MiddleRight, Position::BottomLeft, Position::BottomRight]
    );
}

#[test]
fn test_win_on_last_square_is_not_a_draw() {
    // X completes the 2-4-6 diagonal with the ninth mark
    let engine = play(&[0, 1, 2, 3, 4, 8, 5, 7, 6]);
    assert_eq!(engine.outcome(), Outcome::Won(Player::X));
}

#[test]
fn test_repeat_square_is_ignored() {
    let mut engine = GameEngine::new();
    assert!(engine.apply_move(0));
    let before = engine.clone();

    assert!(!engine.apply_move(0));

    assert_eq!(engine, before);
    assert_eq!(engine.board().at(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(engine.turn(), Player::O);
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut engine = play(&[0, 4, 1, 5, 2]);
    let before = engine.clone();

    for index in [3, 6, 7, 8] {
        assert!(!engine.apply_move(index));
    }

    assert_eq!(engine, before);
}

#[test]
fn test_moves_after_draw_are_ignored() {
    let mut engine = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let before = engine.clone();
    assert!(!engine.apply_move(4));
    assert_eq!(engine, before);
}

#[test]
fn test_restart_resets_everything() {
    for moves in [
        &[][..],
        &[4][..],
        &[0, 4, 1, 5, 2][..],
        &[0, 1, 2, 4, 3, 5, 7, 6, 8][..],
    ] {
        let mut engine = play(moves);
        engine.restart();
        assert_eq!(engine, GameEngine::new());
    }
}

#[test]
fn test_restart_allows_play_again() {
    let mut engine = play(&[0, 4, 1, 5, 2]);
    engine.restart();
    assert!(engine.apply_move(0));
    assert_eq!(engine.turn(), Player::O);
    assert_eq!(engine.outcome(), Outcome::InProgress);
}

/// Walks every reachable game, checking turn parity and mark balance at each step.
fn explore(engine: &GameEngine, depth: usize, visited: &mut usize) {
    *visited += 1;

    let expected_turn = if depth % 2 == 0 { Player::X } else { Player::O };
    assert_eq!(engine.turn(), expected_turn);

    let x = engine.board().count(Player::X);
    let o = engine.board().count(Player::O);
    assert!(x == o || x == o + 1, "x={} o={}", x, o);
    assert_eq!(x + o, depth);

    if engine.outcome().is_over() {
        for index in 0..9 {
            let mut frozen = engine.clone();
            assert!(!frozen.apply_move(index));
            assert_eq!(&frozen, engine);
        }
        return;
    }

    for index in 0..9 {
        let mut next = engine.clone();
        if next.apply_move(index) {
            explore(&next, depth + 1, visited);
        } else {
            assert_eq!(&next, engine);
        }
    }
}

#[test]
fn test_all_games_keep_invariants() {
    let mut visited = 0;
    explore(&GameEngine::new(), 0, &mut visited);
    // Number of nodes in the full tic-tac-toe game tree
    assert_eq!(visited, 549_946);
}
