//! Shared fixtures for unit and property tests.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::game::{Action, Board, Cell, GameState, Player};

/// Play up to `plies` seeded random moves from the start position, stopping
/// early at a terminal position. Returns the board and the player to move.
pub(crate) fn random_position(size: usize, seed: u64, plies: usize) -> (Board, Player) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::with_size(size).unwrap();
    for _ in 0..plies {
        if state.is_terminal() {
            break;
        }
        let action = *state.legal_actions().choose(&mut rng).unwrap();
        state.apply_action_mut(action).unwrap();
    }
    (state.board().clone(), state.current_player())
}

/// A complete seeded random game. The action list includes forced passes.
pub(crate) fn random_game(size: usize, seed: u64) -> (Vec<Action>, Board) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::with_size(size).unwrap();
    let mut actions = Vec::new();
    while !state.is_terminal() {
        let action = *state.legal_actions().choose(&mut rng).unwrap();
        state.apply_action_mut(action).unwrap();
        actions.push(action);
    }
    (actions, state.board().clone())
}

fn arbitrary_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![Just(Cell::Blank), Just(Cell::Black), Just(Cell::White)]
}

/// Any 4x4, 6x6 or 8x8 grid, reachable or not.
pub(crate) fn arbitrary_board() -> impl Strategy<Value = Board> {
    prop_oneof![Just(4usize), Just(6usize), Just(8usize)].prop_flat_map(|size| {
        prop::collection::vec(arbitrary_cell(), size * size)
            .prop_map(move |cells| Board::from_cells(size, cells).unwrap())
    })
}

#[test]
fn test_random_position_respects_ply_budget() {
    let (board, player) = random_position(8, 3, 0);
    assert_eq!(board, Board::new());
    assert_eq!(player, Player::Dark);

    let (board, _) = random_position(8, 3, 5);
    assert_eq!(board.disc_count(), 9);
}

#[test]
fn test_random_game_ends_terminal() {
    let (actions, board) = random_game(6, 11);
    assert!(board.is_terminal());
    assert!(!actions.is_empty());
}
