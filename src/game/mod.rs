//! Core Othello game logic: board and capture rules, players, actions, the
//! game state machine, move-record replay and the two-agent play loop.

mod action;
mod board;
mod play;
mod player;
pub mod record;
mod state;

pub use action::Action;
pub use board::{Board, Cell, STANDARD_SIZE};
pub use play::{play_game, GameSummary};
pub use player::Player;
pub use record::MoveRecord;
pub use state::{GameOutcome, GameState};
