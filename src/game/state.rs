use super::{Action, Board, Player};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A board together with the player to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
}

impl GameState {
    /// Create initial game state on the standard board
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Dark, // Dark starts
        }
    }

    /// Initial state on an N x N board.
    pub fn with_size(size: usize) -> Result<Self, GameError> {
        Ok(GameState {
            board: Board::with_size(size)?,
            current_player: Player::Dark,
        })
    }

    /// Resume from an arbitrary position.
    pub fn from_board(board: Board, current_player: Player) -> Self {
        GameState {
            board,
            current_player,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.board.outcome()
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.board.is_terminal()
    }

    /// Legal actions for the player to move (`[Pass]` when stuck)
    pub fn legal_actions(&self) -> Vec<Action> {
        self.board.actions(self.current_player)
    }

    /// Apply an action and return the new state (immutable)
    pub fn apply_action(&self, action: Action) -> Result<GameState, GameError> {
        let board = self.board.result(action, self.current_player)?;
        Ok(GameState {
            board,
            current_player: self.current_player.other(),
        })
    }

    /// Apply an action in place
    pub fn apply_action_mut(&mut self, action: Action) -> Result<(), GameError> {
        self.board.apply(action, self.current_player)?;
        self.current_player = self.current_player.other();
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
