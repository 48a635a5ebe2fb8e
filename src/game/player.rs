use super::board::Cell;

/// The two sides of a game. Dark always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Dark,
    Light,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Dark => Player::Light,
            Player::Light => Player::Dark,
        }
    }

    /// Disc placed by this player (Dark plays Black, Light plays White)
    pub fn disc(self) -> Cell {
        match self {
            Player::Dark => Cell::Black,
            Player::Light => Cell::White,
        }
    }

    /// Utility value of a win for this player (+1 for Dark, -1 for Light)
    pub fn win_utility(self) -> i8 {
        match self {
            Player::Dark => 1,
            Player::Light => -1,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Dark => "Dark",
            Player::Light => "Light",
        }
    }
}
