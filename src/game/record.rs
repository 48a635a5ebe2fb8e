use std::fmt;
use std::str::FromStr;

use super::{Action, Board, Player};
use crate::error::{GameError, ParseError};
use crate::symmetry::{map_action_to_canonical, Transform, START_PRESERVING_SYMMETRIES};

/// Token that ends a record; anything after it is ignored.
pub const END_TOKEN: &str = "---";
pub const PASS_TOKEN: &str = "pass";

/// A game written as a sequence of moves, as found in tournament record files.
///
/// Records do not say who played each move. Replay works it out: a move
/// illegal for the expected player but legal for the other one means the
/// expected player had to pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveRecord {
    moves: Vec<Action>,
}

impl MoveRecord {
    /// Parse `"r-c"` / `"pass"` tokens up to the first `"---"`. Blank tokens
    /// (padding in fixed-width CSV rows) are skipped.
    pub fn parse<I, S>(tokens: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut moves = Vec::new();
        for token in tokens {
            let token = token.as_ref().trim();
            match token {
                "" => continue,
                END_TOKEN => break,
                PASS_TOKEN => moves.push(Action::Pass),
                coord => moves.push(parse_coord(coord)?),
            }
        }
        Ok(MoveRecord { moves })
    }

    /// Record of a played game. Passes are left out, as tournament records do.
    pub fn from_actions<'a>(actions: impl IntoIterator<Item = &'a Action>) -> Self {
        MoveRecord {
            moves: actions.into_iter().filter(|a| !a.is_pass()).copied().collect(),
        }
    }

    pub fn moves(&self) -> &[Action] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Replay the record from the start position, returning the board after
    /// every move (including explicit passes).
    pub fn replay(&self, size: usize) -> Result<Vec<Board>, GameError> {
        Ok(self
            .replay_steps(size)?
            .into_iter()
            .map(|step| step.board)
            .collect())
    }

    /// Like [`replay`](Self::replay), but also reports who made each move.
    pub fn replay_steps(&self, size: usize) -> Result<Vec<ReplayStep>, GameError> {
        let mut board = Board::with_size(size)?;
        let mut mover = Player::Dark;
        let mut steps = Vec::with_capacity(self.moves.len());

        for (index, &action) in self.moves.iter().enumerate() {
            let player = match action {
                Action::Pass => mover,
                Action::Place { row, col } => {
                    if board.is_legal(row, col, mover) {
                        mover
                    } else if board.is_legal(row, col, mover.other()) {
                        mover.other()
                    } else {
                        return Err(GameError::InvalidRecord { index, row, col });
                    }
                }
            };
            board.apply(action, player)?;
            mover = player.other();
            steps.push(ReplayStep {
                board: board.clone(),
                player,
                action,
            });
        }
        Ok(steps)
    }

    /// The same game seen through `transforms`.
    pub fn transformed(&self, transforms: &[Transform], size: usize) -> MoveRecord {
        MoveRecord {
            moves: self
                .moves
                .iter()
                .map(|&action| map_action_to_canonical(action, transforms, size))
                .collect(),
        }
    }

    /// The record and its images under the symmetries that fix the start
    /// position. Every image is itself a legal game.
    pub fn augmented(&self, size: usize) -> Vec<MoveRecord> {
        START_PRESERVING_SYMMETRIES
            .iter()
            .map(|transforms| self.transformed(transforms, size))
            .collect()
    }
}

/// One replayed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayStep {
    /// Board after the move
    pub board: Board,
    pub player: Player,
    pub action: Action,
}

fn parse_coord(token: &str) -> Result<Action, ParseError> {
    let invalid = || ParseError::InvalidRecordToken(token.to_string());
    let (row, col) = token.split_once('-').ok_or_else(invalid)?;
    let row = row.parse().map_err(|_| invalid())?;
    let col = col.parse().map_err(|_| invalid())?;
    Ok(Action::place(row, col))
}

impl FromStr for MoveRecord {
    type Err = ParseError;

    /// Comma-separated tokens, e.g. `"2-3,2-2,pass,---"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoveRecord::parse(s.split(','))
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, action) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            match action {
                Action::Pass => f.write_str(PASS_TOKEN)?,
                Action::Place { row, col } => write!(f, "{row}-{col}")?,
            }
        }
        Ok(())
    }
}
