use std::fmt;

use super::action::Action;
use super::player::Player;
use super::state::GameOutcome;
use crate::error::{GameError, ParseError};

/// Side length of the standard tournament board.
pub const STANDARD_SIZE: usize = 8;

/// The eight compass directions as (row, col) steps.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Blank,
    White,
    Black,
}

impl Cell {
    /// Strictly positive weight used by the symmetry comparator (products and
    /// determinants of these values decide orientation).
    pub fn weight(self) -> u8 {
        match self {
            Cell::Blank => 1,
            Cell::White => 2,
            Cell::Black => 3,
        }
    }

    /// Glyph used when rendering a board for humans.
    pub fn glyph(self) -> char {
        match self {
            Cell::Blank => '\u{25A1}',
            Cell::White => '\u{25EF}',
            Cell::Black => '\u{25CF}',
        }
    }

    /// ASCII symbol used by [`Board::from_rows`].
    pub fn symbol(self) -> char {
        match self {
            Cell::Blank => '.',
            Cell::White => 'W',
            Cell::Black => 'B',
        }
    }

    pub fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Blank),
            'W' => Some(Cell::White),
            'B' => Some(Cell::Black),
            _ => None,
        }
    }
}

/// An N x N Othello board (N even, N >= 4), stored row-major.
///
/// Boards are plain owned values: search branches clone them instead of
/// sharing one mutable grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a standard 8x8 board with the four starting discs
    pub fn new() -> Self {
        Self::starting(STANDARD_SIZE)
    }

    /// Create a board of the given side length with the four starting discs.
    pub fn with_size(size: usize) -> Result<Self, GameError> {
        validate_size(size)?;
        Ok(Self::starting(size))
    }

    fn starting(size: usize) -> Self {
        let mut board = Board {
            size,
            cells: vec![Cell::Blank; size * size],
        };
        let h = size / 2;
        board.set(h - 1, h - 1, Cell::White);
        board.set(h - 1, h, Cell::Black);
        board.set(h, h - 1, Cell::Black);
        board.set(h, h, Cell::White);
        board
    }

    /// Build a board from row-major cells.
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self, GameError> {
        validate_size(size)?;
        if cells.len() != size * size {
            return Err(GameError::CellCount {
                expected: size * size,
                actual: cells.len(),
            });
        }
        Ok(Board { size, cells })
    }

    /// Build a board from text rows using `.` (blank), `W` (white) and `B` (black).
    pub fn from_rows(rows: &[&str]) -> Result<Self, ParseError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let parsed: Option<Vec<Cell>> = row.chars().map(Cell::from_symbol).collect();
            let parsed = parsed.ok_or_else(|| ParseError::InvalidBoard(format!("bad row {row:?}")))?;
            if parsed.len() != size {
                return Err(ParseError::InvalidBoard(format!(
                    "row {row:?} has {} cells, expected {size}",
                    parsed.len()
                )));
            }
            cells.extend(parsed);
        }
        Board::from_cells(size, cells).map_err(|e| ParseError::InvalidBoard(e.to_string()))
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.size + col] = cell;
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        let n = self.size as isize;
        if row < 0 || col < 0 || row >= n || col >= n {
            return None;
        }
        Some(self.get(row as usize, col as usize))
    }

    /// Length of the opponent run captured in direction `(dr, dc)` when
    /// `player` places at (row, col). `None` unless the adjacent cell is an
    /// opponent disc and the run ends on one of the player's own discs.
    fn capture_run(&self, row: usize, col: usize, (dr, dc): (isize, isize), player: Player) -> Option<usize> {
        let own = player.disc();
        let opponent = player.other().disc();
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        let mut run = 0;

        loop {
            match self.cell_at(r, c) {
                Some(cell) if cell == opponent => run += 1,
                Some(cell) if cell == own && run > 0 => return Some(run),
                _ => return None,
            }
            r += dr;
            c += dc;
        }
    }

    fn is_open(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.get(row, col) == Cell::Blank
    }

    /// Check if `player` may place a disc at (row, col)
    pub fn is_legal(&self, row: usize, col: usize, player: Player) -> bool {
        self.is_open(row, col)
            && DIRECTIONS
                .iter()
                .any(|&dir| self.capture_run(row, col, dir, player).is_some())
    }

    /// Cells that change to `player`'s colour if it places at (row, col): the
    /// placement cell first, then every captured disc. Empty for an illegal
    /// move, so a legal move always yields at least two cells.
    pub fn flips_for(&self, row: usize, col: usize, player: Player) -> Vec<(usize, usize)> {
        if !self.is_open(row, col) {
            return Vec::new();
        }

        let mut flips = Vec::new();
        for &(dr, dc) in &DIRECTIONS {
            if let Some(run) = self.capture_run(row, col, (dr, dc), player) {
                for step in 1..=run as isize {
                    let r = row as isize + dr * step;
                    let c = col as isize + dc * step;
                    flips.push((r as usize, c as usize));
                }
            }
        }

        if !flips.is_empty() {
            flips.insert(0, (row, col));
        }
        flips
    }

    /// Apply an action in place. A pass never changes the board.
    pub fn apply(&mut self, action: Action, player: Player) -> Result<(), GameError> {
        let (row, col) = match action {
            Action::Pass => return Ok(()),
            Action::Place { row, col } => (row, col),
        };

        let flips = self.flips_for(row, col, player);
        if flips.len() < 2 {
            return Err(GameError::InvalidAction { row, col });
        }
        let disc = player.disc();
        for (r, c) in flips {
            self.set(r, c, disc);
        }
        Ok(())
    }

    /// Successor board after `player` takes `action`; `self` is left untouched.
    pub fn result(&self, action: Action, player: Player) -> Result<Board, GameError> {
        let mut next = self.clone();
        next.apply(action, player)?;
        Ok(next)
    }

    /// Legal actions for `player` in row-major order, or `[Pass]` if there are none.
    pub fn actions(&self, player: Player) -> Vec<Action> {
        let mut actions: Vec<Action> = (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| (row, col)))
            .filter(|&(row, col)| self.is_legal(row, col, player))
            .map(|(row, col)| Action::place(row, col))
            .collect();

        if actions.is_empty() {
            actions.push(Action::Pass);
        }
        actions
    }

    /// Every legal action paired with the board it leads to, in the order of
    /// [`actions`](Self::actions). A stuck player gets `[(Pass, self)]`.
    pub fn successors(&self, player: Player) -> Vec<(Action, Board)> {
        let disc = player.disc();
        let mut successors = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let flips = self.flips_for(row, col, player);
                if flips.len() < 2 {
                    continue;
                }
                let mut next = self.clone();
                for (r, c) in flips {
                    next.set(r, c, disc);
                }
                successors.push((Action::place(row, col), next));
            }
        }

        if successors.is_empty() {
            successors.push((Action::Pass, self.clone()));
        }
        successors
    }

    /// Whether `player` has at least one legal placement.
    pub fn has_legal_move(&self, player: Player) -> bool {
        (0..self.size).any(|row| (0..self.size).any(|col| self.is_legal(row, col, player)))
    }

    /// The game is over when neither player can place a disc.
    pub fn is_terminal(&self) -> bool {
        !self.has_legal_move(Player::Dark) && !self.has_legal_move(Player::Light)
    }

    /// Disc counts as (black, white)
    pub fn score(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(black, white), cell| match cell {
            Cell::Black => (black + 1, white),
            Cell::White => (black, white + 1),
            Cell::Blank => (black, white),
        })
    }

    /// Total number of discs on the board.
    pub fn disc_count(&self) -> usize {
        let (black, white) = self.score();
        black + white
    }

    /// +1 if Black leads, -1 if White leads, 0 on a tie. Meaningful at
    /// terminal states but defined everywhere.
    pub fn utility(&self) -> i8 {
        let (black, white) = self.score();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => 1,
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
        }
    }

    /// Final result, if the game is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.is_terminal() {
            return None;
        }
        Some(match self.utility() {
            1 => GameOutcome::Winner(Player::Dark),
            -1 => GameOutcome::Winner(Player::Light),
            _ => GameOutcome::Draw,
        })
    }
}

fn validate_size(size: usize) -> Result<(), GameError> {
    if size < 4 || size % 2 != 0 {
        return Err(GameError::InvalidSize(size));
    }
    Ok(())
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: String = row.iter().map(|cell| cell.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
