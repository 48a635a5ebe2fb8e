use crate::game::{Board, Cell, Player};

/// Trait for evaluating a board position from a player's perspective.
///
/// Higher is better for `player`. Proven wins and losses should map to
/// `f64::INFINITY` and `f64::NEG_INFINITY` so the search can tell them apart
/// from heuristic scores.
pub trait Evaluator: Send {
    fn evaluate(&self, board: &Board, player: Player) -> f64;
}

impl<F> Evaluator for F
where
    F: Fn(&Board, Player) -> f64 + Send,
{
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        self(board, player)
    }
}

/// Which built-in evaluator to use, as named in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EvaluatorKind {
    DiscRatio,
    CornerWeighted,
    /// Corner-weighted until `threshold` discs, disc ratio afterwards
    Hybrid,
}

impl EvaluatorKind {
    pub fn build(self, hybrid_threshold: usize) -> Box<dyn Evaluator> {
        match self {
            EvaluatorKind::DiscRatio => Box::new(DiscRatio),
            EvaluatorKind::CornerWeighted => Box::new(CornerWeighted),
            EvaluatorKind::Hybrid => Box::new(Phased::new(
                hybrid_threshold,
                Box::new(CornerWeighted),
                Box::new(DiscRatio),
            )),
        }
    }
}

/// `Some(+inf)` / `Some(-inf)` when the game is over and `player` won / lost.
fn proven_value(board: &Board, player: Player) -> Option<f64> {
    if !board.is_terminal() {
        return None;
    }
    let utility = board.utility();
    if utility == player.win_utility() {
        Some(f64::INFINITY)
    } else if utility == player.other().win_utility() {
        Some(f64::NEG_INFINITY)
    } else {
        None
    }
}

fn share(own: u32, opponent: u32) -> f64 {
    let total = own + opponent;
    if total == 0 {
        0.5
    } else {
        f64::from(own) / f64::from(total)
    }
}

/// Fraction of the discs on the board that belong to `player`.
pub struct DiscRatio;

impl Evaluator for DiscRatio {
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        if let Some(value) = proven_value(board, player) {
            return value;
        }
        let (black, white) = board.score();
        let (own, opponent) = match player {
            Player::Dark => (black, white),
            Player::Light => (white, black),
        };
        share(own as u32, opponent as u32)
    }
}

/// Disc share where edge discs count 5 and corner discs 10.
pub struct CornerWeighted;

impl CornerWeighted {
    fn cell_weight(row: usize, col: usize, size: usize) -> u32 {
        let edge_row = row == 0 || row == size - 1;
        let edge_col = col == 0 || col == size - 1;
        match (edge_row, edge_col) {
            (true, true) => 10,
            (true, false) | (false, true) => 5,
            (false, false) => 1,
        }
    }
}

impl Evaluator for CornerWeighted {
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        if let Some(value) = proven_value(board, player) {
            return value;
        }
        let n = board.size();
        let own_disc = player.disc();
        let mut own = 0;
        let mut opponent = 0;
        for row in 0..n {
            for col in 0..n {
                let cell = board.get(row, col);
                if cell == Cell::Blank {
                    continue;
                }
                let weight = Self::cell_weight(row, col, n);
                if cell == own_disc {
                    own += weight;
                } else {
                    opponent += weight;
                }
            }
        }
        share(own, opponent)
    }
}

/// Switches from an opening evaluator to an endgame evaluator once the board
/// holds `threshold` discs.
pub struct Phased {
    threshold: usize,
    opening: Box<dyn Evaluator>,
    endgame: Box<dyn Evaluator>,
}

impl Phased {
    pub fn new(threshold: usize, opening: Box<dyn Evaluator>, endgame: Box<dyn Evaluator>) -> Self {
        Phased {
            threshold,
            opening,
            endgame,
        }
    }
}

impl Evaluator for Phased {
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        if let Some(value) = proven_value(board, player) {
            return value;
        }
        if board.disc_count() < self.threshold {
            self.opening.evaluate(board, player)
        } else {
            self.endgame.evaluate(board, player)
        }
    }
}
