use std::fmt;

use crate::game::{Action, Board};

/// One of the three generators of the board's symmetry group. Each is its
/// own inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Mirror columns: `col -> N-1-col`
    FlipLr,
    /// Mirror rows: `row -> N-1-row`
    FlipUd,
    /// Swap rows and columns
    Transpose,
}

/// Transform lists that leave the standard start position unchanged:
/// identity, 180 degree rotation, transpose and anti-transpose.
pub const START_PRESERVING_SYMMETRIES: [&[Transform]; 4] = [
    &[],
    &[Transform::FlipLr, Transform::FlipUd],
    &[Transform::Transpose],
    &[Transform::Transpose, Transform::FlipLr, Transform::FlipUd],
];

impl Transform {
    /// Where the cell at `(row, col)` lands after this transform.
    pub fn map_coords(self, row: usize, col: usize, size: usize) -> (usize, usize) {
        match self {
            Transform::FlipLr => (row, size - 1 - col),
            Transform::FlipUd => (size - 1 - row, col),
            Transform::Transpose => (col, row),
        }
    }

    pub fn map_action(self, action: Action, size: usize) -> Action {
        match action {
            Action::Pass => Action::Pass,
            Action::Place { row, col } => {
                let (row, col) = self.map_coords(row, col, size);
                Action::place(row, col)
            }
        }
    }

    pub fn apply(self, board: &Board) -> Board {
        let n = board.size();
        let mut out = board.clone();
        for row in 0..n {
            for col in 0..n {
                let (r, c) = self.map_coords(row, col, n);
                out.set(r, c, board.get(row, col));
            }
        }
        out
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Transform::FlipLr => "fliplr",
            Transform::FlipUd => "flipud",
            Transform::Transpose => "transpose",
        };
        f.write_str(name)
    }
}

/// Apply `transforms` in order.
pub fn apply_all(transforms: &[Transform], board: &Board) -> Board {
    transforms
        .iter()
        .fold(board.clone(), |acc, transform| transform.apply(&acc))
}

/// Undo `transforms`: the same generators in reverse order.
pub fn restore(transforms: &[Transform], board: &Board) -> Board {
    transforms
        .iter()
        .rev()
        .fold(board.clone(), |acc, transform| transform.apply(&acc))
}

/// Map a move on the original board to the same move on the board produced by
/// `transforms`.
pub fn map_action_to_canonical(action: Action, transforms: &[Transform], size: usize) -> Action {
    transforms
        .iter()
        .fold(action, |acc, transform| transform.map_action(acc, size))
}

/// Map a move on the transformed board back to the original orientation.
///
/// Walks `transforms` in reverse, the inverse of [`map_action_to_canonical`].
/// This is also the ordering older tooling used when it remapped moves.
pub fn map_action_from_canonical(action: Action, transforms: &[Transform], size: usize) -> Action {
    transforms
        .iter()
        .rev()
        .fold(action, |acc, transform| transform.map_action(acc, size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_generators_move_a_single_disc() {
        let b = board(&["B...", "....", "....", "...."]);
        assert_eq!(
            Transform::FlipLr.apply(&b),
            board(&["...B", "....", "....", "...."])
        );
        assert_eq!(
            Transform::FlipUd.apply(&b),
            board(&["....", "....", "....", "B..."])
        );
        let off = board(&[".B..", "....", "....", "...."]);
        assert_eq!(
            Transform::Transpose.apply(&off),
            board(&["....", "B...", "....", "...."])
        );
    }

    #[test]
    fn test_every_generator_is_an_involution() {
        let b = board(&["BW..", "..W.", "B...", "...W"]);
        for t in [Transform::FlipLr, Transform::FlipUd, Transform::Transpose] {
            assert_eq!(t.apply(&t.apply(&b)), b);
        }
    }

    #[test]
    fn test_restore_inverts_apply_all() {
        let b = board(&["BW..", "..W.", "B...", "...W"]);
        let ts = [Transform::Transpose, Transform::FlipLr, Transform::FlipUd];
        let moved = apply_all(&ts, &b);
        assert_ne!(moved, b);
        assert_eq!(restore(&ts, &moved), b);
    }

    #[test]
    fn test_start_preserving_symmetries_fix_the_start() {
        for size in [4, 6, 8] {
            let start = Board::with_size(size).unwrap();
            for ts in START_PRESERVING_SYMMETRIES {
                assert_eq!(apply_all(ts, &start), start, "{ts:?} on {size}x{size}");
            }
        }
    }

    #[test]
    fn test_action_mapping_follows_the_board() {
        let b = Board::new();
        let ts = [Transform::FlipLr, Transform::FlipUd, Transform::Transpose];
        let moved = apply_all(&ts, &b);
        for action in b.actions(Player::Dark) {
            let mapped = map_action_to_canonical(action, &ts, 8);
            assert_eq!(
                apply_all(&ts, &b.result(action, Player::Dark).unwrap()),
                moved.result(mapped, Player::Dark).unwrap()
            );
            assert_eq!(map_action_from_canonical(mapped, &ts, 8), action);
        }
    }

    #[test]
    fn test_pass_maps_to_pass() {
        let ts = [Transform::Transpose, Transform::FlipLr];
        assert_eq!(map_action_to_canonical(Action::Pass, &ts, 8), Action::Pass);
        assert_eq!(map_action_from_canonical(Action::Pass, &ts, 8), Action::Pass);
    }

    #[test]
    fn test_order_matters_for_non_commuting_lists() {
        let ts = [Transform::FlipLr, Transform::Transpose];
        // (0,1) -> fliplr (0,2) -> transpose (2,0)
        assert_eq!(
            map_action_to_canonical(Action::place(0, 1), &ts, 4),
            Action::place(2, 0)
        );
        assert_eq!(
            map_action_from_canonical(Action::place(2, 0), &ts, 4),
            Action::place(0, 1)
        );
    }
}
