//! Canonical orientation of a position under the eight board symmetries.
//!
//! A position and all of its rotations and reflections map to the same
//! canonical board. The transforms that produced it are kept so callers can
//! restore the original orientation or carry moves across.

use std::cmp::Ordering;

use log::debug;

use super::compare::{matrix_direction, rotational_direction, vector_list_direction};
use super::detect::{RotationAngle, SymmetryAxis};
use super::transform::{self, Transform};
use crate::game::{Action, Board};

/// Rows of cell weights.
type Grid = Vec<Vec<u8>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Horizontal {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vertical {
    Top,
    Bottom,
}

/// A canonical board and the transforms, in application order, that turned
/// the original board into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonical {
    pub board: Board,
    pub transforms: Vec<Transform>,
}

impl Canonical {
    /// The board this canonical form was computed from.
    pub fn restore(&self) -> Board {
        transform::restore(&self.transforms, &self.board)
    }

    /// Carry a move on the original board over to the canonical board.
    pub fn action_to_canonical(&self, action: Action) -> Action {
        transform::map_action_to_canonical(action, &self.transforms, self.board.size())
    }

    /// Carry a move on the canonical board back to the original board.
    pub fn action_from_canonical(&self, action: Action) -> Action {
        transform::map_action_from_canonical(action, &self.transforms, self.board.size())
    }
}

/// Compute the canonical form of `board`.
pub fn canonicalize(board: &Board) -> Canonical {
    let mut transforms = Vec::with_capacity(3);
    let mut current = board.clone();

    let (horizontal, vertical) = axes(board);
    if horizontal == Horizontal::Right {
        current = Transform::FlipLr.apply(&current);
        transforms.push(Transform::FlipLr);
    }
    if vertical == Vertical::Bottom {
        current = Transform::FlipUd.apply(&current);
        transforms.push(Transform::FlipUd);
    }
    if needs_transpose(&weights(&current)) {
        current = Transform::Transpose.apply(&current);
        transforms.push(Transform::Transpose);
    }

    debug!("canonical transforms: {transforms:?}");
    Canonical {
        board: current,
        transforms,
    }
}

fn axes(board: &Board) -> (Horizontal, Vertical) {
    let rot = RotationAngle::Half.holds_for(board);
    let ref_h = SymmetryAxis::Horizontal.holds_for(board);
    let ref_v = (rot && ref_h) || SymmetryAxis::Vertical.holds_for(board);

    let grid = weights(board);
    let h = grid.len() / 2;

    match (rot, ref_v, ref_h) {
        (true, true, _) => (Horizontal::Left, Vertical::Top),
        (true, false, _) => (quadrant_direction(&grid), Vertical::Top),
        (false, true, _) => (Horizontal::Left, vertical_direction(&grid, h)),
        (false, false, true) => (horizontal_direction(&grid, h), Vertical::Top),
        (false, false, false) => (
            horizontal_direction(&grid, h),
            vertical_direction(&grid, h),
        ),
    }
}

/// Compare the top half against the bottom half.
fn vertical_direction(grid: &Grid, h: usize) -> Vertical {
    match matrix_direction(&grid[..h], &grid[h..]) {
        Ordering::Less => Vertical::Bottom,
        _ => Vertical::Top,
    }
}

/// Compare the left half against the right half, column by column.
fn horizontal_direction(grid: &Grid, h: usize) -> Horizontal {
    let columns = transpose(grid);
    match matrix_direction(&columns[..h], &columns[h..]) {
        Ordering::Less => Horizontal::Right,
        _ => Horizontal::Left,
    }
}

/// Orientation of a board with only 180 degree symmetry, decided by the
/// diagonals of its top quadrants.
fn quadrant_direction(grid: &Grid) -> Horizontal {
    let h = grid.len() / 2;
    let left: Grid = (0..h).map(|r| grid[h - 1 - r][..h].to_vec()).collect();
    let right: Grid = (0..h)
        .map(|r| (0..h).map(|c| grid[c][h + r]).collect())
        .collect();

    let offset = h as isize - 1;
    let pairs: Vec<(Vec<u8>, Vec<u8>)> = (-offset..=offset)
        .map(|k| (diagonal(&right, k), diagonal(&left, k)))
        .collect();

    match vector_list_direction(&pairs) {
        Ordering::Less => Horizontal::Right,
        _ => Horizontal::Left,
    }
}

/// Compare each superdiagonal with the matching subdiagonal; the first one
/// that differs decides.
fn needs_transpose(grid: &Grid) -> bool {
    let flipped = transpose(grid);
    for k in 0..grid.len() as isize {
        match rotational_direction(&diagonal(grid, k), &diagonal(&flipped, k)) {
            Ordering::Greater => return false,
            Ordering::Less => return true,
            Ordering::Equal => {}
        }
    }
    false
}

fn weights(board: &Board) -> Grid {
    let n = board.size();
    (0..n)
        .map(|r| (0..n).map(|c| board.get(r, c).weight()).collect())
        .collect()
}

fn transpose(grid: &Grid) -> Grid {
    let cols = grid.first().map_or(0, Vec::len);
    (0..cols)
        .map(|c| grid.iter().map(|row| row[c]).collect())
        .collect()
}

/// Cells `m[r][r + k]`, top to bottom.
fn diagonal(grid: &Grid, k: isize) -> Vec<u8> {
    let cols = grid.first().map_or(0, Vec::len) as isize;
    (0..grid.len() as isize)
        .filter(|r| (0..cols).contains(&(r + k)))
        .map(|r| grid[r as usize][(r + k) as usize])
        .collect()
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::test_support::{arbitrary_board, random_position};
    use proptest::prelude::*;

    const ALL_SYMMETRIES: [&[Transform]; 8] = [
        &[],
        &[Transform::FlipLr],
        &[Transform::FlipUd],
        &[Transform::FlipLr, Transform::FlipUd],
        &[Transform::Transpose],
        &[Transform::Transpose, Transform::FlipLr],
        &[Transform::Transpose, Transform::FlipUd],
        &[Transform::Transpose, Transform::FlipLr, Transform::FlipUd],
    ];

    proptest! {
        #[test]
        fn prop_restore_round_trip(board in arbitrary_board()) {
            let canonical = canonicalize(&board);
            prop_assert_eq!(canonical.restore(), board);
        }

        #[test]
        fn prop_canonical_is_fixed_point(board in arbitrary_board()) {
            let canonical = canonicalize(&board);
            let again = canonicalize(&canonical.board);
            prop_assert!(again.transforms.is_empty());
            prop_assert_eq!(again.board, canonical.board);
        }

        #[test]
        fn prop_orbit_shares_canonical_board(board in arbitrary_board()) {
            let expected = canonicalize(&board).board;
            for transforms in ALL_SYMMETRIES {
                let image = transform::apply_all(transforms, &board);
                prop_assert_eq!(&canonicalize(&image).board, &expected);
            }
        }

        #[test]
        fn prop_mapped_actions_stay_legal(seed in 0u64..500, plies in 0usize..30) {
            let (board, player) = random_position(8, seed, plies);
            let canonical = canonicalize(&board);
            for action in board.actions(player) {
                let mapped = canonical.action_to_canonical(action);
                if let Action::Place { row, col } = mapped {
                    prop_assert!(canonical.board.is_legal(row, col, player));
                }
                prop_assert_eq!(canonical.action_from_canonical(mapped), action);
            }
        }
    }
}
