use crate::error::SymmetryError;
use crate::game::Board;

/// Mirror lines of the square board. The numeric codes are the ones accepted
/// by [`SymmetryAxis::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetryAxis {
    /// Horizontal mid-line (rows mirror top/bottom), code 0
    Horizontal,
    /// Anti-diagonal, the line y = x, code 1
    AntiDiagonal,
    /// Vertical mid-line (columns mirror left/right), code 2
    Vertical,
    /// Main diagonal, the line y = -x, code 3
    MainDiagonal,
}

impl TryFrom<u8> for SymmetryAxis {
    type Error = SymmetryError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(SymmetryAxis::Horizontal),
            1 => Ok(SymmetryAxis::AntiDiagonal),
            2 => Ok(SymmetryAxis::Vertical),
            3 => Ok(SymmetryAxis::MainDiagonal),
            other => Err(SymmetryError::InvalidSymmetryAxis(other)),
        }
    }
}

impl SymmetryAxis {
    /// Whether the board is unchanged by reflection about this axis.
    pub fn holds_for(self, board: &Board) -> bool {
        let n = board.size();
        let h = n / 2;
        match self {
            SymmetryAxis::Horizontal => {
                (0..h).all(|i| (0..n).all(|j| board.get(h - 1 - i, j) == board.get(h + i, j)))
            }
            SymmetryAxis::Vertical => {
                (0..h).all(|i| (0..n).all(|j| board.get(j, h - 1 - i) == board.get(j, h + i)))
            }
            SymmetryAxis::MainDiagonal => {
                (0..n).all(|i| (0..n - i).all(|j| board.get(j, j + i) == board.get(j + i, j)))
            }
            SymmetryAxis::AntiDiagonal => (0..n).all(|i| {
                (0..n - i).all(|j| board.get(j, n - 1 - j - i) == board.get(j + i, n - 1 - j))
            }),
        }
    }
}

/// Rotation angles accepted by the rotational-symmetry check. Clockwise and
/// counter-clockwise turns of the same size are equivalent here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAngle {
    Quarter,
    Half,
}

impl TryFrom<i32> for RotationAngle {
    type Error = SymmetryError;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        match degrees {
            90 | -90 => Ok(RotationAngle::Quarter),
            180 | -180 => Ok(RotationAngle::Half),
            other => Err(SymmetryError::InvalidRotationAngle(other)),
        }
    }
}

impl RotationAngle {
    /// Whether the board is unchanged by rotating it through this angle.
    pub fn holds_for(self, board: &Board) -> bool {
        let n = board.size();
        let h = n / 2;
        match self {
            // row i read left to right equals column n-1-i read top to bottom
            RotationAngle::Quarter => {
                (0..n).all(|i| (0..n).all(|j| board.get(i, j) == board.get(j, n - 1 - i)))
            }
            // row h-1-i equals row h+i reversed
            RotationAngle::Half => (0..h)
                .all(|i| (0..n).all(|j| board.get(h - 1 - i, j) == board.get(h + i, n - 1 - j))),
        }
    }
}

/// Check rotational symmetry for an angle given in degrees (+-90 or +-180).
pub fn is_rotational_symmetry(board: &Board, degrees: i32) -> Result<bool, SymmetryError> {
    Ok(RotationAngle::try_from(degrees)?.holds_for(board))
}

/// Check reflection symmetry for an axis code in `0..=3`.
pub fn is_reflection_symmetry(board: &Board, axis: u8) -> Result<bool, SymmetryError> {
    Ok(SymmetryAxis::try_from(axis)?.holds_for(board))
}
