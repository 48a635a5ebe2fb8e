//! Compact base-81 position hashes.
//!
//! Each cell is a trinary digit (blank 0, white 1, black 2). Four cells pack
//! into one base-81 character, low-order cell first, and the character string
//! is reversed so the last cells of the board come first.

use crate::error::HashError;
use crate::game::{Action, Board, Cell};

/// Base-81 digits, in value order.
pub const ALPHABET: &[u8; 81] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!\"#$%&'()*+,-./:;<=";

const CELLS_PER_DIGIT: usize = 4;

fn cell_digit(cell: Cell) -> u8 {
    match cell {
        Cell::Blank => 0,
        Cell::White => 1,
        Cell::Black => 2,
    }
}

fn digit_cell(digit: u8) -> Cell {
    match digit {
        0 => Cell::Blank,
        1 => Cell::White,
        _ => Cell::Black,
    }
}

fn char_value(c: char) -> Result<u8, HashError> {
    ALPHABET
        .iter()
        .position(|&d| char::from(d) == c)
        .map(|i| i as u8)
        .ok_or(HashError::InvalidCharacter(c))
}

/// Number of hash characters for an N x N board.
pub fn hash_len(size: usize) -> usize {
    (size * size).div_ceil(CELLS_PER_DIGIT)
}

/// Encode a board as a base-81 string.
pub fn encode(board: &Board) -> String {
    let mut digits: Vec<char> = board
        .cells()
        .chunks(CELLS_PER_DIGIT)
        .map(|group| {
            let value = group
                .iter()
                .rev()
                .fold(0u8, |acc, &cell| acc * 3 + cell_digit(cell));
            char::from(ALPHABET[value as usize])
        })
        .collect();
    digits.reverse();
    digits.into_iter().collect()
}

/// Decode a hash produced by [`encode`] back into an N x N board.
///
/// Hashes written by older tooling carry one extra leading `'0'` (an empty
/// trailing group); that form is accepted too.
pub fn decode(hash: &str, size: usize) -> Result<Board, HashError> {
    let expected = hash_len(size);
    let actual = hash.chars().count();
    let body = match actual {
        n if n == expected => hash,
        n if n == expected + 1 && hash.starts_with('0') => &hash[1..],
        _ => return Err(HashError::LengthMismatch { expected, actual }),
    };

    let mut cells = Vec::with_capacity(expected * CELLS_PER_DIGIT);
    for c in body.chars().rev() {
        let mut value = char_value(c)?;
        for _ in 0..CELLS_PER_DIGIT {
            cells.push(digit_cell(value % 3));
            value /= 3;
        }
    }
    cells.truncate(size * size);

    Board::from_cells(size, cells).map_err(|_| HashError::LengthMismatch { expected, actual })
}

/// Key identifying a (position, move) pair: `"<hash>|row,col"` or `"<hash>|p"`.
pub fn state_action_key(board: &Board, action: Action) -> String {
    let hash = encode(board);
    match action {
        Action::Pass => format!("{hash}|p"),
        Action::Place { row, col } => format!("{hash}|{row},{col}"),
    }
}

/// Inverse of [`state_action_key`].
pub fn parse_state_action_key(key: &str, size: usize) -> Result<(Board, Action), HashError> {
    let malformed = || HashError::MalformedKey(key.to_string());
    let (hash, action) = key.rsplit_once('|').ok_or_else(malformed)?;
    let board = decode(hash, size)?;

    let action = if action == "p" {
        Action::Pass
    } else {
        let (row, col) = action.split_once(',').ok_or_else(malformed)?;
        let row: usize = row.parse().map_err(|_| malformed())?;
        let col: usize = col.parse().map_err(|_| malformed())?;
        if row >= size || col >= size {
            return Err(malformed());
        }
        Action::place(row, col)
    };
    Ok((board, action))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_matches_printable_prefix() {
        assert_eq!(ALPHABET[0], b'0');
        assert_eq!(ALPHABET[10], b'a');
        assert_eq!(ALPHABET[36], b'A');
        assert_eq!(ALPHABET[62], b'!');
        assert_eq!(ALPHABET[80], b'=');
    }

    #[test]
    fn test_empty_board_hashes_to_zeros() {
        let board = Board::from_rows(&["....", "....", "....", "...."]).unwrap();
        assert_eq!(encode(&board), "0000");
    }

    #[test]
    fn test_start_position_hash() {
        // 4x4 cells: . . . . | . W B . | . B W . | . . . .
        // groups (low cell first): [0,0,0,0] [0,1,2,0] [0,2,1,0] [0,0,0,0]
        // values 0, 3+18=21, 6+9=15, 0 -> "0 l f 0" reversed
        let board = Board::with_size(4).unwrap();
        assert_eq!(encode(&board), "0fl0");
        assert_eq!(decode("0fl0", 4).unwrap(), board);
    }

    #[test]
    fn test_full_black_group_is_last_digit() {
        let board = Board::from_rows(&["BBBB", "....", "....", "...."]).unwrap();
        // 2 + 6 + 18 + 54 = 80
        assert_eq!(encode(&board), "000=");
    }

    #[test]
    fn test_standard_board_hash_length() {
        assert_eq!(encode(&Board::new()).len(), 16);
        assert_eq!(hash_len(6), 9);
    }

    #[test]
    fn test_decode_accepts_legacy_leading_zero() {
        let board = Board::with_size(4).unwrap();
        assert_eq!(decode("00fl0", 4).unwrap(), board);
    }

    #[test]
    fn test_decode_rejects_bad_length() {
        assert_eq!(
            decode("0fl", 4),
            Err(HashError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            decode("1fl00", 4),
            Err(HashError::LengthMismatch {
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn test_decode_rejects_foreign_character() {
        assert_eq!(decode("0f>0", 4), Err(HashError::InvalidCharacter('>')));
    }

    #[test]
    fn test_state_action_keys() {
        let board = Board::with_size(4).unwrap();
        assert_eq!(state_action_key(&board, Action::place(0, 1)), "0fl0|0,1");
        assert_eq!(state_action_key(&board, Action::Pass), "0fl0|p");

        assert_eq!(
            parse_state_action_key("0fl0|0,1", 4).unwrap(),
            (board.clone(), Action::place(0, 1))
        );
        assert_eq!(
            parse_state_action_key("0fl0|p", 4).unwrap(),
            (board, Action::Pass)
        );
    }

    #[test]
    fn test_malformed_keys_are_rejected() {
        for key in ["0fl0", "0fl0|", "0fl0|1", "0fl0|a,b", "0fl0|4,0"] {
            assert_eq!(
                parse_state_action_key(key, 4),
                Err(HashError::MalformedKey(key.to_string())),
                "{key}"
            );
        }
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::test_support::arbitrary_board;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(board in arbitrary_board()) {
            let hash = encode(&board);
            prop_assert_eq!(hash.len(), hash_len(board.size()));
            prop_assert_eq!(decode(&hash, board.size()).unwrap(), board);
        }

        #[test]
        fn prop_key_round_trip(board in arbitrary_board(), row in 0usize..4, col in 0usize..4) {
            let action = Action::place(row, col);
            let key = state_action_key(&board, action);
            prop_assert_eq!(parse_state_action_key(&key, board.size()).unwrap(), (board, action));
        }
    }
}
