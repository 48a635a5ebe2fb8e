use std::collections::HashMap;

use crate::error::GameError;
use crate::game::{Board, Cell, MoveRecord, Player};
use crate::hash;
use crate::symmetry::canonicalize;

/// Flat row-major features: black `1.0`, white `-1.0`, blank `0.0`.
pub fn encode_board(board: &Board) -> Vec<f32> {
    board
        .cells()
        .iter()
        .map(|cell| match cell {
            Cell::Black => 1.0,
            Cell::White => -1.0,
            Cell::Blank => 0.0,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EncodingOptions {
    /// Rotate/reflect every position into canonical orientation first
    pub canonical: bool,
}

/// One replayed position ready to be written as a training row.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedState {
    /// Player who made the move leading to this position
    pub mover: Player,
    pub hash: String,
    pub features: Vec<f32>,
}

/// Replay `record` and encode the position after every move.
pub fn encode_record(
    record: &MoveRecord,
    size: usize,
    options: EncodingOptions,
) -> Result<Vec<EncodedState>, GameError> {
    let steps = record.replay_steps(size)?;
    Ok(steps
        .into_iter()
        .map(|step| {
            let board = if options.canonical {
                canonicalize(&step.board).board
            } else {
                step.board
            };
            EncodedState {
                mover: step.player,
                hash: hash::encode(&board),
                features: encode_board(&board),
            }
        })
        .collect())
}

/// How often each canonical position occurs across `records`. Symmetric
/// images of one position share a key.
pub fn canonical_position_counts<'a>(
    records: impl IntoIterator<Item = &'a MoveRecord>,
    size: usize,
) -> Result<HashMap<String, usize>, GameError> {
    let options = EncodingOptions { canonical: true };
    let mut counts = HashMap::new();
    for record in records {
        for state in encode_record(record, size, options)? {
            *counts.entry(state.hash).or_insert(0) += 1;
        }
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_initial_board() {
        let data = encode_board(&Board::new());
        assert_eq!(data.len(), 64);
        assert_eq!(data[3 * 8 + 3], -1.0);
        assert_eq!(data[3 * 8 + 4], 1.0);
        assert_eq!(data[4 * 8 + 3], 1.0);
        assert_eq!(data[4 * 8 + 4], -1.0);
        assert_eq!(data.iter().filter(|&&v| v == 0.0).count(), 60);
    }

    #[test]
    fn test_encode_record_rows() {
        let record: MoveRecord = "2-3,2-2".parse().unwrap();
        let rows = encode_record(&record, 8, EncodingOptions::default()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].mover, Player::Dark);
        assert_eq!(rows[1].mover, Player::Light);
        assert_eq!(rows[0].features.iter().sum::<f32>(), 3.0);
        assert_eq!(rows[1].features.iter().sum::<f32>(), 0.0);
    }

    #[test]
    fn test_canonical_rows_match_for_symmetric_openings() {
        let a: MoveRecord = "2-3".parse().unwrap();
        let b: MoveRecord = "5-4".parse().unwrap();
        let canonical = EncodingOptions { canonical: true };
        assert_eq!(
            encode_record(&a, 8, canonical).unwrap(),
            encode_record(&b, 8, canonical).unwrap()
        );
        assert_ne!(
            encode_record(&a, 8, EncodingOptions::default()).unwrap(),
            encode_record(&b, 8, EncodingOptions::default()).unwrap()
        );
    }

    #[test]
    fn test_canonical_position_counts_merge_images() {
        let records: Vec<MoveRecord> = ["2-3", "3-2", "4-5", "5-4", "2-3,2-2"]
            .iter()
            .map(|text| text.parse().unwrap())
            .collect();
        let counts = canonical_position_counts(&records, 8).unwrap();
        // one shared opening position plus the second-ply position
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.values().sum::<usize>(), 6);
        assert_eq!(counts.values().max(), Some(&5));
    }

    #[test]
    fn test_invalid_record_propagates() {
        let record: MoveRecord = "0-0".parse().unwrap();
        assert_eq!(
            encode_record(&record, 8, EncodingOptions::default()),
            Err(GameError::InvalidRecord {
                index: 0,
                row: 0,
                col: 0
            })
        );
    }
}
