//! Opening-book support with TSV import for known-good early replies.
//!
//! This module can load opening positions from a tab-separated file and map
//! them into hash-indexed recommended columns keyed by the canonical position
//! hash. The book is immutable after loading and is consulted only during the
//! first few plies; a miss always falls through to search.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{Column, COLS};

/// Book entries only apply while the move counter is below this ply count;
/// the embedded table's longest booked prefix is three plies.
pub const BOOK_PLY_LIMIT: u8 = 4;

#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    by_hash: HashMap<u64, Column>,
}

impl OpeningBook {
    /// Load the opening book from `tables/connect_four_openings.tsv` when
    /// present, otherwise fall back to a small embedded default table.
    pub fn load_default() -> Self {
        let candidates = [
            "tables/connect_four_openings.tsv",
            "tables/openings.tsv",
        ];

        for p in candidates {
            if Path::new(p).exists() {
                if let Ok(book) = Self::from_tsv_path(p) {
                    return book;
                }
            }
        }

        Self::from_tsv_str(include_str!("data/openings_minimal.tsv")).unwrap_or_default()
    }

    pub fn from_tsv_path(path: &str) -> Result<Self, String> {
        let data = fs::read_to_string(path).map_err(|e| format!("failed reading {path}: {e}"))?;
        Self::from_tsv_str(&data)
    }

    /// Parse a TSV book. The header must name a `moves` column (the played
    /// column sequence, space-separated, `-` for the empty board) and a
    /// `reply` column (the recommended column for the side to move). Rows are
    /// indexed by the position reached after replaying the sequence; the
    /// first row indexing a position wins.
    pub fn from_tsv_str(tsv: &str) -> Result<Self, String> {
        let mut lines = tsv.lines().filter(|line| !line.trim().is_empty());
        let header = lines.next().ok_or("opening TSV is empty")?;
        let columns: Vec<&str> = header.split('\t').collect();

        let mut moves_idx = None;
        let mut reply_idx = None;

        for (i, name) in columns.iter().enumerate() {
            let lc = name.trim().to_ascii_lowercase();
            if lc == "moves" {
                moves_idx = Some(i);
            } else if lc == "reply" || lc == "best" {
                reply_idx = Some(i);
            }
        }

        let moves_idx =
            moves_idx.ok_or("opening TSV must contain a tab-separated 'moves' column")?;
        let reply_idx =
            reply_idx.ok_or("opening TSV must contain a tab-separated 'reply' column")?;

        let mut by_hash: HashMap<u64, Column> = HashMap::new();

        for line in lines {
            let fields: Vec<&str> = line.split('\t').collect();
            let sequence = fields
                .get(moves_idx)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .ok_or("missing move sequence in opening TSV row")?;
            let reply_field = fields
                .get(reply_idx)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .ok_or("missing reply in opening TSV row")?;

            let reply = parse_book_column(reply_field)
                .map_err(|e| format!("bad reply in opening row '{line}': {e}"))?;

            let mut board = BoardState::new();
            if sequence != "-" {
                for token in sequence.split_whitespace() {
                    let column = parse_book_column(token)
                        .map_err(|e| format!("bad move '{token}' in opening row '{line}': {e}"))?;
                    board.apply_move(column).map_err(|e| {
                        format!("failed to apply move '{token}' in opening row '{line}': {e:?}")
                    })?;
                }
            }

            by_hash.entry(board.position_hash()).or_insert(reply);
        }

        Ok(Self { by_hash })
    }

    /// Recommended column for this position, or `None` when the position is
    /// past the book ply limit, not booked, or booked with a column that is
    /// no longer playable. Pure lookup; never an error.
    pub fn reply_for(&self, board: &BoardState) -> Option<Column> {
        if board.move_count >= BOOK_PLY_LIMIT {
            return None;
        }
        let reply = *self.by_hash.get(&board.position_hash())?;
        if board.is_legal(reply) {
            Some(reply)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.by_hash.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_hash.is_empty()
    }
}

fn parse_book_column(token: &str) -> Result<Column, String> {
    let value: u8 = token
        .parse()
        .map_err(|_| format!("'{token}' is not a column index"))?;
    if usize::from(value) >= COLS {
        return Err(format!("column {value} is out of range"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_after(moves: &[Column]) -> BoardState {
        let mut board = BoardState::new();
        for &column in moves {
            board.apply_move(column).expect("scripted move is legal");
        }
        board
    }

    #[test]
    fn embedded_book_parses_and_answers_the_empty_board() {
        let book = OpeningBook::load_default();
        assert!(!book.is_empty());
        assert_eq!(book.reply_for(&BoardState::new()), Some(3));
    }

    #[test]
    fn embedded_book_answers_every_first_move_with_the_center() {
        let book = OpeningBook::load_default();
        for first in 0..COLS as Column {
            let board = board_after(&[first]);
            assert_eq!(book.reply_for(&board), Some(3), "first move {first}");
        }
    }

    #[test]
    fn embedded_book_sidesteps_the_triple_center_stack() {
        let book = OpeningBook::load_default();
        let board = board_after(&[3, 3, 3]);
        assert_eq!(book.reply_for(&board), Some(2));
    }

    #[test]
    fn book_goes_silent_past_the_ply_limit() {
        let book = OpeningBook::load_default();
        let board = board_after(&[3, 3, 3, 2]);
        assert!(board.move_count >= BOOK_PLY_LIMIT);
        assert_eq!(book.reply_for(&board), None);
    }

    #[test]
    fn unbooked_position_is_a_miss_not_an_error() {
        let book = OpeningBook::load_default();
        let board = board_after(&[0, 6]);
        assert_eq!(book.reply_for(&board), None);
    }

    #[test]
    fn custom_tsv_rows_index_their_positions() {
        let tsv = "moves\treply\n-\t3\n2 4\t5\n";
        let book = OpeningBook::from_tsv_str(tsv).expect("book should parse");
        assert_eq!(book.len(), 2);
        assert_eq!(book.reply_for(&board_after(&[2, 4])), Some(5));
    }

    #[test]
    fn header_without_required_columns_is_rejected() {
        assert!(OpeningBook::from_tsv_str("eco\tname\n").is_err());
        assert!(OpeningBook::from_tsv_str("moves\tweight\n-\t3\n").is_err());
    }

    #[test]
    fn malformed_rows_are_rejected() {
        assert!(OpeningBook::from_tsv_str("moves\treply\n-\t9\n").is_err());
        assert!(OpeningBook::from_tsv_str("moves\treply\nx y\t3\n").is_err());
    }
}
