//! Core bitboard state representation.
//!
//! `BoardState` is the central model for the engine. It stores one bitboard
//! per player, per-column fill counters, and the move counter from which the
//! side to move is derived. All mutation flows through `apply_move`; terminal
//! state is recomputed on demand rather than cached.

use crate::errors::GameErrors;
use crate::game_state::board_types::{
    bit_index, Column, Outcome, Player, BOARD_CELLS, BOTTOM_MASK, COLS, COLUMN_STRIDE, ROWS,
};
use crate::utils::key_generator::generate_key;
use crate::utils::key_parser::parse_key;

/// Shift distances for the four win directions in the 7-bit-stride layout:
/// vertical, horizontal, diagonal up-right, diagonal down-right.
const WIN_DIRECTION_SHIFTS: [u32; 4] = [1, COLUMN_STRIDE as u32, COLUMN_STRIDE as u32 + 1, ROWS as u32];

/// Compact game state optimized for fast cloning and O(1) win detection.
///
/// Invariants maintained by `apply_move`:
/// - the two player bitboards never intersect;
/// - each fill counter stays within `0..=6`;
/// - the total set-bit count across both bitboards equals `move_count`;
/// - the side to move alternates strictly (derived from move-count parity,
///   Red moves first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    /// One occupancy bitboard per player, indexed by `Player::index()`.
    pub bitboards: [u64; 2],
    /// Discs already stacked in each column.
    pub heights: [u8; COLS],
    /// Total moves applied since the empty board.
    pub move_count: u8,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            bitboards: [0; 2],
            heights: [0; COLS],
            move_count: 0,
        }
    }
}

impl BoardState {
    /// Empty board, Red to move.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Side holding the move, derived from move-count parity.
    #[inline]
    pub fn side_to_move(&self) -> Player {
        if self.move_count % 2 == 0 {
            Player::Red
        } else {
            Player::Yellow
        }
    }

    /// Side that applied the most recent move, if any.
    #[inline]
    pub fn last_mover(&self) -> Option<Player> {
        if self.move_count == 0 {
            None
        } else {
            Some(self.side_to_move().opposite())
        }
    }

    /// True iff `column` is in range and not yet full.
    #[inline]
    pub fn is_legal(&self, column: Column) -> bool {
        (column as usize) < COLS && self.heights[column as usize] < ROWS as u8
    }

    /// Drop the current player's disc into `column` and return the row it
    /// landed in. Fails with `IllegalMove` on an out-of-range or full column,
    /// leaving the board untouched.
    pub fn apply_move(&mut self, column: Column) -> Result<u8, GameErrors> {
        if !self.is_legal(column) {
            return Err(GameErrors::IllegalMove(column));
        }

        let col = column as usize;
        let row = self.heights[col];
        let mover = self.side_to_move();

        self.bitboards[mover.index()] |= 1u64 << bit_index(col, row as usize);
        self.heights[col] += 1;
        self.move_count += 1;

        Ok(row)
    }

    /// Shift-mask test for four-in-a-row in any direction.
    ///
    /// Between moves only the player who just moved can have completed a
    /// four-in-a-row, so terminal detection queries this for the last mover
    /// alone; checking both sides is still correct, at twice the cost.
    #[inline]
    pub fn check_win(&self, player: Player) -> bool {
        let bb = self.bitboards[player.index()];
        for shift in WIN_DIRECTION_SHIFTS {
            let pairs = bb & (bb >> shift);
            if pairs & (pairs >> (2 * shift)) != 0 {
                return true;
            }
        }
        false
    }

    /// Mask of the cells forming a completed four-in-a-row for `player`,
    /// or 0 when none exists. Recomputed on every call.
    pub fn winning_cells(&self, player: Player) -> u64 {
        let bb = self.bitboards[player.index()];
        for shift in WIN_DIRECTION_SHIFTS {
            let quads = bb & (bb >> shift) & (bb >> (2 * shift)) & (bb >> (3 * shift));
            if quads != 0 {
                return quads | (quads << shift) | (quads << (2 * shift)) | (quads << (3 * shift));
            }
        }
        0
    }

    /// True iff every cell is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.move_count == BOARD_CELLS
    }

    /// Win for the last mover, draw on a full board, `None` while play
    /// continues. Idempotent: repeated calls on a finished board return the
    /// same answer.
    pub fn terminal_outcome(&self) -> Option<Outcome> {
        if let Some(last) = self.last_mover() {
            if self.check_win(last) {
                return Some(Outcome::Win(last));
            }
        }
        if self.is_full() {
            return Some(Outcome::Draw);
        }
        None
    }

    /// Playable columns in ascending order. Center-out ordering is the
    /// search's concern, not the board's.
    pub fn legal_columns(&self) -> Vec<Column> {
        (0..COLS as Column).filter(|&c| self.is_legal(c)).collect()
    }

    /// Perfect integer key for (occupancy, ownership, side-to-move).
    ///
    /// Adds the mover's bitboard, the full occupancy, and one bottom bit per
    /// column; each column then encodes its stack plus a marker bit one above
    /// it, which is unique per position and never carries across the 7-bit
    /// column stride. Stable across calls and process runs.
    #[inline]
    pub fn position_hash(&self) -> u64 {
        let occupied = self.bitboards[0] | self.bitboards[1];
        let mover = self.bitboards[self.side_to_move().index()];
        mover + occupied + BOTTOM_MASK
    }

    /// Canonical string key for transport, logging, and the opening book
    /// tooling. Round-trips through `from_key`.
    #[inline]
    pub fn board_key(&self) -> String {
        generate_key(self)
    }

    /// Parse a canonical key string produced by `board_key`.
    #[inline]
    pub fn from_key(key: &str) -> Result<Self, String> {
        parse_key(key)
    }
}
