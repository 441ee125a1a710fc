//! BoardState-to-key serializer.
//!
//! Produces the canonical string key for a board: seven column stacks listed
//! bottom-up and separated by `/`, followed by the side to move. The format
//! round-trips through `utils::key_parser`.

use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{bit_index, Player, COLS};

/// Render the canonical key, e.g. `rry/y///r// y` (column 0 holds red, red,
/// yellow from the bottom). An empty board serializes as `////// r`.
pub fn generate_key(board: &BoardState) -> String {
    let mut out = String::new();

    for column in 0..COLS {
        if column > 0 {
            out.push('/');
        }
        for row in 0..usize::from(board.heights[column]) {
            let bit = 1u64 << bit_index(column, row);
            if board.bitboards[Player::Red.index()] & bit != 0 {
                out.push('r');
            } else {
                out.push('y');
            }
        }
    }

    out.push(' ');
    out.push(match board.side_to_move() {
        Player::Red => 'r',
        Player::Yellow => 'y',
    });

    out
}
