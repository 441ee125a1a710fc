//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view from internal bitboards for debugging,
//! tests, and diagnostics in text environments.

use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{bit_index, Player, COLS, ROWS};

/// Render the board to a string for terminal output, top row first.
pub fn render_board(board: &BoardState) -> String {
    let mut out = String::new();

    out.push_str("0 1 2 3 4 5 6\n");

    for row in (0..ROWS).rev() {
        for column in 0..COLS {
            match disc_at(board, column, row) {
                Some(Player::Red) => out.push('R'),
                Some(Player::Yellow) => out.push('Y'),
                None => out.push('·'),
            }
            if column < COLS - 1 {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out.push_str("0 1 2 3 4 5 6");

    out
}

fn disc_at(board: &BoardState, column: usize, row: usize) -> Option<Player> {
    let bit = 1u64 << bit_index(column, row);
    if board.bitboards[Player::Red.index()] & bit != 0 {
        Some(Player::Red)
    } else if board.bitboards[Player::Yellow.index()] & bit != 0 {
        Some(Player::Yellow)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_renders_only_empty_cells() {
        let rendered = render_board(&BoardState::new());
        assert!(!rendered.contains('R'));
        assert!(!rendered.contains('Y'));
        assert_eq!(rendered.matches('·').count(), ROWS * COLS);
    }

    #[test]
    fn discs_appear_on_the_bottom_line_of_the_grid() {
        let mut board = BoardState::new();
        board.apply_move(0).expect("column 0 is open");
        board.apply_move(6).expect("column 6 is open");

        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();
        let bottom = lines[lines.len() - 2];
        assert!(bottom.starts_with('R'));
        assert!(bottom.ends_with('Y'));
    }
}
