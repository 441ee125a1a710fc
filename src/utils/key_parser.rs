//! Key-to-BoardState parser.
//!
//! Rebuilds a fully-populated board from a canonical key string, including
//! bitboards, fill counters, and the move counter, and validates that the
//! encoded position is reachable through legal play.

use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{bit_index, Player, COLS, ROWS};

pub fn parse_key(key: &str) -> Result<BoardState, String> {
    let mut parts = key.split_whitespace();

    let stacks_part = parts.next().ok_or("missing column stacks in key")?;
    let side_part = parts.next().ok_or("missing side-to-move in key")?;

    if parts.next().is_some() {
        return Err("key has extra trailing fields".to_owned());
    }

    let stacks: Vec<&str> = stacks_part.split('/').collect();
    if stacks.len() != COLS {
        return Err(format!(
            "key must contain {COLS} column stacks, found {}",
            stacks.len()
        ));
    }

    let mut board = BoardState::new();
    let mut red_count = 0u8;
    let mut yellow_count = 0u8;

    for (column, stack) in stacks.iter().enumerate() {
        if stack.len() > ROWS {
            return Err(format!("column {column} stack exceeds {ROWS} discs"));
        }
        for (row, ch) in stack.chars().enumerate() {
            let player = match ch {
                'r' => {
                    red_count += 1;
                    Player::Red
                }
                'y' => {
                    yellow_count += 1;
                    Player::Yellow
                }
                _ => return Err(format!("invalid disc character '{ch}' in key")),
            };
            board.bitboards[player.index()] |= 1u64 << bit_index(column, row);
        }
        board.heights[column] = stack.len() as u8;
    }

    board.move_count = red_count + yellow_count;

    // Red moves first, so a reachable position holds either equal discs or
    // exactly one extra red disc.
    if red_count != yellow_count && red_count != yellow_count + 1 {
        return Err(format!(
            "unreachable disc balance: {red_count} red vs {yellow_count} yellow"
        ));
    }

    let encoded_side = match side_part {
        "r" => Player::Red,
        "y" => Player::Yellow,
        other => return Err(format!("invalid side-to-move field '{other}'")),
    };
    if encoded_side != board.side_to_move() {
        return Err(format!(
            "side-to-move field '{side_part}' contradicts the disc count"
        ));
    }

    Ok(board)
}
