//! Book-backed minimax engine behind the `Engine` trait.
//!
//! Consults the injected opening book while the position is still booked,
//! then falls through to the fixed-depth alpha-beta search. The engine holds
//! no search state between calls; only the immutable book and the configured
//! default depth live across moves.

use std::time::Instant;

use crate::engines::difficulty::{Difficulty, DEFAULT_DEPTH};
use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::GameErrors;
use crate::game_state::board_state::BoardState;
use crate::search::minimax::choose_move;
use crate::tables::opening_book::OpeningBook;

pub struct MinimaxEngine {
    default_depth: u8,
    opening_book: OpeningBook,
    use_book: bool,
}

impl MinimaxEngine {
    pub fn new(default_depth: u8) -> Self {
        Self::with_book(default_depth, OpeningBook::load_default())
    }

    pub fn with_book(default_depth: u8, opening_book: OpeningBook) -> Self {
        Self {
            default_depth,
            opening_book,
            use_book: true,
        }
    }

    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.depth())
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "DropFour Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        if name.eq_ignore_ascii_case("OwnBook") {
            let v = value.trim().to_ascii_lowercase();
            self.use_book = matches!(v.as_str(), "true" | "1" | "yes" | "on");
            return Ok(());
        }
        Err(format!("unknown option '{name}'"))
    }

    fn choose_move(
        &mut self,
        board: &BoardState,
        params: &SearchParams,
    ) -> Result<EngineOutput, GameErrors> {
        let start = Instant::now();
        let mut out = EngineOutput::default();

        if self.use_book {
            if let Some(column) = self.opening_book.reply_for(board) {
                out.best_move = Some(column);
                out.elapsed_micros = start.elapsed().as_micros();
                out.info_lines.push(format!("book move {column}"));
                return Ok(out);
            }
        }

        let depth = params.depth.unwrap_or(self.default_depth);
        let outcome = choose_move(board, depth, board.side_to_move())?;

        out.best_move = Some(outcome.column);
        out.score = outcome.score;
        out.stats = outcome.stats;
        out.elapsed_micros = start.elapsed().as_micros();
        out.info_lines.push(format!(
            "depth {} nodes {} cutoffs {} score {}",
            depth,
            outcome.stats.nodes_visited,
            outcome.stats.total_cutoffs(),
            outcome.score
        ));

        Ok(out)
    }
}
