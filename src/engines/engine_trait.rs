//! Engine abstraction layer used by callers of the core.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use crate::errors::GameErrors;
use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::Column;
use crate::search::board_scoring::Score;
use crate::search::minimax::SearchStats;

/// Caller-supplied knobs for one move request. An absent depth means the
/// engine's configured default. Wall-clock budgets are a caller concern
/// layered above the engine; the core only honors the depth parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchParams {
    pub depth: Option<u8>,
}

/// Payload returned from a move request.
#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// Chosen column, if the engine produced one.
    pub best_move: Option<Column>,
    /// Score of the chosen column from the mover's perspective
    /// (0 for book moves and for the random baseline).
    pub score: Score,
    /// Search diagnostics; all-zero when no search ran.
    pub stats: SearchStats,
    /// Wall time the engine spent deciding.
    pub elapsed_micros: u128,
    /// Human-readable diagnostics for logging.
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    /// Display name for harness reports.
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    /// Decide a column for the board's side to move. The board is read-only;
    /// the caller applies the returned column itself.
    fn choose_move(
        &mut self,
        board: &BoardState,
        params: &SearchParams,
    ) -> Result<EngineOutput, GameErrors>;
}
