//! Errors used throughout the Drop Four engine.
//!
//! This module defines the canonical error type returned by game logic and
//! search. The enum `GameErrors` is used as the single error type across the
//! crate to simplify propagation and matching. Each variant carries contextual
//! information where appropriate to aid diagnostics and user-facing error
//! messages.
//!
//! Usage guidelines:
//! - Board and search functions return `Result<..., GameErrors>` for
//!   recoverable or expected failure modes (illegal moves, invalid search
//!   requests, etc).
//! - Callers should match on `GameErrors` to present friendly messages or to
//!   implement domain-specific recovery (for example re-prompting a human for
//!   a legal column after `IllegalMove`).
//! - No variant is retried or corrected internally: an illegal move is never
//!   silently rewritten to a legal one, and a search request against a
//!   finished game is never answered with an arbitrary column.

use crate::game_state::board_types::{Column, Player};

/// Unified error type for the Drop Four engine.
///
/// Each variant corresponds to a specific, identifiable failure mode that can
/// occur while mutating the board or invoking the search. Variants include
/// contextual payloads where useful (the offending column, the mismatched
/// players) so that callers can log or display precise diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameErrors {
    /// A move targeted a column that is out of range or already full.
    ///
    /// Payload: the offending column index as supplied by the caller.
    IllegalMove(Column),

    /// Search was invoked for a player who is not actually to move.
    ///
    /// Payload: (requested player, player actually to move).
    StateMismatch {
        requested: Player,
        to_move: Player,
    },

    /// Search was invoked on a terminal board (won or full). Callers must
    /// check terminality before asking for a move.
    NoLegalMoves,

    /// Search was invoked with a depth of zero. Depth is always a positive
    /// ply count chosen by the caller's difficulty tier.
    ///
    /// Payload: the rejected depth value.
    InvalidDepth(u8),
}
