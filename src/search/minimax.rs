//! Depth-bounded minimax search with alpha-beta pruning.
//!
//! This module provides the move-selection core: given a board and a positive
//! depth budget it explores continuations recursively, scores terminals with
//! depth-scaled win/loss sentinels, evaluates depth-zero leaves with the
//! static heuristic, and returns the best column together with diagnostic
//! counters. Candidate columns are enumerated center-out, which surfaces
//! strong moves early and tightens the alpha-beta bounds sooner.
//!
//! The search is stateless and reentrant: it operates on private clones of
//! the caller's board, keeps no fields between calls, and never blocks on
//! I/O. Two calls with identical inputs return identical results; ties
//! resolve to the first candidate in center-out order.

use crate::errors::GameErrors;
use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{Column, Outcome, Player, COLS};
use crate::search::board_scoring::{score_position, Score, MAX_SCORE, MIN_SCORE, WIN_SCORE};

/// Column enumeration order for search: center first, edges last.
pub const CENTER_OUT_ORDER: [Column; COLS] = [3, 2, 4, 1, 5, 0, 6];

/// Diagnostic counters accumulated over one `choose_move` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, the root included.
    pub nodes_visited: u64,
    /// Depth-zero leaves scored with the static heuristic.
    pub leaf_evaluations: u64,
    /// Nodes that were terminal (win or full board).
    pub terminal_nodes: u64,
    /// Sibling sets abandoned early while maximizing.
    pub alpha_cutoffs: u64,
    /// Sibling sets abandoned early while minimizing.
    pub beta_cutoffs: u64,
}

impl SearchStats {
    #[inline]
    pub fn total_cutoffs(&self) -> u64 {
        self.alpha_cutoffs + self.beta_cutoffs
    }
}

/// Result of one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best column for the side to move.
    pub column: Column,
    /// Minimax score of that column from the mover's perspective.
    pub score: Score,
    /// Diagnostic counters for logging and benchmarking.
    pub stats: SearchStats,
}

/// Choose the best column for `player` under a `depth`-ply budget.
///
/// `player` must match the board's side to move (`StateMismatch` otherwise);
/// `depth` must be positive (`InvalidDepth`); the board must not already be
/// finished (`NoLegalMoves`). The caller's board is never mutated: each
/// candidate is explored on a private clone.
pub fn choose_move(
    board: &BoardState,
    depth: u8,
    player: Player,
) -> Result<SearchOutcome, GameErrors> {
    if depth == 0 {
        return Err(GameErrors::InvalidDepth(depth));
    }
    let to_move = board.side_to_move();
    if player != to_move {
        return Err(GameErrors::StateMismatch {
            requested: player,
            to_move,
        });
    }
    if board.terminal_outcome().is_some() {
        return Err(GameErrors::NoLegalMoves);
    }

    let mut stats = SearchStats::default();
    stats.nodes_visited += 1;

    let mut alpha = MIN_SCORE;
    let beta = MAX_SCORE;
    let mut best: Option<(Column, Score)> = None;

    for column in center_out_legal(board) {
        let mut child = board.clone();
        child.apply_move(column)?;
        let score = recurse(&child, depth - 1, alpha, beta, player, &mut stats)?;

        let improved = match best {
            None => true,
            Some((_, best_score)) => score > best_score,
        };
        if improved {
            best = Some((column, score));
        }
        if score > alpha {
            alpha = score;
        }
        // With beta still at MAX_SCORE the root itself never prunes.
        debug_assert!(alpha < beta);
    }

    let (column, score) = best.ok_or(GameErrors::NoLegalMoves)?;
    Ok(SearchOutcome {
        column,
        score,
        stats,
    })
}

/// Recursively evaluate a node with alpha-beta pruning.
///
/// `depth` is the remaining budget at this node. Terminal detection runs
/// before the depth check so a finished board is never scored heuristically,
/// and only the player who just moved is win-checked. Whether this node
/// maximizes or minimizes is inferred from whose turn it is relative to the
/// root player.
fn recurse(
    board: &BoardState,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    root: Player,
    stats: &mut SearchStats,
) -> Result<Score, GameErrors> {
    stats.nodes_visited += 1;

    if let Some(outcome) = board.terminal_outcome() {
        stats.terminal_nodes += 1;
        return Ok(match outcome {
            Outcome::Win(winner) if winner == root => WIN_SCORE + Score::from(depth),
            Outcome::Win(_) => -(WIN_SCORE + Score::from(depth)),
            Outcome::Draw => 0,
        });
    }

    if depth == 0 {
        stats.leaf_evaluations += 1;
        return Ok(score_position(board, root));
    }

    let maximizing = board.side_to_move() == root;

    if maximizing {
        let mut value = MIN_SCORE;
        for column in center_out_legal(board) {
            let mut child = board.clone();
            child.apply_move(column)?;
            let score = recurse(&child, depth - 1, alpha, beta, root, stats)?;
            if score > value {
                value = score;
            }
            if value > alpha {
                alpha = value;
            }
            if alpha >= beta {
                stats.alpha_cutoffs += 1;
                break;
            }
        }
        Ok(value)
    } else {
        let mut value = MAX_SCORE;
        for column in center_out_legal(board) {
            let mut child = board.clone();
            child.apply_move(column)?;
            let score = recurse(&child, depth - 1, alpha, beta, root, stats)?;
            if score < value {
                value = score;
            }
            if value < beta {
                beta = value;
            }
            if alpha >= beta {
                stats.beta_cutoffs += 1;
                break;
            }
        }
        Ok(value)
    }
}

fn center_out_legal(board: &BoardState) -> impl Iterator<Item = Column> + '_ {
    CENTER_OUT_ORDER
        .iter()
        .copied()
        .filter(move |&column| board.is_legal(column))
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

    /// Plain minimax without pruning, same ordering and tie-break rule.
    /// Reference used to prove the alpha-beta result exact.
    fn reference_minimax(board: &BoardState, depth: u8, root: Player) -> Score {
        if let Some(outcome) = board.terminal_outcome() {
            return match outcome {
                Outcome::Win(winner) if winner == root => WIN_SCORE + Score::from(depth),
                Outcome::Win(_) => -(WIN_SCORE + Score::from(depth)),
                Outcome::Draw => 0,
            };
        }
        if depth == 0 {
            return score_position(board, root);
        }

        let maximizing = board.side_to_move() == root;
        let mut value = if maximizing { MIN_SCORE } else { MAX_SCORE };
        for column in CENTER_OUT_ORDER {
            if !board.is_legal(column) {
                continue;
            }
            let mut child = board.clone();
            child.apply_move(column).expect("legal by construction");
            let score = reference_minimax(&child, depth - 1, root);
            if maximizing {
                if score > value {
                    value = score;
                }
            } else if score < value {
                value = score;
            }
        }
        value
    }

    #[test]
    fn rejects_zero_depth() {
        let board = BoardState::new();
        assert_eq!(
            choose_move(&board, 0, Player::Red),
            Err(GameErrors::InvalidDepth(0))
        );
    }

    #[test]
    fn rejects_player_out_of_turn() {
        let board = BoardState::new();
        assert_eq!(
            choose_move(&board, 4, Player::Yellow),
            Err(GameErrors::StateMismatch {
                requested: Player::Yellow,
                to_move: Player::Red,
            })
        );
    }

    #[test]
    fn rejects_terminal_board() {
        let board = board_after(&[0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(
            choose_move(&board, 4, Player::Yellow),
            Err(GameErrors::NoLegalMoves)
        );
    }

    #[test]
    fn search_is_deterministic() {
        let board = board_after(&[3, 2, 4, 4]);
        let first = choose_move(&board, 4, Player::Red).expect("search succeeds");
        let second = choose_move(&board, 4, Player::Red).expect("search succeeds");
        assert_eq!(first.column, second.column);
        assert_eq!(first.score, second.score);
        assert_eq!(first.stats, second.stats);
    }

    #[test]
    fn empty_board_opens_in_the_center() {
        let board = BoardState::new();
        let outcome = choose_move(&board, 4, Player::Red).expect("search succeeds");
        assert_eq!(outcome.column, 3);
        assert!(outcome.stats.nodes_visited > 1);
    }

    #[test]
    fn takes_an_immediate_horizontal_win() {
        // Red holds (0,0) (1,0) (2,0); column 3 completes the row.
        let board = board_after(&[0, 0, 1, 1, 2, 2]);
        for depth in [1, 3, 5] {
            let outcome = choose_move(&board, depth, Player::Red).expect("search succeeds");
            assert_eq!(outcome.column, 3, "depth {depth} missed the win");
            assert!(
                outcome.score >= WIN_SCORE,
                "depth {depth} reported a heuristic score for a forced win"
            );
        }
    }

    #[test]
    fn blocks_an_opponent_win_in_one() {
        // Red threatens (3,0); Yellow to move must block at any depth >= 2.
        let board = board_after(&[0, 6, 1, 6, 2]);
        assert_eq!(board.side_to_move(), Player::Yellow);
        for depth in [2, 4] {
            let outcome = choose_move(&board, depth, Player::Yellow).expect("search succeeds");
            assert_eq!(outcome.column, 3, "depth {depth} failed to block");
        }
    }

    #[test]
    fn prefers_the_faster_forced_win() {
        // Red can win immediately in column 3; any slower win scores lower
        // because terminal scores scale with remaining depth.
        let board = board_after(&[0, 0, 1, 1, 2, 2]);
        let shallow = choose_move(&board, 1, Player::Red).expect("search succeeds");
        let deep = choose_move(&board, 5, Player::Red).expect("search succeeds");
        assert_eq!(shallow.column, 3);
        assert_eq!(deep.column, 3);
        assert!(deep.score > shallow.score); // more remaining depth at the same terminal
    }

    #[test]
    fn pruning_matches_the_unpruned_reference() {
        let positions: [&[Column]; 4] = [&[], &[3], &[3, 3, 2, 2], &[0, 6, 3, 3, 1]];
        for moves in positions {
            let board = board_after(moves);
            let player = board.side_to_move();
            let outcome = choose_move(&board, 4, player).expect("search succeeds");
            let reference = reference_minimax(&board, 4, player);
            assert_eq!(
                outcome.score, reference,
                "alpha-beta diverged from plain minimax after {moves:?}"
            );
        }
    }

    #[test]
    fn pruning_reduces_visited_nodes() {
        let board = BoardState::new();
        let outcome = choose_move(&board, 5, Player::Red).expect("search succeeds");
        // Unpruned depth-5 from the empty board visits 1 + 7 + ... + 7^5 nodes.
        let unpruned: u64 = (0..=5u32).map(|d| 7u64.pow(d)).sum();
        assert!(outcome.stats.nodes_visited < unpruned);
        assert!(outcome.stats.total_cutoffs() > 0);
    }

    #[test]
    fn caller_board_is_never_mutated() {
        let board = board_after(&[3, 2]);
        let snapshot = board.clone();
        choose_move(&board, 5, Player::Red).expect("search succeeds");
        assert_eq!(board, snapshot);
    }
}
