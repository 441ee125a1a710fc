//! Random-move baseline engine.
//!
//! Selects uniformly from legal columns and is primarily used for harness
//! baselines, integration testing, and low-strength gameplay. Seedable so
//! series results can be reproduced.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::GameErrors;
use crate::game_state::board_state::BoardState;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "DropFour Random"
    }

    fn choose_move(
        &mut self,
        board: &BoardState,
        _params: &SearchParams,
    ) -> Result<EngineOutput, GameErrors> {
        if board.terminal_outcome().is_some() {
            return Err(GameErrors::NoLegalMoves);
        }

        let legal = board.legal_columns();
        let picked = legal
            .as_slice()
            .choose(&mut self.rng)
            .copied()
            .ok_or(GameErrors::NoLegalMoves)?;

        let mut out = EngineOutput::default();
        out.best_move = Some(picked);
        out.info_lines
            .push(format!("random pick from {} legal columns", legal.len()));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_engine_only_plays_legal_columns() {
        let mut engine = RandomEngine::with_seed(7);
        let mut board = BoardState::new();
        while board.terminal_outcome().is_none() {
            let out = engine
                .choose_move(&board, &SearchParams::default())
                .expect("open board always has a move");
            let column = out.best_move.expect("engine always picks a column");
            assert!(board.is_legal(column));
            board.apply_move(column).expect("picked column is legal");
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_game() {
        let mut first = RandomEngine::with_seed(99);
        let mut second = RandomEngine::with_seed(99);
        let mut board = BoardState::new();
        for _ in 0..10 {
            let a = first
                .choose_move(&board, &SearchParams::default())
                .expect("move available");
            let b = second
                .choose_move(&board, &SearchParams::default())
                .expect("move available");
            assert_eq!(a.best_move, b.best_move);
            board
                .apply_move(a.best_move.expect("column picked"))
                .expect("legal");
        }
    }

    #[test]
    fn finished_game_yields_no_move() {
        let mut engine = RandomEngine::with_seed(1);
        let mut board = BoardState::new();
        for column in [0, 1, 0, 1, 0, 1, 0] {
            board.apply_move(column).expect("scripted move is legal");
        }
        assert_eq!(
            engine
                .choose_move(&board, &SearchParams::default())
                .unwrap_err(),
            GameErrors::NoLegalMoves
        );
    }
}
