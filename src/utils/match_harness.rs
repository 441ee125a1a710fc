//! Minimal head-to-head engine match harness for local testing.
//!
//! This module runs two `Engine` implementations against each other without
//! any transport I/O, with an optional seeded random opening prefix. The
//! harness owns the game board and drives both engines through the public
//! board and engine APIs only.

use chrono::Local;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

use crate::engines::engine_trait::{Engine, SearchParams};
use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{Column, Outcome, Player};
use crate::utils::render_board::render_board;

/// Opening prefixes are capped below the shortest possible win (7 plies) so
/// a prefixed game can never start in a terminal position.
const OPENING_PLIES_CAP: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    RedWin,
    YellowWin,
    Draw,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub params: SearchParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            opening_min_plies: 1,
            opening_max_plies: 4,
            params: SearchParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: BoardState,
    pub opening_moves: Vec<Column>,
    pub played_moves: Vec<Column>,
    pub red_total_time_ns: u128,
    pub yellow_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 1234,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SeriesStats {
    pub games: u16,
    pub player1_name: String,
    pub player2_name: String,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub player1_moves: u64,
    pub player2_moves: u64,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub outcomes: Vec<MatchOutcome>,
}

impl SeriesStats {
    /// Human-readable series summary.
    pub fn report(&self) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        format!(
            "[{timestamp}] series of {} games\n{}: {} wins, {:.3} ms/move over {} moves\n{}: {} wins, {:.3} ms/move over {} moves\ndraws: {}",
            self.games,
            self.player1_name,
            self.player1_wins,
            avg_ms_per_move(self.player1_total_time_ns, self.player1_moves),
            self.player1_moves,
            self.player2_name,
            self.player2_wins,
            avg_ms_per_move(self.player2_total_time_ns, self.player2_moves),
            self.player2_moves,
            self.draws,
        )
    }
}

fn avg_ms_per_move(total_ns: u128, moves: u64) -> f64 {
    if moves == 0 {
        0.0
    } else {
        total_ns as f64 / moves as f64 / 1e6
    }
}

/// Play one game between `red` and `yellow`, optionally prefixed by a seeded
/// random opening so repeated games diverge.
pub fn play_engine_match(
    red: &mut dyn Engine,
    yellow: &mut dyn Engine,
    config: &MatchConfig,
    opening_rng: &mut StdRng,
) -> Result<MatchResult, String> {
    let min = config.opening_min_plies.min(OPENING_PLIES_CAP);
    let max = config.opening_max_plies.clamp(min, OPENING_PLIES_CAP);

    let mut board = BoardState::new();
    let mut opening_moves = Vec::new();
    let opening_plies = opening_rng.random_range(min..=max);
    for _ in 0..opening_plies {
        let legal = board.legal_columns();
        let column = legal[opening_rng.random_range(0..legal.len())];
        board
            .apply_move(column)
            .map_err(|e| format!("opening move failed: {e:?}"))?;
        opening_moves.push(column);
    }

    red.new_game();
    yellow.new_game();

    let mut played_moves = Vec::new();
    let mut red_total_time_ns = 0u128;
    let mut yellow_total_time_ns = 0u128;

    let outcome = loop {
        if let Some(outcome) = board.terminal_outcome() {
            break match outcome {
                Outcome::Win(Player::Red) => MatchOutcome::RedWin,
                Outcome::Win(Player::Yellow) => MatchOutcome::YellowWin,
                Outcome::Draw => MatchOutcome::Draw,
            };
        }

        let mover = board.side_to_move();
        let engine: &mut dyn Engine = match mover {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };

        let start = Instant::now();
        let output = engine
            .choose_move(&board, &config.params)
            .map_err(|e| format!("{} failed to move: {e:?}", engine.name()))?;
        let elapsed = start.elapsed().as_nanos();

        match mover {
            Player::Red => red_total_time_ns += elapsed,
            Player::Yellow => yellow_total_time_ns += elapsed,
        }

        let column = output
            .best_move
            .ok_or_else(|| format!("{} returned no move", engine.name()))?;
        board
            .apply_move(column)
            .map_err(|e| format!("{} returned an illegal column: {e:?}", engine.name()))?;
        played_moves.push(column);
    };

    Ok(MatchResult {
        outcome,
        final_board: board,
        opening_moves,
        played_moves,
        red_total_time_ns,
        yellow_total_time_ns,
    })
}

/// Play a series, alternating colors each game. Fresh engines are built per
/// game through the factory closures so no state leaks between games.
pub fn play_engine_match_series(
    player1: impl Fn() -> Box<dyn Engine>,
    player2: impl Fn() -> Box<dyn Engine>,
    config: MatchSeriesConfig,
) -> Result<SeriesStats, String> {
    let mut stats = SeriesStats {
        games: config.games,
        player1_name: player1().name().to_owned(),
        player2_name: player2().name().to_owned(),
        ..SeriesStats::default()
    };

    for game in 0..config.games {
        let mut rng = StdRng::seed_from_u64(config.base_seed.wrapping_add(u64::from(game)));
        let player1_is_red = game % 2 == 0;

        let mut first = player1();
        let mut second = player2();
        let result = if player1_is_red {
            play_engine_match(first.as_mut(), second.as_mut(), &config.per_game, &mut rng)?
        } else {
            play_engine_match(second.as_mut(), first.as_mut(), &config.per_game, &mut rng)?
        };

        let (red_time, yellow_time) = (result.red_total_time_ns, result.yellow_total_time_ns);
        // The opening prefix decides which side makes the first engine move.
        let played = result.played_moves.len() as u64;
        let red_opens = result.opening_moves.len() % 2 == 0;
        let (red_moves, yellow_moves) = if red_opens {
            (played.div_ceil(2), played / 2)
        } else {
            (played / 2, played.div_ceil(2))
        };
        let red_is_p1 = player1_is_red;

        if red_is_p1 {
            stats.player1_total_time_ns += red_time;
            stats.player2_total_time_ns += yellow_time;
            stats.player1_moves += red_moves;
            stats.player2_moves += yellow_moves;
        } else {
            stats.player1_total_time_ns += yellow_time;
            stats.player2_total_time_ns += red_time;
            stats.player1_moves += yellow_moves;
            stats.player2_moves += red_moves;
        }

        match result.outcome {
            MatchOutcome::RedWin => {
                if red_is_p1 {
                    stats.player1_wins += 1;
                } else {
                    stats.player2_wins += 1;
                }
            }
            MatchOutcome::YellowWin => {
                if red_is_p1 {
                    stats.player2_wins += 1;
                } else {
                    stats.player1_wins += 1;
                }
            }
            MatchOutcome::Draw => stats.draws += 1,
        }
        stats.outcomes.push(result.outcome);

        if config.verbose {
            println!(
                "game {}: {:?} after opening {:?} and {} played moves\n{}",
                game + 1,
                result.outcome,
                result.opening_moves,
                result.played_moves.len(),
                render_board(&result.final_board)
            );
        }
    }

    Ok(stats)
}
