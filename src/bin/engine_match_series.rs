//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`

use drop_four::engines::engine_minimax::MinimaxEngine;
use drop_four::engines::engine_trait::Engine;
use drop_four::utils::match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

// Use 'cargo run --release --bin engine_match_series -- --verbose' to run this
fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    // Customize these two lines to experiment with different depths/engines.
    let player1 = || Box::new(MinimaxEngine::new(6)) as Box<dyn Engine>;
    let player2 = || Box::new(MinimaxEngine::new(4)) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games: 10,
            base_seed: 1234,
            per_game: MatchConfig {
                opening_min_plies: 1,
                opening_max_plies: 4,
                ..MatchConfig::default()
            },
            verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
