//! Crate root module declarations for the Drop Four engine project.
//!
//! This file exposes all top-level subsystems (game state, search, opening
//! tables, engines, and utility helpers) so binaries, benches, tests, and
//! external tooling can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board_state;
    pub mod board_types;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod tables {
    pub mod opening_book;
}

pub mod engines {
    pub mod difficulty;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod key_generator;
    pub mod key_parser;
    pub mod match_harness;
    pub mod render_board;
}
