//! Crate root module declarations for the Quince Chess rules engine.
//!
//! This file exposes all top-level subsystems (game state, movement tables,
//! move generation, the turn controller, players, and utility helpers) so the
//! binary, tests, and external tooling can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod board_location;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod moves {
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod pseudo_legal;
}

pub mod game {
    pub mod game_controller;
}

pub mod players {
    pub mod human_player;
    pub mod player_trait;
    pub mod random_player;
}

pub mod utils {
    pub mod algebraic;
    pub mod pgn;
    pub mod render_board;
}
