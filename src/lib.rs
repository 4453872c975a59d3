//! Crate root module declarations for the chess rules engine.
//!
//! This file exposes all top-level subsystems (board state, move generation,
//! and utility helpers) so binaries, tests, and external tooling can import
//! stable module paths.

pub mod errors;

pub mod board {
    pub mod cell_grid;
    pub mod chess_board;
    pub mod chess_move;
    pub mod game_status;
    pub mod piece;
    pub mod piece_registry;
}

pub mod move_generation {
    pub mod check_detection;
    pub mod generator;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod legal_moves;
    pub mod pawn_moves;
    pub mod perft;
    pub mod sliding_moves;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod game_log;
    pub mod render_board;
}
