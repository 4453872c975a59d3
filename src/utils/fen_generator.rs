//! FEN generation: renders a `ChessBoard` back into the text form.

use crate::board::chess_board::ChessBoard;
use crate::board::piece::{letter_from_kind, PieceColor, PieceKind};
use crate::utils::algebraic::square_to_text;

/// Renders the position as a six-field FEN string.
///
/// The half-move clock is not tracked and is always written as `0`. The
/// full-move field mirrors `turn_number`, and the en-passant square is
/// derived from the last applied move when it was a pawn double step.
pub fn generate_fen(board: &ChessBoard) -> String {
    let mut placement = String::new();
    for row in 0..8 {
        let mut empty_run = 0;
        for col in 0..8 {
            match board.grid.occupant(&(row, col)) {
                Some(id) => {
                    if empty_run > 0 {
                        placement.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    let piece = board.registry.get(id);
                    placement.push(letter_from_kind(&piece.kind, &piece.color));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            placement.push_str(&empty_run.to_string());
        }
        if row < 7 {
            placement.push('/');
        }
    }

    let side = match board.turn {
        PieceColor::White => 'w',
        PieceColor::Black => 'b',
    };

    let mut rights = String::new();
    let (white_kingside, white_queenside) = side_rights(board, &PieceColor::White);
    let (black_kingside, black_queenside) = side_rights(board, &PieceColor::Black);
    if white_kingside {
        rights.push('K');
    }
    if white_queenside {
        rights.push('Q');
    }
    if black_kingside {
        rights.push('k');
    }
    if black_queenside {
        rights.push('q');
    }
    if rights.is_empty() {
        rights.push('-');
    }

    let passed_square = match &board.last_move {
        Some(last)
            if last.delta.0.abs() == 2
                && matches!(board.registry.get(last.piece).kind, PieceKind::Pawn) =>
        {
            square_to_text(&(last.destination.0 - last.delta.0 / 2, last.destination.1))
        }
        _ => "-".to_string(),
    };

    format!(
        "{} {} {} {} 0 {}",
        placement, side, rights, passed_square, board.turn_number
    )
}

/// Castling rights still standing for one side, as `(kingside, queenside)`.
/// A right stands while king and matching corner rook are both unmoved and
/// eligible; attacks and blockers are move-time questions, not rights.
fn side_rights(board: &ChessBoard, color: &PieceColor) -> (bool, bool) {
    let king = board.registry.get(board.registry.king_of(color));
    if king.times_moved > 0 || !king.castle_eligible {
        return (false, false);
    }
    let row = match color {
        PieceColor::White => 7,
        PieceColor::Black => 0,
    };
    (
        corner_rook_standing(board, color, (row, 7)),
        corner_rook_standing(board, color, (row, 0)),
    )
}

fn corner_rook_standing(board: &ChessBoard, color: &PieceColor, corner: (i8, i8)) -> bool {
    match board.grid.occupant(&corner) {
        Some(occupant) => {
            let rook = board.registry.get(occupant);
            matches!(rook.kind, PieceKind::Rook)
                && rook.active
                && rook.color == *color
                && rook.times_moved == 0
                && rook.castle_eligible
        }
        None => false,
    }
}
