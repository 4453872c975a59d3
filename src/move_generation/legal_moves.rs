//! The legality filter: pseudo-legal candidates are tried on the shared
//! board and kept only when the mover's own king comes out safe.

use crate::board::chess_board::ChessBoard;
use crate::board::chess_move::MoveList;
use crate::board::piece::PieceColor;
use crate::board::piece_registry::PieceId;
use crate::move_generation::check_detection::in_check;
use crate::move_generation::generator::pseudo_legal_moves;

/// Legal moves for one piece, regardless of whose turn it is.
///
/// Each non-castling candidate is applied, the mover's king probed, and the
/// application undone; the board's turn and last-move memory are restored
/// afterwards, so the board comes back exactly as it was. Castling moves
/// skip the trial because `can_castle` already vetted the king's path.
pub fn get_valid_moves(board: &mut ChessBoard, piece: PieceId) -> MoveList {
    let saved_turn = board.turn;
    let saved_last_move = board.last_move.clone();
    let king = board.registry.king_of(&board.registry.get(piece).color);

    let mut result = MoveList::new();
    for mut candidate in pseudo_legal_moves(board, piece) {
        if candidate.castling {
            result.push_back(candidate);
            continue;
        }
        board.move_piece(&mut candidate, None);
        let safe = !in_check(board, king, (0, 0));
        board.undo_move(&candidate, saved_last_move.clone());
        if safe {
            result.push_back(candidate);
        }
    }

    board.turn = saved_turn;
    board.last_move = saved_last_move;
    result
}

/// Every legal move for the side to move.
pub fn all_valid_moves(board: &mut ChessBoard) -> MoveList {
    let movers: Vec<PieceId> = board
        .registry
        .iter()
        .filter(|(_, piece)| piece.active && piece.color == board.turn)
        .map(|(id, _)| id)
        .collect();
    let mut result = MoveList::new();
    for piece in movers {
        result.append(&mut get_valid_moves(board, piece));
    }
    result
}

/// True when `color` has at least one legal move, stopping at the first.
pub fn side_has_legal_move(board: &mut ChessBoard, color: &PieceColor) -> bool {
    let movers: Vec<PieceId> = board
        .registry
        .iter()
        .filter(|(_, piece)| piece.active && piece.color == *color)
        .map(|(id, _)| id)
        .collect();
    for piece in movers {
        if !get_valid_moves(board, piece).is_empty() {
            return true;
        }
    }
    false
}
