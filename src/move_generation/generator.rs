//! Dispatch from a piece to its pseudo-legal move routine.

use crate::board::chess_board::ChessBoard;
use crate::board::chess_move::MoveList;
use crate::board::piece::PieceKind;
use crate::board::piece_registry::PieceId;
use crate::move_generation::king_moves::king_moves;
use crate::move_generation::knight_moves::knight_moves;
use crate::move_generation::pawn_moves::pawn_moves;
use crate::move_generation::sliding_moves::{bishop_moves, queen_moves, rook_moves};

/// Pseudo-legal moves for one piece: movement geometry, blocking, captures
/// and the special moves, but no own-king safety.
pub fn pseudo_legal_moves(board: &ChessBoard, piece: PieceId) -> MoveList {
    match board.registry.get(piece).kind {
        PieceKind::Pawn => pawn_moves(board, piece),
        PieceKind::Knight => knight_moves(board, piece),
        PieceKind::Bishop => bishop_moves(board, piece),
        PieceKind::Rook => rook_moves(board, piece),
        PieceKind::Queen => queen_moves(board, piece),
        PieceKind::King => king_moves(board, piece),
    }
}
