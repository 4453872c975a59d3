use crate::board::cell_grid::offset_position;
use crate::board::chess_board::ChessBoard;
use crate::board::chess_move::{Move, MoveList};
use crate::board::piece::{Piece, PieceKind};
use crate::board::piece_registry::PieceId;
use crate::move_generation::check_detection::in_check;

/// The eight one-step king directions.
const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, -1),
    (-1, 1),
    (1, 1),
    (-1, -1),
];

/// Pseudo-legal king moves: the eight single steps, pre-screened against
/// enemy attacks, plus any available castle.
///
/// The pre-screen probes the destination with the king still on its current
/// square, so a square shielded by the king itself can slip through; the
/// trial filter catches those.
pub fn king_moves(board: &ChessBoard, piece: PieceId) -> MoveList {
    let king = board.registry.get(piece);
    let mut result = MoveList::new();

    for (d_row, d_col) in KING_OFFSETS {
        if let Ok(stop) = offset_position(&king.position, d_row, d_col) {
            let blocked = match board.grid.occupant(&stop) {
                Some(occupant) => {
                    let other = board.registry.get(occupant);
                    other.active && other.color == king.color
                }
                None => false,
            };
            if !blocked && !in_check(board, piece, (d_row, d_col)) {
                result.push_back(Move::new(piece, king.position, (d_row, d_col)));
            }
        }
    }

    let (queenside, kingside) = can_castle(board, piece);
    let row = king.position.0;
    if queenside {
        if let Some(rook) = board.grid.occupant(&(row, 0)) {
            result.push_back(Move::castling(piece, king.position, (0, -2), rook, (0, 3)));
        }
    }
    if kingside {
        if let Some(rook) = board.grid.occupant(&(row, 7)) {
            result.push_back(Move::castling(piece, king.position, (0, 2), rook, (0, -2)));
        }
    }
    result
}

/// Castling availability for `piece`'s side as `(queenside, kingside)`.
///
/// Both fail when the king stands in check, has moved, or was never
/// eligible. Each side additionally needs its corner rook unmoved and
/// eligible, the cells between king and rook empty, and the king's two
/// stepping squares unattacked.
pub fn can_castle(board: &ChessBoard, piece: PieceId) -> (bool, bool) {
    let king = board.registry.get(piece);
    if in_check(board, piece, (0, 0)) || king.times_moved > 0 || !king.castle_eligible {
        return (false, false);
    }
    let row = king.position.0;

    let queenside = corner_rook_ready(board, king, (row, 0))
        && board.grid.is_empty(&(row, 1))
        && board.grid.is_empty(&(row, 2))
        && board.grid.is_empty(&(row, 3))
        && !in_check(board, piece, (0, -1))
        && !in_check(board, piece, (0, -2));
    let kingside = corner_rook_ready(board, king, (row, 7))
        && board.grid.is_empty(&(row, 5))
        && board.grid.is_empty(&(row, 6))
        && !in_check(board, piece, (0, 1))
        && !in_check(board, piece, (0, 2));
    (queenside, kingside)
}

fn corner_rook_ready(board: &ChessBoard, king: &Piece, corner: (i8, i8)) -> bool {
    match board.grid.occupant(&corner) {
        Some(occupant) => {
            let rook = board.registry.get(occupant);
            matches!(rook.kind, PieceKind::Rook)
                && rook.active
                && rook.color == king.color
                && rook.times_moved == 0
                && rook.castle_eligible
        }
        None => false,
    }
}
