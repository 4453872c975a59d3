use crate::board::cell_grid::{offset_position, CellPosition};
use crate::board::chess_board::ChessBoard;
use crate::board::chess_move::{Move, MoveList};
use crate::board::piece::{PieceColor, PieceKind};
use crate::board::piece_registry::PieceId;

/// Replacement targets offered when a pawn reaches the far rank, in the
/// order they are emitted.
pub const PROMOTION_TARGETS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Knight,
    PieceKind::Rook,
    PieceKind::Bishop,
];

/// Row direction a pawn of `color` advances in. White starts on row 6 and
/// pushes toward row 0.
pub fn forward_direction(color: &PieceColor) -> i8 {
    match color {
        PieceColor::White => -1,
        PieceColor::Black => 1,
    }
}

/// Pseudo-legal pawn moves: single and double pushes, diagonal captures,
/// promotions, and the en-passant reply to an adjacent enemy double step.
pub fn pawn_moves(board: &ChessBoard, piece: PieceId) -> MoveList {
    let mut result = MoveList::new();
    let pawn = board.registry.get(piece);
    let start = pawn.position;
    let forward = forward_direction(&pawn.color);
    let (far_row, double_step_row) = match pawn.color {
        PieceColor::White => (0, 6),
        PieceColor::Black => (7, 1),
    };

    // Pushes, blocked by any occupant regardless of color.
    if let Ok(step) = offset_position(&start, forward, 0) {
        if board.grid.is_empty(&step) {
            push_pawn_move(piece, start, (forward, 0), far_row, &mut result);
            if start.0 == double_step_row {
                if let Ok(jump) = offset_position(&start, forward * 2, 0) {
                    if board.grid.is_empty(&jump) {
                        result.push_back(Move::new(piece, start, (forward * 2, 0)));
                    }
                }
            }
        }
    }

    // Diagonal captures onto an active enemy piece.
    for d_col in [-1, 1] {
        if let Ok(stop) = offset_position(&start, forward, d_col) {
            if let Some(occupant) = board.grid.occupant(&stop) {
                let other = board.registry.get(occupant);
                if other.active && other.color != pawn.color {
                    push_pawn_move(piece, start, (forward, d_col), far_row, &mut result);
                }
            }
        }
    }

    // En passant, live for exactly one ply after an enemy pawn's double step
    // lands alongside.
    if let Some(last) = &board.last_move {
        let mover = board.registry.get(last.piece);
        if matches!(mover.kind, PieceKind::Pawn)
            && mover.color != pawn.color
            && last.delta.0.abs() == 2
            && last.destination.0 == start.0
            && (last.destination.1 - start.1).abs() == 1
        {
            let d_col = last.destination.1 - start.1;
            result.push_back(Move::en_passant_capture(
                piece,
                start,
                (forward, d_col),
                last.piece,
            ));
        }
    }

    result
}

/// Pushes a pawn move, fanned out into the four promotion replacements when
/// the destination is the far rank.
fn push_pawn_move(
    piece: PieceId,
    start: CellPosition,
    delta: (i8, i8),
    far_row: i8,
    result: &mut MoveList,
) {
    if start.0 + delta.0 == far_row {
        for target in PROMOTION_TARGETS {
            result.push_back(Move::promoting(piece, start, delta, target));
        }
    } else {
        result.push_back(Move::new(piece, start, delta));
    }
}
