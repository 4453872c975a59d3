use std::collections::LinkedList;

use crate::board::cell_grid::CellPosition;
use crate::board::piece::{Piece, PieceKind};
use crate::board::piece_registry::PieceId;

/// A list of move descriptors, in generation order.
pub type MoveList = LinkedList<Move>;

/// Describes one ply and doubles as its own undo record.
///
/// A move is built by generation with the special-move fields already
/// settled (en passant carries its victim, castling carries its rook pair,
/// promotion carries the selected kind). Application then fills in the
/// reversal data in place: the captured handle for ordinary captures, and
/// for promotion the replacement record plus the pawn record it displaced.
/// `ChessBoard::undo_move` reads those fields back, so the exact object that
/// was applied must be the one handed to undo.
#[derive(Clone, Debug, PartialEq)]
pub struct Move {
    /// Handle of the moving piece.
    pub piece: PieceId,
    /// The mover's cell before the move.
    pub start: CellPosition,
    /// Displacement as `(d_row, d_col)`.
    pub delta: (i8, i8),
    /// The mover's cell after the move, `start + delta`.
    pub destination: CellPosition,
    /// True for an en-passant capture; the victim is preset in `captured`
    /// because the destination cell is empty.
    pub en_passant: bool,
    /// True for castling; the paired rook move is applied and undone
    /// together with the king's.
    pub castling: bool,
    /// The castling rook.
    pub rook: Option<PieceId>,
    /// The castling rook's own displacement.
    pub rook_delta: (i8, i8),
    /// True when the move ends on the far rank and replaces the pawn.
    pub promoted: bool,
    /// Selected promotion target. Queen unless the generator or the caller
    /// chose otherwise.
    pub promotion: PieceKind,
    /// Handle of the piece this move captured, if any. Filled at
    /// application time for ordinary captures, preset for en passant.
    pub captured: Option<PieceId>,
    /// Record of the piece created by promotion, filled at application time.
    pub promoted_piece: Option<Piece>,
    /// Record of the pawn displaced from the registry slot by promotion,
    /// filled at application time and consumed by undo.
    pub replaced_pawn: Option<Piece>,
}

impl Move {
    /// Creates a plain move of `piece` from `start` by `delta`.
    pub fn new(piece: PieceId, start: CellPosition, delta: (i8, i8)) -> Move {
        Move {
            piece,
            start,
            delta,
            destination: (start.0 + delta.0, start.1 + delta.1),
            en_passant: false,
            castling: false,
            rook: None,
            rook_delta: (0, 0),
            promoted: false,
            promotion: PieceKind::Queen,
            captured: None,
            promoted_piece: None,
            replaced_pawn: None,
        }
    }

    /// Creates an en-passant capture with the victim preset.
    pub fn en_passant_capture(
        piece: PieceId,
        start: CellPosition,
        delta: (i8, i8),
        victim: PieceId,
    ) -> Move {
        let mut result = Move::new(piece, start, delta);
        result.en_passant = true;
        result.captured = Some(victim);
        result
    }

    /// Creates a castling move with the paired rook displacement attached.
    pub fn castling(
        piece: PieceId,
        start: CellPosition,
        delta: (i8, i8),
        rook: PieceId,
        rook_delta: (i8, i8),
    ) -> Move {
        let mut result = Move::new(piece, start, delta);
        result.castling = true;
        result.rook = Some(rook);
        result.rook_delta = rook_delta;
        result
    }

    /// Creates a promotion move with the given target kind.
    pub fn promoting(
        piece: PieceId,
        start: CellPosition,
        delta: (i8, i8),
        promotion: PieceKind,
    ) -> Move {
        let mut result = Move::new(piece, start, delta);
        result.promoted = true;
        result.promotion = promotion;
        result
    }
}
