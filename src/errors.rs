//! The crate-wide error type.
//!
//! Only setup and text parsing are fallible. Move application trusts its
//! preconditions, and move generation returns an empty list rather than an
//! error when a piece has nowhere to go.

use crate::board::cell_grid::CellPosition;
use crate::board::piece::PieceColor;

/// Errors from coordinate math, FEN handling and algebraic parsing.
#[derive(Debug)]
pub enum ChessError {
    /// Attempted to offset a position by a delta `(d_row, d_col)` that would
    /// place it off the board.
    ///
    /// Payload: (origin_position, d_row, d_col)
    OutOfBounds((CellPosition, i8, i8)),

    /// A single character in a FEN placement field was not a recognized piece
    /// letter.
    InvalidFenToken(char),

    /// A FEN string was structurally malformed (too few fields, wrong rank
    /// count, rank overflow).
    ///
    /// Payload: the original string.
    InvalidFenString(String),

    /// The placement field contained no king of the given color.
    MissingKing(PieceColor),

    /// A single character used during algebraic parsing was invalid.
    ///
    /// Payload: the offending character (a file outside 'a'..'h' or a rank
    /// outside '1'..'8').
    InvalidAlgebraicChar(char),

    /// An algebraic string failed to parse as a move.
    ///
    /// Payload: the original string.
    InvalidAlgebraicString(String),

    /// A move referenced a square that holds no piece.
    NoPieceAtSquare(CellPosition),
}
