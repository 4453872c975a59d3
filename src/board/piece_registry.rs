use crate::board::piece::{Piece, PieceColor, PieceKind};
use crate::errors::ChessError;

/// Stable handle of a piece slot in the registry.
///
/// Handles are indices into an arena that only ever grows at setup time, so
/// a handle obtained from the registry stays valid for the whole game even
/// across captures, undos, and promotions.
pub type PieceId = usize;

/// Arena of every piece created in a game, plus fast handles to the kings.
///
/// Captured pieces stay in their slot with `active` cleared so that undoing
/// the capture can resurrect them. Promotion swaps the record held in the
/// pawn's slot, leaving the handle unchanged. Insertion order carries no
/// meaning.
#[derive(Clone, Debug, PartialEq)]
pub struct PieceRegistry {
    pieces: Vec<Piece>,
    white_king: PieceId,
    black_king: PieceId,
}

impl PieceRegistry {
    /// Builds a registry from setup placement, locating both kings.
    ///
    /// # Arguments
    ///
    /// * `pieces` - The pieces of the initial position, any order.
    ///
    /// # Returns
    ///
    /// * `Result<PieceRegistry, ChessError>` - `ChessError::MissingKing` when
    ///   a side has no king; otherwise the populated registry. When a side
    ///   has several kings the first one in `pieces` becomes the tracked one.
    pub fn build(pieces: Vec<Piece>) -> Result<PieceRegistry, ChessError> {
        let mut white_king = None;
        let mut black_king = None;
        for (id, piece) in pieces.iter().enumerate() {
            if matches!(piece.kind, PieceKind::King) {
                match piece.color {
                    PieceColor::White => white_king = white_king.or(Some(id)),
                    PieceColor::Black => black_king = black_king.or(Some(id)),
                }
            }
        }
        let white_king = white_king.ok_or(ChessError::MissingKing(PieceColor::White))?;
        let black_king = black_king.ok_or(ChessError::MissingKing(PieceColor::Black))?;
        Ok(PieceRegistry {
            pieces,
            white_king,
            black_king,
        })
    }

    /// Returns the piece in slot `id`.
    pub fn get(&self, id: PieceId) -> &Piece {
        &self.pieces[id]
    }

    /// Returns the piece in slot `id` for mutation.
    pub fn get_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id]
    }

    /// Handle of the given side's king.
    pub fn king_of(&self, color: &PieceColor) -> PieceId {
        match color {
            PieceColor::White => self.white_king,
            PieceColor::Black => self.black_king,
        }
    }

    /// Iterates over every slot, active or not.
    pub fn iter(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces.iter().enumerate()
    }

    /// Number of slots ever created.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// True when no piece was ever registered.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Counts active pieces as `(white, black)`.
    pub fn count_active(&self) -> (usize, usize) {
        let mut white = 0;
        let mut black = 0;
        for piece in &self.pieces {
            if piece.active {
                match piece.color {
                    PieceColor::White => white += 1,
                    PieceColor::Black => black += 1,
                }
            }
        }
        (white, black)
    }

    /// Signed material sum over active pieces, white minus black.
    pub fn material_balance(&self) -> i32 {
        let mut total = 0;
        for piece in &self.pieces {
            if piece.active {
                match piece.color {
                    PieceColor::White => total += piece.value,
                    PieceColor::Black => total -= piece.value,
                }
            }
        }
        total
    }
}
