use crate::board::piece_registry::PieceId;
use crate::errors::ChessError;

/// A cell coordinate as `(row, column)`, each in `0..=7`.
///
/// Row 0 is black's back rank (rank 8) and row 7 is white's back rank
/// (rank 1); column 0 is file 'a'. White pawns advance toward smaller row
/// numbers, black pawns toward larger ones.
pub type CellPosition = (i8, i8);

/// Offsets a cell position by a row and column delta.
///
/// # Arguments
///
/// * `x` - The current cell position.
/// * `d_row` - The row offset.
/// * `d_col` - The column offset.
///
/// # Returns
///
/// * `Result<CellPosition, ChessError>` - The new position if within bounds,
///   otherwise `ChessError::OutOfBounds`.
pub fn offset_position(x: &CellPosition, d_row: i8, d_col: i8) -> Result<CellPosition, ChessError> {
    let y: CellPosition = (x.0 + d_row, x.1 + d_col);
    if (y.0 < 0) | (y.0 > 7) | (y.1 < 0) | (y.1 > 7) {
        Err(ChessError::OutOfBounds((*x, d_row, d_col)))
    } else {
        Ok(y)
    }
}

/// The 8x8 board grid. Each cell optionally holds the handle of the piece
/// occupying it. Cells are identified by their coordinates and live for the
/// whole game; only their occupant changes.
///
/// Only active pieces ever occupy cells. Captured pieces are detached from
/// the grid and survive in the registry alone.
#[derive(Clone, Debug, PartialEq)]
pub struct CellGrid {
    cells: [[Option<PieceId>; 8]; 8],
}

impl CellGrid {
    /// Creates an empty grid.
    pub fn new() -> CellGrid {
        CellGrid {
            cells: [[None; 8]; 8],
        }
    }

    /// Returns the handle of the piece occupying `position`, if any.
    pub fn occupant(&self, position: &CellPosition) -> Option<PieceId> {
        self.cells[position.0 as usize][position.1 as usize]
    }

    /// Places `piece` on `position`, replacing any previous occupant handle.
    pub fn set_occupant(&mut self, position: &CellPosition, piece: PieceId) {
        self.cells[position.0 as usize][position.1 as usize] = Some(piece);
    }

    /// Detaches whatever occupies `position`.
    pub fn clear(&mut self, position: &CellPosition) {
        self.cells[position.0 as usize][position.1 as usize] = None;
    }

    /// True when no piece occupies `position`.
    pub fn is_empty(&self, position: &CellPosition) -> bool {
        self.occupant(position).is_none()
    }
}

impl Default for CellGrid {
    fn default() -> Self {
        CellGrid::new()
    }
}
