use crate::board::cell_grid::CellPosition;
use crate::errors::ChessError;

/// Represents the kind (class) of a chess piece.
/// Used to distinguish between pawns, knights, bishops, rooks, queens, and kings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceKind {
    /// A pawn piece.
    Pawn,
    /// A knight piece.
    Knight,
    /// A bishop piece.
    Bishop,
    /// A rook piece.
    Rook,
    /// A queen piece.
    Queen,
    /// A king piece.
    King,
}

/// Represents the color (side) of a chess piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceColor {
    /// The white side, moving first, starting on rows 6 and 7.
    White,
    /// The black side, starting on rows 0 and 1.
    Black,
}

impl PieceColor {
    /// Returns the opposing color.
    pub fn opposite(&self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }
}

/// Material value of each piece kind.
///
/// # Arguments
///
/// * `kind` - The piece kind.
///
/// # Returns
///
/// * `i32` - The material value used by `ChessBoard::evaluation`.
pub fn material_value(kind: &PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 4,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 10,
        PieceKind::King => 1000,
    }
}

/// Converts a FEN placement letter into a piece kind and color.
/// Uppercase letters are white, lowercase are black.
pub fn kind_from_letter(letter: char) -> Result<(PieceKind, PieceColor), ChessError> {
    let kind = match letter.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return Err(ChessError::InvalidFenToken(letter)),
    };
    let color = if letter.is_ascii_uppercase() {
        PieceColor::White
    } else {
        PieceColor::Black
    };
    Ok((kind, color))
}

/// Converts a piece kind and color into its FEN placement letter.
pub fn letter_from_kind(kind: &PieceKind, color: &PieceColor) -> char {
    let letter = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match color {
        PieceColor::White => letter.to_ascii_uppercase(),
        PieceColor::Black => letter,
    }
}

/// One piece record in the registry.
///
/// A piece is never removed from the registry once created; capture clears
/// its `active` flag and detaches it from the grid so that undo can resurrect
/// it. For an active piece, `position` and the grid's occupant handle must
/// agree; for an inactive piece, `position` only remembers where it stood
/// when it was captured.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Piece {
    /// The piece's kind.
    pub kind: PieceKind,
    /// The piece's color.
    pub color: PieceColor,
    /// The cell the piece currently occupies (see struct invariant).
    pub position: CellPosition,
    /// The cell the piece was created on.
    pub starting_position: CellPosition,
    /// How many times the piece has moved. Castling eligibility requires 0.
    pub times_moved: u32,
    /// Material value, fixed per kind.
    pub value: i32,
    /// False once captured.
    pub active: bool,
    /// Setup-derived castling eligibility. Meaningful for rooks and kings;
    /// other kinds keep the default and never read it.
    pub castle_eligible: bool,
}

impl Piece {
    /// Creates a new active piece on `position` with no move history.
    pub fn new(kind: PieceKind, color: PieceColor, position: CellPosition) -> Piece {
        Piece {
            kind,
            color,
            position,
            starting_position: position,
            times_moved: 0,
            value: material_value(&kind),
            active: true,
            castle_eligible: true,
        }
    }
}
