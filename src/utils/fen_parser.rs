//! FEN parsing: builds a `ChessBoard` from the text form.

use crate::board::cell_grid::CellGrid;
use crate::board::chess_board::ChessBoard;
use crate::board::piece::{kind_from_letter, Piece, PieceColor, PieceKind};
use crate::board::piece_registry::PieceRegistry;
use crate::errors::ChessError;

/// The standard starting position.
pub const DEFAULT_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parses a FEN string into a board.
///
/// At least the placement, side-to-move and castling fields must be present.
/// The en-passant and half-move fields are accepted but not used; the
/// full-move field is read only from a six-field string. Castling letters
/// mark the matching corner rook eligible, and a king is eligible only when
/// it stands on its home square with at least one right for its side.
///
/// # Arguments
///
/// * `fen` - The position text, fields separated by whitespace.
///
/// # Returns
///
/// * `Result<ChessBoard, ChessError>` - The populated board, or the reason
///   the string was rejected.
pub fn parse_fen(fen: &str) -> Result<ChessBoard, ChessError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 3 {
        return Err(ChessError::InvalidFenString(fen.to_string()));
    }

    let turn = match fields[1] {
        "w" => PieceColor::White,
        "b" => PieceColor::Black,
        _ => return Err(ChessError::InvalidFenString(fen.to_string())),
    };

    let rights = fields[2];
    let white_kingside = rights.contains('K');
    let white_queenside = rights.contains('Q');
    let black_kingside = rights.contains('k');
    let black_queenside = rights.contains('q');

    let ranks: Vec<&str> = fields[0].split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFenString(fen.to_string()));
    }
    let mut pieces: Vec<Piece> = Vec::new();
    for (row, rank_text) in ranks.iter().enumerate() {
        let mut col: i8 = 0;
        for letter in rank_text.chars() {
            if let Some(run) = letter.to_digit(10) {
                // Checked inside the run so the total can never leave i8 range.
                col += run as i8;
                if col > 8 {
                    return Err(ChessError::InvalidFenString(fen.to_string()));
                }
            } else {
                if col > 7 {
                    return Err(ChessError::InvalidFenString(fen.to_string()));
                }
                let (kind, color) = kind_from_letter(letter)?;
                pieces.push(Piece::new(kind, color, (row as i8, col)));
                col += 1;
            }
        }
    }

    // Castling eligibility, resolved once all pieces are placed.
    for piece in &mut pieces {
        match piece.kind {
            PieceKind::Rook => {
                piece.castle_eligible = match (piece.color, piece.position) {
                    (PieceColor::Black, (0, 0)) => black_queenside,
                    (PieceColor::Black, (0, 7)) => black_kingside,
                    (PieceColor::White, (7, 0)) => white_queenside,
                    (PieceColor::White, (7, 7)) => white_kingside,
                    _ => piece.castle_eligible,
                };
            }
            PieceKind::King => {
                piece.castle_eligible = match piece.color {
                    PieceColor::White => {
                        piece.position == (7, 4) && (white_kingside || white_queenside)
                    }
                    PieceColor::Black => {
                        piece.position == (0, 4) && (black_kingside || black_queenside)
                    }
                };
            }
            _ => {}
        }
    }

    let registry = PieceRegistry::build(pieces)?;
    let mut grid = CellGrid::new();
    for (id, piece) in registry.iter() {
        grid.set_occupant(&piece.position, id);
    }

    // The full-move number only appears in a six-field string.
    let mut turn_number = 1;
    if fields.len() == 6 {
        if let Ok(parsed) = fields[5].parse::<u16>() {
            turn_number = parsed;
        }
    }

    Ok(ChessBoard {
        grid,
        registry,
        turn,
        turn_number,
        last_move: None,
    })
}
