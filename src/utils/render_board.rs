use crate::board::chess_board::ChessBoard;
use crate::board::piece::{PieceColor, PieceKind};

/// Renders the board as a Unicode diagram from white's side, rank labels on
/// the left and file labels underneath.
pub fn render_board(board: &ChessBoard) -> String {
    let mut text = String::new();
    for row in 0..8 {
        text.push((b'0' + (8 - row) as u8) as char);
        for col in 0..8 {
            text.push(' ');
            match board.grid.occupant(&(row, col)) {
                Some(id) => {
                    let piece = board.registry.get(id);
                    text.push(piece_glyph(&piece.kind, &piece.color));
                }
                None => text.push('·'),
            }
        }
        text.push('\n');
    }
    text.push_str("  a b c d e f g h\n");
    text
}

fn piece_glyph(kind: &PieceKind, color: &PieceColor) -> char {
    match (color, kind) {
        (PieceColor::White, PieceKind::King) => '♔',
        (PieceColor::White, PieceKind::Queen) => '♕',
        (PieceColor::White, PieceKind::Rook) => '♖',
        (PieceColor::White, PieceKind::Bishop) => '♗',
        (PieceColor::White, PieceKind::Knight) => '♘',
        (PieceColor::White, PieceKind::Pawn) => '♙',
        (PieceColor::Black, PieceKind::King) => '♚',
        (PieceColor::Black, PieceKind::Queen) => '♛',
        (PieceColor::Black, PieceKind::Rook) => '♜',
        (PieceColor::Black, PieceKind::Bishop) => '♝',
        (PieceColor::Black, PieceKind::Knight) => '♞',
        (PieceColor::Black, PieceKind::Pawn) => '♟',
    }
}
