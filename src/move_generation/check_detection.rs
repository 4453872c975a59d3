//! Attack detection for a piece's current or hypothetical square.

use crate::board::cell_grid::offset_position;
use crate::board::chess_board::ChessBoard;
use crate::board::piece::{PieceColor, PieceKind};
use crate::board::piece_registry::PieceId;
use crate::move_generation::generator::pseudo_legal_moves;

/// Squares a king covers, relative to its own cell.
const KING_ATTACK_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, -1),
    (-1, 1),
    (1, 1),
    (-1, -1),
];

/// Squares a white pawn covers (white advances toward row 0).
const WHITE_PAWN_ATTACKS: [(i8, i8); 2] = [(-1, -1), (-1, 1)];

/// Squares a black pawn covers.
const BLACK_PAWN_ATTACKS: [(i8, i8); 2] = [(1, -1), (1, 1)];

/// Tests whether the square at `offset` from `piece`'s current cell is
/// attacked by any active enemy piece.
///
/// Enemy kings and pawns are matched against fixed attack tables rather than
/// their generated moves; generating a king's moves from here would recurse,
/// and a pawn's forward pushes are not attacks. Every other enemy piece
/// attacks exactly the squares its pseudo-legal moves reach.
///
/// # Arguments
///
/// * `piece` - The piece whose safety is probed, usually a king.
/// * `offset` - `(0, 0)` for the current square, or a displacement for a
///   square the piece might step to.
///
/// # Returns
///
/// * `bool` - True when some active enemy piece attacks the probed square.
pub fn in_check(board: &ChessBoard, piece: PieceId, offset: (i8, i8)) -> bool {
    let probed = board.registry.get(piece);
    let target = match offset_position(&probed.position, offset.0, offset.1) {
        Ok(target) => target,
        Err(_) => return false,
    };
    let color = probed.color;

    for (other_id, other) in board.registry.iter() {
        if other_id == piece || !other.active || other.color == color {
            continue;
        }
        match other.kind {
            PieceKind::King => {
                for (d_row, d_col) in KING_ATTACK_OFFSETS {
                    if let Ok(covered) = offset_position(&other.position, d_row, d_col) {
                        if covered == target {
                            return true;
                        }
                    }
                }
            }
            PieceKind::Pawn => {
                let attacks = match other.color {
                    PieceColor::White => WHITE_PAWN_ATTACKS,
                    PieceColor::Black => BLACK_PAWN_ATTACKS,
                };
                for (d_row, d_col) in attacks {
                    if let Ok(covered) = offset_position(&other.position, d_row, d_col) {
                        if covered == target {
                            return true;
                        }
                    }
                }
            }
            _ => {
                for candidate in pseudo_legal_moves(board, other_id) {
                    if candidate.destination == target {
                        return true;
                    }
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rook_gives_check_along_open_file() {
        let board = ChessBoard::from_fen("4r2k/8/8/8/8/8/8/4K3 w - - 0 1");
        let king = board.piece_at(&(7, 4)).unwrap();
        assert!(in_check(&board, king, (0, 0)));
        // One file over the rook no longer covers the king.
        assert!(!in_check(&board, king, (0, 1)));
    }

    #[test]
    fn test_blocked_rook_gives_no_check() {
        let board = ChessBoard::from_fen("4r2k/8/8/4n3/8/8/8/4K3 w - - 0 1");
        let king = board.piece_at(&(7, 4)).unwrap();
        assert!(!in_check(&board, king, (0, 0)));
    }

    #[test]
    fn test_pawn_attacks_one_diagonal_only() {
        let board = ChessBoard::from_fen("7k/8/8/8/3p4/8/8/2K5 w - - 0 1");
        let king = board.piece_at(&(7, 2)).unwrap();
        // The black pawn on d4 covers c3 and e3 but not d3.
        assert!(in_check(&board, king, (-2, 0)));
        assert!(in_check(&board, king, (-2, 2)));
        assert!(!in_check(&board, king, (-2, 1)));
        assert!(!in_check(&board, king, (0, 0)));
    }

    #[test]
    fn test_kings_cover_adjacent_squares() {
        let board = ChessBoard::from_fen("8/8/8/3k4/8/3K4/8/8 w - - 0 1");
        let white_king = board.piece_at(&(5, 3)).unwrap();
        assert!(!in_check(&board, white_king, (0, 0)));
        assert!(in_check(&board, white_king, (-1, 0)));
        assert!(in_check(&board, white_king, (-1, 1)));
    }

    #[test]
    fn test_knight_check() {
        let board = ChessBoard::from_fen("7k/8/4n3/8/3K4/8/8/8 w - - 0 1");
        let king = board.piece_at(&(4, 3)).unwrap();
        assert!(in_check(&board, king, (0, 0)));
    }

    #[test]
    fn test_inactive_pieces_do_not_attack() {
        let mut board = ChessBoard::from_fen("4r2k/8/8/8/8/8/4Q3/4K3 b - - 0 1");
        let rook = board.piece_at(&(0, 4)).unwrap();
        let mut capture = board
            .get_valid_moves(rook)
            .into_iter()
            .find(|candidate| candidate.destination == (6, 4))
            .unwrap();
        board.move_piece(&mut capture, None);
        // The queen is captured; only the rook now bears on the king.
        let king = board.piece_at(&(7, 4)).unwrap();
        assert!(in_check(&board, king, (0, 0)));
        assert!(!in_check(&board, king, (0, 1)));
    }
}
