use crate::board::cell_grid::offset_position;
use crate::board::chess_board::ChessBoard;
use crate::board::chess_move::{Move, MoveList};
use crate::board::piece_registry::PieceId;

/// The eight knight jumps.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
];

/// Pseudo-legal knight moves: the eight jumps, kept when the landing square
/// is on the board and not held by a friendly piece.
pub fn knight_moves(board: &ChessBoard, piece: PieceId) -> MoveList {
    let knight = board.registry.get(piece);
    let mut result = MoveList::new();
    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Ok(stop) = offset_position(&knight.position, d_row, d_col) {
            let blocked = match board.grid.occupant(&stop) {
                Some(occupant) => {
                    let other = board.registry.get(occupant);
                    other.active && other.color == knight.color
                }
                None => false,
            };
            if !blocked {
                result.push_back(Move::new(piece, knight.position, (d_row, d_col)));
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_in_the_open_has_eight_jumps() {
        let board = ChessBoard::from_fen("7k/8/8/3N4/8/8/8/K7 w - - 0 1");
        let knight = board.piece_at(&(3, 3)).unwrap();
        assert_eq!(knight_moves(&board, knight).len(), 8);
    }

    #[test]
    fn test_corner_knight_has_two_jumps() {
        let board = ChessBoard::from_fen("N6k/8/8/8/8/8/8/K7 w - - 0 1");
        let knight = board.piece_at(&(0, 0)).unwrap();
        assert_eq!(knight_moves(&board, knight).len(), 2);
    }

    #[test]
    fn test_friendly_square_is_excluded_enemy_kept() {
        let board = ChessBoard::from_fen("7k/8/1P3p2/3N4/8/8/8/K7 w - - 0 1");
        let knight = board.piece_at(&(3, 3)).unwrap();
        let moves = knight_moves(&board, knight);
        // b6 holds a friendly pawn; f6 holds a capturable enemy pawn.
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().any(|candidate| candidate.destination == (2, 5)));
        assert!(!moves.iter().any(|candidate| candidate.destination == (2, 1)));
    }
}
