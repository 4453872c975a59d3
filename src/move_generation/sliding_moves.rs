use crate::board::cell_grid::offset_position;
use crate::board::chess_board::ChessBoard;
use crate::board::chess_move::{Move, MoveList};
use crate::board::piece_registry::PieceId;

/// Walks one ray from `piece`'s cell, collecting empty squares and stopping
/// on the first occupant. An enemy occupant contributes a capture; a friendly
/// one contributes nothing.
fn follow_ray(board: &ChessBoard, piece: PieceId, d_row: i8, d_col: i8, result: &mut MoveList) {
    let slider = board.registry.get(piece);
    let mut step: (i8, i8) = (d_row, d_col);
    while let Ok(stop) = offset_position(&slider.position, step.0, step.1) {
        match board.grid.occupant(&stop) {
            None => result.push_back(Move::new(piece, slider.position, step)),
            Some(occupant) => {
                let other = board.registry.get(occupant);
                if other.active && other.color != slider.color {
                    result.push_back(Move::new(piece, slider.position, step));
                }
                break;
            }
        }
        step = (step.0 + d_row, step.1 + d_col);
    }
}

/// Pseudo-legal rook moves along the four rank and file rays.
pub fn rook_moves(board: &ChessBoard, piece: PieceId) -> MoveList {
    let mut result = MoveList::new();
    for (d_row, d_col) in [(0, 1), (0, -1), (1, 0), (-1, 0)] {
        follow_ray(board, piece, d_row, d_col, &mut result);
    }
    result
}

/// Pseudo-legal bishop moves along the four diagonal rays.
pub fn bishop_moves(board: &ChessBoard, piece: PieceId) -> MoveList {
    let mut result = MoveList::new();
    for (d_row, d_col) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
        follow_ray(board, piece, d_row, d_col, &mut result);
    }
    result
}

/// Pseudo-legal queen moves, the union of the rook and bishop rays.
pub fn queen_moves(board: &ChessBoard, piece: PieceId) -> MoveList {
    let mut result = rook_moves(board, piece);
    result.append(&mut bishop_moves(board, piece));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rook_rays_stop_on_occupants() {
        // The rook on d5 sees an enemy pawn up the file and open lines
        // elsewhere until the board edge.
        let board = ChessBoard::from_fen("8/3p4/8/3R4/8/8/8/K6k w - - 0 1");
        let rook = board.piece_at(&(3, 3)).unwrap();
        let moves = rook_moves(&board, rook);
        assert_eq!(moves.len(), 13);
        let captures = moves
            .iter()
            .filter(|candidate| candidate.destination == (1, 3))
            .count();
        assert_eq!(captures, 1);
        // The ray does not continue past the pawn.
        assert!(!moves.iter().any(|candidate| candidate.destination == (0, 3)));
    }

    #[test]
    fn test_bishop_on_open_diagonals() {
        let board = ChessBoard::from_fen("7k/8/8/3B4/8/8/8/K7 w - - 0 1");
        let bishop = board.piece_at(&(3, 3)).unwrap();
        assert_eq!(bishop_moves(&board, bishop).len(), 13);
    }

    #[test]
    fn test_queen_is_rook_plus_bishop() {
        let board = ChessBoard::from_fen("7k/8/8/3Q4/8/8/8/K7 w - - 0 1");
        let queen = board.piece_at(&(3, 3)).unwrap();
        assert_eq!(queen_moves(&board, queen).len(), 27);
    }

    #[test]
    fn test_friendly_piece_blocks_without_capture() {
        let board = ChessBoard::from_fen("K6k/8/8/8/8/3P4/3R4/8 w - - 0 1");
        let rook = board.piece_at(&(6, 3)).unwrap();
        let moves = rook_moves(&board, rook);
        // Up the file only d3 is reachable; the pawn blocks the rest.
        assert!(!moves.iter().any(|candidate| candidate.destination == (5, 3)));
        assert_eq!(moves.len(), 8);
    }
}
