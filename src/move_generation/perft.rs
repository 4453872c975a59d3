//! Perft: exhaustive move-tree walks that count nodes and move classes, for
//! validating generation, application and undo against published tallies.

use crate::board::chess_board::ChessBoard;
use crate::board::chess_move::Move;
use crate::board::game_status::GameStatus;
use crate::move_generation::legal_moves::all_valid_moves;

/// Tallies accumulated over a perft walk.
///
/// `nodes` counts leaf positions only. Every other field counts applied
/// moves at every depth of the walk, so against per-depth reference tables
/// they compare to the column sums through the walked depth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

/// Walks every legal line to `depth` plies and returns the tallies. The
/// board comes back in its starting state.
pub fn perft(board: &mut ChessBoard, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    perft_walk(board, depth, &mut counts);
    counts
}

fn perft_walk(board: &mut ChessBoard, depth: u8, counts: &mut PerftCounts) {
    if depth == 0 {
        counts.nodes += 1;
        return;
    }
    let moves: Vec<Move> = all_valid_moves(board).into_iter().collect();
    let previous_last_move = board.last_move.clone();
    for mut candidate in moves {
        board.move_piece(&mut candidate, None);
        match board.get_state() {
            Some(GameStatus::WhiteWins) | Some(GameStatus::BlackWins) => {
                counts.checks += 1;
                counts.checkmates += 1;
            }
            Some(GameStatus::WhiteInCheck) | Some(GameStatus::BlackInCheck) => {
                counts.checks += 1;
            }
            _ => {}
        }
        if candidate.captured.is_some() {
            counts.captures += 1;
            if candidate.en_passant {
                counts.en_passant += 1;
            }
        }
        if candidate.castling {
            counts.castles += 1;
        }
        if candidate.promoted {
            counts.promotions += 1;
        }
        perft_walk(board, depth - 1, counts);
        board.undo_move(&candidate, previous_last_move.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::PieceColor;

    // Reference positions and per-depth tallies from
    // https://www.chessprogramming.org/Perft_Results; the class counters
    // below are the column sums through the walked depth.
    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const POSITION_4: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
    const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";
    const POSITION_6: &str =
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10";

    fn counts(
        nodes: u64,
        captures: u64,
        en_passant: u64,
        castles: u64,
        promotions: u64,
        checks: u64,
        checkmates: u64,
    ) -> PerftCounts {
        PerftCounts {
            nodes,
            captures,
            en_passant,
            castles,
            promotions,
            checks,
            checkmates,
        }
    }

    #[test]
    fn test_perft_startpos_shallow() {
        let mut board = ChessBoard::new_game();
        assert_eq!(perft(&mut board, 1), counts(20, 0, 0, 0, 0, 0, 0));
        assert_eq!(perft(&mut board, 2), counts(400, 0, 0, 0, 0, 0, 0));
        assert_eq!(board, ChessBoard::new_game());
    }

    #[test]
    fn test_perft_startpos_depth_three() {
        let mut board = ChessBoard::new_game();
        assert_eq!(perft(&mut board, 3), counts(8_902, 34, 0, 0, 0, 12, 0));
    }

    #[test]
    fn test_perft_kiwipete_shallow() {
        let mut board = ChessBoard::from_fen(KIWIPETE);
        assert_eq!(perft(&mut board, 1), counts(48, 8, 0, 2, 0, 0, 0));
        assert_eq!(perft(&mut board, 2), counts(2_039, 359, 1, 93, 0, 3, 0));
    }

    #[test]
    fn test_perft_position_three() {
        let mut board = ChessBoard::from_fen(POSITION_3);
        assert_eq!(perft(&mut board, 1), counts(14, 1, 0, 0, 0, 2, 0));
        assert_eq!(perft(&mut board, 2), counts(191, 15, 0, 0, 0, 12, 0));
        assert_eq!(perft(&mut board, 3), counts(2_812, 224, 2, 0, 0, 279, 0));
    }

    #[test]
    fn test_perft_position_four() {
        let mut board = ChessBoard::from_fen(POSITION_4);
        assert_eq!(perft(&mut board, 1), counts(6, 0, 0, 0, 0, 0, 0));
        assert_eq!(perft(&mut board, 2), counts(264, 87, 0, 6, 48, 10, 0));
    }

    #[test]
    fn test_perft_position_five_nodes() {
        let mut board = ChessBoard::from_fen(POSITION_5);
        assert_eq!(perft(&mut board, 1).nodes, 44);
        assert_eq!(perft(&mut board, 2).nodes, 1_486);
    }

    #[test]
    fn test_perft_position_six_nodes() {
        let mut board = ChessBoard::from_fen(POSITION_6);
        // The kingside bishops face each other: white on g5, black on g4.
        assert_eq!(
            board.piece(board.piece_at(&(3, 6)).unwrap()).color,
            PieceColor::White
        );
        assert_eq!(
            board.piece(board.piece_at(&(4, 6)).unwrap()).color,
            PieceColor::Black
        );
        assert_eq!(perft(&mut board, 1).nodes, 46);
        assert_eq!(perft(&mut board, 2).nodes, 2_079);
    }

    #[test]
    #[ignore]
    fn test_perft_deep_suite() {
        let mut board = ChessBoard::new_game();
        assert_eq!(perft(&mut board, 4).nodes, 197_281);

        let mut board = ChessBoard::from_fen(KIWIPETE);
        assert_eq!(
            perft(&mut board, 3),
            counts(97_862, 17_461, 46, 3_255, 0, 996, 1)
        );

        let mut board = ChessBoard::from_fen(POSITION_3);
        assert_eq!(
            perft(&mut board, 4),
            counts(43_238, 3_572, 125, 0, 0, 1_959, 17)
        );

        let mut board = ChessBoard::from_fen(POSITION_4);
        assert_eq!(
            perft(&mut board, 3),
            counts(9_467, 1_108, 4, 6, 168, 48, 22)
        );

        let mut board = ChessBoard::from_fen(POSITION_5);
        assert_eq!(perft(&mut board, 3).nodes, 62_379);

        let mut board = ChessBoard::from_fen(POSITION_6);
        assert_eq!(perft(&mut board, 3).nodes, 89_890);
    }
}
