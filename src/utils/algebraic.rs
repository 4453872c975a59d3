use crate::board::cell_grid::CellPosition;
use crate::board::chess_board::ChessBoard;
use crate::board::chess_move::Move;
use crate::board::piece::{PieceColor, PieceKind};
use crate::errors::ChessError;

/// Renders a cell as a file letter and rank digit, `(0, 0)` being `a8`.
pub fn square_to_text(position: &CellPosition) -> String {
    let file = (b'a' + position.1 as u8) as char;
    let rank = (b'0' + (8 - position.0) as u8) as char;
    format!("{}{}", file, rank)
}

/// Parses a two-character square name.
pub fn text_to_square(text: &str) -> Result<CellPosition, ChessError> {
    let mut letters = text.chars();
    let (file, rank) = match (letters.next(), letters.next(), letters.next()) {
        (Some(file), Some(rank), None) => (file, rank),
        _ => return Err(ChessError::InvalidAlgebraicString(text.to_string())),
    };
    if !('a'..='h').contains(&file) {
        return Err(ChessError::InvalidAlgebraicChar(file));
    }
    if !('1'..='8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicChar(rank));
    }
    let col = (file as u8 - b'a') as i8;
    let row = 8 - (rank as u8 - b'0') as i8;
    Ok((row, col))
}

/// Renders a move in long algebraic form: origin square, destination square,
/// and a lowercase replacement letter when the move promotes.
pub fn to_long_algebraic(selected_move: &Move) -> String {
    let mut text = format!(
        "{}{}",
        square_to_text(&selected_move.start),
        square_to_text(&selected_move.destination)
    );
    if selected_move.promoted {
        text.push(promotion_letter(&selected_move.promotion));
    }
    text
}

fn promotion_letter(kind: &PieceKind) -> char {
    match kind {
        PieceKind::Queen => 'q',
        PieceKind::Knight => 'n',
        PieceKind::Rook => 'r',
        PieceKind::Bishop => 'b',
        // Pawns and kings are not replacement targets; a move carrying one
        // was built by hand, not by generation.
        PieceKind::Pawn => 'p',
        PieceKind::King => 'k',
    }
}

fn promotion_target(letter: char) -> Result<PieceKind, ChessError> {
    match letter {
        'q' => Ok(PieceKind::Queen),
        'n' => Ok(PieceKind::Knight),
        'r' => Ok(PieceKind::Rook),
        'b' => Ok(PieceKind::Bishop),
        _ => Err(ChessError::InvalidAlgebraicChar(letter)),
    }
}

/// Parses long algebraic text into a move for the given position,
/// reconstructing the castling, en-passant and promotion annotations the
/// coordinates imply.
///
/// The result is shaped like generated output but has not been legality
/// checked; match it against `get_valid_moves` before applying.
///
/// # Arguments
///
/// * `board` - The position the text refers to.
/// * `text` - Four characters, or five with a promotion letter.
///
/// # Returns
///
/// * `Result<Move, ChessError>` - The reconstructed move, or why the text
///   was rejected.
pub fn from_long_algebraic(board: &ChessBoard, text: &str) -> Result<Move, ChessError> {
    if text.len() < 4 || text.len() > 5 || !text.is_ascii() {
        return Err(ChessError::InvalidAlgebraicString(text.to_string()));
    }
    let start = text_to_square(&text[0..2])?;
    let destination = text_to_square(&text[2..4])?;
    let suffix = text.chars().nth(4);

    let piece = board
        .grid
        .occupant(&start)
        .ok_or(ChessError::NoPieceAtSquare(start))?;
    let mover = board.registry.get(piece);
    let delta = (destination.0 - start.0, destination.1 - start.1);

    if matches!(mover.kind, PieceKind::Pawn) {
        let far_row = match mover.color {
            PieceColor::White => 0,
            PieceColor::Black => 7,
        };
        if destination.0 == far_row {
            let target = match suffix {
                Some(letter) => promotion_target(letter)?,
                None => PieceKind::Queen,
            };
            return Ok(Move::promoting(piece, start, delta, target));
        }
        if delta.1 != 0 && board.grid.is_empty(&destination) {
            // A diagonal step onto an empty square can only be en passant.
            let victim_square = (start.0, destination.1);
            let victim = board
                .grid
                .occupant(&victim_square)
                .ok_or(ChessError::NoPieceAtSquare(victim_square))?;
            return Ok(Move::en_passant_capture(piece, start, delta, victim));
        }
    }

    if suffix.is_some() {
        return Err(ChessError::InvalidAlgebraicString(text.to_string()));
    }

    if matches!(mover.kind, PieceKind::King) && delta.0 == 0 && delta.1.abs() == 2 {
        let (corner, rook_delta) = if delta.1 < 0 {
            ((start.0, 0), (0, 3))
        } else {
            ((start.0, 7), (0, -2))
        };
        let rook = board
            .grid
            .occupant(&corner)
            .ok_or(ChessError::NoPieceAtSquare(corner))?;
        return Ok(Move::castling(piece, start, delta, rook, rook_delta));
    }

    Ok(Move::new(piece, start, delta))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_names_match_orientation() {
        assert_eq!(square_to_text(&(0, 0)), "a8");
        assert_eq!(square_to_text(&(7, 0)), "a1");
        assert_eq!(square_to_text(&(7, 7)), "h1");
        assert_eq!(square_to_text(&(4, 4)), "e4");
        assert_eq!(text_to_square("a8").unwrap(), (0, 0));
        assert_eq!(text_to_square("e4").unwrap(), (4, 4));
        assert!(matches!(
            text_to_square("i4"),
            Err(ChessError::InvalidAlgebraicChar('i'))
        ));
        assert!(matches!(
            text_to_square("a9"),
            Err(ChessError::InvalidAlgebraicChar('9'))
        ));
        assert!(matches!(
            text_to_square("e44"),
            Err(ChessError::InvalidAlgebraicString(_))
        ));
    }

    #[test]
    fn test_plain_move_round_trips_through_text() {
        let board = ChessBoard::new_game();
        let parsed = from_long_algebraic(&board, "e2e4").unwrap();
        assert_eq!(parsed.start, (6, 4));
        assert_eq!(parsed.destination, (4, 4));
        assert_eq!(to_long_algebraic(&parsed), "e2e4");
    }

    #[test]
    fn test_empty_origin_is_rejected() {
        let board = ChessBoard::new_game();
        assert!(matches!(
            from_long_algebraic(&board, "e4e5"),
            Err(ChessError::NoPieceAtSquare((4, 4)))
        ));
        assert!(matches!(
            from_long_algebraic(&board, "e2"),
            Err(ChessError::InvalidAlgebraicString(_))
        ));
    }

    #[test]
    fn test_promotion_suffix_and_default() {
        let board = ChessBoard::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1");
        let explicit = from_long_algebraic(&board, "a7a8n").unwrap();
        assert!(explicit.promoted);
        assert_eq!(explicit.promotion, PieceKind::Knight);
        assert_eq!(to_long_algebraic(&explicit), "a7a8n");

        let implied = from_long_algebraic(&board, "a7a8").unwrap();
        assert!(implied.promoted);
        assert_eq!(implied.promotion, PieceKind::Queen);

        assert!(matches!(
            from_long_algebraic(&board, "a7a8x"),
            Err(ChessError::InvalidAlgebraicChar('x'))
        ));
        // A promotion letter on a non-promoting move is malformed.
        assert!(matches!(
            from_long_algebraic(&board, "a1a2q"),
            Err(ChessError::InvalidAlgebraicString(_))
        ));
    }

    #[test]
    fn test_castling_reconstructed_from_king_jump() {
        let board = ChessBoard::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let kingside = from_long_algebraic(&board, "e1g1").unwrap();
        assert!(kingside.castling);
        assert_eq!(kingside.rook, board.piece_at(&(7, 7)));
        assert_eq!(kingside.rook_delta, (0, -2));
        let queenside = from_long_algebraic(&board, "e8c8").unwrap();
        assert!(queenside.castling);
        assert_eq!(queenside.rook, board.piece_at(&(0, 0)));
        assert_eq!(queenside.rook_delta, (0, 3));
    }

    #[test]
    fn test_en_passant_reconstructed_from_empty_diagonal() {
        let mut board = ChessBoard::from_fen("7k/3p4/8/4P3/8/8/8/K7 b - - 0 1");
        let pawn = board.piece_at(&(1, 3)).unwrap();
        let mut double_step = board
            .get_valid_moves(pawn)
            .into_iter()
            .find(|candidate| candidate.delta == (2, 0))
            .unwrap();
        board.move_piece(&mut double_step, None);

        let parsed = from_long_algebraic(&board, "e5d6").unwrap();
        assert!(parsed.en_passant);
        assert_eq!(parsed.captured, Some(pawn));
        assert_eq!(to_long_algebraic(&parsed), "e5d6");
    }
}
