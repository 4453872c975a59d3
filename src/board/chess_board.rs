//! Core mutable board state and the apply/undo primitive.
//!
//! `ChessBoard` owns the cell grid, the piece registry, the turn indicator,
//! and the single-move memory used for en passant. One shared mutable board
//! serves both committed moves and legality probes; `move_piece` and
//! `undo_move` are exact inverses so that probing leaves no trace.

use crate::board::cell_grid::{CellGrid, CellPosition};
use crate::board::chess_move::{Move, MoveList};
use crate::board::game_status::GameStatus;
use crate::board::piece::{Piece, PieceColor, PieceKind};
use crate::board::piece_registry::{PieceId, PieceRegistry};
use crate::errors::ChessError;
use crate::move_generation::check_detection::in_check;
use crate::move_generation::legal_moves::{get_valid_moves, side_has_legal_move};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::{parse_fen, DEFAULT_FEN};

/// The board controller: grid, registry, turn bookkeeping, and last-move
/// memory.
#[derive(Clone, Debug, PartialEq)]
pub struct ChessBoard {
    /// The 8x8 occupancy grid.
    pub grid: CellGrid,
    /// Every piece ever created this game, captured ones included.
    pub registry: PieceRegistry,
    /// The side whose turn it is.
    pub turn: PieceColor,
    /// Full-move counter. The engine never touches it; drivers bump it per
    /// applied ply and decrement it on undo, so probe application cannot
    /// corrupt it.
    pub turn_number: u16,
    /// The most recently applied move, consulted only by pawn generation for
    /// the en-passant window.
    pub last_move: Option<Move>,
}

impl ChessBoard {
    /// Creates the standard starting position.
    pub fn new_game() -> ChessBoard {
        parse_fen(DEFAULT_FEN).expect("starting FEN should always parse")
    }

    /// Builds a board from a FEN string.
    ///
    /// # Arguments
    ///
    /// * `fen` - Placement, side to move and castling rights, optionally
    ///   followed by the en-passant, half-move and full-move fields.
    ///
    /// # Returns
    ///
    /// * `Result<ChessBoard, ChessError>` - The populated board, or the parse
    ///   error when the string is rejected.
    pub fn try_from_fen(fen: &str) -> Result<ChessBoard, ChessError> {
        parse_fen(fen)
    }

    /// Builds a board from a FEN string, falling back to the standard
    /// starting position when the string is rejected.
    pub fn from_fen(fen: &str) -> ChessBoard {
        match parse_fen(fen) {
            Ok(board) => board,
            Err(_) => ChessBoard::new_game(),
        }
    }

    /// Renders the current position as a six-field FEN string.
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Handle of the piece occupying `position`, if any.
    pub fn piece_at(&self, position: &CellPosition) -> Option<PieceId> {
        self.grid.occupant(position)
    }

    /// The piece record behind a handle.
    pub fn piece(&self, id: PieceId) -> &Piece {
        self.registry.get(id)
    }

    /// Applies a move to the board, mutating the move into its own undo
    /// record.
    ///
    /// The move must be one generated for the current position (the filter's
    /// output, or the paired rook move built internally). Applying anything
    /// else corrupts the board; this precondition is not checked.
    ///
    /// # Arguments
    ///
    /// * `selected_move` - The move to apply; captured/promotion fields are
    ///   filled in place.
    /// * `promotion_choice` - Overrides the move's promotion target when the
    ///   move promotes.
    pub fn move_piece(&mut self, selected_move: &mut Move, promotion_choice: Option<PieceKind>) {
        self.grid.clear(&selected_move.start);

        if selected_move.castling {
            // The rook travels first; its application flips the turn, which
            // the extra flip here cancels so the whole castle flips once.
            if let Some(rook) = selected_move.rook {
                let rook_start = self.registry.get(rook).position;
                let mut rook_move = Move::new(rook, rook_start, selected_move.rook_delta);
                self.move_piece(&mut rook_move, None);
                self.turn = self.turn.opposite();
            }
        } else if let Some(occupant) = self.grid.occupant(&selected_move.destination) {
            selected_move.captured = Some(occupant);
        }

        if let Some(captured) = selected_move.captured {
            let captured_position = self.registry.get(captured).position;
            self.grid.clear(&captured_position);
            self.registry.get_mut(captured).active = false;
        }

        let mover = self.registry.get_mut(selected_move.piece);
        mover.position = selected_move.destination;
        mover.times_moved += 1;
        self.grid
            .set_occupant(&selected_move.destination, selected_move.piece);

        if selected_move.promoted {
            if let Some(choice) = promotion_choice {
                selected_move.promotion = choice;
            }
            let mover = self.registry.get(selected_move.piece);
            let mut promoted = Piece::new(
                selected_move.promotion,
                mover.color,
                selected_move.destination,
            );
            promoted.times_moved = mover.times_moved;
            selected_move.promoted_piece = Some(promoted);
            selected_move.replaced_pawn = Some(std::mem::replace(
                self.registry.get_mut(selected_move.piece),
                promoted,
            ));
        }

        self.last_move = Some(selected_move.clone());
        self.turn = self.turn.opposite();
    }

    /// Reverses the most recently applied move.
    ///
    /// `selected_move` must be the exact object `move_piece` just applied
    /// (unchecked precondition). `previous_last_move` is the caller's saved
    /// copy of the last-move memory from before the application; it is
    /// restored verbatim.
    pub fn undo_move(&mut self, selected_move: &Move, previous_last_move: Option<Move>) {
        let reverse_delta = (-selected_move.delta.0, -selected_move.delta.1);
        let current_position = self.registry.get(selected_move.piece).position;
        let mut reverse_move = Move::new(selected_move.piece, current_position, reverse_delta);
        self.move_piece(&mut reverse_move, None);

        if selected_move.promoted {
            // The inverse application moved the promoted record; the pawn
            // comes back from the record the move retained, minus its step
            // onto the far rank.
            if let Some(mut pawn) = selected_move.replaced_pawn {
                pawn.times_moved -= 1;
                pawn.position = selected_move.start;
                *self.registry.get_mut(selected_move.piece) = pawn;
            }
        } else {
            // The inverse application counted one move of its own on top of
            // the one being taken back.
            self.registry.get_mut(selected_move.piece).times_moved -= 2;
        }

        if selected_move.castling {
            if let Some(rook) = selected_move.rook {
                let rook_position = self.registry.get(rook).position;
                let rook_start = (
                    rook_position.0 - selected_move.rook_delta.0,
                    rook_position.1 - selected_move.rook_delta.1,
                );
                let rook_move = Move::new(rook, rook_start, selected_move.rook_delta);
                self.undo_move(&rook_move, None);
                self.turn = self.turn.opposite();
            }
        }

        if let Some(captured) = selected_move.captured {
            self.registry.get_mut(captured).active = true;
            let captured_position = self.registry.get(captured).position;
            self.grid.set_occupant(&captured_position, captured);
        }

        self.last_move = previous_last_move;
    }

    /// Legal moves for one piece, either color, regardless of whose turn it
    /// is. See `move_generation::legal_moves`.
    pub fn get_valid_moves(&mut self, piece: PieceId) -> MoveList {
        get_valid_moves(self, piece)
    }

    /// Classifies the position for the side to move.
    ///
    /// # Returns
    ///
    /// * `None` - The game continues and nobody stands in check.
    /// * `Some(status)` - Check, stalemate, or a win. Terminal states are not
    ///   sticky; refusing further moves is the caller's policy.
    pub fn get_state(&mut self) -> Option<GameStatus> {
        let side = self.turn;
        let king = self.registry.king_of(&side);
        if !in_check(self, king, (0, 0)) {
            if !side_has_legal_move(self, &side) {
                return Some(GameStatus::Stalemate);
            }
        } else if self.is_checkmate(&side) {
            return Some(match side {
                PieceColor::White => GameStatus::BlackWins,
                PieceColor::Black => GameStatus::WhiteWins,
            });
        }
        let white_king = self.registry.king_of(&PieceColor::White);
        if in_check(self, white_king, (0, 0)) {
            return Some(GameStatus::WhiteInCheck);
        }
        let black_king = self.registry.king_of(&PieceColor::Black);
        if in_check(self, black_king, (0, 0)) {
            return Some(GameStatus::BlackInCheck);
        }
        None
    }

    /// True when `color` has no legal move at all. Only meaningful as
    /// checkmate when that side's king is attacked.
    pub fn is_checkmate(&mut self, color: &PieceColor) -> bool {
        !side_has_legal_move(self, color)
    }

    /// Signed material sum over active pieces, white minus black.
    pub fn evaluation(&self) -> i32 {
        self.registry.material_balance()
    }

    /// Active pieces per side as `(white, black)`.
    pub fn get_number_active_pieces(&self) -> (usize, usize) {
        self.registry.count_active()
    }
}
