/// Classification of the game after a ply, reported by
/// `ChessBoard::get_state`. `None` at the call site means the game simply
/// continues with nobody in check.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// White's king is attacked and white can still move.
    WhiteInCheck,
    /// Black's king is attacked and black can still move.
    BlackInCheck,
    /// The side to move has no legal move and is not in check.
    Stalemate,
    /// Black is checkmated.
    WhiteWins,
    /// White is checkmated.
    BlackWins,
}

impl GameStatus {
    /// Human-readable message for the status, as shown by the text driver.
    pub fn message(&self) -> &'static str {
        match self {
            GameStatus::WhiteInCheck => "White in check.",
            GameStatus::BlackInCheck => "Black in check.",
            GameStatus::Stalemate => "Stalemate. It's a draw.",
            GameStatus::WhiteWins => "Checkmate. White wins.",
            GameStatus::BlackWins => "Checkmate. Black wins.",
        }
    }

    /// True for states that end the game.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GameStatus::Stalemate | GameStatus::WhiteWins | GameStatus::BlackWins
        )
    }
}
