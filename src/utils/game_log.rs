//! PGN-style game transcripts from a list of long-algebraic moves.

use std::collections::BTreeMap;

use chrono::Local;

use crate::utils::fen_parser::DEFAULT_FEN;

/// Builds a PGN-style transcript: a tag section, then the move text with one
/// number per white ply, closed by the result token.
///
/// # Arguments
///
/// * `white` / `black` - Player names for the tag section.
/// * `initial_fen` - The position the game started from; non-standard
///   starts are recorded with `SetUp`/`FEN` tags.
/// * `moves` - The played moves in long algebraic form.
/// * `result` - `1-0`, `0-1` or `1/2-1/2`; anything else logs as `*`.
pub fn write_game_log(
    white: &str,
    black: &str,
    initial_fen: &str,
    moves: &[String],
    result: &str,
) -> String {
    let normalized = match result {
        "1-0" | "0-1" | "1/2-1/2" => result,
        _ => "*",
    };

    let mut tags: BTreeMap<&str, String> = BTreeMap::new();
    tags.insert("Event", "Casual game".to_string());
    tags.insert("Site", "chess_rules".to_string());
    tags.insert("Date", Local::now().format("%Y.%m.%d").to_string());
    tags.insert("Round", "1".to_string());
    tags.insert("White", white.to_string());
    tags.insert("Black", black.to_string());
    tags.insert("Result", normalized.to_string());
    if initial_fen != DEFAULT_FEN {
        tags.insert("SetUp", "1".to_string());
        tags.insert("FEN", initial_fen.to_string());
    }

    let mut text = String::new();
    for (tag, value) in &tags {
        text.push_str(&format!("[{} \"{}\"]\n", tag, value));
    }
    text.push('\n');

    for (index, played) in moves.iter().enumerate() {
        if index % 2 == 0 {
            if index > 0 {
                text.push(' ');
            }
            text.push_str(&format!("{}.", index / 2 + 1));
        }
        text.push(' ');
        text.push_str(played);
    }
    if !moves.is_empty() {
        text.push(' ');
    }
    text.push_str(normalized);
    text.push('\n');
    text
}
