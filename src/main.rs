use std::env;
use std::io::{self, BufRead};

use chess_rules::board::chess_board::ChessBoard;
use chess_rules::board::chess_move::Move;
use chess_rules::board::piece::PieceColor;
use chess_rules::utils::algebraic::{from_long_algebraic, text_to_square, to_long_algebraic};
use chess_rules::utils::game_log::write_game_log;
use chess_rules::utils::render_board::render_board;

/// One applied ply: the move itself and the last-move memory from before it,
/// kept so `undo` can restore the board exactly.
struct PlayedMove {
    applied: Move,
    previous_last_move: Option<Move>,
    text: String,
}

struct Session {
    board: ChessBoard,
    initial_fen: String,
    history: Vec<PlayedMove>,
}

impl Session {
    fn start(fen: Option<String>) -> Session {
        let board = match &fen {
            Some(text) => ChessBoard::from_fen(text),
            None => ChessBoard::new_game(),
        };
        let initial_fen = board.get_fen();
        Session {
            board,
            initial_fen,
            history: Vec::new(),
        }
    }

    fn try_move(&mut self, text: &str) {
        let parsed = match from_long_algebraic(&self.board, text) {
            Ok(parsed) => parsed,
            Err(error) => {
                println!("rejected: {:?}", error);
                return;
            }
        };
        if self.board.piece(parsed.piece).color != self.board.turn {
            println!("it is not that side's turn");
            return;
        }
        let candidate = self
            .board
            .get_valid_moves(parsed.piece)
            .into_iter()
            .find(|candidate| {
                candidate.start == parsed.start
                    && candidate.destination == parsed.destination
                    && candidate.promotion == parsed.promotion
            });
        let mut chosen = match candidate {
            Some(chosen) => chosen,
            None => {
                println!("illegal move: {}", text);
                return;
            }
        };

        let previous_last_move = self.board.last_move.clone();
        let mover_color = self.board.turn;
        self.board.move_piece(&mut chosen, None);
        if mover_color == PieceColor::Black {
            self.board.turn_number += 1;
        }
        self.history.push(PlayedMove {
            text: to_long_algebraic(&chosen),
            applied: chosen,
            previous_last_move,
        });

        print!("{}", render_board(&self.board));
        if let Some(status) = self.board.get_state() {
            println!("{}", status.message());
        }
    }

    fn undo(&mut self) {
        match self.history.pop() {
            Some(played) => {
                self.board
                    .undo_move(&played.applied, played.previous_last_move);
                if self.board.turn == PieceColor::Black {
                    self.board.turn_number -= 1;
                }
                print!("{}", render_board(&self.board));
            }
            None => println!("nothing to undo"),
        }
    }

    fn list_moves(&mut self, square: &str) {
        let position = match text_to_square(square) {
            Ok(position) => position,
            Err(error) => {
                println!("rejected: {:?}", error);
                return;
            }
        };
        let piece = match self.board.piece_at(&position) {
            Some(piece) => piece,
            None => {
                println!("no piece on {}", square);
                return;
            }
        };
        let listed: Vec<String> = self
            .board
            .get_valid_moves(piece)
            .iter()
            .map(to_long_algebraic)
            .collect();
        if listed.is_empty() {
            println!("no legal moves for {}", square);
        } else {
            println!("{}", listed.join(" "));
        }
    }

    fn print_log(&self, result: Option<&str>) {
        let texts: Vec<String> = self
            .history
            .iter()
            .map(|played| played.text.clone())
            .collect();
        print!(
            "{}",
            write_game_log(
                "White",
                "Black",
                &self.initial_fen,
                &texts,
                result.unwrap_or("*"),
            )
        );
    }
}

fn print_help() {
    println!("commands:");
    println!("  move <from><to>[qnrb]  play a move, e.g. move e2e4 or move a7a8n");
    println!("  moves <square>         list legal moves for the piece on a square");
    println!("  undo                   take back the last move");
    println!("  state                  report check, checkmate or stalemate");
    println!("  board                  print the position");
    println!("  fen                    print the position as FEN");
    println!("  eval                   material balance, white minus black");
    println!("  count                  active pieces per side");
    println!("  log [result]           print the game transcript");
    println!("  new [fen]              start over, optionally from a position");
    println!("  quit                   leave");
}

fn main() {
    let arguments: Vec<String> = env::args().skip(1).collect();
    let mut session = Session::start(if arguments.is_empty() {
        None
    } else {
        Some(arguments.join(" "))
    });

    print!("{}", render_board(&session.board));
    println!("type help for commands");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let mut words = line.split_whitespace();
        match words.next() {
            Some("move") => match words.next() {
                Some(text) => session.try_move(text),
                None => println!("usage: move <from><to>[qnrb]"),
            },
            Some("moves") => match words.next() {
                Some(square) => session.list_moves(square),
                None => println!("usage: moves <square>"),
            },
            Some("undo") => session.undo(),
            Some("state") => match session.board.get_state() {
                Some(status) => println!("{}", status.message()),
                None => println!("game on"),
            },
            Some("board") => print!("{}", render_board(&session.board)),
            Some("fen") => println!("{}", session.board.get_fen()),
            Some("eval") => println!("{:+}", session.board.evaluation()),
            Some("count") => {
                let (white, black) = session.board.get_number_active_pieces();
                println!("white {} black {}", white, black);
            }
            Some("log") => session.print_log(words.next()),
            Some("new") => {
                let rest: Vec<&str> = words.collect();
                if rest.is_empty() {
                    session = Session::start(None);
                } else {
                    match ChessBoard::try_from_fen(&rest.join(" ")) {
                        Ok(board) => {
                            let initial_fen = board.get_fen();
                            session = Session {
                                board,
                                initial_fen,
                                history: Vec::new(),
                            };
                        }
                        Err(error) => {
                            println!("rejected: {:?}", error);
                            continue;
                        }
                    }
                }
                print!("{}", render_board(&session.board));
            }
            Some("help") => print_help(),
            Some("quit") | Some("exit") => break,
            Some(unknown) => println!("unknown command: {} (try help)", unknown),
            None => {}
        }
    }
}
