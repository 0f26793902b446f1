//! Console-backed player.
//!
//! Prompts on stdout and reads long-algebraic squares from stdin, looping
//! internally on malformed input before returning a coordinate. Legality is
//! not judged here; the controller rejects illegal selections and the next
//! prompt reflects that. Entering an empty line during destination selection
//! abandons the chosen origin.

use std::io::{self, BufRead, Write};

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::board_location::BoardLocation;
use crate::game_state::chess_types::Color;
use crate::players::player_trait::Player;
use crate::utils::algebraic::long_algebraic_to_location;

pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    pub fn new(name: &str) -> Self {
        HumanPlayer {
            name: name.to_owned(),
        }
    }

    /// Reads one square from stdin, reprompting until the text parses.
    ///
    /// An empty line returns `Err(OriginReselected)` when permitted, and a
    /// closed stdin surfaces as `InvalidAlgebraicString` so the caller can
    /// stop driving the game.
    fn read_square(
        &self,
        prompt: &str,
        allow_reselect: bool,
    ) -> Result<BoardLocation, ChessErrors> {
        let stdin = io::stdin();
        loop {
            print!("{prompt}");
            let _ = io::stdout().flush();

            let mut line = String::new();
            let bytes_read = stdin.lock().read_line(&mut line).unwrap_or(0);
            if bytes_read == 0 {
                return Err(ChessErrors::InvalidAlgebraicString(String::from(
                    "end of input",
                )));
            }

            let text = line.trim();
            if text.is_empty() {
                if allow_reselect {
                    return Err(ChessErrors::OriginReselected);
                }
                continue;
            }

            match long_algebraic_to_location(text) {
                Ok(square) => return Ok(square),
                Err(parse_error) => println!("{parse_error}"),
            }
        }
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_origin(
        &mut self,
        _board: &Board,
        color: Color,
    ) -> Result<BoardLocation, ChessErrors> {
        let prompt = format!("{} ({color}) - select a piece to move: ", self.name);
        self.read_square(&prompt, false)
    }

    fn choose_destination(
        &mut self,
        _board: &Board,
        color: Color,
        _origin: BoardLocation,
    ) -> Result<BoardLocation, ChessErrors> {
        let prompt = format!(
            "{} ({color}) - select a destination (empty line to reselect): ",
            self.name
        );
        self.read_square(&prompt, true)
    }
}
