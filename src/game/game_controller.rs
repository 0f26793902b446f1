//! Turn-alternating game controller.
//!
//! Models the origin-select / destination-select / apply loop as an explicit
//! finite state machine rather than nested prompting loops, so reprompt
//! behavior and terminal detection are testable without a console attached.
//! The controller owns whose turn it is and passes the active color
//! explicitly to the players and the move generators.
//!
//! Transition contract:
//! 1. `AwaitingOrigin`: ask the acting player for an origin square. Empty
//!    squares and enemy pieces are rejected; the state is unchanged and the
//!    caller reprompts.
//! 2. `AwaitingDestination`: ask for a destination. Anything outside the
//!    legal-move set of the chosen piece is rejected with the state
//!    unchanged. A player may signal `OriginReselected` to fall back to
//!    origin selection.
//! 3. On acceptance the move is applied, recorded, and the opponent's status
//!    evaluated: `Checkmate` ends the game, otherwise the active color swaps.
//!
//! Rejection never mutates the board; no move is ever partially applied.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::board_location::BoardLocation;
use crate::game_state::chess_types::{Color, GameStatus};
use crate::move_generation::legal_move_generator::{game_status, generate_legal_moves_for_piece};
use crate::players::player_trait::Player;

/// A recorded origin/destination pair, in play order.
pub type MoveRecord = (BoardLocation, BoardLocation);

/// Where the controller stands inside one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingOrigin,
    AwaitingDestination { origin: BoardLocation },
    GameOver,
}

/// What one call to [`GameController::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    /// The origin was accepted; the controller now awaits a destination.
    OriginAccepted(BoardLocation),
    /// The origin was empty or held an enemy piece; state unchanged.
    OriginRejected(BoardLocation),
    /// The player abandoned the chosen origin to pick another.
    OriginReselected,
    /// The destination was outside the legal-move set; state unchanged.
    DestinationRejected(BoardLocation),
    /// The move was applied. `status` reflects the opponent afterward.
    MoveApplied {
        origin: BoardLocation,
        destination: BoardLocation,
        status: GameStatus,
    },
    /// The game has already finished; nothing was asked of any player.
    GameFinished(GameStatus),
}

pub struct GameController {
    board: Board,
    active_color: Color,
    state: TurnState,
    status: GameStatus,
    light_player: Box<dyn Player>,
    dark_player: Box<dyn Player>,
    move_history: Vec<MoveRecord>,
}

impl GameController {
    /// A controller over the standard setup with light to act.
    pub fn new(light_player: Box<dyn Player>, dark_player: Box<dyn Player>) -> Self {
        Self::from_position(Board::new_game(), Color::Light, light_player, dark_player)
            .expect("the standard setup always contains both kings")
    }

    /// A controller over an arbitrary position. The position's status for
    /// the side to move is evaluated immediately; a position that is already
    /// checkmate starts in `GameOver`.
    pub fn from_position(
        board: Board,
        active_color: Color,
        light_player: Box<dyn Player>,
        dark_player: Box<dyn Player>,
    ) -> Result<Self, ChessErrors> {
        let status = game_status(&board, active_color)?;
        let state = if matches!(status, GameStatus::Checkmate(_)) {
            TurnState::GameOver
        } else {
            TurnState::AwaitingOrigin
        };
        Ok(GameController {
            board,
            active_color,
            state,
            status,
            light_player,
            dark_player,
            move_history: Vec::new(),
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn state(&self) -> TurnState {
        self.state
    }

    #[inline]
    pub fn active_color(&self) -> Color {
        self.active_color
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    pub fn player_name(&self, color: Color) -> &str {
        match color {
            Color::Light => self.light_player.name(),
            Color::Dark => self.dark_player.name(),
        }
    }

    /// Performs exactly one state transition attempt.
    ///
    /// Player errors other than `OriginReselected` propagate to the caller;
    /// the board is never touched on any rejection path.
    pub fn step(&mut self) -> Result<TurnEvent, ChessErrors> {
        match self.state {
            TurnState::AwaitingOrigin => self.step_origin(),
            TurnState::AwaitingDestination { origin } => self.step_destination(origin),
            TurnState::GameOver => Ok(TurnEvent::GameFinished(self.status)),
        }
    }

    fn step_origin(&mut self) -> Result<TurnEvent, ChessErrors> {
        let color = self.active_color;
        let player = match color {
            Color::Light => &mut self.light_player,
            Color::Dark => &mut self.dark_player,
        };
        let origin = player.choose_origin(&self.board, color)?;
        if self.board.color_at(origin) == Some(color) {
            self.state = TurnState::AwaitingDestination { origin };
            Ok(TurnEvent::OriginAccepted(origin))
        } else {
            Ok(TurnEvent::OriginRejected(origin))
        }
    }

    fn step_destination(&mut self, origin: BoardLocation) -> Result<TurnEvent, ChessErrors> {
        let color = self.active_color;
        let player = match color {
            Color::Light => &mut self.light_player,
            Color::Dark => &mut self.dark_player,
        };
        let destination = match player.choose_destination(&self.board, color, origin) {
            Err(ChessErrors::OriginReselected) => {
                self.state = TurnState::AwaitingOrigin;
                return Ok(TurnEvent::OriginReselected);
            }
            other => other?,
        };

        let legal_moves = generate_legal_moves_for_piece(&self.board, origin)?;
        if !legal_moves.contains(&destination) {
            return Ok(TurnEvent::DestinationRejected(destination));
        }

        self.board.apply_move(origin, destination)?;
        self.move_history.push((origin, destination));

        let opponent = color.opposite();
        self.status = game_status(&self.board, opponent)?;
        if matches!(self.status, GameStatus::Checkmate(_)) {
            self.state = TurnState::GameOver;
        } else {
            self.active_color = opponent;
            self.state = TurnState::AwaitingOrigin;
        }
        Ok(TurnEvent::MoveApplied {
            origin,
            destination,
            status: self.status,
        })
    }

    /// Drives the machine until the game finishes or `max_plies` moves have
    /// been applied. An exhausted ply budget simply stops driving the game
    /// and reports the status reached so far.
    pub fn play_until_game_over(&mut self, max_plies: u32) -> Result<GameStatus, ChessErrors> {
        let mut applied: u32 = 0;
        while self.state != TurnState::GameOver && applied < max_plies {
            if let TurnEvent::MoveApplied { .. } = self.step()? {
                applied += 1;
            }
        }
        Ok(self.status)
    }
}
