//! Console front end for the Quince Chess rules engine.
//!
//! Drives the turn controller with two console players by default; passing
//! `--random` puts the random automated player on the dark side.

use std::env;

use quince_chess::game::game_controller::{GameController, TurnEvent, TurnState};
use quince_chess::game_state::chess_types::{Color, GameStatus};
use quince_chess::players::human_player::HumanPlayer;
use quince_chess::players::player_trait::Player;
use quince_chess::players::random_player::RandomPlayer;
use quince_chess::utils::algebraic::location_to_long_algebraic;
use quince_chess::utils::pgn::write_game_record;
use quince_chess::utils::render_board::render_board;

fn main() {
    let versus_random = env::args().any(|arg| arg == "--random");

    let light_player: Box<dyn Player> = Box::new(HumanPlayer::new("Light"));
    let dark_player: Box<dyn Player> = if versus_random {
        Box::new(RandomPlayer::new("Dark"))
    } else {
        Box::new(HumanPlayer::new("Dark"))
    };

    let mut controller = GameController::new(light_player, dark_player);
    println!("{}", render_board(controller.board()));

    loop {
        match controller.step() {
            Ok(TurnEvent::OriginAccepted(_)) => {}
            Ok(TurnEvent::OriginRejected(origin)) => {
                println!(
                    "{} is not one of your pieces; try again.",
                    location_to_long_algebraic(origin)
                );
            }
            Ok(TurnEvent::OriginReselected) => {}
            Ok(TurnEvent::DestinationRejected(destination)) => {
                println!(
                    "{} is not a legal destination; try again.",
                    location_to_long_algebraic(destination)
                );
            }
            Ok(TurnEvent::MoveApplied {
                origin,
                destination,
                status,
            }) => {
                println!(
                    "{}{} played.",
                    location_to_long_algebraic(origin),
                    location_to_long_algebraic(destination)
                );
                println!("{}", render_board(controller.board()));
                match status {
                    GameStatus::Check(color) => println!("{color} is in check."),
                    GameStatus::Checkmate(color) => println!("Checkmate - {color} loses."),
                    GameStatus::InProgress => {}
                }
            }
            Ok(TurnEvent::GameFinished(_)) => {}
            Err(error) => {
                println!("Game aborted: {error}");
                break;
            }
        }

        if controller.state() == TurnState::GameOver {
            let result = match controller.status() {
                GameStatus::Checkmate(Color::Dark) => "1-0",
                GameStatus::Checkmate(Color::Light) => "0-1",
                _ => "*",
            };
            println!();
            println!(
                "{}",
                write_game_record(
                    controller.move_history(),
                    controller.player_name(Color::Light),
                    controller.player_name(Color::Dark),
                    result,
                )
            );
            break;
        }
    }
}
