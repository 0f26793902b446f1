//! PGN-style game record writer.
//!
//! Serializes a finished (or abandoned) game's move history and a
//! seven-tag-roster header block to PGN-like text. Moves are written as
//! long-algebraic origin/destination pairs since the engine does not track
//! the disambiguation state SAN requires.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game::game_controller::MoveRecord;
use crate::utils::algebraic::location_to_long_algebraic;

/// Writes a game record with default headers stamped with today's date.
pub fn write_game_record(
    move_history: &[MoveRecord],
    light_name: &str,
    dark_name: &str,
    result: &str,
) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Quince Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), light_name.to_owned());
    headers.insert("Black".to_owned(), dark_name.to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    write_game_record_with_headers(move_history, &headers)
}

/// Writes a game record with caller-supplied headers.
pub fn write_game_record_with_headers(
    move_history: &[MoveRecord],
    headers: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_header_value(value)));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(move_history.len() + 1);
    for (ply, (origin, destination)) in move_history.iter().enumerate() {
        let lan = format!(
            "{}{}",
            location_to_long_algebraic(*origin),
            location_to_long_algebraic(*destination)
        );
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, lan));
        } else {
            movetext_parts.push(lan);
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

fn normalize_result(result: &str) -> &str {
    match result {
        "1-0" | "0-1" | "1/2-1/2" => result,
        _ => "*",
    }
}

fn escape_header_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
