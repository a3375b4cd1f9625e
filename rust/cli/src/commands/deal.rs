//! Deal command handler for dealing and displaying a single hand.
//!
//! Seats the requested number of players, posts blinds and deals every
//! street with nobody acting, then prints the hole cards and the board. The
//! command supports optional seeding for deterministic dealing.

use std::io::Write;

use crate::commands::seated_game;
use crate::error::CliError;
use crate::formatters::{format_board, format_card};

/// Handle the deal command.
///
/// # Errors
///
/// Returns `CliError::Engine` for an invalid player count and
/// `CliError::Config` when the configuration cannot be resolved.
pub fn handle_deal_command(
    players: usize,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut game = seated_game(players, seed, err)?;
    game.pre_flop()?;
    game.flop()?;
    game.turn()?;

    for p in game.players() {
        let cards: Vec<String> = p.hole_cards().iter().map(format_card).collect();
        writeln!(out, "Hole {}: {}", p.name(), cards.join(" "))?;
    }
    writeln!(out, "Board: {}", format_board(game.board()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_deal_command_output_format() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_deal_command(3, Some(999), &mut out, &mut err).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4, "three hole lines and the board");
        assert!(lines[0].starts_with("Hole P1:"));
        assert!(lines[2].starts_with("Hole P3:"));
        assert!(lines[3].starts_with("Board: ["));
    }

    #[test]
    #[serial]
    fn test_deal_command_deterministic() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        let mut err = Vec::new();

        handle_deal_command(2, Some(12345), &mut out1, &mut err).unwrap();
        handle_deal_command(2, Some(12345), &mut out2, &mut err).unwrap();

        assert_eq!(out1, out2, "Same seed should produce identical output");
    }

    #[test]
    #[serial]
    fn test_deal_command_rejects_single_player() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_deal_command(1, Some(1), &mut out, &mut err);
        assert!(matches!(result, Err(CliError::Engine(_))));
        assert!(out.is_empty());
    }
}
