//! Eval command handler: best hand out of seven cards.

use std::collections::HashSet;
use std::io::Write;

use holdem_engine::cards::{Card, parse_cards};
use holdem_engine::hand::best_hand;

use crate::error::CliError;
use crate::formatters::{format_board, format_hand};

/// Handle the eval command.
///
/// Cards may be given as separate arguments or as one comma/space separated
/// list. Exactly seven distinct cards are required.
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let parsed = parse_cards(&cards.join(" "))?;
    let seven: [Card; 7] = parsed.as_slice().try_into().map_err(|_| {
        CliError::InvalidInput(format!("expected 7 cards, got {}", parsed.len()))
    })?;
    let distinct: HashSet<Card> = seven.iter().copied().collect();
    if distinct.len() != seven.len() {
        return Err(CliError::InvalidInput("duplicate cards".into()));
    }

    let hand = best_hand(&seven);
    writeln!(out, "Cards: {}", format_board(&seven))?;
    writeln!(out, "Best hand: {}", format_hand(&hand))?;
    writeln!(out, "Category: {}", hand.category)?;
    writeln!(out, "Values: {:?}", hand.values)?;
    writeln!(out, "Kickers: {:?}", hand.kickers)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_eval_reports_straight_flush() {
        let mut out = Vec::new();
        handle_eval_command(&args("9h Th Jh Qh Kh As 2c"), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Category: Straight Flush"));
        assert!(output.contains("Values: [13]"));
    }

    #[test]
    fn test_eval_accepts_single_comma_list() {
        let mut out = Vec::new();
        let cards = vec!["Ac,Ad,Ah,As,Kc,2d,3h".to_string()];
        handle_eval_command(&cards, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Four of a Kind"));
    }

    #[test]
    fn test_eval_rejects_wrong_count_and_duplicates() {
        let mut out = Vec::new();
        assert!(matches!(
            handle_eval_command(&args("Ah Kh"), &mut out),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(
            handle_eval_command(&args("Ah Ah Qh Jh Th 2c 3d"), &mut out),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(
            handle_eval_command(&args("Ah Zh Qh Jh Th 2c 3d"), &mut out),
            Err(CliError::Card(_))
        ));
    }
}
