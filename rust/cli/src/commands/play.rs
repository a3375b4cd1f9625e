//! Play command handler: one passive hand from blinds to showdown.
//!
//! Every player still able to act checks when level with the highest bet and
//! calls otherwise, so the hand always reaches showdown.

use std::io::Write;

use holdem_engine::events::GameEvent;
use holdem_engine::game::{Game, Phase};
use holdem_engine::hand::best_hand;
use tracing::debug;

use crate::commands::seated_game;
use crate::error::CliError;
use crate::formatters::{format_action, format_board, format_card, format_hand};

/// Handle the play command.
///
/// With `events` set the full event log follows the summary as JSON lines.
pub fn handle_play_command(
    players: usize,
    seed: Option<u64>,
    events: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut game = seated_game(players, seed, err)?;

    // Bets made during a phase are settled by the transition out of it.
    while game.phase() != Phase::DetermineWinner {
        writeln!(out, "== {} {}", game.phase(), format_board(game.board()))?;
        passive_round(&mut game)?;
        write_actions(&game, out)?;
        game.advance()?;
    }

    writeln!(out, "Board: {}", format_board(game.board()))?;
    for p in game.players() {
        let hole: Vec<String> = p.hole_cards().iter().map(format_card).collect();
        match (p.hole_pair(), <[_; 5]>::try_from(game.board())) {
            (Some(pair), Ok(b)) if !p.is_folded() => {
                let hand = best_hand(&[pair[0], pair[1], b[0], b[1], b[2], b[3], b[4]]);
                writeln!(out, "{}: {} {}", p.name(), hole.join(" "), format_hand(&hand))?;
            }
            _ => writeln!(out, "{}: {}", p.name(), hole.join(" "))?,
        }
    }

    for award in game.awards() {
        let winners: Vec<String> = award
            .shares
            .iter()
            .map(|&(seat, chips)| {
                let name = game.player(seat).map_or("?", |p| p.name());
                format!("{} +{}", name, chips)
            })
            .collect();
        let label = if award.pot == 0 {
            "Main pot".to_string()
        } else {
            format!("Side pot {}", award.pot)
        };
        writeln!(
            out,
            "{} {}: {} with {}",
            label,
            award.amount,
            winners.join(", "),
            format_hand(&award.hand)
        )?;
    }

    let balances: Vec<String> = game
        .players()
        .iter()
        .map(|p| format!("{} {}", p.name(), p.stack()))
        .collect();
    writeln!(out, "Final: {}", balances.join(", "))?;

    if events {
        let lines = game
            .events()
            .to_json_lines()
            .map_err(|e| CliError::InvalidInput(format!("cannot encode events: {}", e)))?;
        write!(out, "{}", lines)?;
    }
    Ok(())
}

fn passive_round(game: &mut Game) -> Result<(), CliError> {
    let seats: Vec<usize> = (0..game.players().len()).collect();
    for seat in seats {
        let Some(p) = game.player(seat) else { continue };
        if p.is_folded() || p.is_all_in() {
            continue;
        }
        if p.bet() == game.highest_bet() {
            game.check(seat)?;
        } else {
            let paid = game.call(seat)?;
            debug!(seat, paid, "passive call");
        }
    }
    Ok(())
}

fn write_actions(game: &Game, out: &mut dyn Write) -> Result<(), CliError> {
    let records = game.events().records();
    let start = records
        .iter()
        .rposition(|r| matches!(r.event, GameEvent::PhaseChanged { .. }))
        .unwrap_or(0);
    for record in &records[start..] {
        if let GameEvent::ActionTaken {
            seat,
            action,
            bet,
            stack,
        } = &record.event
        {
            let name = game.player(*seat).map_or("?", |p| p.name());
            writeln!(
                out,
                "  {} {} (bet {}, stack {})",
                name,
                format_action(action),
                bet,
                stack
            )?;
        }
    }
    Ok(())
}
