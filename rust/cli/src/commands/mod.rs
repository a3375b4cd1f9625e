//! Command handler modules for the holdem CLI.
//!
//! Each command lives in its own module and exposes
//! `handle_COMMAND_command(...) -> Result<(), CliError>`. Output streams are
//! passed in as `&mut dyn Write` so tests can capture them.

mod cfg;
mod deal;
mod eval;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;

use holdem_engine::config::GameConfig;
use holdem_engine::game::Game;
use std::io::Write;

use crate::config;
use crate::error::CliError;
use crate::ui;

/// Seats `players` ready players named `P1..Pn` and moves the game to
/// `StartGame`. A `--seed` flag wins over the configured seed.
pub(crate) fn seated_game(
    players: usize,
    seed: Option<u64>,
    err: &mut dyn Write,
) -> Result<Game, CliError> {
    let resolved = config::load_with_sources()?;
    let mut cfg: GameConfig = resolved.config;
    if let Some(seed) = seed {
        if resolved.sources.seed != config::ValueSource::Default && cfg.seed != Some(seed) {
            ui::display_warning(err, "--seed overrides the configured seed")?;
        }
        cfg.seed = Some(seed);
    }

    let mut game = Game::new(cfg)?;
    for i in 1..=players {
        let seat = game.add_player(&format!("P{}", i))?;
        game.set_ready(seat, true)?;
    }
    game.initialise()?;
    game.start_game()?;
    Ok(game)
}
