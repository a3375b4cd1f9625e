//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    version,
    about = "Texas hold'em rules engine: hand evaluation, side pots and a full hand driver"
)]
pub struct HoldemCli {
    /// Log engine activity to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate the best five-card hand out of seven cards
    Eval {
        /// Seven cards such as `Ah Kh Qh Jh Th 2c 3d`
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Deal hole cards and a full board without betting
    Deal {
        #[arg(long, default_value_t = 2)]
        players: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play one hand where every player calls or checks to showdown
    Play {
        #[arg(long, default_value_t = 2)]
        players: usize,
        #[arg(long)]
        seed: Option<u64>,
        /// Print the event log as JSON lines after the summary
        #[arg(long)]
        events: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

pub const COMMANDS: &[&str] = &["eval", "deal", "play", "cfg"];

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_list_matches_subcommands() {
        let cmd = HoldemCli::command();
        let names: Vec<&str> = cmd.get_subcommands().map(|c| c.get_name()).collect();
        assert_eq!(names, COMMANDS);
    }

    #[test]
    fn verbose_flag_is_global() {
        let cli = HoldemCli::try_parse_from(["holdem", "deal", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }
}
