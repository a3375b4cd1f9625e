use thiserror::Error;

use crate::game::Phase;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GameError {
    #[error("cannot move from {from} to {to}")]
    InvalidTransition { from: Phase, to: Phase },
    #[error("need at least {minimum} players, {seated} seated")]
    NotEnoughPlayers { seated: usize, minimum: usize },
    #[error("players not ready: {}", .0.join(", "))]
    PlayersNotReady(Vec<String>),
    #[error("seating is closed during {0}")]
    SeatingClosed(Phase),
    #[error("table is full ({max} seats)")]
    TableFull { max: usize },
    #[error("player {0} is already seated")]
    DuplicatePlayer(String),
    #[error("no player in seat {0}")]
    SeatNotFound(usize),
    #[error("player in seat {0} has folded")]
    PlayerFolded(usize),
    #[error("cannot check: bet {bet} is below the highest bet {highest_bet}")]
    CannotCheck { bet: u32, highest_bet: u32 },
    #[error("raise of {amount} exceeds stack {stack}; go all in instead")]
    AllInRequired { amount: u32, stack: u32 },
    #[error("deck exhausted: needed {needed} cards, {remaining} left")]
    DeckExhausted { needed: usize, remaining: usize },
    #[error("card stack already holds {capacity} cards")]
    StackFull { capacity: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CardParseError {
    #[error("empty card")]
    Empty,
    #[error("malformed card {0:?}")]
    Malformed(String),
    #[error("unknown rank {0:?}")]
    UnknownRank(String),
    #[error("unknown suit {0:?}")]
    UnknownSuit(char),
}
