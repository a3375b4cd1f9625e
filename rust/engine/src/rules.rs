use serde::{Deserialize, Serialize};

/// State of the betting round in progress.
///
/// Holds the highest bet any player has put in since the last settlement.
/// Player actions borrow it to read or raise the bar; the game resets it
/// whenever bets are swept into the pots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BettingRound {
    highest_bet: u32,
}

impl BettingRound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn highest_bet(&self) -> u32 {
        self.highest_bet
    }

    /// Lifts the highest bet to `bet` if it is exceeded.
    pub fn observe(&mut self, bet: u32) {
        if bet > self.highest_bet {
            self.highest_bet = bet;
        }
    }

    /// Chips a player with `bet` already in must add to match.
    pub fn to_call(&self, bet: u32) -> u32 {
        self.highest_bet.saturating_sub(bet)
    }

    pub fn reset(&mut self) {
        self.highest_bet = 0;
    }
}

/// Forced bets posted at the start of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blinds {
    pub small: u32,
    pub big: u32,
}

impl Blinds {
    /// Small blind is half the big blind, rounded down.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_engine::rules::Blinds;
    ///
    /// let blinds = Blinds::from_big(50);
    /// assert_eq!((blinds.small, blinds.big), (25, 50));
    /// ```
    pub fn from_big(big: u32) -> Self {
        Self {
            small: big / 2,
            big,
        }
    }
}

/// Seats posting the small and big blind.
///
/// Heads-up the dealer posts the small blind and the other seat the big one;
/// with three or more players the two seats after the dealer post them.
pub fn blind_seats(players: usize, dealer: usize) -> (usize, usize) {
    if players == 2 {
        (dealer, (dealer + 1) % 2)
    } else {
        ((dealer + 1) % players, (dealer + 2) % players)
    }
}
