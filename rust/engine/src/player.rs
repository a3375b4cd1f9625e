use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::CardStack;
use crate::errors::GameError;
use crate::rules::BettingRound;

/// Number of hole cards a player holds.
pub const HOLE_CARDS: usize = 2;

/// What a player last did in the current betting round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// Seated, has not acted yet
    Waiting,
    /// Out of the hand; chips already bet stay in the pot
    Folded,
    Called,
    Checked,
    Raised,
    /// Whole stack committed
    AllIn,
    /// Currently deciding
    Thinking,
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayerStatus::Waiting => "waiting",
            PlayerStatus::Folded => "folded",
            PlayerStatus::Called => "called",
            PlayerStatus::Checked => "checked",
            PlayerStatus::Raised => "raised",
            PlayerStatus::AllIn => "all-in",
            PlayerStatus::Thinking => "thinking",
        };
        f.write_str(s)
    }
}

/// Betting actions a seat can take, used for event records and by drivers.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    Fold,
    Check,
    Call,
    Raise(u32),
    AllIn,
}

/// A seated player's account for one hand.
///
/// `stack` is what the player still holds behind; `bet` is what has been put
/// in during the current betting round and not yet swept into a pot.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    stack: u32,
    bet: u32,
    status: PlayerStatus,
    hole: CardStack,
    ready: bool,
    dealer: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, stack: u32) -> Self {
        Self {
            name: name.into(),
            stack,
            bet: 0,
            status: PlayerStatus::Waiting,
            hole: CardStack::with_capacity(HOLE_CARDS),
            ready: false,
            dealer: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn bet(&self) -> u32 {
        self.bet
    }
    pub fn status(&self) -> PlayerStatus {
        self.status
    }
    pub fn is_ready(&self) -> bool {
        self.ready
    }
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }
    pub fn is_dealer(&self) -> bool {
        self.dealer
    }
    pub fn set_dealer(&mut self, dealer: bool) {
        self.dealer = dealer;
    }
    pub fn is_folded(&self) -> bool {
        self.status == PlayerStatus::Folded
    }
    pub fn is_all_in(&self) -> bool {
        self.status == PlayerStatus::AllIn
    }

    pub fn hole_cards(&self) -> &[Card] {
        self.hole.as_slice()
    }

    /// Both hole cards, once they have been dealt.
    pub fn hole_pair(&self) -> Option<[Card; HOLE_CARDS]> {
        self.hole.as_slice().try_into().ok()
    }

    pub fn give_card(&mut self, card: Card) -> Result<(), GameError> {
        self.hole.push(card)
    }

    pub fn start_turn(&mut self) {
        self.status = PlayerStatus::Thinking;
    }

    pub fn fold(&mut self) {
        self.status = PlayerStatus::Folded;
    }

    /// Legal only when the player already matches the highest bet.
    pub fn check(&mut self, round: &BettingRound) -> Result<(), GameError> {
        if self.bet != round.highest_bet() {
            return Err(GameError::CannotCheck {
                bet: self.bet,
                highest_bet: round.highest_bet(),
            });
        }
        self.status = PlayerStatus::Checked;
        Ok(())
    }

    /// Matches the highest bet, going all in when the stack cannot cover it.
    /// Returns the chips moved from stack to bet.
    pub fn call(&mut self, round: &mut BettingRound) -> u32 {
        if self.is_all_in() {
            return 0;
        }
        let shortfall = round.to_call(self.bet);
        if self.stack <= shortfall {
            return self.all_in(round);
        }
        self.pay(shortfall);
        self.status = PlayerStatus::Called;
        round.observe(self.bet);
        shortfall
    }

    /// Adds `amount` to the bet.
    ///
    /// Raising exactly the stack is an all in. Raising more than the stack
    /// fails with [`GameError::AllInRequired`] and leaves the player untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_engine::player::{Player, PlayerStatus};
    /// use holdem_engine::rules::BettingRound;
    ///
    /// let mut round = BettingRound::new();
    /// let mut p = Player::new("alice", 1000);
    /// assert_eq!(p.raise(100, &mut round), Ok(PlayerStatus::Raised));
    /// assert_eq!((p.bet(), p.stack()), (100, 900));
    /// assert!(p.raise(2000, &mut round).is_err());
    /// assert_eq!((p.bet(), p.stack()), (100, 900));
    /// ```
    pub fn raise(
        &mut self,
        amount: u32,
        round: &mut BettingRound,
    ) -> Result<PlayerStatus, GameError> {
        if amount > self.stack {
            return Err(GameError::AllInRequired {
                amount,
                stack: self.stack,
            });
        }
        if amount == self.stack {
            self.all_in(round);
            return Ok(self.status);
        }
        self.pay(amount);
        self.status = PlayerStatus::Raised;
        round.observe(self.bet);
        Ok(self.status)
    }

    /// Pushes the whole stack in. No-op on an empty stack.
    pub fn all_in(&mut self, round: &mut BettingRound) -> u32 {
        if self.stack == 0 {
            return 0;
        }
        let amount = self.stack;
        self.pay(amount);
        self.status = PlayerStatus::AllIn;
        round.observe(self.bet);
        amount
    }

    /// Forced bet, capped at the stack. Status is left alone unless the blind
    /// takes every chip.
    pub fn post_blind(&mut self, amount: u32, round: &mut BettingRound) -> u32 {
        let paid = amount.min(self.stack);
        self.pay(paid);
        if self.stack == 0 && paid > 0 {
            self.status = PlayerStatus::AllIn;
        }
        round.observe(self.bet);
        paid
    }

    pub fn award(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Removes up to `amount` from the outstanding bet and returns it.
    pub(crate) fn take_bet(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.bet);
        self.bet -= taken;
        taken
    }

    fn pay(&mut self, amount: u32) {
        self.stack -= amount;
        self.bet += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn round_at(highest: u32) -> BettingRound {
        let mut round = BettingRound::new();
        round.observe(highest);
        round
    }

    #[test]
    fn call_short_of_highest_bet_goes_all_in() {
        let mut round = round_at(2000);
        let mut p = Player::new("bob", 1000);
        assert_eq!(p.call(&mut round), 1000);
        assert_eq!(p.bet(), 1000);
        assert_eq!(p.stack(), 0);
        assert_eq!(p.status(), PlayerStatus::AllIn);
        assert_eq!(round.highest_bet(), 2000);
    }

    #[test]
    fn call_pays_the_shortfall() {
        let mut round = round_at(50);
        let mut p = Player::new("bob", 1000);
        p.post_blind(25, &mut round);
        assert_eq!(p.call(&mut round), 25);
        assert_eq!((p.bet(), p.stack()), (50, 950));
        assert_eq!(p.status(), PlayerStatus::Called);
    }

    #[test]
    fn call_when_already_all_in_moves_nothing() {
        let mut round = round_at(10);
        let mut p = Player::new("bob", 10);
        p.all_in(&mut round);
        round.observe(500);
        assert_eq!(p.call(&mut round), 0);
        assert_eq!(p.bet(), 10);
    }

    #[test]
    fn check_requires_matching_bet() {
        let round = round_at(50);
        let mut p = Player::new("carol", 1000);
        assert_eq!(
            p.check(&round),
            Err(GameError::CannotCheck {
                bet: 0,
                highest_bet: 50
            })
        );
        assert_eq!(p.status(), PlayerStatus::Waiting);
        assert!(p.check(&BettingRound::new()).is_ok());
        assert_eq!(p.status(), PlayerStatus::Checked);
    }

    #[test]
    fn raise_of_entire_stack_is_all_in() {
        let mut round = BettingRound::new();
        let mut p = Player::new("dave", 300);
        assert_eq!(p.raise(300, &mut round), Ok(PlayerStatus::AllIn));
        assert_eq!(round.highest_bet(), 300);
    }

    #[test]
    fn short_blind_puts_player_all_in() {
        let mut round = BettingRound::new();
        let mut p = Player::new("erin", 30);
        assert_eq!(p.post_blind(50, &mut round), 30);
        assert_eq!(p.status(), PlayerStatus::AllIn);
        assert_eq!(round.highest_bet(), 30);
    }

    #[test]
    fn third_hole_card_is_rejected() {
        let mut p = Player::new("fay", 100);
        p.give_card(Card::new(Rank::Ace, Suit::Clubs)).unwrap();
        assert!(p.hole_pair().is_none());
        p.give_card(Card::new(Rank::Ace, Suit::Hearts)).unwrap();
        assert!(p.hole_pair().is_some());
        assert!(p.give_card(Card::new(Rank::Two, Suit::Hearts)).is_err());
    }
}
