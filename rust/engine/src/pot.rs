use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::hand::{best_hand, Hand};
use crate::player::{Player, PlayerStatus};

/// Chips wagered into one pot and the seats that can win them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    pub amount: u32,
    pub eligible: BTreeSet<usize>,
}

impl Pot {
    fn covering(seats: impl IntoIterator<Item = usize>) -> Self {
        Self {
            amount: 0,
            eligible: seats.into_iter().collect(),
        }
    }
}

/// How one pot was paid out at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotAward {
    /// Index into the ledger, 0 being the main pot
    pub pot: usize,
    pub amount: u32,
    /// `(seat, chips)` ordered from the dealer's left
    pub shares: Vec<(usize, u32)>,
    pub hand: Hand,
}

/// The main pot followed by side pots, oldest first.
///
/// Every side pot is eligible to a subset of the seats of the pot before it,
/// so the last pot always has the fewest contenders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotLedger {
    pots: Vec<Pot>,
}

impl PotLedger {
    /// A ledger holding an empty main pot open to seats `0..seats`.
    pub fn new(seats: usize) -> Self {
        Self {
            pots: vec![Pot::covering(0..seats)],
        }
    }

    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    pub fn main_pot(&self) -> u32 {
        self.pots.first().map_or(0, |p| p.amount)
    }

    pub fn side_pots(&self) -> &[Pot] {
        self.pots.get(1..).unwrap_or(&[])
    }

    pub fn total(&self) -> u32 {
        self.pots.iter().map(|p| p.amount).sum()
    }

    /// Sweeps every outstanding bet into the pots and zeroes it.
    ///
    /// All-in players are handled first, biggest bet first. When an all-in
    /// bet is below the table maximum, everything above it moves into a new
    /// side pot that only the players who put it in can win. Whatever is
    /// left of each bet goes into the newest already-existing pot the player
    /// is eligible for. If only one player has not folded afterwards, that
    /// player collects every pot and their seat is returned.
    pub fn settle(&mut self, players: &mut [Player]) -> Option<usize> {
        if self.pots.is_empty() {
            self.pots.push(Pot::covering(0..players.len()));
        }
        let existing = self.pots.len();

        let mut all_ins: Vec<usize> = (0..players.len())
            .filter(|&s| players[s].status() == PlayerStatus::AllIn && players[s].bet() > 0)
            .collect();
        all_ins.sort_by(|&a, &b| players[b].bet().cmp(&players[a].bet()).then(a.cmp(&b)));

        let mut layers = Vec::new();
        for seat in all_ins {
            let cap = players[seat].bet();
            let max = players.iter().map(Player::bet).max().unwrap_or(0);
            if cap >= max {
                continue;
            }
            let mut side = Pot::default();
            for (other, p) in players.iter_mut().enumerate() {
                if other != seat && p.bet() > cap {
                    side.amount += p.take_bet(p.bet() - cap);
                    side.eligible.insert(other);
                }
            }
            debug!(seat, cap, amount = side.amount, "side pot opened");
            layers.push(side);
        }
        // deepest layer was cut first; the newest pot must be the narrowest
        layers.reverse();

        for (seat, p) in players.iter_mut().enumerate() {
            let bet = p.bet();
            if bet == 0 {
                continue;
            }
            let target = self.pots[..existing]
                .iter()
                .rposition(|pot| pot.eligible.contains(&seat))
                .unwrap_or(0);
            self.pots[target].amount += p.take_bet(bet);
        }
        self.pots.extend(layers);

        let mut live = players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_folded())
            .map(|(s, _)| s);
        match (live.next(), live.next()) {
            (Some(seat), None) => {
                let won: u32 = self
                    .pots
                    .iter_mut()
                    .map(|p| std::mem::take(&mut p.amount))
                    .sum();
                players[seat].award(won);
                debug!(seat, won, "uncontested pot");
                Some(seat)
            }
            _ => None,
        }
    }

    /// Pays every pot out at showdown and empties the ledger.
    ///
    /// Contenders for a pot are its eligible seats that have not folded and
    /// hold two hole cards. Tied hands split the pot; odd chips go one at a
    /// time to the winners closest to the dealer's left. A pot nobody can
    /// contest falls through to the next older pot.
    pub fn distribute(
        &mut self,
        players: &mut [Player],
        board: &[Card; 5],
        dealer: usize,
    ) -> Vec<PotAward> {
        let seats = players.len();
        let hands: Vec<Option<Hand>> = players
            .iter()
            .map(|p| {
                let hole = p.hole_pair().filter(|_| !p.is_folded())?;
                let seven = [
                    hole[0], hole[1], board[0], board[1], board[2], board[3], board[4],
                ];
                Some(best_hand(&seven))
            })
            .collect();

        let mut awards = Vec::new();
        let mut carry = 0u32;
        for (index, pot) in self.pots.iter_mut().enumerate().rev() {
            let amount = std::mem::take(&mut pot.amount) + carry;
            carry = 0;
            if amount == 0 {
                continue;
            }
            let contenders: Vec<(usize, &Hand)> = pot
                .eligible
                .iter()
                .filter_map(|&s| hands.get(s)?.as_ref().map(|h| (s, h)))
                .collect();
            let Some(best) = contenders.iter().map(|(_, h)| *h).max() else {
                carry = amount;
                continue;
            };
            let mut winners: Vec<usize> = contenders
                .iter()
                .filter(|(_, h)| *h == best)
                .map(|(s, _)| *s)
                .collect();
            winners.sort_by_key(|&s| (s + seats - dealer % seats - 1) % seats);

            let n = winners.len() as u32;
            let (share, odd) = (amount / n, amount % n);
            let shares: Vec<(usize, u32)> = winners
                .iter()
                .enumerate()
                .map(|(i, &s)| (s, share + u32::from((i as u32) < odd)))
                .collect();
            for &(s, chips) in &shares {
                players[s].award(chips);
            }
            awards.push(PotAward {
                pot: index,
                amount,
                shares,
                hand: best.clone(),
            });
        }
        if carry > 0 {
            // nobody left to contest even the main pot
            if let Some(main) = self.pots.first_mut() {
                main.amount = carry;
            }
        }
        awards.reverse();
        awards
    }
}
