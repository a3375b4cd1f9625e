use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cards::Card;
use crate::config::GameConfig;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::events::{EventLog, EventRecord, GameEvent};
use crate::player::{Player, PlayerAction, PlayerStatus, HOLE_CARDS};
use crate::pot::{PotAward, PotLedger};
use crate::rules::{blind_seats, BettingRound, Blinds};

/// Largest table the engine seats. Ten players use 20 hole cards plus a
/// 5-card board, well inside one deck.
pub const MAX_SEATS: usize = 10;
pub const MIN_PLAYERS: usize = 2;
pub const BOARD_SIZE: usize = 5;

/// Phases of a hand, in the only order they can be visited.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Phase {
    Init,
    WaitingForPlayers,
    StartGame,
    PreFlop,
    Flop,
    Turn,
    River,
    DetermineWinner,
}

impl Phase {
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Init => Some(Phase::WaitingForPlayers),
            Phase::WaitingForPlayers => Some(Phase::StartGame),
            Phase::StartGame => Some(Phase::PreFlop),
            Phase::PreFlop => Some(Phase::Flop),
            Phase::Flop => Some(Phase::Turn),
            Phase::Turn => Some(Phase::River),
            Phase::River => Some(Phase::DetermineWinner),
            Phase::DetermineWinner => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Init => "init",
            Phase::WaitingForPlayers => "waiting-for-players",
            Phase::StartGame => "start-game",
            Phase::PreFlop => "pre-flop",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
            Phase::DetermineWinner => "determine-winner",
        };
        f.write_str(s)
    }
}

/// One hand of hold'em from seating to showdown.
///
/// The game owns every piece of table state and is the only thing that moves
/// between phases. Each transition method checks the current phase first and
/// returns [`GameError::InvalidTransition`] without touching anything when it
/// is called out of order.
///
/// # Examples
///
/// ```
/// use holdem_engine::config::GameConfig;
/// use holdem_engine::game::{Game, Phase};
///
/// let mut game = Game::new(GameConfig { seed: Some(7), ..GameConfig::default() }).unwrap();
/// for name in ["alice", "bob"] {
///     let seat = game.add_player(name).unwrap();
///     game.set_ready(seat, true).unwrap();
/// }
/// game.initialise().unwrap();
/// game.start_game().unwrap();
/// assert_eq!(game.phase(), Phase::StartGame);
/// assert_eq!(game.highest_bet(), 50);
/// assert!(game.turn().is_err());
/// ```
#[derive(Debug)]
pub struct Game {
    phase: Phase,
    players: Vec<Player>,
    dealer: usize,
    deck: Deck,
    board: Vec<Card>,
    pots: PotLedger,
    round: BettingRound,
    config: GameConfig,
    events: EventLog,
    awards: Vec<PotAward>,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let deck = match config.seed {
            Some(seed) => Deck::new_with_seed(seed),
            None => Deck::new_with_seed(rand::random()),
        };
        Ok(Self {
            phase: Phase::Init,
            players: Vec::with_capacity(config.max_seats),
            dealer: 0,
            deck,
            board: Vec::with_capacity(BOARD_SIZE),
            pots: PotLedger::default(),
            round: BettingRound::new(),
            config,
            events: EventLog::new(),
            awards: Vec::new(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }
    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }
    pub fn seat_of(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name() == name)
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn pots(&self) -> &PotLedger {
        &self.pots
    }
    pub fn round(&self) -> &BettingRound {
        &self.round
    }
    pub fn highest_bet(&self) -> u32 {
        self.round.highest_bet()
    }
    pub fn awards(&self) -> &[PotAward] {
        &self.awards
    }
    pub fn events(&self) -> &EventLog {
        &self.events
    }
    pub fn drain_events(&mut self) -> Vec<EventRecord> {
        self.events.drain()
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// True once at most one player is still in the hand.
    pub fn is_decided(&self) -> bool {
        self.players.iter().filter(|p| !p.is_folded()).count() <= 1
    }

    /// Every chip at the table: stacks, outstanding bets and pots.
    pub fn chips_in_play(&self) -> u32 {
        let held: u32 = self.players.iter().map(|p| p.stack() + p.bet()).sum();
        held + self.pots.total()
    }

    pub fn add_player(&mut self, name: &str) -> Result<usize, GameError> {
        if !matches!(self.phase, Phase::Init | Phase::WaitingForPlayers) {
            return Err(GameError::SeatingClosed(self.phase));
        }
        if self.seat_of(name).is_some() {
            return Err(GameError::DuplicatePlayer(name.to_string()));
        }
        if self.players.len() >= self.config.max_seats {
            return Err(GameError::TableFull {
                max: self.config.max_seats,
            });
        }
        let seat = self.players.len();
        self.players.push(Player::new(name, self.config.starting_stack));
        self.events.push(GameEvent::PlayerJoined {
            seat,
            name: name.to_string(),
        });
        Ok(seat)
    }

    pub fn set_ready(&mut self, seat: usize, ready: bool) -> Result<(), GameError> {
        let player = self
            .players
            .get_mut(seat)
            .ok_or(GameError::SeatNotFound(seat))?;
        player.set_ready(ready);
        self.events.push(GameEvent::PlayerReady { seat, ready });
        Ok(())
    }

    /// `Init -> WaitingForPlayers`
    pub fn initialise(&mut self) -> Result<(), GameError> {
        self.expect(Phase::Init, Phase::WaitingForPlayers)?;
        self.enter(Phase::WaitingForPlayers);
        Ok(())
    }

    /// `WaitingForPlayers -> StartGame`
    ///
    /// Needs at least two seated players, all ready. Shuffles, deals two hole
    /// cards to each seat in two passes, posts the blinds and opens the main
    /// pot.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        self.expect(Phase::WaitingForPlayers, Phase::StartGame)?;
        if self.players.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers {
                seated: self.players.len(),
                minimum: MIN_PLAYERS,
            });
        }
        let not_ready: Vec<String> = self
            .players
            .iter()
            .filter(|p| !p.is_ready())
            .map(|p| p.name().to_string())
            .collect();
        if !not_ready.is_empty() {
            return Err(GameError::PlayersNotReady(not_ready));
        }

        self.deck.shuffle();
        self.ensure_cards(HOLE_CARDS * self.players.len())?;

        self.dealer = 0;
        for (seat, p) in self.players.iter_mut().enumerate() {
            p.set_dealer(seat == self.dealer);
        }
        for _ in 0..HOLE_CARDS {
            for seat in 0..self.players.len() {
                let card = self.draw()?;
                self.players[seat].give_card(card)?;
            }
        }
        for (seat, p) in self.players.iter().enumerate() {
            self.events.push(GameEvent::HoleCardsDealt {
                seat,
                cards: p.hole_cards().to_vec(),
            });
        }

        self.round.reset();
        let blinds = Blinds::from_big(self.config.big_blind);
        let (small_seat, big_seat) = blind_seats(self.players.len(), self.dealer);
        self.post_blind(small_seat, blinds.small, false);
        self.post_blind(big_seat, blinds.big, true);

        self.pots = PotLedger::new(self.players.len());
        self.enter(Phase::StartGame);
        Ok(())
    }

    /// `StartGame -> PreFlop`: three community cards, then settle.
    pub fn pre_flop(&mut self) -> Result<(), GameError> {
        self.expect(Phase::StartGame, Phase::PreFlop)?;
        self.deal_community(3)?;
        self.settle();
        self.enter(Phase::PreFlop);
        Ok(())
    }

    /// `PreFlop -> Flop`: one community card, then settle.
    pub fn flop(&mut self) -> Result<(), GameError> {
        self.expect(Phase::PreFlop, Phase::Flop)?;
        self.deal_community(1)?;
        self.settle();
        self.enter(Phase::Flop);
        Ok(())
    }

    /// `Flop -> Turn`: one community card, then settle.
    pub fn turn(&mut self) -> Result<(), GameError> {
        self.expect(Phase::Flop, Phase::Turn)?;
        self.deal_community(1)?;
        self.settle();
        self.enter(Phase::Turn);
        Ok(())
    }

    /// `Turn -> River`: the board is already complete, so this only settles.
    pub fn river(&mut self) -> Result<(), GameError> {
        self.expect(Phase::Turn, Phase::River)?;
        self.settle();
        self.enter(Phase::River);
        Ok(())
    }

    /// `River -> DetermineWinner`: settles the last round of bets and pays
    /// out every pot.
    pub fn determine_winner(&mut self) -> Result<(), GameError> {
        self.expect(Phase::River, Phase::DetermineWinner)?;
        self.settle();
        match <[Card; BOARD_SIZE]>::try_from(self.board.as_slice()) {
            Ok(board) => {
                self.awards = self
                    .pots
                    .distribute(&mut self.players, &board, self.dealer);
            }
            Err(_) => warn!(cards = self.board.len(), "incomplete board at showdown"),
        }
        for award in &self.awards {
            info!(pot = award.pot, amount = award.amount, hand = %award.hand, "pot awarded");
            self.events.push(GameEvent::PotAwarded {
                award: award.clone(),
            });
        }
        self.events.push(GameEvent::FinalBalances {
            stacks: self
                .players
                .iter()
                .map(|p| (p.name().to_string(), p.stack()))
                .collect(),
        });
        self.enter(Phase::DetermineWinner);
        Ok(())
    }

    /// Runs whichever transition follows the current phase.
    pub fn advance(&mut self) -> Result<Phase, GameError> {
        match self.phase {
            Phase::Init => self.initialise()?,
            Phase::WaitingForPlayers => self.start_game()?,
            Phase::StartGame => self.pre_flop()?,
            Phase::PreFlop => self.flop()?,
            Phase::Flop => self.turn()?,
            Phase::Turn => self.river()?,
            Phase::River => self.determine_winner()?,
            Phase::DetermineWinner => {
                return Err(GameError::InvalidTransition {
                    from: Phase::DetermineWinner,
                    to: Phase::DetermineWinner,
                })
            }
        }
        Ok(self.phase)
    }

    pub fn fold(&mut self, seat: usize) -> Result<(), GameError> {
        self.act(seat, PlayerAction::Fold, |p, _| {
            p.fold();
            Ok(())
        })
    }

    pub fn check(&mut self, seat: usize) -> Result<(), GameError> {
        self.act(seat, PlayerAction::Check, |p, round| p.check(round))
    }

    pub fn call(&mut self, seat: usize) -> Result<u32, GameError> {
        self.act(seat, PlayerAction::Call, |p, round| Ok(p.call(round)))
    }

    pub fn raise(&mut self, seat: usize, amount: u32) -> Result<PlayerStatus, GameError> {
        self.act(seat, PlayerAction::Raise(amount), |p, round| {
            p.raise(amount, round)
        })
    }

    pub fn all_in(&mut self, seat: usize) -> Result<u32, GameError> {
        self.act(seat, PlayerAction::AllIn, |p, round| Ok(p.all_in(round)))
    }

    fn act<T>(
        &mut self,
        seat: usize,
        action: PlayerAction,
        f: impl FnOnce(&mut Player, &mut BettingRound) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        let player = self
            .players
            .get_mut(seat)
            .ok_or(GameError::SeatNotFound(seat))?;
        if player.is_folded() && action != PlayerAction::Fold {
            return Err(GameError::PlayerFolded(seat));
        }
        let out = f(player, &mut self.round)?;
        self.events.push(GameEvent::ActionTaken {
            seat,
            action,
            bet: player.bet(),
            stack: player.stack(),
        });
        Ok(out)
    }

    fn expect(&self, from: Phase, to: Phase) -> Result<(), GameError> {
        if self.phase != from {
            warn!(current = %self.phase, requested = %to, "rejected phase transition");
            return Err(GameError::InvalidTransition {
                from: self.phase,
                to,
            });
        }
        Ok(())
    }

    fn enter(&mut self, to: Phase) {
        info!(from = %self.phase, to = %to, "phase change");
        self.events.push(GameEvent::PhaseChanged {
            from: self.phase,
            to,
        });
        self.phase = to;
    }

    fn ensure_cards(&self, needed: usize) -> Result<(), GameError> {
        let remaining = self.deck.remaining();
        if remaining < needed {
            return Err(GameError::DeckExhausted { needed, remaining });
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<Card, GameError> {
        self.deck.pop().ok_or(GameError::DeckExhausted {
            needed: 1,
            remaining: 0,
        })
    }

    fn deal_community(&mut self, count: usize) -> Result<(), GameError> {
        self.ensure_cards(count)?;
        let mut dealt = Vec::with_capacity(count);
        for _ in 0..count {
            let card = self.draw()?;
            self.board.push(card);
            dealt.push(card);
        }
        self.events.push(GameEvent::CommunityDealt { cards: dealt });
        Ok(())
    }

    fn post_blind(&mut self, seat: usize, amount: u32, big: bool) {
        let paid = self.players[seat].post_blind(amount, &mut self.round);
        self.events.push(GameEvent::BlindPosted {
            seat,
            amount: paid,
            big,
        });
    }

    fn settle(&mut self) {
        let staked = self.chips_in_play()
            - self.players.iter().map(Player::stack).sum::<u32>();
        let survivor = self.pots.settle(&mut self.players);
        self.round.reset();
        self.events.push(GameEvent::PotsSettled {
            pots: self.pots.pots().to_vec(),
        });
        if let Some(seat) = survivor {
            if staked > 0 {
                info!(seat, amount = staked, "uncontested win");
                self.events.push(GameEvent::UncontestedWin {
                    seat,
                    amount: staked,
                });
            }
        }
    }
}
