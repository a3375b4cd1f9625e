//! # holdem-engine: Texas Hold'em Rules Engine
//!
//! Evaluates poker hands, keeps the pot and side-pot ledger and drives one
//! hand of hold'em through its phases for up to ten players.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and parsing
//! - [`deck`] - Bounded card stacks and the seeded 52-card deck
//! - [`hand`] - Best-of-seven hand evaluation and hand ordering
//! - [`player`] - Player accounts and betting actions
//! - [`rules`] - Betting round state and blind structure
//! - [`pot`] - Main pot, side pots, settlement and showdown payouts
//! - [`game`] - The phase state machine
//! - [`events`] - Timestamped event log for renderers
//! - [`config`] - Table configuration
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::hand::{best_hand, Category};
//!
//! let cards: [_; 7] = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap().try_into().unwrap();
//! let hand = best_hand(&cards);
//! assert_eq!(hand.category, Category::StraightFlush);
//! println!("{hand}");
//! ```
//!
//! ## Playing a Hand
//!
//! ```rust
//! use holdem_engine::config::GameConfig;
//! use holdem_engine::game::{Game, Phase};
//!
//! let mut game = Game::new(GameConfig { seed: Some(42), ..GameConfig::default() }).unwrap();
//! for name in ["alice", "bob", "carol"] {
//!     let seat = game.add_player(name).unwrap();
//!     game.set_ready(seat, true).unwrap();
//! }
//! game.initialise().unwrap();
//! game.start_game().unwrap();
//! game.call(0).unwrap();
//! game.call(1).unwrap();
//! game.check(2).unwrap();
//! while game.phase() != Phase::DetermineWinner {
//!     game.advance().unwrap();
//! }
//! assert_eq!(game.chips_in_play(), 3000);
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod errors;
pub mod events;
pub mod game;
pub mod hand;
pub mod player;
pub mod pot;
pub mod rules;
