use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Bounded last-in-first-out card container.
///
/// Both [`Deck`] and [`crate::player::Player`] hold one of these by value; the
/// top of the stack is the end of the backing vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStack {
    cards: Vec<Card>,
    capacity: usize,
}

impl CardStack {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cards: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, card: Card) -> Result<(), GameError> {
        if self.cards.len() >= self.capacity {
            return Err(GameError::StackFull {
                capacity: self.capacity,
            });
        }
        self.cards.push(card);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    fn shuffle(&mut self, rng: &mut ChaCha20Rng) {
        self.cards.shuffle(rng);
    }
}

/// A 52-card deck dealt from the top.
///
/// The shuffle is driven by a ChaCha20 RNG so a seed reproduces the exact
/// deal order.
///
/// # Examples
///
/// ```
/// use holdem_engine::deck::Deck;
///
/// let mut a = Deck::new_shuffled_with_seed(42);
/// let mut b = Deck::new_shuffled_with_seed(42);
/// assert_eq!(a.pop(), b.pop());
/// assert_eq!(a.remaining(), 51);
/// ```
#[derive(Debug)]
pub struct Deck {
    stack: CardStack,
    rng: ChaCha20Rng,
    seed: u64,
}

pub const DECK_SIZE: usize = 52;

impl Deck {
    /// Full deck in suit-major order; call [`Deck::shuffle`] before dealing.
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            stack: fresh_stack(),
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn new_shuffled_with_seed(seed: u64) -> Self {
        let mut deck = Self::new_with_seed(seed);
        deck.shuffle();
        deck
    }

    pub fn new_shuffled() -> Self {
        Self::new_shuffled_with_seed(rand::random())
    }

    /// Restores all 52 cards and shuffles them.
    pub fn shuffle(&mut self) {
        self.stack = fresh_stack();
        self.stack.shuffle(&mut self.rng);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.stack.pop()
    }

    pub fn push(&mut self, card: Card) -> Result<(), GameError> {
        self.stack.push(card)
    }

    pub fn remaining(&self) -> usize {
        self.stack.len()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

fn fresh_stack() -> CardStack {
    let mut stack = CardStack::with_capacity(DECK_SIZE);
    for card in full_deck() {
        // capacity matches the card count, push cannot fail
        let _ = stack.push(card);
    }
    stack
}
