use std::cmp::Ordering;
use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Hand categories, weakest first. The derived ordering is the precedence
/// used by [`compare_hands`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        };
        f.write_str(name)
    }
}

/// A classified five-card hand.
///
/// `values` carry the ranks that define the category (the pair, the trips
/// and pair of a full house, the top of a straight) and `kickers` the
/// remaining tie-breakers, both high to low.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hand {
    pub category: Category,
    pub values: Vec<u8>,
    pub kickers: Vec<u8>,
}

impl Default for Hand {
    fn default() -> Self {
        Self {
            category: Category::HighCard,
            values: Vec::new(),
            kickers: Vec::new(),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} with {:?}, kickers {:?}",
            self.category, self.values, self.kickers
        )
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        compare_hands(self, other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_hands(self, other)
    }
}

/// Orders two hands by category, then `values`, then `kickers`.
///
/// The value and kicker sequences are compared element-wise over their
/// common prefix only.
pub fn compare_hands(a: &Hand, b: &Hand) -> Ordering {
    a.category
        .cmp(&b.category)
        .then_with(|| prefix_cmp(&a.values, &b.values))
        .then_with(|| prefix_cmp(&a.kickers, &b.kickers))
}

fn prefix_cmp(a: &[u8], b: &[u8]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.cmp(y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Classifies exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> Hand {
    let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_top = straight_top(&ranks);

    // (count, rank) sorted by count desc then rank desc
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for &r in &ranks {
        match groups.iter_mut().find(|(_, rank)| *rank == r) {
            Some((count, _)) => *count += 1,
            None => groups.push((1, r)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));
    let counts: Vec<u8> = groups.iter().map(|g| g.0).collect();
    let grouped: Vec<u8> = groups.iter().map(|g| g.1).collect();

    let (category, values, kickers) = match (straight_top, flush, counts.as_slice()) {
        (Some(top), true, _) => (Category::StraightFlush, vec![top], vec![]),
        (_, _, [4, 1]) => (Category::FourOfAKind, vec![grouped[0]], vec![grouped[1]]),
        (_, _, [3, 2]) => (Category::FullHouse, vec![grouped[0], grouped[1]], vec![]),
        (_, true, _) => (Category::Flush, ranks, vec![]),
        (Some(top), false, _) => (Category::Straight, vec![top], vec![]),
        (_, _, [3, ..]) => (
            Category::ThreeOfAKind,
            vec![grouped[0]],
            grouped[1..].to_vec(),
        ),
        (_, _, [2, 2, ..]) => (
            Category::TwoPair,
            vec![grouped[0], grouped[1]],
            grouped[2..].to_vec(),
        ),
        (_, _, [2, ..]) => (Category::OnePair, vec![grouped[0]], grouped[1..].to_vec()),
        _ => (Category::HighCard, vec![ranks[0]], ranks[1..].to_vec()),
    };

    Hand {
        category,
        values,
        kickers,
    }
}

/// Top value of a straight in descending ranks; the wheel tops out at 5.
fn straight_top(desc: &[u8]) -> Option<u8> {
    if desc.windows(2).all(|w| w[0] == w[1] + 1) {
        return desc.first().copied();
    }
    if desc == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

/// The 21 five-card subsets of seven cards, ordered by the excluded pair.
fn subsets(cards: &[Card; 7]) -> Vec<[Card; 5]> {
    let mut out = Vec::with_capacity(21);
    for skip_a in 0..7 {
        for skip_b in skip_a + 1..7 {
            let mut hand = [cards[0]; 5];
            let mut k = 0;
            for (i, &c) in cards.iter().enumerate() {
                if i != skip_a && i != skip_b {
                    hand[k] = c;
                    k += 1;
                }
            }
            out.push(hand);
        }
    }
    out
}

fn keep_first_max(best: Hand, next: Hand) -> Hand {
    if next > best {
        next
    } else {
        best
    }
}

/// Best five-card hand out of seven cards.
///
/// The subsets are classified in parallel; the reduction keeps the earliest
/// maximum so the result never depends on scheduling.
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::hand::{best_hand, Category};
///
/// let cards: [_; 7] = parse_cards("9h Th Jh Qh Kh As 2c").unwrap().try_into().unwrap();
/// let hand = best_hand(&cards);
/// assert_eq!(hand.category, Category::StraightFlush);
/// assert_eq!(hand.values, vec![13]);
/// ```
pub fn best_hand(cards: &[Card; 7]) -> Hand {
    subsets(cards)
        .into_par_iter()
        .map(|five| evaluate_five(&five))
        .reduce_with(keep_first_max)
        .unwrap_or_default()
}

/// Single-threaded counterpart of [`best_hand`].
pub fn best_hand_sequential(cards: &[Card; 7]) -> Hand {
    subsets(cards)
        .iter()
        .map(evaluate_five)
        .reduce(keep_first_max)
        .unwrap_or_default()
}

pub fn compare_seven(a: &[Card; 7], b: &[Card; 7]) -> Ordering {
    compare_hands(&best_hand(a), &best_hand(b))
}

/// Indices of every holding that ties for the best hand.
pub fn winners(holdings: &[[Card; 7]]) -> Vec<usize> {
    let hands: Vec<Hand> = holdings.iter().map(best_hand).collect();
    let Some(top) = hands.iter().max() else {
        return Vec::new();
    };
    hands
        .iter()
        .enumerate()
        .filter(|(_, h)| *h == top)
        .map(|(i, _)| i)
        .collect()
}
