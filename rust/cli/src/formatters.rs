//! Plain-text rendering of cards, hands and actions.
//!
//! Cards are written as rank and suit letters (`As`, `Td`) so anything the
//! CLI prints can be pasted back into `holdem eval`.

use holdem_engine::cards::{Card, Rank};
use holdem_engine::hand::Hand;
use holdem_engine::player::PlayerAction;

/// ```rust
/// use holdem_engine::cards::{Card, Rank, Suit};
/// # use holdem_cli::formatters::format_card;
/// assert_eq!(format_card(&Card::new(Rank::Ten, Suit::Diamonds)), "Td");
/// ```
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), card.suit.letter())
}

/// Cards in bracket notation, `[]` when empty.
pub fn format_board(cards: &[Card]) -> String {
    let cards: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", cards.join(" "))
}

pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Check => "check".to_string(),
        PlayerAction::Call => "call".to_string(),
        PlayerAction::Raise(amount) => format!("raise {}", amount),
        PlayerAction::AllIn => "all-in".to_string(),
    }
}

/// Category followed by the deciding ranks, then kickers if any.
///
/// ```rust
/// use holdem_engine::hand::{Category, Hand};
/// # use holdem_cli::formatters::format_hand;
///
/// let hand = Hand { category: Category::TwoPair, values: vec![13, 7], kickers: vec![14] };
/// assert_eq!(format_hand(&hand), "Two Pair (K 7, kickers A)");
/// ```
pub fn format_hand(hand: &Hand) -> String {
    let values = rank_list(&hand.values);
    if hand.kickers.is_empty() {
        format!("{} ({})", hand.category, values)
    } else {
        format!(
            "{} ({}, kickers {})",
            hand.category,
            values,
            rank_list(&hand.kickers)
        )
    }
}

fn rank_list(values: &[u8]) -> String {
    values
        .iter()
        .map(|&v| Rank::from_u8(v).map_or_else(|| v.to_string(), |r| r.symbol().to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}
