use std::cmp::Ordering;

use holdem_engine::cards::{full_deck, Card};
use holdem_engine::hand::{best_hand, best_hand_sequential, compare_hands, evaluate_five};
use proptest::prelude::*;

fn hand_strategy(size: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(full_deck(), size).prop_shuffle()
}

fn seven_strategy() -> impl Strategy<Value = [Card; 7]> {
    hand_strategy(7).prop_map(|v| <[Card; 7]>::try_from(v).unwrap())
}

fn five_strategy() -> impl Strategy<Value = [Card; 5]> {
    hand_strategy(5).prop_map(|v| <[Card; 5]>::try_from(v).unwrap())
}

proptest! {
    #[test]
    fn parallel_matches_sequential(cards in seven_strategy()) {
        let par = best_hand(&cards);
        let seq = best_hand_sequential(&cards);
        prop_assert_eq!(par.category, seq.category);
        prop_assert_eq!(&par.values, &seq.values);
        prop_assert_eq!(&par.kickers, &seq.kickers);
    }

    #[test]
    fn evaluation_is_deterministic(cards in seven_strategy()) {
        let first = best_hand(&cards);
        for _ in 0..3 {
            let again = best_hand(&cards);
            prop_assert_eq!(&again.values, &first.values);
            prop_assert_eq!(&again.kickers, &first.kickers);
        }
    }

    #[test]
    fn card_order_does_not_matter(cards in seven_strategy()) {
        let mut reversed = cards;
        reversed.reverse();
        prop_assert_eq!(compare_hands(&best_hand(&cards), &best_hand(&reversed)), Ordering::Equal);
    }

    #[test]
    fn best_hand_beats_every_subset(cards in seven_strategy()) {
        let best = best_hand(&cards);
        for skip_a in 0..7 {
            for skip_b in skip_a + 1..7 {
                let five: Vec<Card> = cards
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != skip_a && *i != skip_b)
                    .map(|(_, c)| *c)
                    .collect();
                let five: [Card; 5] = five.try_into().unwrap();
                prop_assert_ne!(compare_hands(&evaluate_five(&five), &best), Ordering::Greater);
            }
        }
    }

    #[test]
    fn comparator_is_antisymmetric(a in five_strategy(), b in five_strategy()) {
        let (ha, hb) = (evaluate_five(&a), evaluate_five(&b));
        prop_assert_eq!(compare_hands(&ha, &hb), compare_hands(&hb, &ha).reverse());
        prop_assert_eq!(compare_hands(&ha, &ha), Ordering::Equal);
    }

    #[test]
    fn comparator_is_transitive(a in five_strategy(), b in five_strategy(), c in five_strategy()) {
        let mut hands = [evaluate_five(&a), evaluate_five(&b), evaluate_five(&c)];
        hands.sort_by(compare_hands);
        prop_assert_ne!(compare_hands(&hands[0], &hands[2]), Ordering::Greater);
    }

    #[test]
    fn category_decides_before_ranks(a in five_strategy(), b in five_strategy()) {
        let (ha, hb) = (evaluate_five(&a), evaluate_five(&b));
        if ha.category != hb.category {
            prop_assert_eq!(compare_hands(&ha, &hb), ha.category.cmp(&hb.category));
        }
    }
}
