use std::collections::HashSet;

use arena_engine::cards::Card;
use arena_engine::deck::Deck;

#[test]
fn shuffle_yields_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.shuffle();
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal_card().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert!(
        deck.deal_card().is_none(),
        "after 52 cards, deck should be empty"
    );
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn consecutive_shuffles_advance_the_stream() {
    let mut deck = Deck::new_with_seed(7);
    deck.shuffle();
    let first: Vec<Card> = (0..52).map(|_| deck.deal_card().unwrap()).collect();
    deck.shuffle();
    let second: Vec<Card> = (0..52).map(|_| deck.deal_card().unwrap()).collect();
    assert_ne!(first, second, "hands within a game must not repeat decks");
}

#[test]
fn burn_and_deal_follow_holdem_procedure() {
    let mut deck = Deck::new_with_seed(777);
    deck.shuffle();

    // hole cards for three players
    for _ in 0..6 {
        deck.deal_card().unwrap();
    }
    assert_eq!(deck.remaining(), 46);

    deck.burn_card();
    let flop = [
        deck.deal_card().unwrap(),
        deck.deal_card().unwrap(),
        deck.deal_card().unwrap(),
    ];
    deck.burn_card();
    let turn = deck.deal_card().unwrap();
    deck.burn_card();
    let river = deck.deal_card().unwrap();

    let mut seen: HashSet<Card> = flop.into_iter().collect();
    assert!(seen.insert(turn));
    assert!(seen.insert(river));
    // 6 hole + 3 burns + 5 board cards consumed
    assert_eq!(deck.remaining(), 52 - 14);
}
