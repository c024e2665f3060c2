use arena_engine::cards::Card;
use arena_engine::errors::EngineError;
use arena_engine::hand::{best_hand, evaluate_five, Category};

fn cards<const N: usize>(notation: [&str; N]) -> [Card; N] {
    notation.map(|s| s.parse().expect("valid card notation"))
}

fn board(notation: &[&str]) -> Vec<Card> {
    notation.iter().map(|s| s.parse().unwrap()).collect()
}

#[test]
fn classifies_every_category() {
    let expectations = [
        (["9h", "8h", "7h", "6h", "5h"], Category::StraightFlush),
        (["Ah", "Ad", "Ac", "As", "2d"], Category::FourOfAKind),
        (["Kh", "Kd", "Kc", "3s", "3d"], Category::FullHouse),
        (["Ah", "Jh", "8h", "5h", "2h"], Category::Flush),
        (["9h", "8d", "7c", "6s", "5h"], Category::Straight),
        (["Qh", "Qd", "Qc", "8s", "2d"], Category::ThreeOfAKind),
        (["Jh", "Jd", "4c", "4s", "9d"], Category::TwoPair),
        (["Th", "Td", "8c", "5s", "2d"], Category::OnePair),
        (["Ah", "Jd", "8c", "5s", "2d"], Category::HighCard),
    ];
    for (notation, expected) in expectations {
        let hand = evaluate_five(&cards(notation));
        assert_eq!(hand.category, expected, "misclassified {:?}", notation);
    }
}

#[test]
fn wheel_is_a_five_high_straight() {
    let hand = evaluate_five(&cards(["Ah", "2d", "3c", "4s", "5h"]));
    assert_eq!(hand.category, Category::Straight);
    assert_eq!(hand.tiebreaks[0], 5, "wheel must rank below a six-high");

    let six_high = evaluate_five(&cards(["2d", "3c", "4s", "5h", "6d"]));
    assert!(six_high > hand);
}

#[test]
fn steel_wheel_is_a_straight_flush() {
    let hand = evaluate_five(&cards(["Ah", "2h", "3h", "4h", "5h"]));
    assert_eq!(hand.category, Category::StraightFlush);
    assert_eq!(hand.tiebreaks[0], 5);
}

#[test]
fn kickers_break_ties_within_a_category() {
    let ace_king = evaluate_five(&cards(["Ah", "Ad", "Kc", "8s", "2d"]));
    let ace_queen = evaluate_five(&cards(["As", "Ac", "Qc", "8h", "2c"]));
    assert!(ace_king > ace_queen, "pair of aces, king kicker must win");

    let identical = evaluate_five(&cards(["Ah", "Ad", "Kc", "8s", "2d"]));
    assert_eq!(ace_king, identical, "suits must not matter");
}

#[test]
fn best_hand_finds_the_strongest_five_of_seven() {
    // Hole pair turns into a full house against a paired board.
    let hole = cards(["Kh", "Kd"]);
    let b = board(&["Kc", "7s", "7d", "2h", "3c"]);
    let hand = best_hand(&hole, &b).expect("7 cards evaluate");
    assert_eq!(hand.category, Category::FullHouse);
    assert_eq!(hand.tiebreaks[0], 13);
    assert_eq!(hand.tiebreaks[1], 7);
}

#[test]
fn best_hand_can_play_the_board() {
    let hole = cards(["2h", "3d"]);
    let b = board(&["Ts", "Js", "Qs", "Ks", "As"]);
    let hand = best_hand(&hole, &b).expect("7 cards evaluate");
    assert_eq!(hand.category, Category::StraightFlush);
    assert_eq!(hand.tiebreaks[0], 14);
}

#[test]
fn best_hand_works_on_the_flop() {
    let hole = cards(["Ah", "Kh"]);
    let b = board(&["Qh", "Jh", "Th"]);
    let hand = best_hand(&hole, &b).expect("exactly 5 cards evaluate");
    assert_eq!(hand.category, Category::StraightFlush);
}

#[test]
fn bad_card_counts_are_rejected() {
    let hole = cards(["Ah", "Kh"]);
    assert_eq!(
        best_hand(&hole, &board(&["2c", "3c"])),
        Err(EngineError::BadCardCount(4))
    );
    assert_eq!(
        best_hand(&hole, &board(&["2c", "3c", "4c", "5c", "6c", "7c"])),
        Err(EngineError::BadCardCount(8))
    );
}
