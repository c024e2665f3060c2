use arena_engine::cards::Card;
use arena_engine::hand::best_hand;
use arena_engine::ranker::rank_hands;

fn card(s: &str) -> Card {
    s.parse().unwrap()
}

fn board(notation: &[&str]) -> Vec<Card> {
    notation.iter().map(|s| s.parse().unwrap()).collect()
}

#[test]
fn strongest_hand_ranks_first() {
    let b = board(&["Kc", "7s", "7d", "2h", "3c"]);
    let entries = vec![
        (0, best_hand(&[card("Ah"), card("Qd")], &b).unwrap()), // board pair
        (1, best_hand(&[card("Kh"), card("Kd")], &b).unwrap()), // full house
        (2, best_hand(&[card("7h"), card("4d")], &b).unwrap()), // trips
    ];
    let groups = rank_hands(&entries);
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].players, vec![1]);
    assert_eq!(groups[1].players, vec![2]);
    assert_eq!(groups[2].players, vec![0]);
}

#[test]
fn identical_strength_shares_a_group() {
    // Both players play the board straight; hole kickers never play.
    let b = board(&["6c", "7s", "8d", "9h", "Tc"]);
    let entries = vec![
        (0, best_hand(&[card("2h"), card("3d")], &b).unwrap()),
        (1, best_hand(&[card("2s"), card("3c")], &b).unwrap()),
    ];
    let groups = rank_hands(&entries);
    assert_eq!(groups.len(), 1, "board plays for both, must tie");
    assert_eq!(groups[0].players, vec![0, 1]);
}

#[test]
fn suits_never_break_ties() {
    let b = board(&["Ac", "Ks", "Qd", "7h", "2c"]);
    let entries = vec![
        (0, best_hand(&[card("Ah"), card("5d")], &b).unwrap()),
        (1, best_hand(&[card("Ad"), card("5c")], &b).unwrap()),
    ];
    let groups = rank_hands(&entries);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].players, vec![0, 1]);
}

#[test]
fn kicker_differences_split_groups() {
    let b = board(&["Ac", "8s", "6d", "4h", "2c"]);
    let entries = vec![
        (0, best_hand(&[card("Ah"), card("Kd")], &b).unwrap()),
        (1, best_hand(&[card("Ad"), card("Qc")], &b).unwrap()),
    ];
    let groups = rank_hands(&entries);
    assert_eq!(groups.len(), 2, "king kicker beats queen kicker");
    assert_eq!(groups[0].players, vec![0]);
}
