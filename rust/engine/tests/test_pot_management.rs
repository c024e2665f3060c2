use arena_engine::pot::PotManager;

#[test]
fn equal_bets_form_a_single_pot() {
    let mut pm = PotManager::new();
    for id in 0..3 {
        pm.add_bet(id, 100, false).unwrap();
    }
    assert_eq!(pm.pots().len(), 1);
    assert_eq!(pm.total(), 300);
}

#[test]
fn short_all_in_splits_a_side_pot() {
    // A and B bet 100, C is all-in for 50.
    let mut pm = PotManager::new();
    pm.add_bet(0, 100, false).unwrap();
    pm.add_bet(1, 100, false).unwrap();
    pm.add_bet(2, 50, true).unwrap();

    assert_eq!(pm.pots().len(), 2);
    let main = &pm.pots()[0];
    let side = &pm.pots()[1];
    assert_eq!(main.size(), 150, "main pot holds 50 from each");
    assert!(main.is_capped());
    assert_eq!(side.size(), 100, "excess 50 from A and B");
    assert_eq!(side.contribution(2), 0, "all-in player out of the side pot");
}

#[test]
fn bets_after_a_cap_flow_into_the_side_pot() {
    let mut pm = PotManager::new();
    pm.add_bet(0, 50, true).unwrap();
    pm.add_bet(1, 200, false).unwrap();
    pm.add_bet(2, 200, false).unwrap();

    assert_eq!(pm.pots().len(), 2);
    assert_eq!(pm.pots()[0].size(), 150);
    assert_eq!(pm.pots()[1].size(), 300);
    assert_eq!(pm.total(), 450);
}

#[test]
fn two_all_ins_stack_three_pots() {
    let mut pm = PotManager::new();
    pm.add_bet(0, 300, false).unwrap();
    pm.add_bet(1, 100, true).unwrap();
    pm.add_bet(2, 200, true).unwrap();

    assert_eq!(pm.pots().len(), 3);
    assert_eq!(pm.pots()[0].size(), 300, "100 from each");
    assert_eq!(pm.pots()[1].size(), 200, "100 more from players 0 and 2");
    assert_eq!(pm.pots()[2].size(), 100, "player 0 alone on top");
    assert_eq!(pm.pots()[2].contributor_count(), 1);
}

#[test]
fn all_in_winner_takes_only_the_pots_they_funded() {
    let mut pm = PotManager::new();
    pm.add_bet(0, 100, false).unwrap();
    pm.add_bet(1, 100, false).unwrap();
    pm.add_bet(2, 50, true).unwrap();

    // Player 2 has the best hand but only funded the main pot.
    let rankings = vec![vec![2], vec![0], vec![1]];
    let payout = vec![1, 2, 0];
    let winnings = pm.distribute(&rankings, &payout).unwrap();
    assert_eq!(winnings, vec![(0, 100), (2, 150)]);
}

#[test]
fn split_pot_remainder_follows_payout_order() {
    let mut pm = PotManager::new();
    pm.add_bet(0, 35, false).unwrap();
    pm.add_bet(1, 35, false).unwrap();
    pm.add_bet(2, 35, false).unwrap();

    // 0 and 2 tie for the 105-chip pot: 52 each, odd chip to the first
    // winner after the dealer.
    let rankings = vec![vec![0, 2], vec![1]];
    let payout = vec![1, 2, 0];
    let winnings = pm.distribute(&rankings, &payout).unwrap();
    assert_eq!(winnings, vec![(0, 52), (2, 53)]);
}

#[test]
fn distribution_conserves_every_chip() {
    let mut pm = PotManager::new();
    pm.add_bet(0, 173, false).unwrap();
    pm.add_bet(1, 89, true).unwrap();
    pm.add_bet(2, 173, false).unwrap();
    pm.add_bet(3, 21, true).unwrap();
    let total = pm.total();

    let rankings = vec![vec![1, 3], vec![0], vec![2]];
    let payout = vec![1, 2, 3, 0];
    let winnings = pm.distribute(&rankings, &payout).unwrap();
    let paid: u32 = winnings.iter().map(|&(_, w)| w).sum();
    assert_eq!(paid, total, "settlement must conserve chips");
}

#[test]
fn folded_contributor_money_stays_in_the_pot() {
    let mut pm = PotManager::new();
    pm.add_bet(0, 60, false).unwrap();
    pm.add_bet(1, 60, false).unwrap();
    pm.add_bet(2, 20, false).unwrap(); // folds later

    // Player 2 never appears in the rankings' leading groups; their 20
    // still pays out to the pot winner.
    let rankings = vec![vec![0], vec![1], vec![2]];
    let payout = vec![1, 2, 0];
    let winnings = pm.distribute(&rankings, &payout).unwrap();
    assert_eq!(winnings, vec![(0, 140)]);
}
