use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// A 52-card deck with deterministic, seeded shuffling.
///
/// The ChaCha20 stream lives as long as the deck, so consecutive shuffles
/// under one seed produce distinct but reproducible orderings. Dealing
/// consumes from the top of the most recent shuffle and never recycles a
/// card within a shuffle cycle.
#[derive(Debug)]
pub struct Deck {
    order: Vec<Card>,
    next: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Build an unshuffled deck over a seeded stream. Cards come out in
    /// canonical order until the first `shuffle`.
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            order: full_deck(),
            next: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Restore all 52 cards and permute them, advancing the seeded stream.
    pub fn shuffle(&mut self) {
        self.order = full_deck();
        self.order.shuffle(&mut self.rng);
        self.next = 0;
    }

    /// Take the top card, or `None` when the current cycle is exhausted.
    pub fn deal_card(&mut self) -> Option<Card> {
        let card = self.order.get(self.next).copied();
        if card.is_some() {
            self.next += 1;
        }
        card
    }

    /// Discard the top card unseen.
    pub fn burn_card(&mut self) {
        let _ = self.deal_card();
    }

    pub fn remaining(&self) -> usize {
        self.order.len() - self.next
    }
}
