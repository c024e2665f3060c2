//! Five-card hand classification and best-hand search.
//!
//! `evaluate_five` classifies exactly five cards into a [`Category`] plus
//! ordered tie-break ranks; [`best_hand`] enumerates every 5-card subset of
//! 2 hole cards + 3..=5 board cards (21 subsets at most) and keeps the
//! maximum under the derived total order.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::errors::EngineError;

/// Hand categories, weakest to strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
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

/// The evaluated strength of a five-card hand. The derived ordering is the
/// hand total order: category first, then tie-break ranks lexicographically
/// (higher rank wins). Two hands are equal only when category and the full
/// tie-break sequence match.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Hand {
    pub category: Category,
    /// Tie-break ranks, high to low, zero-padded.
    pub tiebreaks: [u8; 5],
}

/// Classify exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> Hand {
    let mut rank_counts = [0u8; 15]; // 2..=14 used
    let mut suit_counts = [0u8; 4];
    for &c in cards.iter() {
        rank_counts[rank_val(c.rank) as usize] += 1;
        suit_counts[suit_index(c.suit)] += 1;
    }

    let is_flush = suit_counts.iter().any(|&n| n == 5);
    let straight_high = detect_straight_high(&rank_counts);

    if is_flush {
        if let Some(high) = straight_high {
            return Hand {
                category: Category::StraightFlush,
                tiebreaks: [high, 0, 0, 0, 0],
            };
        }
    }

    if let Some((quad, kicker)) = detect_quads(&rank_counts) {
        return Hand {
            category: Category::FourOfAKind,
            tiebreaks: [quad, kicker, 0, 0, 0],
        };
    }

    if let Some((trip, pair)) = detect_full_house(&rank_counts) {
        return Hand {
            category: Category::FullHouse,
            tiebreaks: [trip, pair, 0, 0, 0],
        };
    }

    if is_flush {
        return Hand {
            category: Category::Flush,
            tiebreaks: ranks_desc(&rank_counts),
        };
    }

    if let Some(high) = straight_high {
        return Hand {
            category: Category::Straight,
            tiebreaks: [high, 0, 0, 0, 0],
        };
    }

    let (trips, pairs, singles) = classify_multiples(&rank_counts);
    if let Some(&t) = trips.first() {
        let mut k = [t, 0, 0, 0, 0];
        for (i, &r) in singles.iter().take(2).enumerate() {
            k[i + 1] = r;
        }
        return Hand {
            category: Category::ThreeOfAKind,
            tiebreaks: k,
        };
    }
    if pairs.len() >= 2 {
        let mut k = [pairs[0], pairs[1], 0, 0, 0];
        k[2] = singles.first().copied().unwrap_or(0);
        return Hand {
            category: Category::TwoPair,
            tiebreaks: k,
        };
    }
    if let Some(&p) = pairs.first() {
        let mut k = [p, 0, 0, 0, 0];
        for (i, &r) in singles.iter().take(3).enumerate() {
            k[i + 1] = r;
        }
        return Hand {
            category: Category::OnePair,
            tiebreaks: k,
        };
    }

    Hand {
        category: Category::HighCard,
        tiebreaks: ranks_desc(&rank_counts),
    }
}

/// Find the best five-card hand from two hole cards and 3..=5 board cards.
/// Card counts outside that range are a caller contract violation, never
/// silently truncated.
pub fn best_hand(hole: &[Card; 2], board: &[Card]) -> Result<Hand, EngineError> {
    let total = 2 + board.len();
    if !(5..=7).contains(&total) {
        return Err(EngineError::BadCardCount(total));
    }
    let mut cards = Vec::with_capacity(total);
    cards.extend_from_slice(hole);
    cards.extend_from_slice(board);

    let n = cards.len();
    let mut best: Option<Hand> = None;
    for mask in 0u32..(1 << n) {
        if mask.count_ones() != 5 {
            continue;
        }
        let mut five = [cards[0]; 5];
        let mut k = 0;
        for (i, &c) in cards.iter().enumerate() {
            if mask & (1 << i) != 0 {
                five[k] = c;
                k += 1;
            }
        }
        let hand = evaluate_five(&five);
        if best.as_ref().is_none_or(|b| hand > *b) {
            best = Some(hand);
        }
    }
    best.ok_or(EngineError::BadCardCount(total))
}

fn rank_val(r: Rank) -> u8 {
    r as u8
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

/// All present ranks, high to low, one entry per card (pairs repeat).
fn ranks_desc(rank_counts: &[u8; 15]) -> [u8; 5] {
    let mut k = [0u8; 5];
    let mut i = 0;
    for r in (2..=14u8).rev() {
        for _ in 0..rank_counts[r as usize] {
            if i < 5 {
                k[i] = r;
                i += 1;
            }
        }
    }
    k
}

/// Straight detection over five distinct ranks; the wheel (A-2-3-4-5)
/// ranks as a 5-high straight.
fn detect_straight_high(rank_counts: &[u8; 15]) -> Option<u8> {
    let distinct: Vec<u8> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .collect();
    if distinct.len() != 5 {
        return None;
    }
    let lo = distinct[0];
    let hi = distinct[4];
    if hi - lo == 4 {
        return Some(hi);
    }
    if distinct == [2, 3, 4, 5, 14] {
        return Some(5);
    }
    None
}

fn detect_quads(rank_counts: &[u8; 15]) -> Option<(u8, u8)> {
    let quad = (2..=14u8).rev().find(|&r| rank_counts[r as usize] == 4)?;
    let kicker = (2..=14u8)
        .rev()
        .find(|&r| r != quad && rank_counts[r as usize] > 0)
        .unwrap_or(0);
    Some((quad, kicker))
}

fn detect_full_house(rank_counts: &[u8; 15]) -> Option<(u8, u8)> {
    let trip = (2..=14u8).rev().find(|&r| rank_counts[r as usize] == 3)?;
    let pair = (2..=14u8)
        .rev()
        .find(|&r| r != trip && rank_counts[r as usize] == 2)?;
    Some((trip, pair))
}

/// Ranks appearing three, two and one time(s), each list high to low.
fn classify_multiples(rank_counts: &[u8; 15]) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let mut trips = vec![];
    let mut pairs = vec![];
    let mut singles = vec![];
    for r in (2..=14u8).rev() {
        match rank_counts[r as usize] {
            3 => trips.push(r),
            2 => pairs.push(r),
            1 => singles.push(r),
            _ => {}
        }
    }
    (trips, pairs, singles)
}
