//! Pot accounting: per-player contribution ledgers, side-pot splitting for
//! all-in players with unequal stacks, and settlement with deterministic
//! odd-chip assignment.
//!
//! Invariant: the sum of all pot sizes equals the sum of every bet ever
//! applied, and a pot that has been capped never accepts a contribution
//! beyond its cap.

use std::collections::BTreeMap;

use log::debug;

use crate::errors::EngineError;
use crate::player::PlayerId;

/// One pot instance: who paid how much into it, and whether an all-in
/// contributor has frozen its per-player maximum.
#[derive(Debug, Clone, Default)]
pub struct Pot {
    contributions: BTreeMap<PlayerId, u32>,
    capped: bool,
}

impl Pot {
    pub fn size(&self) -> u32 {
        self.contributions.values().sum()
    }

    /// The largest single contribution; the level everyone else must match
    /// to stay eligible.
    pub fn max_contribution(&self) -> u32 {
        self.contributions.values().copied().max().unwrap_or(0)
    }

    pub fn contribution(&self, id: PlayerId) -> u32 {
        self.contributions.get(&id).copied().unwrap_or(0)
    }

    pub fn contributors(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.contributions.keys().copied()
    }

    pub fn contributor_count(&self) -> usize {
        self.contributions.len()
    }

    pub fn is_capped(&self) -> bool {
        self.capped
    }

    fn deposit(&mut self, id: PlayerId, amount: u32) -> Result<(), EngineError> {
        if self.capped {
            let cap = self.max_contribution();
            if self.contribution(id) + amount > cap {
                return Err(EngineError::PotOverCap { cap });
            }
        }
        *self.contributions.entry(id).or_insert(0) += amount;
        Ok(())
    }

    /// Move every contributor's excess above `level` into a new pot.
    /// Splitting a capped pot yields a capped remainder.
    fn split_off_above(&mut self, level: u32) -> Pot {
        let mut over = Pot {
            capped: self.capped,
            ..Pot::default()
        };
        for (&id, amount) in self.contributions.iter_mut() {
            if *amount > level {
                over.contributions.insert(id, *amount - level);
                *amount = level;
            }
        }
        over
    }
}

/// Ordered collection of pots: main pot first, side pots after, settled
/// oldest to newest.
#[derive(Debug, Default)]
pub struct PotManager {
    pots: Vec<Pot>,
}

impl PotManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    pub fn total(&self) -> u32 {
        self.pots.iter().map(Pot::size).sum()
    }

    /// Apply one player's bet, splitting pots as needed when the player is
    /// all-in for less than the current level.
    ///
    /// The walk visits pots oldest to newest: an uncapped pot that the bet
    /// can fully call absorbs the whole remainder (raising the level for
    /// everyone); a capped pot takes exactly its call amount and passes the
    /// rest along; a pot the player cannot call is split at the player's
    /// level, with everyone else's excess moved into a fresh side pot.
    pub fn add_bet(
        &mut self,
        id: PlayerId,
        amount: u32,
        is_all_in: bool,
    ) -> Result<(), EngineError> {
        if amount == 0 {
            return Ok(());
        }
        if self.pots.is_empty() {
            self.pots.push(Pot::default());
        }

        let mut remaining = amount;
        let mut i = 0;
        while i < self.pots.len() && remaining > 0 {
            let to_call = {
                let pot = &self.pots[i];
                pot.max_contribution().saturating_sub(pot.contribution(id))
            };
            if !self.pots[i].capped && remaining >= to_call {
                self.pots[i].deposit(id, remaining)?;
                remaining = 0;
                if is_all_in {
                    // No one may be pushed past an all-in player's level.
                    self.pots[i].capped = true;
                }
            } else if self.pots[i].capped && remaining >= to_call {
                if to_call > 0 {
                    self.pots[i].deposit(id, to_call)?;
                }
                remaining -= to_call;
                i += 1;
            } else {
                // Short of the call level: only reachable for an all-in
                // player. Split at the player's resulting level and carry
                // the overflow into a new side pot right after this one.
                let level = self.pots[i].contribution(id) + remaining;
                let overflow = self.pots[i].split_off_above(level);
                self.pots[i].deposit(id, remaining)?;
                self.pots[i].capped = true;
                remaining = 0;
                self.pots.insert(i + 1, overflow);
                self.resort();
                debug!(
                    "pot split at level {level}: now {} pots",
                    self.pots.len()
                );
            }
        }

        if remaining > 0 {
            // Every existing pot is capped below the player's bet.
            let mut pot = Pot::default();
            pot.contributions.insert(id, remaining);
            pot.capped = is_all_in;
            self.pots.push(pot);
        }
        Ok(())
    }

    /// Settle all pots. `rankings` orders player groups best first, ties
    /// sharing a group; `payout_order` is the seat order starting from the
    /// player after the dealer, used to hand out indivisible remainder
    /// chips one at a time. Pots are emptied; the returned pairs sum to the
    /// exact total held.
    pub fn distribute(
        &mut self,
        rankings: &[Vec<PlayerId>],
        payout_order: &[PlayerId],
    ) -> Result<Vec<(PlayerId, u32)>, EngineError> {
        let mut winnings: BTreeMap<PlayerId, u32> = BTreeMap::new();
        for pot in self.pots.drain(..) {
            let size = pot.size();
            if size == 0 {
                continue;
            }
            let winners: Vec<PlayerId> = rankings
                .iter()
                .find(|g| g.iter().any(|&p| pot.contribution(p) > 0))
                .map(|g| {
                    g.iter()
                        .copied()
                        .filter(|&p| pot.contribution(p) > 0)
                        .collect()
                })
                .ok_or(EngineError::UnclaimedPot { size })?;

            let share = size / winners.len() as u32;
            let mut remainder = size % winners.len() as u32;
            for &w in &winners {
                *winnings.entry(w).or_insert(0) += share;
            }
            for &p in payout_order {
                if remainder == 0 {
                    break;
                }
                if winners.contains(&p) {
                    *winnings.entry(p).or_insert(0) += 1;
                    remainder -= 1;
                }
            }
        }
        Ok(winnings.into_iter().collect())
    }

    /// Pots with more contributors settle before pots with fewer; stable,
    /// so creation order is preserved within equal counts.
    fn resort(&mut self) {
        self.pots
            .sort_by(|a, b| b.contributor_count().cmp(&a.contributor_count()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capped_pot_rejects_over_cap_deposit() {
        let mut pot = Pot::default();
        pot.deposit(0, 100).unwrap();
        pot.capped = true;
        assert_eq!(
            pot.deposit(1, 150),
            Err(EngineError::PotOverCap { cap: 100 })
        );
        assert!(pot.deposit(1, 100).is_ok());
    }

    #[test]
    fn total_matches_all_bets_applied() {
        let mut pm = PotManager::new();
        pm.add_bet(0, 100, false).unwrap();
        pm.add_bet(1, 40, true).unwrap();
        pm.add_bet(2, 100, false).unwrap();
        assert_eq!(pm.total(), 240);
    }
}
