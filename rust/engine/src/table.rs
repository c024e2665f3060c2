use crate::errors::EngineError;
use crate::player::{PlayerId, PlayerState};

/// Seat arena: players indexed by stable id, with explicit clockwise
/// traversal helpers instead of implicit iteration state. Records the
/// fixed chip total at creation for money-conservation checks.
#[derive(Debug)]
pub struct Table {
    players: Vec<PlayerState>,
    dealer: PlayerId,
    total_chips: u64,
}

impl Table {
    pub fn new(seats: Vec<(String, u32)>) -> Result<Self, EngineError> {
        if !(2..=10).contains(&seats.len()) {
            return Err(EngineError::BadPlayerCount(seats.len()));
        }
        let players: Vec<PlayerState> = seats
            .into_iter()
            .enumerate()
            .map(|(id, (name, stack))| PlayerState::new(id, name, stack))
            .collect();
        let total_chips = players.iter().map(|p| p.stack() as u64).sum();
        Ok(Self {
            players,
            dealer: 0,
            total_chips,
        })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn dealer(&self) -> PlayerId {
        self.dealer
    }

    pub fn total_chips(&self) -> u64 {
        self.total_chips
    }

    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        &mut self.players[id]
    }

    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub fn alive_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_alive()).count()
    }

    pub fn contending_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_contending()).count()
    }

    pub fn actionable_count(&self) -> usize {
        self.players.iter().filter(|p| p.can_act()).count()
    }

    /// First seat clockwise after `from` matching `pred`, if any.
    pub fn next_where<F>(&self, from: PlayerId, pred: F) -> Option<PlayerId>
    where
        F: Fn(&PlayerState) -> bool,
    {
        let n = self.players.len();
        (1..=n)
            .map(|k| (from + k) % n)
            .find(|&i| pred(&self.players[i]))
    }

    /// First seat counterclockwise before `from` matching `pred`, if any.
    pub fn prev_where<F>(&self, from: PlayerId, pred: F) -> Option<PlayerId>
    where
        F: Fn(&PlayerState) -> bool,
    {
        let n = self.players.len();
        (1..=n)
            .map(|k| (from + n - k) % n)
            .find(|&i| pred(&self.players[i]))
    }

    pub fn next_alive(&self, from: PlayerId) -> Option<PlayerId> {
        self.next_where(from, PlayerState::is_alive)
    }

    pub fn next_contending(&self, from: PlayerId) -> Option<PlayerId> {
        self.next_where(from, PlayerState::is_contending)
    }

    pub fn prev_contending(&self, from: PlayerId) -> Option<PlayerId> {
        self.prev_where(from, PlayerState::is_contending)
    }

    /// Move the button to the next live player.
    pub fn rotate_dealer(&mut self) {
        if let Some(next) = self.next_alive(self.dealer) {
            self.dealer = next;
        }
    }

    /// All seats in clockwise order starting after the dealer; remainder
    /// chips at settlement follow this order.
    pub fn payout_order(&self) -> Vec<PlayerId> {
        let n = self.players.len();
        (1..=n).map(|k| (self.dealer + k) % n).collect()
    }

    /// Sum of live stacks; together with the pot total this must equal
    /// `total_chips` at every observable point.
    pub fn stack_sum(&self) -> u64 {
        self.players.iter().map(|p| p.stack() as u64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table3() -> Table {
        Table::new(vec![
            ("a".into(), 100),
            ("b".into(), 100),
            ("c".into(), 100),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_bad_player_counts() {
        assert!(matches!(
            Table::new(vec![("solo".into(), 100)]),
            Err(EngineError::BadPlayerCount(1))
        ));
    }

    #[test]
    fn traversal_skips_folded_seats() {
        let mut t = table3();
        for p in 0..3 {
            t.player_mut(p).begin_hand();
        }
        t.player_mut(1).fold();
        assert_eq!(t.next_contending(0), Some(2));
        assert_eq!(t.prev_contending(0), Some(2));
    }

    #[test]
    fn payout_order_starts_after_dealer() {
        let t = table3();
        assert_eq!(t.payout_order(), vec![1, 2, 0]);
    }
}
