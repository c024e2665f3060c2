use crate::cards::Card;
use crate::errors::EngineError;

/// Stable seat index; ids never change while a game runs, even after a
/// player is eliminated.
pub type PlayerId = usize;

/// Per-seat mutable record. Persists across hands (the stack carries over)
/// until the player busts, at which point `alive` goes false for good.
/// Hole cards are owned here and never shown to other agents before
/// showdown.
#[derive(Debug, Clone)]
pub struct PlayerState {
    id: PlayerId,
    name: String,
    stack: u32,
    alive: bool,
    folded: bool,
    all_in: bool,
    hole: [Option<Card>; 2],
    round_bet: u32,
    hand_bet: u32,
}

impl PlayerState {
    pub fn new(id: PlayerId, name: String, stack: u32) -> Self {
        Self {
            id,
            name,
            stack,
            alive: stack > 0,
            folded: true,
            all_in: false,
            hole: [None, None],
            round_bet: 0,
            hand_bet: 0,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn is_alive(&self) -> bool {
        self.alive
    }
    pub fn has_folded(&self) -> bool {
        self.folded
    }
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }
    /// Still contesting the current hand (folded players are out; all-in
    /// players stay in contention for the pots they funded).
    pub fn is_contending(&self) -> bool {
        self.alive && !self.folded
    }
    /// May be asked for an action this round.
    pub fn can_act(&self) -> bool {
        self.is_contending() && !self.all_in && self.stack > 0
    }
    pub fn round_bet(&self) -> u32 {
        self.round_bet
    }
    pub fn hand_bet(&self) -> u32 {
        self.hand_bet
    }

    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }

    pub fn give_card(&mut self, c: Card) -> Result<(), EngineError> {
        if self.hole[0].is_none() {
            self.hole[0] = Some(c);
            Ok(())
        } else if self.hole[1].is_none() {
            self.hole[1] = Some(c);
            Ok(())
        } else {
            Err(EngineError::HoleCardsFull)
        }
    }

    /// Reset per-hand state. Eliminated players stay folded.
    pub fn begin_hand(&mut self) {
        self.folded = !self.alive;
        self.all_in = false;
        self.hole = [None, None];
        self.round_bet = 0;
        self.hand_bet = 0;
    }

    pub fn begin_round(&mut self) {
        self.round_bet = 0;
    }

    pub fn fold(&mut self) {
        self.folded = true;
    }

    pub fn eliminate(&mut self) {
        self.alive = false;
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Move chips from the stack toward the pot. Overdrafts are an engine
    /// bug, not an agent fault: coercion clamps everything to the stack
    /// before money moves.
    pub fn commit(&mut self, amount: u32) -> Result<(), EngineError> {
        if amount > self.stack {
            return Err(EngineError::InsufficientChips {
                player: self.id,
                amount,
                stack: self.stack,
            });
        }
        self.stack -= amount;
        self.round_bet += amount;
        self.hand_bet += amount;
        if self.stack == 0 {
            self.all_in = true;
        }
        Ok(())
    }
}
