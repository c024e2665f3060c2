//! The agent contract: the fixed interface every bot implements.
//!
//! Notifications carry no return value and may be ignored; `get_action` is
//! the only call whose result drives money movement, and whatever it
//! returns is sanitized by [`crate::rules::coerce`] before the engine
//! touches a chip.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::Hand;
use crate::player::PlayerId;
use crate::rules::Action;
use crate::settings::GameSettings;

/// Stage of a hand, as seen by agents. Betting happens on the first four;
/// `Showdown` solicitations only decide show-or-muck.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Stage {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

/// Raw agent decision. Raise amounts are signed on purpose: hostile or
/// buggy values must survive the boundary crossing so the coercion layer
/// can clamp them, rather than being mangled en route.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum BotAction {
    Fold,
    Check,
    Call,
    /// Total chips the agent wants to commit with this action.
    Raise(i64),
    Show,
}

/// Everything an agent is told when asked to act.
#[derive(Debug, Clone)]
pub struct ActionRequest {
    pub stage: Stage,
    /// Current call level of this betting round.
    pub bet_size: u32,
    /// Chips this player owes to stay in.
    pub call_amount: u32,
    /// Smallest total commitment that counts as a full raise.
    pub min_raise: u32,
    /// Largest legal commitment: the player's whole stack.
    pub max_raise: u32,
    /// `None` means unlimited raising.
    pub raises_remaining: Option<u8>,
    pub pot_size: u32,
}

/// Public per-player view handed to agents at hand start and game end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub stack: u32,
    pub alive: bool,
}

/// Decision-making plugin. Implementations are untrusted: they may panic,
/// hang, or return garbage, and the engine must shrug all of it off. All
/// default notification bodies are no-ops so simple bots implement only
/// `get_action`.
impl std::fmt::Debug for dyn Agent + Send {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Agent")
    }
}

pub trait Agent: Send {
    /// One-time setup before the first hand.
    fn init_player(&mut self, _id: PlayerId, _settings: &GameSettings) {}

    /// Per-hand snapshot of the table before cards go out.
    fn init_hand(
        &mut self,
        _hand_num: u64,
        _players: &[PlayerSnapshot],
        _dealer: PlayerId,
        _small_blind: u32,
        _big_blind: u32,
    ) {
    }

    fn receive_hole_cards(&mut self, _cards: [Card; 2]) {}

    /// Broadcast of every applied action, including this agent's own.
    fn see_action(&mut self, _stage: Stage, _player: PlayerId, _action: Action) {}

    fn get_action(&mut self, request: &ActionRequest) -> BotAction;

    /// Board card revealed at `slot` (0..=4 across the hand).
    fn see_board_card(&mut self, _slot: usize, _card: Card) {}

    /// Another player's hole cards and best hand, revealed at showdown.
    fn see_player_hand(&mut self, _player: PlayerId, _hole: [Card; 2], _best: &Hand) {}

    fn end_of_game(&mut self, _players: &[PlayerSnapshot]) {}
}
