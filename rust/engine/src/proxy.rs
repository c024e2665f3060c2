//! The plugin boundary. One `PlayerProxy` wraps one untrusted agent; every
//! call into it runs on a worker thread under `catch_unwind`, raced against
//! the per-decision timeout. A panic, hang or poisoned lock becomes an
//! [`AgentFault`]: the proxy logs it, substitutes a harmless default (no-op
//! for notifications, Call for action requests) and the game moves on. The
//! engine thread itself can never be blocked for longer than the timeout,
//! and never sees an agent error, only a coerced, legal [`Action`].

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use log::{debug, warn};

use crate::agent::{ActionRequest, Agent, BotAction, PlayerSnapshot, Stage};
use crate::cards::Card;
use crate::errors::AgentFault;
use crate::hand::Hand;
use crate::player::PlayerId;
use crate::rules::{coerce, Action, BetContext};
use crate::settings::GameSettings;

type SharedAgent = Arc<Mutex<Box<dyn Agent + Send>>>;

pub struct PlayerProxy {
    id: PlayerId,
    name: String,
    agent: SharedAgent,
    timeout: Duration,
    faults: u32,
}

impl PlayerProxy {
    pub fn new(id: PlayerId, name: String, agent: Box<dyn Agent + Send>, timeout: Duration) -> Self {
        Self {
            id,
            name,
            agent: Arc::new(Mutex::new(agent)),
            timeout,
            faults: 0,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of recovered faults so far; surfaced in the game summary for
    /// post-game analysis.
    pub fn fault_count(&self) -> u32 {
        self.faults
    }

    /// Run one closure against the agent on a worker thread, bounded by the
    /// decision timeout. A timed-out worker is left to finish (or never
    /// finish) on its own; it holds the agent lock, so the worst a hung
    /// agent can cost is one timeout per subsequent solicitation.
    fn invoke<R, F>(&mut self, what: &str, f: F) -> Result<R, AgentFault>
    where
        R: Send + 'static,
        F: FnOnce(&mut dyn Agent) -> R + Send + 'static,
    {
        let agent = Arc::clone(&self.agent);
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                let mut guard = match agent.lock() {
                    Ok(g) => g,
                    Err(poisoned) => {
                        // A previous panic poisoned the lock; the agent
                        // state may be inconsistent but it gets its chance.
                        agent.clear_poison();
                        poisoned.into_inner()
                    }
                };
                f(guard.as_mut())
            }));
            let _ = tx.send(outcome);
        });

        let result = match rx.recv_timeout(self.timeout) {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(payload)) => Err(AgentFault::Panicked(panic_message(payload.as_ref()))),
            Err(_) => Err(AgentFault::TimedOut(self.timeout.as_millis() as u64)),
        };
        if let Err(ref fault) = result {
            self.faults += 1;
            warn!("agent '{}' fault during {}: {}", self.name, what, fault);
        }
        result
    }

    fn notify<F>(&mut self, what: &str, f: F)
    where
        F: FnOnce(&mut dyn Agent) + Send + 'static,
    {
        // Faulted notifications degrade to no-ops.
        let _ = self.invoke(what, f);
    }

    pub fn init_player(&mut self, settings: &GameSettings) {
        let id = self.id;
        let settings = settings.clone();
        self.notify("init_player", move |a| a.init_player(id, &settings));
    }

    pub fn init_hand(
        &mut self,
        hand_num: u64,
        players: Vec<PlayerSnapshot>,
        dealer: PlayerId,
        small_blind: u32,
        big_blind: u32,
    ) {
        self.notify("init_hand", move |a| {
            a.init_hand(hand_num, &players, dealer, small_blind, big_blind)
        });
    }

    pub fn receive_hole_cards(&mut self, cards: [Card; 2]) {
        self.notify("receive_hole_cards", move |a| a.receive_hole_cards(cards));
    }

    pub fn see_action(&mut self, stage: Stage, player: PlayerId, action: Action) {
        self.notify("see_action", move |a| a.see_action(stage, player, action));
    }

    pub fn see_board_card(&mut self, slot: usize, card: Card) {
        self.notify("see_board_card", move |a| a.see_board_card(slot, card));
    }

    pub fn see_player_hand(&mut self, player: PlayerId, hole: [Card; 2], best: Hand) {
        self.notify("see_player_hand", move |a| {
            a.see_player_hand(player, hole, &best)
        });
    }

    pub fn end_of_game(&mut self, players: Vec<PlayerSnapshot>) {
        self.notify("end_of_game", move |a| a.end_of_game(&players));
    }

    /// Solicit a decision. Whatever happens on the other side of the
    /// boundary (a clean answer, garbage, a panic, a hang), the return
    /// value is a legal action under `ctx`. A faulted call is not retried;
    /// it consumed its one opportunity and defaults to Call.
    pub fn get_action(&mut self, request: ActionRequest, ctx: &BetContext) -> Action {
        let raw = self
            .invoke("get_action", move |a| a.get_action(&request))
            .unwrap_or(BotAction::Call);
        let action = coerce(ctx, raw);
        debug!(
            "agent '{}' answered {:?} -> applied {:?}",
            self.name, raw, action
        );
        action
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "<opaque panic payload>".to_string()
    }
}
