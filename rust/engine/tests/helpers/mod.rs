//! Shared bot doubles for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::time::Duration;

use arena_engine::agent::{ActionRequest, Agent, BotAction, Stage};
use arena_engine::engine::Game;
use arena_engine::settings::GameSettings;

/// Plays a fixed script of raw answers, then calls forever. Always shows
/// at showdown.
pub struct ScriptedBot {
    script: VecDeque<BotAction>,
}

impl ScriptedBot {
    pub fn new(actions: &[BotAction]) -> Self {
        Self {
            script: actions.iter().copied().collect(),
        }
    }

    /// A bot that calls every price (an empty script).
    pub fn caller() -> Self {
        Self::new(&[])
    }
}

impl Agent for ScriptedBot {
    fn get_action(&mut self, request: &ActionRequest) -> BotAction {
        if request.stage == Stage::Showdown {
            return BotAction::Show;
        }
        self.script.pop_front().unwrap_or(BotAction::Call)
    }
}

/// Folds every solicitation.
pub struct AlwaysFoldBot;

impl Agent for AlwaysFoldBot {
    fn get_action(&mut self, _request: &ActionRequest) -> BotAction {
        BotAction::Fold
    }
}

/// Panics on every call.
pub struct PanicBot;

impl Agent for PanicBot {
    fn get_action(&mut self, _request: &ActionRequest) -> BotAction {
        panic!("scripted agent explosion");
    }
}

/// Panics on the first solicitation only, then calls.
pub struct PanicOnceBot {
    panicked: bool,
}

impl PanicOnceBot {
    pub fn new() -> Self {
        Self { panicked: false }
    }
}

impl Agent for PanicOnceBot {
    fn get_action(&mut self, _request: &ActionRequest) -> BotAction {
        if !self.panicked {
            self.panicked = true;
            panic!("first-call explosion");
        }
        BotAction::Call
    }
}

/// Sleeps past any reasonable test timeout before answering.
pub struct SleepyBot {
    pub delay: Duration,
}

impl Agent for SleepyBot {
    fn get_action(&mut self, _request: &ActionRequest) -> BotAction {
        std::thread::sleep(self.delay);
        BotAction::Fold
    }
}

/// Returns hostile raise amounts that must be clamped at the boundary.
pub struct HostileBot;

impl Agent for HostileBot {
    fn get_action(&mut self, _request: &ActionRequest) -> BotAction {
        BotAction::Raise(i64::MIN)
    }
}

/// Settings tuned for tests: seeded, fast timeout.
pub fn test_settings(seed: u64) -> GameSettings {
    GameSettings {
        seed: Some(seed),
        decision_timeout_ms: 5_000,
        ..GameSettings::default()
    }
}

pub fn seat(name: &str, bot: impl Agent + 'static) -> (String, Box<dyn Agent + Send>) {
    (name.to_string(), Box::new(bot))
}

/// Sum of all stacks in a game, for conservation assertions.
pub fn stack_total(game: &Game) -> u64 {
    game.table().stack_sum()
}
