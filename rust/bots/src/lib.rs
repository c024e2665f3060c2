//! # arena-bots: Built-in Bot Opponents
//!
//! Ready-made [`Agent`] implementations for the arena: trivial bots for
//! testing the table mechanics, and a rule-based baseline for benchmarking
//! real entries against.
//!
//! ## Core Components
//!
//! - [`simple`] - Trivial bots: caller, folder, raiser, random
//! - [`baseline`] - Rule-based baseline with hand-strength heuristics
//! - [`create_bot`] - Factory function mapping a kind string to a bot
//!
//! ## Quick Start
//!
//! ```rust
//! use arena_bots::create_bot;
//!
//! let bot = create_bot("caller").unwrap();
//! assert!(create_bot("no-such-bot").is_err());
//! ```
//!
//! ## Bot Kinds
//!
//! - `"caller"` - calls every price, checks when free
//! - `"folder"` - folds to any bet, checks when free
//! - `"raiser"` - raises the minimum whenever allowed
//! - `"random"` - uniformly random legal-ish answers
//! - `"baseline"` - rule-based strategy, see [`baseline::BaselineBot`]

use arena_engine::agent::Agent;
use thiserror::Error;

pub mod baseline;
pub mod simple;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown bot kind '{0}'")]
pub struct UnknownBot(pub String);

/// Create a bot by kind string. The returned box plugs straight into
/// `arena_engine::engine::Game::new`.
pub fn create_bot(kind: &str) -> Result<Box<dyn Agent + Send>, UnknownBot> {
    match kind {
        "caller" => Ok(Box::new(simple::CallingBot)),
        "folder" => Ok(Box::new(simple::FoldingBot)),
        "raiser" => Ok(Box::new(simple::RaisingBot)),
        "random" => Ok(Box::new(simple::RandomBot::new())),
        "baseline" => Ok(Box::new(baseline::BaselineBot::new())),
        other => Err(UnknownBot(other.to_string())),
    }
}

/// All kind strings `create_bot` accepts, for CLI help and validation.
pub fn known_kinds() -> &'static [&'static str] {
    &["caller", "folder", "raiser", "random", "baseline"]
}
