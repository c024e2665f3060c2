//! # arena-engine: Multi-Player Poker Bot Arena Core
//!
//! A deterministic no-limit Texas Hold'em engine for 2 to 10 pluggable,
//! untrusted bots. Provides game orchestration, hand evaluation, side-pot
//! accounting and hand-history logging with reproducible RNG, and a hard
//! sandbox boundary that turns bot panics, hangs and garbage answers into
//! legal play.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`engine`] - Game orchestration and per-hand execution
//! - [`hand`] - Poker hand evaluation and strength comparison
//! - [`ranker`] - Strongest-first ordering of revealed hands with tie groups
//! - [`pot`] - Pot accounting, side pots and settlement
//! - [`player`] - Per-seat state and stack management
//! - [`table`] - Seat traversal, button rotation and the chip-total ledger
//! - [`agent`] - The bot plugin trait and its message types
//! - [`proxy`] - The sandbox boundary around one untrusted agent
//! - [`rules`] - Action coercion from raw bot answers to legal actions
//! - [`settings`] - Validated game configuration
//! - [`logger`] - HandRecord serialization to JSONL hand histories
//! - [`errors`] - Fatal engine errors and recovered agent faults
//!
//! ## Quick Start
//!
//! ```rust
//! use arena_engine::cards::Card;
//! use arena_engine::hand::best_hand;
//!
//! // Evaluate the best 5-card hand from hole cards plus a board
//! let hole = ["Ah".parse::<Card>().unwrap(), "Kh".parse::<Card>().unwrap()];
//! let board: Vec<Card> = ["Qh", "Jh", "Th", "2c", "3d"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//!
//! let hand = best_hand(&hole, &board).unwrap();
//! println!("Best hand: {:?}", hand.category);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All game outcomes are reproducible using seeded RNG:
//!
//! ```rust
//! use arena_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let deck1 = Deck::new_with_seed(42);
//! let deck2 = Deck::new_with_seed(42);
//! // deck1 and deck2 will deal identical card sequences
//! ```
//!
//! ## Action Coercion
//!
//! Whatever a bot answers is reduced to a legal action before any chips
//! move:
//!
//! ```rust
//! use arena_engine::agent::{BotAction, Stage};
//! use arena_engine::rules::{coerce, Action, BetContext};
//!
//! let ctx = BetContext {
//!     stage: Stage::Flop,
//!     stack: 500,
//!     call_amount: 50,
//!     min_raise: 150,
//!     raises_remaining: None,
//! };
//!
//! // A raise beyond the stack is clamped to an all-in
//! assert_eq!(coerce(&ctx, BotAction::Raise(1_000_000)), Action::Raise(500));
//! ```

pub mod agent;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod proxy;
pub mod ranker;
pub mod rules;
pub mod settings;
pub mod table;
