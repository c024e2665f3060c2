use thiserror::Error;

/// Fatal engine faults. Every variant here means either a broken caller
/// contract or corrupted money state; play must not continue past one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("hand evaluation takes 5 to 7 cards, got {0}")]
    BadCardCount(usize),
    #[error("deck exhausted while dealing")]
    DeckExhausted,
    #[error("hole cards already dealt")]
    HoleCardsFull,
    #[error("player {player} cannot move {amount} chips with stack {stack}")]
    InsufficientChips {
        player: usize,
        amount: u32,
        stack: u32,
    },
    #[error("deposit into capped pot would exceed cap {cap}")]
    PotOverCap { cap: u32 },
    #[error("pot of {size} chips matched no ranked player")]
    UnclaimedPot { size: u32 },
    #[error("chips in play drifted: expected {expected}, found {found}")]
    MoneyImbalance { expected: u64, found: u64 },
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    #[error("a game needs 2 to 10 players, got {0}")]
    BadPlayerCount(usize),
    #[error("player {0} has no hole cards")]
    MissingHoleCards(usize),
    #[error("hand history write failed: {0}")]
    HistoryIo(String),
    #[error("fewer than two live players remain")]
    GameOver,
}

/// Recovered faults from untrusted agent code. Never fatal: the proxy
/// substitutes a default and the hand continues.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AgentFault {
    #[error("agent panicked: {0}")]
    Panicked(String),
    #[error("agent timed out after {0} ms")]
    TimedOut(u64),
}
