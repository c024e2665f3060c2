use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Immutable game configuration, validated once before any hand is dealt.
/// Malformed settings are fatal at startup (error taxonomy class c).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSettings {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    /// `None` = unlimited raising per betting round.
    pub max_raises_per_round: Option<u8>,
    /// Stop the game after this many hands even if several players live.
    pub max_hands: Option<u64>,
    /// Double both blinds every N hands.
    pub double_blinds_every: Option<u64>,
    /// Wall-clock bound on a single agent decision.
    pub decision_timeout_ms: u64,
    /// Master seed for deck shuffles and seat order; `None` draws one.
    pub seed: Option<u64>,
    /// Shuffle seat order before the first hand.
    pub shuffle_seats: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            starting_stack: 1_000,
            small_blind: 10,
            big_blind: 20,
            max_raises_per_round: None,
            max_hands: None,
            double_blinds_every: None,
            decision_timeout_ms: 2_000,
            seed: None,
            shuffle_seats: false,
        }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.small_blind == 0 {
            return Err(EngineError::InvalidSettings(
                "small_blind must be > 0".into(),
            ));
        }
        if self.big_blind < self.small_blind {
            return Err(EngineError::InvalidSettings(
                "big_blind must be >= small_blind".into(),
            ));
        }
        if self.starting_stack < self.big_blind {
            return Err(EngineError::InvalidSettings(
                "starting_stack must cover the big blind".into(),
            ));
        }
        // Keeps all chip arithmetic comfortably inside u32.
        if self.starting_stack > 100_000_000 {
            return Err(EngineError::InvalidSettings(
                "starting_stack must be <= 100_000_000".into(),
            ));
        }
        if self.max_hands == Some(0) {
            return Err(EngineError::InvalidSettings("max_hands must be > 0".into()));
        }
        if self.double_blinds_every == Some(0) {
            return Err(EngineError::InvalidSettings(
                "double_blinds_every must be > 0".into(),
            ));
        }
        if self.decision_timeout_ms == 0 {
            return Err(EngineError::InvalidSettings(
                "decision_timeout_ms must be > 0".into(),
            ));
        }
        Ok(())
    }

    pub fn decision_timeout(&self) -> Duration {
        Duration::from_millis(self.decision_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        assert!(GameSettings::default().validate().is_ok());
    }

    #[test]
    fn inverted_blinds_are_rejected() {
        let s = GameSettings {
            small_blind: 50,
            big_blind: 20,
            ..GameSettings::default()
        };
        assert!(matches!(
            s.validate(),
            Err(EngineError::InvalidSettings(_))
        ));
    }
}
