//! Trivial bots. Useful for exercising table mechanics and as sparring
//! partners that never time out or panic.

use arena_engine::agent::{ActionRequest, Agent, BotAction};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Calls every price, checks when free, always shows at showdown.
#[derive(Debug, Clone, Default)]
pub struct CallingBot;

impl Agent for CallingBot {
    fn get_action(&mut self, _request: &ActionRequest) -> BotAction {
        BotAction::Call
    }
}

/// Folds to any bet. Coercion turns the fold into a check when nothing is
/// owed, so this bot survives until its blinds run out.
#[derive(Debug, Clone, Default)]
pub struct FoldingBot;

impl Agent for FoldingBot {
    fn get_action(&mut self, _request: &ActionRequest) -> BotAction {
        BotAction::Fold
    }
}

/// Raises the minimum whenever raising is open, otherwise calls.
#[derive(Debug, Clone, Default)]
pub struct RaisingBot;

impl Agent for RaisingBot {
    fn get_action(&mut self, request: &ActionRequest) -> BotAction {
        if request.raises_remaining != Some(0) && request.min_raise <= request.max_raise {
            BotAction::Raise(i64::from(request.min_raise))
        } else {
            BotAction::Call
        }
    }
}

/// Uniformly random answers. Occasionally produces an illegal amount on
/// purpose; the engine's coercion layer is expected to absorb it.
#[derive(Debug, Clone)]
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomBot {
    fn get_action(&mut self, request: &ActionRequest) -> BotAction {
        match self.rng.random_range(0..4u8) {
            0 => BotAction::Fold,
            1 => BotAction::Check,
            2 => BotAction::Call,
            _ => {
                let ceiling = i64::from(request.max_raise).max(1);
                BotAction::Raise(self.rng.random_range(0..=ceiling * 2))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_engine::agent::Stage;

    fn request() -> ActionRequest {
        ActionRequest {
            stage: Stage::Flop,
            bet_size: 40,
            call_amount: 40,
            min_raise: 80,
            max_raise: 500,
            raises_remaining: None,
            pot_size: 120,
        }
    }

    #[test]
    fn raiser_respects_closed_raising_rights() {
        let mut bot = RaisingBot;
        let mut req = request();
        assert_eq!(bot.get_action(&req), BotAction::Raise(80));
        req.raises_remaining = Some(0);
        assert_eq!(bot.get_action(&req), BotAction::Call);
    }

    #[test]
    fn random_bot_is_deterministic_under_a_seed() {
        let req = request();
        let mut a = RandomBot::with_seed(7);
        let mut b = RandomBot::with_seed(7);
        for _ in 0..32 {
            assert_eq!(a.get_action(&req), b.get_action(&req));
        }
    }
}
