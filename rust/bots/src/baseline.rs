//! Rule-based baseline bot.
//!
//! A reference opponent for benchmarking: preflop play from a static
//! hand-strength table, postflop play from the evaluated best hand plus a
//! pot-odds check on calls. Deterministic, so seeded games against it
//! replay exactly.

use arena_engine::agent::{ActionRequest, Agent, BotAction, PlayerSnapshot, Stage};
use arena_engine::cards::Card;
use arena_engine::hand::{best_hand, Category};
use arena_engine::player::PlayerId;

/// Baseline strategy:
///
/// **Preflop** (static strength 0-10):
/// - 8+: raise the minimum, call any price
/// - 5-7: call up to a tenth of the stack
/// - below: check when free, fold to any bet
///
/// **Postflop** (evaluated best hand so far):
/// - Two pair or better: raise the minimum, call any price
/// - One pair: check or call when the price is at most a quarter pot
/// - Otherwise: check when free, fold
#[derive(Debug, Clone, Default)]
pub struct BaselineBot {
    hole: Option<[Card; 2]>,
    board: Vec<Card>,
}

impl BaselineBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preflop hand strength on a 0-10 scale: premium pairs and big aces
    /// at the top, offsuit rags at the bottom.
    fn preflop_strength(hole: [Card; 2]) -> u8 {
        let r1 = hole[0].rank as u8;
        let r2 = hole[1].rank as u8;
        let (high, low) = if r1 > r2 { (r1, r2) } else { (r2, r1) };
        let suited = hole[0].suit == hole[1].suit;

        if r1 == r2 {
            return match high {
                14 | 13 => 10, // AA, KK
                12 | 11 => 9,  // QQ, JJ
                10 => 8,       // TT
                9 => 7,        // 99
                8 => 6,        // 88
                7 => 5,        // 77
                _ => 4,        // 66-22
            };
        }

        let connected = high - low == 1;
        match (high, low) {
            (14, 13) => {
                if suited {
                    10
                } else {
                    8
                }
            }
            (14, 12) => {
                if suited {
                    9
                } else {
                    7
                }
            }
            (14, 11) | (13, 12) => {
                if suited {
                    7
                } else {
                    5
                }
            }
            (14, _) => {
                if suited {
                    5
                } else {
                    3
                }
            }
            _ if connected && suited && high >= 9 => 6,
            _ if connected && suited => 4,
            _ if suited && high >= 12 => 4,
            _ if high >= 12 => 2,
            _ => 1,
        }
    }

    fn preflop(&self, hole: [Card; 2], request: &ActionRequest) -> BotAction {
        let strength = Self::preflop_strength(hole);
        if strength >= 8 {
            if request.raises_remaining != Some(0) {
                return BotAction::Raise(i64::from(request.min_raise));
            }
            return BotAction::Call;
        }
        if request.call_amount == 0 {
            return BotAction::Check;
        }
        if strength >= 5 && request.call_amount <= request.max_raise / 10 {
            return BotAction::Call;
        }
        BotAction::Fold
    }

    fn postflop(&self, hole: [Card; 2], request: &ActionRequest) -> BotAction {
        let hand = match best_hand(&hole, &self.board) {
            Ok(h) => h,
            // Board state out of sync; take the free option.
            Err(_) => return BotAction::Check,
        };

        if hand.category >= Category::TwoPair {
            if request.raises_remaining != Some(0) {
                return BotAction::Raise(i64::from(request.min_raise));
            }
            return BotAction::Call;
        }
        if request.call_amount == 0 {
            return BotAction::Check;
        }
        if hand.category == Category::OnePair && request.call_amount * 4 <= request.pot_size {
            return BotAction::Call;
        }
        BotAction::Fold
    }
}

impl Agent for BaselineBot {
    fn init_hand(
        &mut self,
        _hand_num: u64,
        _players: &[PlayerSnapshot],
        _dealer: PlayerId,
        _small_blind: u32,
        _big_blind: u32,
    ) {
        self.hole = None;
        self.board.clear();
    }

    fn receive_hole_cards(&mut self, cards: [Card; 2]) {
        self.hole = Some(cards);
    }

    fn see_board_card(&mut self, _slot: usize, card: Card) {
        self.board.push(card);
    }

    fn get_action(&mut self, request: &ActionRequest) -> BotAction {
        if request.stage == Stage::Showdown {
            return BotAction::Show;
        }
        let hole = match self.hole {
            Some(h) => h,
            None => return BotAction::Check,
        };
        if request.stage == Stage::Preflop {
            self.preflop(hole, request)
        } else {
            self.postflop(hole, request)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn request(stage: Stage, call_amount: u32, pot_size: u32) -> ActionRequest {
        ActionRequest {
            stage,
            bet_size: call_amount,
            call_amount,
            min_raise: call_amount + 20,
            max_raise: 1000,
            raises_remaining: None,
            pot_size,
        }
    }

    #[test]
    fn premium_pair_raises_preflop() {
        let mut bot = BaselineBot::new();
        bot.receive_hole_cards([card("As"), card("Ad")]);
        let action = bot.get_action(&request(Stage::Preflop, 20, 30));
        assert!(matches!(action, BotAction::Raise(_)));
    }

    #[test]
    fn rags_fold_to_a_bet_but_check_for_free() {
        let mut bot = BaselineBot::new();
        bot.receive_hole_cards([card("7c"), card("2d")]);
        assert_eq!(bot.get_action(&request(Stage::Preflop, 50, 70)), BotAction::Fold);
        assert_eq!(bot.get_action(&request(Stage::Flop, 0, 70)), BotAction::Check);
    }

    #[test]
    fn two_pair_raises_on_the_flop() {
        let mut bot = BaselineBot::new();
        bot.receive_hole_cards([card("Ah"), card("Kd")]);
        for (slot, c) in ["Ac", "Kh", "2s"].iter().enumerate() {
            bot.see_board_card(slot, card(c));
        }
        let action = bot.get_action(&request(Stage::Flop, 40, 100));
        assert!(matches!(action, BotAction::Raise(_)));
    }

    #[test]
    fn hand_state_resets_between_hands() {
        let mut bot = BaselineBot::new();
        bot.receive_hole_cards([card("As"), card("Ad")]);
        bot.see_board_card(0, card("2c"));
        bot.init_hand(2, &[], 0, 10, 20);
        assert_eq!(bot.get_action(&request(Stage::Preflop, 20, 30)), BotAction::Check);
    }
}
