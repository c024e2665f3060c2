//! Betting-rule coercion: turns whatever an agent returned into a legal
//! action for the current constraints. This is the layer that makes the
//! engine safe against adversarial or broken plugins: after `coerce`, an
//! action can always be applied without further checks.

use serde::{Deserialize, Serialize};

use crate::agent::{BotAction, Stage};

/// An engine-legal action. `Call` and `Raise` carry the exact chip amount
/// that will move, already clamped to the player's stack.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Fold,
    Check,
    Call(u32),
    Raise(u32),
    Show,
}

/// Betting constraints for one solicitation.
#[derive(Debug, Clone, Copy)]
pub struct BetContext {
    pub stage: Stage,
    pub stack: u32,
    pub call_amount: u32,
    /// Smallest total commitment that counts as a full raise
    /// (call amount + last full raise size).
    pub min_raise: u32,
    /// `Some(0)` means raising rights are closed for this player.
    pub raises_remaining: Option<u8>,
}

/// Coerce a raw agent response into a legal action. Rules apply in a fixed
/// order: showdown first, then amount clamping, then raise downgrades, then
/// fold/check/call fixups. Running `coerce` on the output of `coerce`
/// returns it unchanged.
pub fn coerce(ctx: &BetContext, raw: BotAction) -> Action {
    if ctx.stage == Stage::Showdown {
        return match raw {
            BotAction::Fold => Action::Fold,
            _ => Action::Show,
        };
    }

    match raw {
        BotAction::Fold => {
            if ctx.call_amount == 0 {
                Action::Check
            } else {
                Action::Fold
            }
        }
        BotAction::Raise(amount) => {
            let amount = amount.clamp(0, ctx.stack as i64) as u32;
            let shoving = amount == ctx.stack && ctx.stack > 0;
            if amount <= ctx.call_amount
                || ctx.raises_remaining == Some(0)
                || (amount < ctx.min_raise && !shoving)
            {
                call_or_check(ctx)
            } else {
                Action::Raise(amount)
            }
        }
        // Check-when-owing becomes a call; Call, Check and a stray Show
        // all collapse to the priced call (a check when nothing is owed).
        BotAction::Check | BotAction::Call | BotAction::Show => call_or_check(ctx),
    }
}

fn call_or_check(ctx: &BetContext) -> Action {
    if ctx.call_amount == 0 {
        Action::Check
    } else {
        Action::Call(ctx.call_amount.min(ctx.stack))
    }
}
