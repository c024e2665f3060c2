//! The hand state machine and the multi-hand game loop.
//!
//! `Game` owns the table, the agent proxies and the seeded deck, and plays
//! hands until one player holds every chip (or a configured hand cap is
//! reached). Each hand runs through a short-lived `HandEngine` that drives
//! blinds, dealing, the four betting rounds, showdown and settlement, and
//! verifies money conservation after every chip movement.

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::agent::{ActionRequest, Agent, PlayerSnapshot, Stage};
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::EngineError;
use crate::hand::best_hand;
use crate::logger::{
    format_hand_id, ActionRecord, HandLogger, HandRecord, RevealedHand, ShowdownInfo,
};
use crate::player::PlayerId;
use crate::pot::PotManager;
use crate::proxy::PlayerProxy;
use crate::ranker::rank_hands;
use crate::rules::{Action, BetContext};
use crate::settings::GameSettings;
use crate::table::Table;

/// Result of one completed hand.
#[derive(Debug)]
pub struct HandOutcome {
    pub record: HandRecord,
    /// Players who busted on this hand, in seat order.
    pub eliminated: Vec<PlayerId>,
}

/// Result of a full game run.
#[derive(Debug)]
pub struct GameSummary {
    pub hands_played: u64,
    /// The sole survivor, if the game ended by elimination.
    pub winner: Option<PlayerId>,
    pub standings: Vec<PlayerSnapshot>,
    /// Recovered agent faults per seat, for post-game analysis.
    pub agent_faults: Vec<(PlayerId, u32)>,
}

pub struct Game {
    table: Table,
    proxies: Vec<PlayerProxy>,
    settings: GameSettings,
    deck: Deck,
    seed: u64,
    hand_num: u64,
    small_blind: u32,
    big_blind: u32,
}

impl Game {
    /// Seat the given agents with equal starting stacks.
    pub fn new(
        agents: Vec<(String, Box<dyn Agent + Send>)>,
        settings: GameSettings,
    ) -> Result<Self, EngineError> {
        let stacks = vec![settings.starting_stack; agents.len()];
        Self::with_stacks(agents, &stacks, settings)
    }

    /// Seat the given agents with explicit per-seat stacks (mid-tournament
    /// situations and tests).
    pub fn with_stacks(
        agents: Vec<(String, Box<dyn Agent + Send>)>,
        stacks: &[u32],
        settings: GameSettings,
    ) -> Result<Self, EngineError> {
        settings.validate()?;
        if agents.len() != stacks.len() {
            return Err(EngineError::BadPlayerCount(agents.len()));
        }
        let seed = settings.seed.unwrap_or_else(rand::random);

        let mut seated: Vec<(String, Box<dyn Agent + Send>, u32)> = agents
            .into_iter()
            .zip(stacks.iter().copied())
            .map(|((name, agent), stack)| (name, agent, stack))
            .collect();
        if settings.shuffle_seats {
            // Separate stream from the deck so seat order does not perturb
            // the cards dealt under the same seed.
            let mut rng = ChaCha20Rng::seed_from_u64(seed.wrapping_add(1));
            seated.shuffle(&mut rng);
        }

        let seats: Vec<(String, u32)> = seated
            .iter()
            .map(|(name, _, stack)| (name.clone(), *stack))
            .collect();
        let mut table = Table::new(seats)?;
        if !table.player(table.dealer()).is_alive() {
            table.rotate_dealer();
        }

        let timeout = settings.decision_timeout();
        let mut proxies: Vec<PlayerProxy> = seated
            .into_iter()
            .enumerate()
            .map(|(id, (name, agent, _))| PlayerProxy::new(id, name, agent, timeout))
            .collect();
        for proxy in proxies.iter_mut() {
            proxy.init_player(&settings);
        }

        info!("game seated {} players, seed {}", proxies.len(), seed);
        Ok(Self {
            table,
            proxies,
            deck: Deck::new_with_seed(seed),
            seed,
            hand_num: 0,
            small_blind: settings.small_blind,
            big_blind: settings.big_blind,
            settings,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn hands_played(&self) -> u64 {
        self.hand_num
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn fault_counts(&self) -> Vec<(PlayerId, u32)> {
        self.proxies
            .iter()
            .map(|p| (p.id(), p.fault_count()))
            .collect()
    }

    pub fn standings(&self) -> Vec<PlayerSnapshot> {
        self.table
            .players()
            .iter()
            .map(|p| PlayerSnapshot {
                id: p.id(),
                name: p.name().to_string(),
                stack: p.stack(),
                alive: p.is_alive(),
            })
            .collect()
    }

    /// Play exactly one hand and rotate the button.
    pub fn play_hand(&mut self) -> Result<HandOutcome, EngineError> {
        if self.table.alive_count() < 2 {
            return Err(EngineError::GameOver);
        }
        self.hand_num += 1;
        let n = self.table.len();
        let mut hand = HandEngine {
            table: &mut self.table,
            proxies: &mut self.proxies,
            deck: &mut self.deck,
            settings: &self.settings,
            seed: self.seed,
            hand_num: self.hand_num,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            pots: PotManager::new(),
            board: Vec::with_capacity(5),
            actions: Vec::new(),
            call_level: 0,
            last_full_raise: 0,
            round_raises: 0,
            bb_seat: 0,
            round_last: 0,
            acted: vec![false; n],
        };
        let outcome = hand.run()?;
        self.table.rotate_dealer();
        Ok(outcome)
    }

    /// Play hands until one player survives or the hand cap is hit.
    /// Records go to `logger` when one is given.
    pub fn run(&mut self, mut logger: Option<&mut HandLogger>) -> Result<GameSummary, EngineError> {
        while self.table.alive_count() >= 2 {
            if let Some(max) = self.settings.max_hands {
                if self.hand_num >= max {
                    break;
                }
            }
            if let Some(every) = self.settings.double_blinds_every {
                if self.hand_num > 0 && self.hand_num % every == 0 {
                    self.small_blind = self.small_blind.saturating_mul(2);
                    self.big_blind = self.big_blind.saturating_mul(2);
                    info!(
                        "blinds doubled to {}/{} before hand {}",
                        self.small_blind,
                        self.big_blind,
                        self.hand_num + 1
                    );
                }
            }

            let outcome = self.play_hand()?;
            for &id in &outcome.eliminated {
                info!("hand {}: player {} eliminated", self.hand_num, id);
            }
            if let Some(logger) = logger.as_deref_mut() {
                let mut record = outcome.record;
                record.hand_id = logger.next_id();
                logger
                    .write(&record)
                    .map_err(|e| EngineError::HistoryIo(e.to_string()))?;
            }
        }

        let standings = self.standings();
        let winner = if self.table.alive_count() == 1 {
            standings.iter().find(|s| s.alive).map(|s| s.id)
        } else {
            None
        };
        for proxy in self.proxies.iter_mut() {
            proxy.end_of_game(standings.clone());
        }
        info!(
            "game over after {} hands, winner {:?}",
            self.hand_num, winner
        );
        Ok(GameSummary {
            hands_played: self.hand_num,
            winner,
            standings,
            agent_faults: self.fault_counts(),
        })
    }
}

/// Drives a single hand from blinds to settlement. Borrows the game's
/// long-lived state; everything else here is per-hand.
struct HandEngine<'a> {
    table: &'a mut Table,
    proxies: &'a mut Vec<PlayerProxy>,
    deck: &'a mut Deck,
    settings: &'a GameSettings,
    seed: u64,
    hand_num: u64,
    small_blind: u32,
    big_blind: u32,
    pots: PotManager,
    board: Vec<Card>,
    actions: Vec<ActionRecord>,
    /// Highest round_bet any player has committed this betting round.
    call_level: u32,
    /// Size of the last raise increment that carried full raising rights.
    last_full_raise: u32,
    round_raises: u8,
    bb_seat: PlayerId,
    /// Last player to act in the most recent betting round; showdown
    /// reveal order starts from the next contender after this seat.
    round_last: PlayerId,
    /// Who has acted since the last full raise. A player solicited again
    /// while still flagged (after a short all-in) may only call or fold.
    acted: Vec<bool>,
}

impl HandEngine<'_> {
    fn run(&mut self) -> Result<HandOutcome, EngineError> {
        for id in 0..self.table.len() {
            self.table.player_mut(id).begin_hand();
        }
        self.deck.shuffle();

        let snapshots = self.snapshots();
        let dealer = self.table.dealer();
        let (hand_num, sb, bb) = (self.hand_num, self.small_blind, self.big_blind);
        for proxy in self.proxies.iter_mut() {
            proxy.init_hand(hand_num, snapshots.clone(), dealer, sb, bb);
        }
        debug!(
            "hand {} started: dealer {}, blinds {}/{}",
            hand_num, dealer, sb, bb
        );

        self.post_blinds()?;
        self.deal_hole_cards()?;

        self.betting_round(Stage::Preflop)?;
        for (stage, cards) in [(Stage::Flop, 3), (Stage::Turn, 1), (Stage::River, 1)] {
            if self.table.contending_count() <= 1 {
                break;
            }
            self.reveal_board(cards)?;
            self.betting_round(stage)?;
        }

        let (mut rankings, revealed) = if self.table.contending_count() > 1 {
            let (groups, revealed) = self.showdown()?;
            (groups, Some(revealed))
        } else {
            let survivor = (0..self.table.len())
                .find(|&id| self.table.player(id).is_contending())
                .ok_or(EngineError::GameOver)?;
            (vec![vec![survivor]], None)
        };
        // Folded contributors trail in seat order, each alone, so every pot
        // finds a claimant; chips nobody called flow back to their owner.
        for id in 0..self.table.len() {
            let p = self.table.player(id);
            if !p.is_contending() && p.hand_bet() > 0 {
                rankings.push(vec![id]);
            }
        }

        let pot_sizes: Vec<u32> = self.pots.pots().iter().map(|p| p.size()).collect();
        let payout_order = self.table.payout_order();
        let winnings = self.pots.distribute(&rankings, &payout_order)?;
        for &(id, amount) in &winnings {
            self.table.player_mut(id).add_chips(amount);
        }
        self.check_conservation()?;

        let mut eliminated = Vec::new();
        for id in 0..self.table.len() {
            let p = self.table.player_mut(id);
            if p.is_alive() && p.stack() == 0 {
                p.eliminate();
                eliminated.push(id);
            }
        }

        let showdown = revealed.map(|revealed| ShowdownInfo {
            winners: winnings
                .iter()
                .filter(|&&(_, w)| w > 0)
                .map(|&(id, _)| id)
                .collect(),
            revealed,
        });
        // A logger-attached run replaces this with its own per-file id.
        let today = chrono::Utc::now().format("%Y%m%d").to_string();
        let record = HandRecord {
            hand_id: format_hand_id(&today, self.hand_num),
            hand_num: self.hand_num,
            seed: Some(self.seed),
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            actions: std::mem::take(&mut self.actions),
            board: std::mem::take(&mut self.board),
            pots: pot_sizes,
            winnings,
            showdown,
            ts: None,
        };
        Ok(HandOutcome { record, eliminated })
    }

    fn snapshots(&self) -> Vec<PlayerSnapshot> {
        self.table
            .players()
            .iter()
            .map(|p| PlayerSnapshot {
                id: p.id(),
                name: p.name().to_string(),
                stack: p.stack(),
                alive: p.is_alive(),
            })
            .collect()
    }

    /// Post blinds; heads-up the dealer is the small blind. A short stack
    /// posts what it has and is all-in.
    fn post_blinds(&mut self) -> Result<(), EngineError> {
        let dealer = self.table.dealer();
        let (sb_seat, bb_seat) = if self.table.contending_count() == 2 {
            let bb = self
                .table
                .next_contending(dealer)
                .ok_or(EngineError::GameOver)?;
            (dealer, bb)
        } else {
            let sb = self
                .table
                .next_contending(dealer)
                .ok_or(EngineError::GameOver)?;
            let bb = self
                .table
                .next_contending(sb)
                .ok_or(EngineError::GameOver)?;
            (sb, bb)
        };

        self.post_blind(sb_seat, self.small_blind)?;
        self.post_blind(bb_seat, self.big_blind)?;
        self.call_level = self.big_blind;
        self.last_full_raise = self.big_blind;
        self.bb_seat = bb_seat;
        self.round_last = bb_seat;
        Ok(())
    }

    fn post_blind(&mut self, id: PlayerId, blind: u32) -> Result<(), EngineError> {
        let pay = blind.min(self.table.player(id).stack());
        self.table.player_mut(id).commit(pay)?;
        let all_in = self.table.player(id).is_all_in();
        self.pots.add_bet(id, pay, all_in)?;
        self.check_conservation()
    }

    /// Two passes around the table, one card each, starting left of the
    /// dealer.
    fn deal_hole_cards(&mut self) -> Result<(), EngineError> {
        let order = self.contenders_from_after(self.table.dealer())?;
        for _ in 0..2 {
            for &id in &order {
                let card = self.deck.deal_card().ok_or(EngineError::DeckExhausted)?;
                self.table.player_mut(id).give_card(card)?;
            }
        }
        for &id in &order {
            let hole = self.hole_pair(id)?;
            self.proxies[id].receive_hole_cards(hole);
        }
        Ok(())
    }

    /// Contending seats in clockwise order starting after `from`.
    fn contenders_from_after(&self, from: PlayerId) -> Result<Vec<PlayerId>, EngineError> {
        let start = self
            .table
            .next_contending(from)
            .ok_or(EngineError::GameOver)?;
        let mut order = vec![start];
        let mut cur = start;
        while let Some(next) = self.table.next_contending(cur) {
            if next == start {
                break;
            }
            order.push(next);
            cur = next;
        }
        Ok(order)
    }

    fn reveal_board(&mut self, cards: usize) -> Result<(), EngineError> {
        self.deck.burn_card();
        for _ in 0..cards {
            let card = self.deck.deal_card().ok_or(EngineError::DeckExhausted)?;
            self.board.push(card);
            let slot = self.board.len() - 1;
            for proxy in self.proxies.iter_mut() {
                proxy.see_board_card(slot, card);
            }
        }
        Ok(())
    }

    /// One betting round. Solicitation walks every seat clockwise from the
    /// first-to-act, skipping seats that cannot act, and ends after the
    /// seat `last` has been visited. A raise pushes `last` back to the seat
    /// before the raiser so everyone gets to respond; only a full raise
    /// (increment >= the last full raise) clears the acted flags and
    /// reopens raising rights.
    fn betting_round(&mut self, stage: Stage) -> Result<(), EngineError> {
        let n = self.table.len();
        if stage != Stage::Preflop {
            for id in 0..n {
                self.table.player_mut(id).begin_round();
            }
            self.call_level = 0;
            // Opening bet must be at least one big blind.
            self.last_full_raise = self.big_blind;
        }
        self.round_raises = 0;
        self.acted = vec![false; n];

        if self.table.contending_count() <= 1 {
            return Ok(());
        }
        match self.table.actionable_count() {
            0 => return Ok(()),
            1 => {
                let lone = (0..n)
                    .find(|&id| self.table.player(id).can_act())
                    .ok_or(EngineError::GameOver)?;
                if self.table.player(lone).round_bet() >= self.call_level {
                    return Ok(());
                }
            }
            _ => {}
        }

        let first = match stage {
            Stage::Preflop => (self.bb_seat + 1) % n,
            _ => (self.table.dealer() + 1) % n,
        };
        let mut last = (first + n - 1) % n;
        let mut cur = first;
        loop {
            if self.table.contending_count() <= 1 {
                break;
            }
            if self.table.player(cur).can_act() {
                if let Some(new_last) = self.solicit_and_apply(stage, cur)? {
                    last = new_last;
                }
            }
            if cur == last {
                break;
            }
            cur = (cur + 1) % n;
        }
        self.round_last = last;
        Ok(())
    }

    /// Ask one player for an action and apply it. Returns the new
    /// last-to-act seat when the action was a raise.
    fn solicit_and_apply(
        &mut self,
        stage: Stage,
        cur: PlayerId,
    ) -> Result<Option<PlayerId>, EngineError> {
        let n = self.table.len();
        let p = self.table.player(cur);
        let to_call = self.call_level.saturating_sub(p.round_bet());
        let min_raise = to_call + self.last_full_raise;
        let raises_remaining = self.raises_remaining_for(cur);
        let ctx = BetContext {
            stage,
            stack: p.stack(),
            call_amount: to_call,
            min_raise,
            raises_remaining,
        };
        let request = ActionRequest {
            stage,
            bet_size: self.call_level,
            call_amount: to_call,
            min_raise,
            max_raise: p.stack(),
            raises_remaining,
            pot_size: self.pots.total(),
        };

        let action = self.proxies[cur].get_action(request, &ctx);
        let mut new_last = None;
        match action {
            Action::Fold => self.table.player_mut(cur).fold(),
            Action::Check => {}
            Action::Call(amount) => self.transfer(cur, amount)?,
            Action::Raise(amount) => {
                let increment = amount.saturating_sub(to_call);
                self.transfer(cur, amount)?;
                let level = self.table.player(cur).round_bet();
                if level > self.call_level {
                    self.call_level = level;
                }
                if increment >= self.last_full_raise {
                    self.last_full_raise = increment;
                    self.round_raises = self.round_raises.saturating_add(1);
                    for flag in self.acted.iter_mut() {
                        *flag = false;
                    }
                }
                // Even a short all-in raise lifts the call level, so
                // everyone before the raiser must get a chance to match it.
                new_last = Some((cur + n - 1) % n);
            }
            Action::Show => {}
        }
        self.acted[cur] = true;
        self.record_and_broadcast(stage, cur, action);
        self.check_conservation()?;
        Ok(new_last)
    }

    fn raises_remaining_for(&self, id: PlayerId) -> Option<u8> {
        if self.acted[id] {
            // Re-solicited after a short all-in: call or fold only.
            return Some(0);
        }
        self.settings
            .max_raises_per_round
            .map(|max| max.saturating_sub(self.round_raises))
    }

    fn transfer(&mut self, id: PlayerId, amount: u32) -> Result<(), EngineError> {
        self.table.player_mut(id).commit(amount)?;
        let all_in = self.table.player(id).is_all_in();
        self.pots.add_bet(id, amount, all_in)
    }

    fn record_and_broadcast(&mut self, stage: Stage, player: PlayerId, action: Action) {
        debug!("hand {}: player {} {:?}", self.hand_num, player, action);
        self.actions.push(ActionRecord {
            player_id: player,
            stage,
            action,
        });
        for proxy in self.proxies.iter_mut() {
            proxy.see_action(stage, player, action);
        }
    }

    /// Show-or-muck in reveal order: the first contender after the last
    /// player to act opens and must show; later players may muck unless
    /// they alone funded some pot still in play. Returns ranked groups of
    /// shown hands plus everything revealed.
    fn showdown(&mut self) -> Result<(Vec<Vec<PlayerId>>, Vec<RevealedHand>), EngineError> {
        let order = self.contenders_from_after(self.round_last)?;
        let mut revealed = Vec::new();
        let mut entries = Vec::new();
        for (position, &id) in order.iter().enumerate() {
            let forced = position == 0 || self.must_show(id);
            let action = if forced {
                Action::Show
            } else {
                let stack = self.table.player(id).stack();
                let ctx = BetContext {
                    stage: Stage::Showdown,
                    stack,
                    call_amount: 0,
                    min_raise: 0,
                    raises_remaining: Some(0),
                };
                let request = ActionRequest {
                    stage: Stage::Showdown,
                    bet_size: 0,
                    call_amount: 0,
                    min_raise: 0,
                    max_raise: stack,
                    raises_remaining: Some(0),
                    pot_size: self.pots.total(),
                };
                self.proxies[id].get_action(request, &ctx)
            };

            if action == Action::Fold {
                // Mucked: out of contention, settled like any fold.
                self.table.player_mut(id).fold();
                self.record_and_broadcast(Stage::Showdown, id, Action::Fold);
                continue;
            }
            let hole = self.hole_pair(id)?;
            let hand = best_hand(&hole, &self.board)?;
            revealed.push(RevealedHand {
                player_id: id,
                hole,
                hand: hand.clone(),
            });
            entries.push((id, hand.clone()));
            self.record_and_broadcast(Stage::Showdown, id, Action::Show);
            for proxy in self.proxies.iter_mut() {
                proxy.see_player_hand(id, hole, hand.clone());
            }
        }

        let groups = rank_hands(&entries)
            .into_iter()
            .map(|g| g.players)
            .collect();
        Ok((groups, revealed))
    }

    /// A player must show when some pot they funded has no other contender
    /// left in it; mucking would orphan those chips.
    fn must_show(&self, id: PlayerId) -> bool {
        self.pots.pots().iter().any(|pot| {
            pot.contribution(id) > 0
                && pot
                    .contributors()
                    .all(|c| c == id || !self.table.player(c).is_contending())
        })
    }

    fn hole_pair(&self, id: PlayerId) -> Result<[Card; 2], EngineError> {
        match self.table.player(id).hole_cards() {
            [Some(a), Some(b)] => Ok([a, b]),
            _ => Err(EngineError::MissingHoleCards(id)),
        }
    }

    /// Stacks plus pots must equal the fixed chip total after every
    /// transfer. A violation is a settlement bug, never playable past.
    fn check_conservation(&self) -> Result<(), EngineError> {
        let expected = self.table.total_chips();
        let found = self.table.stack_sum() + u64::from(self.pots.total());
        if found != expected {
            return Err(EngineError::MoneyImbalance { expected, found });
        }
        Ok(())
    }
}
