mod helpers;

use std::time::{Duration, Instant};

use arena_engine::agent::{ActionRequest, Stage};
use arena_engine::proxy::PlayerProxy;
use arena_engine::rules::{Action, BetContext};
use helpers::{PanicBot, PanicOnceBot, ScriptedBot, SleepyBot};

fn request(call_amount: u32) -> ActionRequest {
    ActionRequest {
        stage: Stage::Flop,
        bet_size: call_amount,
        call_amount,
        min_raise: call_amount * 2,
        max_raise: 1000,
        raises_remaining: None,
        pot_size: 100,
    }
}

fn ctx(call_amount: u32) -> BetContext {
    BetContext {
        stage: Stage::Flop,
        stack: 1000,
        call_amount,
        min_raise: call_amount * 2,
        raises_remaining: None,
    }
}

#[test]
fn healthy_agent_answers_pass_through_coercion() {
    let mut proxy = PlayerProxy::new(
        0,
        "scripted".into(),
        Box::new(ScriptedBot::caller()),
        Duration::from_secs(5),
    );
    assert_eq!(proxy.get_action(request(40), &ctx(40)), Action::Call(40));
    assert_eq!(proxy.fault_count(), 0);
}

#[test]
fn panicking_agent_defaults_to_call() {
    let mut proxy = PlayerProxy::new(
        1,
        "bomb".into(),
        Box::new(PanicBot),
        Duration::from_secs(5),
    );
    assert_eq!(proxy.get_action(request(40), &ctx(40)), Action::Call(40));
    assert_eq!(proxy.fault_count(), 1);

    // The engine keeps soliciting; every explosion is contained.
    assert_eq!(proxy.get_action(request(0), &ctx(0)), Action::Check);
    assert_eq!(proxy.fault_count(), 2);
}

#[test]
fn agent_survives_its_own_panic() {
    let mut proxy = PlayerProxy::new(
        2,
        "flaky".into(),
        Box::new(PanicOnceBot::new()),
        Duration::from_secs(5),
    );
    assert_eq!(proxy.get_action(request(40), &ctx(40)), Action::Call(40));
    assert_eq!(proxy.fault_count(), 1);

    // Second call reaches the agent despite the poisoned first attempt.
    assert_eq!(proxy.get_action(request(40), &ctx(40)), Action::Call(40));
    assert_eq!(proxy.fault_count(), 1, "clean answer must not count as a fault");
}

#[test]
fn hung_agent_costs_at_most_the_timeout() {
    let mut proxy = PlayerProxy::new(
        3,
        "sleepy".into(),
        Box::new(SleepyBot {
            delay: Duration::from_secs(30),
        }),
        Duration::from_millis(100),
    );
    let started = Instant::now();
    let action = proxy.get_action(request(40), &ctx(40));
    let elapsed = started.elapsed();

    assert_eq!(action, Action::Call(40), "timeout defaults to a call");
    assert_eq!(proxy.fault_count(), 1);
    assert!(
        elapsed < Duration::from_secs(5),
        "engine blocked for {:?}, the timeout is 100ms",
        elapsed
    );
}

#[test]
fn notifications_swallow_faults() {
    let mut proxy = PlayerProxy::new(
        4,
        "bomb".into(),
        Box::new(PanicBot),
        Duration::from_secs(5),
    );
    // PanicBot only panics in get_action; default notification bodies are
    // no-ops, so this must not fault.
    proxy.see_board_card(0, "Ah".parse().unwrap());
    assert_eq!(proxy.fault_count(), 0);
}
