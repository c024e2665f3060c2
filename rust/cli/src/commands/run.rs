//! The `run` command: one full game between the named bots, with an
//! optional JSONL hand history.

use std::io::Write;
use std::path::Path;

use crate::commands::build_lineup;
use crate::config;
use crate::error::CliError;
use arena_engine::engine::Game;
use arena_engine::logger::HandLogger;

pub fn handle_run_command(
    bots: &[String],
    hands: Option<u64>,
    seed: Option<u64>,
    output: Option<&Path>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = match config::load() {
        Ok(c) => c,
        Err(e) => {
            writeln!(err, "Invalid configuration: {}", e)?;
            return Err(CliError::Config(e.to_string()));
        }
    };
    let mut settings = cfg.to_settings();
    settings.max_hands = hands;
    if seed.is_some() {
        settings.seed = seed;
    }

    let lineup = build_lineup(bots)?;
    let mut game = Game::new(lineup, settings)?;

    let mut logger = match output {
        Some(path) => Some(HandLogger::create(path).map_err(CliError::Io)?),
        None => None,
    };

    writeln!(out, "seed: {}", game.seed())?;
    let summary = game.run(logger.as_mut())?;

    writeln!(out, "hands played: {}", summary.hands_played)?;
    match summary.winner {
        Some(id) => {
            let name = summary
                .standings
                .iter()
                .find(|s| s.id == id)
                .map(|s| s.name.as_str())
                .unwrap_or("?");
            writeln!(out, "winner: {} (seat {})", name, id)?;
        }
        None => writeln!(out, "winner: none (hand cap reached)")?,
    }
    writeln!(out, "standings:")?;
    for s in &summary.standings {
        writeln!(
            out,
            "  seat {:>2}  {:<16} {:>10} chips{}",
            s.id,
            s.name,
            s.stack,
            if s.alive { "" } else { "  (busted)" }
        )?;
    }
    let faulted: Vec<_> = summary
        .agent_faults
        .iter()
        .filter(|&&(_, n)| n > 0)
        .collect();
    if !faulted.is_empty() {
        writeln!(out, "agent faults:")?;
        for &(id, n) in faulted {
            writeln!(out, "  seat {:>2}  {} recovered fault(s)", id, n)?;
        }
    }
    if let Some(path) = output {
        writeln!(out, "hand history: {}", path.display())?;
    }
    Ok(())
}
