//! The `eval` command: play many games between the same lineup and
//! compare how the bots fare.

use std::io::Write;

use crate::commands::build_lineup;
use crate::config;
use crate::error::CliError;
use arena_engine::engine::Game;

#[derive(Debug, Clone, Default)]
struct SeatStats {
    wins: u64,
    total_final_stack: u64,
}

pub fn handle_eval_command(
    bots: &[String],
    games: u64,
    hands_per_game: u64,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        return Err(CliError::InvalidInput("games must be > 0".into()));
    }
    let cfg = match config::load() {
        Ok(c) => c,
        Err(e) => {
            writeln!(err, "Invalid configuration: {}", e)?;
            return Err(CliError::Config(e.to_string()));
        }
    };

    let mut stats = vec![SeatStats::default(); bots.len()];
    let mut draws = 0u64;
    let base_seed = seed.or(cfg.seed);

    for game_index in 0..games {
        let mut settings = cfg.to_settings();
        settings.max_hands = Some(hands_per_game);
        settings.seed = base_seed.map(|s| s.wrapping_add(game_index));
        // Seats stay fixed so seat index identifies the bot kind.
        settings.shuffle_seats = false;

        let lineup = build_lineup(bots)?;
        let mut game = Game::new(lineup, settings)?;
        let summary = game.run(None)?;

        match summary.winner {
            Some(id) => stats[id].wins += 1,
            None => draws += 1,
        }
        for s in &summary.standings {
            stats[s.id].total_final_stack += u64::from(s.stack);
        }
    }

    writeln!(out, "games: {}  (draws: {})", games, draws)?;
    writeln!(
        out,
        "{:<4} {:<12} {:>6} {:>8} {:>12}",
        "seat", "bot", "wins", "win%", "avg stack"
    )?;
    for (seat, kind) in bots.iter().enumerate() {
        let s = &stats[seat];
        writeln!(
            out,
            "{:<4} {:<12} {:>6} {:>7.1}% {:>12.1}",
            seat,
            kind,
            s.wins,
            (s.wins as f64 / games as f64) * 100.0,
            s.total_final_stack as f64 / games as f64,
        )?;
    }
    Ok(())
}
