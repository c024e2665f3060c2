//! Command handler modules.
//!
//! One module per subcommand, each exposing a single
//! `handle_COMMAND_command(...) -> Result<(), CliError>` function that
//! writes to injected output streams.

mod cfg;
mod eval;
mod run;

pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use run::handle_run_command;

use crate::error::CliError;
use arena_bots::create_bot;
use arena_engine::agent::Agent;

/// Build the named bots, one seat per kind string in order. Seat names are
/// `kind-N` so duplicate kinds stay distinguishable in output.
pub(crate) fn build_lineup(
    kinds: &[String],
) -> Result<Vec<(String, Box<dyn Agent + Send>)>, CliError> {
    if !(2..=10).contains(&kinds.len()) {
        return Err(CliError::InvalidInput(format!(
            "need 2 to 10 bots, got {}",
            kinds.len()
        )));
    }
    kinds
        .iter()
        .enumerate()
        .map(|(seat, kind)| {
            let bot = create_bot(kind).map_err(|e| {
                CliError::InvalidInput(format!(
                    "{} (known kinds: {})",
                    e,
                    arena_bots::known_kinds().join(", ")
                ))
            })?;
            Ok((format!("{}-{}", kind, seat), bot))
        })
        .collect()
}
