//! The `cfg` command: print the resolved configuration as JSON, each value
//! tagged with its source (default, file or environment).

use std::io::Write;

use crate::config;
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            writeln!(err, "Invalid configuration: {}", e)?;
            return Err(CliError::Config(e.to_string()));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_stack": {
            "value": config.starting_stack,
            "source": sources.starting_stack,
        },
        "small_blind": {
            "value": config.small_blind,
            "source": sources.small_blind,
        },
        "big_blind": {
            "value": config.big_blind,
            "source": sources.big_blind,
        },
        "decision_timeout_ms": {
            "value": config.decision_timeout_ms,
            "source": sources.decision_timeout_ms,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "shuffle_seats": {
            "value": config.shuffle_seats,
            "source": sources.shuffle_seats,
        },
    });
    let rendered = serde_json::to_string_pretty(&display)
        .map_err(|e| CliError::Config(e.to_string()))?;
    writeln!(out, "{}", rendered)?;
    Ok(())
}
