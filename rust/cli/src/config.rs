//! Layered configuration: built-in defaults, then an optional TOML file
//! named by `ARENA_CONFIG`, then individual environment overrides. Every
//! resolved value remembers where it came from so `arena cfg` can report
//! the provenance.

use serde::{Deserialize, Serialize};
use std::fs;

use arena_engine::settings::GameSettings;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub decision_timeout_ms: u64,
    pub max_raises_per_round: Option<u8>,
    pub double_blinds_every: Option<u64>,
    pub seed: Option<u64>,
    pub shuffle_seats: bool,
}

impl Default for Config {
    fn default() -> Self {
        let s = GameSettings::default();
        Self {
            starting_stack: s.starting_stack,
            small_blind: s.small_blind,
            big_blind: s.big_blind,
            decision_timeout_ms: s.decision_timeout_ms,
            max_raises_per_round: s.max_raises_per_round,
            double_blinds_every: s.double_blinds_every,
            seed: s.seed,
            shuffle_seats: s.shuffle_seats,
        }
    }
}

impl Config {
    /// Engine settings with this configuration applied. `max_hands` stays
    /// a per-command concern.
    pub fn to_settings(&self) -> GameSettings {
        GameSettings {
            starting_stack: self.starting_stack,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            max_raises_per_round: self.max_raises_per_round,
            max_hands: None,
            double_blinds_every: self.double_blinds_every,
            decision_timeout_ms: self.decision_timeout_ms,
            seed: self.seed,
            shuffle_seats: self.shuffle_seats,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub decision_timeout_ms: ValueSource,
    pub seed: ValueSource,
    pub shuffle_seats: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            decision_timeout_ms: ValueSource::Default,
            seed: ValueSource::Default,
            shuffle_seats: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "io: {}", e),
            ConfigError::Parse(e) => write!(f, "parse: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid: {}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("ARENA_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.decision_timeout_ms {
            cfg.decision_timeout_ms = v;
            sources.decision_timeout_ms = ValueSource::File;
        }
        if let Some(v) = f.max_raises_per_round {
            cfg.max_raises_per_round = Some(v);
        }
        if let Some(v) = f.double_blinds_every {
            cfg.double_blinds_every = Some(v);
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.shuffle_seats {
            cfg.shuffle_seats = v;
            sources.shuffle_seats = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("ARENA_SEED")
        && !seed.is_empty()
    {
        let parsed = seed
            .parse::<u64>()
            .map_err(|_| ConfigError::Invalid(format!("ARENA_SEED must be a u64, got {:?}", seed)))?;
        cfg.seed = Some(parsed);
        sources.seed = ValueSource::Env;
    }
    if let Ok(stack) = std::env::var("ARENA_STACK")
        && !stack.is_empty()
    {
        let parsed = stack.parse::<u32>().map_err(|_| {
            ConfigError::Invalid(format!("ARENA_STACK must be a u32, got {:?}", stack))
        })?;
        cfg.starting_stack = parsed;
        sources.starting_stack = ValueSource::Env;
    }
    if let Ok(timeout) = std::env::var("ARENA_TIMEOUT_MS")
        && !timeout.is_empty()
    {
        let parsed = timeout.parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "ARENA_TIMEOUT_MS must be a u64, got {:?}",
                timeout
            ))
        })?;
        cfg.decision_timeout_ms = parsed;
        sources.decision_timeout_ms = ValueSource::Env;
    }

    cfg.to_settings()
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

/// Shape of the optional TOML file; every field may be omitted.
#[derive(Debug, Deserialize)]
struct FileConfig {
    starting_stack: Option<u32>,
    small_blind: Option<u32>,
    big_blind: Option<u32>,
    decision_timeout_ms: Option<u64>,
    max_raises_per_round: Option<u8>,
    double_blinds_every: Option<u64>,
    seed: Option<u64>,
    shuffle_seats: Option<bool>,
}
