use serde::{Deserialize, Serialize};

use crate::agent::Stage;
use crate::cards::Card;
use crate::hand::Hand;
use crate::player::PlayerId;
use crate::rules::Action;

/// One applied action, in the order it happened.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player_id: PlayerId,
    pub stage: Stage,
    pub action: Action,
}

/// Hole cards and best hand a player revealed at showdown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RevealedHand {
    pub player_id: PlayerId,
    pub hole: [Card; 2],
    pub hand: Hand,
}

/// Showdown outcome: who revealed what, and who took chips.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    pub winners: Vec<PlayerId>,
    pub revealed: Vec<RevealedHand>,
}

/// Complete audit record of one hand, serialized to JSONL. Write-only side
/// channel: nothing in the engine reads these back.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Format: YYYYMMDD-NNNNNN.
    pub hand_id: String,
    pub hand_num: u64,
    /// Master RNG seed, for deterministic replay.
    pub seed: Option<u64>,
    pub small_blind: u32,
    pub big_blind: u32,
    pub actions: Vec<ActionRecord>,
    pub board: Vec<Card>,
    /// Size of each pot (main first) just before distribution.
    pub pots: Vec<u32>,
    pub winnings: Vec<(PlayerId, u32)>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
    /// RFC3339 timestamp, injected at write time when missing.
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u64) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u64,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger that assigns ids but writes nowhere.
    pub fn sink(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_ids_are_sequential() {
        let mut logger = HandLogger::sink("20260823");
        assert_eq!(logger.next_id(), "20260823-000001");
        assert_eq!(logger.next_id(), "20260823-000002");
    }
}
