use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::GameOutcome;

/// One step taken while resolving a turn.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnEvent {
    /// Lost the turn to an active eight
    Skipped,
    /// Paid for a sevens chain
    PenaltyDraw { count: usize },
    /// Single forced draw because nothing matched
    Drew,
    /// Still nothing to play after the forced draw
    Passed,
    Played { card: Card },
    Won,
    Aborted,
}

/// Records everything that happened in a single turn.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn number
    pub turn: u32,
    /// Seat index of the acting player
    pub player: usize,
    pub events: Vec<TurnEvent>,
}

impl TurnRecord {
    pub fn played(&self) -> Option<Card> {
        self.events.iter().find_map(|e| match e {
            TurnEvent::Played { card } => Some(*card),
            _ => None,
        })
    }
}

/// Complete record of a game, serialized as one JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// RNG seed used for shuffling (enables deterministic re-runs)
    pub seed: u64,
    pub players: Vec<String>,
    /// Card turned up before the first turn
    pub opening: Option<Card>,
    pub turns: Vec<TurnRecord>,
    pub outcome: Option<GameOutcome>,
    /// Timestamp when the game was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        // inject timestamp if missing
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
