use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::game::{Game, Resolution};

/// A single transition of a game, in the order it happened.
/// Hands are carried in full so each event can be rendered on its own.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// Opening hands are out. Only the dealer's first card is public.
    Dealt {
        player: Vec<Rank>,
        player_total: u16,
        dealer_up: Rank,
    },
    PlayerHit {
        card: Rank,
        hand: Vec<Rank>,
        total: u16,
    },
    PlayerStood {
        hand: Vec<Rank>,
        total: u16,
    },
    /// The dealer's turn begins and the hidden card is turned over.
    DealerRevealed {
        hand: Vec<Rank>,
        total: u16,
    },
    DealerHit {
        card: Rank,
        hand: Vec<Rank>,
        total: u16,
    },
    DealerStood {
        hand: Vec<Rank>,
        total: u16,
    },
    /// Final state of both hands. The dealer's hidden card is included even
    /// when the dealer never played.
    Resolved {
        resolution: Resolution,
        player: Vec<Rank>,
        player_total: u16,
        dealer: Vec<Rank>,
        dealer_total: u16,
    },
}

/// Complete record of one game, serialized as a JSON line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// Deck seed, absent for stacked decks
    pub seed: Option<u64>,
    pub player: Vec<Rank>,
    pub dealer: Vec<Rank>,
    pub events: Vec<GameEvent>,
    /// Present once the game has been played to the end
    pub resolution: Option<Resolution>,
    /// Timestamp when the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl GameRecord {
    pub fn from_game(game_id: String, game: &Game) -> Self {
        Self {
            game_id,
            seed: game.seed(),
            player: game.player().ranks(),
            dealer: game.dealer().ranks(),
            events: game.events().to_vec(),
            resolution: game.resolution(),
            ts: None,
        }
    }
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::io::Write;

/// Writes [`GameRecord`]s as JSON lines and hands out sequential game ids.
pub struct RecordWriter<W: Write> {
    writer: W,
    date: String,
    seq: u32,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        }
    }

    pub fn with_date(writer: W, date: &str) -> Self {
        Self {
            writer,
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
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
