use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::game::Phase;
use crate::player::PlayerAction;
use crate::pot::{Pot, PotAward};

/// Something that happened at the table, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    PlayerJoined {
        seat: usize,
        name: String,
    },
    PlayerReady {
        seat: usize,
        ready: bool,
    },
    PhaseChanged {
        from: Phase,
        to: Phase,
    },
    HoleCardsDealt {
        seat: usize,
        cards: Vec<Card>,
    },
    CommunityDealt {
        cards: Vec<Card>,
    },
    BlindPosted {
        seat: usize,
        amount: u32,
        big: bool,
    },
    ActionTaken {
        seat: usize,
        action: PlayerAction,
        /// Bet and stack after the action
        bet: u32,
        stack: u32,
    },
    PotsSettled {
        pots: Vec<Pot>,
    },
    UncontestedWin {
        seat: usize,
        amount: u32,
    },
    PotAwarded {
        award: PotAward,
    },
    FinalBalances {
        stacks: Vec<(String, u32)>,
    },
}

/// A [`GameEvent`] stamped with its position in the log and when it was
/// recorded (RFC3339, UTC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub seq: u64,
    pub ts: String,
    #[serde(flatten)]
    pub event: GameEvent,
}

/// Append-only buffer of game events waiting for a renderer.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    records: Vec<EventRecord>,
    next_seq: u64,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.next_seq += 1;
        debug!(seq = self.next_seq, ?event, "game event");
        self.records.push(EventRecord {
            seq: self.next_seq,
            ts: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            event,
        });
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Hands the buffered records over; sequence numbers keep counting.
    pub fn drain(&mut self) -> Vec<EventRecord> {
        std::mem::take(&mut self.records)
    }

    /// One JSON object per line, oldest first.
    pub fn to_json_lines(&self) -> serde_json::Result<String> {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&serde_json::to_string(record)?);
            out.push('\n');
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_survives_drain() {
        let mut log = EventLog::new();
        log.push(GameEvent::PlayerJoined {
            seat: 0,
            name: "alice".into(),
        });
        log.push(GameEvent::PlayerReady {
            seat: 0,
            ready: true,
        });
        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert!(log.is_empty());
        log.push(GameEvent::CommunityDealt { cards: vec![] });
        assert_eq!(log.records()[0].seq, 3);
    }

    #[test]
    fn json_lines_carry_type_tag_and_timestamp() {
        let mut log = EventLog::new();
        log.push(GameEvent::UncontestedWin {
            seat: 1,
            amount: 75,
        });
        let text = log.to_json_lines().unwrap();
        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["type"], "uncontested_win");
        assert_eq!(value["seq"], 1);
        assert_eq!(value["amount"], 75);
        assert!(value["ts"].as_str().unwrap().ends_with('Z'));
    }
}
