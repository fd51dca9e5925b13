use serde::{Deserialize, Serialize};

use crate::model::player::PlayerId;

/// Answer recorded against a player's question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    /// Affirmative
    O,
    /// Negative
    X,
    /// Unknown
    Question,
}

impl Mark {
    pub const ALL: [Mark; 3] = [Mark::O, Mark::X, Mark::Question];

    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::O => "O",
            Mark::X => "X",
            Mark::Question => "?",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscussionLogEntry {
    pub player_id: PlayerId,
    pub mark: Mark,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkCounts {
    pub o: u32,
    pub x: u32,
    pub question: u32,
}

impl MarkCounts {
    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::O => self.o,
            Mark::X => self.x,
            Mark::Question => self.question,
        }
    }
}

pub fn mark_counts(log: &[DiscussionLogEntry], player_id: PlayerId) -> MarkCounts {
    log.iter()
        .filter(|entry| entry.player_id == player_id)
        .fold(MarkCounts::default(), |mut counts, entry| {
            match entry.mark {
                Mark::O => counts.o += 1,
                Mark::X => counts.x += 1,
                Mark::Question => counts.question += 1,
            }
            counts
        })
}
