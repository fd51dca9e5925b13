use serde::{Deserialize, Serialize};

use crate::model::discussion::{mark_counts, DiscussionLogEntry, MarkCounts};
use crate::model::phase::{EndReason, Phase};
use crate::model::player::{Player, PlayerId};
use crate::model::settings::GameSettings;
use crate::model::verdict::VoteOutcome;

/// A full snapshot of the game sent to the UI.
/// This is READ-ONLY outside the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub settings: GameSettings,

    pub players: Vec<Player>,
    pub secret_topic: String,

    pub time_left: u32,
    pub questions_left: u32,
    pub discussion_log: Vec<DiscussionLogEntry>,

    pub ended_by: Option<EndReason>,
    /// Players that may be chosen on the vote screen
    pub candidates: Vec<PlayerId>,
    pub voted_player_id: Option<PlayerId>,
    pub verdict: Option<VoteOutcome>,
}

impl GameSnapshot {
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn master(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_master)
    }

    pub fn non_master_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| !p.is_master)
    }

    /// Player currently holding the device during the role reveal loop.
    pub fn reveal_target(&self) -> Option<&Player> {
        match self.phase {
            Phase::RoleReveal { index, .. } => self.non_master_players().nth(index),
            _ => None,
        }
    }

    /// Topic as seen by `player`: Seekers only get a mask.
    pub fn topic_for(&self, player: &Player) -> &str {
        if player.role.knows_topic() {
            &self.secret_topic
        } else {
            "???"
        }
    }

    pub fn counts_for(&self, id: PlayerId) -> MarkCounts {
        mark_counts(&self.discussion_log, id)
    }

    pub fn formatted_time_left(&self) -> String {
        format_clock(self.time_left)
    }
}

pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
