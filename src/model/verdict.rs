use serde::{Deserialize, Serialize};

use crate::model::player::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Seekers,
    Saboteur,
}

impl Winner {
    pub fn label(&self) -> &'static str {
        match self {
            Winner::Seekers => "Seekers win!",
            Winner::Saboteur => "Saboteur wins!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteOutcome {
    pub winner: Winner,
    pub label: String,
    pub message: String,
    pub voted_player_id: PlayerId,
}
