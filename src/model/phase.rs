use serde::{Deserialize, Serialize};

/// Identifies the discussion a timer tick belongs to. A tick whose token
/// does not match the running discussion is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickToken(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    Setup,
    Rules,
    MasterReveal,
    TopicSetup,
    MasterRoleReveal,
    RoleReveal {
        /// Position in the non-master players, in id order
        index: usize,
        visible: bool,
    },
    DiscussionPrep,
    Discussion {
        token: TickToken,
    },
    Vote,
    Result,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::Rules => "rules",
            Phase::MasterReveal => "master_reveal",
            Phase::TopicSetup => "topic_setup",
            Phase::MasterRoleReveal => "master_role_reveal",
            Phase::RoleReveal { .. } => "role_reveal",
            Phase::DiscussionPrep => "discussion_prep",
            Phase::Discussion { .. } => "discussion",
            Phase::Vote => "vote",
            Phase::Result => "result",
        }
    }

    pub fn is_discussion(&self) -> bool {
        matches!(self, Phase::Discussion { .. })
    }

    /// Phases that belong to a running game (restart is meaningful).
    pub fn in_game(&self) -> bool {
        !matches!(self, Phase::Setup | Phase::Rules)
    }
}

/// Why the discussion ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EndReason {
    TimeUp,
    QuestionsUp,
    Solved,
}
