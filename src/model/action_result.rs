use serde::{Deserialize, Serialize};

use crate::model::phase::TickToken;

/// What the engine has to do with the discussion ticker after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerEffect {
    None,
    Start(TickToken),
    Stop,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Applied(TimerEffect),
    /// Guard failed; state untouched and the user should be told why.
    Rejected { reason: String },
    /// Harmless no-op (stale tick, mark with no budget left).
    Ignored { reason: String },
}

impl ActionOutcome {
    pub fn applied() -> Self {
        ActionOutcome::Applied(TimerEffect::None)
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        ActionOutcome::Rejected { reason: reason.into() }
    }

    pub fn ignored(reason: impl Into<String>) -> Self {
        ActionOutcome::Ignored { reason: reason.into() }
    }

    #[cfg(test)]
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied(_))
    }
}
