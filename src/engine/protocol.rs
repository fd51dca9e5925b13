use crate::engine::machine::Action;
use crate::model::game_state::GameSnapshot;

pub enum EngineCommand {
    Act(Action),
    Shutdown,
}

pub enum EngineResponse {
    Snapshot(GameSnapshot),

    /// A guarded action was refused; shown to the user as a notice.
    Rejected {
        action: &'static str,
        reason: String,
    },
}
