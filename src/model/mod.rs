pub mod action_result;
pub mod discussion;
pub mod game_state;
pub mod phase;
pub mod player;
pub mod settings;
pub mod verdict;
