pub mod app;
pub mod discussion_panel;
pub mod reveal_panel;
pub mod settings;
pub mod settings_io;
pub mod setup_panel;
pub mod vote_panel;
