pub mod engine;
pub mod machine;
pub mod protocol;
pub mod roles;
pub mod timer;
pub mod vote;
