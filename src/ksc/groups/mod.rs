//! Groups module - list administration groups

mod api;
mod commands;
mod models;

pub use commands::run_groups_command;
pub use models::Group;
