//! Hosts module - list managed hosts per group

mod api;
mod commands;
mod models;

pub use api::group_filter;
pub use commands::run_hosts_command;
pub use models::Host;
