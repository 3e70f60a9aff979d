//! KSC Open API client module
//!
//! Session login, chunk accessor pagination and the group/host listings
//! built on top of them.

mod accessor;
mod client;
mod credentials;
pub mod groups;
pub mod hosts;
pub mod traits;

pub use client::{ClientConfig, KscClient};
pub use credentials::Credentials;
pub use groups::{run_groups_command, Group};
pub use hosts::{group_filter, run_hosts_command, Host};
pub use traits::InventoryRecord;
