//! ksc-inventory - host and group inventory from Kaspersky Security Center
//!
//! A client for the KSC Open API (`/api/v1.0`) plus a small CLI on top.
//!
//! # Features
//!
//! - KSCBasic session login
//! - Administration group listing
//! - Host listing for one group or for every group
//! - Chunk accessor pagination
//! - Table, CSV, JSON and YAML output
//!
//! # Example
//!
//! ```no_run
//! use ksc_inventory::{ClientConfig, KscClient};
//!
//! # async fn example() -> ksc_inventory::Result<()> {
//! let config = ClientConfig::new()
//!     .server("https://ksc.corp.local")
//!     .user("operator")
//!     .password("secret")
//!     .accept_invalid_certs(true);
//!
//! let client = KscClient::connect(config).await?;
//! let groups = client.list_groups().await?;
//! if let Some(id) = groups.first().and_then(|group| group.id()) {
//!     let hosts = client.list_hosts(Some(id)).await?;
//!     println!("{} hosts in group {}", hosts.len(), id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod ksc;
pub mod output;
pub mod ui;

pub use cli::{Cli, Command, GroupArgs, HostArgs, OutputFormat};
pub use error::{KscError, Result};
pub use ksc::{
    run_groups_command, run_hosts_command, ClientConfig, Credentials, Group, Host,
    InventoryRecord, KscClient,
};
