//! Host command handlers

use log::debug;

use crate::cli::{Cli, HostArgs};
use crate::error::Result;
use crate::ksc::traits::InventoryRecord;
use crate::ksc::KscClient;
use crate::output::output_hosts;
use crate::ui::{create_spinner, finish_spinner};

/// Run the host list command
pub async fn run_hosts_command(client: &KscClient, args: &HostArgs, cli: &Cli) -> Result<()> {
    let message = match args.group {
        Some(id) => format!("Fetching hosts of group {}...", id),
        None => "Fetching hosts of all groups...".to_string(),
    };
    let spinner = create_spinner(&message, cli.batch);
    let result = client.list_hosts(args.group).await;
    finish_spinner(spinner);

    let mut hosts = result?;

    if let Some(filter) = &args.filter {
        hosts.retain(|host| host.matches_filter(filter));
        debug!("Filtered to {} hosts matching '{}'", hosts.len(), filter);
    }

    if hosts.is_empty() {
        match (args.group, &args.filter) {
            (_, Some(_)) => eprintln!("No hosts found matching filter"),
            (Some(id), None) => eprintln!("No hosts found in group {}", id),
            (None, None) => eprintln!("No hosts found"),
        }
        return Ok(());
    }

    output_hosts(&hosts, args.output, cli.no_header);
    Ok(())
}
