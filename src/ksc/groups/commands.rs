//! Group command handlers

use log::debug;

use crate::cli::{Cli, GroupArgs};
use crate::error::Result;
use crate::ksc::traits::InventoryRecord;
use crate::ksc::KscClient;
use crate::output::output_groups;
use crate::ui::{create_spinner, finish_spinner};

/// Run the group list command
pub async fn run_groups_command(client: &KscClient, args: &GroupArgs, cli: &Cli) -> Result<()> {
    let spinner = create_spinner("Fetching administration groups...", cli.batch);
    let result = client.list_groups().await;
    finish_spinner(spinner);

    let mut groups = result?;
    debug!("Fetched {} groups", groups.len());

    if let Some(filter) = &args.filter {
        groups.retain(|group| group.matches_filter(filter));
        debug!("Filtered to {} groups matching '{}'", groups.len(), filter);
    }

    if groups.is_empty() {
        if args.filter.is_some() {
            eprintln!("No groups found matching filter");
        } else {
            eprintln!("No groups found");
        }
        return Ok(());
    }

    output_groups(&groups, args.output, cli.no_header);
    Ok(())
}
